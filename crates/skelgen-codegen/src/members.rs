//! Class-level fragments: the doc block and the members of the generated class.

use crate::defaults::{infer_default, property_type, NULL_DEFAULT};
use crate::fragment::{AttributesArgs, ClassCommentArgs, CssPropertiesArgs, EventsArgs};
use crate::writer::{escape_doc_comment, escape_template_literal, SourceWriter};

/// Prefix of the generated per-event dispatch methods.
pub const EVENT_METHOD_PREFIX: &str = "eventFunction";

/// Name of the method that dispatches `event_name`.
pub fn event_method_name(event_name: &str) -> String {
    format!("{EVENT_METHOD_PREFIX}{event_name}")
}

/// ` - description`, or nothing for an absent or empty description.
fn dash(description: Option<&str>) -> String {
    match description {
        Some(d) if !d.is_empty() => format!(" - {}", escape_doc_comment(d)),
        _ => String::new(),
    }
}

/// `classComment`: JSDoc block with description, `@slot` and `@cssprop` tags.
pub fn class_comment(args: &ClassCommentArgs<'_>) -> String {
    // FIXME: the whole block, description and slots included, is only written
    // for elements that declare CSS properties. Looks unintended; confirm
    // with the manifest owners before ungating it.
    let Some(css_properties) = args.css_properties else {
        return String::new();
    };

    let mut w = SourceWriter::new();
    w.line("/**");
    if let Some(description) = args.description.filter(|d| !d.is_empty()) {
        for line in escape_doc_comment(description).lines() {
            w.line(format!(" * {line}").trim_end());
        }
        w.line(" *");
    }
    for slot in args.slots.unwrap_or_default() {
        w.line(format!(" * @slot {}{}", slot.name, dash(slot.description.as_deref())));
    }
    for prop in css_properties {
        let tag = match &prop.default {
            Some(default) => format!("[{}={}]", prop.name, escape_doc_comment(default)),
            None => format!("[{}]", prop.name),
        };
        w.line(format!(" * @cssprop {tag}{}", dash(prop.description.as_deref())));
    }
    w.line(" */");
    w.finish()
}

/// `cssPropertiesMembers`: `static styles` declaring each property on `:host`.
pub fn css_properties_members(args: &CssPropertiesArgs<'_>) -> String {
    let Some(css_properties) = args.css_properties else {
        return String::new();
    };

    let mut w = SourceWriter::new();
    w.line("static styles = css`").indent();
    w.line("h1, h2 {").indent().line("margin: 0;").dedent().line("}");
    w.line("ul {").indent().line("margin: 0;").dedent().line("}");
    w.line(":host {").indent();
    for prop in css_properties {
        w.line(escape_template_literal(&format!(
            "{}: {};",
            prop.name,
            css_var(&prop.name, prop.default.as_deref())
        )));
    }
    w.dedent().line("}");
    w.dedent().line("`");
    w.finish()
}

/// `var(--name, default)`, or `var(--name)` without a default.
pub(crate) fn css_var(name: &str, default: Option<&str>) -> String {
    match default {
        Some(default) => format!("var({name}, {default})"),
        None => format!("var({name})"),
    }
}

/// `attributeMembers`: one decorated, initialized field per attribute.
pub fn attribute_members(args: &AttributesArgs<'_>) -> String {
    let Some(attributes) = args.attributes else {
        return String::new();
    };

    let mut w = SourceWriter::new();
    for (i, attr) in attributes.iter().enumerate() {
        if i > 0 {
            w.blank();
        }
        let type_text = attr.type_text();
        let initializer = infer_default(type_text, attr.default.as_ref()).unwrap_or_else(|e| {
            tracing::warn!(field = attr.field(), error = %e, "using null as field default");
            NULL_DEFAULT.to_string()
        });

        if let Some(description) = attr.description.as_deref().filter(|d| !d.is_empty()) {
            w.line(format!("/** {} */", escape_doc_comment(description)));
        }
        w.line(format!(
            "@property({{ type: {}, attribute: '{}' }})",
            property_type(type_text),
            attr.name
        ));
        w.line(format!("{} = {initializer}", attr.field()));
    }
    w.finish()
}

/// `eventsMembers`: one private dispatch method per event.
pub fn events_members(args: &EventsArgs<'_>) -> String {
    let Some(events) = args.events else {
        return String::new();
    };

    let mut w = SourceWriter::new();
    for (i, event) in events.iter().enumerate() {
        if i > 0 {
            w.blank();
        }
        let event_type = event.event_type();
        w.line(format!("/** Write function that dispatches the event {} */", event.name));
        w.line(format!("private {}() {{", event_method_name(&event.name)))
            .indent();
        w.line(format!(
            "/** @type {{{event_type}}}{} */",
            match event.description.as_deref() {
                Some(d) if !d.is_empty() => format!(" {}", escape_doc_comment(d)),
                _ => String::new(),
            }
        ));
        w.line(format!("this.dispatchEvent(new {event_type}('{}'))", event.name));
        w.dedent().line("}");
    }
    w.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use skelgen_manifest::{AttributeSpec, CssProperty, EventSpec, SlotSpec, TypeRef};

    fn css(name: &str, default: &str, description: &str) -> CssProperty {
        CssProperty {
            name: name.into(),
            default: Some(default.into()),
            description: Some(description.into()),
        }
    }

    fn attr(field: &str, type_text: &str) -> AttributeSpec {
        AttributeSpec {
            name: field.to_lowercase(),
            field_name: Some(field.into()),
            type_ref: Some(TypeRef::new(type_text)),
            default: None,
            description: None,
        }
    }

    // =========================================================================
    // classComment
    // =========================================================================

    #[test]
    fn test_class_comment_gated_on_css_properties() {
        let slots = vec![SlotSpec {
            name: "icon".into(),
            description: Some("Leading icon".into()),
        }];
        let out = class_comment(&ClassCommentArgs {
            css_properties: None,
            description: Some("A badge"),
            slots: Some(&slots),
        });
        assert_eq!(out, "");
    }

    #[test]
    fn test_class_comment_full() {
        let props = vec![css("--badge-color", "red", "Text colour")];
        let slots = vec![SlotSpec {
            name: "icon".into(),
            description: Some("Leading icon".into()),
        }];
        let out = class_comment(&ClassCommentArgs {
            css_properties: Some(&props),
            description: Some("A small badge."),
            slots: Some(&slots),
        });
        assert_eq!(
            out,
            "/**\n * A small badge.\n *\n * @slot icon - Leading icon\n * @cssprop [--badge-color=red] - Text colour\n */\n"
        );
    }

    #[test]
    fn test_class_comment_without_description_or_defaults() {
        let props = vec![CssProperty {
            name: "--gap".into(),
            default: None,
            description: None,
        }];
        let out = class_comment(&ClassCommentArgs {
            css_properties: Some(&props),
            description: None,
            slots: None,
        });
        assert_eq!(out, "/**\n * @cssprop [--gap]\n */\n");
    }

    #[test]
    fn test_class_comment_cannot_be_closed_by_manifest_text() {
        let props = vec![css("--gap", "4px */", "Spacing */ between items")];
        let slots = vec![SlotSpec {
            name: "icon".into(),
            description: Some("Icon */".into()),
        }];
        let out = class_comment(&ClassCommentArgs {
            css_properties: Some(&props),
            description: Some("Ends */ early"),
            slots: Some(&slots),
        });
        assert_eq!(
            out,
            "/**\n * Ends *\\/ early\n *\n * @slot icon - Icon *\\/\n * @cssprop [--gap=4px *\\/] - Spacing *\\/ between items\n */\n"
        );
        assert_eq!(out.matches("*/").count(), 1);
    }

    // =========================================================================
    // cssPropertiesMembers
    // =========================================================================

    #[test]
    fn test_css_members_absent() {
        assert_eq!(css_properties_members(&CssPropertiesArgs { css_properties: None }), "");
    }

    #[test]
    fn test_css_members_host_rule() {
        let props = vec![css("--badge-color", "red", ""), css("--badge-bg", "#fff", "")];
        let out = css_properties_members(&CssPropertiesArgs {
            css_properties: Some(&props),
        });
        assert!(out.starts_with("static styles = css`\n"));
        assert!(out.contains("  :host {\n    --badge-color: var(--badge-color, red);\n    --badge-bg: var(--badge-bg, #fff);\n  }\n"));
        assert!(out.ends_with("`\n"));
    }

    // =========================================================================
    // attributeMembers
    // =========================================================================

    #[test]
    fn test_attribute_members_absent() {
        assert_eq!(attribute_members(&AttributesArgs { attributes: None }), "");
    }

    #[test]
    fn test_attribute_member_string() {
        let attrs = vec![attr("label", "string")];
        let out = attribute_members(&AttributesArgs {
            attributes: Some(&attrs),
        });
        assert_eq!(
            out,
            "@property({ type: String, attribute: 'label' })\nlabel = ''\n"
        );
    }

    #[test]
    fn test_attribute_member_binds_markup_name() {
        let mut a = attr("labelText", "string");
        a.name = "label-text".into();
        a.description = Some("Text shown in the badge".into());
        a.default = Some(json!("'New'"));
        let attrs = vec![a];
        let out = attribute_members(&AttributesArgs {
            attributes: Some(&attrs),
        });
        assert_eq!(
            out,
            "/** Text shown in the badge */\n@property({ type: String, attribute: 'label-text' })\nlabelText = 'New'\n"
        );
    }

    #[test]
    fn test_attribute_members_separated_by_blank_line() {
        let attrs = vec![attr("open", "boolean"), attr("count", "number")];
        let out = attribute_members(&AttributesArgs {
            attributes: Some(&attrs),
        });
        assert!(out.contains("open = false\n\n@property({ type: Number, attribute: 'count' })\ncount = 0\n"));
    }

    #[test]
    fn test_attribute_description_cannot_close_comment() {
        let mut a = attr("label", "string");
        a.description = Some("Shown as-is */ then code".into());
        let attrs = vec![a];
        let out = attribute_members(&AttributesArgs {
            attributes: Some(&attrs),
        });
        assert!(out.starts_with("/** Shown as-is *\\/ then code */\n"));
        assert_eq!(out.matches("*/").count(), 1);
    }

    #[test]
    fn test_attribute_any_and_unknown_are_null() {
        let attrs = vec![attr("data", "any"), attr("anchor", "HTMLElement")];
        let out = attribute_members(&AttributesArgs {
            attributes: Some(&attrs),
        });
        assert!(out.contains("@property({ type: Object, attribute: 'data' })\ndata = null\n"));
        assert!(out.contains("@property({ type: HTMLElement, attribute: 'anchor' })\nanchor = null\n"));
    }

    // =========================================================================
    // eventsMembers
    // =========================================================================

    #[test]
    fn test_events_members() {
        let events = vec![EventSpec {
            name: "change".into(),
            type_ref: Some(TypeRef::new("CustomEvent")),
            description: Some("Fired on change".into()),
        }];
        let out = events_members(&EventsArgs {
            events: Some(&events),
        });
        assert_eq!(
            out,
            "/** Write function that dispatches the event change */\nprivate eventFunctionchange() {\n  /** @type {CustomEvent} Fired on change */\n  this.dispatchEvent(new CustomEvent('change'))\n}\n"
        );
    }

    #[test]
    fn test_event_description_cannot_close_comment() {
        let events = vec![EventSpec {
            name: "close".into(),
            type_ref: None,
            description: Some("Fired */ on close".into()),
        }];
        let out = events_members(&EventsArgs {
            events: Some(&events),
        });
        assert!(out.contains("  /** @type {Event} Fired *\\/ on close */\n"));
    }

    #[test]
    fn test_events_members_absent() {
        assert_eq!(events_members(&EventsArgs { events: None }), "");
    }
}

//! Markup fragments placed inside the generated `render()` template.
//!
//! Everything here ends up inside an `html` tagged template literal, so
//! free text from the manifest is escaped for that context.

use crate::fragment::{AttributesArgs, CssPropertiesArgs, DescriptionArgs, EventsArgs, NameArgs, SlotsArgs};
use crate::members::{css_var, event_method_name};
use crate::writer::{escape_template_literal, SourceWriter};

/// Write `<h2>heading</h2>` and a `<ul>` holding one `<li>` per item.
fn list<T>(heading: &str, items: &[T], mut item: impl FnMut(&mut SourceWriter, &T)) -> String {
    let mut w = SourceWriter::new();
    w.line(format!("<h2>{heading}</h2>"));
    w.line("<ul>").indent();
    for entry in items {
        item(&mut w, entry);
    }
    w.dedent().line("</ul>");
    w.finish()
}

/// `nameRenderer`: heading with the class name and its tag.
pub fn name_renderer(args: &NameArgs<'_>) -> String {
    let tag = escape_template_literal(args.tag_name);
    format!(
        "<h1>{} - &lt;{tag}&gt;&lt;/{tag}&gt;</h1>\n",
        escape_template_literal(args.name)
    )
}

/// `descriptionRenderer`: the description paragraph.
pub fn description_renderer(args: &DescriptionArgs<'_>) -> String {
    match args.description {
        Some(d) if !d.is_empty() => format!("<p>{}</p>\n", escape_template_literal(d)),
        _ => String::new(),
    }
}

/// `cssPropertiesRenderer`: each property's live value next to its default.
pub fn css_properties_renderer(args: &CssPropertiesArgs<'_>) -> String {
    let Some(css_properties) = args.css_properties else {
        return String::new();
    };
    list("CSS variables", css_properties, |w, prop| {
        let default = prop.default.as_deref();
        w.line(format!(
            "<li><span style=\"color: {}\">current text-color: {} default value: {}</span></li>",
            escape_template_literal(&css_var(&prop.name, default)),
            escape_template_literal(&prop.name),
            escape_template_literal(default.unwrap_or("none"))
        ));
    })
}

/// `attributesRenderer`: `field = ${this.field}` per attribute.
pub fn attributes_renderer(args: &AttributesArgs<'_>) -> String {
    let Some(attributes) = args.attributes else {
        return String::new();
    };
    list("Attributes", attributes, |w, attr| {
        let field = attr.field();
        w.line(format!("<li>{field} = ${{this.{field}}}</li>"));
    })
}

/// `eventsRenderer`: a button per event wired to its dispatch method.
pub fn events_renderer(args: &EventsArgs<'_>) -> String {
    let Some(events) = args.events else {
        return String::new();
    };
    list("Events", events, |w, event| {
        w.line(format!(
            "<li><button @click=${{this.{}}}>trigger {}</button></li>",
            event_method_name(&event.name),
            escape_template_literal(&event.name)
        ));
    })
}

/// `slotRenderer`: a labelled placeholder per named slot.
pub fn slot_renderer(args: &SlotsArgs<'_>) -> String {
    let Some(slots) = args.slots else {
        return String::new();
    };
    list("Slots", slots, |w, slot| {
        let name = escape_template_literal(&slot.name);
        let label = match slot.description.as_deref() {
            Some(d) if !d.is_empty() => format!("Slot {name} ({}):", escape_template_literal(d)),
            _ => format!("Slot {name}:"),
        };
        w.line("<li>").indent();
        w.line(label);
        w.line(format!("<slot name=\"{name}\"></slot>"));
        w.dedent().line("</li>");
    })
}

//! Named fragments and the typed inputs each one renders from.
//!
//! Every fragment has exactly one argument struct. Built-in renderers and
//! overrides both receive that struct, so an override can only see what the
//! built-in sees. The structs serialize with manifest key names, which is
//! what template overrides use as their context.

use crate::CodegenError;
use serde::Serialize;
use skelgen_manifest::{AttributeSpec, CssProperty, Declaration, EventSpec, SlotSpec};
use std::fmt;

/// The eleven overridable fragments, in the order a class is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentName {
    ClassComment,
    CssPropertiesMembers,
    AttributeMembers,
    EventsMembers,
    NameRenderer,
    DescriptionRenderer,
    CssPropertiesRenderer,
    AttributesRenderer,
    EventsRenderer,
    SlotRenderer,
    CustomElement,
}

impl FragmentName {
    pub const ALL: [FragmentName; 11] = [
        FragmentName::ClassComment,
        FragmentName::CssPropertiesMembers,
        FragmentName::AttributeMembers,
        FragmentName::EventsMembers,
        FragmentName::NameRenderer,
        FragmentName::DescriptionRenderer,
        FragmentName::CssPropertiesRenderer,
        FragmentName::AttributesRenderer,
        FragmentName::EventsRenderer,
        FragmentName::SlotRenderer,
        FragmentName::CustomElement,
    ];

    /// Name used for override files.
    pub fn as_str(self) -> &'static str {
        match self {
            FragmentName::ClassComment => "classComment",
            FragmentName::CssPropertiesMembers => "cssPropertiesMembers",
            FragmentName::AttributeMembers => "attributeMembers",
            FragmentName::EventsMembers => "eventsMembers",
            FragmentName::NameRenderer => "nameRenderer",
            FragmentName::DescriptionRenderer => "descriptionRenderer",
            FragmentName::CssPropertiesRenderer => "cssPropertiesRenderer",
            FragmentName::AttributesRenderer => "attributesRenderer",
            FragmentName::EventsRenderer => "eventsRenderer",
            FragmentName::SlotRenderer => "slotRenderer",
            FragmentName::CustomElement => "customElement",
        }
    }
}

impl fmt::Display for FragmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A replacement renderer for one fragment.
///
/// Closures of the form `Fn(&Args) -> Result<String, CodegenError>`
/// implement this directly.
pub trait Fragment<A>: Send + Sync {
    fn render(&self, args: &A) -> Result<String, CodegenError>;
}

impl<A, F> Fragment<A> for F
where
    F: Fn(&A) -> Result<String, CodegenError> + Send + Sync,
{
    fn render(&self, args: &A) -> Result<String, CodegenError> {
        self(args)
    }
}

/// Input of `classComment`.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassCommentArgs<'a> {
    pub css_properties: Option<&'a [CssProperty]>,
    pub description: Option<&'a str>,
    pub slots: Option<&'a [SlotSpec]>,
}

/// Input of `cssPropertiesMembers` and `cssPropertiesRenderer`.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CssPropertiesArgs<'a> {
    pub css_properties: Option<&'a [CssProperty]>,
}

/// Input of `attributeMembers` and `attributesRenderer`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AttributesArgs<'a> {
    pub attributes: Option<&'a [AttributeSpec]>,
}

/// Input of `eventsMembers` and `eventsRenderer`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EventsArgs<'a> {
    pub events: Option<&'a [EventSpec]>,
}

/// Input of `nameRenderer`.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameArgs<'a> {
    pub name: &'a str,
    pub tag_name: &'a str,
}

/// Input of `descriptionRenderer`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DescriptionArgs<'a> {
    pub description: Option<&'a str>,
}

/// Input of `slotRenderer`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SlotsArgs<'a> {
    pub slots: Option<&'a [SlotSpec]>,
}

/// Input of `customElement`: the declaration plus the text of fragments 1-10.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CustomElementArgs<'a> {
    pub declaration: &'a Declaration,
    pub fragments: &'a RenderedFragments,
}

/// Rendered text of the ten inner fragments, each at column zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedFragments {
    pub class_comment: String,
    pub css_properties_members: String,
    pub attribute_members: String,
    pub events_members: String,
    pub name_renderer: String,
    pub description_renderer: String,
    pub css_properties_renderer: String,
    pub attributes_renderer: String,
    pub events_renderer: String,
    pub slot_renderer: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = FragmentName::ALL.iter().map(|n| n.as_str()).collect();
        assert_eq!(names.len(), 11);
    }

    #[test]
    fn test_display_uses_override_name() {
        assert_eq!(FragmentName::CssPropertiesMembers.to_string(), "cssPropertiesMembers");
        assert_eq!(FragmentName::CustomElement.to_string(), "customElement");
    }

    #[test]
    fn test_closure_is_a_fragment() {
        let upper = |args: &NameArgs<'_>| -> Result<String, CodegenError> {
            Ok(args.name.to_uppercase())
        };
        let args = NameArgs {
            name: "MyBadge",
            tag_name: "my-badge",
        };
        assert_eq!(upper.render(&args).unwrap(), "MYBADGE");
    }

    #[test]
    fn test_args_serialize_with_manifest_keys() {
        let args = NameArgs {
            name: "MyBadge",
            tag_name: "my-badge",
        };
        let value = serde_json::to_value(args).unwrap();
        assert_eq!(value["tagName"], "my-badge");
    }
}

//! Typed records for the parts of a Custom Elements Manifest that skelgen reads.
//!
//! Field names follow the manifest's camelCase keys in both directions, so a
//! record serialized back to JSON looks like the manifest entry it came from.
//! Unknown keys are ignored.

use serde::{Deserialize, Serialize};

/// One custom element declaration from a manifest module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Declaration {
    pub name: String,
    pub tag_name: String,
    #[serde(default)]
    pub superclass: Option<Superclass>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub css_properties: Option<Vec<CssProperty>>,
    #[serde(default)]
    pub attributes: Option<Vec<AttributeSpec>>,
    #[serde(default)]
    pub events: Option<Vec<EventSpec>>,
    #[serde(default)]
    pub slots: Option<Vec<SlotSpec>>,
}

impl Declaration {
    /// The package the declaration's base class is imported from, if known.
    pub fn superclass_package(&self) -> Option<&str> {
        self.superclass.as_ref()?.package.as_deref()
    }
}

/// Reference to the class a declaration extends.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Superclass {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub package: Option<String>,
    #[serde(default)]
    pub module: Option<String>,
}

/// A CSS custom property exposed by the element, e.g. `--badge-color`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CssProperty {
    pub name: String,
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A markup attribute, usually reflected to a class field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeSpec {
    pub name: String,
    #[serde(default)]
    pub field_name: Option<String>,
    #[serde(default, rename = "type")]
    pub type_ref: Option<TypeRef>,
    /// Raw manifest default. JSON `null` deserializes to `None`.
    #[serde(default)]
    pub default: Option<serde_json::Value>,
    #[serde(default)]
    pub description: Option<String>,
}

impl AttributeSpec {
    /// Class member name; attributes without a `fieldName` use their markup name.
    pub fn field(&self) -> &str {
        self.field_name.as_deref().unwrap_or(&self.name)
    }

    /// Declared type text. A missing type reads as `any`.
    pub fn type_text(&self) -> &str {
        self.type_ref.as_ref().map_or("any", |t| t.text.as_str())
    }
}

/// An event the element dispatches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSpec {
    pub name: String,
    #[serde(default, rename = "type")]
    pub type_ref: Option<TypeRef>,
    #[serde(default)]
    pub description: Option<String>,
}

impl EventSpec {
    /// Event class to construct; untyped events are plain `Event`s.
    pub fn event_type(&self) -> &str {
        self.type_ref.as_ref().map_or("Event", |t| t.text.as_str())
    }
}

/// A named content slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotSpec {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A type as written in the manifest (`{ "text": "string" }`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeRef {
    pub text: String,
}

impl TypeRef {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

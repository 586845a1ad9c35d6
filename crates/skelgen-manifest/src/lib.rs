//! skelgen manifest
//!
//! Reads a Custom Elements Manifest and selects the declarations that
//! describe custom elements. The manifest stays a `serde_json::Value` while
//! it is walked; only the selected declarations are turned into typed
//! [`Declaration`] records.
//!
//! ```
//! use skelgen_manifest::Manifest;
//!
//! let manifest = Manifest::from_json(r#"{ "modules": [] }"#).unwrap();
//! assert_eq!(manifest.custom_elements().unwrap().count(), 0);
//! ```

pub mod filter;
pub mod model;

pub use filter::{custom_elements, CustomElements};
pub use model::{AttributeSpec, CssProperty, Declaration, EventSpec, SlotSpec, Superclass, TypeRef};

/// Structural failure while reading or walking a manifest.
///
/// `path` is a JSON pointer to the offending location, or empty when the
/// document itself could not be parsed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Malformed manifest at '{path}': {message}")]
pub struct MalformedManifestError {
    pub path: String,
    pub message: String,
}

impl MalformedManifestError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Failure reported by [`CustomElements`] while walking declarations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WalkError {
    /// The manifest structure cannot be walked any further.
    #[error(transparent)]
    Malformed(#[from] MalformedManifestError),

    /// A custom element entry could not be read. Later entries are unaffected.
    #[error("Invalid declaration at '{path}': {message}")]
    InvalidDeclaration { path: String, message: String },
}

impl WalkError {
    /// JSON pointer to the offending location.
    pub fn path(&self) -> &str {
        match self {
            Self::Malformed(e) => &e.path,
            Self::InvalidDeclaration { path, .. } => path,
        }
    }

    /// Whether the walk has to stop here.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}

/// A parsed manifest document.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    pub root: serde_json::Value,
}

impl Manifest {
    /// Parse manifest text.
    pub fn from_json(source: &str) -> Result<Self, MalformedManifestError> {
        let root = serde_json::from_str(source)
            .map_err(|e| MalformedManifestError::new("", e.to_string()))?;
        Ok(Self { root })
    }

    /// Lazily walk the custom element declarations.
    pub fn custom_elements(&self) -> Result<CustomElements<'_>, MalformedManifestError> {
        filter::custom_elements(&self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_invalid() {
        let err = Manifest::from_json("{ modules: ").unwrap_err();
        assert_eq!(err.path, "");
        assert!(err.to_string().starts_with("Malformed manifest"));
    }

    #[test]
    fn test_from_json_walks_declarations() {
        let manifest = Manifest::from_json(
            r#"{
                "schemaVersion": "1.0.0",
                "modules": [{
                    "kind": "javascript-module",
                    "path": "src/my-badge.ts",
                    "declarations": [{
                        "kind": "class",
                        "name": "MyBadge",
                        "tagName": "my-badge",
                        "customElement": true,
                        "superclass": { "name": "LitElement", "package": "lit" }
                    }]
                }]
            }"#,
        )
        .unwrap();
        let decls = manifest.custom_elements().unwrap().collect_all().unwrap();
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].tag_name, "my-badge");
    }
}

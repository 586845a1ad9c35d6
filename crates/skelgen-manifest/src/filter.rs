//! Declaration filter.
//!
//! Walks `modules[*].declarations[*]` of a parsed manifest and yields the
//! entries flagged as custom elements. The walk is lazy: structural problems
//! in a later module surface only when the iterator reaches it.
//!
//! Routing by superclass package is left to the caller so this stage stays
//! framework-agnostic.
//!
//! A custom element entry that does not fit [`Declaration`] (for example an
//! abstract base class without `tagName`) is reported as
//! [`WalkError::InvalidDeclaration`] and the walk carries on.

use crate::model::Declaration;
use crate::{MalformedManifestError, WalkError};
use serde::Deserialize;
use serde_json::Value;

/// Start walking a manifest root.
///
/// Fails right away when `modules` is missing or not an array.
pub fn custom_elements(root: &Value) -> Result<CustomElements<'_>, MalformedManifestError> {
    let modules = root
        .get("modules")
        .ok_or_else(|| MalformedManifestError::new("/modules", "missing `modules`"))?
        .as_array()
        .ok_or_else(|| MalformedManifestError::new("/modules", "`modules` is not an array"))?;

    Ok(CustomElements {
        modules,
        module_index: 0,
        current: None,
        position: 0,
    })
}

/// JavaScript truthiness for a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Lazy iterator over custom element declarations.
pub struct CustomElements<'a> {
    modules: &'a [Value],
    module_index: usize,
    /// Index and declarations of the module being walked.
    current: Option<(usize, &'a [Value])>,
    position: usize,
}

impl<'a> CustomElements<'a> {
    /// Collect every declaration, stopping at the first failure of any kind.
    pub fn collect_all(self) -> Result<Vec<Declaration>, WalkError> {
        self.collect()
    }

    /// Move on to the next module, returning an error if its
    /// `declarations` field cannot be walked.
    fn enter_next_module(&mut self) -> Option<Result<(), MalformedManifestError>> {
        let index = self.module_index;
        let module = self.modules.get(index)?;
        self.module_index += 1;

        let path = format!("/modules/{index}/declarations");
        let declarations = match module.get("declarations") {
            Some(Value::Array(items)) => items.as_slice(),
            Some(_) => {
                return Some(Err(MalformedManifestError::new(
                    path,
                    "`declarations` is not an array",
                )))
            }
            None => {
                return Some(Err(MalformedManifestError::new(
                    path,
                    "missing `declarations`",
                )))
            }
        };

        self.current = Some((index, declarations));
        self.position = 0;
        Some(Ok(()))
    }
}

impl<'a> Iterator for CustomElements<'a> {
    type Item = Result<Declaration, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some((module, declarations)) = self.current else {
                if let Err(e) = self.enter_next_module()? {
                    return Some(Err(e.into()));
                }
                continue;
            };

            let Some(entry) = declarations.get(self.position) else {
                self.current = None;
                continue;
            };
            let path = format!("/modules/{module}/declarations/{}", self.position);
            self.position += 1;

            let flagged = entry.get("customElement").is_some_and(is_truthy);
            if !flagged {
                continue;
            }

            return Some(Declaration::deserialize(entry).map_err(|e| {
                WalkError::InvalidDeclaration {
                    path,
                    message: e.to_string(),
                }
            }));
        }
    }
}

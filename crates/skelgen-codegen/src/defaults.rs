//! Field initializers and `@property` types for generated attributes.

use crate::CodegenError;
use serde_json::Value;

/// Initializer used when nothing better can be inferred.
pub const NULL_DEFAULT: &str = "null";

/// Type spellings treated as "array of anything".
const ANY_ARRAY_TYPES: &[&str] = &["any[]", "Array<any>"];

/// Infer the initializer for a generated field from its declared type and
/// the raw manifest default.
///
/// An `Err` means the type is not one of the known primitives and no usable
/// default was given; callers fall back to [`NULL_DEFAULT`].
pub fn infer_default(type_text: &str, raw_default: Option<&Value>) -> Result<String, CodegenError> {
    let type_text = type_text.trim();
    if type_text == "any" {
        return Ok(NULL_DEFAULT.into());
    }

    if let Some(raw) = raw_default {
        if raw.as_str() != Some("undefined") {
            return Ok(stringify(raw).unwrap_or_else(|| NULL_DEFAULT.into()));
        }
    }

    match type_text {
        "object" => Ok(NULL_DEFAULT.into()),
        "number" => Ok("0".into()),
        "string" | "String" => Ok("''".into()),
        "boolean" => Ok("false".into()),
        t if ANY_ARRAY_TYPES.contains(&t) => Ok("[]".into()),
        _ => Err(CodegenError::DefaultValueInference {
            type_text: type_text.to_string(),
        }),
    }
}

/// Manifest defaults are source text already, so strings go through verbatim.
fn stringify(raw: &Value) -> Option<String> {
    match raw {
        Value::String(s) => Some(s.clone()),
        other => serde_json::to_string(other).ok(),
    }
}

/// Constructor named in `@property({ type: ... })`.
pub fn property_type(type_text: &str) -> String {
    let type_text = type_text.trim();
    if type_text == "any" {
        "Object".into()
    } else if ANY_ARRAY_TYPES.contains(&type_text) {
        "Array".into()
    } else {
        capitalize(type_text)
    }
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

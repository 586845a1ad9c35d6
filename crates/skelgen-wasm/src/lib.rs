//! WASM bindings for skelgen.
//!
//! Exposes `renderManifest()` to JavaScript via wasm-bindgen. Returns an
//! array of `{ name, tagName, source }` objects or throws on a malformed
//! manifest. Only the built-in fragments are available here.

use skelgen_codegen::{Generation, Renderer};
use skelgen_manifest::{Manifest, MalformedManifestError};
use wasm_bindgen::prelude::*;

/// Render every supported custom element in a manifest.
///
/// Returns a JS array of `{ name: string, tagName: string, source: string }`.
/// Throws a JS error if the manifest is not valid JSON or is structurally
/// malformed.
#[wasm_bindgen(js_name = renderManifest)]
pub fn render_manifest(manifest_json: &str) -> Result<JsValue, JsError> {
    let generation = native_generate(manifest_json).map_err(|e| JsError::new(&e.to_string()))?;

    let files = js_sys::Array::new();
    for file in generation.files {
        let obj = js_sys::Object::new();
        js_sys::Reflect::set(&obj, &"name".into(), &file.name.into())
            .map_err(|_| JsError::new("Failed to set name property"))?;
        js_sys::Reflect::set(&obj, &"tagName".into(), &file.tag_name.into())
            .map_err(|_| JsError::new("Failed to set tagName property"))?;
        js_sys::Reflect::set(&obj, &"source".into(), &file.source.into())
            .map_err(|_| JsError::new("Failed to set source property"))?;
        files.push(&obj);
    }

    Ok(files.into())
}

/// Get the generator version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn native_generate(manifest_json: &str) -> Result<Generation, MalformedManifestError> {
    let manifest = Manifest::from_json(manifest_json)?;
    skelgen_codegen::generate(&manifest, &Renderer::default())
}

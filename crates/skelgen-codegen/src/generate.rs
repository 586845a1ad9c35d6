//! Whole-manifest generation: filter, route by superclass, render.

use crate::{CodegenError, Renderer, OUTPUT_EXTENSION};
use skelgen_manifest::{MalformedManifestError, Manifest, WalkError};

/// Source generated for one declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFile {
    pub name: String,
    pub tag_name: String,
    pub source: String,
}

impl GeneratedFile {
    /// `<name>.ts`
    pub fn file_name(&self) -> String {
        format!("{}.{OUTPUT_EXTENSION}", self.name)
    }
}

/// Result of generating a whole manifest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Generation {
    pub files: Vec<GeneratedFile>,
    /// One entry per custom element that was not rendered.
    pub skipped: Vec<CodegenError>,
}

/// Render every supported custom element in the manifest.
///
/// Structural manifest errors abort the run; anything wrong with a single
/// declaration, including one that cannot be read, only skips that declaration.
pub fn generate(manifest: &Manifest, renderer: &Renderer) -> Result<Generation, MalformedManifestError> {
    let mut generation = Generation::default();

    for item in manifest.custom_elements()? {
        let decl = match item {
            Ok(decl) => decl,
            Err(WalkError::Malformed(e)) => return Err(e),
            Err(WalkError::InvalidDeclaration { path, message }) => {
                tracing::warn!("Skipping declaration at {path}: {message}");
                generation
                    .skipped
                    .push(CodegenError::MalformedDeclaration { path, message });
                continue;
            }
        };
        match renderer.render(&decl) {
            Ok(source) => {
                tracing::info!(
                    "Generating class {} with tag {}, based on {}",
                    decl.name,
                    decl.tag_name,
                    crate::SUPPORTED_PACKAGE
                );
                generation.files.push(GeneratedFile {
                    name: decl.name,
                    tag_name: decl.tag_name,
                    source,
                });
            }
            Err(e) => {
                tracing::warn!(
                    "Skipping {}, only {} is supported",
                    decl.name,
                    crate::SUPPORTED_PACKAGE
                );
                tracing::debug!("{e}");
                generation.skipped.push(e);
            }
        }
    }

    Ok(generation)
}

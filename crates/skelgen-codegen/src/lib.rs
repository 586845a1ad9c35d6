//! skelgen code generator
//!
//! Turns one custom element [`Declaration`] into the source of a Lit
//! component skeleton. The class is assembled from eleven named fragments;
//! any of them can be replaced through [`Overrides`], and every replacement
//! that is missing or fails falls back to the built-in renderer.
//!
//! ```text
//! Declaration → fragments 1-10 → customElement wrapper → TypeScript source
//! ```

pub mod defaults;
pub mod element;
pub mod fragment;
pub mod generate;
pub mod markup;
pub mod members;
pub mod overrides;
pub mod writer;

pub use fragment::{Fragment, FragmentName, RenderedFragments};
pub use generate::{generate, GeneratedFile, Generation};
pub use overrides::Overrides;

use fragment::{
    AttributesArgs, ClassCommentArgs, CssPropertiesArgs, CustomElementArgs, DescriptionArgs,
    EventsArgs, NameArgs, SlotsArgs,
};
use skelgen_manifest::Declaration;
use std::path::Path;

/// The only base-class package the built-in templates target.
pub const SUPPORTED_PACKAGE: &str = "lit";

/// File extension of generated sources.
pub const OUTPUT_EXTENSION: &str = "ts";

/// Code generation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CodegenError {
    /// The declaration does not extend a class from [`SUPPORTED_PACKAGE`].
    #[error("{name} extends a class from '{package}', only 'lit' is supported")]
    UnsupportedSuperclass { name: String, package: String },

    #[error("Cannot load override {fragment} from {path}: {message}")]
    OverrideLoad {
        fragment: FragmentName,
        path: String,
        message: String,
    },

    #[error("Override {fragment} failed: {message}")]
    OverrideRender {
        fragment: FragmentName,
        message: String,
    },

    /// A custom element entry in the manifest that could not be read.
    #[error("Invalid declaration at '{path}': {message}")]
    MalformedDeclaration { path: String, message: String },

    /// No default given and the type has no known empty value.
    #[error("Cannot infer a default value for type '{type_text}'")]
    DefaultValueInference { type_text: String },
}

/// Whether the declaration's superclass comes from [`SUPPORTED_PACKAGE`].
pub fn is_supported(decl: &Declaration) -> bool {
    decl.superclass_package() == Some(SUPPORTED_PACKAGE)
}

/// Render one declaration, loading overrides from `overrides_dir` if given.
///
/// Loads the directory on every call; use a [`Renderer`] to render many
/// declarations with the same overrides.
pub fn render(decl: &Declaration, overrides_dir: Option<&Path>) -> Result<String, CodegenError> {
    Renderer::with_overrides_dir(overrides_dir).render(decl)
}

/// Renders declarations with a fixed set of overrides.
///
/// Holds no mutable state, so one renderer can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    overrides: Overrides,
}

impl Renderer {
    pub fn new(overrides: Overrides) -> Self {
        Self { overrides }
    }

    /// Built-ins only when `dir` is `None`; no override lookup happens then.
    pub fn with_overrides_dir(dir: Option<&Path>) -> Self {
        Self::new(dir.map(Overrides::load).unwrap_or_default())
    }

    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }

    /// Render the full class source.
    pub fn render(&self, decl: &Declaration) -> Result<String, CodegenError> {
        if !is_supported(decl) {
            return Err(CodegenError::UnsupportedSuperclass {
                name: decl.name.clone(),
                package: decl.superclass_package().unwrap_or("none").to_string(),
            });
        }

        let fragments = self.fragments(decl);
        let args = CustomElementArgs {
            declaration: decl,
            fragments: &fragments,
        };
        Ok(resolve(
            FragmentName::CustomElement,
            self.overrides.custom_element.as_ref().map(|f| f.render(&args)),
            || element::custom_element(&args),
        ))
    }

    /// Render the ten inner fragments without wrapping them in a class.
    pub fn fragments(&self, decl: &Declaration) -> RenderedFragments {
        let o = &self.overrides;
        let comment = ClassCommentArgs {
            css_properties: decl.css_properties.as_deref(),
            description: decl.description.as_deref(),
            slots: decl.slots.as_deref(),
        };
        let css = CssPropertiesArgs {
            css_properties: decl.css_properties.as_deref(),
        };
        let attributes = AttributesArgs {
            attributes: decl.attributes.as_deref(),
        };
        let events = EventsArgs {
            events: decl.events.as_deref(),
        };
        let name = NameArgs {
            name: &decl.name,
            tag_name: &decl.tag_name,
        };
        let description = DescriptionArgs {
            description: decl.description.as_deref(),
        };
        let slots = SlotsArgs {
            slots: decl.slots.as_deref(),
        };

        RenderedFragments {
            class_comment: resolve(
                FragmentName::ClassComment,
                o.class_comment.as_ref().map(|f| f.render(&comment)),
                || members::class_comment(&comment),
            ),
            css_properties_members: resolve(
                FragmentName::CssPropertiesMembers,
                o.css_properties_members.as_ref().map(|f| f.render(&css)),
                || members::css_properties_members(&css),
            ),
            attribute_members: resolve(
                FragmentName::AttributeMembers,
                o.attribute_members.as_ref().map(|f| f.render(&attributes)),
                || members::attribute_members(&attributes),
            ),
            events_members: resolve(
                FragmentName::EventsMembers,
                o.events_members.as_ref().map(|f| f.render(&events)),
                || members::events_members(&events),
            ),
            name_renderer: resolve(
                FragmentName::NameRenderer,
                o.name_renderer.as_ref().map(|f| f.render(&name)),
                || markup::name_renderer(&name),
            ),
            description_renderer: resolve(
                FragmentName::DescriptionRenderer,
                o.description_renderer.as_ref().map(|f| f.render(&description)),
                || markup::description_renderer(&description),
            ),
            css_properties_renderer: resolve(
                FragmentName::CssPropertiesRenderer,
                o.css_properties_renderer.as_ref().map(|f| f.render(&css)),
                || markup::css_properties_renderer(&css),
            ),
            attributes_renderer: resolve(
                FragmentName::AttributesRenderer,
                o.attributes_renderer.as_ref().map(|f| f.render(&attributes)),
                || markup::attributes_renderer(&attributes),
            ),
            events_renderer: resolve(
                FragmentName::EventsRenderer,
                o.events_renderer.as_ref().map(|f| f.render(&events)),
                || markup::events_renderer(&events),
            ),
            slot_renderer: resolve(
                FragmentName::SlotRenderer,
                o.slot_renderer.as_ref().map(|f| f.render(&slots)),
                || markup::slot_renderer(&slots),
            ),
        }
    }
}

/// Take an override's output, or the built-in when there is no override or it failed.
fn resolve(
    name: FragmentName,
    custom: Option<Result<String, CodegenError>>,
    builtin: impl FnOnce() -> String,
) -> String {
    match custom {
        Some(Ok(text)) => text,
        Some(Err(e)) => {
            tracing::warn!(fragment = %name, error = %e, "override failed, using built-in");
            builtin()
        }
        None => builtin(),
    }
}

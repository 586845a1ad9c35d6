//! User-supplied replacements for named fragments.
//!
//! [`Overrides`] holds at most one replacement per fragment. Replacements
//! come either from code (any closure over the fragment's argument struct)
//! or from a directory of Handlebars templates named after the fragments,
//! e.g. `attributeMembers.hbs`.
//!
//! Template context is the fragment's argument struct with manifest key
//! names (`cssProperties`, `fieldName`, `tagName`, ...). Output is not HTML
//! escaped. Helpers available to templates:
//!
//! - `capitalize text`
//! - `property_type type_text`: constructor for `@property({ type })`
//! - `default_value type_text default`: inferred field initializer
//! - `event_method name`: dispatch method name for an event
//! - `indent text depth`: re-indent a rendered fragment

use crate::defaults::{capitalize, infer_default, property_type, NULL_DEFAULT};
use crate::fragment::{
    AttributesArgs, ClassCommentArgs, CssPropertiesArgs, CustomElementArgs, DescriptionArgs,
    EventsArgs, Fragment, FragmentName, NameArgs, SlotsArgs,
};
use crate::members::event_method_name;
use crate::writer::SourceWriter;
use crate::CodegenError;
use handlebars::{handlebars_helper, Handlebars};
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// File extension of template overrides.
pub const TEMPLATE_EXTENSION: &str = "hbs";

/// Optional replacement for each of the eleven fragments.
#[derive(Clone, Default)]
pub struct Overrides {
    pub class_comment: Option<Arc<dyn for<'a> Fragment<ClassCommentArgs<'a>>>>,
    pub css_properties_members: Option<Arc<dyn for<'a> Fragment<CssPropertiesArgs<'a>>>>,
    pub attribute_members: Option<Arc<dyn for<'a> Fragment<AttributesArgs<'a>>>>,
    pub events_members: Option<Arc<dyn for<'a> Fragment<EventsArgs<'a>>>>,
    pub name_renderer: Option<Arc<dyn for<'a> Fragment<NameArgs<'a>>>>,
    pub description_renderer: Option<Arc<dyn for<'a> Fragment<DescriptionArgs<'a>>>>,
    pub css_properties_renderer: Option<Arc<dyn for<'a> Fragment<CssPropertiesArgs<'a>>>>,
    pub attributes_renderer: Option<Arc<dyn for<'a> Fragment<AttributesArgs<'a>>>>,
    pub events_renderer: Option<Arc<dyn for<'a> Fragment<EventsArgs<'a>>>>,
    pub slot_renderer: Option<Arc<dyn for<'a> Fragment<SlotsArgs<'a>>>>,
    pub custom_element: Option<Arc<dyn for<'a> Fragment<CustomElementArgs<'a>>>>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load template overrides from `dir`.
    ///
    /// Never fails as a whole: a missing file means "use the built-in", and
    /// a file that cannot be read or compiled is reported and skipped.
    pub fn load(dir: &Path) -> Self {
        let mut overrides = Self::default();
        if !dir.is_dir() {
            tracing::warn!(
                dir = %dir.display(),
                "override directory not found, using built-in fragments"
            );
            return overrides;
        }

        let mut registry = template_registry();
        let mut found = Vec::new();
        for name in FragmentName::ALL {
            match register_template(&mut registry, dir, name) {
                Ok(true) => {
                    tracing::debug!(fragment = %name, "loaded override");
                    found.push(name);
                }
                Ok(false) => tracing::debug!(fragment = %name, "no override, using built-in"),
                Err(e) => tracing::warn!(error = %e, "override ignored, using built-in"),
            }
        }

        let registry = Arc::new(registry);
        for name in found {
            overrides.set_template(name, Arc::clone(&registry));
        }
        overrides
    }

    /// Names of the fragments that have a replacement.
    pub fn loaded(&self) -> Vec<FragmentName> {
        FragmentName::ALL
            .into_iter()
            .filter(|name| self.has(*name))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.loaded().is_empty()
    }

    pub fn has(&self, name: FragmentName) -> bool {
        match name {
            FragmentName::ClassComment => self.class_comment.is_some(),
            FragmentName::CssPropertiesMembers => self.css_properties_members.is_some(),
            FragmentName::AttributeMembers => self.attribute_members.is_some(),
            FragmentName::EventsMembers => self.events_members.is_some(),
            FragmentName::NameRenderer => self.name_renderer.is_some(),
            FragmentName::DescriptionRenderer => self.description_renderer.is_some(),
            FragmentName::CssPropertiesRenderer => self.css_properties_renderer.is_some(),
            FragmentName::AttributesRenderer => self.attributes_renderer.is_some(),
            FragmentName::EventsRenderer => self.events_renderer.is_some(),
            FragmentName::SlotRenderer => self.slot_renderer.is_some(),
            FragmentName::CustomElement => self.custom_element.is_some(),
        }
    }

    fn set_template(&mut self, name: FragmentName, registry: Arc<Handlebars<'static>>) {
        let template = || Arc::new(TemplateFragment { name, registry: Arc::clone(&registry) });
        match name {
            FragmentName::ClassComment => self.class_comment = Some(template()),
            FragmentName::CssPropertiesMembers => self.css_properties_members = Some(template()),
            FragmentName::AttributeMembers => self.attribute_members = Some(template()),
            FragmentName::EventsMembers => self.events_members = Some(template()),
            FragmentName::NameRenderer => self.name_renderer = Some(template()),
            FragmentName::DescriptionRenderer => self.description_renderer = Some(template()),
            FragmentName::CssPropertiesRenderer => self.css_properties_renderer = Some(template()),
            FragmentName::AttributesRenderer => self.attributes_renderer = Some(template()),
            FragmentName::EventsRenderer => self.events_renderer = Some(template()),
            FragmentName::SlotRenderer => self.slot_renderer = Some(template()),
            FragmentName::CustomElement => self.custom_element = Some(template()),
        }
    }
}

impl fmt::Debug for Overrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overrides")
            .field("loaded", &self.loaded())
            .finish()
    }
}

/// A fragment rendered by a compiled Handlebars template.
struct TemplateFragment {
    name: FragmentName,
    registry: Arc<Handlebars<'static>>,
}

impl<A: Serialize> Fragment<A> for TemplateFragment {
    fn render(&self, args: &A) -> Result<String, CodegenError> {
        self.registry
            .render(self.name.as_str(), args)
            .map_err(|e| CodegenError::OverrideRender {
                fragment: self.name,
                message: e.to_string(),
            })
    }
}

/// Read and compile `<dir>/<name>.hbs`. `Ok(false)` when there is no such file.
fn register_template(
    registry: &mut Handlebars<'static>,
    dir: &Path,
    name: FragmentName,
) -> Result<bool, CodegenError> {
    let path = dir.join(format!("{name}.{TEMPLATE_EXTENSION}"));
    if !path.exists() {
        return Ok(false);
    }

    let load_error = |message: String| CodegenError::OverrideLoad {
        fragment: name,
        path: path.display().to_string(),
        message,
    };
    let source = std::fs::read_to_string(&path).map_err(|e| load_error(e.to_string()))?;
    registry
        .register_template_string(name.as_str(), source)
        .map_err(|e| load_error(e.to_string()))?;
    Ok(true)
}

handlebars_helper!(capitalize_helper: |text: str| capitalize(text));

handlebars_helper!(property_type_helper: |type_text: Json| {
    property_type(type_text.as_str().unwrap_or("any"))
});

handlebars_helper!(default_value_helper: |type_text: Json, raw: Json| {
    let type_text = type_text.as_str().unwrap_or("any");
    let raw = (!raw.is_null()).then_some(raw);
    infer_default(type_text, raw).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "using null as field default");
        NULL_DEFAULT.to_string()
    })
});

handlebars_helper!(event_method_helper: |name: str| event_method_name(name));

handlebars_helper!(indent_helper: |text: str, depth: u64| {
    let mut w = SourceWriter::new();
    for _ in 0..depth {
        w.indent();
    }
    w.block(text);
    w.finish()
});

fn template_registry() -> Handlebars<'static> {
    let mut registry = Handlebars::new();
    registry.register_escape_fn(handlebars::no_escape);
    registry.register_helper("capitalize", Box::new(capitalize_helper));
    registry.register_helper("property_type", Box::new(property_type_helper));
    registry.register_helper("default_value", Box::new(default_value_helper));
    registry.register_helper("event_method", Box::new(event_method_helper));
    registry.register_helper("indent", Box::new(indent_helper));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use skelgen_manifest::{AttributeSpec, TypeRef};
    use std::fs;
    use tempfile::TempDir;

    fn dir_with(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, contents) in files {
            fs::write(dir.path().join(name), contents).unwrap();
        }
        dir
    }

    #[test]
    fn test_empty_directory_loads_nothing() {
        let dir = dir_with(&[]);
        let overrides = Overrides::load(dir.path());
        assert!(overrides.is_empty());
    }

    #[test]
    fn test_missing_directory_loads_nothing() {
        let dir = dir_with(&[]);
        let overrides = Overrides::load(&dir.path().join("nope"));
        assert!(overrides.is_empty());
    }

    #[test]
    fn test_loads_named_template() {
        let dir = dir_with(&[("nameRenderer.hbs", "<h1>{{name}}</h1>\n")]);
        let overrides = Overrides::load(dir.path());
        assert_eq!(overrides.loaded(), vec![FragmentName::NameRenderer]);

        let fragment = overrides.name_renderer.as_ref().unwrap();
        let out = fragment
            .render(&NameArgs {
                name: "MyBadge",
                tag_name: "my-badge",
            })
            .unwrap();
        assert_eq!(out, "<h1>MyBadge</h1>\n");
    }

    #[test]
    fn test_ignores_unrelated_files() {
        let dir = dir_with(&[("header.hbs", "x"), ("nameRenderer.txt", "y")]);
        assert!(Overrides::load(dir.path()).is_empty());
    }

    #[test]
    fn test_broken_template_is_skipped() {
        let dir = dir_with(&[
            ("slotRenderer.hbs", "{{#each slots}}unclosed"),
            ("descriptionRenderer.hbs", "<p>{{description}}</p>"),
        ]);
        let overrides = Overrides::load(dir.path());
        assert_eq!(overrides.loaded(), vec![FragmentName::DescriptionRenderer]);
    }

    #[test]
    fn test_output_is_not_html_escaped() {
        let dir = dir_with(&[("descriptionRenderer.hbs", "{{description}}")]);
        let overrides = Overrides::load(dir.path());
        let out = overrides
            .description_renderer
            .as_ref()
            .unwrap()
            .render(&DescriptionArgs {
                description: Some("<b>&</b>"),
            })
            .unwrap();
        assert_eq!(out, "<b>&</b>");
    }

    #[test]
    fn test_helpers() {
        let template = "{{#each attributes}}@property({ type: {{property_type type.text}} }) {{fieldName}} = {{default_value type.text default}};{{/each}}";
        let dir = dir_with(&[("attributeMembers.hbs", template)]);
        let overrides = Overrides::load(dir.path());
        let attrs = vec![AttributeSpec {
            name: "open".into(),
            field_name: Some("open".into()),
            type_ref: Some(TypeRef::new("boolean")),
            default: None,
            description: None,
        }];
        let out = overrides
            .attribute_members
            .as_ref()
            .unwrap()
            .render(&AttributesArgs {
                attributes: Some(&attrs),
            })
            .unwrap();
        assert_eq!(out, "@property({ type: Boolean }) open = false;");
    }

    #[test]
    fn test_closure_override() {
        let mut overrides = Overrides::new();
        overrides.description_renderer = Some(Arc::new(
            |args: &DescriptionArgs<'_>| -> Result<String, CodegenError> {
                Ok(format!("<em>{}</em>\n", args.description.unwrap_or_default()))
            },
        ));
        assert_eq!(overrides.loaded(), vec![FragmentName::DescriptionRenderer]);
    }

    #[test]
    fn test_debug_lists_loaded() {
        let dir = dir_with(&[("classComment.hbs", "")]);
        let overrides = Overrides::load(dir.path());
        assert_eq!(format!("{overrides:?}"), "Overrides { loaded: [ClassComment] }");
    }
}

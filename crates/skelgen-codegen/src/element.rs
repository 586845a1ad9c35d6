//! The `customElement` wrapper: assembles the whole Lit class.

use crate::fragment::CustomElementArgs;
use crate::writer::SourceWriter;

/// `customElement`: imports, doc block, decorator and class body.
///
/// Member blocks come first, each followed by a blank line, then `render()`
/// with the markup fragments in fixed order: heading, description, CSS
/// variables, attributes, events, slots.
pub fn custom_element(args: &CustomElementArgs<'_>) -> String {
    let decl = args.declaration;
    let f = args.fragments;

    let mut w = SourceWriter::new();
    w.line("import { html, css, LitElement } from 'lit'");
    w.line("import { customElement, property } from 'lit/decorators.js'");
    w.blank();
    w.block(&f.class_comment);
    w.line(format!("@customElement('{}')", decl.tag_name));
    w.line(format!("export class {} extends LitElement {{", decl.name))
        .indent();

    for members in [
        &f.css_properties_members,
        &f.attribute_members,
        &f.events_members,
    ] {
        if !members.trim().is_empty() {
            w.block(members);
            w.blank();
        }
    }

    w.line("render() {").indent();
    w.line("return html`").indent();
    for markup in [
        &f.name_renderer,
        &f.description_renderer,
        &f.css_properties_renderer,
        &f.attributes_renderer,
        &f.events_renderer,
        &f.slot_renderer,
    ] {
        w.block(markup);
    }
    w.dedent().line("`");
    w.dedent().line("}");
    w.dedent().line("}");
    w.finish()
}

//! Built-in field renderers

use tera::Context;

use crate::core::field::NormalizedField;
use crate::render::markup::{Markup, TEXT_TEMPLATE};
use crate::render::registry::BuiltinRenderer;

/// Field types rendered without any registration
pub const BUILTINS: &[(&str, BuiltinRenderer)] = &[
    ("text", render_text_field as BuiltinRenderer),
    ("submit", render_submit_field as BuiltinRenderer),
];

/// A paragraph-wrapped `<input>` preceded by the label block
pub fn render_text_field(markup: &Markup, field: &NormalizedField) -> String {
    let mut context = Context::new();
    context.insert("label", &markup.render_label(field));
    context.insert("field_type", &field.field_type);
    context.insert("name", &field.name);
    context.insert("value", &field.value);
    context.insert("required", &field.required);
    context.insert("attributes", &markup.serialize_attributes(field));

    markup.render_or_empty(TEXT_TEMPLATE, &context)
}

/// Submit buttons are text-family inputs with a different `type`
pub fn render_submit_field(markup: &Markup, field: &NormalizedField) -> String {
    render_text_field(markup, field)
}

//! Field dispatch and template composition

use crate::core::config::Config;
use crate::core::field::{normalize, FieldDefinition};
use crate::core::form::FormDefinition;
use crate::render::markup::{Markup, MarkupError};
use crate::render::registry::{dispatch_key, RendererRegistry};

/// The splice point for rendered fields in a page template
pub const FORM_FIELDS_PLACEHOLDER: &str = "{{form_fields}}";

/// Renders fields and splices them into page templates
#[derive(Debug)]
pub struct FormRenderer {
    registry: RendererRegistry,
    markup: Markup,
}

impl FormRenderer {
    pub fn new(registry: RendererRegistry, markup: Markup) -> Self {
        Self { registry, markup }
    }

    /// Built-in renderers with escaping on
    pub fn with_defaults() -> Result<Self, MarkupError> {
        Ok(Self::new(RendererRegistry::default(), Markup::new(true)?))
    }

    /// Build the markup layer from `config` around a prepared registry
    pub fn from_config(config: &Config, registry: RendererRegistry) -> Result<Self, MarkupError> {
        let mut markup = Markup::new(config.escape())?;
        if let Some(dir) = &config.templates_dir {
            markup = markup.with_overrides(dir)?;
        }
        Ok(Self::new(registry, markup))
    }

    pub fn registry(&self) -> &RendererRegistry {
        &self.registry
    }

    pub fn markup(&self) -> &Markup {
        &self.markup
    }

    /// Render one field.
    ///
    /// The built-in renderer for the field's type wins; otherwise the hooks
    /// registered for the type run over an empty fragment. A type nobody
    /// renders yields the empty string.
    pub fn render_tag(&self, field: &FieldDefinition, form: &FormDefinition) -> String {
        let field = normalize(field);
        let key = dispatch_key(&field.field_type);

        if let Some(render) = self.registry.builtin(&key) {
            tracing::debug!(key = %key, name = %field.name, "rendering with built-in renderer");
            return render(&self.markup, &field);
        }

        tracing::debug!(
            key = %key,
            name = %field.name,
            hooks = self.registry.hook_count(&key),
            "no built-in renderer, running field hooks"
        );
        self.registry.apply_hooks(&key, String::new(), &field, form)
    }

    /// Render the field stored under `key` with its effective name
    pub fn render_field(&self, key: &str, form: &FormDefinition) -> Option<String> {
        form.named_field(key)
            .map(|field| self.render_tag(&field, form))
    }

    /// Render every field of `form` in declaration order and substitute the
    /// concatenated markup for each placeholder in `template`.
    ///
    /// A form without fields strips the placeholder.
    pub fn render_form_fields(&self, template: &str, form: &FormDefinition) -> String {
        if form.is_empty() {
            return template.replace(FORM_FIELDS_PLACEHOLDER, "");
        }

        let fields_html: String = form
            .named_fields()
            .map(|field| self.render_tag(&field, form))
            .collect();

        template.replace(FORM_FIELDS_PLACEHOLDER, &fields_html)
    }

    /// Render `form` into its own template
    pub fn render_form(&self, form: &FormDefinition) -> String {
        self.render_form_fields(&form.template, form)
    }
}

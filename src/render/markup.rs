//! Markup templates and the helpers shared by every built-in renderer

use rust_embed::Embed;
use std::error::Error as _;
use std::path::{Path, PathBuf};
use tera::{Context, Tera};
use thiserror::Error;
use walkdir::WalkDir;

use crate::core::field::NormalizedField;

#[derive(Embed)]
#[folder = "templates/"]
struct EmbeddedTemplates;

/// Template for the label block
pub const LABEL_TEMPLATE: &str = "label.html";

/// Template for text-family `<input>` controls
pub const TEXT_TEMPLATE: &str = "text.html";

const TEMPLATE_EXTENSION: &str = ".html";

#[derive(Debug, Error)]
pub enum MarkupError {
    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Template parse error in {name}: {message}")]
    Parse { name: String, message: String },

    #[error("Template rendering error: {0}")]
    RenderError(String),

    #[error("Failed to read template {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Compiled markup templates plus the escaping policy.
///
/// Built-in templates are embedded in the binary. Files in an override
/// directory replace them by name.
#[derive(Debug)]
pub struct Markup {
    tera: Tera,
    escape: bool,
}

impl Markup {
    /// Load the embedded templates
    pub fn new(escape: bool) -> Result<Self, MarkupError> {
        let mut tera = Tera::default();
        if escape {
            tera.autoescape_on(vec![TEMPLATE_EXTENSION]);
        } else {
            tera.autoescape_on(vec![]);
        }

        for file in EmbeddedTemplates::iter() {
            let filename = file.as_ref();
            if let Some(content) = EmbeddedTemplates::get(filename) {
                if let Ok(template_str) = std::str::from_utf8(&content.data) {
                    add_template(&mut tera, filename, template_str)?;
                }
            }
        }

        Ok(Self { tera, escape })
    }

    /// Replace built-in templates with same-named `.html` files from `dir`
    pub fn with_overrides(mut self, dir: &Path) -> Result<Self, MarkupError> {
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let name = entry.file_name().to_string_lossy().to_string();
            if !name.ends_with(TEMPLATE_EXTENSION) {
                continue;
            }

            let content = std::fs::read_to_string(entry.path()).map_err(|source| MarkupError::Io {
                path: entry.path().to_path_buf(),
                source,
            })?;
            add_template(&mut self.tera, &name, &content)?;
            tracing::debug!(template = %name, dir = %dir.display(), "markup template overridden");
        }

        Ok(self)
    }

    /// Whether interpolated values are HTML-escaped
    pub fn escapes(&self) -> bool {
        self.escape
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    /// Render a named template
    pub fn render(&self, name: &str, context: &Context) -> Result<String, MarkupError> {
        if !self.has_template(name) {
            return Err(MarkupError::NotFound(name.to_string()));
        }
        self.tera
            .render(name, context)
            .map_err(|e| MarkupError::RenderError(describe(&e)))
    }

    /// Render a named template, degrading to an empty fragment on failure
    pub fn render_or_empty(&self, name: &str, context: &Context) -> String {
        self.render(name, context).unwrap_or_else(|e| {
            tracing::warn!(template = name, error = %e, "markup template failed, emitting empty fragment");
            String::new()
        })
    }

    /// Escape `text` for use in markup, unless escaping is disabled
    pub fn escape(&self, text: &str) -> String {
        if self.escape {
            tera::escape_html(text)
        } else {
            text.to_string()
        }
    }

    /// Render the label block for a field.
    ///
    /// Empty when the field has no label. Otherwise a `<label>` tied to the
    /// field name, with a required indicator and a tooltip marker when the
    /// field asks for them.
    pub fn render_label(&self, field: &NormalizedField) -> String {
        if field.label.is_empty() {
            return String::new();
        }

        let mut context = Context::new();
        context.insert("label", &field.label);
        context.insert("name", &field.name);
        context.insert("required", &field.required);
        context.insert("tooltip", &field.tooltip);

        self.render_or_empty(LABEL_TEMPLATE, &context)
    }

    /// Serialize the field's attributes as `name="value"` pairs joined by a
    /// single space, in insertion order.
    pub fn serialize_attributes(&self, field: &NormalizedField) -> String {
        field
            .attributes
            .iter()
            .map(|(name, value)| format!("{}=\"{}\"", self.escape(name), self.escape(value)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// True iff `field_type` is exactly `button` or `submit`
pub fn is_button_type(field_type: &str) -> bool {
    matches!(field_type, "button" | "submit")
}

fn add_template(tera: &mut Tera, name: &str, content: &str) -> Result<(), MarkupError> {
    tera.add_raw_template(name, content.trim_end())
        .map_err(|e| MarkupError::Parse {
            name: name.to_string(),
            message: describe(&e),
        })
}

/// Flatten a tera error and its causes into one line
fn describe(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

//! Form definitions: ordered fields plus the host template

use indexmap::IndexMap;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::field::FieldDefinition;
use crate::yaml::YamlSyntaxError;

/// A form: field definitions keyed by field key, in declaration order,
/// and the page template the rendered fields are spliced into.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormDefinition {
    /// Host-assigned identifier, passed through to field hooks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub template: String,

    #[serde(default)]
    pub fields: IndexMap<String, FieldDefinition>,
}

#[derive(Debug, Error, Diagnostic)]
pub enum FormError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] YamlSyntaxError),

    #[error("Invalid JSON in {path}: {source}")]
    #[diagnostic(code(formfields::form::json))]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read form definition {path}: {source}")]
    #[diagnostic(code(formfields::form::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FormDefinition {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            ..Default::default()
        }
    }

    /// Append a field; a key that already exists keeps its position
    pub fn with_field(mut self, key: impl Into<String>, field: FieldDefinition) -> Self {
        self.fields.insert(key.into(), field);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The field under `key` with its effective name applied: its own
    /// `name` when non-empty, otherwise the key itself.
    pub fn named_field(&self, key: &str) -> Option<FieldDefinition> {
        self.fields.get(key).map(|field| with_effective_name(key, field))
    }

    /// All fields in declaration order, each with its effective name
    pub fn named_fields(&self) -> impl Iterator<Item = FieldDefinition> + '_ {
        self.fields
            .iter()
            .map(|(key, field)| with_effective_name(key, field))
    }

    /// Parse a YAML form definition; `filename` labels diagnostics
    pub fn from_yaml_str(source: &str, filename: &str) -> Result<Self, FormError> {
        serde_yml::from_str(source)
            .map_err(|e| YamlSyntaxError::from_serde_error(&e, source, filename).into())
    }

    pub fn from_json_str(source: &str, filename: &str) -> Result<Self, FormError> {
        serde_json::from_str(source).map_err(|source| FormError::Json {
            path: filename.to_string(),
            source,
        })
    }

    /// Load a form definition file; `.json` files are read as JSON,
    /// everything else as YAML.
    pub fn load(path: &Path) -> Result<Self, FormError> {
        let source = std::fs::read_to_string(path).map_err(|source| FormError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let filename = path.display().to_string();

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let form = if is_json {
            Self::from_json_str(&source, &filename)?
        } else {
            Self::from_yaml_str(&source, &filename)?
        };

        tracing::debug!(path = %filename, fields = form.fields.len(), "loaded form definition");
        Ok(form)
    }
}

fn with_effective_name(key: &str, field: &FieldDefinition) -> FieldDefinition {
    let mut field = field.clone();
    if field.name.as_deref().map_or(true, str::is_empty) {
        field.name = Some(key.to_string());
    }
    field
}

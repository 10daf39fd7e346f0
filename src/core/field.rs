//! Field definitions and normalization against the default table

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// HTML attributes of a field, in declaration order
pub type Attributes = IndexMap<String, String>;

/// A partial field definition as supplied by the caller
///
/// Every key is optional. `None` means the key was absent and will be
/// filled from the default table by [`normalize`]; a supplied empty string
/// or `false` is kept exactly as given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    #[serde(
        rename = "type",
        default,
        deserialize_with = "scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub field_type: Option<String>,

    #[serde(default, deserialize_with = "scalar_string", skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, deserialize_with = "scalar_string", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(
        alias = "data_type",
        default,
        deserialize_with = "scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub data_type: Option<String>,

    #[serde(default, deserialize_with = "scalar_string", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default, deserialize_with = "scalar_string", skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    #[serde(default, deserialize_with = "scalar_string", skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    #[serde(default, deserialize_with = "scalar_string", skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    #[serde(default, deserialize_with = "attribute_map", skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

impl FieldDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, field_type: impl Into<String>) -> Self {
        self.field_type = Some(field_type.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Append an HTML attribute, keeping insertion order
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .get_or_insert_with(Attributes::new)
            .insert(name.into(), value.into());
        self
    }

    /// Merge this definition with the default table
    pub fn normalize(&self) -> NormalizedField {
        normalize(self)
    }
}

/// A field with every key present
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedField {
    #[serde(rename = "type")]
    pub field_type: String,
    pub label: String,
    pub name: String,
    pub data_type: String,
    pub value: String,
    pub default: String,
    pub template: String,
    pub tooltip: String,
    pub required: bool,
    pub attributes: Attributes,
}

impl Default for NormalizedField {
    /// The default table every field is merged with
    fn default() -> Self {
        Self {
            field_type: String::new(),
            label: String::new(),
            name: String::new(),
            data_type: String::new(),
            value: String::new(),
            default: String::new(),
            template: String::new(),
            tooltip: String::new(),
            required: false,
            attributes: Attributes::new(),
        }
    }
}

/// Fill every absent key of `field` from the default table.
///
/// Keys the caller supplied pass through untouched, including empty strings,
/// `false` and empty attribute maps.
pub fn normalize(field: &FieldDefinition) -> NormalizedField {
    let defaults = NormalizedField::default();

    NormalizedField {
        field_type: field.field_type.clone().unwrap_or(defaults.field_type),
        label: field.label.clone().unwrap_or(defaults.label),
        name: field.name.clone().unwrap_or(defaults.name),
        data_type: field.data_type.clone().unwrap_or(defaults.data_type),
        value: field.value.clone().unwrap_or(defaults.value),
        default: field.default.clone().unwrap_or(defaults.default),
        template: field.template.clone().unwrap_or(defaults.template),
        tooltip: field.tooltip.clone().unwrap_or(defaults.tooltip),
        required: field.required.unwrap_or(defaults.required),
        attributes: field.attributes.clone().unwrap_or(defaults.attributes),
    }
}

/// Render a scalar config value as the string the markup will carry
fn scalar_to_string(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|v| Some(scalar_to_string(v)))
}

fn attribute_map<'de, D>(deserializer: D) -> Result<Option<Attributes>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<IndexMap<String, Value>>::deserialize(deserializer)?;
    Ok(Some(
        raw.unwrap_or_default()
            .into_iter()
            .map(|(k, v)| (k, scalar_to_string(v)))
            .collect(),
    ))
}

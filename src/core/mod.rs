//! Core module - field and form data model, configuration

pub mod config;
pub mod field;
pub mod form;

pub use config::Config;
pub use field::{normalize, Attributes, FieldDefinition, NormalizedField};
pub use form::{FormDefinition, FormError};

//! Formfields: a pluggable form-field rendering engine
//!
//! Turns declarative field definitions into markup fragments and splices
//! them into a page template at the `{{form_fields}}` placeholder. Field
//! types without a built-in renderer are handed to host-registered hooks.

pub mod cli;
pub mod core;
pub mod render;
pub mod yaml;

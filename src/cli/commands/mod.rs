//! CLI command implementations

pub mod completions;
pub mod field;
pub mod render;
pub mod types;

//! Rendering - built-in renderers, hook registry, template composition

pub mod builtin;
pub mod engine;
pub mod markup;
pub mod registry;

pub use engine::{FormRenderer, FORM_FIELDS_PLACEHOLDER};
pub use markup::{is_button_type, Markup, MarkupError};
pub use registry::{
    dispatch_key, BuiltinRenderer, FieldHook, RendererRegistry, RendererRegistryBuilder,
};

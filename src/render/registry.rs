//! Renderer registry: built-in renderers and external field hooks
//!
//! Renderers are keyed by dispatch key (`render_{type}_field`). Built-ins are
//! seeded by the builder; hosts add hooks for their own field types before
//! calling [`RendererRegistryBuilder::build`]. The built registry is
//! read-only.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::core::field::NormalizedField;
use crate::core::form::FormDefinition;
use crate::render::builtin::BUILTINS;
use crate::render::markup::Markup;

const DISPATCH_PREFIX: &str = "render_";
const DISPATCH_SUFFIX: &str = "_field";

/// A renderer compiled into the crate
pub type BuiltinRenderer = fn(&Markup, &NormalizedField) -> String;

/// Registry key for a field type tag
pub fn dispatch_key(field_type: &str) -> String {
    format!("{DISPATCH_PREFIX}{field_type}{DISPATCH_SUFFIX}")
}

/// An externally registered renderer for a field type.
///
/// Hooks for one type run in registration order. Each receives the markup
/// produced so far (the empty string for the first one) and returns the
/// markup to pass on.
pub trait FieldHook: Send + Sync {
    fn render(&self, html: String, field: &NormalizedField, form: &FormDefinition) -> String;
}

impl<F> FieldHook for F
where
    F: Fn(String, &NormalizedField, &FormDefinition) -> String + Send + Sync,
{
    fn render(&self, html: String, field: &NormalizedField, form: &FormDefinition) -> String {
        self(html, field, form)
    }
}

/// Read-only map from dispatch key to renderer
pub struct RendererRegistry {
    builtins: BTreeMap<String, (&'static str, BuiltinRenderer)>,
    hooks: HashMap<String, Vec<Box<dyn FieldHook>>>,
}

impl RendererRegistry {
    pub fn builder() -> RendererRegistryBuilder {
        RendererRegistryBuilder::new()
    }

    /// The built-in renderer for a dispatch key, if any
    pub fn builtin(&self, key: &str) -> Option<BuiltinRenderer> {
        self.builtins.get(key).map(|(_, render)| *render)
    }

    /// Type tags with a built-in renderer, sorted
    pub fn builtin_types(&self) -> Vec<&'static str> {
        let mut types: Vec<&'static str> = self.builtins.values().map(|(tag, _)| *tag).collect();
        types.sort_unstable();
        types
    }

    pub fn hook_count(&self, key: &str) -> usize {
        self.hooks.get(key).map_or(0, Vec::len)
    }

    /// Type tags with at least one hook, sorted
    pub fn hooked_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self
            .hooks
            .keys()
            .filter_map(|key| {
                key.strip_prefix(DISPATCH_PREFIX)
                    .and_then(|k| k.strip_suffix(DISPATCH_SUFFIX))
                    .map(str::to_string)
            })
            .collect();
        types.sort();
        types
    }

    /// Fold the hooks registered under `key` over `html`, left to right.
    ///
    /// With no hooks registered `html` comes back untouched.
    pub fn apply_hooks(
        &self,
        key: &str,
        html: String,
        field: &NormalizedField,
        form: &FormDefinition,
    ) -> String {
        let Some(hooks) = self.hooks.get(key) else {
            return html;
        };

        hooks.iter().enumerate().fold(html, |acc, (index, hook)| {
            tracing::trace!(key, index, "running field hook");
            hook.render(acc, field, form)
        })
    }
}

impl Default for RendererRegistry {
    /// Built-ins only
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hooks: BTreeMap<&str, usize> = self
            .hooks
            .iter()
            .map(|(key, hooks)| (key.as_str(), hooks.len()))
            .collect();
        f.debug_struct("RendererRegistry")
            .field("builtins", &self.builtins.keys().collect::<Vec<_>>())
            .field("hooks", &hooks)
            .finish()
    }
}

/// Collects hooks before the registry is frozen
pub struct RendererRegistryBuilder {
    registry: RendererRegistry,
}

impl RendererRegistryBuilder {
    /// Start from the built-in renderers
    pub fn new() -> Self {
        let builtins = BUILTINS
            .iter()
            .map(|(tag, render)| (dispatch_key(tag), (*tag, *render)))
            .collect();

        Self {
            registry: RendererRegistry {
                builtins,
                hooks: HashMap::new(),
            },
        }
    }

    /// Register a hook for `field_type`, after any already registered.
    ///
    /// A hook for a type that also has a built-in renderer is kept but never
    /// runs: built-ins always win.
    pub fn hook(mut self, field_type: &str, hook: impl FieldHook + 'static) -> Self {
        let key = dispatch_key(field_type);
        if self.registry.builtins.contains_key(&key) {
            tracing::debug!(key = %key, "hook registered for a built-in type will be shadowed");
        }
        self.registry
            .hooks
            .entry(key)
            .or_default()
            .push(Box::new(hook));
        self
    }

    pub fn build(self) -> RendererRegistry {
        self.registry
    }
}

impl Default for RendererRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_key() {
        assert_eq!(dispatch_key("text"), "render_text_field");
        assert_eq!(dispatch_key(""), "render__field");
    }

    #[test]
    fn test_builtins_registered() {
        let registry = RendererRegistry::default();
        assert_eq!(registry.builtin_types(), vec!["submit", "text"]);
        assert!(registry.builtin(&dispatch_key("text")).is_some());
        assert!(registry.builtin(&dispatch_key("submit")).is_some());
        assert!(registry.builtin(&dispatch_key("email")).is_none());
        assert!(registry.builtin(&dispatch_key("")).is_none());
    }

    #[test]
    fn test_hooks_fold_in_order() {
        let registry = RendererRegistry::builder()
            .hook("rating", |html: String, _: &NormalizedField, _: &FormDefinition| {
                format!("{html}a")
            })
            .hook("rating", |html: String, field: &NormalizedField, _: &FormDefinition| {
                format!("{html}b:{}", field.name)
            })
            .build();

        let field = NormalizedField {
            name: "stars".to_string(),
            ..Default::default()
        };
        let key = dispatch_key("rating");
        assert_eq!(registry.hook_count(&key), 2);
        assert_eq!(
            registry.apply_hooks(&key, String::new(), &field, &FormDefinition::default()),
            "ab:stars"
        );
    }

    #[test]
    fn test_no_hooks_returns_seed() {
        let registry = RendererRegistry::default();
        let out = registry.apply_hooks(
            &dispatch_key("email"),
            String::new(),
            &NormalizedField::default(),
            &FormDefinition::default(),
        );
        assert_eq!(out, "");
        assert_eq!(registry.hook_count(&dispatch_key("email")), 0);
    }

    #[test]
    fn test_hook_sees_form() {
        let registry = RendererRegistry::builder()
            .hook("hidden", |_: String, _: &NormalizedField, form: &FormDefinition| {
                form.id.clone().unwrap_or_default()
            })
            .build();

        let form = FormDefinition {
            id: Some("donation".to_string()),
            ..Default::default()
        };
        let out = registry.apply_hooks(
            &dispatch_key("hidden"),
            String::new(),
            &NormalizedField::default(),
            &form,
        );
        assert_eq!(out, "donation");
        assert_eq!(registry.hooked_types(), vec!["hidden".to_string()]);
    }
}

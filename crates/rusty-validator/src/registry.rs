// File: src/registry.rs
// Purpose: Kind-indexed dispatch table of field validators

use crate::config::RegistryConfig;
use crate::error::ValidationError;
use crate::kind::Kind;
use crate::reflect::{FieldDescriptor, FieldValue};
use crate::validators;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// A field validator: pure over the descriptor and the field's value
pub type ValidatorFn = fn(&FieldDescriptor, FieldValue<'_>) -> Vec<ValidationError>;

static STANDARD: Lazy<Registry> = Lazy::new(Registry::standard);

/// Validators the crate ships, by kind
const BUILTIN: &[(Kind, ValidatorFn)] = &[
    (Kind::String, validators::validate_string),
    (Kind::Int, validators::validate_int),
];

/// Immutable mapping from [`Kind`] to [`ValidatorFn`]
///
/// Build one with [`Registry::builder`] or take the shared
/// [`Registry::global`]. Kinds without an entry are reported as unsupported.
#[derive(Clone, Default)]
pub struct Registry {
    entries: HashMap<Kind, ValidatorFn>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// String and integer validators
    pub fn standard() -> Self {
        BUILTIN
            .iter()
            .fold(Self::builder(), |builder, &(kind, validator)| {
                builder.register(kind, validator)
            })
            .build()
    }

    /// Registry holding the built-in validators named in `config`
    ///
    /// Kinds without a built-in validator are skipped with a warning.
    pub fn from_config(config: &RegistryConfig) -> Self {
        let mut builder = Self::builder();
        for kind in &config.kinds {
            match BUILTIN.iter().find(|(k, _)| k == kind) {
                Some(&(kind, validator)) => builder = builder.register(kind, validator),
                None => tracing::warn!(%kind, "no built-in validator for kind"),
            }
        }
        builder.build()
    }

    /// Process-wide standard registry, built on first use
    pub fn global() -> &'static Registry {
        &STANDARD
    }

    pub fn get(&self, kind: Kind) -> Option<ValidatorFn> {
        self.entries.get(&kind).copied()
    }

    pub fn supports(&self, kind: Kind) -> bool {
        self.entries.contains_key(&kind)
    }

    /// Registered kinds in [`Kind`] order
    pub fn kinds(&self) -> Vec<Kind> {
        let mut kinds: Vec<Kind> = self.entries.keys().copied().collect();
        kinds.sort();
        kinds
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("kinds", &self.kinds())
            .finish()
    }
}

/// Collects entries for a [`Registry`]
#[derive(Default)]
pub struct RegistryBuilder {
    entries: HashMap<Kind, ValidatorFn>,
}

impl RegistryBuilder {
    /// Add or replace the validator for `kind`
    pub fn register(mut self, kind: Kind, validator: ValidatorFn) -> Self {
        self.entries.insert(kind, validator);
        self
    }

    pub fn build(self) -> Registry {
        Registry {
            entries: self.entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::Visibility;

    fn reject_all(field: &FieldDescriptor, value: FieldValue<'_>) -> Vec<ValidationError> {
        vec![ValidationError::failed(field, value)]
    }

    #[test]
    fn test_standard_kinds() {
        let registry = Registry::standard();
        assert_eq!(registry.kinds(), vec![Kind::Int, Kind::String]);
        assert!(registry.supports(Kind::String));
        assert!(!registry.supports(Kind::Sequence));
        assert!(registry.get(Kind::Bool).is_none());
    }

    #[test]
    fn test_global_matches_standard() {
        assert_eq!(Registry::global().kinds(), Registry::standard().kinds());
    }

    #[test]
    fn test_builder_registers_and_replaces() {
        let registry = Registry::builder()
            .register(Kind::Bool, reject_all)
            .register(Kind::String, validators::validate_string)
            .register(Kind::String, reject_all)
            .build();
        assert_eq!(registry.kinds(), vec![Kind::Bool, Kind::String]);

        let field = FieldDescriptor::new("name", Kind::String, "required", Visibility::Public);
        let validator = registry.get(Kind::String).unwrap();
        // replaced entry rejects even a non-empty value
        assert_eq!(validator(&field, FieldValue::Str("bob")).len(), 1);
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::default();
        assert!(registry.kinds().is_empty());
    }

    #[test]
    fn test_from_config_picks_builtins() {
        let config = RegistryConfig {
            kinds: vec![Kind::String, Kind::Float],
        };
        let registry = Registry::from_config(&config);
        assert_eq!(registry.kinds(), vec![Kind::String]);
    }
}

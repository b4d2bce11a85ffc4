// File: src/validator.rs
// Purpose: Field iteration, registry dispatch and error aggregation

use crate::error::ValidationError;
use crate::reflect::Reflect;
use crate::registry::Registry;

/// Walks the fields of a record and collects every validation failure
///
/// Holds a shared borrow of an immutable [`Registry`], so one registry can
/// back any number of validators across threads.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'r> {
    registry: &'r Registry,
}

impl<'r> Validator<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Validate one flat level of fields
    ///
    /// Returns an empty list when every checked field passes. A value that is
    /// not a record yields exactly one [`ErrorKind::Invalid`](crate::ErrorKind::Invalid)
    /// error. Errors follow field declaration order.
    pub fn validate<T: Reflect + ?Sized>(&self, value: &T) -> Vec<ValidationError> {
        let Some(record) = value.as_record() else {
            let kind = value.kind();
            tracing::debug!(%kind, "value is not a record");
            return vec![ValidationError::invalid(kind)];
        };

        let span = tracing::debug_span!("validate", record = record.type_name());
        let _guard = span.enter();

        let mut errors = Vec::new();

        for (index, field) in record.fields().iter().enumerate() {
            if !field.is_public() {
                tracing::trace!(field = field.name, "skipping non-public field");
                continue;
            }
            if !field.has_rules() {
                tracing::trace!(field = field.name, "skipping field without rules");
                continue;
            }

            match self.registry.get(field.kind) {
                Some(validate_field) => {
                    tracing::trace!(field = field.name, kind = %field.kind, rule = field.rule, "dispatching");
                    errors.extend(validate_field(field, record.field_value(index)));
                }
                None => {
                    tracing::trace!(field = field.name, kind = %field.kind, "no validator for kind");
                    errors.push(ValidationError::unsupported(field));
                }
            }
        }

        tracing::debug!(errors = errors.len(), "validation finished");
        errors
    }
}

impl Default for Validator<'static> {
    fn default() -> Self {
        Self::new(Registry::global())
    }
}

/// Validate `value` against the process-wide standard registry
///
/// ```
/// use rusty_validator::{validate, ErrorKind, Reflect};
///
/// #[derive(Reflect)]
/// struct Person {
///     #[validator = "required"]
///     pub name: String,
///     #[validator = "required,greaterthan,0"]
///     pub weight: i32,
/// }
///
/// let errors = validate(&Person { name: String::new(), weight: 80 });
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].kind(), ErrorKind::ValidationFailed);
/// assert_eq!(errors[0].message(), "Validation failed for field name");
///
/// let errors = validate("not a struct");
/// assert_eq!(errors[0].message(), "Incorrect Kind: string, must be a struct");
/// ```
pub fn validate<T: Reflect + ?Sized>(value: &T) -> Vec<ValidationError> {
    Validator::default().validate(value)
}

/// Method-call form of [`validate`] for every [`Reflect`] type
pub trait Validate {
    fn validate(&self) -> Vec<ValidationError>;

    /// Validate against a caller-supplied registry
    fn validate_with(&self, registry: &Registry) -> Vec<ValidationError>;
}

impl<T: Reflect + ?Sized> Validate for T {
    fn validate(&self) -> Vec<ValidationError> {
        validate(self)
    }

    fn validate_with(&self, registry: &Registry) -> Vec<ValidationError> {
        Validator::new(registry).validate(self)
    }
}

// File: src/validators.rs
// Purpose: Built-in per-kind validators registered by Registry::standard

use crate::error::ValidationError;
use crate::reflect::{FieldDescriptor, FieldValue};
use crate::rules::{RequirementSet, ALLOW_EMPTY, FORMAT, GREATER_THAN, LESS_THAN, REQUIRED};

/// Validator for [`Kind::String`](crate::Kind::String) fields
///
/// A `required` field fails on the empty string unless `allowempty` is also
/// given. `format(..)` requirements are not enforced.
pub fn validate_string(field: &FieldDescriptor, value: FieldValue<'_>) -> Vec<ValidationError> {
    let requirements = RequirementSet::parse_lenient(field.rule);

    if requirements.flags_with_prefix(FORMAT).next().is_some() {
        tracing::trace!(field = field.name, "format requirements are not enforced");
    }

    let Some(text) = value.as_str() else {
        return Vec::new();
    };

    if requirements.contains(REQUIRED) && !requirements.contains(ALLOW_EMPTY) && text.is_empty() {
        return vec![ValidationError::failed(field, value)];
    }

    Vec::new()
}

/// Validator for [`Kind::Int`](crate::Kind::Int) fields
///
/// With `required`, `greaterthan,N` fails when the value is `<= N` and
/// `lessthan,N` fails when the value is `>= N`. A bound that is not an integer
/// is ignored. At most one error is reported per field.
pub fn validate_int(field: &FieldDescriptor, value: FieldValue<'_>) -> Vec<ValidationError> {
    let requirements = RequirementSet::parse_lenient(field.rule);

    let Some(number) = value.as_int() else {
        return Vec::new();
    };

    if !requirements.contains(REQUIRED) {
        return Vec::new();
    }

    let below = requirements
        .int_param(GREATER_THAN)
        .is_some_and(|bound| number <= bound);
    let above = requirements
        .int_param(LESS_THAN)
        .is_some_and(|bound| number >= bound);

    if below || above {
        return vec![ValidationError::failed(field, value)];
    }

    Vec::new()
}

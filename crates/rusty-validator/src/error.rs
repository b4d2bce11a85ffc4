// File: src/error.rs
// Purpose: Validation error taxonomy and message templates

use crate::kind::Kind;
use crate::reflect::{FieldDescriptor, FieldValue};
use serde::Serialize;

/// Template for a top-level value that is not a record
pub const ERROR_MESSAGE_INVALID: &str = "Incorrect Kind: {kind}, must be a struct";
/// Template for a field whose kind has no registered validator
pub const ERROR_MESSAGE_UNSUPPORTED: &str = "Kind {kind} of Field {field} is not yet supported";
/// Template for a field that violates one of its requirements
pub const ERROR_MESSAGE_FAILED: &str = "Validation failed for field {field}";

/// Category of a [`ValidationError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// The value handed to the driver is not a record; no fields were checked
    Invalid,
    /// No validator is registered for the field's kind
    Unsupported,
    /// The field's value violates one of its declared requirements
    ValidationFailed,
}

/// One entry of the list returned by `validate`
///
/// The engine builds these; custom validators report through [`ValidationError::failed`].
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    kind: ErrorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    field_kind: Option<Kind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    message: String,
}

impl ValidationError {
    pub(crate) fn invalid(kind: Kind) -> Self {
        Self {
            kind: ErrorKind::Invalid,
            field: None,
            field_kind: Some(kind),
            value: None,
            message: format!("Incorrect Kind: {}, must be a struct", kind),
        }
    }

    pub(crate) fn unsupported(field: &FieldDescriptor) -> Self {
        Self {
            kind: ErrorKind::Unsupported,
            field: Some(field.name),
            field_kind: Some(field.kind),
            value: None,
            message: format!(
                "Kind {} of Field {} is not yet supported",
                field.kind, field.name
            ),
        }
    }

    /// Failure of `field` holding `value`
    ///
    /// For validators registered through [`Registry::builder`](crate::Registry::builder).
    pub fn failed(field: &FieldDescriptor, value: FieldValue<'_>) -> Self {
        Self {
            kind: ErrorKind::ValidationFailed,
            field: Some(field.name),
            field_kind: Some(field.kind),
            value: Some(value.to_string()),
            message: format!("Validation failed for field {}", field.name),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Name of the offending field; `None` for [`ErrorKind::Invalid`]
    pub fn field(&self) -> Option<&'static str> {
        self.field
    }

    /// Kind of the offending field, or of the whole value for [`ErrorKind::Invalid`]
    pub fn field_kind(&self) -> Option<Kind> {
        self.field_kind
    }

    /// Rendering of the value that failed a requirement
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::Visibility;

    fn weight() -> FieldDescriptor {
        FieldDescriptor::new("weight", Kind::Int, "required,greaterthan,0", Visibility::Public)
    }

    #[test]
    fn test_invalid_message_names_kind() {
        let err = ValidationError::invalid(Kind::String);
        assert_eq!(err.kind(), ErrorKind::Invalid);
        assert_eq!(err.to_string(), "Incorrect Kind: string, must be a struct");
        assert_eq!(err.field(), None);
    }

    #[test]
    fn test_unsupported_message() {
        let field = FieldDescriptor::new("nicknames", Kind::Sequence, "required", Visibility::Public);
        let err = ValidationError::unsupported(&field);
        assert_eq!(err.message(), "Kind sequence of Field nicknames is not yet supported");
        assert_eq!(err.field(), Some("nicknames"));
        assert_eq!(err.field_kind(), Some(Kind::Sequence));
        assert_eq!(err.value(), None);
    }

    #[test]
    fn test_failed_message_keeps_value() {
        let err = ValidationError::failed(&weight(), FieldValue::Int(0));
        assert_eq!(err.message(), "Validation failed for field weight");
        assert_eq!(err.value(), Some("0"));
    }

    #[test]
    fn test_templates_match_messages() {
        let field = weight();
        assert_eq!(
            ERROR_MESSAGE_FAILED.replace("{field}", field.name),
            ValidationError::failed(&field, FieldValue::Int(0)).message()
        );
        assert_eq!(
            ERROR_MESSAGE_UNSUPPORTED
                .replace("{kind}", "int")
                .replace("{field}", field.name),
            ValidationError::unsupported(&field).message()
        );
        assert_eq!(
            ERROR_MESSAGE_INVALID.replace("{kind}", "enum"),
            ValidationError::invalid(Kind::Enum).message()
        );
    }
}

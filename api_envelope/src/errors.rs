//! Error types for envelope assembly.

use serde_json::Value;

/// Raised when a setter receives a value that violates its documented
/// constraint. Always returned synchronously at the point of assignment;
/// the previously valid value for the field, if any, is left unchanged.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Status code outside the `100..=599` range.
    #[error("status {0} is out of range (expected 100..=599)")]
    StatusOutOfRange(u16),
    /// Page number below zero.
    #[error("page number cannot be negative, got {0}")]
    NegativePage(i64),
    /// Page size of zero or less.
    #[error("page size must be greater than 0, got {0}")]
    NonPositiveSize(i64),
    /// Total item count below zero.
    #[error("total count cannot be negative, got {0}")]
    NegativeTotal(i64),
    /// Metadata that is not a key-value object.
    #[error("metadata must be a non-null object, got {0}")]
    InvalidMetadata(&'static str),
    /// Caller id that is neither a string nor a number.
    #[error("caller id must be a string or a number, got {0}")]
    InvalidCallerId(&'static str),
    /// Caller extra attributes that are not a key-value object.
    #[error("extra data must be a non-null object, got {0}")]
    InvalidExtraData(&'static str),
}

/// JSON kind name carried in error payloads.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::{value_kind, ValidationError};

/// Opaque caller-identity descriptor: the identifier of the caller a
/// response concerns, plus free-form extra attributes. Carried as data
/// only; nothing here is an authorization decision.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallerIdentity {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    extra: Option<Map<String, Value>>,
}

impl CallerIdentity {
    /// Empty descriptor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the caller identifier. Exactly JSON strings and numbers are
    /// accepted; `Null` is a no-op that leaves any prior value untouched.
    /// Calling again overwrites the previous identifier.
    pub fn with_id(mut self, id: impl Into<Value>) -> Result<Self, ValidationError> {
        let id = id.into();
        match id {
            Value::Null => Ok(self),
            Value::String(_) | Value::Number(_) => {
                self.id = Some(id);
                Ok(self)
            }
            other => {
                let kind = value_kind(&other);
                tracing::warn!("caller id must be a string or a number: got {}", kind);
                Err(ValidationError::InvalidCallerId(kind))
            }
        }
    }

    /// Sets the free-form extra attributes. Only key-value objects are
    /// accepted; `Null`, arrays, and scalars are rejected.
    pub fn with_extra(mut self, extra: impl Into<Value>) -> Result<Self, ValidationError> {
        match extra.into() {
            Value::Object(map) => {
                self.extra = Some(map);
                Ok(self)
            }
            other => {
                let kind = value_kind(&other);
                tracing::warn!("extra data must be a non-null object: got {}", kind);
                Err(ValidationError::InvalidExtraData(kind))
            }
        }
    }

    /// Caller identifier, if set.
    pub fn id(&self) -> Option<&Value> {
        self.id.as_ref()
    }

    /// Extra attributes, if set.
    pub fn extra(&self) -> Option<&Map<String, Value>> {
        self.extra.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    // -- Id type guard --

    #[test]
    fn id_accepts_string() {
        let identity = CallerIdentity::new().with_id("u-123").unwrap();
        assert_eq!(identity.id(), Some(&json!("u-123")));
    }

    #[test]
    fn id_accepts_number() {
        let identity = CallerIdentity::new().with_id(42).unwrap();
        assert_eq!(identity.id(), Some(&json!(42)));
    }

    #[test]
    fn id_rejects_bool() {
        assert_eq!(
            CallerIdentity::new().with_id(true),
            Err(ValidationError::InvalidCallerId("bool"))
        );
    }

    #[test]
    fn id_rejects_array_and_object() {
        assert_eq!(
            CallerIdentity::new().with_id(json!([1, 2])),
            Err(ValidationError::InvalidCallerId("array"))
        );
        assert_eq!(
            CallerIdentity::new().with_id(json!({"id": 1})),
            Err(ValidationError::InvalidCallerId("object"))
        );
    }

    #[test]
    fn id_null_is_a_no_op() {
        let identity = CallerIdentity::new()
            .with_id("u-9")
            .unwrap()
            .with_id(Value::Null)
            .unwrap();
        assert_eq!(identity.id(), Some(&json!("u-9")));
    }

    #[test]
    fn id_overwrites_after_revalidation() {
        let identity = CallerIdentity::new()
            .with_id("first")
            .unwrap()
            .with_id(7)
            .unwrap();
        assert_eq!(identity.id(), Some(&json!(7)));
    }

    // -- Extra attributes --

    #[test]
    fn extra_accepts_object() {
        let identity = CallerIdentity::new()
            .with_extra(json!({"role": "admin", "tenant": 4}))
            .unwrap();
        let extra = identity.extra().unwrap();
        assert_eq!(extra.get("role"), Some(&json!("admin")));
        assert_eq!(extra.get("tenant"), Some(&json!(4)));
    }

    #[test]
    fn extra_accepts_empty_object() {
        let identity = CallerIdentity::new().with_extra(json!({})).unwrap();
        assert!(identity.extra().unwrap().is_empty());
    }

    #[test]
    fn extra_rejects_null_array_and_scalars() {
        assert_eq!(
            CallerIdentity::new().with_extra(Value::Null),
            Err(ValidationError::InvalidExtraData("null"))
        );
        assert_eq!(
            CallerIdentity::new().with_extra(json!([1, 2, 3])),
            Err(ValidationError::InvalidExtraData("array"))
        );
        assert_eq!(
            CallerIdentity::new().with_extra("attrs"),
            Err(ValidationError::InvalidExtraData("string"))
        );
    }

    #[test]
    fn extra_overwrites_wholesale() {
        let identity = CallerIdentity::new()
            .with_extra(json!({"a": 1}))
            .unwrap()
            .with_extra(json!({"b": 2}))
            .unwrap();
        let extra = identity.extra().unwrap();
        assert_eq!(extra.get("a"), None);
        assert_eq!(extra.get("b"), Some(&json!(2)));
    }
}

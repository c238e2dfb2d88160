//! The response builder: a mutable accumulator of validated envelope fields.

use serde_json::{Map, Value};

use crate::errors::{value_kind, ValidationError};
use crate::status::{for_each_status, reason_phrase, StatusCode};
use crate::types::{CallerIdentity, Paging, ResponseEnvelope};

/// Accumulates envelope fields through fluent setters, then snapshots them
/// into an immutable [`ResponseEnvelope`].
///
/// A builder is a short-lived, single-owner object: construct it, chain
/// setters, call [`build`](ResponseBuilder::build) within one request-handling
/// unit. Setters that can reject their input return
/// `Result<Self, ValidationError>` and commit nothing on failure; everything
/// is validated at assignment time, so `build` itself cannot fail.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseBuilder {
    status: Option<u16>,
    message: Option<String>,
    data: Option<Value>,
    paging: Option<Paging>,
    metadata: Option<Map<String, Value>>,
    caller_identity: Option<CallerIdentity>,
}

impl ResponseBuilder {
    /// Generic factory with no pre-filled status or message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pre-filled with `status` and its canonical reason phrase.
    pub fn for_status(status: StatusCode) -> Self {
        Self {
            status: Some(status.code()),
            message: Some(status.reason().to_string()),
            ..Self::default()
        }
    }

    /// Builder pre-filled with `status`; the caller's `message` wins when
    /// given, otherwise the canonical reason phrase is used.
    pub fn for_status_message(status: StatusCode, message: Option<&str>) -> Self {
        let builder = Self::for_status(status);
        match message {
            Some(message) => builder.with_message(message),
            None => builder,
        }
    }

    /// Sets the status code. Accepted only in the `100..=599` range.
    pub fn with_status(mut self, status: u16) -> Result<Self, ValidationError> {
        if !(100..=599).contains(&status) {
            tracing::warn!("status {} is out of range", status);
            return Err(ValidationError::StatusOutOfRange(status));
        }
        self.status = Some(status);
        Ok(self)
    }

    /// Sets the human-readable outcome message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Stores the payload as-is. Any non-null value is accepted, object or
    /// primitive; `Null` is a no-op and does not clear a previous payload.
    pub fn with_data(mut self, data: impl Into<Value>) -> Self {
        let data = data.into();
        if !data.is_null() {
            self.data = Some(data);
        }
        self
    }

    /// Attaches a pagination descriptor by value. The builder holds its own
    /// instance, unreachable from outside, so nothing the caller does
    /// afterwards can change what was attached.
    pub fn with_paging(mut self, paging: Paging) -> Self {
        self.paging = Some(paging);
        self
    }

    /// Attaches a caller-identity descriptor, taking ownership of it.
    pub fn with_caller_identity(mut self, identity: CallerIdentity) -> Self {
        self.caller_identity = Some(identity);
        self
    }

    /// Replaces the metadata wholesale. Only key-value objects are accepted;
    /// `Null`, arrays, and scalars are rejected.
    pub fn with_metadata(mut self, metadata: impl Into<Value>) -> Result<Self, ValidationError> {
        match metadata.into() {
            Value::Object(map) => {
                self.metadata = Some(map);
                Ok(self)
            }
            other => {
                let kind = value_kind(&other);
                tracing::warn!("metadata must be a non-null object: got {}", kind);
                Err(ValidationError::InvalidMetadata(kind))
            }
        }
    }

    /// Sets a single metadata entry, creating the metadata map on first use.
    pub fn add_metadata_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// Accumulated status code, if set.
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Accumulated message, if set.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Accumulated payload, if set.
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// Accumulated pagination descriptor, if set.
    pub fn paging(&self) -> Option<&Paging> {
        self.paging.as_ref()
    }

    /// Accumulated metadata, if set.
    pub fn metadata(&self) -> Option<&Map<String, Value>> {
        self.metadata.as_ref()
    }

    /// Accumulated caller identity, if set.
    pub fn caller_identity(&self) -> Option<&CallerIdentity> {
        self.caller_identity.as_ref()
    }

    /// Snapshots the accumulated fields into an immutable envelope.
    ///
    /// Pure assembly with no failure mode. The metadata map and descriptors
    /// are cloned, so mutating the builder afterwards cannot affect an
    /// envelope that was already built. An unset status defaults to `200`;
    /// an unset message resolves to the catalogue reason phrase for the
    /// effective status (empty for an uncatalogued code).
    pub fn build(&self) -> ResponseEnvelope {
        let status = self.status.unwrap_or_else(|| StatusCode::Ok.code());
        let message = match &self.message {
            Some(message) => message.clone(),
            None => reason_phrase(status).unwrap_or_default().to_string(),
        };
        ResponseEnvelope::new(
            status,
            message,
            self.data.clone(),
            self.paging,
            self.metadata.clone(),
            self.caller_identity.clone(),
        )
    }
}

macro_rules! status_constructors {
    ($($variant:ident => $code:literal, $reason:literal, $ctor:ident;)+) => {
        /// Per-status convenience constructors, one per catalogue entry.
        /// Each is exactly equivalent to [`ResponseBuilder::for_status`]
        /// with the matching [`StatusCode`].
        impl ResponseBuilder {
            $(
                #[doc = concat!("Builder pre-filled with `", $code, " ", $reason, "`.")]
                pub fn $ctor() -> Self {
                    Self::for_status(StatusCode::$variant)
                }
            )+
        }
    };
}
for_each_status!(status_constructors);

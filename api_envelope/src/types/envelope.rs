use serde::Serialize;
use serde_json::{Map, Value};

use super::{CallerIdentity, Paging};

/// Immutable response envelope: the snapshot a [`ResponseBuilder`] produces
/// and a transport layer serializes verbatim as the response body.
///
/// Envelopes are created exclusively by the builder's `build` step and have
/// no setters; a new response means a new builder.
///
/// [`ResponseBuilder`]: crate::ResponseBuilder
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    status: u16,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    paging: Option<Paging>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    caller_identity: Option<CallerIdentity>,
}

impl ResponseEnvelope {
    pub(crate) fn new(
        status: u16,
        message: String,
        data: Option<Value>,
        paging: Option<Paging>,
        metadata: Option<Map<String, Value>>,
        caller_identity: Option<CallerIdentity>,
    ) -> Self {
        Self {
            status,
            message,
            data,
            paging,
            metadata,
            caller_identity,
        }
    }

    /// Outcome status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Human-readable outcome description.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Payload, if any.
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// Pagination descriptor, if any.
    pub fn paging(&self) -> Option<&Paging> {
        self.paging.as_ref()
    }

    /// Arbitrary response metadata, if any.
    pub fn metadata(&self) -> Option<&Map<String, Value>> {
        self.metadata.as_ref()
    }

    /// Caller-identity context, if any.
    pub fn caller_identity(&self) -> Option<&CallerIdentity> {
        self.caller_identity.as_ref()
    }
}

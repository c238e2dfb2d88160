//! Response-envelope construction for HTTP-facing services.
//!
//! Standardizes how a service reports an outcome: a status code, a
//! human-readable message, and optional payload, pagination, metadata, and
//! caller-identity context. A [`ResponseBuilder`] accumulates validated
//! fields and snapshots them into an immutable [`ResponseEnvelope`]; the
//! [`StatusCode`] catalogue supplies canonical reason phrases and the
//! builder's per-status convenience constructors.
//!
//! The crate performs no I/O and serializes nothing itself; envelopes and
//! descriptors derive `Serialize` so a transport layer can emit them
//! verbatim as a JSON body.

mod builder;
mod errors;
mod status;
pub mod types;

pub use self::builder::ResponseBuilder;
pub use self::errors::ValidationError;
pub use self::status::{reason_phrase, StatusCode};
pub use self::types::{CallerIdentity, Paging, ResponseEnvelope};

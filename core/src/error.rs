//! Error types for the todo item provider and the API client.
//!
//! # Design
//! `ServiceError` is what a provider returns. `InvalidData` is the only
//! recoverable failure; absence is expressed through `Option`/`bool` return
//! values, not through an error variant. Anything else is `Internal` and is
//! meant to surface as a server fault.
//!
//! `ApiError` is what `TodoClient` parse methods return. `NotFound` and
//! `BadRequest` get dedicated variants because those are the two statuses the
//! server maps provider outcomes to; other non-2xx responses land in
//! `HttpError` with the raw status and body for debugging.

use thiserror::Error;

/// Provider-side failure.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input violates a precondition (empty name, non-positive id).
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Unexpected provider failure.
    #[error("internal: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ServiceError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }

    pub fn is_invalid_data(&self) -> bool {
        matches!(self, Self::InvalidData(_))
    }
}

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: the requested todo item does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned 400: the payload or id was rejected.
    #[error("bad request")]
    BadRequest,

    /// The server returned a non-2xx status other than 400 or 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

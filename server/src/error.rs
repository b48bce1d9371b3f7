//! Failure outcomes of the todo item controller.
//!
//! Clients only ever see a status code: 400 and 404 carry no body, and
//! internal faults are logged server-side and answered with a bare 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use todo_core::ServiceError;

#[derive(Debug, Error)]
pub enum ControllerError {
    /// Provider rejected the payload or id.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Referenced todo item does not exist.
    #[error("todo item {0} not found")]
    NotFound(i64),

    #[error("internal error: {0}")]
    Internal(#[source] anyhow::Error),
}

impl ControllerError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for ControllerError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidData(reason) => Self::BadRequest(reason),
            ServiceError::Internal(source) => Self::Internal(source),
        }
    }
}

impl IntoResponse for ControllerError {
    fn into_response(self) -> Response {
        match &self {
            Self::Internal(source) => tracing::error!(error = ?source, "internal server error"),
            other => tracing::debug!(status = %other.status(), "{other}"),
        }
        self.status().into_response()
    }
}

//! Error types and HTTP response conversion

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::backend::BackendError;
use crate::redfish::ErrorDocument;

/// Result type alias using the service error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the service
///
/// Large error variants are boxed to reduce stack size
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A backend resource the request depends on does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other backend failure
    #[error("OneView error: {0}")]
    Backend(BackendError),

    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl Error {
    /// HTTP status the error is reported with
    pub fn status(&self) -> StatusCode {
        match self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();

        // Details stay in the log, the body is always the canonical document
        let document = match self {
            Error::NotFound(resource) => {
                tracing::warn!(resource = %resource, "Resource not found");
                ErrorDocument::resource_missing()
            }
            Error::Backend(e) => {
                tracing::error!(error = %e, "OneView request failed");
                ErrorDocument::internal_error()
            }
            Error::Config(e) => {
                tracing::error!("Configuration error: {}", e);
                ErrorDocument::internal_error()
            }
            Error::Io(e) => {
                tracing::error!("I/O error: {}", e);
                ErrorDocument::internal_error()
            }
            Error::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                ErrorDocument::internal_error()
            }
        };

        (status, Json(document)).into_response()
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}

impl From<BackendError> for Error {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::NotFound(resource) => Error::NotFound(resource),
            other => Error::Backend(other),
        }
    }
}

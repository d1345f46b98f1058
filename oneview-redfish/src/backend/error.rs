use http::StatusCode;
use thiserror::Error;

/// Result of a OneView call
pub type BackendResult<T> = std::result::Result<T, BackendError>;

/// Failure of a OneView call
///
/// `NotFound` is the only variant handlers treat differently; everything
/// else is an unexpected failure.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The appliance reported the resource (or collection) as absent
    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} from {uri}")]
    Status { status: StatusCode, uri: String },

    #[error("malformed {resource} payload at {path}: {message}")]
    Decode {
        resource: String,
        path: String,
        message: String,
    },

    #[error("session error: {0}")]
    Session(String),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl BackendError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

//! Client error types.

use thiserror::Error;

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A parameter failed schema validation before any request was sent.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: String,
        /// The violated expectation (missing, or the expected kind).
        reason: String,
    },

    /// The HTTP request could not be completed (DNS, connect, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing failed.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON serialization/deserialization failed where structured data was required.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server answered with a non-success status.
    #[error("remote error ({status}): {body}")]
    Remote {
        /// HTTP status code.
        status: u16,
        /// Decoded response body, or the raw text wrapped in a JSON string.
        body: serde_json::Value,
    },

    /// Invalid client configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn missing(name: &str) -> Self {
        Error::InvalidArgument {
            name: name.to_string(),
            reason: "missing required parameter".to_string(),
        }
    }

    pub(crate) fn wrong_kind(name: &str, expected: &str) -> Self {
        Error::InvalidArgument {
            name: name.to_string(),
            reason: format!("expected {expected}"),
        }
    }

    /// Check if this is a validation error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }

    /// Check if this is a not-found response.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Remote { status: 404, .. })
    }

    /// Check if this is an authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Remote { status: 401, .. })
    }

    /// Check if the server reported an internal error.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Remote { status, .. } if *status >= 500)
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

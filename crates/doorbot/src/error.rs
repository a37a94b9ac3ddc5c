//! Error types for the doorbot library.
//!
//! A single [`Error`] covers every failure an operation can hit. Status codes
//! returned by the data endpoints are classified into explicit variants so
//! callers can tell an expired token from a rate limit without string matching.

use std::path::PathBuf;

use thiserror::Error;

/// The unified error type for doorbot operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Authentication errors (rejected credentials, expired or insufficient token).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// The API answered 429. Polling faster than about every 17 seconds triggers this.
    #[error("api rate limit exceeded")]
    RateLimited,

    /// Any other unexpected HTTP status from a data endpoint.
    #[error("http status code: {status}")]
    Status { status: u16 },

    /// The response body was not the expected JSON shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The destination file could not be created or written.
    #[error("file error at {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input validation errors (bad base URL).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns true if the API rejected the call with HTTP 429.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Error::RateLimited)
    }

    /// Returns true if the per-request authentication token had expired.
    pub fn is_token_expired(&self) -> bool {
        matches!(self, Error::Auth(AuthError::TokenExpired))
    }

    /// Map a non-success status from an authenticated data endpoint.
    pub(crate) fn from_status(status: u16) -> Self {
        match status {
            401 => AuthError::TokenExpired.into(),
            403 => AuthError::PermissionDenied.into(),
            429 => Error::RateLimited,
            status => Error::Status { status },
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// HTTP 401 from a data endpoint.
    #[error("authentication token expired")]
    TokenExpired,

    /// HTTP 403 from a data endpoint.
    #[error("no permissions")]
    PermissionDenied,

    /// The token or session exchange was refused. `body` is the raw response.
    #[error("exchange rejected with HTTP {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },
}

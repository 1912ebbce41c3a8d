//! API client error types.

use thiserror::Error;

/// Errors that can occur when talking to the StudyBuddy backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error (connection refused, timeout, body read failure).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend rejected the request because there is no valid session.
    #[error("not authenticated")]
    Unauthorized,

    /// Registration of an identity that already exists.
    #[error("user already exists: {0}")]
    Conflict(String),

    /// Login with a wrong username or password.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// Backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// `error` field of the JSON body, or the raw body.
        message: String,
    },

    /// Failed to decode a backend response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The document cannot be uploaded.
    #[error("unsupported document '{filename}': {reason}")]
    UnsupportedDocument { filename: String, reason: String },

    /// Reading, writing, or removing the stored session failed.
    #[error("session store error: {0}")]
    SessionStore(String),
}

impl ApiError {
    /// Whether the failure happened before any response was received.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_))
    }
}

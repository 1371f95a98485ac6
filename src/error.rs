//! Error types for the Pricewatch API client.

use thiserror::Error;

/// Errors returned by the Pricewatch client.
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP transport failed (connect, TLS, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("API error ({status}): {detail}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error detail from the response body.
        detail: String,
    },

    /// The session refresh failed; the session should be treated as ended.
    #[error(transparent)]
    Refresh(#[from] RefreshError),

    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    /// Status code of the failing response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            Self::Api { status, .. } => Some(*status),
            Self::Refresh(err) => err.status,
            Self::Json(_) => None,
        }
    }
}

/// Outcome of a failed `/auth/refresh` call.
///
/// Owned data rather than a wrapped `reqwest::Error` so one failure can be
/// fanned out to every request that was queued behind the refresh.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("session refresh failed: {detail}")]
pub struct RefreshError {
    /// HTTP status of the refresh response, if one was received.
    pub status: Option<u16>,
    /// Detail from the refresh failure.
    pub detail: String,
}

impl RefreshError {
    pub(crate) fn interrupted() -> Self {
        Self {
            status: None,
            detail: "refresh attempt was interrupted before it settled".to_string(),
        }
    }
}

/// Result type for Pricewatch operations.
pub type Result<T> = std::result::Result<T, ApiError>;

//! Errors raised while talking to the backend.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed from configuration
    #[error("Failed to build HTTP client: {0}")]
    Build(String),

    /// Request never produced a response (DNS, connect, timeout, ...)
    #[error("Request to '{path}' failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// Backend answered with a non-success status
    #[error("Request to '{path}' returned {status}: {message}")]
    Status {
        path: String,
        status: u16,
        message: String,
    },

    /// Response body did not match the expected shape
    #[error("Failed to decode response from '{path}': {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// HTTP status when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

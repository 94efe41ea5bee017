//! Error types for the Atrium API client

use thiserror::Error;

/// API client error
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request never completed (connect, timeout, or body decode failure)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("server error {status}: {}", .message.as_deref().unwrap_or("(no message)"))]
    Server {
        status: u16,
        message: Option<String>,
    },
}

impl ApiError {
    /// HTTP status of a server-side failure, if a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            ApiError::Http(e) => e.status().map(|s| s.as_u16()),
        }
    }

    /// Message the server attached to a failed response.
    ///
    /// Error bodies carry `{"error": "..."}` (some older endpoints use
    /// `"message"`). Returns `None` when the body had neither, so callers
    /// must supply their own fallback text.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } => message.as_deref(),
            ApiError::Http(_) => None,
        }
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

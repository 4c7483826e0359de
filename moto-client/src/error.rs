//! Client error types
//!
//! Every remote failure becomes a value here; nothing propagates as a
//! panic into the rendering layer. Transport failures (`Http`) are
//! retryable; `Rejected` carries the backend's own message when it
//! reports `success: false` inside a 2xx envelope.

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network/transport failure — no usable response
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// 2xx envelope with `success: false`
    #[error("Request rejected: {0}")]
    Rejected(String),

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request rejected as invalid by the backend
    #[error("Validation error: {0}")]
    Validation(String),

    /// Server-side error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Rejection with the backend's message, or a generic fallback
    pub fn rejected(message: Option<String>) -> Self {
        ClientError::Rejected(message.unwrap_or_else(|| "Something went wrong".to_string()))
    }

    /// Whether retrying the same call could plausibly succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, ClientError::Http(_) | ClientError::Internal(_))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

//! Error types for the Relift service client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the modernization service
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// The service rejected the caller's credentials
    #[error("access denied: {0}")]
    AccessDenied(String),

    /// The credential grant backing the session is no longer valid
    #[error("invalid credential grant: {0}")]
    InvalidGrant(String),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Request never completed
    #[error("transport error: {0}")]
    Transport(String),

    /// Failed to parse response
    #[error("failed to parse response: {0}")]
    Parse(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is an authorization failure a credential refresh
    /// can recover from
    pub fn is_recoverable_auth(&self) -> bool {
        matches!(self, Self::AccessDenied(_) | Self::InvalidGrant(_))
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}

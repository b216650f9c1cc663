//! Error types for the card queue client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while fetching the queue
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request could not be sent or the response could not be received
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("HTTP error! status: {status}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Body was not a JSON array of job records
    #[error("Failed to decode queue: {0}")]
    Decode(String),
}

impl ClientError {
    /// Create an HTTP status error from status code and body
    pub fn http_status(status: u16, message: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::HttpStatus { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::HttpStatus { status, .. } if *status >= 500)
    }

    /// Whether the next poll may plausibly succeed without any change on our side
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::HttpStatus { .. } => self.is_server_error(),
            Self::Decode(_) => false,
        }
    }
}

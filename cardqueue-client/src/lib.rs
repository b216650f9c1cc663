//! Card Queue HTTP Client
//!
//! A small, type-safe HTTP client for the card queue endpoint.
//!
//! The endpoint answers `GET` with a JSON array of job records. Every failure
//! mode (transport, status, body shape) is reported as a [`ClientError`] so
//! callers can fold it into a display status.
//!
//! # Example
//!
//! ```no_run
//! use cardqueue_client::QueueClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = QueueClient::new("http://localhost:8080/cards/queue");
//!
//!     let jobs = client.fetch_queue().await?;
//!     println!("{} card(s) in queue", jobs.len());
//!     Ok(())
//! }
//! ```

pub mod error;
mod queue;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use queue::QueueSource;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// Default location of the queue endpoint
pub const DEFAULT_QUEUE_URL: &str = "http://localhost:8080/cards/queue";

/// HTTP client for the card queue endpoint
#[derive(Debug, Clone)]
pub struct QueueClient {
    /// Full URL of the queue endpoint (e.g., "http://localhost:8080/cards/queue")
    endpoint: String,
    /// HTTP client instance
    client: Client,
}

impl QueueClient {
    /// Create a new queue client
    ///
    /// # Arguments
    /// * `endpoint` - Full URL of the queue endpoint
    ///
    /// # Example
    /// ```
    /// use cardqueue_client::QueueClient;
    ///
    /// let client = QueueClient::new("http://localhost:8080/cards/queue");
    /// ```
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(endpoint, Client::new())
    }

    /// Create a new queue client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use cardqueue_client::QueueClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(10))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = QueueClient::with_client("http://localhost:8080/cards/queue", http_client);
    /// ```
    pub fn with_client(endpoint: impl Into<String>, client: Client) -> Self {
        let endpoint = endpoint.into();
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the queue endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Check the status code and decode a JSON body
    ///
    /// The body is read in full before decoding so that transport failures
    /// surface as [`ClientError::Network`] and shape mismatches as
    /// [`ClientError::Decode`].
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ClientError::http_status(status.as_u16(), error_text));
        }

        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

impl Default for QueueClient {
    fn default() -> Self {
        Self::new(DEFAULT_QUEUE_URL)
    }
}

//! Error types for store adapters.

use thiserror::Error;

/// Errors that can occur when writing to a document store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Failed to parse a response.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Authentication or authorization failed.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Connection failed.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Timeout waiting for a response.
    #[error("Request timed out")]
    Timeout,
}

#[cfg(feature = "firestore")]
impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            StoreError::Timeout
        } else if err.is_connect() {
            StoreError::Connection(err.to_string())
        } else {
            StoreError::Http(err.to_string())
        }
    }
}

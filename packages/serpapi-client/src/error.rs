//! Error types for the SerpAPI client.

use thiserror::Error;

/// Result type for SerpAPI client operations.
pub type Result<T> = std::result::Result<T, SerpError>;

/// SerpAPI client errors.
#[derive(Debug, Error)]
pub enum SerpError {
    /// Configuration error (missing API key)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level failure (connection, timeout, body decode)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response, or an error reported inside the response body
    #[error("SerpAPI error ({status}): {message}")]
    Api { status: u16, message: String },
}

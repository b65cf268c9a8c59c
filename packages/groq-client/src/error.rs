//! Error types for the Groq client.

use thiserror::Error;

/// Result type for Groq client operations.
pub type Result<T> = std::result::Result<T, GroqError>;

/// Groq client errors.
#[derive(Debug, Error)]
pub enum GroqError {
    /// Configuration error (missing API key, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API error: non-2xx response. Status and body are kept separate so
    /// callers can report them precisely.
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}

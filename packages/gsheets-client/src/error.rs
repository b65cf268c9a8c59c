use thiserror::Error;

/// Errors that can occur when talking to the Sheets API.
#[derive(Error, Debug)]
pub enum SheetsError {
    /// Configuration error (missing credentials file, bad key material)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The spreadsheet URL did not contain a recognizable id
    #[error("Invalid spreadsheet URL: {url}")]
    InvalidUrl { url: String },

    /// Signing the service-account assertion failed
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// The token endpoint rejected the assertion
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The Sheets API returned an error status
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The response body did not have the expected shape
    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, SheetsError>;

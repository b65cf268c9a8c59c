//! Typed errors for the enrichment library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.
//!
//! Two failure families exist and they behave differently:
//!
//! - [`EnrichmentError`] aborts the run. Missing columns, unreadable
//!   input, and search failures all land here.
//! - [`ExtractError`] is scoped to one entity. The failed outcome is
//!   recorded in the results table and the run continues.

use thiserror::Error;

/// Errors that abort an enrichment run.
#[derive(Debug, Error)]
pub enum EnrichmentError {
    /// The selected key column does not exist in the input table
    #[error("column not found: {column} (available: {available})")]
    ColumnNotFound { column: String, available: String },

    /// Web search failed; the query embeds the entity it was built for
    #[error("search failed for query \"{query}\": {source}")]
    Search {
        query: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// CSV read or write failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Spreadsheet service error
    #[error("spreadsheet error: {0}")]
    Sheets(#[from] gsheets_client::SheetsError),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),

    /// Background task failed to complete
    #[error("worker task failed: {0}")]
    TaskJoin(String),
}

/// Per-entity extraction failures.
///
/// The Display form doubles as the value written into the results
/// table when an extraction fails, so its format is part of the
/// output contract: `Error: {status}, {body}` for API rejections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The model endpoint returned a non-success status
    #[error("Error: {status}, {body}")]
    Api { status: u16, body: String },

    /// The request never reached the endpoint or timed out
    #[error("Error: {0}")]
    Network(String),

    /// The response body had no usable content
    #[error("Error: {0}")]
    Parse(String),
}

/// Result type alias for run-level operations.
pub type Result<T> = std::result::Result<T, EnrichmentError>;

/// Result type alias for per-entity extraction.
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_extract_error_renders_status_and_body() {
        let err = ExtractError::Api {
            status: 429,
            body: "{\"error\":\"rate limit\"}".to_string(),
        };
        assert_eq!(err.to_string(), "Error: 429, {\"error\":\"rate limit\"}");
    }

    #[test]
    fn column_not_found_lists_available_columns() {
        let err = EnrichmentError::ColumnNotFound {
            column: "Compny".to_string(),
            available: "Company, Website".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("Compny"));
        assert!(message.contains("Company, Website"));
    }
}

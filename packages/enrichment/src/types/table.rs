//! In-memory tabular data with a header row.

use crate::error::{EnrichmentError, Result};

/// A rectangular table of strings with named columns.
///
/// Rows are normalized on construction: short rows are padded with
/// empty cells and long rows are truncated, so every row matches the
/// header width. Spreadsheet reads drop trailing empty cells and CSV
/// files are occasionally ragged; normalizing once here means the rest
/// of the pipeline never has to bounds-check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl DataTable {
    /// Build a table from explicit headers and data rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { headers, rows }
    }

    /// Build a table from raw rows where the first row is the header.
    ///
    /// An empty input yields a table with no columns and no rows.
    pub fn from_rows(mut raw: Vec<Vec<String>>) -> Self {
        if raw.is_empty() {
            return Self {
                headers: Vec::new(),
                rows: Vec::new(),
            };
        }
        let headers = raw.remove(0);
        Self::new(headers, raw)
    }

    /// Column names in table order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows (header excluded).
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by name, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// All values of one column, in row order.
    ///
    /// Duplicates are preserved here; collapsing happens later when
    /// outcomes are keyed by entity.
    pub fn column_values(&self, name: &str) -> Result<Vec<String>> {
        let index = self
            .column_index(name)
            .ok_or_else(|| EnrichmentError::ColumnNotFound {
                column: name.to_string(),
                available: self.headers.join(", "),
            })?;

        Ok(self.rows.iter().map(|row| row[index].clone()).collect())
    }
}

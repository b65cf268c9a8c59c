//! Per-entity outcomes and the aggregated results table.

use indexmap::IndexMap;

use crate::error::ExtractError;
use crate::types::table::DataTable;

/// Header of the answer column in materialized results.
pub const EXTRACTED_HEADER: &str = "Extracted Information";

/// The outcome of enriching a single entity.
///
/// Failures are carried as tagged values rather than flattened into
/// strings, so callers can count and report them. They are only
/// rendered into their `Error: ...` text form at the output boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellOutcome {
    /// The model returned an answer (already trimmed)
    Answer(String),

    /// Extraction failed for this entity
    Failed(ExtractError),
}

impl CellOutcome {
    pub fn is_answer(&self) -> bool {
        matches!(self, CellOutcome::Answer(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, CellOutcome::Failed(_))
    }

    /// The cell value written into output tables.
    ///
    /// Answers pass through unchanged; failures render through the
    /// error's Display form (`Error: {status}, {body}` for API
    /// rejections).
    pub fn display_value(&self) -> String {
        match self {
            CellOutcome::Answer(value) => value.clone(),
            CellOutcome::Failed(err) => err.to_string(),
        }
    }
}

/// Entity → outcome mapping in first-seen order.
///
/// Duplicate entities collapse to a single row: a repeated insert
/// replaces the stored outcome but keeps the entity's original
/// position, so the final table has one row per distinct entity with
/// the last outcome winning.
#[derive(Debug, Clone)]
pub struct ResultsTable {
    key_column: String,
    outcomes: IndexMap<String, CellOutcome>,
}

impl ResultsTable {
    /// Create an empty results table keyed by the given column name.
    pub fn new(key_column: impl Into<String>) -> Self {
        Self {
            key_column: key_column.into(),
            outcomes: IndexMap::new(),
        }
    }

    /// Name of the entity column these results are keyed by.
    pub fn key_column(&self) -> &str {
        &self.key_column
    }

    /// Record the outcome for an entity, overwriting any earlier one.
    pub fn insert(&mut self, entity: impl Into<String>, outcome: CellOutcome) {
        self.outcomes.insert(entity.into(), outcome);
    }

    /// Look up the outcome for an entity.
    pub fn get(&self, entity: &str) -> Option<&CellOutcome> {
        self.outcomes.get(entity)
    }

    /// Number of distinct entities.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Iterate entities and outcomes in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellOutcome)> {
        self.outcomes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Entities whose extraction failed, in table order.
    pub fn failed_entities(&self) -> Vec<String> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| outcome.is_failed())
            .map(|(entity, _)| entity.clone())
            .collect()
    }

    pub fn answer_count(&self) -> usize {
        self.outcomes.values().filter(|o| o.is_answer()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.outcomes.values().filter(|o| o.is_failed()).count()
    }

    /// Materialize as a two-column table: the original key column and
    /// [`EXTRACTED_HEADER`].
    pub fn to_table(&self) -> DataTable {
        let headers = vec![self.key_column.clone(), EXTRACTED_HEADER.to_string()];
        let rows = self
            .outcomes
            .iter()
            .map(|(entity, outcome)| vec![entity.clone(), outcome.display_value()])
            .collect();
        DataTable::new(headers, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_entities_collapse_last_write_wins() {
        let mut results = ResultsTable::new("Company");
        results.insert("Acme", CellOutcome::Answer("first".to_string()));
        results.insert("Globex", CellOutcome::Answer("other".to_string()));
        results.insert("Acme", CellOutcome::Answer("second".to_string()));

        assert_eq!(results.len(), 2);
        assert_eq!(
            results.get("Acme"),
            Some(&CellOutcome::Answer("second".to_string()))
        );

        // Re-inserting keeps the entity's original position.
        let order: Vec<_> = results.iter().map(|(entity, _)| entity).collect();
        assert_eq!(order, vec!["Acme", "Globex"]);
    }

    #[test]
    fn to_table_has_key_column_and_extracted_header() {
        let mut results = ResultsTable::new("Company");
        results.insert("Acme", CellOutcome::Answer("Tim Cook".to_string()));

        let table = results.to_table();
        assert_eq!(table.headers(), &["Company", EXTRACTED_HEADER]);
        assert_eq!(table.rows(), &[vec!["Acme", "Tim Cook"]]);
    }

    #[test]
    fn failed_outcome_renders_error_string_in_table() {
        use crate::error::ExtractError;

        let mut results = ResultsTable::new("Company");
        results.insert(
            "Acme",
            CellOutcome::Failed(ExtractError::Api {
                status: 500,
                body: "internal error".to_string(),
            }),
        );

        let table = results.to_table();
        assert_eq!(table.rows()[0][1], "Error: 500, internal error");
    }

    #[test]
    fn counts_split_answers_and_failures() {
        use crate::error::ExtractError;

        let mut results = ResultsTable::new("Company");
        results.insert("Acme", CellOutcome::Answer("ok".to_string()));
        results.insert(
            "Globex",
            CellOutcome::Failed(ExtractError::Network("timeout".to_string())),
        );

        assert_eq!(results.answer_count(), 1);
        assert_eq!(results.failure_count(), 1);
        assert_eq!(results.failed_entities(), vec!["Globex"]);
    }
}

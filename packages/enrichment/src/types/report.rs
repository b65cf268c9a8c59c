//! Run reports.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::types::outcome::ResultsTable;

/// Summary of a completed enrichment run.
///
/// Carries the aggregated results plus enough bookkeeping to tell the
/// user what happened without re-scanning the table.
#[derive(Debug, Clone)]
pub struct EnrichmentReport {
    /// Unique id for this run.
    pub run_id: Uuid,

    /// When the run started.
    pub started_at: DateTime<Utc>,

    /// When the run finished.
    pub finished_at: DateTime<Utc>,

    /// Number of entity cells processed, duplicates included.
    pub entities_processed: usize,

    /// Distinct entities with a real answer.
    pub answers: usize,

    /// Distinct entities whose extraction failed.
    pub failures: usize,

    /// Entities whose extraction failed, in table order.
    pub failed_entities: Vec<String>,

    /// The aggregated entity → outcome results.
    pub results: ResultsTable,
}

impl EnrichmentReport {
    /// Wall-clock duration of the run.
    pub fn duration(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }

    /// True when every entity produced a real answer.
    pub fn is_clean(&self) -> bool {
        self.failures == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::outcome::{CellOutcome, ResultsTable};

    #[test]
    fn clean_report_has_no_failures() {
        let mut results = ResultsTable::new("Company");
        results.insert("Acme", CellOutcome::Answer("ok".to_string()));

        let now = Utc::now();
        let report = EnrichmentReport {
            run_id: Uuid::new_v4(),
            started_at: now,
            finished_at: now,
            entities_processed: 1,
            answers: 1,
            failures: 0,
            failed_entities: Vec::new(),
            results,
        };

        assert!(report.is_clean());
    }
}

//! Run orchestration.

use chrono::Utc;
use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::Result;
use crate::pipeline::progress::{ProgressReporter, SilentProgress};
use crate::traits::{Extractor, Searcher};
use crate::types::{
    config::RunConfig,
    outcome::{CellOutcome, ResultsTable},
    report::EnrichmentReport,
    table::DataTable,
};

/// Drives the per-entity enrichment pipeline.
///
/// Holds only the searcher and extractor; everything run-specific
/// lives in the [`RunConfig`] and the report a run returns, so one
/// `Enricher` can serve any number of runs.
pub struct Enricher<S, X> {
    searcher: S,
    extractor: X,
}

impl<S: Searcher, X: Extractor> Enricher<S, X> {
    pub fn new(searcher: S, extractor: X) -> Self {
        Self {
            searcher,
            extractor,
        }
    }

    /// Run the pipeline without progress reporting.
    pub async fn run(&self, table: &DataTable, config: &RunConfig) -> Result<EnrichmentReport> {
        self.run_with_progress(table, config, &SilentProgress).await
    }

    /// Run the pipeline, reporting after each entity.
    ///
    /// Entities are the values of the configured key column in row
    /// order. With `concurrency > 1`, up to that many entities are in
    /// flight at once, but outcomes are still applied in input order,
    /// so duplicate collapse produces the same table as a sequential
    /// run.
    ///
    /// A search failure aborts the run. Extraction failures are
    /// recorded against their entity and the run continues.
    pub async fn run_with_progress(
        &self,
        table: &DataTable,
        config: &RunConfig,
        progress: &dyn ProgressReporter,
    ) -> Result<EnrichmentReport> {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();

        let entities = table.column_values(&config.key_column)?;
        let total = entities.len();

        info!(
            %run_id,
            column = %config.key_column,
            entities = total,
            concurrency = config.concurrency,
            "Starting enrichment run"
        );
        progress.started(total);

        let mut results = ResultsTable::new(&config.key_column);
        let mut outcomes = stream::iter(entities)
            .map(|entity| async move {
                let outcome = self.enrich_entity(&entity, config).await;
                (entity, outcome)
            })
            .buffered(config.concurrency.max(1));

        let mut processed = 0usize;
        while let Some((entity, outcome)) = outcomes.next().await {
            let outcome = outcome?;
            processed += 1;
            results.insert(entity.clone(), outcome);
            progress.entity_processed(&entity, processed, total);
        }

        progress.finished(total);
        let finished_at = Utc::now();

        let report = EnrichmentReport {
            run_id,
            started_at,
            finished_at,
            entities_processed: processed,
            answers: results.answer_count(),
            failures: results.failure_count(),
            failed_entities: results.failed_entities(),
            results,
        };

        info!(
            %run_id,
            answers = report.answers,
            failures = report.failures,
            "Enrichment run complete"
        );

        Ok(report)
    }

    async fn enrich_entity(&self, entity: &str, config: &RunConfig) -> Result<CellOutcome> {
        let query = config.template.render(entity);
        debug!(entity, query = %query, "Searching");

        let context = self.searcher.search(&query).await?;
        debug!(
            entity,
            context_bytes = context.text().len(),
            "Context assembled"
        );

        match self
            .extractor
            .extract(config.template.raw(), entity, &context)
            .await
        {
            Ok(answer) => Ok(CellOutcome::Answer(answer)),
            Err(err) => {
                warn!(entity, error = %err, "Extraction failed, recording error outcome");
                Ok(CellOutcome::Failed(err))
            }
        }
    }
}

//! Progress reporting for enrichment runs.

/// Observer for per-entity run progress.
///
/// Callbacks run inline on the pipeline task, so implementations must
/// be cheap and must not block.
pub trait ProgressReporter: Send + Sync {
    /// A run over `total` entities is starting.
    fn started(&self, total: usize) {
        let _ = total;
    }

    /// One entity finished; `processed` of `total` are now done.
    fn entity_processed(&self, entity: &str, processed: usize, total: usize) {
        let _ = (entity, processed, total);
    }

    /// The run finished.
    fn finished(&self, total: usize) {
        let _ = total;
    }
}

/// Reporter that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {}

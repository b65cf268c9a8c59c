//! Run configuration.

use crate::types::template::PromptTemplate;

/// Configuration for a single enrichment run.
///
/// A run is scoped entirely by this value plus the input table; no
/// state is shared between runs.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Name of the column whose values are enriched.
    pub key_column: String,

    /// The user's extraction prompt.
    pub template: PromptTemplate,

    /// Number of entities in flight at once. The default of 1 keeps
    /// the run strictly sequential.
    pub concurrency: usize,
}

impl RunConfig {
    /// Create a run config with sequential processing.
    pub fn new(key_column: impl Into<String>, template: impl Into<PromptTemplate>) -> Self {
        Self {
            key_column: key_column.into(),
            template: template.into(),
            concurrency: 1,
        }
    }

    /// Set the number of entities processed concurrently.
    ///
    /// Zero is treated as 1.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_sequential() {
        let config = RunConfig::new("Company", "CEO of {column_name}");
        assert_eq!(config.concurrency, 1);
    }

    #[test]
    fn zero_concurrency_is_clamped() {
        let config = RunConfig::new("Company", "x").with_concurrency(0);
        assert_eq!(config.concurrency, 1);
    }
}

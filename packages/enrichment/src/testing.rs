//! Testing utilities including mock implementations.
//!
//! These are useful for testing applications that use the enrichment
//! library without making real search or LLM calls.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{EnrichmentError, ExtractError, ExtractResult, Result};
use crate::pipeline::progress::ProgressReporter;
use crate::traits::extractor::Extractor;
use crate::traits::searcher::{SearchContext, Searcher};

/// A mock searcher with canned contexts per query.
///
/// Unknown queries return an empty context unless a default is set.
/// Configured to fail, every search returns a run-aborting error.
///
/// Clones share state, so tests can keep a handle for assertions
/// after moving the mock into an `Enricher`.
#[derive(Default, Clone)]
pub struct MockSearcher {
    contexts: Arc<RwLock<HashMap<String, String>>>,
    default_context: Option<String>,
    fail: bool,
    queries: Arc<RwLock<Vec<String>>>,
}

impl MockSearcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the context returned for one exact query.
    pub fn with_context(self, query: impl Into<String>, context: impl Into<String>) -> Self {
        self.contexts
            .write()
            .unwrap()
            .insert(query.into(), context.into());
        self
    }

    /// Set the context returned for any query without its own entry.
    pub fn with_default_context(mut self, context: impl Into<String>) -> Self {
        self.default_context = Some(context.into());
        self
    }

    /// Make every search fail.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// All queries this mock has received, in call order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.read().unwrap().clone()
    }
}

#[async_trait]
impl Searcher for MockSearcher {
    async fn search(&self, query: &str) -> Result<SearchContext> {
        self.queries.write().unwrap().push(query.to_string());

        if self.fail {
            return Err(EnrichmentError::Search {
                query: query.to_string(),
                source: Box::new(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "simulated search outage",
                )),
            });
        }

        if let Some(context) = self.contexts.read().unwrap().get(query) {
            return Ok(SearchContext::new(context.clone()));
        }
        if let Some(default) = &self.default_context {
            return Ok(SearchContext::new(default.clone()));
        }
        Ok(SearchContext::empty())
    }
}

/// Record of one call made to [`MockExtractor`].
#[derive(Debug, Clone)]
pub struct ExtractorCall {
    pub question: String,
    pub entity: String,
    pub context: String,
}

/// A mock extractor with canned answers and failures per entity.
///
/// Entities without an entry get a deterministic placeholder answer.
/// Clones share state, like [`MockSearcher`].
#[derive(Default, Clone)]
pub struct MockExtractor {
    answers: Arc<RwLock<HashMap<String, String>>>,
    failures: Arc<RwLock<HashMap<String, ExtractError>>>,
    calls: Arc<RwLock<Vec<ExtractorCall>>>,
}

impl MockExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the answer returned for one entity.
    pub fn with_answer(self, entity: impl Into<String>, answer: impl Into<String>) -> Self {
        self.answers
            .write()
            .unwrap()
            .insert(entity.into(), answer.into());
        self
    }

    /// Make extraction fail for one entity.
    pub fn with_failure(self, entity: impl Into<String>, error: ExtractError) -> Self {
        self.failures.write().unwrap().insert(entity.into(), error);
        self
    }

    /// All calls this mock has received, in call order.
    pub fn calls(&self) -> Vec<ExtractorCall> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl Extractor for MockExtractor {
    async fn extract(
        &self,
        question: &str,
        entity: &str,
        context: &SearchContext,
    ) -> ExtractResult<String> {
        self.calls.write().unwrap().push(ExtractorCall {
            question: question.to_string(),
            entity: entity.to_string(),
            context: context.text().to_string(),
        });

        if let Some(error) = self.failures.read().unwrap().get(entity) {
            return Err(error.clone());
        }
        if let Some(answer) = self.answers.read().unwrap().get(entity) {
            return Ok(answer.clone());
        }
        Ok(format!("answer for {entity}"))
    }
}

/// Progress event recorded by [`RecordingProgress`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Started {
        total: usize,
    },
    Processed {
        entity: String,
        processed: usize,
        total: usize,
    },
    Finished {
        total: usize,
    },
}

/// Progress reporter that records every event for assertions.
#[derive(Default)]
pub struct RecordingProgress {
    events: Arc<RwLock<Vec<ProgressEvent>>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, in order.
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.read().unwrap().clone()
    }

    /// Number of `Processed` events seen so far.
    pub fn processed_count(&self) -> usize {
        self.events
            .read()
            .unwrap()
            .iter()
            .filter(|e| matches!(e, ProgressEvent::Processed { .. }))
            .count()
    }
}

impl ProgressReporter for RecordingProgress {
    fn started(&self, total: usize) {
        self.events
            .write()
            .unwrap()
            .push(ProgressEvent::Started { total });
    }

    fn entity_processed(&self, entity: &str, processed: usize, total: usize) {
        self.events.write().unwrap().push(ProgressEvent::Processed {
            entity: entity.to_string(),
            processed,
            total,
        });
    }

    fn finished(&self, total: usize) {
        self.events
            .write()
            .unwrap()
            .push(ProgressEvent::Finished { total });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_searcher_returns_configured_context() {
        let searcher = MockSearcher::new().with_context("CEO of Acme", "Acme context");

        let hit = searcher.search("CEO of Acme").await.unwrap();
        assert_eq!(hit.text(), "Acme context");

        let miss = searcher.search("CEO of Globex").await.unwrap();
        assert!(miss.is_empty());

        assert_eq!(searcher.queries(), vec!["CEO of Acme", "CEO of Globex"]);
    }

    #[tokio::test]
    async fn mock_extractor_fails_only_configured_entities() {
        let extractor = MockExtractor::new().with_failure(
            "Globex",
            ExtractError::Network("unreachable".to_string()),
        );

        assert!(extractor
            .extract("q", "Acme", &SearchContext::empty())
            .await
            .is_ok());
        assert!(extractor
            .extract("q", "Globex", &SearchContext::empty())
            .await
            .is_err());
    }
}

//! Web search trait.
//!
//! One search per entity, flattened into a plain-text context blob for
//! the extractor. Providers differ in what structure they return; the
//! flattening into lines is the implementation's job so the rest of
//! the pipeline only ever sees text.

use async_trait::async_trait;

use crate::error::Result;

/// The flattened text context assembled from one search response.
///
/// Ephemeral: built per entity, handed to the extractor, then dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchContext {
    text: String,
}

impl SearchContext {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// A context with no content, as produced by a search that found
    /// nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The assembled context text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Searches the web for one query and flattens the response.
///
/// A search failure is a run-level error: the caller aborts rather
/// than enriching the remaining entities against a provider that is
/// down.
#[async_trait]
pub trait Searcher: Send + Sync {
    /// Execute one search and assemble the context blob.
    ///
    /// A query with no usable results yields an empty context, not an
    /// error.
    async fn search(&self, query: &str) -> Result<SearchContext>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_context_has_no_text() {
        let context = SearchContext::empty();
        assert!(context.is_empty());
        assert_eq!(context.text(), "");
    }
}

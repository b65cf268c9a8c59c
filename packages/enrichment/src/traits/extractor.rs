//! LLM extraction trait.

use async_trait::async_trait;

use crate::error::ExtractResult;
use crate::traits::searcher::SearchContext;

/// Extracts one requested feature from a search context.
///
/// Failures here are per-entity: the error is returned to the caller,
/// which records it against the entity and moves on. An extractor must
/// not panic or abort the surrounding run.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Answer `question` about `entity` using only `context`.
    ///
    /// `question` is the user's prompt template verbatim, placeholder
    /// included; the model sees the entity separately.
    async fn extract(
        &self,
        question: &str,
        entity: &str,
        context: &SearchContext,
    ) -> ExtractResult<String>;
}

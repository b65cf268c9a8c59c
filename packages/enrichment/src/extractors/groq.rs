//! Groq-backed extractor.

use async_trait::async_trait;
use groq_client::{ChatRequest, GroqClient, GroqError, Message, DEFAULT_MODEL};
use tracing::debug;

use crate::error::{ExtractError, ExtractResult};
use crate::pipeline::prompts::{format_extract_prompt, EXTRACT_SYSTEM_PROMPT};
use crate::traits::extractor::Extractor;
use crate::traits::searcher::SearchContext;

/// Extractor backed by Groq's chat-completions endpoint.
///
/// Sends a two-message exchange (system instruction plus the filled
/// extraction prompt) and returns the trimmed content of the first
/// choice.
pub struct GroqExtractor {
    client: GroqClient,
    model: String,
}

impl GroqExtractor {
    pub fn new(client: GroqClient) -> Self {
        Self {
            client,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Use a different model id.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// The model id requests are sent with.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Extractor for GroqExtractor {
    async fn extract(
        &self,
        question: &str,
        entity: &str,
        context: &SearchContext,
    ) -> ExtractResult<String> {
        let prompt = format_extract_prompt(question, entity, context.text());
        let request = ChatRequest::new(&self.model)
            .message(Message::system(EXTRACT_SYSTEM_PROMPT))
            .message(Message::user(prompt));

        let response = self
            .client
            .chat_completion(request)
            .await
            .map_err(map_groq_error)?;

        let answer = response.content.trim().to_string();
        debug!(entity, answer_chars = answer.len(), "Feature extracted");
        Ok(answer)
    }
}

fn map_groq_error(err: GroqError) -> ExtractError {
    match err {
        GroqError::Api { status, body } => ExtractError::Api { status, body },
        GroqError::Network(message) => ExtractError::Network(message),
        GroqError::Parse(message) => ExtractError::Parse(message),
        GroqError::Config(message) => ExtractError::Network(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_standard_model() {
        let extractor = GroqExtractor::new(GroqClient::new("gsk-test"));
        assert_eq!(extractor.model(), DEFAULT_MODEL);
    }

    #[test]
    fn model_can_be_overridden() {
        let extractor =
            GroqExtractor::new(GroqClient::new("gsk-test")).with_model("llama-3.1-70b-versatile");
        assert_eq!(extractor.model(), "llama-3.1-70b-versatile");
    }

    #[test]
    fn api_errors_keep_status_and_body() {
        let mapped = map_groq_error(GroqError::Api {
            status: 503,
            body: "overloaded".to_string(),
        });
        assert_eq!(
            mapped,
            ExtractError::Api {
                status: 503,
                body: "overloaded".to_string()
            }
        );
    }
}

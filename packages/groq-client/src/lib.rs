//! Pure Groq REST API client.
//!
//! A minimal client for Groq's OpenAI-compatible chat-completions endpoint.
//! No domain-specific logic; request in, typed response out.
//!
//! # Example
//!
//! ```rust,ignore
//! use groq_client::{ChatRequest, GroqClient, Message, DEFAULT_MODEL};
//!
//! let client = GroqClient::from_env()?;
//!
//! let response = client
//!     .chat_completion(
//!         ChatRequest::new(DEFAULT_MODEL)
//!             .message(Message::system("You are a helpful assistant."))
//!             .message(Message::user("Hello!")),
//!     )
//!     .await?;
//! println!("{}", response.content);
//! ```

pub mod error;
pub mod types;

pub use error::{GroqError, Result};
pub use types::{ChatRequest, ChatResponse, Message, Usage};

use tracing::{debug, warn};

/// Default chat model.
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";

const BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Pure Groq API client.
#[derive(Clone)]
pub struct GroqClient {
    http_client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GroqClient {
    /// Create a new Groq client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Create from environment variable `GROQ_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GROQ_API_KEY")
            .map_err(|_| GroqError::Config("GROQ_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for proxies or test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Chat completion.
    ///
    /// Sends the messages and returns the content of the first choice. A
    /// non-2xx response becomes [`GroqError::Api`] carrying the status code
    /// and the raw body.
    pub async fn chat_completion(&self, request: ChatRequest) -> Result<ChatResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Groq request failed");
                GroqError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Groq API error");
            return Err(GroqError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let raw: types::ChatResponseRaw = response
            .json()
            .await
            .map_err(|e| GroqError::Parse(e.to_string()))?;

        let content = raw
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| GroqError::Parse("no choices in Groq response".into()))?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            "Groq chat completion"
        );

        Ok(ChatResponse {
            content,
            usage: raw.usage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = GroqClient::new("gsk-test").with_base_url("https://custom.api.test");
        assert_eq!(client.api_key, "gsk-test");
        assert_eq!(client.base_url, "https://custom.api.test");
    }

    #[test]
    fn test_default_model() {
        assert_eq!(DEFAULT_MODEL, "llama3-8b-8192");
    }

    // Requires a real Groq API key; ignored by default.
    #[tokio::test]
    #[ignore]
    async fn test_live_chat_completion() {
        let client = GroqClient::from_env().expect("GROQ_API_KEY required");
        let response = client
            .chat_completion(
                ChatRequest::new(DEFAULT_MODEL)
                    .message(Message::user("Reply with the single word: ok")),
            )
            .await
            .unwrap();
        assert!(!response.content.is_empty());
    }
}

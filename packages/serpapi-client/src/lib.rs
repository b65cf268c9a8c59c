//! Pure SerpAPI REST client.
//!
//! A minimal client for SerpAPI's search endpoint. Builds the query, checks
//! the response status, and hands back typed results with no domain logic.
//!
//! # Example
//!
//! ```rust,ignore
//! use serpapi_client::{SearchParams, SerpClient};
//!
//! let client = SerpClient::from_env()?;
//! let response = client.search(&SearchParams::google("Acme Corp CEO")).await?;
//! for result in &response.organic_results {
//!     println!("{:?} - {:?}", result.title, result.snippet);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{Result, SerpError};
pub use types::{OrganicResult, SearchParams, SearchResponse};

const BASE_URL: &str = "https://serpapi.com/search.json";

/// Pure SerpAPI client.
#[derive(Clone)]
pub struct SerpClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl SerpClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Create from environment variable `SERP_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("SERP_API_KEY")
            .map_err(|_| SerpError::Config("SERP_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for proxies or test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Issue a single search request.
    ///
    /// One request, no pagination. SerpAPI sometimes reports failures inside a
    /// 200 body via an `error` field; that is surfaced as [`SerpError::Api`]
    /// just like a non-success status.
    pub async fn search(&self, params: &SearchParams) -> Result<SearchResponse> {
        let resp = self
            .client
            .get(&self.base_url)
            .query(params)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status = %status, "SerpAPI request failed");
            return Err(SerpError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let mut response: SearchResponse = resp.json().await?;

        if let Some(message) = response.error.take() {
            return Err(SerpError::Api {
                status: status.as_u16(),
                message,
            });
        }

        tracing::debug!(
            query = %params.q,
            organic = response.organic_results.len(),
            knowledge_graph = response.knowledge_graph.is_some(),
            "SerpAPI search complete"
        );

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = SerpClient::new("secret").with_base_url("https://example.test/search");
        assert_eq!(client.api_key, "secret");
        assert_eq!(client.base_url, "https://example.test/search");
    }

    // Requires a real SerpAPI key; ignored by default.
    #[tokio::test]
    #[ignore]
    async fn test_live_search() {
        let client = SerpClient::from_env().expect("SERP_API_KEY required");
        let response = client
            .search(&SearchParams::google("example").with_num(5))
            .await
            .unwrap();
        assert!(!response.organic_results.is_empty());
    }
}

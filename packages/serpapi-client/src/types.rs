//! SerpAPI request and response types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Query parameters for a search request.
///
/// Serialized directly into the query string; the API key is attached by the
/// client, not carried here.
#[derive(Debug, Clone, Serialize)]
pub struct SearchParams {
    /// Search engine (e.g., "google")
    pub engine: String,

    /// The query string
    pub q: String,

    /// Maximum number of organic results to request
    pub num: u32,
}

impl SearchParams {
    /// Create Google search parameters with the default result count (100).
    pub fn google(query: impl Into<String>) -> Self {
        Self {
            engine: "google".to_string(),
            q: query.into(),
            num: 100,
        }
    }

    /// Set the requested result count.
    pub fn with_num(mut self, num: u32) -> Self {
        self.num = num;
        self
    }
}

/// A search response.
///
/// SerpAPI returns many engine-specific sections; only the ones consumers use
/// are modeled. The knowledge graph is kept as a loose map because its fields
/// vary by entity type.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Knowledge panel data, present only for well-known entities.
    #[serde(default)]
    pub knowledge_graph: Option<serde_json::Map<String, Value>>,

    /// Organic results in ranking order.
    #[serde(default)]
    pub organic_results: Vec<OrganicResult>,

    /// Error message SerpAPI embeds in the body for some failures
    /// (e.g., "Google hasn't returned any results for this query.").
    #[serde(default)]
    pub error: Option<String>,
}

impl SearchResponse {
    /// Look up a knowledge-graph field by key, returning it only when the
    /// value is a string. Non-string values (arrays, nested objects) are
    /// treated as absent.
    pub fn knowledge_field(&self, key: &str) -> Option<&str> {
        self.knowledge_graph
            .as_ref()
            .and_then(|kg| kg.get(key))
            .and_then(Value::as_str)
    }
}

/// A single organic search result.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganicResult {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub snippet: Option<String>,

    #[serde(default)]
    pub link: Option<String>,
}

//! SerpAPI-backed searcher.

use async_trait::async_trait;
use serpapi_client::{SearchParams, SearchResponse, SerpClient};
use tracing::debug;

use crate::error::{EnrichmentError, Result};
use crate::traits::searcher::{SearchContext, Searcher};

/// Knowledge-panel fields flattened into the context, in this order.
///
/// Absent fields still emit a line so the blob's shape is stable for
/// an entity regardless of how sparse its panel is.
const KNOWLEDGE_FIELDS: &[&str] = &[
    "title",
    "type",
    "website",
    "founded",
    "headquarters",
    "revenue",
    "social",
    "mobile",
    "phone",
    "ceo",
    "email",
    "contact email",
    "address",
    "contact",
    "call",
    "chat",
    "connect",
    "write",
    "twitter",
    "instagram",
    "facebook",
];

/// Placeholder for organic results lacking a title or snippet.
const MISSING_FIELD: &str = "N/A";

/// Default number of organic results to request per query.
const DEFAULT_NUM_RESULTS: u32 = 100;

/// Searcher backed by SerpAPI's Google engine.
///
/// One GET per query, flattened into lines: the whitelisted
/// knowledge-panel fields first (only when the response carries a
/// panel at all), then one `title - snippet` line per organic result
/// in response order.
pub struct SerpSearcher {
    client: SerpClient,
    num_results: u32,
}

impl SerpSearcher {
    pub fn new(client: SerpClient) -> Self {
        Self {
            client,
            num_results: DEFAULT_NUM_RESULTS,
        }
    }

    /// Request a different number of organic results per query.
    pub fn with_num_results(mut self, num_results: u32) -> Self {
        self.num_results = num_results;
        self
    }

    fn flatten(response: &SearchResponse) -> SearchContext {
        let mut text = String::new();

        if response.knowledge_graph.is_some() {
            for field in KNOWLEDGE_FIELDS {
                text.push_str(response.knowledge_field(field).unwrap_or(""));
                text.push('\n');
            }
        }

        for result in &response.organic_results {
            text.push_str(result.title.as_deref().unwrap_or(MISSING_FIELD));
            text.push_str(" - ");
            text.push_str(result.snippet.as_deref().unwrap_or(MISSING_FIELD));
            text.push('\n');
        }

        SearchContext::new(text)
    }
}

#[async_trait]
impl Searcher for SerpSearcher {
    async fn search(&self, query: &str) -> Result<SearchContext> {
        let params = SearchParams::google(query).with_num(self.num_results);
        let response =
            self.client
                .search(&params)
                .await
                .map_err(|e| EnrichmentError::Search {
                    query: query.to_string(),
                    source: Box::new(e),
                })?;

        let context = Self::flatten(&response);
        debug!(
            query,
            organic_results = response.organic_results.len(),
            has_knowledge_panel = response.knowledge_graph.is_some(),
            context_bytes = context.text().len(),
            "Search flattened"
        );

        Ok(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: serde_json::Value) -> SearchResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn organic_only_yields_one_line_per_result_in_order() {
        let response = response(json!({
            "organic_results": [
                {"title": "Acme Corp - Official Site", "snippet": "Makers of everything."},
                {"title": "Acme on Wikipedia", "snippet": "Acme Corp is a company."}
            ]
        }));

        let context = SerpSearcher::flatten(&response);
        assert_eq!(
            context.text(),
            "Acme Corp - Official Site - Makers of everything.\n\
             Acme on Wikipedia - Acme Corp is a company.\n"
        );
    }

    #[test]
    fn missing_title_or_snippet_becomes_na() {
        let response = response(json!({
            "organic_results": [
                {"snippet": "No title here."},
                {"title": "No snippet here"}
            ]
        }));

        let context = SerpSearcher::flatten(&response);
        assert_eq!(
            context.text(),
            "N/A - No title here.\nNo snippet here - N/A\n"
        );
    }

    #[test]
    fn knowledge_panel_fields_come_first_in_fixed_order() {
        let response = response(json!({
            "knowledge_graph": {
                "title": "Acme Corp",
                "type": "Manufacturer",
                "website": "https://acme.example",
                "ceo": "Jane Doe"
            },
            "organic_results": [
                {"title": "Acme", "snippet": "snippet"}
            ]
        }));

        let context = SerpSearcher::flatten(&response);
        let lines: Vec<&str> = context.text().lines().collect();

        // One line per whitelisted field, then the organic lines.
        assert_eq!(lines.len(), KNOWLEDGE_FIELDS.len() + 1);
        assert_eq!(lines[0], "Acme Corp");
        assert_eq!(lines[1], "Manufacturer");
        assert_eq!(lines[2], "https://acme.example");
        assert_eq!(lines[3], ""); // founded, absent
        assert_eq!(lines[9], "Jane Doe"); // ceo
        assert_eq!(lines[KNOWLEDGE_FIELDS.len()], "Acme - snippet");
    }

    #[test]
    fn no_panel_means_no_panel_lines() {
        let response = response(json!({
            "organic_results": [{"title": "t", "snippet": "s"}]
        }));

        let context = SerpSearcher::flatten(&response);
        assert_eq!(context.text(), "t - s\n");
    }

    #[test]
    fn empty_response_yields_empty_context() {
        let response = response(json!({}));
        let context = SerpSearcher::flatten(&response);
        assert!(context.is_empty());
    }

    #[test]
    fn non_string_panel_values_are_treated_as_absent() {
        let response = response(json!({
            "knowledge_graph": {
                "title": "Acme Corp",
                "founded": 1949
            },
            "organic_results": []
        }));

        let context = SerpSearcher::flatten(&response);
        let lines: Vec<&str> = context.text().lines().collect();
        assert_eq!(lines[0], "Acme Corp");
        assert_eq!(lines[3], ""); // founded is numeric, skipped
    }
}

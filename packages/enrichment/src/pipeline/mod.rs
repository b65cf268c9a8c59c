//! Enrichment pipeline - the core of the library.
//!
//! One run walks the chosen column of the input table and, per entity:
//! - renders the prompt template into a search query
//! - fetches and flattens one web search response
//! - asks the model to extract the requested feature from the context
//! - records the tagged outcome against the entity
//!
//! Outcomes aggregate into a results table in first-seen entity order,
//! with duplicate entities collapsing to their latest outcome.

pub mod progress;
pub mod prompts;
pub mod run;

pub use progress::{ProgressReporter, SilentProgress};
pub use prompts::{format_extract_prompt, EXTRACT_PROMPT, EXTRACT_SYSTEM_PROMPT};
pub use run::Enricher;

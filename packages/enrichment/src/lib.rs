//! Table Enrichment Library
//!
//! Enriches a table of entities (company names, products, people) by
//! running one web search per entity, handing the flattened results to
//! an LLM with a user-authored extraction prompt, and aggregating the
//! answers into a two-column results table.
//!
//! # Design
//!
//! - One pass per run: load table → per entity (search → extract) →
//!   aggregate → write. No state survives a run.
//! - Failures are asymmetric on purpose: a search failure aborts the
//!   run, an extraction failure is recorded against its entity as a
//!   tagged outcome and the run continues.
//! - Duplicate entities collapse to one row, last outcome wins, first
//!   position kept.
//!
//! # Usage
//!
//! ```rust,ignore
//! use enrichment::{Enricher, RunConfig};
//! use enrichment::io::CsvSource;
//! use enrichment::searchers::SerpSearcher;
//! use enrichment::extractors::GroqExtractor;
//! use enrichment::traits::TableSource;
//!
//! let table = CsvSource::new("companies.csv").load().await?;
//! let enricher = Enricher::new(
//!     SerpSearcher::new(serp_client),
//!     GroqExtractor::new(groq_client),
//! );
//!
//! let config = RunConfig::new("Company", "Find the CEO of {column_name}");
//! let report = enricher.run(&table, &config).await?;
//! println!("{} answers, {} failures", report.answers, report.failures);
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Core trait abstractions (Searcher, Extractor, TableSource/Sink)
//! - [`types`] - Tables, templates, outcomes, reports
//! - [`pipeline`] - The per-entity enrichment run
//! - [`searchers`] - Search provider implementations (SerpAPI)
//! - [`extractors`] - Model implementations (Groq)
//! - [`io`] - CSV and Google Sheets sources/sinks
//! - [`security`] - Credential handling
//! - [`testing`] - Mock implementations for testing

pub mod error;
pub mod extractors;
pub mod io;
pub mod pipeline;
pub mod searchers;
pub mod security;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{EnrichmentError, ExtractError, ExtractResult, Result};
pub use traits::{
    extractor::Extractor,
    searcher::{SearchContext, Searcher},
    source::{TableSink, TableSource},
};
pub use types::{
    config::RunConfig,
    outcome::{CellOutcome, ResultsTable, EXTRACTED_HEADER},
    report::EnrichmentReport,
    table::DataTable,
    template::{PromptTemplate, ALT_PLACEHOLDER, PLACEHOLDER},
};

// Re-export the pipeline entry points
pub use pipeline::{
    format_extract_prompt, Enricher, ProgressReporter, SilentProgress, EXTRACT_PROMPT,
    EXTRACT_SYSTEM_PROMPT,
};

// Re-export implementations
pub use extractors::GroqExtractor;
pub use io::{CsvSink, CsvSource, SheetsSink, SheetsSource};
pub use searchers::SerpSearcher;
pub use security::{Credentials, SecretString};

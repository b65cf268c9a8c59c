//! Core trait abstractions for the enrichment pipeline.
//!
//! The pipeline itself is generic over these seams, so applications
//! can swap search providers, models, and table backends, and tests
//! can run against mocks without touching the network.

pub mod extractor;
pub mod searcher;
pub mod source;

pub use extractor::Extractor;
pub use searcher::{SearchContext, Searcher};
pub use source::{TableSink, TableSource};

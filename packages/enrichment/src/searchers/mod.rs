//! Searcher implementations.

pub mod serpapi;

pub use serpapi::SerpSearcher;

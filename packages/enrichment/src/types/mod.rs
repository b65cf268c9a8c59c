//! Data types for the enrichment pipeline.

pub mod config;
pub mod outcome;
pub mod report;
pub mod table;
pub mod template;

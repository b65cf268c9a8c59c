//! Extractor implementations.

pub mod groq;

pub use groq::GroqExtractor;

//! Table sources and sinks.

pub mod csv;
pub mod sheets;

pub use csv::{CsvSink, CsvSource};
pub use sheets::{SheetsSink, SheetsSource};

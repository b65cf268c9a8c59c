//! Table source and sink traits.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::table::DataTable;

/// Produces the input table for a run.
#[async_trait]
pub trait TableSource: Send + Sync {
    /// Load the full table into memory, header row first.
    async fn load(&self) -> Result<DataTable>;
}

/// Receives the results table at the end of a run.
///
/// Writes are full replacements. There is no merge or append mode;
/// whatever the sink held before is gone after a successful write.
#[async_trait]
pub trait TableSink: Send + Sync {
    /// Write the table, replacing any previous contents.
    async fn write(&self, table: &DataTable) -> Result<()>;
}

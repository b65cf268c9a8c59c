//! CSV file source and sink.

use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;

use async_trait::async_trait;
use csv::{ReaderBuilder, WriterBuilder};
use tracing::debug;

use crate::error::Result;
use crate::traits::source::{TableSink, TableSource};
use crate::types::table::DataTable;

/// Reads the input table from a CSV file with a header row.
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse a table from any reader. The first record is the header.
    ///
    /// The reader is flexible about ragged records; normalization to
    /// the header width happens in [`DataTable`].
    pub fn read_from(reader: impl Read) -> Result<DataTable> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(DataTable::from_rows(rows))
    }
}

#[async_trait]
impl TableSource for CsvSource {
    async fn load(&self) -> Result<DataTable> {
        let file = File::open(&self.path)?;
        let table = Self::read_from(file)?;
        debug!(
            path = %self.path.display(),
            rows = table.len(),
            columns = table.headers().len(),
            "CSV loaded"
        );
        Ok(table)
    }
}

/// Writes a table to a CSV file, replacing any existing file.
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Serialize a table to any writer, header row first.
    pub fn write_to(table: &DataTable, writer: impl Write) -> Result<()> {
        if table.headers().is_empty() {
            return Ok(());
        }

        let mut csv_writer = WriterBuilder::new().from_writer(writer);
        csv_writer.write_record(table.headers())?;
        for row in table.rows() {
            csv_writer.write_record(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

#[async_trait]
impl TableSink for CsvSink {
    async fn write(&self, table: &DataTable) -> Result<()> {
        let file = File::create(&self.path)?;
        Self::write_to(table, file)?;
        debug!(
            path = %self.path.display(),
            rows = table.len(),
            "CSV written"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_header_and_rows() {
        let data = "Company,Website\nAcme Corp,acme.example\n\"Globex, Inc\",globex.example\n";
        let table = CsvSource::read_from(Cursor::new(data)).unwrap();

        assert_eq!(table.headers(), &["Company", "Website"]);
        assert_eq!(table.rows()[1][0], "Globex, Inc");
    }

    #[test]
    fn tolerates_ragged_rows() {
        let data = "A,B,C\n1,2\n4,5,6,7\n";
        let table = CsvSource::read_from(Cursor::new(data)).unwrap();

        assert_eq!(table.rows()[0], vec!["1", "2", ""]);
        assert_eq!(table.rows()[1], vec!["4", "5", "6"]);
    }

    #[test]
    fn empty_input_gives_empty_table() {
        let table = CsvSource::read_from(Cursor::new("")).unwrap();
        assert!(table.is_empty());
        assert!(table.headers().is_empty());
    }

    #[test]
    fn writes_header_then_rows() {
        let table = DataTable::from_rows(vec![
            vec!["Company".to_string(), "Extracted Information".to_string()],
            vec!["Acme".to_string(), "Error: 500, boom".to_string()],
        ]);

        let mut buffer = Vec::new();
        CsvSink::write_to(&table, &mut buffer).unwrap();

        let written = String::from_utf8(buffer).unwrap();
        assert_eq!(
            written,
            "Company,Extracted Information\nAcme,\"Error: 500, boom\"\n"
        );
    }

    #[tokio::test]
    async fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");

        let table = DataTable::from_rows(vec![
            vec!["Company".to_string(), "CEO".to_string()],
            vec!["Acme".to_string(), "Jane Doe".to_string()],
        ]);

        CsvSink::new(&path).write(&table).await.unwrap();
        let loaded = CsvSource::new(&path).load().await.unwrap();

        assert_eq!(loaded, table);
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let err = CsvSource::new("/nonexistent/input.csv")
            .load()
            .await
            .unwrap_err();
        assert!(matches!(err, crate::error::EnrichmentError::Io(_)));
    }
}

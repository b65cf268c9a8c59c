//! Input loading and table rendering shared by the subcommands.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Args;
use enrichment::{CsvSource, DataTable, SheetsSource, TableSource};
use gsheets_client::SheetsClient;
use prettytable::{Cell, Row as PrettyRow, Table};

/// Where the input table comes from. Exactly one must be given.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct InputArgs {
    /// Path to a CSV file with a header row
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Google Sheets URL; the first sheet is read
    #[arg(short, long, value_name = "URL")]
    pub sheet: Option<String>,
}

/// Spreadsheet client kept around so results can be written back to
/// the same sheet the input came from.
pub struct SheetsHandle {
    pub client: Arc<SheetsClient>,
    pub spreadsheet_id: String,
}

/// Load the input table from whichever source was given.
///
/// When the input is a spreadsheet the handle is returned alongside
/// the table for later write-back.
pub async fn load_table(
    input: &InputArgs,
    service_account: Option<&Path>,
) -> Result<(DataTable, Option<SheetsHandle>)> {
    match (&input.input, &input.sheet) {
        (Some(path), _) => {
            let table = CsvSource::new(path)
                .load()
                .await
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok((table, None))
        }
        (None, Some(url)) => {
            let key_path = service_account.context(
                "GOOGLE_SERVICE_ACCOUNT_FILE must point at a service-account key file for spreadsheet access",
            )?;
            let client = Arc::new(
                SheetsClient::from_key_file(key_path)
                    .context("failed to load the service-account key")?,
            );
            let source = SheetsSource::from_url(client.clone(), url)?;
            let spreadsheet_id = source.spreadsheet_id().to_string();
            let table = source
                .load()
                .await
                .context("failed to read the spreadsheet")?;
            Ok((
                table,
                Some(SheetsHandle {
                    client,
                    spreadsheet_id,
                }),
            ))
        }
        (None, None) => bail!("provide --input FILE or --sheet URL"),
    }
}

/// Render a table to stdout, clipped to `limit` rows when given.
pub fn print_table(table: &DataTable, limit: Option<usize>) {
    let mut out = Table::new();
    out.add_row(PrettyRow::new(
        table.headers().iter().map(|h| Cell::new(h)).collect(),
    ));

    let shown = limit.unwrap_or(usize::MAX).min(table.len());
    for row in table.rows().iter().take(shown) {
        out.add_row(PrettyRow::new(
            row.iter().map(|value| Cell::new(&clip(value))).collect(),
        ));
    }
    out.printstd();

    if shown < table.len() {
        println!("... and {} more rows", table.len() - shown);
    }
}

/// Keep long cell values from wrecking the table layout.
fn clip(value: &str) -> String {
    const MAX_CHARS: usize = 80;
    if value.chars().count() <= MAX_CHARS {
        return value.to_string();
    }
    let clipped: String = value.chars().take(MAX_CHARS).collect();
    format!("{}...", clipped)
}

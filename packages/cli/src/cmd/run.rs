//! The `run` subcommand: enrich the input table and export the results.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use enrichment::{
    CsvSink, Enricher, GroqExtractor, ProgressReporter, RunConfig, SerpSearcher, SheetsSink,
    TableSink, PLACEHOLDER,
};
use groq_client::{GroqClient, DEFAULT_MODEL};
use indicatif::{ProgressBar, ProgressStyle};
use serpapi_client::SerpClient;

use crate::cmd::common::{self, InputArgs};
use crate::config;

#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Column whose values are enriched
    #[arg(short, long, value_name = "NAME")]
    pub column: String,

    /// Extraction prompt; {column_name} is replaced with each entity
    #[arg(short, long, value_name = "TEMPLATE")]
    pub prompt: String,

    /// Where the results CSV is written
    #[arg(short, long, value_name = "FILE", default_value = "extracted_results.csv")]
    pub output: PathBuf,

    /// Model id used for extraction
    #[arg(long, value_name = "MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Organic results requested per search
    #[arg(long, value_name = "N", default_value_t = 100)]
    pub num_results: u32,

    /// Entities processed concurrently
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub concurrency: usize,

    /// Overwrite the source spreadsheet's first sheet with the results
    #[arg(long)]
    pub write_sheet: bool,

    /// Skip the confirmation before overwriting the spreadsheet
    #[arg(short = 'y', long)]
    pub yes: bool,
}

pub async fn run(args: RunArgs) -> Result<()> {
    if args.write_sheet && args.input.sheet.is_none() {
        bail!("--write-sheet requires the input to come from --sheet");
    }

    let credentials = config::credentials_from_env()?;
    let (table, sheets) =
        common::load_table(&args.input, credentials.service_account_file.as_deref()).await?;

    if table.column_index(&args.column).is_none() {
        bail!(
            "column \"{}\" not found (available: {})",
            args.column,
            table.headers().join(", ")
        );
    }

    let run_config =
        RunConfig::new(&args.column, args.prompt.as_str()).with_concurrency(args.concurrency);

    if !run_config.template.has_placeholder() {
        println!(
            "{}",
            format!(
                "Note: the prompt has no {} placeholder, so every row runs the same query.",
                PLACEHOLDER
            )
            .yellow()
        );
    }

    println!("{}", "Input preview".bold());
    common::print_table(&table, Some(5));
    println!();

    let searcher = SerpSearcher::new(SerpClient::new(credentials.serp_api_key.expose()))
        .with_num_results(args.num_results);
    let extractor =
        GroqExtractor::new(GroqClient::new(credentials.groq_api_key.expose())).with_model(&args.model);
    let enricher = Enricher::new(searcher, extractor);

    let progress = BarProgress::new();
    let report = enricher
        .run_with_progress(&table, &run_config, &progress)
        .await?;

    let results_table = report.results.to_table();

    println!("{}", "Extracted results".bold());
    common::print_table(&results_table, None);

    CsvSink::new(&args.output)
        .write(&results_table)
        .await
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    println!("{} {}", "Results written to".green(), args.output.display());

    let elapsed = report.duration().num_milliseconds() as f64 / 1000.0;
    let summary = format!(
        "Processed {} entities in {:.1}s: {} answered, {} failed",
        report.entities_processed, elapsed, report.answers, report.failures
    );
    if report.is_clean() {
        println!("{}", summary.green());
    } else {
        println!("{}", summary.yellow());
        println!("Failed entities: {}", report.failed_entities.join(", "));
    }

    if args.write_sheet {
        if let Some(handle) = &sheets {
            let confirmed = args.yes
                || Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt("Overwrite the first sheet of the source spreadsheet?")
                    .default(false)
                    .interact()?;
            if confirmed {
                SheetsSink::new(handle.client.clone(), handle.spreadsheet_id.clone())
                    .write(&results_table)
                    .await
                    .context("failed to update the spreadsheet")?;
                println!("{}", "Google Sheet updated successfully!".green());
            } else {
                println!("Sheet update skipped.");
            }
        }
    }

    Ok(())
}

/// Per-entity progress bar in the house style.
struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::default_bar()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.green} [{bar:40.green/dim}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("█▓░"),
        );
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }
}

impl ProgressReporter for BarProgress {
    fn started(&self, total: usize) {
        self.bar.set_length(total as u64);
    }

    fn entity_processed(&self, entity: &str, processed: usize, _total: usize) {
        self.bar.set_position(processed as u64);
        self.bar.set_message(entity.to_string());
    }

    fn finished(&self, _total: usize) {
        self.bar.finish_and_clear();
    }
}

//! `rowscout` — enrich a table of entities with web search + LLM extraction.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod cmd;
mod config;

#[derive(Parser)]
#[command(name = "rowscout")]
#[command(version, about = "Enrich a table of entities with web search and LLM extraction")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an enrichment over a CSV file or Google Sheet
    Run(cmd::run::RunArgs),

    /// Show the input table without running anything
    Preview(cmd::preview::PreviewArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run(args) => cmd::run::run(args).await,
        Commands::Preview(args) => cmd::preview::run(args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

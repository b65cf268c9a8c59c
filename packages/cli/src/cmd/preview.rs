//! The `preview` subcommand: show the input table without enriching it.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::cmd::common::{self, InputArgs};
use crate::config;

#[derive(Debug, Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Number of rows to show
    #[arg(short = 'n', long, default_value_t = 10)]
    pub rows: usize,
}

pub async fn run(args: PreviewArgs) -> Result<()> {
    let service_account = config::service_account_file_from_env();
    let (table, _) = common::load_table(&args.input, service_account.as_deref()).await?;

    if table.headers().is_empty() {
        println!("{}", "The table is empty.".yellow());
        return Ok(());
    }

    common::print_table(&table, Some(args.rows));
    println!("{} rows x {} columns", table.len(), table.headers().len());

    Ok(())
}

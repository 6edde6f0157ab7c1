//! Solve command - enumerate every opening chain and report it

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;

use super::run_search;
use crate::{
    adapters::{CsvReporter, JsonReporter, TextReporter},
    app::{DEFAULT_ATTEMPT_LIMIT, DEFAULT_RELAY_LIMIT, SearchConfig},
    cli::config::{CommonConfig, OutputFormat, SolveConfig},
    ports::Reporter,
    search::SearchReport,
};

#[derive(Parser, Debug)]
#[command(about = "Enumerate every opening chain and report the results")]
pub struct SolveArgs {
    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Only report the best-scoring attempts
    #[arg(long)]
    pub winners_only: bool,

    /// Print the board after every move of each winner (text format)
    #[arg(long)]
    pub boards: bool,

    /// Emit single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Disable the progress spinner
    #[arg(long)]
    pub no_progress: bool,

    /// Maximum sowing passes within one move
    #[arg(long, default_value_t = DEFAULT_RELAY_LIMIT)]
    pub relay_limit: usize,

    /// Maximum attempts before the search is aborted
    #[arg(long, default_value_t = DEFAULT_ATTEMPT_LIMIT)]
    pub attempt_limit: usize,
}

impl From<&SolveArgs> for SolveConfig {
    fn from(args: &SolveArgs) -> Self {
        Self {
            common: CommonConfig {
                progress: !args.no_progress,
            },
            format: args.format,
            output: args.output.clone(),
            winners_only: args.winners_only,
            show_boards: args.boards,
            compact: args.compact,
        }
    }
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let config = SolveConfig::from(&args);
    let search_config = SearchConfig::new()
        .with_relay_limit(args.relay_limit)
        .with_attempt_limit(args.attempt_limit);

    let report = run_search(&search_config, config.common.progress)?;

    match &config.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_report(&report, &config, BufWriter::new(file))
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            println!("Report written to: {}", path.display());
        }
        None => write_report(&report, &config, io::stdout().lock())?,
    }

    Ok(())
}

/// Render `report` in the configured format.
pub fn write_report<W: Write>(report: &SearchReport, config: &SolveConfig, writer: W) -> Result<()> {
    match config.format {
        OutputFormat::Text => TextReporter::new(writer)
            .winners_only(config.winners_only)
            .show_boards(config.show_boards)
            .report(report)?,
        OutputFormat::Json => JsonReporter::new(writer)
            .pretty(!config.compact)
            .winners_only(config.winners_only)
            .report(report)?,
        OutputFormat::Csv => CsvReporter::new(writer)
            .winners_only(config.winners_only)
            .report(report)?,
    }
    Ok(())
}

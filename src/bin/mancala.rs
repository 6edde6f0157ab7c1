//! Mancala CLI - enumerate, summarise and replay opening free-turn chains
//!
//! This CLI provides:
//! - Exhaustive enumeration of every opening move chain with text, JSON or CSV output
//! - Summary statistics over scores, depths and endings
//! - Replay of a single pit sequence with the board after each move

use std::cmp::max;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

#[derive(Parser, Debug)]
#[command(name = "mancala")]
#[command(version, about = "Enumerate Mancala opening free-turn chains", long_about = None)]
struct Cli {
    #[clap(flatten)]
    global_opts: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, Args)]
struct GlobalOpts {
    /// Enable debug logging
    #[arg(global = true, long, default_value_t = false)]
    debug: bool,

    /// Log level; raised to at least `debug` when --debug is set
    #[arg(global = true, long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,

    /// Disable colored log output
    #[arg(global = true, long, default_value_t = false)]
    no_colors: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Enumerate every opening chain and report the results
    Solve(mancala::cli::commands::solve::SolveArgs),

    /// Summarise scores, depths and endings across all attempts
    Stats(mancala::cli::commands::stats::StatsArgs),

    /// Replay a pit sequence and show each board
    Replay(mancala::cli::commands::replay::ReplayArgs),
}

fn init_logging(opts: GlobalOpts) -> Result<()> {
    let level = if opts.debug {
        max(LevelFilter::Debug, opts.log_level)
    } else {
        opts.log_level
    };

    let mut config = ConfigBuilder::new();
    config
        .set_time_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_target_level(if opts.debug {
            LevelFilter::Error
        } else {
            LevelFilter::Off
        });

    let colors = if opts.no_colors {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };

    TermLogger::init(level, config.build(), TerminalMode::Stderr, colors)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.global_opts)?;
    log::debug!("parsed arguments: {cli:?}");

    match cli.command {
        Commands::Solve(args) => mancala::cli::commands::solve::execute(args),
        Commands::Stats(args) => mancala::cli::commands::stats::execute(args),
        Commands::Replay(args) => mancala::cli::commands::replay::execute(args),
    }
}

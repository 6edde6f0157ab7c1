//! Stats command - summarise the enumeration

use anyhow::Result;
use clap::Parser;

use super::run_search;
use crate::{
    analysis::SearchStats,
    app::SearchConfig,
    cli::output::{format_number, print_bar, print_kv, print_section, print_subsection},
};

#[derive(Parser, Debug)]
#[command(about = "Summarise scores, depths and endings across all attempts")]
pub struct StatsArgs {
    /// Print the statistics as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable the progress spinner
    #[arg(long)]
    pub no_progress: bool,
}

pub fn execute(args: StatsArgs) -> Result<()> {
    let report = run_search(&SearchConfig::default(), !args.no_progress)?;
    let stats = SearchStats::from_report(&report);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    print_section("Opening Chain Statistics");
    print_kv("Attempts", &format_number(stats.attempt_count));
    print_kv("Max score", &stats.max_score.to_string());
    print_kv("Min score", &stats.min_score.to_string());
    print_kv("Best attempts", &stats.best_count.to_string());
    print_kv("Captures", &format_number(stats.captures));
    print_kv("Exhausted", &format_number(stats.exhausted));
    print_kv("Max depth", &stats.max_depth.to_string());
    print_kv("Average depth", &format!("{:.2}", stats.average_depth()));

    print_subsection("Attempts by opening pit");
    let widest = stats.opening_pits.values().copied().max().unwrap_or(0);
    for (pit, count) in &stats.opening_pits {
        print_bar(&format!("pit {pit}"), *count, widest);
    }

    print_subsection("Attempts by score");
    let widest = stats.score_histogram.values().copied().max().unwrap_or(0);
    for (score, count) in &stats.score_histogram {
        print_bar(&score.to_string(), *count, widest);
    }

    print_subsection("Attempts by depth");
    let widest = stats.depth_histogram.values().copied().max().unwrap_or(0);
    for (depth, count) in &stats.depth_histogram {
        print_bar(&depth.to_string(), *count, widest);
    }

    Ok(())
}

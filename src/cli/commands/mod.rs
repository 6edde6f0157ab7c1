//! CLI subcommands

pub mod replay;
pub mod solve;
pub mod stats;

use anyhow::Result;

use crate::{
    adapters::ProgressObserver,
    app::SearchConfig,
    search::{self, SearchReport},
};

/// Run the full enumeration, optionally behind a progress spinner.
pub(crate) fn run_search(config: &SearchConfig, progress: bool) -> Result<SearchReport> {
    let report = if progress {
        search::run(config, &mut ProgressObserver::new())?
    } else {
        search::enumerate(config)?
    };
    log::info!(
        "enumerated {} attempts, max score {}",
        report.len(),
        report.max_score()
    );
    Ok(report)
}

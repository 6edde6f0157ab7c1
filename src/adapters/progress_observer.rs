//! Progress spinner observer - shows enumeration progress on the terminal

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Result,
    ports::SearchObserver,
    search::{Attempt, SearchReport},
};

/// Attempts between spinner refreshes
const REFRESH_INTERVAL: usize = 500;

/// Spinner that tracks the attempt count and best score seen so far
pub struct ProgressObserver {
    spinner: Option<ProgressBar>,
    attempts: usize,
    best: u8,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self {
            spinner: None,
            attempts: 0,
            best: 0,
        }
    }

    fn message(&self) -> String {
        format!("{} attempts, best score {}", self.attempts, self.best)
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchObserver for ProgressObserver {
    fn on_search_start(&mut self) -> Result<()> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?,
        );
        spinner.set_message("enumerating opening chains");
        self.spinner = Some(spinner);
        Ok(())
    }

    fn on_attempt(&mut self, index: usize, attempt: &Attempt) -> Result<()> {
        self.attempts = index + 1;
        self.best = self.best.max(attempt.score);
        if self.attempts.is_multiple_of(REFRESH_INTERVAL) {
            if let Some(spinner) = &self.spinner {
                spinner.set_message(self.message());
                spinner.tick();
            }
        }
        Ok(())
    }

    fn on_search_end(&mut self, report: &SearchReport) -> Result<()> {
        self.attempts = report.len();
        self.best = report.max_score();
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
        Ok(())
    }
}

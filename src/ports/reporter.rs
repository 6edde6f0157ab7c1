//! Reporter port for rendering finished searches.
//!
//! The search core only produces plain data; reporters decide how it is shown
//! or stored.

use crate::{Result, search::SearchReport};

/// Port for rendering a finished search.
///
/// # Examples
///
/// ```no_run
/// use mancala::{adapters::TextReporter, app::SearchConfig, ports::Reporter, search};
///
/// let report = search::enumerate(&SearchConfig::default())?;
/// let mut reporter = TextReporter::new(std::io::stdout()).winners_only(true);
/// reporter.report(&report)?;
/// # Ok::<(), mancala::Error>(())
/// ```
pub trait Reporter {
    /// Render `report`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing or serialization fails.
    fn report(&mut self, report: &SearchReport) -> Result<()>;
}

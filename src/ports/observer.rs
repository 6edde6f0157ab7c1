//! Observer port - abstraction for watching a search as it runs
//!
//! This port lets callers follow the enumeration (progress display, logging,
//! streaming export) without coupling the driver to any output mechanism.

use crate::{
    Result,
    search::{Attempt, SearchReport},
};

/// Observer trait for monitoring an enumeration
///
/// # Event Sequence
///
/// 1. `on_search_start()` - Once at the beginning
/// 2. `on_attempt(index, attempt)` - For each attempt, in enumeration order
/// 3. `on_search_end(report)` - Once, after the search is exhausted
///
/// An error returned from any hook aborts the search.
///
/// # Examples
///
/// ```
/// use mancala::{ports::SearchObserver, search::Attempt};
///
/// struct BestScore(u8);
///
/// impl SearchObserver for BestScore {
///     fn on_attempt(&mut self, _index: usize, attempt: &Attempt) -> mancala::Result<()> {
///         self.0 = self.0.max(attempt.score);
///         Ok(())
///     }
/// }
/// ```
pub trait SearchObserver {
    /// Called before the first attempt is played.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn on_search_start(&mut self) -> Result<()> {
        Ok(())
    }

    /// Called for each completed attempt.
    ///
    /// # Parameters
    ///
    /// * `index` - Position of the attempt in enumeration order (0-based)
    /// * `attempt` - The completed attempt
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn on_attempt(&mut self, _index: usize, _attempt: &Attempt) -> Result<()> {
        Ok(())
    }

    /// Called once the search is exhausted.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn on_search_end(&mut self, _report: &SearchReport) -> Result<()> {
        Ok(())
    }
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl SearchObserver for NullObserver {}

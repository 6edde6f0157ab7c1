//! Mancala opening-chain enumerator
//!
//! This crate provides:
//! - A fixed 13-pit Mancala board model with sowing, capture and free-turn rules
//! - A backtracking driver that enumerates every chain of free turns available
//!   to the first player from the opening position
//! - Replay of individual pit sequences with per-move board snapshots
//! - Summary statistics and text/JSON/CSV reporting of the results
//!
//! ```
//! use mancala::{app::SearchConfig, search};
//!
//! let report = search::enumerate(&SearchConfig::default())?;
//! assert_eq!(report.max_score(), 45);
//! # Ok::<(), mancala::Error>(())
//! ```

pub mod adapters;
pub mod analysis;
pub mod app;
pub mod cli;
pub mod error;
pub mod mancala;
pub mod ports;
pub mod search;

pub use analysis::SearchStats;
pub use app::SearchConfig;
pub use error::{Error, Result};
pub use mancala::{Board, Ending};
pub use search::{Attempt, Move, SearchReport};

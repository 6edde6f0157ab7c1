//! Backtracking enumeration of opening move chains

pub mod attempt;
pub mod driver;
pub mod replay;
pub mod report;

pub use attempt::{Attempt, Move, parse_pit_sequence};
pub use driver::{Enumerator, enumerate, run};
pub use replay::replay;
pub use report::SearchReport;

//! Analysis tools for finished searches

pub mod stats;

pub use stats::SearchStats;

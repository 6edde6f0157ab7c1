//! Application configuration.
//!
//! The opening layout is fixed; configuration only covers the sanity ceilings
//! that guard the search against runaway loops.
//!
//! ```
//! use mancala::app::SearchConfig;
//!
//! let config = SearchConfig::new().with_attempt_limit(50_000);
//! assert!(config.validate().is_ok());
//! ```

pub mod config;

pub use config::{DEFAULT_ATTEMPT_LIMIT, DEFAULT_RELAY_LIMIT, SearchConfig};

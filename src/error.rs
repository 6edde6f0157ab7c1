//! Error types for the mancala crate

use thiserror::Error;

/// Main error type for the mancala crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("pit {pit} is out of bounds (must be 0-12)")]
    PitOutOfRange { pit: usize },

    #[error("pit {pit} is not on the player's side (must be 0-5)")]
    NotPlayerPit { pit: usize },

    #[error("cannot sow from the store")]
    SowFromStore,

    #[error("cannot sow from empty pit {pit}")]
    EmptyPit { pit: usize },

    #[error("board holds {found} stones, expected {expected}")]
    StoneCountMismatch { expected: u32, found: u32 },

    #[error("stone count drifted to {found} while sowing from pit {pit} (expected {expected})")]
    StoneCountDrift {
        pit: usize,
        expected: u32,
        found: u32,
    },

    #[error("move from pit {pit} exceeded {limit} relay sows without resolving")]
    RelayLimitExceeded { pit: usize, limit: usize },

    #[error("extra turn granted but no playable pit remains on board {board}")]
    NoPlayablePit { board: String },

    #[error("search produced more than {limit} attempts")]
    AttemptLimitExceeded { limit: usize },

    #[error("search produced no attempts")]
    EmptySearch,

    #[error("pit {pit} at position {index} is not a playable choice")]
    IllegalChoice { index: usize, pit: usize },

    #[error("sequence ended at position {index} but more pits were given")]
    SequenceEndedEarly { index: usize },

    #[error("sequence of {len} pits stops while a free turn is still pending")]
    SequenceIncomplete { len: usize },

    #[error("invalid pit sequence '{input}': {reason}")]
    InvalidPitSequence { input: String, reason: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}

//! Mancala board model and move rules

pub mod board;
pub mod outcome;
pub mod sowing;

pub use board::{Board, PIT_COUNT, PLAYER_PITS, STONES_PER_PIT, STORE, TOTAL_STONES};
pub use outcome::{Ending, MoveResolution, TurnOutcome, classify, resolve_move};
pub use sowing::sow;

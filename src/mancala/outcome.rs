//! Turn outcome classification and move resolution

use serde::{Deserialize, Serialize};

use super::{
    board::{Board, STORE, TOTAL_STONES},
    sowing::sow,
};
use crate::{Error, Result};

/// How a chain of moves finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Ending {
    /// The last stone landed in an empty pit; it and the opposite pit went to the store.
    Capture { pit: usize, captured: u8 },
    /// The player's side ran out of stones.
    Exhausted,
}

/// Result of classifying the board after one sowing pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The chain is over.
    Ended(Ending),
    /// The last stone landed in the store; the player picks another pit.
    ExtraTurn,
    /// The last stone landed in an occupied pit; sowing continues from it.
    Relay { from: usize },
}

impl TurnOutcome {
    pub fn is_terminal(self) -> bool {
        matches!(self, TurnOutcome::Ended(_))
    }
}

/// Where a single move left the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResolution {
    ExtraTurn,
    Ended(Ending),
}

/// Classify the board after a sowing pass that finished at `last_pit`.
///
/// Checked in order:
/// 1. last stone in an empty non-store pit: capture it together with the
///    opposite pit and end the chain. This applies on the opponent's side too.
/// 2. player's side empty: the chain ends on the current store value.
/// 3. last stone in the store: extra turn.
/// 4. otherwise sowing continues from `last_pit`, wherever it is.
///
/// Captures are applied to `board` before returning.
pub fn classify(board: &mut Board, last_pit: usize) -> TurnOutcome {
    if last_pit != STORE && board[last_pit] == 1 {
        let captured = board.capture(last_pit);
        return TurnOutcome::Ended(Ending::Capture {
            pit: last_pit,
            captured,
        });
    }

    if board.player_side_empty() {
        return TurnOutcome::Ended(Ending::Exhausted);
    }

    if last_pit == STORE {
        TurnOutcome::ExtraTurn
    } else {
        TurnOutcome::Relay { from: last_pit }
    }
}

/// Play `pit` on `board` until the move hands back a free turn or ends the chain.
///
/// Relays are followed without recording intermediate moves. The stone count
/// is checked after every pass.
///
/// # Errors
///
/// Returns an error if `pit` is not a player pit, if sowing hits an invalid
/// pit, if stones are created or lost, or if more than `relay_limit` sowing
/// passes are needed.
///
/// ```
/// use mancala::mancala::{Board, MoveResolution, resolve_move};
///
/// let mut board = Board::opening();
/// let resolution = resolve_move(&mut board, 2, 100)?;
/// assert_eq!(resolution, MoveResolution::ExtraTurn);
/// assert_eq!(board.store(), 1);
/// # Ok::<(), mancala::Error>(())
/// ```
pub fn resolve_move(board: &mut Board, pit: usize, relay_limit: usize) -> Result<MoveResolution> {
    if !Board::is_player_pit(pit) {
        return Err(Error::NotPlayerPit { pit });
    }

    let mut from = pit;
    for _ in 0..relay_limit {
        let last = sow(board, from)?;
        let outcome = classify(board, last);

        let found = board.total_stones();
        if found != TOTAL_STONES {
            return Err(Error::StoneCountDrift {
                pit: from,
                expected: TOTAL_STONES,
                found,
            });
        }

        match outcome {
            TurnOutcome::Ended(ending) => return Ok(MoveResolution::Ended(ending)),
            TurnOutcome::ExtraTurn => return Ok(MoveResolution::ExtraTurn),
            TurnOutcome::Relay { from: next } => from = next,
        }
    }

    Err(Error::RelayLimitExceeded {
        pit,
        limit: relay_limit,
    })
}

//! Moves and completed attempts

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    mancala::{Board, Ending},
};

/// One pit choice together with the boards around it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// Pit chosen by the player (0-5)
    pub pit: usize,
    /// Board the choice was made on
    pub before: Board,
    /// Board once sowing, relays and any capture finished
    pub after: Board,
}

/// A complete chain of moves from the opening to a terminal outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    pub moves: Vec<Move>,
    /// Final store value, including any capture
    pub score: u8,
    pub ending: Ending,
}

impl Attempt {
    /// Pit chosen at each step
    pub fn pits(&self) -> Vec<usize> {
        self.moves.iter().map(|mv| mv.pit).collect()
    }

    /// Number of moves in the chain
    pub fn depth(&self) -> usize {
        self.moves.len()
    }

    pub fn opening_pit(&self) -> Option<usize> {
        self.moves.first().map(|mv| mv.pit)
    }

    pub fn final_board(&self) -> Option<Board> {
        self.moves.last().map(|mv| mv.after)
    }

    /// Pits joined with commas, e.g. `"1,0,0,0,1,0"`
    pub fn sequence_label(&self) -> String {
        self.moves
            .iter()
            .map(|mv| mv.pit.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Parse a pit sequence.
///
/// Accepts comma- or whitespace-separated indices (`"5,2,1"`, `"5 2 1"`) and
/// the compact single-digit form (`"521"`). Range checks are left to
/// [`replay`](crate::search::replay), which knows the board.
///
/// # Errors
///
/// Returns [`Error::InvalidPitSequence`] for empty input or non-numeric tokens.
///
/// ```
/// use mancala::search::parse_pit_sequence;
///
/// assert_eq!(parse_pit_sequence("5, 2, 1")?, vec![5, 2, 1]);
/// assert_eq!(parse_pit_sequence("521")?, vec![5, 2, 1]);
/// # Ok::<(), mancala::Error>(())
/// ```
pub fn parse_pit_sequence(input: &str) -> Result<Vec<usize>> {
    let invalid = |reason: String| Error::InvalidPitSequence {
        input: input.to_string(),
        reason,
    };

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(invalid("sequence is empty".to_string()));
    }

    let separated = trimmed.contains(|c: char| c == ',' || c.is_whitespace());
    if separated {
        trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<usize>()
                    .map_err(|_| invalid(format!("'{token}' is not a pit index")))
            })
            .collect()
    } else {
        trimmed
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .map(|digit| digit as usize)
                    .ok_or_else(|| invalid(format!("'{c}' is not a pit index")))
            })
            .collect()
    }
}

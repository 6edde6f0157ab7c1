//! Board state representation and index arithmetic

use std::{fmt, ops::Index};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Number of counters on the board (six pits per side plus the player's store)
pub const PIT_COUNT: usize = 13;

/// Index of the player's store
pub const STORE: usize = 6;

/// Number of pits on the player's side, indices `0..PLAYER_PITS`
pub const PLAYER_PITS: usize = 6;

/// Stones in every pit of the opening layout
pub const STONES_PER_PIT: u8 = 4;

/// Stones on the board in every reachable state
pub const TOTAL_STONES: u32 = 48;

/// Stone counts for every pit on the board.
///
/// Indices 0-5 are the player's pits, 6 is the player's store and 7-12 are
/// the opponent's pits. There is no opponent store. The type is `Copy`, so
/// taking a snapshot is a plain assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    pits: [u8; PIT_COUNT],
}

impl Board {
    /// The opening layout: four stones in every pit and an empty store.
    ///
    /// ```
    /// use mancala::mancala::Board;
    ///
    /// let board = Board::opening();
    /// assert_eq!(board.pits(), &[4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4]);
    /// assert_eq!(board.total_stones(), 48);
    /// ```
    pub fn opening() -> Self {
        let mut pits = [STONES_PER_PIT; PIT_COUNT];
        pits[STORE] = 0;
        Board { pits }
    }

    /// Build a board from explicit pit counts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoneCountMismatch`] unless the pits hold exactly
    /// [`TOTAL_STONES`] stones.
    pub fn from_pits(pits: [u8; PIT_COUNT]) -> Result<Self> {
        let board = Board { pits };
        let found = board.total_stones();
        if found != TOTAL_STONES {
            return Err(Error::StoneCountMismatch {
                expected: TOTAL_STONES,
                found,
            });
        }
        Ok(board)
    }

    pub fn pits(&self) -> &[u8; PIT_COUNT] {
        &self.pits
    }

    /// Current value of the player's store
    pub fn store(&self) -> u8 {
        self.pits[STORE]
    }

    pub fn total_stones(&self) -> u32 {
        self.pits.iter().map(|&stones| u32::from(stones)).sum()
    }

    /// Index that follows `index` when sowing, wrapping 12 back to 0
    pub fn next_index(index: usize) -> usize {
        (index + 1) % PIT_COUNT
    }

    /// Pit facing `index` across the board (0 faces 12, 5 faces 7)
    pub fn opposite(index: usize) -> usize {
        debug_assert!(index < PIT_COUNT && index != STORE);
        PIT_COUNT - 1 - index
    }

    pub fn is_player_pit(index: usize) -> bool {
        index < PLAYER_PITS
    }

    /// Whether `pit` is a legal choice: on the player's side and holding stones
    pub fn is_playable(&self, pit: usize) -> bool {
        Self::is_player_pit(pit) && self.pits[pit] > 0
    }

    pub fn player_side_empty(&self) -> bool {
        self.pits[..PLAYER_PITS].iter().all(|&stones| stones == 0)
    }

    /// Lowest-indexed non-empty pit on the player's side
    pub fn first_playable_pit(&self) -> Option<usize> {
        (0..PLAYER_PITS).find(|&pit| self.pits[pit] > 0)
    }

    /// Lowest non-empty player pit strictly to the right of `pit`
    pub fn next_playable_pit_after(&self, pit: usize) -> Option<usize> {
        (pit + 1..PLAYER_PITS).find(|&candidate| self.pits[candidate] > 0)
    }

    /// Space-separated stone counts, e.g. `"4 4 4 4 4 4 0 4 4 4 4 4 4"`
    pub fn layout(&self) -> String {
        self.pits
            .iter()
            .map(|stones| stones.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Empty `pit` and return the stones that were in it.
    pub(crate) fn take(&mut self, pit: usize) -> u8 {
        std::mem::take(&mut self.pits[pit])
    }

    pub(crate) fn drop_stone(&mut self, pit: usize) {
        self.pits[pit] += 1;
    }

    /// Move the stones of `pit` and its opposite pit into the store.
    ///
    /// Returns the number of stones captured.
    pub(crate) fn capture(&mut self, pit: usize) -> u8 {
        let opposite = Self::opposite(pit);
        let captured = self.take(pit) + self.take(opposite);
        self.pits[STORE] += captured;
        captured
    }

    fn row(&self, indices: impl Iterator<Item = usize>, width: usize) -> String {
        indices
            .map(|pit| format!("[{:>width$}]", self.pits[pit]))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::opening()
    }
}

impl Index<usize> for Board {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        &self.pits[index]
    }
}

impl fmt::Display for Board {
    /// Two-row diagram: opponent pits 12..=7 on top, player pits 0..=5 below,
    /// and the store in the bottom-right corner.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .pits
            .iter()
            .enumerate()
            .filter(|&(pit, _)| pit != STORE)
            .map(|(_, stones)| stones.to_string().len())
            .max()
            .unwrap_or(1);

        let top = self.row((STORE + 1..PIT_COUNT).rev(), width);
        let bottom = self.row(0..PLAYER_PITS, width);
        let top_row = format!("|  /  \\ {top} /  \\  |");
        let bottom_row = format!("|  \\  / {bottom} \\{:>2}/  |", self.store());
        let border = format!("|{}|", "-".repeat(top_row.len() - 2));

        writeln!(f, "{border}")?;
        writeln!(f, "{top_row}")?;
        writeln!(f, "{bottom_row}")?;
        write!(f, "{border}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_index_wraps_after_last_opponent_pit() {
        assert_eq!(Board::next_index(5), STORE);
        assert_eq!(Board::next_index(STORE), 7);
        assert_eq!(Board::next_index(12), 0);
    }

    #[test]
    fn opposite_pits_pair_across_the_board() {
        for pit in 0..PLAYER_PITS {
            let opposite = Board::opposite(pit);
            assert!((7..PIT_COUNT).contains(&opposite));
            assert_eq!(Board::opposite(opposite), pit);
        }
        assert_eq!(Board::opposite(0), 12);
        assert_eq!(Board::opposite(5), 7);
    }

    #[test]
    fn from_pits_rejects_wrong_totals() {
        let err = Board::from_pits([4; PIT_COUNT]).unwrap_err();
        assert!(matches!(
            err,
            Error::StoneCountMismatch {
                expected: 48,
                found: 52
            }
        ));
    }

    #[test]
    fn playable_pit_lookup_skips_empty_pits() {
        let board = Board::from_pits([0, 3, 0, 0, 2, 0, 19, 4, 4, 4, 4, 4, 4]).unwrap();
        assert_eq!(board.first_playable_pit(), Some(1));
        assert_eq!(board.next_playable_pit_after(1), Some(4));
        assert_eq!(board.next_playable_pit_after(4), None);
        assert_eq!(board.next_playable_pit_after(5), None);
        assert!(board.is_playable(4));
        assert!(!board.is_playable(2));
        assert!(!board.is_playable(7));
    }

    #[test]
    fn capture_moves_both_pits_into_store() {
        let mut board = Board::from_pits([1, 4, 4, 4, 4, 4, 3, 4, 4, 4, 4, 4, 4]).unwrap();
        let captured = board.capture(0);
        assert_eq!(captured, 5);
        assert_eq!(board[0], 0);
        assert_eq!(board[12], 0);
        assert_eq!(board.store(), 8);
        assert_eq!(board.total_stones(), TOTAL_STONES);
    }

    #[test]
    fn display_matches_board_diagram() {
        let board = Board::from_pits([0, 0, 0, 0, 0, 0, 45, 0, 0, 0, 1, 0, 2]).unwrap();
        let expected = "\
|-------------------------------------|
|  /  \\ [2] [0] [1] [0] [0] [0] /  \\  |
|  \\  / [0] [0] [0] [0] [0] [0] \\45/  |
|-------------------------------------|";
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn display_pads_pits_when_any_holds_two_digits() {
        let board = Board::from_pits([1, 4, 1, 10, 0, 1, 6, 3, 0, 2, 9, 2, 9]).unwrap();
        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|line| line.len() == lines[0].len()));
        assert!(lines[2].contains("[10]"));
        assert!(lines[2].ends_with("\\ 6/  |"));
    }
}

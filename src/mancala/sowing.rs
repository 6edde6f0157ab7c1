//! Stone distribution

use super::board::{Board, PIT_COUNT, STORE};
use crate::{Error, Result};

/// Sow every stone from `start`, one per pit in cyclic index order.
///
/// The start pit is emptied first, so a hand of thirteen or more stones drops
/// one back into it on the way round. Returns the index of the last pit that
/// received a stone.
///
/// Player choices are always pits 0-5; relay sowing may also start from an
/// opponent pit, so any non-store pit is accepted here.
///
/// # Errors
///
/// Sowing from the store, from an index outside the board or from an empty
/// pit is an internal-consistency fault.
///
/// ```
/// use mancala::mancala::{Board, STORE, sow};
///
/// let mut board = Board::opening();
/// let last = sow(&mut board, 2)?;
/// assert_eq!(last, STORE);
/// assert_eq!(board.pits(), &[4, 4, 0, 5, 5, 5, 1, 4, 4, 4, 4, 4, 4]);
/// # Ok::<(), mancala::Error>(())
/// ```
pub fn sow(board: &mut Board, start: usize) -> Result<usize> {
    if start >= PIT_COUNT {
        return Err(Error::PitOutOfRange { pit: start });
    }
    if start == STORE {
        return Err(Error::SowFromStore);
    }

    let mut hand = board.take(start);
    if hand == 0 {
        return Err(Error::EmptyPit { pit: start });
    }

    let mut location = start;
    while hand > 0 {
        location = Board::next_index(location);
        board.drop_stone(location);
        hand -= 1;
    }

    Ok(location)
}

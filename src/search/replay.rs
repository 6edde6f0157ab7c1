//! Replay of a given pit sequence from the opening

use super::attempt::{Attempt, Move};
use crate::{
    Error, Result,
    app::SearchConfig,
    mancala::{Board, MoveResolution, resolve_move},
};

/// Re-simulate `pits` from the opening layout.
///
/// Unlike the enumerator, any playable pit may be chosen on a free turn. The
/// returned attempt carries the board snapshots of every move.
///
/// # Errors
///
/// - [`Error::IllegalChoice`] if a pit is off the player's side or empty
/// - [`Error::SequenceEndedEarly`] if the chain ends before the last pit
/// - [`Error::SequenceIncomplete`] if the pits run out on a free turn
///
/// ```
/// use mancala::{app::SearchConfig, search::replay};
///
/// let attempt = replay(&[1, 0, 0, 0, 1, 0], &SearchConfig::default())?;
/// assert_eq!(attempt.score, 19);
/// # Ok::<(), mancala::Error>(())
/// ```
pub fn replay(pits: &[usize], config: &SearchConfig) -> Result<Attempt> {
    config.validate()?;

    let mut board = Board::opening();
    let mut moves = Vec::with_capacity(pits.len());

    for (index, &pit) in pits.iter().enumerate() {
        if !board.is_playable(pit) {
            return Err(Error::IllegalChoice { index, pit });
        }

        let before = board;
        let resolution = resolve_move(&mut board, pit, config.relay_limit)?;
        moves.push(Move {
            pit,
            before,
            after: board,
        });

        if let MoveResolution::Ended(ending) = resolution {
            if index + 1 < pits.len() {
                return Err(Error::SequenceEndedEarly { index });
            }
            return Ok(Attempt {
                moves,
                score: board.store(),
                ending,
            });
        }
    }

    Err(Error::SequenceIncomplete { len: pits.len() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mancala::Ending;

    #[test]
    fn replay_reports_final_board_and_ending() {
        let attempt = replay(&[5, 5, 4], &SearchConfig::default()).unwrap();
        assert_eq!(attempt.score, 10);
        assert_eq!(
            attempt.ending,
            Ending::Capture {
                pit: 9,
                captured: 6
            }
        );
        assert_eq!(
            attempt.final_board().unwrap().pits(),
            &[5, 0, 5, 0, 0, 1, 10, 6, 6, 0, 5, 5, 5]
        );
    }

    #[test]
    fn replay_rejects_invalid_sequences() {
        let config = SearchConfig::default();
        assert!(matches!(
            replay(&[], &config),
            Err(Error::SequenceIncomplete { len: 0 })
        ));
        assert!(matches!(
            replay(&[2], &config),
            Err(Error::SequenceIncomplete { len: 1 })
        ));
        assert!(matches!(
            replay(&[2, 2], &config),
            Err(Error::IllegalChoice { index: 1, pit: 2 })
        ));
        assert!(matches!(
            replay(&[7], &config),
            Err(Error::IllegalChoice { index: 0, pit: 7 })
        ));
        assert!(matches!(
            replay(&[0, 1], &config),
            Err(Error::SequenceEndedEarly { index: 0 })
        ));
    }
}

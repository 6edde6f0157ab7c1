//! Backtracking driver
//!
//! The driver plays one attempt to its end, always taking the leftmost
//! playable pit on a free turn. To find the next attempt it walks the finished
//! move list from the back, looking for the deepest move that still has an
//! untried pit to its right on the board that move was chosen on. The stored
//! `before` snapshot lets it resume there directly, so no prefix is ever
//! replayed.
//!
//! Attempts come out in strictly increasing lexicographic order of their pit
//! sequences.

use log::{debug, trace};

use super::{
    attempt::{Attempt, Move},
    report::SearchReport,
};
use crate::{
    Error, Result,
    app::SearchConfig,
    mancala::{Board, MoveResolution, resolve_move},
    ports::{NullObserver, SearchObserver},
};

/// The next pit to play and the board to play it on
#[derive(Debug, Clone, Copy)]
struct Choice {
    pit: usize,
    board: Board,
}

/// Pull-based enumeration of every opening move chain.
///
/// Each call to [`next_attempt`](Self::next_attempt) finishes one attempt.
/// After an error the enumerator yields nothing more.
///
/// ```
/// use mancala::{app::SearchConfig, search::Enumerator};
///
/// let mut enumerator = Enumerator::new(&SearchConfig::default());
/// let first = enumerator.next_attempt()?.expect("opening has a move");
/// assert_eq!(first.pits(), vec![0]);
/// assert_eq!(first.score, 6);
/// # Ok::<(), mancala::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Enumerator {
    relay_limit: usize,
    moves: Vec<Move>,
    pending: Option<Choice>,
    produced: usize,
}

impl Enumerator {
    /// Start from the opening layout.
    pub fn new(config: &SearchConfig) -> Self {
        let opening = Board::opening();
        Self {
            relay_limit: config.relay_limit,
            moves: Vec::new(),
            pending: opening
                .first_playable_pit()
                .map(|pit| Choice { pit, board: opening }),
            produced: 0,
        }
    }

    /// Number of attempts produced so far
    pub fn produced(&self) -> usize {
        self.produced
    }

    /// Play the pending choice through to the end of its chain.
    ///
    /// Returns `Ok(None)` once every combination has been visited.
    ///
    /// # Errors
    ///
    /// Propagates any rule or consistency fault from move resolution, and
    /// [`Error::NoPlayablePit`] if a free turn leaves nothing to play.
    pub fn next_attempt(&mut self) -> Result<Option<Attempt>> {
        let Some(mut choice) = self.pending.take() else {
            return Ok(None);
        };

        loop {
            let mut board = choice.board;
            let resolution = resolve_move(&mut board, choice.pit, self.relay_limit)?;
            self.moves.push(Move {
                pit: choice.pit,
                before: choice.board,
                after: board,
            });

            match resolution {
                MoveResolution::ExtraTurn => {
                    let pit = board
                        .first_playable_pit()
                        .ok_or_else(|| Error::NoPlayablePit {
                            board: board.layout(),
                        })?;
                    choice = Choice { pit, board };
                }
                MoveResolution::Ended(ending) => {
                    trace!(
                        "attempt {} ended after {} moves: {ending:?}, store {}",
                        self.produced,
                        self.moves.len(),
                        board.store()
                    );
                    let attempt = Attempt {
                        moves: self.moves.clone(),
                        score: board.store(),
                        ending,
                    };
                    self.produced += 1;
                    self.pending = self.backtrack();
                    return Ok(Some(attempt));
                }
            }
        }
    }

    /// Find the deepest move with an untried alternative and rewind to it.
    ///
    /// Moves are popped until one of them has a playable pit to the right of
    /// its own on its `before` board. A move on pit 5 never does.
    fn backtrack(&mut self) -> Option<Choice> {
        while let Some(last) = self.moves.pop() {
            if let Some(pit) = last.before.next_playable_pit_after(last.pit) {
                trace!(
                    "resuming at depth {} with pit {pit} (was {})",
                    self.moves.len(),
                    last.pit
                );
                return Some(Choice {
                    pit,
                    board: last.before,
                });
            }
        }
        None
    }
}

impl Iterator for Enumerator {
    type Item = Result<Attempt>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_attempt().transpose()
    }
}

/// Run the enumeration to exhaustion, reporting progress to `observer`.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, if the engine detects an
/// internal inconsistency, if more than `config.attempt_limit` attempts are
/// produced, or if the observer fails.
pub fn run(config: &SearchConfig, observer: &mut dyn SearchObserver) -> Result<SearchReport> {
    config.validate()?;
    observer.on_search_start()?;
    debug!(
        "enumerating opening chains from [{}]",
        Board::opening().layout()
    );

    let mut enumerator = Enumerator::new(config);
    let mut attempts = Vec::new();
    while let Some(attempt) = enumerator.next_attempt()? {
        if attempts.len() >= config.attempt_limit {
            return Err(Error::AttemptLimitExceeded {
                limit: config.attempt_limit,
            });
        }
        observer.on_attempt(attempts.len(), &attempt)?;
        attempts.push(attempt);
    }

    let report = SearchReport::new(attempts)?;
    debug!(
        "enumeration finished: {} attempts, max score {}",
        report.len(),
        report.max_score()
    );
    observer.on_search_end(&report)?;
    Ok(report)
}

/// Run the enumeration without observation.
///
/// # Errors
///
/// See [`run`].
pub fn enumerate(config: &SearchConfig) -> Result<SearchReport> {
    run(config, &mut NullObserver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mancala::Ending;

    #[test]
    fn first_attempts_follow_leftmost_choices() {
        let mut enumerator = Enumerator::new(&SearchConfig::default());

        let first = enumerator.next_attempt().unwrap().unwrap();
        assert_eq!(first.pits(), vec![0]);
        assert_eq!(first.score, 6);
        assert_eq!(
            first.ending,
            Ending::Capture {
                pit: 4,
                captured: 1
            }
        );

        let second = enumerator.next_attempt().unwrap().unwrap();
        assert_eq!(second.pits(), vec![1, 0, 0, 0, 1, 0]);
        assert_eq!(second.score, 19);

        let third = enumerator.next_attempt().unwrap().unwrap();
        assert_eq!(third.pits(), vec![1, 0, 0, 0, 1, 1]);
        assert_eq!(third.score, 14);
        assert_eq!(enumerator.produced(), 3);
    }

    #[test]
    fn resumed_moves_share_snapshots_with_their_prefix() {
        let mut enumerator = Enumerator::new(&SearchConfig::default());
        enumerator.next_attempt().unwrap().unwrap();
        let second = enumerator.next_attempt().unwrap().unwrap();
        let third = enumerator.next_attempt().unwrap().unwrap();

        assert_eq!(second.moves[..5], third.moves[..5]);
        assert_eq!(second.moves[5].before, third.moves[5].before);
        for pair in third.moves.windows(2) {
            assert_eq!(pair[0].after, pair[1].before);
        }
    }

    #[test]
    fn iterator_stops_after_a_fault() {
        let config = SearchConfig::default().with_relay_limit(1);
        let mut enumerator = Enumerator::new(&config);
        assert!(matches!(
            enumerator.next(),
            Some(Err(Error::RelayLimitExceeded { .. }))
        ));
        assert!(enumerator.next().is_none());
    }

    #[test]
    fn attempt_limit_aborts_the_search() {
        let config = SearchConfig::default().with_attempt_limit(10);
        assert!(matches!(
            enumerate(&config),
            Err(Error::AttemptLimitExceeded { limit: 10 })
        ));
    }
}

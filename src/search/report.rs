//! Finished search results

use serde::Serialize;

use super::attempt::Attempt;
use crate::{Error, Result};

/// Every attempt produced by a search, in enumeration order, with the best score
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    attempts: Vec<Attempt>,
    max_score: u8,
}

impl SearchReport {
    /// Wrap a finished attempt list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySearch`] if `attempts` is empty.
    pub fn new(attempts: Vec<Attempt>) -> Result<Self> {
        let max_score = attempts
            .iter()
            .map(|attempt| attempt.score)
            .max()
            .ok_or(Error::EmptySearch)?;
        Ok(Self {
            attempts,
            max_score,
        })
    }

    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    pub fn max_score(&self) -> u8 {
        self.max_score
    }

    /// Attempts that reach the maximum score, in enumeration order
    pub fn best_attempts(&self) -> impl Iterator<Item = &Attempt> + '_ {
        self.attempts
            .iter()
            .filter(move |attempt| attempt.score == self.max_score)
    }

    pub fn len(&self) -> usize {
        self.attempts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }

    pub fn into_attempts(self) -> Vec<Attempt> {
        self.attempts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        mancala::{Board, Ending},
        search::Move,
    };

    fn attempt(pits: &[usize], score: u8) -> Attempt {
        let board = Board::opening();
        Attempt {
            moves: pits
                .iter()
                .map(|&pit| Move {
                    pit,
                    before: board,
                    after: board,
                })
                .collect(),
            score,
            ending: Ending::Exhausted,
        }
    }

    #[test]
    fn best_attempts_keep_enumeration_order() {
        let report = SearchReport::new(vec![
            attempt(&[0], 6),
            attempt(&[1, 2], 9),
            attempt(&[2], 3),
            attempt(&[3, 1], 9),
        ])
        .unwrap();

        assert_eq!(report.max_score(), 9);
        assert_eq!(report.len(), 4);
        let best: Vec<Vec<usize>> = report.best_attempts().map(Attempt::pits).collect();
        assert_eq!(best, vec![vec![1, 2], vec![3, 1]]);
    }

    #[test]
    fn empty_attempt_list_is_rejected() {
        assert!(matches!(SearchReport::new(Vec::new()), Err(Error::EmptySearch)));
    }
}

//! Summary statistics over a finished search

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{mancala::Ending, search::SearchReport};

/// Aggregate view of every attempt in a search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub attempt_count: usize,
    pub max_score: u8,
    pub min_score: u8,
    /// Number of attempts reaching `max_score`
    pub best_count: usize,
    pub max_depth: usize,
    pub captures: usize,
    pub exhausted: usize,
    /// Score -> number of attempts
    pub score_histogram: BTreeMap<u8, usize>,
    /// Move count -> number of attempts
    pub depth_histogram: BTreeMap<usize, usize>,
    /// Opening pit -> number of attempts starting with it
    pub opening_pits: BTreeMap<usize, usize>,
}

impl SearchStats {
    /// Tally every attempt in `report`
    pub fn from_report(report: &SearchReport) -> Self {
        let mut score_histogram = BTreeMap::new();
        let mut depth_histogram = BTreeMap::new();
        let mut opening_pits = BTreeMap::new();
        let mut captures = 0;
        let mut exhausted = 0;

        for attempt in report.attempts() {
            *score_histogram.entry(attempt.score).or_insert(0) += 1;
            *depth_histogram.entry(attempt.depth()).or_insert(0) += 1;
            if let Some(pit) = attempt.opening_pit() {
                *opening_pits.entry(pit).or_insert(0) += 1;
            }
            match attempt.ending {
                Ending::Capture { .. } => captures += 1,
                Ending::Exhausted => exhausted += 1,
            }
        }

        Self {
            attempt_count: report.len(),
            max_score: report.max_score(),
            min_score: score_histogram.keys().next().copied().unwrap_or(0),
            best_count: score_histogram
                .get(&report.max_score())
                .copied()
                .unwrap_or(0),
            max_depth: depth_histogram.keys().next_back().copied().unwrap_or(0),
            captures,
            exhausted,
            score_histogram,
            depth_histogram,
            opening_pits,
        }
    }

    /// Mean move count per attempt
    pub fn average_depth(&self) -> f64 {
        if self.attempt_count == 0 {
            return 0.0;
        }
        let total: usize = self
            .depth_histogram
            .iter()
            .map(|(depth, count)| depth * count)
            .sum();
        total as f64 / self.attempt_count as f64
    }
}

//! Regression tests pinning the enumeration from the opening layout

use std::{collections::HashSet, sync::OnceLock};

use mancala::{
    Board, Ending, SearchConfig, SearchReport, SearchStats,
    mancala::TOTAL_STONES,
    search::{self, replay},
};

const EXPECTED_ATTEMPTS: usize = 26_242;
const ATTEMPT_CEILING: usize = 100_000;

const WINNING_LINES: [&[usize]; 2] = [
    &[
        5, 2, 1, 4, 0, 0, 4, 4, 5, 0, 2, 3, 5, 1, 5, 5, 4, 1, 5, 0, 5, 2, 5, 4, 5, 3,
    ],
    &[
        5, 2, 1, 4, 2, 5, 5, 1, 0, 1, 0, 1, 4, 3, 5, 5, 5, 3, 5, 0, 1, 4, 5, 1, 5, 0,
    ],
];

fn config() -> SearchConfig {
    SearchConfig::new().with_attempt_limit(ATTEMPT_CEILING)
}

fn report() -> &'static SearchReport {
    static REPORT: OnceLock<SearchReport> = OnceLock::new();
    REPORT.get_or_init(|| search::enumerate(&config()).expect("enumeration should succeed"))
}

#[test]
fn enumeration_produces_known_attempt_count() {
    assert_eq!(report().len(), EXPECTED_ATTEMPTS);
}

#[test]
fn maximum_score_is_45_with_two_winning_lines() {
    let report = report();
    assert_eq!(report.max_score(), 45);

    let winners: Vec<Vec<usize>> = report.best_attempts().map(|a| a.pits()).collect();
    let expected: Vec<Vec<usize>> = WINNING_LINES.iter().map(|line| line.to_vec()).collect();
    assert_eq!(winners, expected);
}

#[test]
fn winning_lines_end_with_captures() {
    let winners: Vec<_> = report().best_attempts().collect();
    assert_eq!(
        winners[0].ending,
        Ending::Capture {
            pit: 4,
            captured: 2
        }
    );
    assert_eq!(
        winners[0].final_board().unwrap().pits(),
        &[0, 0, 0, 0, 0, 0, 45, 0, 0, 0, 1, 0, 2]
    );
    assert_eq!(
        winners[1].ending,
        Ending::Capture {
            pit: 1,
            captured: 4
        }
    );
    assert_eq!(
        winners[1].final_board().unwrap().pits(),
        &[0, 0, 0, 1, 0, 0, 45, 1, 0, 1, 0, 0, 0]
    );
}

#[test]
fn first_attempt_takes_leftmost_pit_and_captures_at_pit_four() {
    let first = &report().attempts()[0];
    assert_eq!(first.pits(), vec![0]);
    assert_eq!(first.score, 6);
    assert_eq!(
        first.ending,
        Ending::Capture {
            pit: 4,
            captured: 1
        }
    );
    assert_eq!(first.moves[0].before, Board::opening());
    assert_eq!(
        first.final_board().unwrap().pits(),
        &[1, 4, 1, 10, 0, 1, 6, 3, 0, 2, 9, 2, 9]
    );
}

#[test]
fn neighbouring_attempts_match_known_sequences() {
    let attempts = report().attempts();
    assert_eq!(attempts[1].pits(), vec![1, 0, 0, 0, 1, 0]);
    assert_eq!(attempts[1].score, 19);
    assert_eq!(attempts[2].pits(), vec![1, 0, 0, 0, 1, 1]);
    assert_eq!(attempts[2].score, 14);

    let last = attempts.last().unwrap();
    assert_eq!(last.pits(), vec![5, 5, 4]);
    assert_eq!(last.score, 10);
}

#[test]
fn sequences_are_unique_and_lexicographically_increasing() {
    let attempts = report().attempts();
    for pair in attempts.windows(2) {
        assert!(
            pair[0].pits() < pair[1].pits(),
            "{} should sort before {}",
            pair[0].sequence_label(),
            pair[1].sequence_label()
        );
    }

    let unique: HashSet<Vec<usize>> = attempts.iter().map(|a| a.pits()).collect();
    assert_eq!(unique.len(), attempts.len());
}

#[test]
fn every_snapshot_conserves_stones() {
    for attempt in report().attempts() {
        for mv in &attempt.moves {
            assert_eq!(mv.before.total_stones(), TOTAL_STONES);
            assert_eq!(mv.after.total_stones(), TOTAL_STONES);
        }
    }
}

#[test]
fn moves_chain_from_the_opening_through_playable_pits() {
    for attempt in report().attempts() {
        assert_eq!(attempt.moves[0].before, Board::opening());
        for mv in &attempt.moves {
            assert!(
                mv.before.is_playable(mv.pit),
                "pit {} not playable in {}",
                mv.pit,
                attempt.sequence_label()
            );
        }
        for pair in attempt.moves.windows(2) {
            assert_eq!(pair[0].after, pair[1].before);
        }
        assert_eq!(attempt.score, attempt.final_board().unwrap().store());
    }
}

#[test]
fn replaying_any_attempt_reproduces_it() {
    let config = config();
    for attempt in report().attempts() {
        let replayed = replay(&attempt.pits(), &config).expect("enumerated line replays");
        assert_eq!(&replayed, attempt);
    }
}

#[test]
fn statistics_match_known_breakdown() {
    let stats = SearchStats::from_report(report());
    assert_eq!(stats.attempt_count, EXPECTED_ATTEMPTS);
    assert_eq!(stats.max_score, 45);
    assert_eq!(stats.min_score, 3);
    assert_eq!(stats.best_count, 2);
    assert_eq!(stats.max_depth, 29);
    assert_eq!(stats.captures, 26_167);
    assert_eq!(stats.exhausted, 75);
    assert_eq!(stats.depth_histogram.get(&1), Some(&2));

    let opening: Vec<(usize, usize)> = stats.opening_pits.into_iter().collect();
    assert_eq!(
        opening,
        vec![(0, 1), (1, 1_730), (2, 430), (3, 1), (4, 103), (5, 23_977)]
    );

    let total_moves: usize = report().attempts().iter().map(|a| a.depth()).sum();
    assert_eq!(total_moves, 460_922);
}

#[test]
fn low_attempt_ceiling_aborts_the_search() {
    let config = SearchConfig::new().with_attempt_limit(1_000);
    assert!(matches!(
        search::enumerate(&config),
        Err(mancala::Error::AttemptLimitExceeded { limit: 1_000 })
    ));
}

//! JSON reporter using serde_json.

use std::io::Write;

use serde::Serialize;

use crate::{
    Result,
    mancala::{Board, Ending},
    ports::Reporter,
    search::{Attempt, SearchReport},
};

/// Serialized form of a whole search
#[derive(Debug, Serialize)]
struct JsonDocument {
    attempt_count: usize,
    max_score: u8,
    winners: Vec<JsonAttempt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attempts: Option<Vec<JsonAttempt>>,
}

#[derive(Debug, Serialize)]
struct JsonAttempt {
    pits: Vec<usize>,
    score: u8,
    ending: Ending,
    #[serde(skip_serializing_if = "Option::is_none")]
    final_board: Option<Board>,
}

impl JsonAttempt {
    fn summary(attempt: &Attempt) -> Self {
        Self {
            pits: attempt.pits(),
            score: attempt.score,
            ending: attempt.ending,
            final_board: None,
        }
    }

    fn with_board(attempt: &Attempt) -> Self {
        Self {
            final_board: attempt.final_board(),
            ..Self::summary(attempt)
        }
    }
}

/// JSON reporter writing one document per report.
///
/// Winners always carry their final board; the full attempt list carries only
/// pits, score and ending.
#[derive(Debug)]
pub struct JsonReporter<W: Write> {
    writer: W,
    pretty: bool,
    winners_only: bool,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
            winners_only: false,
        }
    }

    /// Emit indented JSON (the default) or a single line.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Omit the `attempts` array.
    pub fn winners_only(mut self, winners_only: bool) -> Self {
        self.winners_only = winners_only;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn report(&mut self, report: &SearchReport) -> Result<()> {
        let document = JsonDocument {
            attempt_count: report.len(),
            max_score: report.max_score(),
            winners: report.best_attempts().map(JsonAttempt::with_board).collect(),
            attempts: (!self.winners_only)
                .then(|| report.attempts().iter().map(JsonAttempt::summary).collect()),
        };

        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &document)?;
        } else {
            serde_json::to_writer(&mut self.writer, &document)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

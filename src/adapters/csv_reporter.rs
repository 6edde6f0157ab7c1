//! CSV reporter using the csv crate.
//!
//! One row per attempt: `index,pits,depth,score,ending,capture_pit,captured`.
//! Capture columns are empty for exhausted endings.

use std::{fs::File, io::Write, path::Path};

use serde::Serialize;

use crate::{
    Error, Result,
    mancala::Ending,
    ports::Reporter,
    search::{Attempt, SearchReport},
};

#[derive(Debug, Serialize)]
struct CsvRow {
    index: usize,
    pits: String,
    depth: usize,
    score: u8,
    ending: &'static str,
    capture_pit: Option<usize>,
    captured: Option<u8>,
}

impl CsvRow {
    fn new(index: usize, attempt: &Attempt) -> Self {
        let (ending, capture_pit, captured) = match attempt.ending {
            Ending::Capture { pit, captured } => ("capture", Some(pit), Some(captured)),
            Ending::Exhausted => ("exhausted", None, None),
        };
        Self {
            index,
            pits: attempt.sequence_label(),
            depth: attempt.depth(),
            score: attempt.score,
            ending,
            capture_pit,
            captured,
        }
    }
}

/// CSV reporter; set `winners_only` to write just the best attempts.
pub struct CsvReporter<W: Write> {
    writer: csv::Writer<W>,
    winners_only: bool,
}

impl CsvReporter<File> {
    /// Create a reporter writing to a new file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub fn from_path(path: &Path) -> Result<Self> {
        Ok(Self {
            writer: csv::Writer::from_path(path)?,
            winners_only: false,
        })
    }
}

impl<W: Write> CsvReporter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
            winners_only: false,
        }
    }

    pub fn winners_only(mut self, winners_only: bool) -> Self {
        self.winners_only = winners_only;
        self
    }

    /// Flush and return the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns an error if buffered rows cannot be flushed.
    pub fn into_inner(self) -> Result<W> {
        self.writer.into_inner().map_err(|e| Error::Io {
            operation: "flush CSV output".to_string(),
            source: std::io::Error::new(e.error().kind(), e.error().to_string()),
        })
    }
}

impl<W: Write> Reporter for CsvReporter<W> {
    fn report(&mut self, report: &SearchReport) -> Result<()> {
        for (index, attempt) in report.attempts().iter().enumerate() {
            if self.winners_only && attempt.score != report.max_score() {
                continue;
            }
            self.writer.serialize(CsvRow::new(index, attempt))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

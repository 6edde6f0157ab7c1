//! Plain-text reporter.
//!
//! Prints the maximum score, the winning lines with their final boards, and a
//! full log of every attempt as `pits. score`.

use std::io::Write;

use crate::{Error, Result, ports::Reporter, search::SearchReport};

/// Text reporter writing to any [`Write`] sink.
///
/// # Examples
///
/// ```no_run
/// use mancala::{adapters::TextReporter, app::SearchConfig, ports::Reporter, search};
///
/// let report = search::enumerate(&SearchConfig::default())?;
/// TextReporter::new(std::io::stdout().lock())
///     .show_boards(true)
///     .report(&report)?;
/// # Ok::<(), mancala::Error>(())
/// ```
#[derive(Debug)]
pub struct TextReporter<W: Write> {
    writer: W,
    winners_only: bool,
    show_boards: bool,
}

impl<W: Write> TextReporter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            winners_only: false,
            show_boards: false,
        }
    }

    /// Skip the full attempt log.
    pub fn winners_only(mut self, winners_only: bool) -> Self {
        self.winners_only = winners_only;
        self
    }

    /// Print the board after every move of each winning line instead of only the final one.
    pub fn show_boards(mut self, show_boards: bool) -> Self {
        self.show_boards = show_boards;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn report(&mut self, report: &SearchReport) -> Result<()> {
        let w = &mut self.writer;
        writeln!(w, "Done.")?;
        writeln!(w, "Max = {}", report.max_score())?;
        writeln!(w, "Winners:")?;

        for attempt in report.best_attempts() {
            writeln!(w, "{}:", attempt.sequence_label())?;
            if self.show_boards {
                for (step, mv) in attempt.moves.iter().enumerate() {
                    writeln!(w, "move {} (pit {}):", step + 1, mv.pit)?;
                    writeln!(w, "{}", mv.after)?;
                }
            } else if let Some(board) = attempt.final_board() {
                writeln!(w, "{board}")?;
            }
        }

        if !self.winners_only {
            writeln!(w)?;
            for attempt in report.attempts() {
                writeln!(w, "{}. {}", attempt.sequence_label(), attempt.score)?;
            }
        }

        w.flush().map_err(|source| Error::Io {
            operation: "flush text report".to_string(),
            source,
        })
    }
}

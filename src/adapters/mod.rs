//! Adapters implementing domain ports.
//!
//! Reporters render a finished [`SearchReport`](crate::search::SearchReport);
//! the progress observer follows a search as it runs.

pub mod csv_reporter;
pub mod json_reporter;
pub mod progress_observer;
pub mod text_reporter;

pub use csv_reporter::CsvReporter;
pub use json_reporter::JsonReporter;
pub use progress_observer::ProgressObserver;
pub use text_reporter::TextReporter;

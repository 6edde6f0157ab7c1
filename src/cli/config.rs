//! Shared configuration types for CLI commands

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Report rendering format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// Common configuration shared across commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Whether to show a progress spinner while enumerating
    pub progress: bool,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self { progress: true }
    }
}

/// Reporting configuration for the solve command
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolveConfig {
    pub common: CommonConfig,

    pub format: OutputFormat,

    /// Write the report here instead of stdout
    pub output: Option<PathBuf>,

    /// Only report the best attempts
    pub winners_only: bool,

    /// Show the board after every move of each winner (text format)
    pub show_boards: bool,

    /// Single-line JSON
    pub compact: bool,
}

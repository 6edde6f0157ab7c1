//! CLI infrastructure for the mancala enumerator
//!
//! This module provides the command-line interface for running the search,
//! summarising it, and replaying individual move chains.

pub mod commands;
pub mod config;
pub mod output;

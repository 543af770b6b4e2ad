//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the clickforge binary.

mod commands;
mod render;
mod run;

pub use commands::{Cli, Commands};
pub use run::{analyze, combos, run_all, script};

//! Command-line arguments for the outcome checker.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;

use crate::report::Check;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to a JSON file holding an array of outcomes,
    /// e.g. `[{"Success": 1}, {"Failure": "x"}]`.
    #[clap(long)]
    pub path: String,

    /// Aggregate check to run over the loaded outcomes.
    #[clap(long, value_enum, default_value_t = Check::All)]
    pub check: Check,

    /// Force-extract the success payload of the first outcome after reporting.
    #[clap(long)]
    pub require_success: bool,
}

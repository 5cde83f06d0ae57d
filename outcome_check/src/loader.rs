//! Loading outcomes from JSON input.
//!
//! The input is a JSON array of externally tagged outcomes with arbitrary payloads:
//! `[{"Success": {"port": 80}}, {"Failure": "timeout"}]`.
use log::debug;
use outcome_core::{OutcomeError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::report::JsonOutcome;

/// Decode an outcome array from any reader.
pub fn load_outcomes<R: Read>(reader: R) -> Result<Vec<JsonOutcome>> {
    let outcomes: Vec<JsonOutcome> = serde_json::from_reader(reader)?;
    debug!("Decoded {} outcomes", outcomes.len());
    Ok(outcomes)
}

/// Open `path` and decode its outcome array.
pub fn load_from_path(path: &Path) -> Result<Vec<JsonOutcome>> {
    if !is_file_exist(path) {
        return Err(OutcomeError::Format(format!(
            "Input file not found: {}",
            path.display()
        )));
    }
    let file = File::open(path)?;
    load_outcomes(BufReader::new(file))
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
pub fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}

/// Returns `true` if the provided path exists and is a regular file.
fn is_file_exist(path: &Path) -> bool {
    path.exists() && path.is_file()
}

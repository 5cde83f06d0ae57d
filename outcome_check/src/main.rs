//! Outcome Check — loads a JSON array of outcomes from a file and runs aggregate checks
//! over it, printing one `check: value` line per check to stdout.
//!
//! Usage example (CLI):
//! ```bash
//! outcome_check --path ./outcomes.json --check first-failure
//! outcome_check --path ./outcomes.json --require-success
//! ```
//!
//! The input file holds externally tagged outcomes, e.g. `[{"Success": 1}, {"Failure": "x"}]`.
//! See `loader` for details. With `--require-success` the first outcome is force-extracted
//! after the report, and the process fails with the unwrap error if it is a failure.
#![warn(missing_docs)]
mod args;
mod loader;
mod report;

use crate::args::Args;
use crate::loader::{load_from_path, normalize_path};
use clap::Parser;
use log::{error, info, warn};
use outcome_core::OutcomeError;
use outcome_core::Result;

fn run(args: Args) -> Result<()> {
    let path = normalize_path(&args.path);
    let outcomes = load_from_path(&path)?;
    info!("Loaded {} outcomes from {}", outcomes.len(), path.display());
    if outcomes.is_empty() {
        warn!("Input holds no outcomes; any_* checks are false and all_* checks hold vacuously");
    }

    for line in args.check.run(&outcomes) {
        println!("{}", line);
    }

    if args.require_success {
        let first = outcomes
            .into_iter()
            .next()
            .ok_or_else(|| OutcomeError::Format("No outcome to extract".to_string()))?;
        let value = first.expect_success("first outcome must be a success")?;
        println!("value: {}", value);
    }
    Ok(())
}

fn main() -> Result<(), OutcomeError> {
    init_logger();
    let args = Args::parse();
    if let Err(e) = run(args) {
        error!("{}", e);
        return Err(e);
    }
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Check;
    use std::fs;
    use std::path::PathBuf;

    fn write_input(name: &str, contents: &str) -> PathBuf {
        let file_name = format!("outcome_check_{}_{}.json", std::process::id(), name);
        let path = std::env::temp_dir().join(file_name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn args_for(path: &PathBuf, require_success: bool) -> Args {
        Args {
            path: path.display().to_string(),
            check: Check::All,
            require_success,
        }
    }

    #[test]
    fn require_success_on_a_failure_yields_unwrap_error() {
        let path = write_input("failure_first", r#"[{"Failure": "x"}, {"Success": 1}]"#);
        let err = run(args_for(&path, true)).unwrap_err();
        fs::remove_file(&path).unwrap();

        match err {
            OutcomeError::Unwrap(inner) => {
                assert_eq!(inner.message(), "first outcome must be a success");
                assert!(inner.result().is_failure());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn require_success_on_empty_input_is_a_format_error() {
        let path = write_input("empty", "[]");
        let err = run(args_for(&path, true)).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(matches!(err, OutcomeError::Format(_)));
    }

    #[test]
    fn require_success_on_a_success_passes() {
        let path = write_input("success_first", r#"[{"Success": 1}, {"Failure": "x"}]"#);
        let result = run(args_for(&path, true));
        fs::remove_file(&path).unwrap();

        assert!(result.is_ok());
    }

    #[test]
    fn report_only_does_not_extract() {
        let path = write_input("report_only", "[]");
        let result = run(args_for(&path, false));
        fs::remove_file(&path).unwrap();

        assert!(result.is_ok());
    }
}

//! Aggregate checks selectable from the command line and their textual report.
//!
//! Each check produces one `label: value` line. First-match checks print the matched outcome
//! (`Failure("x")`) or `none` when nothing matched.
use clap::ValueEnum;
use outcome_core::{
    Outcome, all_failure, all_success, any_failure, any_success, first_failure, first_success,
};
use serde_json::Value;
use strum::{Display, EnumIter, IntoEnumIterator};

/// Outcome with arbitrary JSON payloads, as loaded by the CLI.
pub type JsonOutcome = Outcome<Value, Value>;

/// Printed for a first-match check that found nothing.
const NONE_LABEL: &str = "none";

/// Aggregate checks understood by `--check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Check {
    /// At least one success.
    AnySuccess,
    /// Every element is a success.
    AllSuccess,
    /// At least one failure.
    AnyFailure,
    /// Every element is a failure.
    AllFailure,
    /// Earliest success.
    FirstSuccess,
    /// Earliest failure.
    FirstFailure,
    /// Every check above, in order.
    All,
}

impl Check {
    /// Run the check and render its report lines.
    pub fn run(self, outcomes: &[JsonOutcome]) -> Vec<String> {
        let value = match self {
            Check::All => {
                return Check::iter()
                    .filter(|check| *check != Check::All)
                    .flat_map(|check| check.run(outcomes))
                    .collect();
            }
            Check::AnySuccess => any_success(outcomes).to_string(),
            Check::AllSuccess => all_success(outcomes).to_string(),
            Check::AnyFailure => any_failure(outcomes).to_string(),
            Check::AllFailure => all_failure(outcomes).to_string(),
            Check::FirstSuccess => first_success(outcomes)
                .map(|found| found.propagate::<&Value>().to_string())
                .unwrap_or_else(|| NONE_LABEL.to_string()),
            Check::FirstFailure => first_failure(outcomes)
                .map(|found| found.propagate::<&Value>().to_string())
                .unwrap_or_else(|| NONE_LABEL.to_string()),
        };
        vec![format!("{}: {}", self, value)]
    }
}

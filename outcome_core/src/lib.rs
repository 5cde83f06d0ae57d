//!
//! Explicit success/failure values and aggregate checks over them.
//!
//! This crate aggregates:
//! - `outcome` — the `Outcome<T, E>` sum type and its `Success`/`Failure` wrappers.
//! - `checker` — any/all/first-match checks over sequences of outcomes.
//! - `error` — `UnwrapFailure` for forced extraction and the unified `OutcomeError`.
//! - `result` — handy `Result<T, OutcomeError>` alias.
#![warn(missing_docs)]
pub mod checker;
pub mod error;
pub mod outcome;
pub mod result;

pub use checker::{
    IntoOutcome, OutcomeIteratorExt, all_failure, all_success, any_failure, any_success,
    first_failure, first_success,
};
pub use error::{JsonUnwrapFailure, OutcomeError, UnwrapFailure};
pub use outcome::{Failure, Outcome, OutcomeKind, Success, failure, success};
pub use result::Result;

//! Error types of the workspace.
//!
//! `UnwrapFailure` is the one abnormal path of the core: it is produced when a caller forces
//! the payload of the inactive variant. `OutcomeError` unifies that signal with the I/O and
//! JSON failures an application meets when it loads outcomes from the outside world.
use std::io;

use serde_json::Value;
use thiserror::Error;

use crate::outcome::Outcome;

/// Forced extraction of the inactive variant.
///
/// Keeps the outcome that was asked for the wrong payload, together with the caller's
/// message, so diagnostic code can look at both.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}: {result:?}")]
pub struct UnwrapFailure<T, E> {
    result: Outcome<T, E>,
    message: String,
}

impl<T, E> UnwrapFailure<T, E> {
    /// Create a new instance of UnwrapFailure.
    pub fn new(result: Outcome<T, E>, message: impl Into<String>) -> Self {
        Self {
            result,
            message: message.into(),
        }
    }

    /// The outcome that triggered the failure.
    pub fn result(&self) -> &Outcome<T, E> {
        &self.result
    }

    /// Caller-supplied context.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Recover the original outcome.
    pub fn into_result(self) -> Outcome<T, E> {
        self.result
    }
}

/// `UnwrapFailure` over dynamically typed JSON payloads.
pub type JsonUnwrapFailure = UnwrapFailure<Value, Value>;

/// Unified error type for code that loads and checks outcomes.
#[derive(Error, Debug)]
pub enum OutcomeError {
    /// I/O error originating from the standard library or files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// A forced extraction on a JSON outcome hit the inactive variant.
    #[error("Unwrap failure: {0}")]
    Unwrap(#[from] JsonUnwrapFailure),
}

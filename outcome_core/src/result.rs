//! Result type alias shared across the workspace.
//!
//! Defaults the error type to `OutcomeError`, so loading and checking code can simply
//! return `Result<T>`.
use crate::error::OutcomeError;

/// Workspace-wide `Result` alias with `OutcomeError` as the default error.
pub type Result<T, E = OutcomeError> = std::result::Result<T, E>;

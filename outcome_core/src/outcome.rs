//! The two-variant success/failure value type.
//!
//! An `Outcome<T, E>` is either a `Success` holding a `T` or a `Failure` holding an `E`.
//! Exactly one variant is active and the payload cannot be mutated once constructed.
//!
//! Operations fall into four groups:
//! - inspection — `is_success`, `is_failure`, `kind`;
//! - extraction — `success_value`/`failure_value` (absent as `None`), `success_or`/`failure_or`
//!   (caller default) and `expect_success`/`expect_failure` (forced, yields [`UnwrapFailure`]);
//! - case analysis — `match_with`, the single exhaustive primitive;
//! - propagation — [`Failure::propagate`] re-types the success parameter of a failure so it can
//!   cross a function boundary without being unwrapped and rewrapped.
//!
//! The single-variant wrappers [`Success`] and [`Failure`] are what the aggregate checker's
//! first-match operations hand back.
use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumDiscriminants, EnumString};

use crate::error::UnwrapFailure;

/// Explicit success/failure value.
///
/// The JSON form is externally tagged: `{"Success": 1}` / `{"Failure": "boom"}`.
#[must_use = "this `Outcome` may be a `Failure`, which should be handled"]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumDiscriminants,
)]
#[strum_discriminants(name(OutcomeKind), derive(Display, EnumString, Hash))]
pub enum Outcome<T, E> {
    /// Success payload.
    Success(T),
    /// Error payload.
    Failure(E),
}

/// Builds a `Success` outcome.
pub fn success<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Success(value)
}

/// Builds a `Failure` outcome.
pub fn failure<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Failure(error)
}

impl<T, E> Outcome<T, E> {
    /// Creates a `Success` holding `value`.
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Creates a `Failure` holding `error`.
    pub fn failure(error: E) -> Self {
        Outcome::Failure(error)
    }

    /// Which variant is active.
    pub fn kind(&self) -> OutcomeKind {
        self.into()
    }

    /// Returns `true` for a `Success`.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` for a `Failure`.
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The success payload, or `None` on a `Failure`.
    ///
    /// `None` is never a valid `T` here: for `T = Option<U>` a success holding `None`
    /// comes back as `Some(None)`.
    pub fn success_value(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// The error payload, or `None` on a `Success`.
    pub fn failure_value(self) -> Option<E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Borrowed view of the payload, leaving `self` in place.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Narrows to the `Success` variant.
    pub fn into_success(self) -> Option<Success<T>> {
        self.success_value().map(Success)
    }

    /// Narrows to the `Failure` variant.
    pub fn into_failure(self) -> Option<Failure<E>> {
        self.failure_value().map(Failure)
    }

    /// Forced extraction of the success payload.
    ///
    /// On a `Failure` the whole outcome is handed back inside an [`UnwrapFailure`] together
    /// with `message`, so the caller can either inspect it or bubble it up with `?`.
    pub fn expect_success(self, message: impl Into<String>) -> Result<T, UnwrapFailure<T, E>> {
        match self {
            Outcome::Success(value) => Ok(value),
            failed @ Outcome::Failure(_) => Err(failed.unwrap_failure(message.into())),
        }
    }

    /// Forced extraction of the error payload. Mirror of [`Outcome::expect_success`].
    pub fn expect_failure(self, message: impl Into<String>) -> Result<E, UnwrapFailure<T, E>> {
        match self {
            Outcome::Failure(error) => Ok(error),
            succeeded @ Outcome::Success(_) => Err(succeeded.unwrap_failure(message.into())),
        }
    }

    /// The success payload, or `default` on a `Failure`.
    ///
    /// The default has the payload's type. For a fallback of another type, go through
    /// [`Outcome::match_with`]: `outcome.match_with(|v| v.to_string(), |_| "none".into())`.
    pub fn success_or(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// The error payload, or `default` on a `Success`.
    ///
    /// As with [`Outcome::success_or`], a differently typed default goes through
    /// [`Outcome::match_with`].
    pub fn failure_or(self, default: E) -> E {
        match self {
            Outcome::Success(_) => default,
            Outcome::Failure(error) => error,
        }
    }

    /// Exhaustive case analysis: calls exactly one of the two functions with the payload.
    pub fn match_with<R>(
        self,
        on_success: impl FnOnce(T) -> R,
        on_failure: impl FnOnce(E) -> R,
    ) -> R {
        match self {
            Outcome::Success(value) => on_success(value),
            Outcome::Failure(error) => on_failure(error),
        }
    }

    /// Forwards a `Failure` into a context with a different success type.
    ///
    /// A `Success` has nothing to forward, so it is reported as an [`UnwrapFailure`].
    pub fn propagate_failure<U>(
        self,
        message: impl Into<String>,
    ) -> Result<Outcome<U, E>, UnwrapFailure<T, E>> {
        match self {
            Outcome::Failure(error) => Ok(Failure(error).propagate()),
            succeeded @ Outcome::Success(_) => Err(succeeded.unwrap_failure(message.into())),
        }
    }

    fn unwrap_failure(self, message: String) -> UnwrapFailure<T, E> {
        debug!("Forced extraction hit the inactive variant of a {}: {}", self.kind(), message);
        UnwrapFailure::new(self, message)
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(value) => write!(f, "Success({})", value),
            Outcome::Failure(error) => write!(f, "Failure({})", error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.match_with(Ok, Err)
    }
}

/// An outcome statically known to be a success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Success<T>(T);

impl<T> Success<T> {
    /// Wraps `value`.
    pub fn new(value: T) -> Self {
        Success(value)
    }

    /// Borrow the payload.
    pub fn value(&self) -> &T {
        &self.0
    }

    /// Take the payload.
    pub fn into_value(self) -> T {
        self.0
    }

    /// Re-types the error parameter, keeping the success payload.
    pub fn propagate<F>(self) -> Outcome<T, F> {
        Outcome::Success(self.0)
    }
}

impl<T, E> From<Success<T>> for Outcome<T, E> {
    fn from(success: Success<T>) -> Self {
        success.propagate()
    }
}

/// An outcome statically known to be a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Failure<E>(E);

impl<E> Failure<E> {
    /// Wraps `error`.
    pub fn new(error: E) -> Self {
        Failure(error)
    }

    /// Borrow the payload.
    pub fn error(&self) -> &E {
        &self.0
    }

    /// Take the payload.
    pub fn into_error(self) -> E {
        self.0
    }

    /// Re-types the success parameter, keeping the same error value.
    ///
    /// ```
    /// use outcome_core::{Failure, Outcome};
    ///
    /// fn parse(raw: &str) -> Outcome<u32, String> {
    ///     raw.parse::<u32>().map_err(|e| e.to_string()).into()
    /// }
    ///
    /// fn doubled(raw: &str) -> Outcome<String, String> {
    ///     match parse(raw).into_failure() {
    ///         Some(failed) => failed.propagate(),
    ///         None => Outcome::success(format!("{}", parse(raw).success_or(0) * 2)),
    ///     }
    /// }
    ///
    /// assert!(doubled("x").is_failure());
    /// assert_eq!(doubled("21").success_value().as_deref(), Some("42"));
    /// ```
    pub fn propagate<U>(self) -> Outcome<U, E> {
        Outcome::Failure(self.0)
    }
}

impl<T, E> From<Failure<E>> for Outcome<T, E> {
    fn from(failure: Failure<E>) -> Self {
        failure.propagate()
    }
}

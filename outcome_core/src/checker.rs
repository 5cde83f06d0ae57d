//! Aggregate checks over sequences of outcomes.
//!
//! Every check takes anything iterable whose items can be viewed as an [`Outcome`]:
//! owned outcomes, borrowed `&Outcome`s and plain `std::result::Result`s. Each call walks its
//! input once, in order, and stops as soon as the answer is known, so lazy and even infinite
//! iterators are fine as long as the deciding element eventually shows up.
//!
//! To ask several questions about the same data, keep it in a collection and pass a borrow to
//! each call. First-match checks on borrowed input return `Success<&T>` / `Failure<&E>`.
use log::trace;

use crate::outcome::{Failure, Outcome, Success};

/// Conversion of a sequence item into an outcome.
pub trait IntoOutcome {
    /// Success payload type.
    type Success;
    /// Error payload type.
    type Failure;

    /// View the item as an outcome.
    fn into_outcome(self) -> Outcome<Self::Success, Self::Failure>;
}

impl<T, E> IntoOutcome for Outcome<T, E> {
    type Success = T;
    type Failure = E;

    fn into_outcome(self) -> Outcome<T, E> {
        self
    }
}

impl<'a, T, E> IntoOutcome for &'a Outcome<T, E> {
    type Success = &'a T;
    type Failure = &'a E;

    fn into_outcome(self) -> Outcome<&'a T, &'a E> {
        self.as_ref()
    }
}

impl<T, E> IntoOutcome for Result<T, E> {
    type Success = T;
    type Failure = E;

    fn into_outcome(self) -> Outcome<T, E> {
        self.into()
    }
}

impl<'a, T, E> IntoOutcome for &'a Result<T, E> {
    type Success = &'a T;
    type Failure = &'a E;

    fn into_outcome(self) -> Outcome<&'a T, &'a E> {
        self.as_ref().into()
    }
}

type SuccessOf<I> = <<I as IntoIterator>::Item as IntoOutcome>::Success;
type FailureOf<I> = <<I as IntoIterator>::Item as IntoOutcome>::Failure;

/// `true` if at least one element is a success.
pub fn any_success<I>(seq: I) -> bool
where
    I: IntoIterator,
    I::Item: IntoOutcome,
{
    seq.into_iter().any(|item| item.into_outcome().is_success())
}

/// `true` if every element is a success; `true` for an empty sequence.
pub fn all_success<I>(seq: I) -> bool
where
    I: IntoIterator,
    I::Item: IntoOutcome,
{
    seq.into_iter().all(|item| item.into_outcome().is_success())
}

/// `true` if at least one element is a failure.
pub fn any_failure<I>(seq: I) -> bool
where
    I: IntoIterator,
    I::Item: IntoOutcome,
{
    seq.into_iter().any(|item| item.into_outcome().is_failure())
}

/// `true` if every element is a failure; `true` for an empty sequence.
pub fn all_failure<I>(seq: I) -> bool
where
    I: IntoIterator,
    I::Item: IntoOutcome,
{
    seq.into_iter().all(|item| item.into_outcome().is_failure())
}

/// Earliest success in iteration order.
pub fn first_success<I>(seq: I) -> Option<Success<SuccessOf<I>>>
where
    I: IntoIterator,
    I::Item: IntoOutcome,
{
    let (index, found) = seq
        .into_iter()
        .enumerate()
        .find_map(|(index, item)| item.into_outcome().into_success().map(|s| (index, s)))?;
    trace!("First success found at index {}", index);
    Some(found)
}

/// Earliest failure in iteration order.
pub fn first_failure<I>(seq: I) -> Option<Failure<FailureOf<I>>>
where
    I: IntoIterator,
    I::Item: IntoOutcome,
{
    let (index, found) = seq
        .into_iter()
        .enumerate()
        .find_map(|(index, item)| item.into_outcome().into_failure().map(|f| (index, f)))?;
    trace!("First failure found at index {}", index);
    Some(found)
}

/// The aggregate checks as iterator methods.
///
/// ```
/// use outcome_core::{Outcome, OutcomeIteratorExt};
///
/// let outcomes: Vec<Outcome<u32, &str>> =
///     vec![Outcome::failure("a"), Outcome::success(2), Outcome::failure("b")];
///
/// assert!(outcomes.iter().any_success());
/// assert!(!outcomes.iter().all_failure());
/// assert_eq!(outcomes.iter().first_success().map(|s| *s.into_value()), Some(2));
/// ```
pub trait OutcomeIteratorExt: Iterator<Item: IntoOutcome> + Sized {
    /// See [`any_success`].
    fn any_success(self) -> bool {
        any_success(self)
    }

    /// See [`all_success`].
    fn all_success(self) -> bool {
        all_success(self)
    }

    /// See [`any_failure`].
    fn any_failure(self) -> bool {
        any_failure(self)
    }

    /// See [`all_failure`].
    fn all_failure(self) -> bool {
        all_failure(self)
    }

    /// See [`first_success`].
    fn first_success(self) -> Option<Success<<Self::Item as IntoOutcome>::Success>> {
        first_success(self)
    }

    /// See [`first_failure`].
    fn first_failure(self) -> Option<Failure<<Self::Item as IntoOutcome>::Failure>> {
        first_failure(self)
    }
}

impl<I> OutcomeIteratorExt for I where I: Iterator<Item: IntoOutcome> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{failure, success};
    use std::cell::Cell;

    #[test]
    fn empty_sequence_laws() {
        let empty: Vec<Outcome<i32, i32>> = Vec::new();
        assert!(all_success(&empty));
        assert!(all_failure(&empty));
        assert!(!any_success(&empty));
        assert!(!any_failure(&empty));
        assert_eq!(first_success(&empty), None);
        assert_eq!(first_failure(&empty), None);
    }

    #[test]
    fn first_success_takes_the_earliest_match() {
        let seq = vec![failure(1), success(2), failure(3), success(4)];
        assert!(any_success(&seq));
        assert_eq!(first_success(&seq), Some(Success::new(&2)));
        assert_eq!(first_success(seq), Some(Success::new(2)));
    }

    #[test]
    fn all_failure_and_first_failure() {
        let seq: Vec<Outcome<(), i32>> = vec![failure(1), failure(2)];
        assert!(all_failure(&seq));
        assert_eq!(first_failure(&seq).map(Failure::into_error), Some(&1));
    }

    #[test]
    fn mixed_sequence() {
        let seq: Vec<Outcome<i32, &str>> = vec![success(1), failure("x"), success(2)];
        assert!(any_failure(&seq));
        assert!(!all_success(&seq));
        assert_eq!(first_failure(seq), Some(Failure::new("x")));
    }

    #[test]
    fn failures_only() {
        let seq: Vec<Outcome<i32, &str>> = vec![failure("a"), failure("b")];
        assert_eq!(first_success(&seq), None);
        assert!(!all_success(&seq));
        assert!(any_failure(&seq));
    }

    #[test]
    fn stops_at_the_deciding_element() {
        let seq: Vec<Outcome<i32, i32>> = vec![failure(1), success(2), failure(3)];

        let mut iter = seq.iter();
        assert!(any_success(iter.by_ref()));
        assert_eq!(iter.next(), Some(&Outcome::Failure(3)));

        let mut iter = seq.iter();
        assert!(!all_failure(iter.by_ref()));
        assert_eq!(iter.len(), 1);

        let seq: Vec<Outcome<i32, i32>> = vec![success(1), failure(2), success(3)];

        let mut iter = seq.iter();
        assert!(!all_success(iter.by_ref()));
        assert_eq!(iter.len(), 1);

        let mut iter = seq.iter();
        assert!(any_failure(iter.by_ref()));
        assert_eq!(iter.len(), 1);

        let mut iter = seq.iter();
        assert_eq!(first_failure(iter.by_ref()), Some(Failure::new(&2)));
        assert_eq!(iter.next(), Some(&Outcome::Success(3)));
    }

    #[test]
    fn lazy_source_is_pulled_up_to_the_first_failure() {
        let pulled = Cell::new(0);
        let counter = &pulled;
        let source = move || {
            (0..10).map(move |n| {
                counter.set(counter.get() + 1);
                if n == 2 {
                    failure::<i32, i32>(n)
                } else {
                    success(n)
                }
            })
        };

        assert!(!all_success(source()));
        assert_eq!(pulled.replace(0), 3);

        assert!(any_failure(source()));
        assert_eq!(pulled.replace(0), 3);

        assert_eq!(first_failure(source()), Some(Failure::new(2)));
        assert_eq!(pulled.get(), 3);
    }

    #[test]
    fn first_success_keeps_a_none_payload() {
        let seq: Vec<Outcome<Option<i32>, ()>> = vec![failure(()), success(None)];
        assert_eq!(first_success(&seq), Some(Success::new(&None)));
    }

    #[test]
    fn first_match_terminates_on_infinite_input() {
        let numbers = (0u32..).map(|n| if n < 5 { failure(n) } else { success::<u32, u32>(n * 10) });
        assert_eq!(first_success(numbers), Some(Success::new(50)));

        let numbers = (0u32..).map(|n| if n == 3 { failure(n) } else { success::<u32, u32>(n) });
        assert!(numbers.any_failure());
    }

    #[test]
    fn accepts_std_results() {
        let results: Vec<Result<u8, String>> = vec![Err("bad".to_string()), Ok(1)];
        assert!(any_success(&results));
        assert_eq!(first_failure(&results).map(|f| f.into_error().as_str()), Some("bad"));
        assert_eq!(results.into_iter().first_success(), Some(Success::new(1)));
    }
}

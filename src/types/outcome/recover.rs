//! Failure-side combinators: recovery and observation.
//!
//! The two families are deliberately distinct. [`recover`](Outcome::recover)
//! and friends may replace a failure with a new success; the observation
//! methods ([`on_failure`](Outcome::on_failure),
//! [`on_failure_of`](Outcome::on_failure_of),
//! [`on_success`](Outcome::on_success)) only look, and always return the
//! outcome unchanged.

use core::any::Any;
use core::error::Error;

use super::{Outcome, State};
use crate::types::fault::Fault;

impl<T> Outcome<T> {
    /// Attempts to recover from a failure with an outcome-producing
    /// continuation.
    ///
    /// A success passes through and the continuation never runs. On failure
    /// the continuation receives the fault; a successful recovery fully
    /// replaces the failure. When the recovery itself fails, the result
    /// aggregates the original fault and the recovery's fault, in that
    /// order, so the original cause is never dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{AggregateFault, Fault, Outcome};
    ///
    /// let healed = Outcome::<u32>::fail(Fault::msg("boom"))
    ///     .recover(|_| Outcome::ok(7));
    /// assert_eq!(*healed.value(), 7);
    ///
    /// let still_bad = Outcome::<u32>::fail(Fault::msg("boom"))
    ///     .recover(|_| Outcome::fail(Fault::msg("retry failed")));
    /// let aggregate = still_bad.fault().downcast_ref::<AggregateFault>().unwrap();
    /// assert_eq!(aggregate.faults()[0].to_string(), "boom");
    /// assert_eq!(aggregate.faults()[1].to_string(), "retry failed");
    /// ```
    #[inline]
    pub fn recover<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(&Fault) -> Outcome<T>,
    {
        match self.state {
            State::Success(value) => Outcome::from_value(value),
            State::Failure(fault) => match f(&fault).state {
                State::Success(value) => Outcome::from_value(value),
                State::Failure(second) => {
                    Outcome::from_fault(Fault::aggregate([fault, second]))
                },
            },
        }
    }

    /// Recovers from a failure with a function that always produces a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Fault, Outcome};
    ///
    /// let healed = Outcome::<u32>::fail(Fault::msg("boom"))
    ///     .recover_with(|_| 0);
    /// assert_eq!(*healed.value(), 0);
    /// ```
    #[inline]
    pub fn recover_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(&Fault) -> T,
        T: Any,
    {
        match self.state {
            State::Success(value) => Outcome::from_value(value),
            State::Failure(fault) => Outcome::ok(f(&fault)),
        }
    }

    /// Replaces a failure with a constant value.
    #[inline]
    pub fn fallback(self, value: T) -> Outcome<T>
    where
        T: Any,
    {
        match self.state {
            State::Success(value) => Outcome::from_value(value),
            State::Failure(_) => Outcome::ok(value),
        }
    }

    /// Observes the fault of a failed outcome.
    ///
    /// Runs only on failure and returns the outcome unchanged; an observer
    /// can never swallow a failure into a success. Successes skip the
    /// observer entirely.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Fault, Outcome};
    ///
    /// let mut seen = String::new();
    /// let outcome = Outcome::<u32>::fail(Fault::msg("boom"))
    ///     .on_failure(|fault| seen = fault.to_string());
    /// assert_eq!(seen, "boom");
    /// assert!(outcome.is_failure());
    /// ```
    #[inline]
    pub fn on_failure<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(&Fault),
    {
        if let State::Failure(fault) = &self.state {
            f(fault);
        }
        self
    }

    /// Observes the fault only when its underlying error is of type `E`.
    ///
    /// Narrowed observation for callers that care about one concrete error
    /// type; faults of any other type skip the observer.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Fault, Outcome};
    ///
    /// let mut hits = 0;
    /// let outcome = Outcome::<u32>::fail(Fault::new(core::fmt::Error))
    ///     .on_failure_of::<core::fmt::Error, _>(|_| hits += 1)
    ///     .on_failure_of::<outcome_rail::AggregateFault, _>(|_| hits += 10);
    /// assert_eq!(hits, 1);
    /// assert!(outcome.is_failure());
    /// ```
    #[inline]
    pub fn on_failure_of<E, F>(self, f: F) -> Outcome<T>
    where
        E: Error + 'static,
        F: FnOnce(&E),
    {
        if let State::Failure(fault) = &self.state {
            if let Some(error) = fault.downcast_ref::<E>() {
                f(error);
            }
        }
        self
    }

    /// Observes the carried value of a successful outcome.
    ///
    /// The mirror image of [`on_failure`](Self::on_failure).
    #[inline]
    pub fn on_success<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(&T),
    {
        if let State::Success(value) = &self.state {
            f(value);
        }
        self
    }
}

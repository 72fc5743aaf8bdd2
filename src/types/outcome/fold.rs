//! Exhaustive reduction and unconditional taps: `fold`, `always`,
//! `always_then`.

use super::{Outcome, State};
use crate::types::fault::Fault;

impl<T> Outcome<T> {
    /// Reduces the outcome by running exactly one of two branches.
    ///
    /// The success branch receives the carried value, the failure branch the
    /// fault; whichever runs, its return value is the result. Both branches
    /// are mandatory, which makes `fold` the one combinator guaranteed to
    /// fully resolve an outcome in a single call.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Fault, Outcome};
    ///
    /// let ok = Outcome::ok(2).fold(|x| x * 10, |_| 0);
    /// assert_eq!(ok, 20);
    ///
    /// let err = Outcome::<i32>::fail(Fault::msg("boom")).fold(|x| x * 10, |_| 0);
    /// assert_eq!(err, 0);
    /// ```
    #[inline]
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Fault) -> R,
    {
        match self.state {
            State::Success(value) => on_success(value),
            State::Failure(fault) => on_failure(fault),
        }
    }

    /// Runs a side effect regardless of state, returning the outcome
    /// unchanged.
    ///
    /// The tap sees the whole outcome, so it may inspect either side, but it
    /// cannot reclassify the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut polls = 0;
    /// let outcome = Outcome::ok(1).always(|_| polls += 1);
    /// assert_eq!(polls, 1);
    /// assert!(outcome.is_success());
    /// ```
    #[inline]
    pub fn always<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(&Outcome<T>),
    {
        f(&self);
        self
    }

    /// Runs an unconditional transform, replacing the outcome with whatever
    /// the continuation returns.
    ///
    /// Unlike [`then`](Outcome::then), the continuation also runs on
    /// failure; it is the only way a combinator hands a failure to caller
    /// logic that may produce a brand-new outcome of any type.
    #[inline]
    pub fn always_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(Outcome<T>) -> Outcome<U>,
    {
        f(self)
    }
}

//! Conditional continuations gated by a predicate over the success value.

use super::{Outcome, State};

impl<T> Outcome<T> {
    /// Runs `then` when the predicate holds for the success value.
    ///
    /// Failures skip both the predicate and the branch. When the predicate
    /// is false the outcome passes through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let bumped = Outcome::ok(5).when(|x| *x > 0, |x| Outcome::ok(x + 1));
    /// assert_eq!(*bumped.value(), 6);
    ///
    /// let untouched = Outcome::ok(-5).when(|x| *x > 0, |x| Outcome::ok(x + 1));
    /// assert_eq!(*untouched.value(), -5);
    /// ```
    #[inline]
    pub fn when<P, F>(self, pred: P, then: F) -> Outcome<T>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(T) -> Outcome<T>,
    {
        match self.state {
            State::Success(value) => {
                if pred(&value) {
                    then(value)
                } else {
                    Outcome::from_value(value)
                }
            },
            State::Failure(fault) => Outcome::from_fault(fault),
        }
    }

    /// Runs `then` when the predicate holds, `otherwise` when it does not.
    ///
    /// Failures skip both branches.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let normalize = |outcome: outcome_rail::Outcome<i32>| {
    ///     outcome.when_else(
    ///         |x| *x > 0,
    ///         |x| Outcome::ok(x),
    ///         |x| Outcome::ok(-x),
    ///     )
    /// };
    /// assert_eq!(*normalize(Outcome::ok(4)).value(), 4);
    /// assert_eq!(*normalize(Outcome::ok(-4)).value(), 4);
    /// ```
    #[inline]
    pub fn when_else<P, F, G>(self, pred: P, then: F, otherwise: G) -> Outcome<T>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(T) -> Outcome<T>,
        G: FnOnce(T) -> Outcome<T>,
    {
        match self.state {
            State::Success(value) => {
                if pred(&value) {
                    then(value)
                } else {
                    otherwise(value)
                }
            },
            State::Failure(fault) => Outcome::from_fault(fault),
        }
    }

    /// Runs a no-value branch when the predicate holds, preserving the
    /// carried value.
    ///
    /// The branch may only veto: its failure becomes the result, while its
    /// success keeps the original value in place. Use this when a check or
    /// side effect should not cost the pipeline its payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Fault, Outcome};
    ///
    /// let kept = Outcome::ok(8).when_do(|x| *x % 2 == 0, |_| Outcome::begin());
    /// assert_eq!(*kept.value(), 8);
    ///
    /// let vetoed = Outcome::ok(8)
    ///     .when_do(|x| *x % 2 == 0, |_| Outcome::fail(Fault::msg("rejected")));
    /// assert!(vetoed.is_failure());
    /// ```
    #[inline]
    pub fn when_do<P, F>(self, pred: P, f: F) -> Outcome<T>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> Outcome,
    {
        match self.state {
            State::Success(value) => {
                if pred(&value) {
                    match f(&value).state {
                        State::Success(()) => Outcome::from_value(value),
                        State::Failure(fault) => Outcome::from_fault(fault),
                    }
                } else {
                    Outcome::from_value(value)
                }
            },
            State::Failure(fault) => Outcome::from_fault(fault),
        }
    }
}

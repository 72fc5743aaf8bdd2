//! Success-only continuations: `then` and `map`.

use core::any::Any;

use super::{Outcome, State};

impl<T> Outcome<T> {
    /// Chains an outcome-producing continuation on the success value.
    ///
    /// On success the continuation receives the carried value and its
    /// outcome becomes the result, including any type change. On failure
    /// the continuation is never invoked; the fault is re-homed into the
    /// new outcome type untouched, so the failure path depends only on the
    /// fault, never on either value type.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Fault, Outcome};
    ///
    /// let doubled = Outcome::ok(21).then(|x| Outcome::ok(x * 2));
    /// assert_eq!(*doubled.value(), 42);
    ///
    /// let skipped: Outcome<u32> = Outcome::fail(Fault::msg("boom"))
    ///     .then(|x: u32| Outcome::ok(x + 1));
    /// assert_eq!(skipped.fault().to_string(), "boom");
    /// ```
    #[inline]
    pub fn then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self.state {
            State::Success(value) => f(value),
            State::Failure(fault) => Outcome::from_fault(fault),
        }
    }

    /// Transforms the success value with a plain function.
    ///
    /// The returned value is lifted into a success through the same checked
    /// construction as [`Outcome::ok`]; a failure passes through untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let rendered = Outcome::ok(10).map(|x| x.to_string());
    /// assert_eq!(*rendered.value(), "10");
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
        U: Any,
    {
        self.then(|value| Outcome::ok(f(value)))
    }

}

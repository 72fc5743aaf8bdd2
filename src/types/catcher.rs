//! Panic capture at the edge of the outcome algebra.
//!
//! Combinators never catch panics on their own; a panic inside a `then`
//! continuation unwinds through the caller like any other bug. [`Catcher`]
//! is the single deliberate seam where a panicking continuation is
//! converted into a failed outcome instead, carrying the panic payload as a
//! [captured](crate::Fault::captured) fault.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Catcher, Outcome};
//!
//! let outcome: Outcome<u32> = Catcher::new().run(Outcome::begin(), |_| {
//!     panic!("continuation exploded");
//! });
//!
//! assert!(outcome.is_failure());
//! assert!(outcome.fault().captured());
//! ```

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::types::fault::Fault;
use crate::types::outcome::Outcome;

/// Governs whether a caught continuation runs on an already-failed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatchPolicy {
    /// Skip the continuation and pass the failure through unchanged.
    #[default]
    SkipOnFailure,
    /// Run the continuation regardless of input state, so catch-all cleanup
    /// logic still executes on failure.
    Always,
}

/// Policy object executing outcome-returning continuations under
/// `catch_unwind`.
///
/// A panic inside the continuation becomes a failed outcome whose fault is
/// the panic payload, marked captured; it never escapes the catcher. The
/// closure is executed behind [`AssertUnwindSafe`], the same convention the
/// futures ecosystem uses for its catch adapters, because the continuation
/// and its input are moved in whole.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catcher {
    policy: CatchPolicy,
}

impl Catcher {
    /// A catcher with the default skip-on-failure policy.
    #[inline]
    pub const fn new() -> Self {
        Self { policy: CatchPolicy::SkipOnFailure }
    }

    /// A catcher that runs its continuation on every input state.
    #[inline]
    pub const fn always() -> Self {
        Self { policy: CatchPolicy::Always }
    }

    /// A catcher with an explicit policy.
    #[inline]
    pub const fn with_policy(policy: CatchPolicy) -> Self {
        Self { policy }
    }

    /// The configured policy.
    #[must_use]
    #[inline]
    pub const fn policy(&self) -> CatchPolicy {
        self.policy
    }

    /// Executes `f` on `input`, converting a panic into a captured failure.
    ///
    /// Under [`CatchPolicy::SkipOnFailure`] a failed input short-circuits
    /// past `f` and its fault is re-homed into the output type. Under
    /// [`CatchPolicy::Always`] the continuation always runs and receives
    /// the input outcome whole.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Catcher, Fault, Outcome};
    ///
    /// let input: Outcome<u32> = Outcome::fail(Fault::msg("boom"));
    ///
    /// // Default policy: the continuation is skipped.
    /// let skipped: Outcome<u32> = Catcher::new().run(input.clone(), |_| {
    ///     unreachable!("never invoked on a failed input");
    /// });
    /// assert_eq!(skipped.fault().to_string(), "boom");
    ///
    /// // Always policy: cleanup logic still observes the failure.
    /// let handled = Catcher::always().run(input, |outcome| {
    ///     Outcome::ok(if outcome.is_failure() { 0u32 } else { 1 })
    /// });
    /// assert_eq!(*handled.value(), 0);
    /// ```
    pub fn run<T, U, F>(&self, input: Outcome<T>, f: F) -> Outcome<U>
    where
        F: FnOnce(Outcome<T>) -> Outcome<U>,
    {
        if self.policy == CatchPolicy::SkipOnFailure && input.is_failure() {
            return Outcome::from_fault(input.into_fault());
        }
        match catch_unwind(AssertUnwindSafe(move || f(input))) {
            Ok(outcome) => outcome,
            Err(payload) => Outcome::from_fault(Fault::from_panic(payload)),
        }
    }
}

impl<T> Outcome<T> {
    /// Runs an outcome-returning continuation under the default catcher.
    ///
    /// Shorthand for [`Catcher::new().run(self, f)`](Catcher::run).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome: Outcome<u32> = Outcome::ok(2).catching(|input| {
    ///     let x = input.into_value();
    ///     assert!(x < 2, "too large");
    ///     Outcome::ok(x)
    /// });
    /// assert!(outcome.is_failure());
    /// assert!(outcome.fault().captured());
    /// ```
    #[inline]
    pub fn catching<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(Outcome<T>) -> Outcome<U>,
    {
        Catcher::new().run(self, f)
    }

    /// Runs an outcome-returning continuation under the always-run catcher.
    #[inline]
    pub fn catching_any<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(Outcome<T>) -> Outcome<U>,
    {
        Catcher::always().run(self, f)
    }
}

impl Outcome {
    /// Starts a chain from an outcome-producing seed, capturing its panics.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::try_begin_with(|| Outcome::ok(5));
    /// assert_eq!(*outcome.value(), 5);
    ///
    /// let caught = Outcome::try_begin_with(|| -> outcome_rail::Outcome<u32> {
    ///     panic!("seed failed");
    /// });
    /// assert!(caught.fault().captured());
    /// ```
    #[inline]
    pub fn try_begin_with<T, F>(producer: F) -> Outcome<T>
    where
        F: FnOnce() -> Outcome<T>,
    {
        Catcher::new().run(Outcome::SUCCESS, |_| producer())
    }
}

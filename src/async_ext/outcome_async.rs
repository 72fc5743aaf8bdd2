//! Asynchronous continuations on realized outcomes.
//!
//! These methods mirror their synchronous namesakes; the only suspension
//! point is the continuation's own future. A failed input short-circuits
//! without constructing the continuation future at all.

use core::any::Any;
use core::future::Future;

use crate::types::fault::Fault;
use crate::types::outcome::{Outcome, State};

impl<T> Outcome<T> {
    /// Chains an asynchronous outcome-producing continuation on the success
    /// value.
    ///
    /// The asynchronous form of [`then`](Outcome::then): on failure the
    /// continuation is never invoked and the fault is re-homed untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_rail::Outcome;
    ///
    /// async fn example() -> Outcome<u32> {
    ///     Outcome::ok(21)
    ///         .then_async(|x| async move { Outcome::ok(x * 2) })
    ///         .await
    /// }
    /// ```
    #[inline]
    pub async fn then_async<U, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        match self.state {
            State::Success(value) => f(value).await,
            State::Failure(fault) => Outcome::from_fault(fault),
        }
    }

    /// Transforms the success value with an asynchronous function.
    ///
    /// The asynchronous form of [`map`](Outcome::map).
    #[inline]
    pub async fn map_async<U, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
        U: Any,
    {
        match self.state {
            State::Success(value) => Outcome::ok(f(value).await),
            State::Failure(fault) => Outcome::from_fault(fault),
        }
    }

    /// Attempts asynchronous recovery from a failure.
    ///
    /// The asynchronous form of [`recover`](Outcome::recover), with the
    /// same aggregation rule when the recovery itself fails.
    #[inline]
    pub async fn recover_async<F, Fut>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(&Fault) -> Fut,
        Fut: Future<Output = Outcome<T>>,
    {
        match self.state {
            State::Success(value) => Outcome::from_value(value),
            State::Failure(fault) => match f(&fault).await.state {
                State::Success(value) => Outcome::from_value(value),
                State::Failure(second) => {
                    Outcome::from_fault(Fault::aggregate([fault, second]))
                },
            },
        }
    }

    /// Observes the fault of a failed outcome asynchronously.
    ///
    /// The asynchronous form of [`on_failure`](Outcome::on_failure); the
    /// outcome is returned unchanged.
    #[inline]
    pub async fn on_failure_async<F, Fut>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(&Fault) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let State::Failure(fault) = &self.state {
            f(fault).await;
        }
        self
    }

    /// Reduces the outcome with asynchronous branches; exactly one runs.
    ///
    /// The asynchronous form of [`fold`](Outcome::fold).
    #[inline]
    pub async fn fold_async<R, S, F, FutS, FutF>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> FutS,
        FutS: Future<Output = R>,
        F: FnOnce(Fault) -> FutF,
        FutF: Future<Output = R>,
    {
        match self.state {
            State::Success(value) => on_success(value).await,
            State::Failure(fault) => on_failure(fault).await,
        }
    }

    /// Runs an asynchronous branch when the predicate holds for the success
    /// value.
    ///
    /// The asynchronous form of [`when`](Outcome::when); the predicate
    /// itself stays synchronous.
    #[inline]
    pub async fn when_async<P, F, Fut>(self, pred: P, then: F) -> Outcome<T>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<T>>,
    {
        match self.state {
            State::Success(value) => {
                if pred(&value) {
                    then(value).await
                } else {
                    Outcome::from_value(value)
                }
            },
            State::Failure(fault) => Outcome::from_fault(fault),
        }
    }

    /// Runs an unconditional asynchronous transform.
    ///
    /// The asynchronous form of [`always_then`](Outcome::always_then).
    #[inline]
    pub async fn always_then_async<U, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(Outcome<T>) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        f(self).await
    }
}

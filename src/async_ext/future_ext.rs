//! Extension trait for `Future<Output = Outcome<T>>`.
//!
//! A pipeline step that has not resolved yet is just a future of an
//! outcome. This trait lets the chain keep reading left to right across
//! the await boundary: every synchronous-continuation method resolves the
//! input exactly once through [`settle`](OutcomeFutureExt::settle) and then
//! delegates to the matching method on [`Outcome`]; the `_async` methods
//! do the same and then await the continuation. No method here restates
//! any success/failure branching of its own.

use core::any::Any;
use core::future::Future;

use super::catch_future::CaughtFuture;
use super::settle::Settle;
use crate::types::fault::Fault;
use crate::types::outcome::Outcome;

/// Combinators for pending outcomes.
///
/// Implemented for every `Future<Output = Outcome<T>>`, so the fluent
/// chain continues across asynchronous steps:
///
/// ```rust
/// use outcome_rail::prelude_async::*;
///
/// async fn fetch_quota(tenant: u64) -> Outcome<u32> {
///     Outcome::ok(tenant as u32)
/// }
///
/// async fn example() -> Outcome<String> {
///     fetch_quota(7)
///         .then(|quota| Outcome::ok(quota * 2))
///         .map(|quota| quota.to_string())
///         .await
/// }
/// ```
pub trait OutcomeFutureExt<T>: Future<Output = Outcome<T>> + Sized {
    /// Resolves the pending outcome once, then applies `op`.
    ///
    /// The building block every other method here is derived from; exposed
    /// for callers that need a shape not covered by the named methods.
    #[inline]
    fn settle<R, F>(self, op: F) -> Settle<Self, F>
    where
        F: FnOnce(Outcome<T>) -> R,
    {
        Settle::new(self, op)
    }

    /// Pending-input form of [`Outcome::then`].
    #[inline]
    fn then<U, F>(self, f: F) -> Settle<Self, impl FnOnce(Outcome<T>) -> Outcome<U>>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        self.settle(move |outcome| outcome.then(f))
    }

    /// Pending-input form of [`Outcome::map`].
    #[inline]
    fn map<U, F>(self, f: F) -> Settle<Self, impl FnOnce(Outcome<T>) -> Outcome<U>>
    where
        F: FnOnce(T) -> U,
        U: Any,
    {
        self.settle(move |outcome| outcome.map(f))
    }

    /// Pending-input form of [`Outcome::fold`].
    #[inline]
    fn fold<R, S, F>(
        self,
        on_success: S,
        on_failure: F,
    ) -> Settle<Self, impl FnOnce(Outcome<T>) -> R>
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Fault) -> R,
    {
        self.settle(move |outcome| outcome.fold(on_success, on_failure))
    }

    /// Pending-input form of [`Outcome::recover`].
    #[inline]
    fn recover<F>(self, f: F) -> Settle<Self, impl FnOnce(Outcome<T>) -> Outcome<T>>
    where
        F: FnOnce(&Fault) -> Outcome<T>,
    {
        self.settle(move |outcome| outcome.recover(f))
    }

    /// Pending-input form of [`Outcome::fallback`].
    #[inline]
    fn fallback(self, value: T) -> Settle<Self, impl FnOnce(Outcome<T>) -> Outcome<T>>
    where
        T: Any,
    {
        self.settle(move |outcome| outcome.fallback(value))
    }

    /// Pending-input form of [`Outcome::on_failure`].
    #[inline]
    fn on_failure<F>(self, f: F) -> Settle<Self, impl FnOnce(Outcome<T>) -> Outcome<T>>
    where
        F: FnOnce(&Fault),
    {
        self.settle(move |outcome| outcome.on_failure(f))
    }

    /// Pending-input form of [`Outcome::on_success`].
    #[inline]
    fn on_success<F>(self, f: F) -> Settle<Self, impl FnOnce(Outcome<T>) -> Outcome<T>>
    where
        F: FnOnce(&T),
    {
        self.settle(move |outcome| outcome.on_success(f))
    }

    /// Pending-input form of [`Outcome::when`].
    #[inline]
    fn when<P, F>(self, pred: P, then: F) -> Settle<Self, impl FnOnce(Outcome<T>) -> Outcome<T>>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(T) -> Outcome<T>,
    {
        self.settle(move |outcome| outcome.when(pred, then))
    }

    /// Pending-input form of [`Outcome::when_else`].
    #[inline]
    fn when_else<P, F, G>(
        self,
        pred: P,
        then: F,
        otherwise: G,
    ) -> Settle<Self, impl FnOnce(Outcome<T>) -> Outcome<T>>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(T) -> Outcome<T>,
        G: FnOnce(T) -> Outcome<T>,
    {
        self.settle(move |outcome| outcome.when_else(pred, then, otherwise))
    }

    /// Pending-input form of [`Outcome::when_do`].
    #[inline]
    fn when_do<P, F>(self, pred: P, f: F) -> Settle<Self, impl FnOnce(Outcome<T>) -> Outcome<T>>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> Outcome,
    {
        self.settle(move |outcome| outcome.when_do(pred, f))
    }

    /// Pending-input form of [`Outcome::always`].
    #[inline]
    fn always<F>(self, f: F) -> Settle<Self, impl FnOnce(Outcome<T>) -> Outcome<T>>
    where
        F: FnOnce(&Outcome<T>),
    {
        self.settle(move |outcome| outcome.always(f))
    }

    /// Pending-input form of [`Outcome::always_then`].
    #[inline]
    fn always_then<U, F>(self, f: F) -> Settle<Self, impl FnOnce(Outcome<T>) -> Outcome<U>>
    where
        F: FnOnce(Outcome<T>) -> Outcome<U>,
    {
        self.settle(move |outcome| outcome.always_then(f))
    }

    /// Pending-input form of [`Outcome::discard`].
    #[inline]
    fn discard(self) -> Settle<Self, impl FnOnce(Outcome<T>) -> Outcome> {
        self.settle(Outcome::discard)
    }

    /// Pending-input form of [`Outcome::combine`] against a realized right
    /// operand.
    #[inline]
    fn combine(self, other: Outcome<T>) -> Settle<Self, impl FnOnce(Outcome<T>) -> Outcome<T>> {
        self.settle(move |outcome| outcome.combine(other))
    }

    /// Merges with another pending outcome.
    ///
    /// Resolves the left operand first, then the right; the operands are
    /// never polled concurrently, keeping chains sequential.
    #[inline]
    fn combine_with<Fut>(self, other: Fut) -> impl Future<Output = Outcome<T>>
    where
        Fut: Future<Output = Outcome<T>>,
    {
        async move {
            let left = self.await;
            let right = other.await;
            left.combine(right)
        }
    }

    /// Pending-input form of [`Outcome::then_async`].
    #[inline]
    fn then_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        async move { self.await.then_async(f).await }
    }

    /// Pending-input form of [`Outcome::map_async`].
    #[inline]
    fn map_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
        U: Any,
    {
        async move { self.await.map_async(f).await }
    }

    /// Pending-input form of [`Outcome::recover_async`].
    #[inline]
    fn recover_async<F, Fut>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&Fault) -> Fut,
        Fut: Future<Output = Outcome<T>>,
    {
        async move { self.await.recover_async(f).await }
    }

    /// Pending-input form of [`Outcome::on_failure_async`].
    #[inline]
    fn on_failure_async<F, Fut>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&Fault) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move { self.await.on_failure_async(f).await }
    }

    /// Pending-input form of [`Outcome::fold_async`].
    #[inline]
    fn fold_async<R, S, F, FutS, FutF>(
        self,
        on_success: S,
        on_failure: F,
    ) -> impl Future<Output = R>
    where
        S: FnOnce(T) -> FutS,
        FutS: Future<Output = R>,
        F: FnOnce(Fault) -> FutF,
        FutF: Future<Output = R>,
    {
        async move { self.await.fold_async(on_success, on_failure).await }
    }

    /// Pending-input form of [`Outcome::when_async`].
    #[inline]
    fn when_async<P, F, Fut>(self, pred: P, then: F) -> impl Future<Output = Outcome<T>>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<T>>,
    {
        async move { self.await.when_async(pred, then).await }
    }

    /// Pending-input form of [`Outcome::always_then_async`].
    #[inline]
    fn always_then_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(Outcome<T>) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        async move { self.await.always_then_async(f).await }
    }

    /// Converts a panic during any poll of this pending outcome into a
    /// captured failure.
    #[inline]
    fn caught(self) -> CaughtFuture<Self> {
        CaughtFuture::new(self)
    }
}

impl<Fut, T> OutcomeFutureExt<T> for Fut where Fut: Future<Output = Outcome<T>> {}

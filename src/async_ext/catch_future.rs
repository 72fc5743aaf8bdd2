//! Panic capture for pending outcomes.
//!
//! [`CaughtFuture`] polls its inner future inside `catch_unwind`, the same
//! shape as the futures ecosystem's catch adapters, so a panic anywhere in
//! an asynchronous continuation becomes a captured fault instead of
//! unwinding through the executor.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use std::panic::{catch_unwind, AssertUnwindSafe};

use pin_project_lite::pin_project;

use crate::types::catcher::{CatchPolicy, Catcher};
use crate::types::fault::Fault;
use crate::types::outcome::Outcome;

pin_project! {
    /// Future wrapper converting a panic during `poll` into a captured
    /// failure.
    ///
    /// Created by [`OutcomeFutureExt::caught`](super::OutcomeFutureExt::caught)
    /// or [`Catcher::run_async`].
    #[must_use = "futures do nothing unless polled"]
    pub struct CaughtFuture<Fut> {
        #[pin]
        future: Fut,
    }
}

impl<Fut> CaughtFuture<Fut> {
    /// Wraps a pending outcome in panic capture.
    #[inline]
    pub fn new(future: Fut) -> Self {
        Self { future }
    }
}

impl<Fut, U> Future for CaughtFuture<Fut>
where
    Fut: Future<Output = Outcome<U>>,
{
    type Output = Outcome<U>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        match catch_unwind(AssertUnwindSafe(|| this.future.poll(cx))) {
            Ok(poll) => poll,
            Err(payload) => Poll::Ready(Outcome::from_fault(Fault::from_panic(payload))),
        }
    }
}

impl Catcher {
    /// Executes an asynchronous continuation on `input`, converting a panic
    /// into a captured failure.
    ///
    /// Mirrors [`Catcher::run`] for continuations that return futures: both
    /// the continuation call itself and every poll of the returned future
    /// run under capture. The policy rules are identical to the synchronous
    /// form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_rail::{Catcher, Outcome};
    ///
    /// async fn example() -> Outcome<u32> {
    ///     Catcher::new()
    ///         .run_async(Outcome::ok(2), |input| async move {
    ///             let x = input.into_value();
    ///             assert!(x < 2, "too large");
    ///             Outcome::ok(x)
    ///         })
    ///         .await
    /// }
    /// ```
    pub async fn run_async<T, U, F, Fut>(&self, input: Outcome<T>, f: F) -> Outcome<U>
    where
        F: FnOnce(Outcome<T>) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        if self.policy() == CatchPolicy::SkipOnFailure && input.is_failure() {
            return Outcome::from_fault(input.into_fault());
        }
        let future = match catch_unwind(AssertUnwindSafe(move || f(input))) {
            Ok(future) => future,
            Err(payload) => return Outcome::from_fault(Fault::from_panic(payload)),
        };
        CaughtFuture::new(future).await
    }
}

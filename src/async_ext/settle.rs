//! The resolve-then-delegate future.
//!
//! Every pending-input combinator shape reduces to the same move: await the
//! input outcome exactly once, then hand it to the matching synchronous
//! combinator. [`Settle`] is that move as a named future; the extension
//! trait builds all of its synchronous-continuation methods on top of it
//! instead of restating any branching logic.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::types::outcome::Outcome;

pin_project! {
    /// Future that resolves an outcome once, then applies a final operation.
    ///
    /// # Cancel Safety
    ///
    /// `Settle` is cancel-safe if the inner future is cancel-safe. The
    /// operation runs only when `poll` returns `Poll::Ready`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_rail::prelude_async::*;
    ///
    /// async fn example() -> Outcome<u32> {
    ///     async { Outcome::ok(20) }
    ///         .then(|x| Outcome::ok(x * 2))
    ///         .await
    /// }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct Settle<Fut, F> {
        #[pin]
        future: Fut,
        op: Option<F>,
    }
}

impl<Fut, F> Settle<Fut, F> {
    /// Creates a new `Settle` from a pending outcome and a final operation.
    #[inline]
    pub fn new(future: Fut, op: F) -> Self {
        Self { future, op: Some(op) }
    }
}

impl<Fut, F, T, R> Future for Settle<Fut, F>
where
    Fut: Future<Output = Outcome<T>>,
    F: FnOnce(Outcome<T>) -> R,
{
    type Output = R;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|outcome| {
            let op = this
                .op
                .take()
                .expect("Settle polled after completion; this is a bug");
            op(outcome)
        })
    }
}

impl<Fut, F, T, R> FusedFuture for Settle<Fut, F>
where
    Fut: FusedFuture<Output = Outcome<T>>,
    F: FnOnce(Outcome<T>) -> R,
{
    fn is_terminated(&self) -> bool {
        // Also check op since it's taken on completion
        self.op.is_none() || self.future.is_terminated()
    }
}

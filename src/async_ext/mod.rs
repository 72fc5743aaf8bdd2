//! Async extensions for outcome-rail.
//!
//! The combinator families exist in four execution shapes: realized input
//! with a synchronous or asynchronous continuation (the inherent methods on
//! [`Outcome`](crate::Outcome)), and pending input with either continuation
//! kind (the [`OutcomeFutureExt`] trait). The pending shapes never restate
//! branching logic; they resolve the input once through [`Settle`] and
//! delegate.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.3", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use outcome_rail::prelude_async::*;
//!
//! async fn load_profile(id: u64) -> Outcome<Profile> {
//!     fetch_account(id)
//!         .then(parse_profile)
//!         .recover(|_| Outcome::ok(Profile::anonymous()))
//!         .await
//! }
//! ```

mod catch_future;
mod future_ext;
mod outcome_async;
mod settle;

pub use catch_future::CaughtFuture;
pub use future_ext::OutcomeFutureExt;
pub use settle::Settle;

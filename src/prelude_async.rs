//! Async prelude - all async utilities in one import.
//!
//! Everything from [`prelude`](crate::prelude) plus the pending-outcome
//! combinators:
//!
//! ```
//! use outcome_rail::prelude_async::*;
//! ```
//!
//! # Examples
//!
//! ```rust
//! use outcome_rail::prelude_async::*;
//!
//! async fn example() -> Outcome<u32> {
//!     async { Outcome::ok(20) }
//!         .then(|x| Outcome::ok(x * 2))
//!         .recover(|_| Outcome::ok(0))
//!         .await
//! }
//! ```

pub use crate::prelude::*;

pub use crate::async_ext::{CaughtFuture, OutcomeFutureExt, Settle};

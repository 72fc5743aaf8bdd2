//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Basic Pipeline
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let outcome = Outcome::begin_with(|| 5)
//!     .then(|x| Outcome::ok(x * 2))
//!     .map(|x| x.to_string());
//!
//! assert_eq!(*outcome.value(), "10");
//! ```
//!
//! ## Short-Circuiting and Recovery
//!
//! ```
//! use outcome_rail::{fail, Outcome};
//!
//! let outcome: Outcome<u32> = fail!("upstream unavailable");
//! let healed = outcome
//!     .then(|x| Outcome::ok(x + 1)) // never runs
//!     .recover(|_| Outcome::ok(0));
//!
//! assert_eq!(*healed.value(), 0);
//! ```
//!
//! ## Merging Independent Outcomes
//!
//! ```
//! use outcome_rail::{AggregateFault, Fault, Outcome};
//!
//! let merged = Outcome::<u32>::fail(Fault::msg("disk"))
//!     .combine(Outcome::fail(Fault::msg("network")));
//!
//! let aggregate = merged.fault().downcast_ref::<AggregateFault>().unwrap();
//! assert_eq!(aggregate.len(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between `Result`, `Outcome`, and fault collections
pub mod convert;
/// Macros for building faults and failed outcomes
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits for fault conversion and boundary ergonomics
pub mod traits;
/// Outcome, fault, and panic-capture types
pub mod types;

/// Async extensions: combinators over pending outcomes (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Tracing integration for pipeline observation (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

// Re-export common types that might be needed at root,
// but encourage using prelude modules.
pub use convert::*;
pub use traits::*;
pub use types::{AggregateFault, Fault, FaultVec, Outcome};

#[cfg(feature = "std")]
pub use types::{CatchPolicy, Catcher};

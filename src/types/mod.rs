//! Outcome and fault types.
//!
//! This module provides the two-sided outcome value, its fault payloads,
//! and the panic-capture policy object.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let outcome = Outcome::ok(40)
//!     .then(|x| Outcome::ok(x + 2))
//!     .on_failure(|fault| { let _ = fault; });
//!
//! assert_eq!(*outcome.value(), 42);
//! ```
use smallvec::SmallVec;

pub mod fault;
pub mod outcome;

#[cfg(feature = "std")]
pub mod catcher;

#[cfg(feature = "serde")]
mod serde_impls;

pub use fault::{AggregateFault, Fault};
pub use outcome::Outcome;

#[cfg(feature = "std")]
pub use catcher::{CatchPolicy, Catcher};

/// SmallVec-backed collection used for aggregated faults.
///
/// Uses inline storage for up to 2 elements so the common two-operand
/// merge stays off the heap.
pub type FaultVec = SmallVec<[Fault; 2]>;

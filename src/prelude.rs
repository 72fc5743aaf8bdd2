//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick
//! starts. Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`fault!`], [`fail!`], [`ensure!`]
//! - **Types**: [`Outcome`], [`Fault`], [`AggregateFault`]
//! - **Traits**: [`IntoFault`], [`ResultOutcomeExt`]
//! - **Panic capture** (with the `std` feature): [`Catcher`], [`CatchPolicy`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn parse_port(raw: &str) -> Outcome<u16> {
//!     raw.parse::<u16>().into_outcome()
//! }
//!
//! assert_eq!(*parse_port("8080").value(), 8080);
//! assert!(parse_port("many").is_failure());
//! ```

// Macros
pub use crate::{ensure, fail, fault};

// Core types
pub use crate::types::{AggregateFault, Fault, FaultVec, Outcome};

// Traits
pub use crate::traits::{IntoFault, ResultOutcomeExt};

#[cfg(feature = "std")]
pub use crate::types::{CatchPolicy, Catcher};

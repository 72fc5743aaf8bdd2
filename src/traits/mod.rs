//! Core traits for fault conversion and boundary ergonomics.
//!
//! - [`IntoFault`]: conversion trait accepted by failure constructors
//! - [`ResultOutcomeExt`]: lifts plain `Result` values onto the outcome rail
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{IntoFault, ResultOutcomeExt};
//!
//! let fault = core::fmt::Error.into_fault();
//! assert!(fault.is::<core::fmt::Error>());
//!
//! let outcome = "7".parse::<i32>().into_outcome();
//! assert_eq!(*outcome.value(), 7);
//! ```

pub mod into_fault;
pub mod result_ext;

pub use into_fault::IntoFault;
pub use result_ext::ResultOutcomeExt;

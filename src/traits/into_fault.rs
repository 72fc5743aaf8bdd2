//! Trait for converting values into fault payloads.
//!
//! [`IntoFault`] is the flexible-argument seam used by failure
//! constructors: any concrete error type converts automatically, and a
//! [`Fault`] passes through untouched.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{traits::IntoFault, Fault};
//!
//! let from_error = core::fmt::Error.into_fault();
//! let passthrough = Fault::msg("boom").into_fault();
//!
//! assert!(from_error.is::<core::fmt::Error>());
//! assert_eq!(passthrough.to_string(), "boom");
//! ```
use core::error::Error;

use crate::types::fault::Fault;

/// Converts a value into a [`Fault`] for the failure side of an outcome.
///
/// Implemented for every `Error + Send + Sync + 'static` type and for
/// `Fault` itself (identity). Plain strings have no `Error` impl and so
/// cannot satisfy this trait; use [`Fault::msg`] or the
/// [`fault!`](crate::fault) macro for message-only failures.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a failure payload",
    label = "this type does not implement `IntoFault`",
    note = "implement `core::error::Error` for `{Self}`, or wrap a plain message with `Fault::msg`"
)]
pub trait IntoFault {
    /// Converts `self` into a [`Fault`].
    fn into_fault(self) -> Fault;
}

impl<E> IntoFault for E
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn into_fault(self) -> Fault {
        Fault::new(self)
    }
}

impl IntoFault for Fault {
    /// Identity conversion (no-op).
    #[inline]
    fn into_fault(self) -> Fault {
        self
    }
}

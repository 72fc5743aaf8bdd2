//! Ergonomic macros for building faults and failed outcomes.
//!
//! - [`macro@crate::fault`] - Formats a message into a [`Fault`](crate::Fault).
//! - [`macro@crate::fail`] - Formats a message into a failed
//!   [`Outcome`](crate::Outcome).
//! - [`macro@crate::ensure`] - Early-returns a failed outcome when a
//!   condition does not hold.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{ensure, fail, fault, Outcome};
//!
//! fn checked_div(a: i32, b: i32) -> Outcome<i32> {
//!     ensure!(b != 0, "division by zero: {} / {}", a, b);
//!     Outcome::ok(a / b)
//! }
//!
//! assert_eq!(*checked_div(10, 2).value(), 5);
//! assert!(checked_div(1, 0).is_failure());
//!
//! let _fault = fault!("user {} not found", 42);
//! let _outcome: Outcome<i32> = fail!("user {} not found", 42);
//! ```

/// Formats a message into a [`Fault`](crate::Fault).
///
/// Accepts the same arguments as the standard `format!` macro.
///
/// # Examples
///
/// ```
/// use outcome_rail::fault;
///
/// let fault = fault!("user {} not found", 42);
/// assert_eq!(fault.to_string(), "user 42 not found");
/// ```
#[macro_export]
macro_rules! fault {
    ($($arg:tt)*) => {
        $crate::Fault::msg(format!($($arg)*))
    };
}

/// Formats a message into a failed [`Outcome`](crate::Outcome).
///
/// The carried type is inferred from the surrounding expression.
///
/// # Examples
///
/// ```
/// use outcome_rail::{fail, Outcome};
///
/// let outcome: Outcome<u32> = fail!("quota exceeded for {}", "tenant-7");
/// assert!(outcome.is_failure());
/// ```
#[macro_export]
macro_rules! fail {
    ($($arg:tt)*) => {
        $crate::Outcome::fail($crate::fault!($($arg)*))
    };
}

/// Returns a failed outcome from the enclosing function when a condition
/// does not hold.
///
/// The enclosing function must return an [`Outcome`](crate::Outcome); the
/// message is only formatted when the condition fails.
///
/// # Examples
///
/// ```
/// use outcome_rail::{ensure, Outcome};
///
/// fn positive(x: i32) -> Outcome<i32> {
///     ensure!(x > 0, "expected a positive value, got {}", x);
///     Outcome::ok(x)
/// }
///
/// assert!(positive(-1).is_failure());
/// assert_eq!(*positive(3).value(), 3);
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {
        if !($cond) {
            return $crate::Outcome::fail($crate::fault!($($arg)*));
        }
    };
}

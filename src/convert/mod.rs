//! Conversion helpers between `Result`, `Outcome`, and fault collections.
//!
//! These adapters make it straightforward to adopt `outcome-rail`
//! incrementally: lift legacy results onto the rail, flatten outcomes back
//! into plain results for external APIs, and build outcomes from batches of
//! faults.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//!
//! let outcome = result_to_outcome("42".parse::<u32>());
//! assert!(outcome.is_success());
//!
//! let result = outcome_to_result(outcome);
//! assert_eq!(result.unwrap(), 42);
//! ```

use core::any::Any;

use crate::traits::IntoFault;
use crate::types::fault::Fault;
use crate::types::outcome::Outcome;

/// Lifts a plain `Result` onto the outcome rail.
///
/// # Arguments
///
/// * `result` - The result to lift
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
///
/// let outcome = result_to_outcome("7".parse::<i32>());
/// assert_eq!(*outcome.value(), 7);
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T>
where
    T: Any,
    E: IntoFault,
{
    match result {
        Ok(value) => Outcome::ok(value),
        Err(error) => Outcome::fail(error),
    }
}

/// Flattens an outcome back into a plain `Result`.
///
/// # Arguments
///
/// * `outcome` - The outcome to flatten
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_result;
/// use outcome_rail::Outcome;
///
/// let result = outcome_to_result(Outcome::ok(3));
/// assert_eq!(result.unwrap(), 3);
/// ```
#[inline]
pub fn outcome_to_result<T>(outcome: Outcome<T>) -> Result<T, Fault> {
    outcome.into_result()
}

/// Builds a no-value outcome from a batch of faults.
///
/// # Returns
///
/// * A success when the batch is empty
/// * A single-fault failure for a batch of one
/// * An aggregated failure preserving order for larger batches
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::collect_faults;
/// use outcome_rail::Fault;
///
/// let clean = collect_faults([]);
/// assert!(clean.is_success());
///
/// let dirty = collect_faults([Fault::msg("first"), Fault::msg("second")]);
/// assert!(dirty.is_failure());
/// ```
#[inline]
pub fn collect_faults<I>(faults: I) -> Outcome
where
    I: IntoIterator<Item = Fault>,
{
    let mut iter = faults.into_iter().peekable();
    if iter.peek().is_none() {
        return Outcome::SUCCESS;
    }
    Outcome::fail(Fault::aggregate(iter))
}

/// Merges a batch of no-value outcomes into one.
///
/// All faults are preserved in iteration order; an empty batch is a
/// success.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::combine_all;
/// use outcome_rail::{Fault, Outcome};
///
/// let merged = combine_all([
///     Outcome::begin(),
///     Outcome::fail(Fault::msg("first")),
///     Outcome::fail(Fault::msg("second")),
/// ]);
/// assert!(merged.is_failure());
/// ```
#[inline]
pub fn combine_all<I>(outcomes: I) -> Outcome
where
    I: IntoIterator<Item = Outcome>,
{
    outcomes
        .into_iter()
        .fold(Outcome::SUCCESS, Outcome::combine)
}

//! Merging independently produced outcomes.
//!
//! `combine` and its cross-arity variants merge two already-computed
//! outcomes rather than chaining continuations. Two failures aggregate
//! both faults in operand order; a lone failure propagates its fault
//! unwrapped; two successes keep the carried value (the left one when both
//! sides carry).

use super::{Outcome, State};
use crate::types::fault::Fault;

impl<T> Outcome<T> {
    /// Merges with another outcome of the same carried type.
    ///
    /// When both succeed the left value wins and the right is discarded,
    /// which suits pipelines where the value is already known and the
    /// second computation only contributes its failure mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{AggregateFault, Fault, Outcome};
    ///
    /// let both = Outcome::ok(1).combine(Outcome::ok(2));
    /// assert_eq!(*both.value(), 1);
    ///
    /// let merged = Outcome::<i32>::fail(Fault::msg("left"))
    ///     .combine(Outcome::fail(Fault::msg("right")));
    /// let aggregate = merged.fault().downcast_ref::<AggregateFault>().unwrap();
    /// assert_eq!(aggregate.faults()[0].to_string(), "left");
    /// assert_eq!(aggregate.faults()[1].to_string(), "right");
    /// ```
    #[inline]
    pub fn combine(self, other: Outcome<T>) -> Outcome<T> {
        match (self.state, other.state) {
            (State::Failure(left), State::Failure(right)) => {
                Outcome::from_fault(Fault::aggregate([left, right]))
            },
            (State::Failure(left), State::Success(_)) => Outcome::from_fault(left),
            (State::Success(_), State::Failure(right)) => Outcome::from_fault(right),
            (State::Success(left), State::Success(_)) => Outcome::from_value(left),
        }
    }

    /// Merges with a no-value outcome, keeping the carried value.
    ///
    /// The failure rules match [`combine`](Self::combine); on mutual
    /// success the carried value survives since the right side has none to
    /// offer.
    #[inline]
    pub fn combine_unit(self, other: Outcome) -> Outcome<T> {
        match (self.state, other.state) {
            (State::Failure(left), State::Failure(right)) => {
                Outcome::from_fault(Fault::aggregate([left, right]))
            },
            (State::Failure(left), State::Success(())) => Outcome::from_fault(left),
            (State::Success(_), State::Failure(right)) => Outcome::from_fault(right),
            (State::Success(left), State::Success(())) => Outcome::from_value(left),
        }
    }
}

impl Outcome {
    /// Merges a no-value outcome with a value-carrying one, adopting the
    /// carried value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let carried = Outcome::begin().combine_value(Outcome::ok(3));
    /// assert_eq!(*carried.value(), 3);
    /// ```
    #[inline]
    pub fn combine_value<T>(self, other: Outcome<T>) -> Outcome<T> {
        match (self.state, other.state) {
            (State::Failure(left), State::Failure(right)) => {
                Outcome::from_fault(Fault::aggregate([left, right]))
            },
            (State::Failure(left), State::Success(_)) => Outcome::from_fault(left),
            (State::Success(()), State::Failure(right)) => Outcome::from_fault(right),
            (State::Success(()), State::Success(right)) => Outcome::from_value(right),
        }
    }
}

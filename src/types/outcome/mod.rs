//! The outcome pair: success-or-failure values for railway pipelines.
//!
//! [`Outcome<T>`] carries either a success value of type `T` or a [`Fault`].
//! The default type parameter makes `Outcome` (with no arguments) the
//! no-value variant, so one generic type serves both arities:
//!
//! ```
//! use outcome_rail::{Fault, Outcome};
//!
//! let checked: Outcome = Outcome::begin();
//! assert!(checked.is_success());
//!
//! let carried: Outcome<u32> = Outcome::ok(42);
//! assert_eq!(*carried.value(), 42);
//!
//! let failed: Outcome<u32> = Outcome::fail(Fault::msg("boom"));
//! assert!(failed.is_failure());
//! ```
//!
//! Outcomes are plain values: immutable once constructed, freely movable
//! between threads when `T` is, and dropped like any other value. All
//! pipeline behavior lives in the combinator methods defined in the sibling
//! modules.

use core::any::Any;
use core::fmt;

use crate::traits::IntoFault;
use crate::types::fault::{AggregateFault, Fault};

mod branch;
mod combine;
mod fold;
mod recover;
mod then;

#[derive(Clone)]
pub(crate) enum State<T> {
    Success(T),
    Failure(Fault),
}

/// A success-or-failure value.
///
/// Exactly one of the two sides is ever populated. `Outcome` (no type
/// argument) is the no-value variant; `Outcome<T>` carries a `T` on success.
/// Both sides share one failure representation, so a fault crosses value
/// types untouched as a pipeline transforms its payload.
///
/// # Reading an outcome
///
/// Check [`is_success`](Self::is_success) / [`is_failure`](Self::is_failure)
/// before using [`value`](Self::value) or [`fault`](Self::fault); reading
/// the wrong side is a programming error and panics with the stored payload
/// rather than producing an unrelated default. The non-panicking accessors
/// [`as_value`](Self::as_value) and [`as_fault`](Self::as_fault) are the
/// forgiving alternatives.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let outcome = Outcome::begin_with(|| 5)
///     .then(|x| Outcome::ok(x * 2))
///     .map(|x| x.to_string());
///
/// assert_eq!(*outcome.value(), "10");
/// ```
#[must_use]
#[derive(Clone)]
pub struct Outcome<T = ()> {
    pub(crate) state: State<T>,
}

impl Outcome {
    /// The canonical no-value success.
    ///
    /// Shared freely; a unit success carries no payload, so every chain may
    /// start from this one constant.
    pub const SUCCESS: Outcome = Outcome { state: State::Success(()) };

    /// Starts a chain with a no-value success.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::begin().map(|()| 7);
    /// assert_eq!(*outcome.value(), 7);
    /// ```
    #[inline]
    pub const fn begin() -> Outcome {
        Self::SUCCESS
    }

    /// Converts a no-value success into a success carrying `T`'s default
    /// value; a failure keeps its fault.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::begin().with_default::<u32>();
    /// assert_eq!(*outcome.value(), 0);
    /// ```
    #[inline]
    pub fn with_default<T: Default>(self) -> Outcome<T> {
        match self.state {
            State::Success(()) => Outcome::from_value(T::default()),
            State::Failure(fault) => Outcome { state: State::Failure(fault) },
        }
    }
}

impl<T> Outcome<T> {
    /// Creates a successful outcome carrying `value`.
    ///
    /// # Panics
    ///
    /// Panics when `value` is itself a failure payload ([`Fault`] or
    /// [`AggregateFault`]). A fault belongs on the failure side; wrapping
    /// one as a success value would hide it from every combinator.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::ok("ready");
    /// assert!(outcome.is_success());
    /// ```
    #[inline]
    pub fn ok(value: T) -> Self
    where
        T: Any,
    {
        assert!(
            !is_fault_like(&value),
            "a fault cannot be carried as a success value"
        );
        Self::from_value(value)
    }

    /// Creates a failed outcome from anything convertible into a [`Fault`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Fault, Outcome};
    ///
    /// let outcome: Outcome<u32> = Outcome::fail(Fault::msg("boom"));
    /// assert_eq!(outcome.fault().to_string(), "boom");
    /// ```
    #[inline]
    pub fn fail<E: IntoFault>(error: E) -> Self {
        Self { state: State::Failure(error.into_fault()) }
    }

    /// Starts a chain by invoking a producer and lifting its value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::begin_with(|| 5).map(|x| x * 2);
    /// assert_eq!(*outcome.value(), 10);
    /// ```
    #[inline]
    pub fn begin_with<F>(producer: F) -> Self
    where
        F: FnOnce() -> T,
        T: Any,
    {
        Self::ok(producer())
    }

    pub(crate) fn from_value(value: T) -> Self {
        Self { state: State::Success(value) }
    }

    pub(crate) fn from_fault(fault: Fault) -> Self {
        Self { state: State::Failure(fault) }
    }

    /// Returns `true` when this outcome carries a value.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self.state, State::Success(_))
    }

    /// Returns `true` when this outcome carries a fault.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrows the success value.
    ///
    /// # Panics
    ///
    /// Panics on a failed outcome, surfacing the stored fault in the panic
    /// message. A fault that was captured from an earlier panic is shown
    /// wrapped in an aggregate, so the original capture is not mistaken for
    /// this access site.
    #[must_use]
    #[inline]
    pub fn value(&self) -> &T {
        match &self.state {
            State::Success(value) => value,
            State::Failure(fault) => value_read_on_failure(fault),
        }
    }

    /// Borrows the fault.
    ///
    /// # Panics
    ///
    /// Panics on a successful outcome.
    #[must_use]
    #[inline]
    pub fn fault(&self) -> &Fault {
        match &self.state {
            State::Success(_) => panic!("fault read on a successful outcome"),
            State::Failure(fault) => fault,
        }
    }

    /// Borrows the success value, if there is one.
    #[must_use]
    #[inline]
    pub fn as_value(&self) -> Option<&T> {
        match &self.state {
            State::Success(value) => Some(value),
            State::Failure(_) => None,
        }
    }

    /// Borrows the fault, if there is one.
    #[must_use]
    #[inline]
    pub fn as_fault(&self) -> Option<&Fault> {
        match &self.state {
            State::Success(_) => None,
            State::Failure(fault) => Some(fault),
        }
    }

    /// Consumes the outcome, returning the success value.
    ///
    /// # Panics
    ///
    /// Panics on a failed outcome, like [`value`](Self::value).
    #[must_use]
    #[inline]
    pub fn into_value(self) -> T {
        match self.state {
            State::Success(value) => value,
            State::Failure(fault) => value_read_on_failure(&fault),
        }
    }

    /// Consumes the outcome, returning the fault.
    ///
    /// # Panics
    ///
    /// Panics on a successful outcome.
    #[must_use]
    #[inline]
    pub fn into_fault(self) -> Fault {
        match self.state {
            State::Success(_) => panic!("fault read on a successful outcome"),
            State::Failure(fault) => fault,
        }
    }

    /// Converts into a plain `Result`, the boundary type the rest of the
    /// Rust ecosystem speaks.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let result = Outcome::ok(3).into_result();
    /// assert_eq!(result.unwrap(), 3);
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, Fault> {
        match self.state {
            State::Success(value) => Ok(value),
            State::Failure(fault) => Err(fault),
        }
    }

    /// Drops the carried value, keeping only the success/failure state.
    ///
    /// A failure keeps its fault untouched; a success becomes the no-value
    /// success.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let unit = Outcome::ok(9).discard();
    /// assert!(unit.is_success());
    /// ```
    #[inline]
    pub fn discard(self) -> Outcome {
        match self.state {
            State::Success(_) => Outcome::SUCCESS,
            State::Failure(fault) => Outcome::from_fault(fault),
        }
    }
}

impl<T: Default> Default for Outcome<T> {
    /// The zero-value success: a success carrying `T::default()`.
    #[inline]
    fn default() -> Self {
        Self::from_value(T::default())
    }
}

impl<T> From<Fault> for Outcome<T> {
    #[inline]
    fn from(fault: Fault) -> Self {
        Self::from_fault(fault)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    T: Any,
    E: IntoFault,
{
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(error) => Self::fail(error),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Success(value) => f.debug_tuple("Outcome::Success").field(value).finish(),
            State::Failure(fault) => f.debug_tuple("Outcome::Failure").field(fault).finish(),
        }
    }
}

fn is_fault_like<T: Any>(value: &T) -> bool {
    let value = value as &dyn Any;
    value.is::<Fault>() || value.is::<AggregateFault>()
}

fn value_read_on_failure(fault: &Fault) -> ! {
    if fault.captured() {
        panic!(
            "value read on a failed outcome: {}",
            AggregateFault::single(fault.clone())
        );
    }
    panic!("value read on a failed outcome: {}", fault);
}

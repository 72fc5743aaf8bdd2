//! Fault payload types carried by failed outcomes.
//!
//! A [`Fault`] wraps any `Error` value behind a cheaply cloneable handle and
//! records whether the payload was produced by intercepting a panic. An
//! [`AggregateFault`] preserves several faults at once, in the order they
//! were produced, when independent failures are merged.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Fault;
//!
//! let fault = Fault::msg("database connection failed");
//! assert_eq!(fault.to_string(), "database connection failed");
//! assert!(!fault.captured());
//! ```

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use core::error::Error;
use core::fmt;

use crate::types::FaultVec;

/// A shareable failure payload.
///
/// `Fault` stores the original error behind an [`Arc`], so cloning a fault
/// (and therefore cloning or splitting a failed outcome) never copies the
/// underlying error value. The `captured` marker records that the payload
/// was recovered from a panic rather than constructed deliberately; value
/// accessors use it to keep the original capture site visible when the
/// fault surfaces a second time.
///
/// `Fault` intentionally does **not** implement [`Error`] itself. Keeping it
/// outside the trait makes the blanket `From<E: Error>` conversion coherent,
/// so any concrete error type converts into a fault with `?`-free plumbing:
///
/// ```
/// use outcome_rail::Fault;
///
/// let io_like = core::fmt::Error;
/// let fault = Fault::new(io_like);
/// assert!(fault.is::<core::fmt::Error>());
/// ```
#[must_use]
#[derive(Clone)]
pub struct Fault {
    pub(crate) inner: Arc<dyn Error + Send + Sync + 'static>,
    pub(crate) captured: bool,
}

impl Fault {
    /// Wraps a concrete error value in a fault.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Fault;
    ///
    /// let fault = Fault::new(core::fmt::Error);
    /// assert!(fault.downcast_ref::<core::fmt::Error>().is_some());
    /// ```
    #[inline]
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self { inner: Arc::new(error), captured: false }
    }

    /// Creates a fault from a plain message.
    ///
    /// Use this for expected failures that have no richer error type, the
    /// same way `anyhow::Error::msg` is used at the edges of a codebase.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Fault;
    ///
    /// let fault = Fault::msg("quota exceeded");
    /// assert_eq!(fault.to_string(), "quota exceeded");
    /// ```
    #[inline]
    pub fn msg<M: fmt::Display>(message: M) -> Self {
        Self::from_text(message.to_string(), false)
    }

    pub(crate) fn from_text(text: String, captured: bool) -> Self {
        Self { inner: Arc::new(MessageFault { text }), captured }
    }

    /// Converts a panic payload into a captured fault.
    ///
    /// String payloads (the overwhelmingly common case from `panic!` and
    /// `assert!`) keep their message; anything else is reduced to a fixed
    /// description. The resulting fault is marked [`captured`](Self::captured).
    #[cfg(feature = "std")]
    pub fn from_panic(payload: alloc::boxed::Box<dyn core::any::Any + Send>) -> Self {
        let text = if let Some(s) = payload.downcast_ref::<&'static str>() {
            String::from(*s)
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            String::from("panic with a non-string payload")
        };
        Self::from_text(text, true)
    }

    /// Merges several faults into one, preserving order.
    ///
    /// Faults that are themselves aggregates are flattened, so repeated
    /// merging never nests. A single remaining fault is returned as-is
    /// rather than wrapped.
    ///
    /// # Panics
    ///
    /// Panics when called with an empty iterator; an aggregate of nothing
    /// is not a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{AggregateFault, Fault};
    ///
    /// let merged = Fault::aggregate([Fault::msg("first"), Fault::msg("second")]);
    /// let aggregate = merged.downcast_ref::<AggregateFault>().unwrap();
    /// assert_eq!(aggregate.faults().len(), 2);
    /// assert_eq!(aggregate.faults()[0].to_string(), "first");
    /// ```
    pub fn aggregate<I>(faults: I) -> Self
    where
        I: IntoIterator<Item = Fault>,
    {
        let mut flat = FaultVec::new();
        for fault in faults {
            match fault.downcast_ref::<AggregateFault>() {
                Some(nested) => flat.extend(nested.faults().iter().cloned()),
                None => flat.push(fault),
            }
        }
        match flat.len() {
            0 => panic!("Fault::aggregate requires at least one fault"),
            1 => flat
                .into_iter()
                .next()
                .expect("length was checked to be one"),
            _ => {
                let captured = flat.iter().any(Fault::captured);
                Self {
                    inner: Arc::new(AggregateFault { faults: flat }),
                    captured,
                }
            },
        }
    }

    /// Returns `true` when this fault was produced by intercepting a panic.
    #[must_use]
    #[inline]
    pub fn captured(&self) -> bool {
        self.captured
    }

    /// Returns `true` when the underlying error is of type `E`.
    #[must_use]
    #[inline]
    pub fn is<E>(&self) -> bool
    where
        E: Error + 'static,
    {
        self.inner.is::<E>()
    }

    /// Borrows the underlying error as `E`, if it is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Fault;
    ///
    /// let fault = Fault::new(core::fmt::Error);
    /// assert!(fault.downcast_ref::<core::fmt::Error>().is_some());
    /// assert!(fault.downcast_ref::<outcome_rail::AggregateFault>().is_none());
    /// ```
    #[must_use]
    #[inline]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.inner.downcast_ref::<E>()
    }

    /// Returns `true` when both faults share the same underlying payload.
    ///
    /// Faults have identity rather than structural equality; two faults
    /// built from equal messages are still distinct payloads.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Fault;
    ///
    /// let fault = Fault::msg("boom");
    /// let alias = fault.clone();
    /// assert!(fault.same_as(&alias));
    /// assert!(!fault.same_as(&Fault::msg("boom")));
    /// ```
    #[must_use]
    #[inline]
    pub fn same_as(&self, other: &Fault) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Renders the underlying error message.
    #[must_use]
    #[inline]
    pub fn message(&self) -> String {
        self.inner.to_string()
    }

    /// Borrows the underlying error object.
    #[must_use]
    #[inline]
    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.inner
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fault")
            .field("error", &self.inner)
            .field("captured", &self.captured)
            .finish()
    }
}

impl<E> From<E> for Fault
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

/// Composite fault preserving several underlying faults in order.
///
/// Produced when two independently failing outcomes are merged; the first
/// operand's fault always precedes the second's. Implements [`Error`], so an
/// aggregate rides inside a [`Fault`] like any other payload and can be
/// recovered with [`Fault::downcast_ref`].
#[derive(Debug, Clone)]
pub struct AggregateFault {
    pub(crate) faults: FaultVec,
}

impl AggregateFault {
    /// The aggregated faults, oldest first.
    #[must_use]
    #[inline]
    pub fn faults(&self) -> &[Fault] {
        &self.faults
    }

    /// Number of aggregated faults.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.faults.len()
    }

    /// `true` when the aggregate holds no faults. Never the case for
    /// aggregates built through [`Fault::aggregate`].
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faults.is_empty()
    }

    pub(crate) fn single(fault: Fault) -> Self {
        Self { faults: smallvec::smallvec![fault] }
    }
}

impl fmt::Display for AggregateFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} aggregated failures:", self.faults.len())?;
        for (index, fault) in self.faults.iter().enumerate() {
            if index > 0 {
                write!(f, ";")?;
            }
            write!(f, " {}", fault)?;
        }
        Ok(())
    }
}

impl Error for AggregateFault {}

struct MessageFault {
    text: String,
}

impl fmt::Display for MessageFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Debug for MessageFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MessageFault({:?})", self.text)
    }
}

impl Error for MessageFault {}

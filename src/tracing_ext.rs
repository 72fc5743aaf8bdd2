//! Tracing integration for outcome-rail.
//!
//! This module provides observation hooks that report outcome state through
//! the `tracing` ecosystem, so pipelines get structured logging without
//! hand-written `on_failure` closures at every step.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.3", features = ["tracing"] }
//! ```

use crate::types::outcome::Outcome;

/// Extension trait logging outcome state at pipeline checkpoints.
///
/// # Example
///
/// ```rust,ignore
/// use outcome_rail::tracing_ext::OutcomeTraceExt;
///
/// fn load_config(path: &str) -> Outcome<Config> {
///     read_config(path)
///         .traced("load_config")
///         .recover(|_| Outcome::ok(Config::default()))
/// }
/// ```
pub trait OutcomeTraceExt<T> {
    /// Logs this outcome under `operation` and returns it unchanged.
    ///
    /// Failures are reported at error level with the fault rendering;
    /// successes at trace level. Purely observational, like
    /// [`on_failure`](crate::Outcome::on_failure).
    #[must_use]
    fn traced(self, operation: &str) -> Self;
}

impl<T> OutcomeTraceExt<T> for Outcome<T> {
    fn traced(self, operation: &str) -> Self {
        match self.as_fault() {
            Some(fault) => {
                tracing::error!(operation, fault = %fault, "pipeline step failed");
            },
            None => {
                tracing::trace!(operation, "pipeline step succeeded");
            },
        }
        self
    }
}

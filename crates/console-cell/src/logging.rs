//! Logging and tracing support.
//!
//! Re-exports the `tracing` macros this crate uses when the `tracing` feature
//! is enabled. Without the feature, no-op macros with the same names are
//! provided so call sites compile unchanged.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, trace, trace_span};

#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// No-op debug macro when tracing is disabled.
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op trace macro when tracing is disabled.
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// No-op trace_span macro when tracing is disabled.
    macro_rules! trace_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }

    pub(crate) use debug;
    pub(crate) use trace;
    pub(crate) use trace_span;
}

#[cfg(not(feature = "tracing"))]
pub(crate) use noop_macros::{debug, trace, trace_span};

/// A no-op span for when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Enter the no-op span (does nothing).
    pub fn enter(&self) -> NoopGuard {
        NoopGuard
    }
}

/// A no-op span guard.
#[cfg(not(feature = "tracing"))]
pub struct NoopGuard;

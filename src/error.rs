//! Error types for the freqcache library.
//!
//! Ordinary misses are never errors: lookups on absent keys and queries on an
//! empty cache return `None`. The only error type describes broken internal
//! invariants.
//!
//! ## Key Components
//!
//! - [`InvariantError`]: Returned by `check_invariants` when the index and the
//!   frequency ring disagree, or when the ring itself is malformed.
//!
//! ## Example Usage
//!
//! ```
//! use freqcache::policy::lfu::LfuCache;
//!
//! let mut cache = LfuCache::new(2);
//! cache.insert("a", 1);
//! cache.access(&"a");
//!
//! assert!(cache.check_invariants().is_ok());
//! ```

use std::fmt;

/// Error returned when internal cache invariants are violated.
///
/// Produced by [`LfuCache::check_invariants`](crate::policy::lfu::LfuCache::check_invariants)
/// and [`FrequencyRing::check_invariants`](crate::ds::FrequencyRing::check_invariants).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

/// Aborts the current operation on a broken invariant.
///
/// Reached only when the size accounting and the structure have diverged,
/// which no sequence of public calls can cause.
#[cold]
#[track_caller]
pub(crate) fn invariant_violated(err: InvariantError) -> ! {
    tracing::error!(error = %err, "lfu invariant violated");
    panic!("lfu invariant violated: {err}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invariant_display_shows_message() {
        let err = InvariantError::new("ring length mismatch");
        assert_eq!(err.to_string(), "ring length mismatch");
    }

    #[test]
    fn invariant_debug_includes_message() {
        let err = InvariantError::new("dangling bucket");
        let dbg = format!("{:?}", err);
        assert!(dbg.contains("dangling bucket"));
    }

    #[test]
    fn invariant_message_accessor() {
        let err = InvariantError::new("test");
        assert_eq!(err.message(), "test");
    }

    #[test]
    fn invariant_clone_and_eq() {
        let a = InvariantError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn invariant_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<InvariantError>();
    }

    #[test]
    #[should_panic(expected = "lfu invariant violated: empty ring at capacity")]
    fn invariant_violated_panics_with_message() {
        invariant_violated(InvariantError::new("empty ring at capacity"));
    }
}

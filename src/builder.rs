//! Capacity configuration and the cache builder.
//!
//! A cache is either unbounded (never evicts on insert) or bounded by a
//! positive entry count. `0` and `None` both mean unbounded, so callers that
//! already carry a plain `usize` limit can pass it straight through.
//!
//! ## Example
//!
//! ```rust
//! use freqcache::builder::{Capacity, LfuCacheBuilder};
//!
//! let mut cache = LfuCacheBuilder::new()
//!     .capacity(100)
//!     .prealloc(16)
//!     .build::<u64, String>();
//!
//! cache.insert(1, "hello".to_string());
//! assert_eq!(cache.access(&1), Some(&"hello".to_string()));
//! assert_eq!(cache.capacity(), Capacity::from(100));
//!
//! assert_eq!(Capacity::from(0), Capacity::Unbounded);
//! assert_eq!(Capacity::from(None), Capacity::Unbounded);
//! ```

use std::fmt;
use std::hash::Hash;
use std::num::NonZeroUsize;
#[cfg(feature = "concurrency")]
use std::sync::Arc;

#[cfg(feature = "concurrency")]
use crate::policy::lfu::ConcurrentLfuCache;
use crate::policy::lfu::LfuCache;

/// Upper bound on storage reserved up front when the builder derives the
/// preallocation from a bounded capacity.
pub const MAX_AUTO_PREALLOC: usize = 4096;

/// Entry-count limit of a cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Capacity {
    /// No limit; inserts never evict.
    #[default]
    Unbounded,
    /// At most this many entries; inserting past it evicts one LFU entry.
    Bounded(NonZeroUsize),
}

impl Capacity {
    /// Maximum number of entries, or `None` when unbounded.
    pub const fn limit(self) -> Option<usize> {
        match self {
            Capacity::Unbounded => None,
            Capacity::Bounded(limit) => Some(limit.get()),
        }
    }

    pub const fn is_bounded(self) -> bool {
        matches!(self, Capacity::Bounded(_))
    }

    /// `true` when a store holding `len` entries must evict before adding one.
    #[inline]
    pub(crate) fn is_full(self, len: usize) -> bool {
        match self {
            Capacity::Unbounded => false,
            Capacity::Bounded(limit) => len >= limit.get(),
        }
    }
}

impl From<usize> for Capacity {
    fn from(limit: usize) -> Self {
        NonZeroUsize::new(limit).map_or(Capacity::Unbounded, Capacity::Bounded)
    }
}

impl From<Option<usize>> for Capacity {
    fn from(limit: Option<usize>) -> Self {
        limit.map_or(Capacity::Unbounded, Capacity::from)
    }
}

impl From<NonZeroUsize> for Capacity {
    fn from(limit: NonZeroUsize) -> Self {
        Capacity::Bounded(limit)
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capacity::Unbounded => f.write_str("unbounded"),
            Capacity::Bounded(limit) => write!(f, "{}", limit),
        }
    }
}

/// Builder for [`LfuCache`] and [`ConcurrentLfuCache`].
#[derive(Debug, Clone, Default)]
pub struct LfuCacheBuilder {
    capacity: Capacity,
    prealloc: Option<usize>,
}

impl LfuCacheBuilder {
    /// Starts from an unbounded configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capacity(mut self, capacity: impl Into<Capacity>) -> Self {
        self.capacity = capacity.into();
        self
    }

    /// Number of entries to reserve storage for up front.
    ///
    /// Defaults to the capacity (capped at [`MAX_AUTO_PREALLOC`]) for bounded
    /// caches and to nothing for unbounded ones.
    pub fn prealloc(mut self, entries: usize) -> Self {
        self.prealloc = Some(entries);
        self
    }

    fn effective_prealloc(&self) -> usize {
        self.prealloc.unwrap_or_else(|| {
            self.capacity
                .limit()
                .map_or(0, |limit| limit.min(MAX_AUTO_PREALLOC))
        })
    }

    pub fn build<K, V>(self) -> LfuCache<K, V>
    where
        K: Eq + Hash + Clone,
    {
        let prealloc = self.effective_prealloc();
        tracing::debug!(capacity = %self.capacity, prealloc, "building lfu cache");
        LfuCache::with_prealloc(self.capacity, prealloc)
    }

    #[cfg(feature = "concurrency")]
    pub fn build_concurrent<K, V>(self) -> ConcurrentLfuCache<K, V>
    where
        K: Eq + Hash + Clone,
    {
        ConcurrentLfuCache::from_cache(self.build::<K, Arc<V>>())
    }
}

//! # LFU (Least Frequently Used) Cache
//!
//! O(1) insert, access-with-promotion, and eviction-candidate lookup. The
//! cache evicts the least frequently accessed entry when a bounded store is
//! full; unbounded stores never evict on insert.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────────┐
//!   │                          LfuCache<K, V>                                  │
//!   │                                                                          │
//!   │   ┌────────────────────────────────────────────────────────────────────┐ │
//!   │   │  index: FxHashMap<K, Entry<V>>                                     │ │
//!   │   │                                                                    │ │
//!   │   │  ┌─────────┬─────────────┬──────────────┐                          │ │
//!   │   │  │   Key   │    value    │    member    │──────┐                   │ │
//!   │   │  ├─────────┼─────────────┼──────────────┤      │                   │ │
//!   │   │  │ page_1  │    ...      │   m0         │      │                   │ │
//!   │   │  │ page_2  │    ...      │   m1         │      │                   │ │
//!   │   │  └─────────┴─────────────┴──────────────┘      │                   │ │
//!   │   └────────────────────────────────────────────────┼───────────────────┘ │
//!   │                                                    ▼                     │
//!   │   ┌────────────────────────────────────────────────────────────────────┐ │
//!   │   │  ring: FrequencyRing<K>                                            │ │
//!   │   │                                                                    │ │
//!   │   │  sentinel ──► [freq=1: m1] ──► [freq=4: m0] ──► sentinel           │ │
//!   │   │               eviction candidates                                  │ │
//!   │   └────────────────────────────────────────────────────────────────────┘ │
//!   │                                                                          │
//!   │   capacity: Capacity  (Unbounded | Bounded(n))                           │
//!   └──────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Insert Flow
//!
//! ```text
//!   insert(key, value)
//!        │
//!        ▼
//!   key already indexed? ── yes ──► no-op, return false (value and frequency kept)
//!        │ no
//!        ▼
//!   bounded and full?    ── yes ──► evict tail of the lowest bucket
//!        │
//!        ▼
//!   add key to the freq=1 bucket right after the sentinel, return true
//! ```
//!
//! ## Core Operations
//!
//! | Method                 | Complexity | Description                              |
//! |------------------------|------------|------------------------------------------|
//! | `new(capacity)`        | O(1)       | `0`/`None` means unbounded               |
//! | `insert(k, v)`         | O(1)       | Insert-once; may evict one LFU entry     |
//! | `access(&k)`           | O(1)       | Returns value, promotes frequency by one |
//! | `eviction_candidate()` | O(1)       | Peek the next victim                     |
//! | `peek(&k)`             | O(1)       | Value lookup without promotion           |
//! | `frequency(&k)`        | O(1)       | Current access count                     |
//! | `remove(&k)`           | O(1)       | Drop an entry                            |
//! | `pop_lfu()`            | O(1)       | Remove and return the next victim        |
//! | `clear()`              | O(n)       | Drop everything                          |
//!
//! ## Tie-Breaking
//!
//! Among keys sharing the lowest frequency, the one that reached that
//! frequency first is the candidate.
//!
//! ## Thread Safety
//!
//! - [`LfuCache`]: not thread-safe; mutating calls take `&mut self`.
//! - [`ConcurrentLfuCache`]: one `parking_lot::RwLock` around the whole cache.
//!   `access` promotes, so it takes the write lock like `insert`.
//!
//! ## Example Usage
//!
//! ```
//! use freqcache::policy::lfu::LfuCache;
//!
//! let mut cache = LfuCache::new(2);
//! cache.insert(1, "one");
//! cache.insert(2, "two");
//!
//! cache.access(&2);
//! cache.access(&2);
//! assert_eq!(cache.eviction_candidate(), Some(&1));
//!
//! cache.insert(3, "three"); // evicts 1
//! assert_eq!(cache.access(&1), None);
//! assert_eq!(cache.eviction_candidate(), Some(&3));
//! ```

use std::fmt;
use std::hash::Hash;
#[cfg(feature = "concurrency")]
use std::sync::Arc;

#[cfg(feature = "concurrency")]
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::builder::Capacity;
use crate::ds::frequency_ring::{FrequencyRing, MemberId};
use crate::error::{InvariantError, invariant_violated};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::LfuMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::LfuMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    CoreMetricsRecorder, LfuMetricsReadRecorder, LfuMetricsRecorder, MetricsSnapshotProvider,
};
#[cfg(feature = "concurrency")]
use crate::traits::ConcurrentCache;
use crate::traits::{CoreCache, LfuCacheTrait, MutableCache};

#[derive(Debug)]
struct Entry<V> {
    value: V,
    member: MemberId,
}

/// Frequency-bucketed LFU cache.
pub struct LfuCache<K, V> {
    index: FxHashMap<K, Entry<V>>,
    ring: FrequencyRing<K>,
    capacity: Capacity,
    #[cfg(feature = "metrics")]
    metrics: LfuMetrics,
}

/// Ordered view of a cache's frequency levels: `(frequency, keys)` from the
/// lowest level up, keys newest-first within a level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LfuSnapshot<K> {
    pub capacity: Capacity,
    pub len: usize,
    pub levels: Vec<(u64, Vec<K>)>,
}

impl<K, V> LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache. `0`, `None` and [`Capacity::Unbounded`] disable eviction.
    ///
    /// # Example
    ///
    /// ```
    /// use freqcache::builder::Capacity;
    /// use freqcache::policy::lfu::LfuCache;
    ///
    /// let bounded: LfuCache<u64, String> = LfuCache::new(100);
    /// assert_eq!(bounded.capacity().limit(), Some(100));
    ///
    /// let unbounded: LfuCache<u64, String> = LfuCache::new(None);
    /// assert_eq!(unbounded.capacity(), Capacity::Unbounded);
    /// ```
    pub fn new(capacity: impl Into<Capacity>) -> Self {
        Self::with_prealloc(capacity, 0)
    }

    pub fn unbounded() -> Self {
        Self::new(Capacity::Unbounded)
    }

    /// Creates a cache with storage reserved for `prealloc` entries.
    pub fn with_prealloc(capacity: impl Into<Capacity>, prealloc: usize) -> Self {
        LfuCache {
            index: FxHashMap::with_capacity_and_hasher(prealloc, Default::default()),
            ring: FrequencyRing::with_capacity(prealloc),
            capacity: capacity.into(),
            #[cfg(feature = "metrics")]
            metrics: LfuMetrics::default(),
        }
    }

    /// Inserts `key` at frequency 1 unless it is already present.
    ///
    /// Returns `false` and changes nothing when the key exists; the stored
    /// value is not replaced. A full bounded cache evicts one
    /// least-frequently-used entry before adding the new one.
    ///
    /// # Example
    ///
    /// ```
    /// use freqcache::policy::lfu::LfuCache;
    ///
    /// let mut cache = LfuCache::unbounded();
    /// assert!(cache.insert(1, "v1"));
    /// assert!(!cache.insert(1, "v2"));
    /// assert_eq!(cache.access(&1), Some(&"v1"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if self.index.contains_key(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_duplicate();
            return false;
        }

        if self.capacity.is_full(self.index.len()) {
            self.evict();
        }

        let member = self.ring.insert(key.clone());
        self.index.insert(key, Entry { value, member });

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();
        true
    }

    /// Returns the value for `key` and counts one access.
    ///
    /// A miss returns `None` and leaves the cache untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use freqcache::policy::lfu::LfuCache;
    ///
    /// let mut cache = LfuCache::new(10);
    /// cache.insert("k", 7);
    ///
    /// assert_eq!(cache.access(&"k"), Some(&7));
    /// assert_eq!(cache.frequency(&"k"), Some(2));
    /// assert_eq!(cache.access(&"missing"), None);
    /// ```
    pub fn access(&mut self, key: &K) -> Option<&V> {
        let Some(entry) = self.index.get(key) else {
            #[cfg(feature = "metrics")]
            self.metrics.record_access_miss();
            return None;
        };

        if self.ring.promote(entry.member).is_none() {
            invariant_violated(InvariantError::new("indexed key has no ring member"));
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_access_hit();
        Some(&entry.value)
    }

    /// Key that the next eviction would remove. Does not mutate.
    pub fn eviction_candidate(&self) -> Option<&K> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_candidate_call();

        let (key, _) = self.ring.peek_min()?;

        #[cfg(feature = "metrics")]
        (&self.metrics).record_candidate_found();
        Some(key)
    }

    /// Eviction candidate with its value.
    pub fn peek_lfu(&self) -> Option<(&K, &V)> {
        let (key, _) = self.ring.peek_min()?;
        let entry = self.index.get(key)?;
        Some((key, &entry.value))
    }

    /// Removes and returns the eviction candidate.
    pub fn pop_lfu(&mut self) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lfu_call();

        let (key, value, _) = self.take_lfu()?;

        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lfu_found();
        Some((key, value))
    }

    /// Value lookup that does not count as an access.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|entry| &entry.value)
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_call();

        let entry = self.index.remove(key)?;
        if self.ring.remove(entry.member).is_none() {
            invariant_violated(InvariantError::new("removed key had no ring member"));
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_remove_found();
        Some(entry.value)
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Access count of `key`: 1 after insertion, plus one per `access`.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_frequency_call();

        let entry = self.index.get(key)?;
        let freq = self.ring.frequency(entry.member)?;

        #[cfg(feature = "metrics")]
        (&self.metrics).record_frequency_found();
        Some(freq)
    }

    /// Lowest frequency present, `None` when empty.
    pub fn min_frequency(&self) -> Option<u64> {
        self.ring.min_frequency()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Number of distinct frequency levels currently populated.
    pub fn bucket_count(&self) -> usize {
        self.ring.bucket_count()
    }

    /// `(frequency, entries at that frequency)` from the lowest level up.
    pub fn frequencies(&self) -> impl Iterator<Item = (u64, usize)> + '_ {
        self.ring
            .iter()
            .map(|bucket| (bucket.frequency(), bucket.len()))
    }

    /// Entries in arbitrary order. Does not count accesses.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.index.iter().map(|(key, entry)| (key, &entry.value))
    }

    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        tracing::debug!(dropped = self.index.len(), "clearing lfu cache");
        self.index.clear();
        self.ring.clear();
    }

    /// Cross-checks the index against the frequency ring.
    ///
    /// # Example
    ///
    /// ```
    /// use freqcache::policy::lfu::LfuCache;
    ///
    /// let mut cache = LfuCache::new(4);
    /// for key in 0..10 {
    ///     cache.insert(key, key * 2);
    ///     cache.access(&(key / 2));
    /// }
    /// assert!(cache.check_invariants().is_ok());
    /// ```
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.ring.check_invariants()?;

        if self.ring.len() != self.index.len() {
            return Err(InvariantError::new(format!(
                "index holds {} keys but ring tracks {}",
                self.index.len(),
                self.ring.len()
            )));
        }
        for (key, entry) in &self.index {
            if self.ring.key(entry.member) != Some(key) {
                return Err(InvariantError::new(
                    "index entry points at a member holding another key",
                ));
            }
        }
        if let Some(limit) = self.capacity.limit() {
            if self.index.len() > limit {
                return Err(InvariantError::new(format!(
                    "{} entries exceed capacity {}",
                    self.index.len(),
                    limit
                )));
            }
        }
        Ok(())
    }

    /// Ordered copy of the structure, for state-equality assertions.
    pub fn debug_snapshot(&self) -> LfuSnapshot<K> {
        LfuSnapshot {
            capacity: self.capacity,
            len: self.index.len(),
            levels: self
                .ring
                .iter()
                .map(|bucket| (bucket.frequency(), bucket.keys().cloned().collect()))
                .collect(),
        }
    }

    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> LfuMetricsSnapshot {
        LfuMetricsSnapshot {
            len: self.index.len(),
            bucket_count: self.ring.bucket_count(),
            capacity: self.capacity.limit().unwrap_or(0),
            ..self.metrics.to_snapshot()
        }
    }

    fn evict(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_evict_call();

        match self.take_lfu() {
            Some((_, _, freq)) => {
                #[cfg(feature = "metrics")]
                self.metrics.record_evicted_entry();
                tracing::trace!(freq, len = self.index.len(), "evicted lfu entry");
            },
            None => invariant_violated(InvariantError::new(format!(
                "eviction found an empty ring with {} indexed entries at capacity {}",
                self.index.len(),
                self.capacity
            ))),
        }
    }

    fn take_lfu(&mut self) -> Option<(K, V, u64)> {
        let (key, freq) = self.ring.pop_min()?;
        match self.index.remove(&key) {
            Some(entry) => Some((key, entry.value, freq)),
            None => invariant_violated(InvariantError::new("ring member missing from index")),
        }
    }
}

impl<K, V> Default for LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an unbounded cache.
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<K, V> fmt::Debug for LfuCache<K, V>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LfuCache")
            .field("len", &self.index.len())
            .field("capacity", &self.capacity)
            .field("ring", &self.ring)
            .finish_non_exhaustive()
    }
}

impl<K, V> CoreCache<K, V> for LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn insert(&mut self, key: K, value: V) -> bool {
        LfuCache::insert(self, key, value)
    }

    fn access(&mut self, key: &K) -> Option<&V> {
        LfuCache::access(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        LfuCache::contains(self, key)
    }

    fn len(&self) -> usize {
        LfuCache::len(self)
    }

    fn capacity(&self) -> Capacity {
        self.capacity
    }

    fn clear(&mut self) {
        LfuCache::clear(self)
    }
}

impl<K, V> MutableCache<K, V> for LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn remove(&mut self, key: &K) -> Option<V> {
        LfuCache::remove(self, key)
    }
}

impl<K, V> LfuCacheTrait<K, V> for LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn eviction_candidate(&self) -> Option<&K> {
        LfuCache::eviction_candidate(self)
    }

    fn peek_lfu(&self) -> Option<(&K, &V)> {
        LfuCache::peek_lfu(self)
    }

    fn pop_lfu(&mut self) -> Option<(K, V)> {
        LfuCache::pop_lfu(self)
    }

    fn frequency(&self, key: &K) -> Option<u64> {
        LfuCache::frequency(self, key)
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsSnapshotProvider<LfuMetricsSnapshot> for LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn snapshot(&self) -> LfuMetricsSnapshot {
        self.metrics_snapshot()
    }
}

/// Thread-safe LFU cache: one `RwLock` around a whole [`LfuCache`].
///
/// Values are stored as `Arc<V>` so reads hand out shared handles instead of
/// guards. Cloning the wrapper shares the same cache.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::thread;
/// use freqcache::policy::lfu::ConcurrentLfuCache;
///
/// let cache = ConcurrentLfuCache::new(64);
///
/// let handles: Vec<_> = (0..4u64)
///     .map(|t| {
///         let cache = cache.clone();
///         thread::spawn(move || {
///             for i in 0..8u64 {
///                 let key = t * 8 + i;
///                 cache.insert(key, format!("value-{key}"));
///                 cache.access(&key);
///             }
///         })
///     })
///     .collect();
///
/// for h in handles {
///     h.join().unwrap();
/// }
///
/// assert_eq!(cache.len(), 32);
/// assert_eq!(cache.frequency(&0), Some(2));
/// ```
#[cfg(feature = "concurrency")]
pub struct ConcurrentLfuCache<K, V> {
    inner: Arc<RwLock<LfuCache<K, Arc<V>>>>,
}

#[cfg(feature = "concurrency")]
impl<K, V> Clone for ConcurrentLfuCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> fmt::Debug for ConcurrentLfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.inner.read();
        f.debug_struct("ConcurrentLfuCache")
            .field("len", &cache.len())
            .field("capacity", &cache.capacity())
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> ConcurrentLfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new(capacity: impl Into<Capacity>) -> Self {
        Self::from_cache(LfuCache::new(capacity))
    }

    /// Wraps an existing cache.
    pub fn from_cache(cache: LfuCache<K, Arc<V>>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(cache)),
        }
    }

    /// Inserts `key` if absent; see [`LfuCache::insert`].
    pub fn insert(&self, key: K, value: V) -> bool {
        let value = Arc::new(value);
        self.inner.write().insert(key, value)
    }

    /// Inserts an already shared value.
    pub fn insert_arc(&self, key: K, value: Arc<V>) -> bool {
        self.inner.write().insert(key, value)
    }

    /// Looks up and promotes `key`. Takes the write lock.
    pub fn access(&self, key: &K) -> Option<Arc<V>> {
        self.inner.write().access(key).cloned()
    }

    pub fn eviction_candidate(&self) -> Option<K> {
        self.inner.read().eviction_candidate().cloned()
    }

    pub fn peek(&self, key: &K) -> Option<Arc<V>> {
        self.inner.read().peek(key).cloned()
    }

    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.inner.read().frequency(key)
    }

    pub fn remove(&self, key: &K) -> Option<Arc<V>> {
        self.inner.write().remove(key)
    }

    pub fn pop_lfu(&self) -> Option<(K, Arc<V>)> {
        self.inner.write().pop_lfu()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.read().contains(key)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn capacity(&self) -> Capacity {
        self.inner.read().capacity()
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }

    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.inner.read().check_invariants()
    }

    /// Runs `f` against the cache under the read lock.
    pub fn with_read<R>(&self, f: impl FnOnce(&LfuCache<K, Arc<V>>) -> R) -> R {
        f(&self.inner.read())
    }

    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> LfuMetricsSnapshot {
        self.inner.read().metrics_snapshot()
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> ConcurrentCache for ConcurrentLfuCache<K, V>
where
    K: Send + Sync,
    V: Send + Sync,
{
}

#[cfg(all(feature = "concurrency", feature = "metrics"))]
impl<K, V> MetricsSnapshotProvider<LfuMetricsSnapshot> for ConcurrentLfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn snapshot(&self) -> LfuMetricsSnapshot {
        self.metrics_snapshot()
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    #[derive(Debug, Clone)]
    enum Op {
        Insert(u8, u32),
        Access(u8),
        Remove(u8),
        PopLfu,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => (0u8..24, any::<u32>()).prop_map(|(k, v)| Op::Insert(k, v)),
            5 => (0u8..24).prop_map(Op::Access),
            1 => (0u8..24).prop_map(Op::Remove),
            1 => Just(Op::PopLfu),
        ]
    }

    proptest! {
        /// Property: the cache agrees with a naive model and always evicts a
        /// key of globally minimal frequency
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_matches_model(
            capacity in 0usize..8,
            ops in prop::collection::vec(op_strategy(), 0..150)
        ) {
            let mut cache: LfuCache<u8, u32> = LfuCache::new(capacity);
            let mut model: HashMap<u8, (u32, u64)> = HashMap::new();

            for op in ops {
                match op {
                    Op::Insert(key, value) => {
                        if model.contains_key(&key) {
                            prop_assert!(!cache.insert(key, value));
                        } else {
                            let min = model.values().map(|(_, f)| *f).min();
                            let full = capacity > 0 && model.len() >= capacity;
                            prop_assert!(cache.insert(key, value));
                            if full {
                                let evicted: Vec<u8> = model
                                    .keys()
                                    .copied()
                                    .filter(|k| !cache.contains(k))
                                    .collect();
                                prop_assert_eq!(evicted.len(), 1);
                                let (_, freq) = model.remove(&evicted[0]).unwrap();
                                prop_assert_eq!(Some(freq), min);
                            }
                            model.insert(key, (value, 1));
                        }
                    }
                    Op::Access(key) => {
                        let got = cache.access(&key).copied();
                        match model.get_mut(&key) {
                            Some((value, freq)) => {
                                *freq += 1;
                                prop_assert_eq!(got, Some(*value));
                            }
                            None => prop_assert_eq!(got, None),
                        }
                    }
                    Op::Remove(key) => {
                        let expected = model.remove(&key).map(|(v, _)| v);
                        prop_assert_eq!(cache.remove(&key), expected);
                    }
                    Op::PopLfu => {
                        let min = model.values().map(|(_, f)| *f).min();
                        match cache.pop_lfu() {
                            Some((key, value)) => {
                                let (expected, freq) = model.remove(&key).unwrap();
                                prop_assert_eq!(value, expected);
                                prop_assert_eq!(Some(freq), min);
                            }
                            None => prop_assert!(model.is_empty()),
                        }
                    }
                }

                prop_assert!(cache.check_invariants().is_ok());
                prop_assert_eq!(cache.len(), model.len());
                let level_total: usize = cache.frequencies().map(|(_, n)| n).sum();
                prop_assert_eq!(level_total, model.len());
                for (key, (_, freq)) in &model {
                    prop_assert_eq!(cache.frequency(key), Some(*freq));
                }
            }
        }

        /// Property: a miss never changes the structure
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_miss_is_idempotent(
            keys in prop::collection::vec(0u16..64, 0..40),
            touches in prop::collection::vec(0u16..64, 0..40),
            missing in 64u16..128
        ) {
            let mut cache = LfuCache::new(16);
            for key in keys {
                cache.insert(key, ());
            }
            for key in touches {
                cache.access(&key);
            }

            let before = cache.debug_snapshot();
            prop_assert_eq!(cache.access(&missing), None);
            prop_assert_eq!(cache.debug_snapshot(), before);
        }
    }
}

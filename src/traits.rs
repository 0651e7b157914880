//! # Cache Trait Hierarchy
//!
//! Generic seams over the LFU cache so callers can be written against the
//! operations they use rather than the concrete type.
//!
//! ```text
//!   ┌─────────────────────────────────────────┐
//!   │            CoreCache<K, V>              │
//!   │                                         │
//!   │  insert(&mut, K, V) → bool  (once)      │
//!   │  access(&mut, &K) → Option<&V>          │
//!   │  contains(&, &K) → bool                 │
//!   │  len / is_empty / capacity / clear      │
//!   └──────────────────┬──────────────────────┘
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │          MutableCache<K, V>             │
//!   │  remove(&K) → Option<V>                 │
//!   └──────────────────┬──────────────────────┘
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │          LfuCacheTrait<K, V>            │
//!   │  eviction_candidate() → Option<&K>      │
//!   │  peek_lfu() → Option<(&K, &V)>          │
//!   │  pop_lfu() → Option<(K, V)>             │
//!   │  frequency(&K) → Option<u64>            │
//!   └─────────────────────────────────────────┘
//! ```
//!
//! ## Insert-once
//!
//! `insert` never overwrites. Inserting a key that is already present leaves
//! its value and frequency untouched and returns `false`. Replacing a value
//! means `remove` followed by `insert`, which also restarts its frequency.
//!
//! ## Thread Safety
//!
//! `LfuCache` is not thread-safe. `ConcurrentLfuCache` wraps it behind one
//! lock and carries the [`ConcurrentCache`] marker.

use crate::builder::Capacity;

/// Core cache operations.
///
/// # Example
///
/// ```
/// use freqcache::policy::lfu::LfuCache;
/// use freqcache::traits::CoreCache;
///
/// fn warm_cache<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
///     for (key, value) in data {
///         cache.insert(*key, value.clone());
///     }
/// }
///
/// let mut cache = LfuCache::new(100);
/// warm_cache(&mut cache, &[(1, "one".to_string()), (2, "two".to_string())]);
/// assert_eq!(CoreCache::len(&cache), 2);
/// ```
pub trait CoreCache<K, V> {
    /// Inserts `key` if absent; returns `true` when it was added.
    ///
    /// A bounded cache at capacity evicts one least-frequently-used entry
    /// first. A present key is left untouched.
    fn insert(&mut self, key: K, value: V) -> bool;

    /// Looks up `key`, counting the lookup as one access.
    fn access(&mut self, key: &K) -> Option<&V>;

    /// Checks if a key exists without counting an access.
    fn contains(&self, key: &K) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn capacity(&self) -> Capacity;

    fn clear(&mut self);
}

/// Arbitrary key removal.
pub trait MutableCache<K, V>: CoreCache<K, V> {
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes each key in turn, returning the removed values in order.
    fn remove_batch(&mut self, keys: &[K]) -> Vec<Option<V>> {
        keys.iter().map(|key| self.remove(key)).collect()
    }
}

/// Frequency-ordered operations.
///
/// # Example
///
/// ```
/// use freqcache::policy::lfu::LfuCache;
/// use freqcache::traits::{CoreCache, LfuCacheTrait};
///
/// fn coldest<C: LfuCacheTrait<u64, &'static str>>(cache: &C) -> Option<u64> {
///     cache.eviction_candidate().copied()
/// }
///
/// let mut cache = LfuCache::new(10);
/// CoreCache::insert(&mut cache, 1, "first");
/// CoreCache::insert(&mut cache, 2, "second");
/// CoreCache::access(&mut cache, &1);
///
/// assert_eq!(coldest(&cache), Some(2));
/// ```
pub trait LfuCacheTrait<K, V>: MutableCache<K, V> {
    /// Key that would be evicted next, without removing it.
    fn eviction_candidate(&self) -> Option<&K>;

    /// Eviction candidate together with its value. Does not count an access.
    fn peek_lfu(&self) -> Option<(&K, &V)>;

    /// Removes and returns the eviction candidate.
    fn pop_lfu(&mut self) -> Option<(K, V)>;

    /// Current access frequency of `key` (1 right after insertion).
    fn frequency(&self, key: &K) -> Option<u64>;
}

/// Marker trait for caches that are safe to share across threads.
///
/// # Example
///
/// ```
/// use freqcache::traits::ConcurrentCache;
///
/// fn share<C: ConcurrentCache + Clone + 'static>(cache: &C) {
///     let cache = cache.clone();
///     std::thread::spawn(move || drop(cache)).join().unwrap();
/// }
/// # #[cfg(feature = "concurrency")]
/// # share(&freqcache::policy::lfu::ConcurrentLfuCache::<u64, String>::new(8));
/// ```
pub trait ConcurrentCache: Send + Sync {}

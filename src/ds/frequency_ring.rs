//! Sentinel-anchored frequency bucket ring for O(1) LFU bookkeeping.
//!
//! Tracks which frequency level every key sits on. Buckets form a circular
//! doubly linked ring ordered by strictly increasing frequency; the bucket
//! right after the sentinel always holds the least frequently used keys.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────────────┐
//! │                          FrequencyRing<K> Layout                          │
//! │                                                                           │
//! │   buckets: SlotArena<Bucket>            members: SlotArena<Member<K>>     │
//! │                                                                           │
//! │        ┌──────────────────────────────────────────────────────┐          │
//! │        ▼                                                      │          │
//! │   ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐        │
//! │   │ sentinel │ ──► │  freq=1  │ ──► │  freq=2  │ ──► │  freq=5  │ ──┐    │
//! │   │ slot 0   │ ◄── │ len=2    │ ◄── │ len=1    │ ◄── │ len=1    │   │    │
//! │   └──────────┘     └────┬─────┘     └────┬─────┘     └────┬─────┘   │    │
//! │        ▲                │                │                │         │    │
//! │        └────────────────┼────────────────┼────────────────┼─────────┘    │
//! │                         ▼                ▼                ▼              │
//! │                   head [c] ◄─► [a] tail  [b]              [d]            │
//! │                   (newest)    (oldest, evicted first)                    │
//! └───────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Promotion
//!
//! ```text
//!   promote(member at freq=f):
//!     1. next = bucket(f).next
//!     2. next is freq f+1?  yes → reuse it
//!                           no  → link a new bucket f+1 after bucket(f)
//!     3. move member to the head of the target bucket
//!     4. bucket(f) now empty → unlink and free it
//! ```
//!
//! ## Notes
//!
//! - The ring does not index keys. Callers keep their own `key → MemberId`
//!   map and must not insert the same key twice.
//! - The sentinel lives in arena slot 0 for the ring's whole lifetime,
//!   `clear` included.
//! - Within a bucket, members are ordered by arrival: the tail has been at
//!   that frequency longest and is the eviction candidate.
//! - A member at `u64::MAX` stays on its level; promotion only refreshes its
//!   position inside the bucket.
//!
//! ## Example Usage
//!
//! ```
//! use freqcache::ds::FrequencyRing;
//!
//! let mut ring = FrequencyRing::new();
//! let a = ring.insert("a");
//! let b = ring.insert("b");
//!
//! assert_eq!(ring.promote(a), Some(2));
//! assert_eq!(ring.peek_min(), Some((&"b", 1)));
//!
//! assert_eq!(ring.pop_min(), Some(("b", 1)));
//! assert_eq!(ring.min_frequency(), Some(2));
//! assert_eq!(ring.frequency(b), None);
//! ```

use std::fmt;

use crate::ds::slot_arena::{SlotArena, SlotId};
use crate::error::InvariantError;

/// Handle to a bucket (frequency level) in a [`FrequencyRing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BucketId(SlotId);

/// Handle to one key's membership in a [`FrequencyRing`].
///
/// Stays valid while the key is tracked, across promotions. Once the key is
/// removed or popped the handle is dead and every lookup through it yields
/// `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemberId(SlotId);

const SENTINEL: BucketId = BucketId(SlotId::new(0, 0));

#[derive(Debug)]
struct Bucket {
    freq: u64,
    prev: BucketId,
    next: BucketId,
    head: Option<MemberId>,
    tail: Option<MemberId>,
    len: usize,
}

impl Bucket {
    fn detached(freq: u64, prev: BucketId, next: BucketId) -> Self {
        Self {
            freq,
            prev,
            next,
            head: None,
            tail: None,
            len: 0,
        }
    }
}

#[derive(Debug)]
struct Member<K> {
    prev: Option<MemberId>,
    next: Option<MemberId>,
    bucket: BucketId,
    key: K,
}

/// Frequency bucket ring with FIFO order inside each bucket.
pub struct FrequencyRing<K> {
    buckets: SlotArena<Bucket>,
    members: SlotArena<Member<K>>,
}

impl<K> FrequencyRing<K> {
    /// Creates an empty ring holding only the sentinel.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty ring with room for `capacity` members.
    ///
    /// Bucket storage is sized for the common case where most keys share a
    /// handful of low frequencies.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut buckets = SlotArena::with_capacity(capacity.clamp(1, DEFAULT_BUCKET_PREALLOC));
        let sentinel = buckets.insert(Bucket::detached(0, SENTINEL, SENTINEL));
        debug_assert_eq!(BucketId(sentinel), SENTINEL);
        Self {
            buckets,
            members: SlotArena::with_capacity(capacity),
        }
    }

    /// Number of tracked keys.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Number of live frequency levels, sentinel excluded.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len() - 1
    }

    /// Starts tracking `key` at frequency 1.
    ///
    /// The caller guarantees `key` is not tracked already.
    pub fn insert(&mut self, key: K) -> MemberId {
        let first = self.bucket(SENTINEL).next;
        let target = if first != SENTINEL && self.bucket(first).freq == 1 {
            first
        } else {
            self.link_after(SENTINEL, 1)
        };

        let member = MemberId(self.members.insert(Member {
            prev: None,
            next: None,
            bucket: target,
            key,
        }));
        self.push_front(target, member);
        member
    }

    /// Moves `member` up one frequency level and returns its new frequency.
    ///
    /// Returns `None` if the handle is dead.
    pub fn promote(&mut self, member: MemberId) -> Option<u64> {
        let current = self.members.get(member.0)?.bucket;
        let (freq, next) = {
            let bucket = self.bucket(current);
            (bucket.freq, bucket.next)
        };

        if freq == u64::MAX {
            self.detach(member);
            self.push_front(current, member);
            return Some(freq);
        }

        let next_freq = freq + 1;
        let target = if next != SENTINEL && self.bucket(next).freq == next_freq {
            next
        } else {
            self.link_after(current, next_freq)
        };

        self.detach(member);
        self.push_front(target, member);
        self.release_if_empty(current);
        Some(next_freq)
    }

    /// Stops tracking `member` and hands its key back.
    pub fn remove(&mut self, member: MemberId) -> Option<K> {
        if !self.members.contains(member.0) {
            return None;
        }
        let bucket = self.detach(member);
        self.release_if_empty(bucket);
        self.members.remove(member.0).map(|m| m.key)
    }

    /// Removes the eviction candidate, returning its key and frequency.
    pub fn pop_min(&mut self) -> Option<(K, u64)> {
        let member = self.peek_min_member()?;
        let freq = self.frequency(member)?;
        self.remove(member).map(|key| (key, freq))
    }

    /// Peeks the eviction candidate `(key, freq)` without removing it.
    pub fn peek_min(&self) -> Option<(&K, u64)> {
        let member = self.peek_min_member()?;
        let entry = self.members.get(member.0)?;
        Some((&entry.key, self.bucket(entry.bucket).freq))
    }

    /// Handle of the eviction candidate: tail of the lowest bucket.
    pub fn peek_min_member(&self) -> Option<MemberId> {
        let first = self.bucket(SENTINEL).next;
        if first == SENTINEL {
            return None;
        }
        self.bucket(first).tail
    }

    /// Lowest frequency currently present.
    pub fn min_frequency(&self) -> Option<u64> {
        let first = self.bucket(SENTINEL).next;
        (first != SENTINEL).then(|| self.bucket(first).freq)
    }

    #[inline]
    pub fn frequency(&self, member: MemberId) -> Option<u64> {
        let entry = self.members.get(member.0)?;
        Some(self.bucket(entry.bucket).freq)
    }

    #[inline]
    pub fn key(&self, member: MemberId) -> Option<&K> {
        self.members.get(member.0).map(|m| &m.key)
    }

    /// Bucket currently holding `member`.
    pub fn bucket_of(&self, member: MemberId) -> Option<BucketId> {
        self.members.get(member.0).map(|m| m.bucket)
    }

    /// Walks the buckets from the lowest frequency to the highest.
    pub fn iter(&self) -> RingIter<'_, K> {
        RingIter {
            ring: self,
            current: self.bucket(SENTINEL).next,
        }
    }

    /// Drops every member and bucket. The sentinel stays in place.
    pub fn clear(&mut self) {
        let live: Vec<SlotId> = self
            .buckets
            .iter()
            .map(|(id, _)| id)
            .filter(|&id| BucketId(id) != SENTINEL)
            .collect();
        for id in live {
            self.buckets.remove(id);
        }
        let sentinel = self.bucket_mut(SENTINEL);
        sentinel.prev = SENTINEL;
        sentinel.next = SENTINEL;
        self.members.clear();
    }

    /// Verifies the structural invariants of the ring.
    ///
    /// Checks link symmetry, strictly increasing frequencies, that no bucket
    /// is empty, that every member points back at the bucket listing it, and
    /// that the ring reaches every allocated bucket and member.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let sentinel = self
            .buckets
            .get(SENTINEL.0)
            .ok_or_else(|| InvariantError::new("sentinel bucket missing"))?;
        if sentinel.freq != 0 || sentinel.len != 0 || sentinel.head.is_some() {
            return Err(InvariantError::new("sentinel bucket carries data"));
        }

        let mut prev = SENTINEL;
        let mut prev_freq = 0u64;
        let mut buckets_seen = 0usize;
        let mut members_seen = 0usize;
        let mut current = sentinel.next;

        while current != SENTINEL {
            buckets_seen += 1;
            if buckets_seen > self.bucket_count() {
                return Err(InvariantError::new("ring does not close at the sentinel"));
            }
            let bucket = self
                .buckets
                .get(current.0)
                .ok_or_else(|| InvariantError::new("ring links a freed bucket"))?;
            if bucket.prev != prev {
                return Err(InvariantError::new(format!(
                    "bucket freq={} has asymmetric prev link",
                    bucket.freq
                )));
            }
            if bucket.freq <= prev_freq {
                return Err(InvariantError::new(format!(
                    "bucket freq={} does not exceed predecessor freq={}",
                    bucket.freq, prev_freq
                )));
            }
            if bucket.len == 0 {
                return Err(InvariantError::new(format!(
                    "bucket freq={} is empty but still linked",
                    bucket.freq
                )));
            }

            let mut last = None;
            let mut count = 0usize;
            let mut cursor = bucket.head;
            while let Some(id) = cursor {
                let member = self
                    .members
                    .get(id.0)
                    .ok_or_else(|| InvariantError::new("bucket lists a freed member"))?;
                if member.bucket != current {
                    return Err(InvariantError::new(format!(
                        "member listed in freq={} points at another bucket",
                        bucket.freq
                    )));
                }
                if member.prev != last {
                    return Err(InvariantError::new("member has asymmetric prev link"));
                }
                count += 1;
                if count > bucket.len {
                    return Err(InvariantError::new(format!(
                        "bucket freq={} lists more members than its length",
                        bucket.freq
                    )));
                }
                last = Some(id);
                cursor = member.next;
            }
            if bucket.tail != last || count != bucket.len {
                return Err(InvariantError::new(format!(
                    "bucket freq={} length or tail mismatch",
                    bucket.freq
                )));
            }

            members_seen += count;
            prev = current;
            prev_freq = bucket.freq;
            current = bucket.next;
        }

        if sentinel.prev != prev {
            return Err(InvariantError::new("sentinel prev does not close the ring"));
        }
        if buckets_seen != self.bucket_count() {
            return Err(InvariantError::new(format!(
                "{} buckets allocated but {} reachable",
                self.bucket_count(),
                buckets_seen
            )));
        }
        if members_seen != self.members.len() {
            return Err(InvariantError::new(format!(
                "{} members allocated but {} reachable",
                self.members.len(),
                members_seen
            )));
        }
        Ok(())
    }

    fn bucket(&self, id: BucketId) -> &Bucket {
        self.buckets.get(id.0).expect("frequency ring: dangling bucket link")
    }

    fn bucket_mut(&mut self, id: BucketId) -> &mut Bucket {
        self.buckets
            .get_mut(id.0)
            .expect("frequency ring: dangling bucket link")
    }

    fn member_mut(&mut self, id: MemberId) -> &mut Member<K> {
        self.members
            .get_mut(id.0)
            .expect("frequency ring: dangling member link")
    }

    fn link_after(&mut self, prev: BucketId, freq: u64) -> BucketId {
        let next = self.bucket(prev).next;
        let id = BucketId(self.buckets.insert(Bucket::detached(freq, prev, next)));
        self.bucket_mut(prev).next = id;
        self.bucket_mut(next).prev = id;
        id
    }

    fn release_if_empty(&mut self, id: BucketId) {
        if id == SENTINEL || self.bucket(id).len > 0 {
            return;
        }
        let (prev, next) = {
            let bucket = self.bucket(id);
            (bucket.prev, bucket.next)
        };
        self.bucket_mut(prev).next = next;
        self.bucket_mut(next).prev = prev;
        self.buckets.remove(id.0);
    }

    fn push_front(&mut self, bucket: BucketId, id: MemberId) {
        let old_head = self.bucket(bucket).head;
        {
            let member = self.member_mut(id);
            member.prev = None;
            member.next = old_head;
            member.bucket = bucket;
        }
        match old_head {
            Some(head) => self.member_mut(head).prev = Some(id),
            None => self.bucket_mut(bucket).tail = Some(id),
        }
        let bucket = self.bucket_mut(bucket);
        bucket.head = Some(id);
        bucket.len += 1;
    }

    fn detach(&mut self, id: MemberId) -> BucketId {
        let (prev, next, bucket) = {
            let member = self.member_mut(id);
            let links = (member.prev, member.next, member.bucket);
            member.prev = None;
            member.next = None;
            links
        };
        match prev {
            Some(prev) => self.member_mut(prev).next = next,
            None => self.bucket_mut(bucket).head = next,
        }
        match next {
            Some(next) => self.member_mut(next).prev = prev,
            None => self.bucket_mut(bucket).tail = prev,
        }
        self.bucket_mut(bucket).len -= 1;
        bucket
    }
}

/// Bucket pre-allocation ceiling; most keys cluster at low frequencies.
pub const DEFAULT_BUCKET_PREALLOC: usize = 32;

impl<K> Default for FrequencyRing<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for FrequencyRing<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Read-only view of one frequency level.
pub struct BucketRef<'a, K> {
    ring: &'a FrequencyRing<K>,
    id: BucketId,
}

impl<'a, K> BucketRef<'a, K> {
    pub fn id(&self) -> BucketId {
        self.id
    }

    pub fn frequency(&self) -> u64 {
        self.ring.bucket(self.id).freq
    }

    pub fn len(&self) -> usize {
        self.ring.bucket(self.id).len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keys at this frequency, newest arrival first.
    pub fn keys(&self) -> impl Iterator<Item = &'a K> + use<'a, K> {
        let ring = self.ring;
        let mut cursor = ring.bucket(self.id).head;
        std::iter::from_fn(move || {
            let member = ring.members.get(cursor?.0)?;
            cursor = member.next;
            Some(&member.key)
        })
    }
}

impl<K: fmt::Debug> fmt::Debug for BucketRef<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bucket")
            .field("freq", &self.frequency())
            .field("keys", &self.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Iterator over the ring's buckets in increasing frequency order.
pub struct RingIter<'a, K> {
    ring: &'a FrequencyRing<K>,
    current: BucketId,
}

impl<'a, K> Iterator for RingIter<'a, K> {
    type Item = BucketRef<'a, K>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == SENTINEL {
            return None;
        }
        let id = self.current;
        self.current = self.ring.bucket(id).next;
        Some(BucketRef {
            ring: self.ring,
            id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels<K: Clone>(ring: &FrequencyRing<K>) -> Vec<(u64, Vec<K>)> {
        ring.iter()
            .map(|bucket| (bucket.frequency(), bucket.keys().cloned().collect()))
            .collect()
    }

    #[test]
    fn frequency_ring_starts_empty() {
        let ring: FrequencyRing<u32> = FrequencyRing::new();
        assert!(ring.is_empty());
        assert_eq!(ring.bucket_count(), 0);
        assert_eq!(ring.min_frequency(), None);
        assert_eq!(ring.peek_min(), None);
        assert_eq!(ring.iter().count(), 0);
        ring.check_invariants().unwrap();
    }

    #[test]
    fn frequency_ring_inserts_share_level_one() {
        let mut ring = FrequencyRing::new();
        ring.insert("a");
        ring.insert("b");
        ring.insert("c");

        assert_eq!(ring.bucket_count(), 1);
        assert_eq!(levels(&ring), vec![(1, vec!["c", "b", "a"])]);
        ring.check_invariants().unwrap();
    }

    #[test]
    fn frequency_ring_promote_creates_next_level() {
        let mut ring = FrequencyRing::new();
        let a = ring.insert("a");
        ring.insert("b");

        assert_eq!(ring.promote(a), Some(2));
        assert_eq!(levels(&ring), vec![(1, vec!["b"]), (2, vec!["a"])]);
        ring.check_invariants().unwrap();
    }

    #[test]
    fn frequency_ring_promote_reuses_existing_level() {
        let mut ring = FrequencyRing::new();
        let a = ring.insert("a");
        let b = ring.insert("b");
        ring.promote(a);
        let level_two = ring.bucket_of(a).unwrap();

        assert_eq!(ring.promote(b), Some(2));
        assert_eq!(ring.bucket_of(b), Some(level_two));
        assert_eq!(ring.bucket_count(), 1);
        assert_eq!(levels(&ring), vec![(2, vec!["b", "a"])]);
    }

    #[test]
    fn frequency_ring_promote_discards_emptied_level() {
        let mut ring = FrequencyRing::new();
        let a = ring.insert("a");
        let old = ring.bucket_of(a).unwrap();

        ring.promote(a);
        ring.promote(a);

        assert_eq!(ring.bucket_count(), 1);
        assert_eq!(ring.min_frequency(), Some(3));
        assert_ne!(ring.bucket_of(a), Some(old));
        ring.check_invariants().unwrap();
    }

    #[test]
    fn frequency_ring_promote_inserts_between_gapped_levels() {
        let mut ring = FrequencyRing::new();
        let a = ring.insert("a");
        let b = ring.insert("b");
        for _ in 0..3 {
            ring.promote(a);
        }
        // a=4, b=1 → promoting b must land at 2, before a's level
        assert_eq!(ring.promote(b), Some(2));
        assert_eq!(levels(&ring), vec![(2, vec!["b"]), (4, vec!["a"])]);
        ring.check_invariants().unwrap();
    }

    #[test]
    fn frequency_ring_insert_after_promotions_relinks_level_one() {
        let mut ring = FrequencyRing::new();
        let a = ring.insert("a");
        ring.promote(a);
        ring.insert("b");

        assert_eq!(ring.min_frequency(), Some(1));
        assert_eq!(levels(&ring), vec![(1, vec!["b"]), (2, vec!["a"])]);
        ring.check_invariants().unwrap();
    }

    #[test]
    fn frequency_ring_pop_min_is_fifo_within_level() {
        let mut ring = FrequencyRing::new();
        ring.insert("a");
        ring.insert("b");
        ring.insert("c");

        assert_eq!(ring.pop_min(), Some(("a", 1)));
        assert_eq!(ring.pop_min(), Some(("b", 1)));
        assert_eq!(ring.pop_min(), Some(("c", 1)));
        assert_eq!(ring.pop_min(), None);
        assert_eq!(ring.bucket_count(), 0);
        ring.check_invariants().unwrap();
    }

    #[test]
    fn frequency_ring_remove_kills_handle() {
        let mut ring = FrequencyRing::new();
        let a = ring.insert("a");
        let b = ring.insert("b");
        ring.promote(b);

        assert_eq!(ring.remove(a), Some("a"));
        assert_eq!(ring.remove(a), None);
        assert_eq!(ring.frequency(a), None);
        assert_eq!(ring.promote(a), None);
        assert_eq!(ring.key(a), None);
        assert_eq!(ring.min_frequency(), Some(2));
        ring.check_invariants().unwrap();
    }

    #[test]
    fn frequency_ring_saturated_member_stays_on_level() {
        let mut ring = FrequencyRing::new();
        let a = ring.insert("a");
        let level = ring.bucket_of(a).unwrap();
        ring.bucket_mut(level).freq = u64::MAX;

        assert_eq!(ring.promote(a), Some(u64::MAX));
        assert_eq!(ring.bucket_count(), 1);
        ring.check_invariants().unwrap();
    }

    #[test]
    fn frequency_ring_clear_keeps_sentinel_usable() {
        let mut ring = FrequencyRing::new();
        let a = ring.insert(1);
        ring.insert(2);
        ring.promote(a);
        ring.clear();

        assert!(ring.is_empty());
        assert_eq!(ring.bucket_count(), 0);
        assert_eq!(ring.frequency(a), None);
        ring.check_invariants().unwrap();

        ring.insert(3);
        assert_eq!(ring.peek_min(), Some((&3, 1)));
        ring.check_invariants().unwrap();
    }

    #[test]
    fn frequency_ring_detects_corrupted_order() {
        let mut ring = FrequencyRing::new();
        let a = ring.insert("a");
        ring.insert("b");
        ring.promote(a);
        let top = ring.bucket_of(a).unwrap();
        ring.bucket_mut(top).freq = 1;

        let err = ring.check_invariants().unwrap_err();
        assert!(err.message().contains("does not exceed"));
    }

    #[test]
    fn frequency_ring_detects_length_drift() {
        let mut ring = FrequencyRing::new();
        let a = ring.insert("a");
        let level = ring.bucket_of(a).unwrap();
        ring.bucket_mut(level).len = 2;

        assert!(ring.check_invariants().is_err());
    }

    #[test]
    fn frequency_ring_debug_lists_levels() {
        let mut ring = FrequencyRing::new();
        let a = ring.insert("a");
        ring.promote(a);
        let dbg = format!("{:?}", ring);
        assert!(dbg.contains("freq: 2"));
        assert!(dbg.contains("\"a\""));
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    proptest! {
        /// Property: invariants hold after any sequence of operations
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_invariants_always_hold(
            ops in prop::collection::vec((0u8..4, 0u16..32), 0..200)
        ) {
            let mut ring: FrequencyRing<u16> = FrequencyRing::new();
            let mut handles: HashMap<u16, MemberId> = HashMap::new();

            for (op, key) in ops {
                match op {
                    0 => {
                        if !handles.contains_key(&key) {
                            handles.insert(key, ring.insert(key));
                        }
                    }
                    1 => {
                        if let Some(&id) = handles.get(&key) {
                            ring.promote(id);
                        }
                    }
                    2 => {
                        if let Some(id) = handles.remove(&key) {
                            prop_assert_eq!(ring.remove(id), Some(key));
                        }
                    }
                    _ => {
                        if let Some((popped, _)) = ring.pop_min() {
                            handles.remove(&popped);
                        }
                    }
                }

                prop_assert!(ring.check_invariants().is_ok());
                prop_assert_eq!(ring.len(), handles.len());
                let total: usize = ring.iter().map(|bucket| bucket.len()).sum();
                prop_assert_eq!(total, ring.len());
            }
        }

        /// Property: n promotions after insertion land on frequency n + 1
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_promotions_count_exactly(touches in 0u64..40, others in 0usize..8) {
            let mut ring = FrequencyRing::new();
            for other in 0..others {
                ring.insert(other + 1);
            }
            let id = ring.insert(0);
            for _ in 0..touches {
                ring.promote(id);
            }
            prop_assert_eq!(ring.frequency(id), Some(touches + 1));
        }

        /// Property: pop_min always returns the globally lowest frequency
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_pop_min_is_global_minimum(
            touches in prop::collection::vec(0u8..6, 1..24)
        ) {
            let mut ring = FrequencyRing::new();
            let mut expected: HashMap<usize, u64> = HashMap::new();
            for (key, count) in touches.iter().enumerate() {
                let id = ring.insert(key);
                for _ in 0..*count {
                    ring.promote(id);
                }
                expected.insert(key, u64::from(*count) + 1);
            }

            while let Some((key, freq)) = ring.pop_min() {
                let min = expected.values().copied().min().unwrap();
                prop_assert_eq!(freq, min);
                prop_assert_eq!(expected.remove(&key), Some(freq));
            }
            prop_assert!(expected.is_empty());
        }
    }
}

// ==============================================
// LFU BEHAVIORAL SCENARIOS (integration)
// ==============================================
//
// End-to-end sequences through the public API only.

use freqcache::prelude::*;

fn assert_valid<V>(cache: &LfuCache<u32, V>) {
    if let Err(err) = cache.check_invariants() {
        panic!("invariant violated: {err}");
    }
}

// ==============================================
// Candidate Selection
// ==============================================

mod candidate_selection {
    use super::*;

    #[test]
    fn single_insert_is_candidate() {
        let mut cache = LfuCache::new(2);
        cache.insert(1, "one");
        assert_eq!(cache.eviction_candidate(), Some(&1));
        assert_valid(&cache);
    }

    #[test]
    fn access_moves_candidate_to_other_key() {
        let mut cache = LfuCache::new(2);
        cache.insert(1, "one");
        cache.insert(2, "two");
        cache.access(&1);
        assert_eq!(cache.eviction_candidate(), Some(&2));
    }

    #[test]
    fn heavier_key_is_never_candidate() {
        let mut cache = LfuCache::new(2);
        cache.insert(1, "one");
        cache.insert(2, "two");
        for _ in 0..3 {
            cache.access(&2);
        }
        assert_eq!(cache.eviction_candidate(), Some(&1));
    }

    #[test]
    fn candidate_query_does_not_mutate() {
        let mut cache = LfuCache::new(4);
        cache.insert(1, ());
        cache.insert(2, ());
        cache.access(&2);

        let before = cache.debug_snapshot();
        for _ in 0..5 {
            cache.eviction_candidate();
        }
        assert_eq!(cache.debug_snapshot(), before);
    }
}

// ==============================================
// Eviction
// ==============================================

mod eviction {
    use super::*;

    #[test]
    fn full_cache_drops_least_frequent() {
        let mut cache = LfuCache::new(2);
        cache.insert(1, "v1");
        cache.insert(2, "v2");
        for _ in 0..3 {
            cache.access(&2);
        }

        cache.insert(3, "v3");

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.access(&1), None);
        assert_eq!(cache.eviction_candidate(), Some(&3));
        assert_valid(&cache);
    }

    #[test]
    fn newcomer_survives_its_own_insert() {
        let mut cache = LfuCache::new(1);
        cache.insert(1, "one");
        cache.access(&1);
        cache.insert(2, "two");

        assert!(!cache.contains(&1));
        assert_eq!(cache.access(&2), Some(&"two"));
    }

    #[test]
    fn len_never_exceeds_capacity() {
        let mut cache = LfuCache::new(5);
        for key in 0..200u32 {
            cache.insert(key, key);
            cache.access(&(key % 7));
            assert!(cache.len() <= 5);
        }
        assert_valid(&cache);
    }

    #[test]
    fn hot_keys_survive_cold_stream() {
        let mut cache = LfuCache::new(4);
        for hot in 0..3u32 {
            cache.insert(hot, hot);
            for _ in 0..10 {
                cache.access(&hot);
            }
        }
        for cold in 100..200u32 {
            cache.insert(cold, cold);
        }
        for hot in 0..3u32 {
            assert_eq!(cache.frequency(&hot), Some(11));
        }
        assert_eq!(cache.len(), 4);
    }

    #[test]
    fn unbounded_grows_without_eviction() {
        let mut cache = LfuCache::new(None);
        for key in 0..10_000u32 {
            cache.insert(key, ());
        }
        assert_eq!(cache.len(), 10_000);
        assert_eq!(cache.frequencies().collect::<Vec<_>>(), vec![(1, 10_000)]);
    }
}

// ==============================================
// Insert-once
// ==============================================

mod insert_once {
    use super::*;

    #[test]
    fn second_insert_keeps_first_value() {
        let mut cache = LfuCache::new(None);
        assert!(cache.insert(1, "v1"));
        assert!(!cache.insert(1, "v2"));
        assert_eq!(cache.access(&1), Some(&"v1"));
    }

    #[test]
    fn second_insert_does_not_evict_when_full() {
        let mut cache = LfuCache::new(2);
        cache.insert(1, "a");
        cache.insert(2, "b");
        cache.insert(2, "c");
        assert!(cache.contains(&1));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn remove_then_insert_replaces() {
        let mut cache = LfuCache::new(2);
        cache.insert(1, "old");
        cache.access(&1);
        assert_eq!(cache.remove(&1), Some("old"));
        assert!(cache.insert(1, "new"));
        assert_eq!(cache.peek(&1), Some(&"new"));
        assert_eq!(cache.frequency(&1), Some(1));
    }
}

// ==============================================
// Builder and Traits
// ==============================================

mod builder_and_traits {
    use super::*;

    fn drain_coldest_first<C: LfuCacheTrait<u32, u32>>(cache: &mut C) -> Vec<(u32, u64)> {
        let mut out = Vec::new();
        while let Some(key) = cache.eviction_candidate().copied() {
            let freq = cache.frequency(&key).unwrap();
            cache.pop_lfu();
            out.push((key, freq));
        }
        out
    }

    #[test]
    fn builder_cache_drains_in_frequency_order() {
        let mut cache = LfuCacheBuilder::new().capacity(8).build::<u32, u32>();
        for key in 0..4 {
            cache.insert(key, key);
            for _ in 0..key {
                cache.access(&key);
            }
        }
        assert_eq!(
            drain_coldest_first(&mut cache),
            vec![(0, 1), (1, 2), (2, 3), (3, 4)]
        );
        assert!(cache.is_empty());
    }

    #[test]
    fn capacity_conversions() {
        let cache: LfuCache<u32, ()> = LfuCacheBuilder::new().capacity(Some(3)).build();
        assert_eq!(cache.capacity().limit(), Some(3));

        let cache: LfuCache<u32, ()> = LfuCacheBuilder::new().capacity(0).build();
        assert_eq!(cache.capacity(), Capacity::Unbounded);
    }
}

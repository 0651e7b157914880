#![no_main]

use std::collections::HashMap;

use freqcache::policy::lfu::LfuCache;
use libfuzzer_sys::fuzz_target;

// Arbitrary operation sequences on a small bounded LfuCache.
//
// The first byte picks the capacity (0 = unbounded); each following pair is
// (op, key).
fuzz_target!(|data: &[u8]| {
    let Some((&cap, ops)) = data.split_first() else {
        return;
    };
    let capacity = usize::from(cap % 16);
    let mut cache: LfuCache<u8, u32> = LfuCache::new(capacity);
    let mut freqs: HashMap<u8, u64> = HashMap::new();

    for (step, pair) in ops.chunks_exact(2).enumerate() {
        let key = pair[1] % 32;
        match pair[0] % 6 {
            0 | 1 => {
                let existed = freqs.contains_key(&key);
                let min = freqs.values().copied().min();
                let full = capacity > 0 && freqs.len() >= capacity;
                assert_eq!(cache.insert(key, step as u32), !existed);
                if !existed {
                    if full {
                        let gone: Vec<u8> =
                            freqs.keys().copied().filter(|k| !cache.contains(k)).collect();
                        assert_eq!(gone.len(), 1);
                        assert_eq!(freqs.remove(&gone[0]), min);
                    }
                    freqs.insert(key, 1);
                }
            },
            2 | 3 => {
                let hit = cache.access(&key).is_some();
                assert_eq!(hit, freqs.contains_key(&key));
                if let Some(freq) = freqs.get_mut(&key) {
                    *freq += 1;
                }
            },
            4 => {
                let candidate = cache.eviction_candidate().copied();
                let min = freqs.values().copied().min();
                assert_eq!(candidate.and_then(|k| freqs.get(&k).copied()), min);
            },
            _ => {
                assert_eq!(cache.remove(&key).is_some(), freqs.remove(&key).is_some());
            },
        }

        assert_eq!(cache.len(), freqs.len());
        assert!(cache.check_invariants().is_ok());
    }
});

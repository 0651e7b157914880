#![no_main]

use freqcache::ds::{FrequencyRing, MemberId};
use libfuzzer_sys::fuzz_target;

// Arbitrary insert/promote/remove/pop_min sequences on FrequencyRing,
// checked against per-member frequency counters.
fuzz_target!(|data: &[u8]| {
    let mut ring: FrequencyRing<u16> = FrequencyRing::new();
    let mut members: Vec<(MemberId, u16, u64)> = Vec::new();
    let mut next_key = 0u16;

    for pair in data.chunks_exact(2) {
        let arg = pair[1] as usize;
        match pair[0] % 4 {
            0 => {
                let id = ring.insert(next_key);
                members.push((id, next_key, 1));
                next_key = next_key.wrapping_add(1);
            },
            1 => {
                if !members.is_empty() {
                    let slot = arg % members.len();
                    let freq = ring.promote(members[slot].0);
                    members[slot].2 += 1;
                    assert_eq!(freq, Some(members[slot].2));
                }
            },
            2 => {
                if !members.is_empty() {
                    let (id, key, _) = members.swap_remove(arg % members.len());
                    assert_eq!(ring.remove(id), Some(key));
                    assert_eq!(ring.frequency(id), None);
                }
            },
            _ => {
                let min = members.iter().map(|m| m.2).min();
                match ring.pop_min() {
                    Some((key, freq)) => {
                        assert_eq!(Some(freq), min);
                        let pos = members.iter().position(|m| m.1 == key).unwrap();
                        assert_eq!(members.swap_remove(pos).2, freq);
                    },
                    None => assert!(members.is_empty()),
                }
            },
        }

        assert_eq!(ring.len(), members.len());
        assert!(ring.check_invariants().is_ok());
    }
});

#![no_main]

use freqcache::ds::SlotArena;
use libfuzzer_sys::fuzz_target;

// Arbitrary insert/remove/get/clear sequences on SlotArena.
//
// Stale handles must never resolve after their slot is reused.
fuzz_target!(|data: &[u8]| {
    let mut arena: SlotArena<u32> = SlotArena::new();
    let mut live = Vec::new();
    let mut dead = Vec::new();

    for pair in data.chunks_exact(2) {
        let value = u32::from(pair[1]);
        match pair[0] % 5 {
            0 => {
                let id = arena.insert(value);
                assert_eq!(arena.get(id), Some(&value));
                live.push((id, value));
            },
            1 => {
                if !live.is_empty() {
                    let (id, expected) = live.swap_remove(value as usize % live.len());
                    assert_eq!(arena.remove(id), Some(expected));
                    assert!(!arena.contains(id));
                    dead.push(id);
                }
            },
            2 => {
                if !live.is_empty() {
                    let slot = value as usize % live.len();
                    let (id, _) = live[slot];
                    if let Some(v) = arena.get_mut(id) {
                        *v = value;
                    }
                    live[slot].1 = value;
                }
            },
            3 => {
                for &id in &dead {
                    assert_eq!(arena.get(id), None);
                }
            },
            _ => {
                if value % 16 == 0 {
                    arena.clear();
                    dead.extend(live.drain(..).map(|(id, _)| id));
                }
            },
        }

        assert_eq!(arena.len(), live.len());
        for &(id, expected) in &live {
            assert_eq!(arena.get(id), Some(&expected));
        }
    }
});

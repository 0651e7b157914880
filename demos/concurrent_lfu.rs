//! Several threads share one `ConcurrentLfuCache` under a skewed access mix.

use std::thread;

use freqcache::prelude::*;
use tracing_subscriber::EnvFilter;

const THREADS: u64 = 4;
const OPS_PER_THREAD: u64 = 10_000;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cache: ConcurrentLfuCache<u64, String> =
        LfuCacheBuilder::new().capacity(64).build_concurrent();

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            let cache = cache.clone();
            thread::spawn(move || {
                let mut hits = 0u64;
                for i in 0..OPS_PER_THREAD {
                    // every fourth op touches a small hot set
                    let key = if i % 4 == 0 { i % 8 } else { (i * 7 + thread_id) % 512 };
                    if cache.access(&key).is_some() {
                        hits += 1;
                    } else {
                        cache.insert(key, format!("value-{key}"));
                    }
                }
                hits
            })
        })
        .collect();

    let hits: u64 = handles
        .into_iter()
        .map(|h| h.join().unwrap_or(0))
        .sum();
    let total = THREADS * OPS_PER_THREAD;

    tracing::info!(
        hits,
        total,
        len = cache.len(),
        candidate = ?cache.eviction_candidate(),
        "workload finished"
    );
    for key in 0..8 {
        println!("hot key {key}: frequency {:?}", cache.frequency(&key));
    }

    match cache.check_invariants() {
        Ok(()) => println!("invariants hold"),
        Err(err) => tracing::error!(%err, "cache invariants broken"),
    }
}

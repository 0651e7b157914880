//! Walks a small bounded cache through promotions and an eviction.
//!
//! Run with `RUST_LOG=freqcache=trace cargo run --example basic_lfu` to see
//! eviction events.

use freqcache::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut cache = LfuCacheBuilder::new().capacity(3).build::<&str, u32>();
    cache.insert("alpha", 1);
    cache.insert("beta", 2);
    cache.insert("gamma", 3);

    for _ in 0..4 {
        cache.access(&"alpha");
    }
    cache.access(&"gamma");

    tracing::info!(candidate = ?cache.eviction_candidate(), "before insert");
    cache.insert("delta", 4);
    tracing::info!(
        evicted_beta = !cache.contains(&"beta"),
        candidate = ?cache.eviction_candidate(),
        "after insert"
    );

    for (freq, count) in cache.frequencies() {
        println!("frequency {freq:>3}: {count} entries");
    }
    for (key, value) in cache.iter() {
        println!("{key:<6} = {value} (freq {})", cache.frequency(key).unwrap_or(0));
    }

    if let Err(err) = cache.check_invariants() {
        tracing::error!(%err, "cache invariants broken");
    }
}

/// Point-in-time copy of an LFU cache's counters and occupancy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LfuMetricsSnapshot {
    pub access_calls: u64,
    pub access_hits: u64,
    pub access_misses: u64,

    pub insert_calls: u64,
    pub insert_new: u64,
    pub insert_duplicates: u64,

    pub evict_calls: u64,
    pub evicted_entries: u64,

    pub pop_lfu_calls: u64,
    pub pop_lfu_found: u64,
    pub remove_calls: u64,
    pub remove_found: u64,
    pub candidate_calls: u64,
    pub candidate_found: u64,
    pub frequency_calls: u64,
    pub frequency_found: u64,
    pub clear_calls: u64,

    pub len: usize,
    pub bucket_count: usize,
    /// `0` for unbounded caches.
    pub capacity: usize,
}

impl LfuMetricsSnapshot {
    /// Fraction of `access` calls that found their key.
    pub fn hit_rate(&self) -> f64 {
        if self.access_calls == 0 {
            0.0
        } else {
            self.access_hits as f64 / self.access_calls as f64
        }
    }
}

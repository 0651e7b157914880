use crate::metrics::cell::MetricsCell;
use crate::metrics::snapshot::LfuMetricsSnapshot;
use crate::metrics::traits::{CoreMetricsRecorder, LfuMetricsReadRecorder, LfuMetricsRecorder};

/// Counters owned by an LFU cache.
///
/// Plain integers for paths that already hold `&mut self`; [`MetricsCell`]s
/// for read paths.
#[derive(Debug, Default)]
pub struct LfuMetrics {
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
    pub clear_calls: u64,
    pub candidate_calls: MetricsCell,
    pub candidate_found: MetricsCell,
    pub frequency_calls: MetricsCell,
    pub frequency_found: MetricsCell,
}

impl LfuMetrics {
    /// Copies the counters; occupancy fields are left for the cache to fill.
    pub fn to_snapshot(&self) -> LfuMetricsSnapshot {
        LfuMetricsSnapshot {
            access_calls: self.access_calls,
            access_hits: self.access_hits,
            access_misses: self.access_misses,
            insert_calls: self.insert_calls,
            insert_new: self.insert_new,
            insert_duplicates: self.insert_duplicates,
            evict_calls: self.evict_calls,
            evicted_entries: self.evicted_entries,
            pop_lfu_calls: self.pop_lfu_calls,
            pop_lfu_found: self.pop_lfu_found,
            remove_calls: self.remove_calls,
            remove_found: self.remove_found,
            candidate_calls: self.candidate_calls.get(),
            candidate_found: self.candidate_found.get(),
            frequency_calls: self.frequency_calls.get(),
            frequency_found: self.frequency_found.get(),
            clear_calls: self.clear_calls,
            ..LfuMetricsSnapshot::default()
        }
    }
}

impl CoreMetricsRecorder for LfuMetrics {
    fn record_access_hit(&mut self) {
        self.access_calls += 1;
        self.access_hits += 1;
    }

    fn record_access_miss(&mut self) {
        self.access_calls += 1;
        self.access_misses += 1;
    }

    fn record_insert_call(&mut self) {
        self.insert_calls += 1;
    }

    fn record_insert_new(&mut self) {
        self.insert_new += 1;
    }

    fn record_insert_duplicate(&mut self) {
        self.insert_duplicates += 1;
    }

    fn record_evict_call(&mut self) {
        self.evict_calls += 1;
    }

    fn record_evicted_entry(&mut self) {
        self.evicted_entries += 1;
    }

    fn record_clear(&mut self) {
        self.clear_calls += 1;
    }
}

impl LfuMetricsRecorder for LfuMetrics {
    fn record_pop_lfu_call(&mut self) {
        self.pop_lfu_calls += 1;
    }

    fn record_pop_lfu_found(&mut self) {
        self.pop_lfu_found += 1;
    }

    fn record_remove_call(&mut self) {
        self.remove_calls += 1;
    }

    fn record_remove_found(&mut self) {
        self.remove_found += 1;
    }
}

impl LfuMetricsReadRecorder for &LfuMetrics {
    fn record_candidate_call(&self) {
        self.candidate_calls.incr();
    }

    fn record_candidate_found(&self) {
        self.candidate_found.incr();
    }

    fn record_frequency_call(&self) {
        self.frequency_calls.incr();
    }

    fn record_frequency_found(&self) {
        self.frequency_found.incr();
    }
}

//! # Metrics Trait Hierarchy
//!
//! Recording, snapshotting and export are split into small traits so the
//! cache never depends on a monitoring backend.
//!
//! ```text
//!   ┌─────────────────────────────┐
//!   │     CoreMetricsRecorder     │   access hit/miss, insert, evict, clear
//!   └──────────────┬──────────────┘
//!                  ▼
//!   ┌─────────────────────────────┐   ┌─────────────────────────────┐
//!   │     LfuMetricsRecorder      │   │   LfuMetricsReadRecorder    │
//!   │  pop_lfu, remove (&mut)     │   │  candidate, frequency (&)   │
//!   └─────────────────────────────┘   └─────────────────────────────┘
//!
//!   Consumption:
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │    │ MetricsExporter<S>           │
//!   │ (bench/test)                 │    │ (production monitoring)      │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```

/// Counters every cache operation touches.
pub trait CoreMetricsRecorder {
    fn record_access_hit(&mut self);
    fn record_access_miss(&mut self);
    fn record_insert_call(&mut self);
    fn record_insert_new(&mut self);
    fn record_insert_duplicate(&mut self);
    fn record_evict_call(&mut self);
    fn record_evicted_entry(&mut self);
    fn record_clear(&mut self);
}

/// LFU-specific counters for `&mut self` operations.
pub trait LfuMetricsRecorder: CoreMetricsRecorder {
    fn record_pop_lfu_call(&mut self);
    fn record_pop_lfu_found(&mut self);
    fn record_remove_call(&mut self);
    fn record_remove_found(&mut self);
}

/// LFU counters for `&self` methods (interior mutability).
pub trait LfuMetricsReadRecorder {
    fn record_candidate_call(&self);
    fn record_candidate_found(&self);
    fn record_frequency_call(&self);
    fn record_frequency_found(&self);
}

/// Snapshot provider for bench/testing.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Export/publish metrics to production monitoring backends.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}

//! Optional operation counters (feature `metrics`).
//!
//! Recording, snapshotting and export are separate concerns: caches own an
//! [`LfuMetrics`](metrics_impl::LfuMetrics) recorder, callers pull an
//! [`LfuMetricsSnapshot`](snapshot::LfuMetricsSnapshot) through
//! [`MetricsSnapshotProvider`](traits::MetricsSnapshotProvider), and exporters
//! publish snapshots.

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

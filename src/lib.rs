//! freqcache: an O(1) least-frequently-used cache.
//!
//! Entries are grouped into frequency buckets kept in ascending order on a
//! circular list anchored by a sentinel. Insert, access-with-promotion and
//! eviction-candidate lookup are all constant time.
//!
//! - [`policy::lfu::LfuCache`]: single-threaded cache.
//! - [`policy::lfu::ConcurrentLfuCache`]: the same cache behind one
//!   `parking_lot::RwLock` (feature `concurrency`, on by default).
//! - [`builder::LfuCacheBuilder`]: capacity and preallocation.
//! - [`ds::FrequencyRing`]: the bucket ring on its own.
//!
//! Enable the `metrics` feature for operation counters and a Prometheus text
//! exporter.

pub mod builder;
pub mod ds;
pub mod error;
#[cfg(feature = "metrics")]
pub mod metrics;
pub mod policy;
pub mod prelude;
pub mod traits;

pub use crate::builder::{Capacity, LfuCacheBuilder};
pub use crate::error::InvariantError;
#[cfg(feature = "concurrency")]
pub use crate::policy::lfu::ConcurrentLfuCache;
pub use crate::policy::lfu::LfuCache;

pub use crate::builder::{Capacity, LfuCacheBuilder};
pub use crate::ds::{FrequencyRing, SlotArena, SlotId};
pub use crate::error::InvariantError;
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::LfuMetricsSnapshot;
#[cfg(feature = "metrics")]
pub use crate::metrics::traits::{MetricsExporter, MetricsSnapshotProvider};
#[cfg(feature = "concurrency")]
pub use crate::policy::lfu::ConcurrentLfuCache;
pub use crate::policy::lfu::{LfuCache, LfuSnapshot};
pub use crate::traits::{ConcurrentCache, CoreCache, LfuCacheTrait, MutableCache};

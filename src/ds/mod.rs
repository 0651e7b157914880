pub mod frequency_ring;
pub mod slot_arena;

pub use frequency_ring::{
    BucketId, BucketRef, DEFAULT_BUCKET_PREALLOC, FrequencyRing, MemberId, RingIter,
};
pub use slot_arena::{SlotArena, SlotId};

use std::{
    num::NonZeroU64,
    sync::atomic::{AtomicU64, Ordering},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A stable identifier for a view.
pub struct ViewId(NonZeroU64);

impl ViewId {
    /// Allocate a new, unique `ViewId`.
    pub fn new() -> ViewId {
        static VIEW_ID_COUNTER: AtomicU64 = AtomicU64::new(1);
        let id = VIEW_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        ViewId(NonZeroU64::new(id).unwrap_or(NonZeroU64::MIN))
    }

    pub fn to_raw(self) -> u64 {
        self.0.get()
    }
}

impl Default for ViewId {
    fn default() -> Self {
        Self::new()
    }
}

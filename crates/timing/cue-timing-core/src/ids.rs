//! Identifiers and a simple allocator for scheduled notices.

use serde::{Deserialize, Serialize};

/// Opaque handle to a notice. Dense indices improve cache locality; the
/// numeric order matches creation order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct NoticeId(pub u32);

/// Monotonic allocator for NoticeId.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_notice: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_notice(&mut self) -> NoticeId {
        let id = NoticeId(self.next_notice);
        self.next_notice = self.next_notice.wrapping_add(1);
        id
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

//! Identifiers and a simple allocator for timer handles.

use serde::{Deserialize, Serialize};

/// Handle for one autoplay run, returned by `AutoplayScheduler::start()` and
/// required by `AutoplayScheduler::stop()`. Stale handles are ignored.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TimerHandle(pub u32);

/// Monotonic allocator for TimerHandle generations.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_timer: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_timer(&mut self) -> TimerHandle {
        let id = TimerHandle(self.next_timer);
        self.next_timer = self.next_timer.wrapping_add(1);
        id
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_monotonic() {
        let mut alloc = IdAllocator::new();
        assert_eq!(alloc.alloc_timer(), TimerHandle(0));
        assert_eq!(alloc.alloc_timer(), TimerHandle(1));
        alloc.reset();
        assert_eq!(alloc.alloc_timer(), TimerHandle(0));
    }
}

//! Index arithmetic: bounds, wraparound and clamping.
//!
//! Pure functions; the engine owns the resulting index.

use serde::{Deserialize, Serialize};

/// Largest valid first-visible index.
#[inline]
pub fn max_index(item_count: usize, slides_to_show: usize) -> usize {
    item_count.saturating_sub(slides_to_show)
}

/// Map a requested index onto `[0, max_index]`.
///
/// Looping wraps a single step only: anything below zero lands on
/// `max_index` and anything above `max_index` lands on zero, however far out
/// of range the request was.
#[inline]
pub fn resolve_target(requested: i64, max_index: usize, loop_enabled: bool) -> usize {
    let max = max_index as i64;
    if loop_enabled {
        if requested < 0 {
            max_index
        } else if requested > max {
            0
        } else {
            requested as usize
        }
    } else {
        requested.clamp(0, max) as usize
    }
}

/// Clamp an existing index after bounds changed.
#[inline]
pub fn clamp_index(index: usize, max_index: usize) -> usize {
    index.min(max_index)
}

#[inline]
pub fn next_target(current: usize, step: usize) -> i64 {
    current as i64 + step as i64
}

#[inline]
pub fn prev_target(current: usize, step: usize) -> i64 {
    current as i64 - step as i64
}

/// Whether `index` is inside the visible range that starts at `current`.
#[inline]
pub fn is_active(index: usize, current: usize, slides_to_show: usize) -> bool {
    index >= current && index < current + slides_to_show
}

/// A successful index change and the boundary signals it implies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexChange {
    pub previous: usize,
    pub current: usize,
    pub reached_start: bool,
    pub reached_end: bool,
}

/// Resolve a navigation request. Returns `None` when the resolved index is
/// the current one, so a no-op request produces no signals.
pub fn go_to(
    requested: i64,
    current: usize,
    max_index: usize,
    loop_enabled: bool,
) -> Option<IndexChange> {
    let target = resolve_target(requested, max_index, loop_enabled);
    if target == current {
        return None;
    }
    Some(IndexChange {
        previous: current,
        current: target,
        reached_start: target == 0,
        reached_end: target == max_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_index_never_negative() {
        assert_eq!(max_index(0, 3), 0);
        assert_eq!(max_index(2, 3), 0);
        assert_eq!(max_index(10, 3), 7);
    }

    #[test]
    fn loop_wraps_single_step() {
        for max in 0..6usize {
            assert_eq!(resolve_target(max as i64 + 1, max, true), 0);
            assert_eq!(resolve_target(-1, max, true), max);
            // Far past the end still lands on exactly 0 / max.
            assert_eq!(resolve_target(max as i64 + 40, max, true), 0);
            assert_eq!(resolve_target(-40, max, true), max);
        }
    }

    #[test]
    fn clamp_without_loop() {
        assert_eq!(resolve_target(12, 7, false), 7);
        assert_eq!(resolve_target(-5, 7, false), 0);
        assert_eq!(resolve_target(4, 7, false), 4);
    }

    #[test]
    fn scroll_steps_overshoot_to_zero_when_looping() {
        // slidesToScroll = 3 from index 6 with max 7: 9 > 7 wraps to 0, not 1.
        assert_eq!(resolve_target(next_target(6, 3), 7, true), 0);
        assert_eq!(resolve_target(prev_target(1, 3), 7, true), 7);
    }

    #[test]
    fn no_op_requests_signal_nothing() {
        assert_eq!(go_to(3, 3, 5, false), None);
        assert_eq!(go_to(9, 5, 5, false), None);
        let change = go_to(5, 2, 5, false).unwrap();
        assert!(change.reached_end && !change.reached_start);
        assert_eq!(change.previous, 2);
    }
}

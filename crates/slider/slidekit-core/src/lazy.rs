//! Per-item lazy-load tracking.
//!
//! Entries are created the first time an item is rendered and never removed.
//! `is_loaded` only ever goes from false to true; `is_error` is set by the
//! rendering layer and never cleared.

use std::ops::RangeInclusive;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::config::LazyLoadOptions;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemVisibility {
    pub is_loaded: bool,
    pub is_error: bool,
}

#[derive(Debug)]
pub struct LazyVisibilityTracker {
    enabled: bool,
    root_margin_px: f32,
    preload_window: usize,
    items: HashMap<usize, ItemVisibility>,
    connected: bool,
}

impl LazyVisibilityTracker {
    pub fn new(opts: &LazyLoadOptions) -> Self {
        let mut tracker = Self {
            enabled: false,
            root_margin_px: 0.0,
            preload_window: 0,
            items: HashMap::new(),
            connected: true,
        };
        tracker.reconfigure(opts);
        tracker
    }

    /// Apply new options. Items already loaded stay loaded.
    pub fn reconfigure(&mut self, opts: &LazyLoadOptions) {
        self.enabled = opts.enabled;
        self.root_margin_px = opts.root_margin.to_px();
        self.preload_window = opts.preload_window.max(0) as usize;
        if !self.enabled {
            for item in self.items.values_mut() {
                item.is_loaded = true;
            }
        }
    }

    /// Indices eagerly loaded around the visible range.
    pub fn preload_range(&self, current: usize, slides_to_show: usize) -> RangeInclusive<i64> {
        let w = i64::try_from(self.preload_window).unwrap_or(i64::MAX);
        let current = i64::try_from(current).unwrap_or(i64::MAX);
        let shown = i64::try_from(slides_to_show).unwrap_or(i64::MAX);
        current.saturating_sub(w)..=current.saturating_add(shown).saturating_add(w)
    }

    /// Register (on first render) and refresh one item.
    pub fn track(&mut self, index: usize, current: usize, slides_to_show: usize) -> ItemVisibility {
        let eager = !self.enabled || self.preload_range(current, slides_to_show).contains(&(index as i64));
        let item = self.items.entry(index).or_default();
        if eager {
            item.is_loaded = true;
        }
        *item
    }

    /// Re-evaluate the preload window for every tracked item.
    pub fn refresh(&mut self, current: usize, slides_to_show: usize) {
        let range = self.preload_range(current, slides_to_show);
        let enabled = self.enabled;
        for (index, item) in self.items.iter_mut() {
            if !enabled || range.contains(&(*index as i64)) {
                item.is_loaded = true;
            }
        }
    }

    /// Visibility signal for one item. Returns `true` when this flipped it to
    /// loaded; callers fire `onLoad` exactly then.
    pub fn intersect(&mut self, index: usize) -> bool {
        if !self.connected {
            return false;
        }
        let enabled = self.enabled;
        let item = self.items.entry(index).or_default();
        if item.is_loaded {
            return false;
        }
        item.is_loaded = true;
        enabled
    }

    /// Record a media failure for an item.
    pub fn handle_error(&mut self, index: usize) {
        self.items.entry(index).or_default().is_error = true;
    }

    /// Current state; untracked items report what a first render would.
    pub fn get(&self, index: usize) -> ItemVisibility {
        self.items.get(&index).copied().unwrap_or(ItemVisibility {
            is_loaded: !self.enabled,
            is_error: false,
        })
    }

    #[inline]
    pub fn is_tracked(&self, index: usize) -> bool {
        self.items.contains_key(&index)
    }

    /// Tracked items still waiting on a visibility signal, ascending.
    pub fn pending(&self) -> Vec<usize> {
        if !self.connected {
            return Vec::new();
        }
        let mut out: Vec<usize> = self
            .items
            .iter()
            .filter(|(_, item)| !item.is_loaded)
            .map(|(index, _)| *index)
            .collect();
        out.sort_unstable();
        out
    }

    /// Drop every observer; later signals are ignored.
    pub fn disconnect(&mut self) {
        self.connected = false;
    }

    #[inline]
    pub fn root_margin_px(&self) -> f32 {
        self.root_margin_px
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled() -> LazyLoadOptions {
        LazyLoadOptions {
            enabled: true,
            ..Default::default()
        }
    }

    #[test]
    fn disabled_loads_everything() {
        let mut t = LazyVisibilityTracker::new(&LazyLoadOptions::default());
        assert!(t.track(40, 0, 1).is_loaded);
        assert!(t.get(99).is_loaded);
    }

    #[test]
    fn preload_window_is_current_minus_one_to_end_plus_one() {
        let mut t = LazyVisibilityTracker::new(&enabled());
        assert_eq!(t.preload_range(2, 1), 1..=4);
        for i in 0..8 {
            t.track(i, 2, 1);
        }
        assert_eq!(t.pending(), vec![0, 5, 6, 7]);
        assert!(t.intersect(6));
        assert!(!t.intersect(6));
        assert!(t.get(6).is_loaded);
        // Navigating away never unloads.
        t.refresh(0, 1);
        assert!(t.get(6).is_loaded);
        assert!(t.get(0).is_loaded);
        assert_eq!(t.pending(), vec![5, 7]);
    }

    #[test]
    fn huge_preload_window_saturates() {
        let mut t = LazyVisibilityTracker::new(&LazyLoadOptions {
            preload_window: i64::MAX,
            ..enabled()
        });
        let range = t.preload_range(3, 2);
        assert_eq!(*range.end(), i64::MAX);
        assert!(range.contains(&0));
        assert!(t.track(5, 3, 2).is_loaded);
        assert!(t.track(usize::MAX, 0, 1).is_loaded);
    }

    #[test]
    fn intersect_while_disabled_loads_silently() {
        let mut t = LazyVisibilityTracker::new(&LazyLoadOptions::default());
        assert!(!t.intersect(3));
        assert!(t.get(3).is_loaded);
    }

    #[test]
    fn errors_stick() {
        let mut t = LazyVisibilityTracker::new(&enabled());
        t.handle_error(3);
        assert!(t.get(3).is_error);
        t.intersect(3);
        assert!(t.get(3).is_error);
    }

    #[test]
    fn disconnected_ignores_signals() {
        let mut t = LazyVisibilityTracker::new(&enabled());
        t.track(9, 0, 1);
        t.disconnect();
        assert!(!t.intersect(9));
        assert!(t.pending().is_empty());
    }
}

//! Swipe recognition for touch and mouse drags.
//!
//! One down → move* → up sequence yields at most one discrete swipe. Only the
//! horizontal client-X is tracked.

use serde::{Deserialize, Serialize};

use crate::config::{Direction, DEFAULT_SWIPE_THRESHOLD_PX};

/// Physical swipe direction of the pointer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Swipe {
    /// Pointer travelled towards smaller X.
    Left,
    /// Pointer travelled towards larger X.
    Right,
}

/// Semantic navigation produced by a swipe once direction is applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavIntent {
    Next,
    Prev,
}

impl Swipe {
    /// In `rtl` the meaning flips; the physical direction does not.
    pub fn intent(self, direction: Direction) -> NavIntent {
        match (self, direction) {
            (Swipe::Left, Direction::Ltr) | (Swipe::Right, Direction::Rtl) => NavIntent::Next,
            (Swipe::Right, Direction::Ltr) | (Swipe::Left, Direction::Rtl) => NavIntent::Prev,
        }
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct Drag {
    start_x: f32,
    last_x: f32,
}

#[derive(Debug)]
pub struct GestureRecognizer {
    threshold_px: f32,
    enabled: bool,
    drag: Option<Drag>,
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD_PX as f32, true)
    }
}

impl GestureRecognizer {
    pub fn new(threshold_px: f32, enabled: bool) -> Self {
        let threshold_px = if threshold_px.is_finite() && threshold_px > 0.0 {
            threshold_px
        } else {
            DEFAULT_SWIPE_THRESHOLD_PX as f32
        };
        Self {
            threshold_px,
            enabled,
            drag: None,
        }
    }

    /// Pointer/touch down.
    pub fn start(&mut self, x: f32) {
        if !self.enabled || !x.is_finite() {
            return;
        }
        self.drag = Some(Drag {
            start_x: x,
            last_x: x,
        });
    }

    /// Pointer/touch move. Ignored unless a drag is in progress.
    pub fn move_to(&mut self, x: f32) {
        if !x.is_finite() {
            return;
        }
        if let Some(drag) = self.drag.as_mut() {
            drag.last_x = x;
        }
    }

    /// Pointer/touch up (or leave). Clears the scratch state.
    pub fn end(&mut self) -> Option<Swipe> {
        let drag = self.drag.take()?;
        let travel = drag.start_x - drag.last_x;
        if travel.abs() <= self.threshold_px {
            return None;
        }
        Some(if travel > 0.0 { Swipe::Left } else { Swipe::Right })
    }

    pub fn cancel(&mut self) {
        self.drag = None;
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    #[inline]
    pub fn drag_start_x(&self) -> f32 {
        self.drag.map_or(0.0, |d| d.start_x)
    }

    /// Signed pointer displacement of the live drag (`current - start`).
    #[inline]
    pub fn drag_delta_x(&self) -> f32 {
        self.drag.map_or(0.0, |d| d.last_x - d.start_x)
    }

    #[inline]
    pub fn threshold_px(&self) -> f32 {
        self.threshold_px
    }
}

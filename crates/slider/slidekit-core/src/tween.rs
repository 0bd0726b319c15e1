//! Offset tween between two track positions.
//!
//! Fire-and-forget: the engine advances it every step and emits
//! `TransitionEnd` when it completes. Starting a new tween replaces the old
//! one from wherever the track currently is.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ease {
    Linear,
    /// Quadratic ease-out.
    #[default]
    Power2Out,
}

impl Ease {
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power2Out => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OffsetTween {
    from: f32,
    to: f32,
    duration_ms: f64,
    elapsed_ms: f64,
    ease: Ease,
    target_index: usize,
}

impl OffsetTween {
    pub fn new(from: f32, to: f32, duration_ms: f64, ease: Ease, target_index: usize) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms.max(0.0),
            elapsed_ms: 0.0,
            ease,
            target_index,
        }
    }

    /// Advance by `dt_ms`. Returns `true` once finished.
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        if dt_ms.is_finite() && dt_ms > 0.0 {
            self.elapsed_ms = (self.elapsed_ms + dt_ms).min(self.duration_ms);
        }
        self.is_finished()
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    pub fn value(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            return self.to;
        }
        let t = (self.elapsed_ms / self.duration_ms) as f32;
        self.from + (self.to - self.from) * self.ease.apply(t)
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.to
    }

    #[inline]
    pub fn target_index(&self) -> usize {
        self.target_index
    }
}

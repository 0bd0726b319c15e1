//! Continuous-scroll (marquee) mode.
//!
//! The rendering layer paints the item sequence twice back to back; the
//! driver advances a progress value through one sequence width and wraps, so
//! the second copy takes the place of the first without a visible seam.

use serde::{Deserialize, Serialize};

use crate::config::{MarqueeDirection, MarqueeOptions, DEFAULT_MARQUEE_SPEED};

/// Fallback cycle: each item takes `100 / speed` seconds when the sequence
/// width has not been reported.
const ITEM_SPAN_UNITS: f64 = 100.0;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MarqueeDriver {
    speed: f64,
    direction: MarqueeDirection,
    pause_on_hover: bool,
    item_count: usize,
    sequence_width_px: Option<f32>,
    /// Fraction of one sequence travelled, in `[0, 1)`.
    progress: f64,
    /// Total sequences travelled; only ever grows.
    cycles: u64,
    paused: bool,
    hovered: bool,
    killed: bool,
}

impl MarqueeDriver {
    pub fn new(opts: &MarqueeOptions, item_count: usize) -> Self {
        let mut driver = Self {
            speed: DEFAULT_MARQUEE_SPEED,
            direction: MarqueeDirection::Left,
            pause_on_hover: true,
            item_count,
            sequence_width_px: None,
            progress: 0.0,
            cycles: 0,
            paused: false,
            hovered: false,
            killed: false,
        };
        driver.reconfigure(opts);
        driver
    }

    /// Apply new options while keeping the current position.
    pub fn reconfigure(&mut self, opts: &MarqueeOptions) {
        self.speed = if opts.speed.is_finite() && opts.speed > 0.0 {
            opts.speed
        } else {
            DEFAULT_MARQUEE_SPEED
        };
        self.direction = opts.direction;
        self.pause_on_hover = opts.pause_on_hover;
    }

    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
    }

    /// Width of one (undoubled) sequence as measured by the host.
    pub fn set_sequence_width(&mut self, width_px: f32) {
        self.sequence_width_px = (width_px.is_finite() && width_px > 0.0).then_some(width_px);
    }

    /// Duration of one full sequence in milliseconds, `None` when empty.
    pub fn cycle_ms(&self) -> Option<f64> {
        let ms = match self.sequence_width_px {
            Some(width) => width as f64 / self.speed * 1000.0,
            None => self.item_count as f64 * ITEM_SPAN_UNITS / self.speed * 1000.0,
        };
        (ms > 0.0).then_some(ms)
    }

    pub fn advance(&mut self, dt_ms: f64) {
        if !self.is_running() || !dt_ms.is_finite() || dt_ms <= 0.0 {
            return;
        }
        let Some(cycle) = self.cycle_ms() else {
            return;
        };
        let total = self.progress + dt_ms / cycle;
        self.cycles += total.floor() as u64;
        self.progress = total.fract();
    }

    pub fn hover_enter(&mut self) {
        self.hovered = true;
    }

    pub fn hover_leave(&mut self) {
        self.hovered = false;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Stop for good; used on destroy.
    pub fn kill(&mut self) {
        self.killed = true;
    }

    pub fn is_running(&self) -> bool {
        !self.killed && !self.paused && !(self.hovered && self.pause_on_hover)
    }

    #[inline]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Monotonic distance travelled, in sequences.
    #[inline]
    pub fn distance(&self) -> f64 {
        self.cycles as f64 + self.progress
    }

    /// Translation of the doubled track in percent of its own width.
    pub fn offset_percent(&self) -> f32 {
        let p = self.progress as f32;
        match self.direction {
            MarqueeDirection::Left => -50.0 * p,
            MarqueeDirection::Right => -50.0 * (1.0 - p),
        }
    }

    /// Translation in pixels, once the sequence width is known.
    pub fn offset_px(&self) -> Option<f32> {
        let width = self.sequence_width_px?;
        let p = self.progress as f32;
        Some(match self.direction {
            MarqueeDirection::Left => -width * p,
            MarqueeDirection::Right => -width * (1.0 - p),
        })
    }

    /// Item indices in render order: the sequence twice.
    pub fn sequence(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.item_count).chain(0..self.item_count)
    }

    #[inline]
    pub fn rendered_len(&self) -> usize {
        self.item_count * 2
    }
}

//! Autoplay scheduler: a repeating interval that requests "next slide".
//!
//! Time is host-driven: `advance(dt_ms)` reports whether a tick is due. At
//! most one tick fires per call, so a long frame never replays a backlog of
//! stale ticks. A run is identified by the [`TimerHandle`] returned from
//! `start()`; pausing keeps the run and re-arms the interval on resume.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::AutoplayOptions;
use crate::ids::{IdAllocator, TimerHandle};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutoplayState {
    Stopped,
    Running,
    /// Held after a manual navigation; resumes on its own.
    PausedTemporary,
    PausedByHover,
    PausedByFocus,
}

#[derive(Copy, Clone, Debug)]
struct Interval {
    period_ms: f64,
    elapsed_ms: f64,
}

#[derive(Debug)]
pub struct AutoplayScheduler {
    opts: AutoplayOptions,
    state: AutoplayState,
    run: Option<TimerHandle>,
    interval: Option<Interval>,
    hold_remaining_ms: Option<f64>,
    ids: IdAllocator,
    hovered: bool,
    focused: bool,
    /// Whether leaving hover/focus should re-arm (it was running right before).
    resume_after_pause: bool,
    /// Set while marquee mode owns the track.
    locked: bool,
}

impl AutoplayScheduler {
    pub fn new(opts: &AutoplayOptions, marquee_active: bool) -> Self {
        Self {
            opts: opts.clone(),
            state: AutoplayState::Stopped,
            run: None,
            interval: None,
            hold_remaining_ms: None,
            ids: IdAllocator::new(),
            hovered: false,
            focused: false,
            resume_after_pause: false,
            locked: marquee_active,
        }
    }

    fn period_ms(&self) -> f64 {
        self.opts.delay_ms.max(1) as f64
    }

    fn arm(&mut self) {
        self.interval = Some(Interval {
            period_ms: self.period_ms(),
            elapsed_ms: 0.0,
        });
    }

    /// Start a new run. Any live run is replaced. Returns `None` while marquee
    /// mode is active.
    pub fn start(&mut self) -> Option<TimerHandle> {
        if self.locked {
            debug!("autoplay start ignored: marquee mode is active");
            return None;
        }
        let handle = self.ids.alloc_timer();
        self.run = Some(handle);
        self.arm();
        self.hold_remaining_ms = None;
        self.resume_after_pause = false;
        self.state = AutoplayState::Running;
        debug!("autoplay started ({handle:?}, every {} ms)", self.period_ms());
        if self.hovered && self.opts.pause_on_hover {
            self.pause_for(AutoplayState::PausedByHover);
        } else if self.focused && self.opts.pause_on_focus {
            self.pause_for(AutoplayState::PausedByFocus);
        }
        Some(handle)
    }

    /// Swap options after a config change. The live run is cleared; hover,
    /// focus and the handle counter carry over.
    pub fn reconfigure(&mut self, opts: &AutoplayOptions, marquee_active: bool) {
        self.halt();
        self.opts = opts.clone();
        self.locked = marquee_active;
    }

    /// Stop the run identified by `handle`. Stale handles are ignored.
    pub fn stop(&mut self, handle: TimerHandle) -> bool {
        if self.run != Some(handle) {
            return false;
        }
        self.halt();
        true
    }

    /// Stop whatever run is live. Returns whether anything was active.
    pub fn stop_current(&mut self) -> bool {
        match self.run {
            Some(handle) => self.stop(handle),
            None => false,
        }
    }

    /// Clear the run and every pending timer. Idempotent.
    pub fn halt(&mut self) {
        if let Some(handle) = self.run.take() {
            debug!("autoplay stopped ({handle:?})");
        }
        self.interval = None;
        self.hold_remaining_ms = None;
        self.resume_after_pause = false;
        self.state = AutoplayState::Stopped;
    }

    fn pause_for(&mut self, state: AutoplayState) {
        match self.state {
            AutoplayState::Running | AutoplayState::PausedTemporary => {
                self.resume_after_pause = true;
                self.interval = None;
                self.hold_remaining_ms = None;
                self.state = state;
            }
            AutoplayState::PausedByHover | AutoplayState::PausedByFocus => self.state = state,
            AutoplayState::Stopped => {}
        }
    }

    fn release_pause(&mut self) {
        if !matches!(
            self.state,
            AutoplayState::PausedByHover | AutoplayState::PausedByFocus
        ) {
            return;
        }
        if self.hovered && self.opts.pause_on_hover {
            self.state = AutoplayState::PausedByHover;
        } else if self.focused && self.opts.pause_on_focus {
            self.state = AutoplayState::PausedByFocus;
        } else if self.resume_after_pause && self.run.is_some() {
            self.resume_after_pause = false;
            self.arm();
            self.state = AutoplayState::Running;
        } else {
            self.halt();
        }
    }

    pub fn hover_enter(&mut self) {
        self.hovered = true;
        if self.opts.pause_on_hover {
            self.pause_for(AutoplayState::PausedByHover);
        }
    }

    pub fn hover_leave(&mut self) {
        self.hovered = false;
        self.release_pause();
    }

    pub fn focus_in(&mut self) {
        self.focused = true;
        if self.opts.pause_on_focus {
            self.pause_for(AutoplayState::PausedByFocus);
        }
    }

    pub fn focus_out(&mut self) {
        self.focused = false;
        self.release_pause();
    }

    /// Record a manual navigation. Returns `true` when it stopped the run.
    pub fn interaction(&mut self) -> bool {
        if self.state == AutoplayState::Stopped {
            return false;
        }
        if self.opts.stop_on_interaction {
            self.halt();
            return true;
        }
        if self.state != AutoplayState::Running {
            return false;
        }
        match self.opts.hold_after_interaction {
            Some(hold) => {
                self.interval = None;
                self.hold_remaining_ms = Some(hold.max(1) as f64);
                self.state = AutoplayState::PausedTemporary;
            }
            // The next tick is one full period after the user's move.
            None => self.arm(),
        }
        false
    }

    /// Advance timers by `dt_ms`. Returns `true` when a tick is due.
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        let dt = if dt_ms.is_finite() { dt_ms.max(0.0) } else { 0.0 };
        match self.state {
            AutoplayState::Running => {
                let Some(interval) = self.interval.as_mut() else {
                    return false;
                };
                interval.elapsed_ms += dt;
                if interval.elapsed_ms >= interval.period_ms {
                    interval.elapsed_ms %= interval.period_ms;
                    return true;
                }
                false
            }
            AutoplayState::PausedTemporary => {
                let remaining = self.hold_remaining_ms.unwrap_or(0.0) - dt;
                if remaining <= 0.0 {
                    self.hold_remaining_ms = None;
                    self.arm();
                    self.state = AutoplayState::Running;
                } else {
                    self.hold_remaining_ms = Some(remaining);
                }
                false
            }
            _ => false,
        }
    }

    #[inline]
    pub fn stops_on_last_slide(&self) -> bool {
        self.opts.stop_on_last_slide
    }

    #[inline]
    pub fn state(&self) -> AutoplayState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == AutoplayState::Running
    }

    #[inline]
    pub fn handle(&self) -> Option<TimerHandle> {
        self.run
    }
}

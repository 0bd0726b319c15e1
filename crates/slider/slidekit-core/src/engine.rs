//! Slider: state ownership and the public command/query API.
//!
//! Every navigation source (controls, keyboard, swipe, autoplay) funnels into
//! `apply_navigation`, which is the only place `current` changes besides the
//! bounds clamp that follows resizes and item-count changes. Time only moves
//! through `step()`; nothing here blocks or spawns.

use std::mem;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::a11y::{AccessibilityAnnouncer, ContainerAria, LiveRegion, SlideAria};
use crate::autoplay::{AutoplayScheduler, AutoplayState};
use crate::breakpoint::{BreakpointResolver, ResolvedOptions};
use crate::config::{Pagination, SliderConfig, Transition};
use crate::gesture::{GestureRecognizer, NavIntent};
use crate::ids::TimerHandle;
use crate::index::{self, IndexChange};
use crate::inputs::{HostEvent, Inputs, Key, SliderCommand};
use crate::lazy::{ItemVisibility, LazyVisibilityTracker};
use crate::marquee::MarqueeDriver;
use crate::outputs::{Frame, Outputs, SliderEvent};
use crate::projection::SlideOffsetProjector;
use crate::provider::{ViewportProvider, VisibilityProvider};
use crate::tween::{Ease, OffsetTween};

/// Who asked for a navigation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavSource {
    Autoplay,
    Control,
    Swipe,
    Keyboard,
}

/// Mutable slider state as seen by the host.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderState {
    pub current_index: usize,
    pub is_autoplay_active: bool,
    pub is_dragging: bool,
    pub drag_start_x: f32,
    pub drag_delta_x: f32,
}

/// What the rendering layer needs to paint one slide.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideRenderProps {
    pub index: usize,
    pub is_active: bool,
    pub is_visible: bool,
    pub is_loaded: bool,
    pub is_error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aria: Option<SlideAria>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Lifecycle {
    Attached,
    Destroyed,
}

fn sanitize_width(width: f32) -> f32 {
    if width.is_finite() {
        width.max(0.0)
    } else {
        0.0
    }
}

fn sanitize_dt(dt_ms: f64) -> f64 {
    if dt_ms.is_finite() {
        dt_ms.max(0.0)
    } else {
        0.0
    }
}

/// One carousel instance. Instances share nothing.
#[derive(Debug)]
pub struct Slider {
    cfg: SliderConfig,
    breakpoints: BreakpointResolver,
    resolved: ResolvedOptions,
    viewport_width: f32,
    container_width_px: Option<f32>,
    item_count: usize,
    current: usize,

    autoplay: AutoplayScheduler,
    gesture: GestureRecognizer,
    marquee: Option<MarqueeDriver>,
    lazy: LazyVisibilityTracker,
    announcer: AccessibilityAnnouncer,

    tween: Option<OffsetTween>,
    displayed_offset: f32,

    pending: Vec<SliderEvent>,
    lifecycle: Lifecycle,
}

impl Slider {
    /// Attach a slider. Emits `Init` and starts autoplay when configured.
    pub fn new(config: SliderConfig, item_count: usize, viewport_width: f32) -> Self {
        let cfg = config.normalized();
        let breakpoints = BreakpointResolver::new(&cfg);
        let viewport_width = sanitize_width(viewport_width);
        let resolved = breakpoints.resolve(&cfg, viewport_width);
        let max = index::max_index(item_count, resolved.slides_to_show);
        let current = index::clamp_index(cfg.initial_slide.max(0) as usize, max);
        let marquee = cfg
            .marquee
            .enabled
            .then(|| MarqueeDriver::new(&cfg.marquee, item_count));

        let mut slider = Self {
            autoplay: AutoplayScheduler::new(&cfg.autoplay, marquee.is_some()),
            gesture: GestureRecognizer::new(
                cfg.swipe_threshold as f32,
                cfg.draggable && marquee.is_none(),
            ),
            lazy: LazyVisibilityTracker::new(&cfg.lazy_load),
            announcer: AccessibilityAnnouncer::new(&cfg.a11y),
            marquee,
            breakpoints,
            resolved,
            viewport_width,
            container_width_px: None,
            item_count,
            current,
            tween: None,
            displayed_offset: 0.0,
            pending: Vec::new(),
            lifecycle: Lifecycle::Attached,
            cfg,
        };
        slider.displayed_offset = slider.offset_percent();
        slider.pending.push(SliderEvent::Init);
        debug!(
            "slider attached: {} items, {} visible, index {}",
            item_count, slider.resolved.slides_to_show, current
        );
        if slider.cfg.autoplay.enabled {
            slider.start_autoplay();
        }
        slider
    }

    fn alive(&self, op: &str) -> bool {
        if self.lifecycle == Lifecycle::Destroyed {
            trace!("{op} ignored: slider destroyed");
            return false;
        }
        true
    }

    #[inline]
    fn push(&mut self, event: SliderEvent) {
        self.pending.push(event);
    }

    // ---------------------------------------------------------------------
    // Commands
    // ---------------------------------------------------------------------

    pub fn go_to_slide(&mut self, index: i64) {
        if self.alive("go_to_slide") {
            self.user_navigate(index, NavSource::Control);
        }
    }

    pub fn next_slide(&mut self) {
        if self.alive("next_slide") {
            let target = index::next_target(self.current, self.resolved.slides_to_scroll);
            self.user_navigate(target, NavSource::Control);
        }
    }

    pub fn prev_slide(&mut self) {
        if self.alive("prev_slide") {
            let target = index::prev_target(self.current, self.resolved.slides_to_scroll);
            self.user_navigate(target, NavSource::Control);
        }
    }

    /// Start (or restart) autoplay. `None` in marquee mode or after destroy.
    pub fn start_autoplay(&mut self) -> Option<TimerHandle> {
        if !self.alive("start_autoplay") {
            return None;
        }
        let handle = self.autoplay.start()?;
        self.push(SliderEvent::AutoplayStarted);
        Some(handle)
    }

    pub fn stop_autoplay(&mut self) {
        if self.alive("stop_autoplay") && self.autoplay.stop_current() {
            self.push(SliderEvent::AutoplayStopped);
        }
    }

    /// Stop only the run identified by `handle`.
    pub fn stop_autoplay_handle(&mut self, handle: TimerHandle) -> bool {
        if !self.alive("stop_autoplay_handle") || !self.autoplay.stop(handle) {
            return false;
        }
        self.push(SliderEvent::AutoplayStopped);
        true
    }

    /// Recompute options and offsets after an external layout change.
    pub fn update(&mut self) {
        if !self.alive("update") {
            return;
        }
        self.resolved = self.breakpoints.resolve(&self.cfg, self.viewport_width);
        self.clamp_to_bounds();
        self.snap();
    }

    /// Detach: cancel timers, observers, drags and animations. Idempotent.
    pub fn destroy(&mut self) {
        if self.lifecycle == Lifecycle::Destroyed {
            return;
        }
        self.autoplay.halt();
        self.gesture.cancel();
        self.lazy.disconnect();
        if let Some(marquee) = self.marquee.as_mut() {
            marquee.kill();
        }
        self.tween = None;
        self.lifecycle = Lifecycle::Destroyed;
        self.push(SliderEvent::Destroy);
        debug!("slider destroyed at index {}", self.current);
    }

    // ---------------------------------------------------------------------
    // Host events
    // ---------------------------------------------------------------------

    /// Viewport width changed; re-resolve breakpoints and clamp immediately.
    pub fn resize(&mut self, width: f32) {
        if !self.alive("resize") {
            return;
        }
        self.viewport_width = sanitize_width(width);
        self.reresolve();
    }

    pub fn sync_viewport(&mut self, provider: &dyn ViewportProvider) {
        self.resize(provider.viewport_width());
    }

    /// Measured track container width, enabling pixel offsets.
    pub fn set_container_width(&mut self, width: f32) {
        if self.alive("set_container_width") {
            self.container_width_px = (width.is_finite() && width > 0.0).then_some(width);
        }
    }

    /// Measured width of one marquee sequence.
    pub fn set_sequence_width(&mut self, width: f32) {
        if !self.alive("set_sequence_width") {
            return;
        }
        if let Some(marquee) = self.marquee.as_mut() {
            marquee.set_sequence_width(width);
        }
    }

    pub fn set_item_count(&mut self, count: usize) {
        if !self.alive("set_item_count") {
            return;
        }
        self.item_count = count;
        if let Some(marquee) = self.marquee.as_mut() {
            marquee.set_item_count(count);
        }
        self.reresolve();
    }

    /// Swap the whole configuration, keeping the index where still valid.
    pub fn set_config(&mut self, config: SliderConfig) {
        if !self.alive("set_config") {
            return;
        }
        let cfg = config.normalized();
        self.breakpoints = BreakpointResolver::new(&cfg);
        self.announcer = AccessibilityAnnouncer::new(&cfg.a11y);
        self.lazy.reconfigure(&cfg.lazy_load);

        self.marquee = match (self.marquee.take(), cfg.marquee.enabled) {
            (Some(mut marquee), true) => {
                marquee.reconfigure(&cfg.marquee);
                Some(marquee)
            }
            (None, true) => Some(MarqueeDriver::new(&cfg.marquee, self.item_count)),
            (_, false) => None,
        };
        self.gesture = GestureRecognizer::new(
            cfg.swipe_threshold as f32,
            cfg.draggable && self.marquee.is_none(),
        );

        let was_active = self.autoplay.state() != AutoplayState::Stopped;
        self.autoplay.reconfigure(&cfg.autoplay, self.marquee.is_some());
        self.cfg = cfg;
        if self.cfg.autoplay.enabled && self.marquee.is_none() {
            if let Some(handle) = self.autoplay.start() {
                if !was_active {
                    self.push(SliderEvent::AutoplayStarted);
                }
                debug!("autoplay re-armed after config swap ({handle:?})");
            }
        } else if was_active {
            self.push(SliderEvent::AutoplayStopped);
        }

        self.reresolve();
        self.snap();
    }

    pub fn pointer_down(&mut self, x: f32) {
        if self.alive("pointer_down") {
            self.gesture.start(x);
        }
    }

    pub fn pointer_move(&mut self, x: f32) {
        if self.alive("pointer_move") {
            self.gesture.move_to(x);
        }
    }

    /// Pointer up (or leave): classify the drag and navigate at most once.
    pub fn pointer_up(&mut self) {
        if !self.alive("pointer_up") {
            return;
        }
        let Some(swipe) = self.gesture.end() else {
            return;
        };
        let step = self.resolved.slides_to_scroll;
        let target = match swipe.intent(self.cfg.direction) {
            NavIntent::Next => index::next_target(self.current, step),
            NavIntent::Prev => index::prev_target(self.current, step),
        };
        self.user_navigate(target, NavSource::Swipe);
    }

    pub fn pointer_leave(&mut self) {
        self.pointer_up();
    }

    pub fn hover_enter(&mut self) {
        if !self.alive("hover_enter") {
            return;
        }
        self.autoplay.hover_enter();
        if let Some(marquee) = self.marquee.as_mut() {
            marquee.hover_enter();
        }
    }

    pub fn hover_leave(&mut self) {
        if !self.alive("hover_leave") {
            return;
        }
        self.autoplay.hover_leave();
        if let Some(marquee) = self.marquee.as_mut() {
            marquee.hover_leave();
        }
    }

    /// Freeze the marquee in place; `resume_marquee` continues from there.
    pub fn pause_marquee(&mut self) {
        if !self.alive("pause_marquee") {
            return;
        }
        if let Some(marquee) = self.marquee.as_mut() {
            marquee.pause();
        }
    }

    pub fn resume_marquee(&mut self) {
        if !self.alive("resume_marquee") {
            return;
        }
        if let Some(marquee) = self.marquee.as_mut() {
            marquee.resume();
        }
    }

    pub fn focus_in(&mut self) {
        if self.alive("focus_in") {
            self.autoplay.focus_in();
        }
    }

    pub fn focus_out(&mut self) {
        if self.alive("focus_out") {
            self.autoplay.focus_out();
        }
    }

    /// Visibility signal for one item; emits `Load` the first time only.
    pub fn intersect(&mut self, index: usize) {
        if !self.alive("intersect") {
            return;
        }
        self.lazy.track(index, self.current, self.resolved.slides_to_show);
        if self.lazy.intersect(index) {
            self.push(SliderEvent::Load { index });
        }
    }

    /// Query the provider for every item still waiting to load.
    pub fn poll_visibility(&mut self, provider: &mut dyn VisibilityProvider) -> Vec<usize> {
        if !self.alive("poll_visibility") {
            return Vec::new();
        }
        let margin = self.lazy.root_margin_px();
        let mut loaded = Vec::new();
        for index in self.lazy.pending() {
            if provider.is_visible(index, margin) && self.lazy.intersect(index) {
                self.push(SliderEvent::Load { index });
                loaded.push(index);
            }
        }
        loaded
    }

    /// Media failure reported by the rendering layer.
    pub fn handle_error(&mut self, index: usize, message: impl Into<String>) {
        if !self.alive("handle_error") {
            return;
        }
        self.lazy.handle_error(index);
        self.push(SliderEvent::Error {
            index,
            message: message.into(),
        });
    }

    /// Keyboard navigation. Returns whether the key was consumed.
    pub fn key(&mut self, key: Key) -> bool {
        if !self.alive("key") || !self.cfg.keyboard.enabled || self.marquee.is_some() {
            return false;
        }
        let target = match key {
            Key::ArrowLeft => index::prev_target(self.current, self.resolved.slides_to_scroll),
            Key::ArrowRight => index::next_target(self.current, self.resolved.slides_to_scroll),
            Key::Home => 0,
            Key::End => self.max_index() as i64,
            Key::PageUp if self.cfg.keyboard.page_up_down => {
                index::prev_target(self.current, self.resolved.slides_to_show)
            }
            Key::PageDown if self.cfg.keyboard.page_up_down => {
                index::next_target(self.current, self.resolved.slides_to_show)
            }
            Key::PageUp | Key::PageDown => return false,
        };
        self.user_navigate(target, NavSource::Keyboard);
        true
    }

    /// A slide was clicked. Marquee indices refer to the doubled sequence.
    pub fn slide_click(&mut self, index: usize) {
        if !self.alive("slide_click") || self.item_count == 0 {
            return;
        }
        let index = if self.marquee.is_some() {
            index % self.item_count
        } else {
            index
        };
        if index < self.item_count {
            self.push(SliderEvent::SlideClick { index });
        }
    }

    // ---------------------------------------------------------------------
    // Stepping
    // ---------------------------------------------------------------------

    /// Apply a batch of inputs, then advance timers and animations by `dt_ms`.
    pub fn step(&mut self, dt_ms: f64, inputs: Inputs) -> Outputs {
        for event in inputs.events {
            self.apply_event(event);
        }
        for command in inputs.commands {
            self.apply_command(command);
        }
        if self.alive("step") {
            self.advance(dt_ms);
            self.clamp_to_bounds();
        }
        Outputs {
            events: self.drain_events(),
            frame: self.frame(),
        }
    }

    /// Events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<SliderEvent> {
        mem::take(&mut self.pending)
    }

    fn apply_event(&mut self, event: HostEvent) {
        match event {
            HostEvent::Resize { width } => self.resize(width),
            HostEvent::ContainerWidth { width } => self.set_container_width(width),
            HostEvent::SequenceWidth { width } => self.set_sequence_width(width),
            HostEvent::ItemCount { count } => self.set_item_count(count),
            HostEvent::PointerDown { x } => self.pointer_down(x),
            HostEvent::PointerMove { x } => self.pointer_move(x),
            HostEvent::PointerUp => self.pointer_up(),
            HostEvent::PointerLeave => self.pointer_leave(),
            HostEvent::HoverEnter => self.hover_enter(),
            HostEvent::HoverLeave => self.hover_leave(),
            HostEvent::FocusIn => self.focus_in(),
            HostEvent::FocusOut => self.focus_out(),
            HostEvent::Intersect { index } => self.intersect(index),
            HostEvent::MediaError { index, message } => self.handle_error(index, message),
            HostEvent::Key { key } => {
                self.key(key);
            }
            HostEvent::SlideClick { index } => self.slide_click(index),
        }
    }

    fn apply_command(&mut self, command: SliderCommand) {
        match command {
            SliderCommand::GoTo { index } => self.go_to_slide(index),
            SliderCommand::Next => self.next_slide(),
            SliderCommand::Prev => self.prev_slide(),
            SliderCommand::StartAutoplay => {
                self.start_autoplay();
            }
            SliderCommand::StopAutoplay => self.stop_autoplay(),
            SliderCommand::Update => self.update(),
            SliderCommand::Destroy => self.destroy(),
        }
    }

    fn advance(&mut self, dt_ms: f64) {
        let dt = sanitize_dt(dt_ms);

        // Tween first so a transition started by this step's tick begins at zero.
        if let Some(tween) = self.tween.as_mut() {
            let done = tween.advance(dt);
            self.displayed_offset = tween.value();
            if done {
                let index = tween.target_index();
                self.tween = None;
                self.push(SliderEvent::TransitionEnd { index });
            }
        }

        if self.autoplay.advance(dt) {
            self.autoplay_tick();
        }

        if let Some(marquee) = self.marquee.as_mut() {
            marquee.advance(dt);
        }
    }

    fn autoplay_tick(&mut self) {
        let max = self.max_index();
        if self.autoplay.stops_on_last_slide() && self.current >= max {
            self.autoplay.halt();
            self.push(SliderEvent::AutoplayStopped);
            return;
        }
        let target = index::next_target(self.current, self.resolved.slides_to_scroll);
        trace!("{:?} navigation to {target}", NavSource::Autoplay);
        self.apply_navigation(target);
    }

    // ---------------------------------------------------------------------
    // Index mutation
    // ---------------------------------------------------------------------

    fn user_navigate(&mut self, requested: i64, source: NavSource) {
        if self.marquee.is_some() {
            trace!("{source:?} navigation ignored in marquee mode");
            return;
        }
        if self.autoplay.interaction() {
            self.push(SliderEvent::AutoplayStopped);
        }
        debug!("{source:?} navigation to {requested}");
        self.apply_navigation(requested);
    }

    fn apply_navigation(&mut self, requested: i64) -> bool {
        let max = self.max_index();
        let Some(change) = index::go_to(requested, self.current, max, self.resolved.loop_enabled)
        else {
            return false;
        };
        self.current = change.current;
        self.emit_change(change);
        self.begin_transition();
        self.lazy.refresh(self.current, self.resolved.slides_to_show);
        true
    }

    fn emit_change(&mut self, change: IndexChange) {
        self.push(SliderEvent::SlideChanged {
            current: change.current,
            previous: change.previous,
        });
        if change.reached_start {
            self.push(SliderEvent::ReachStart);
        }
        if change.reached_end {
            self.push(SliderEvent::ReachEnd);
        }
    }

    fn begin_transition(&mut self) {
        let target = self.offset_percent();
        match self.cfg.transition {
            Transition::Slide if self.cfg.speed > 0 => {
                self.tween = Some(OffsetTween::new(
                    self.displayed_offset,
                    target,
                    self.cfg.speed as f64,
                    Ease::Power2Out,
                    self.current,
                ));
            }
            _ => {
                self.tween = None;
                self.displayed_offset = target;
                self.push(SliderEvent::TransitionEnd {
                    index: self.current,
                });
            }
        }
    }

    /// Recompute resolved options and restore `current <= max_index`.
    fn reresolve(&mut self) {
        let resolved = self.breakpoints.resolve(&self.cfg, self.viewport_width);
        let changed = resolved != self.resolved;
        self.resolved = resolved;
        if self.clamp_to_bounds() || changed {
            self.snap();
        }
        self.lazy.refresh(self.current, self.resolved.slides_to_show);
    }

    fn clamp_to_bounds(&mut self) -> bool {
        let max = self.max_index();
        if self.current <= max {
            return false;
        }
        let change = IndexChange {
            previous: self.current,
            current: max,
            reached_start: max == 0,
            reached_end: true,
        };
        debug!("index {} clamped to {}", self.current, max);
        self.current = max;
        self.emit_change(change);
        true
    }

    fn snap(&mut self) {
        self.tween = None;
        self.displayed_offset = self.offset_percent();
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn total_slides(&self) -> usize {
        self.item_count
    }

    #[inline]
    pub fn max_index(&self) -> usize {
        index::max_index(self.item_count, self.resolved.slides_to_show)
    }

    #[inline]
    pub fn is_autoplay_running(&self) -> bool {
        self.autoplay.is_running()
    }

    #[inline]
    pub fn autoplay_state(&self) -> AutoplayState {
        self.autoplay.state()
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.lifecycle == Lifecycle::Destroyed
    }

    #[inline]
    pub fn is_marquee(&self) -> bool {
        self.marquee.is_some()
    }

    pub fn config(&self) -> &SliderConfig {
        &self.cfg
    }

    pub fn resolved_options(&self) -> &ResolvedOptions {
        &self.resolved
    }

    pub fn announcer(&self) -> &AccessibilityAnnouncer {
        &self.announcer
    }

    pub fn marquee(&self) -> Option<&MarqueeDriver> {
        self.marquee.as_ref()
    }

    /// Render order in marquee mode (items twice); plain order otherwise.
    pub fn render_sequence(&self) -> Vec<usize> {
        match &self.marquee {
            Some(marquee) => marquee.sequence().collect(),
            None => (0..self.item_count).collect(),
        }
    }

    pub fn projector(&self) -> SlideOffsetProjector {
        SlideOffsetProjector::new(&self.resolved, self.container_width_px)
    }

    /// Target track offset for the current index.
    pub fn offset_percent(&self) -> f32 {
        self.projector().offset_percent(self.current)
    }

    pub fn displayed_offset_percent(&self) -> f32 {
        self.displayed_offset
    }

    pub fn offset_px(&self) -> Option<f32> {
        self.projector()
            .offset_px(self.current, self.gesture.drag_delta_x())
    }

    pub fn slide_width_css(&self) -> String {
        self.projector().slide_width_css()
    }

    pub fn can_go_prev(&self) -> bool {
        self.marquee.is_none() && (self.resolved.loop_enabled || self.current > 0)
    }

    pub fn can_go_next(&self) -> bool {
        self.marquee.is_none() && (self.resolved.loop_enabled || self.current < self.max_index())
    }

    pub fn show_arrows(&self) -> bool {
        self.marquee.is_none()
            && self.cfg.arrows.enabled
            && matches!(self.cfg.pagination, Pagination::Arrows | Pagination::Both)
    }

    pub fn show_dots(&self) -> bool {
        self.marquee.is_none()
            && self.cfg.dots.enabled
            && matches!(self.cfg.pagination, Pagination::Dots | Pagination::Both)
    }

    /// One dot per reachable index.
    pub fn dot_count(&self) -> usize {
        if self.item_count == 0 {
            0
        } else {
            self.max_index() + 1
        }
    }

    pub fn announcement(&self) -> Option<LiveRegion> {
        self.announcer
            .live_region(self.current, self.item_count, self.marquee.is_some())
    }

    /// Label for the previous arrow at the current index.
    pub fn prev_label(&self) -> &str {
        self.announcer.prev_label(self.current, self.resolved.loop_enabled)
    }

    /// Label for the next arrow at the current index.
    pub fn next_label(&self) -> &str {
        self.announcer
            .next_label(self.current, self.max_index(), self.resolved.loop_enabled)
    }

    pub fn bullet_label(&self, index: usize) -> String {
        self.announcer.bullet_label(index)
    }

    pub fn container_aria(&self) -> Option<ContainerAria> {
        self.announcer.container()
    }

    pub fn slide_aria(&self, index: usize) -> Option<SlideAria> {
        if self.marquee.is_some() {
            return None;
        }
        self.announcer.slide(
            index,
            self.current,
            self.resolved.slides_to_show,
            self.item_count,
            self.cfg.transition,
        )
    }

    pub fn item_visibility(&self, index: usize) -> ItemVisibility {
        self.lazy.get(index)
    }

    /// Props for one slide; the first call for an index registers it with the
    /// lazy-load tracker.
    pub fn render_slide(&mut self, index: usize) -> SlideRenderProps {
        let visibility = if self.is_destroyed() {
            self.lazy.get(index)
        } else {
            self.lazy
                .track(index, self.current, self.resolved.slides_to_show)
        };
        let is_active = self.marquee.is_none()
            && index::is_active(index, self.current, self.resolved.slides_to_show);
        SlideRenderProps {
            index,
            is_active,
            is_visible: visibility.is_loaded && is_active,
            is_loaded: visibility.is_loaded,
            is_error: visibility.is_error,
            aria: self.slide_aria(index),
        }
    }

    pub fn state(&self) -> SliderState {
        SliderState {
            current_index: self.current,
            is_autoplay_active: self.autoplay.is_running(),
            is_dragging: self.gesture.is_dragging(),
            drag_start_x: self.gesture.drag_start_x(),
            drag_delta_x: self.gesture.drag_delta_x(),
        }
    }

    pub fn frame(&self) -> Frame {
        Frame {
            state: self.state(),
            max_index: self.max_index(),
            total_slides: self.item_count,
            autoplay: self.autoplay.state(),
            offset_percent: self.offset_percent(),
            displayed_offset_percent: self.displayed_offset,
            offset_px: self.offset_px(),
            marquee_offset_percent: self.marquee.as_ref().map(MarqueeDriver::offset_percent),
            breakpoint: self.resolved.breakpoint.map(|b| b.to_string()),
            destroyed: self.is_destroyed(),
        }
    }
}

//! Slider configuration (immutable per mount, swapped wholesale).
//!
//! Field names follow the camelCase option names hosts already use
//! (`slidesToShow`, `autoplay.delay`, `lazyLoad.rootMargin`, ...). Every field
//! is optional on the wire and falls back to the defaults below.

use hashbrown::HashMap;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::SliderError;

pub const DEFAULT_GAP_PX: f64 = 16.0;
pub const DEFAULT_SPEED_MS: i64 = 500;
pub const DEFAULT_AUTOPLAY_DELAY_MS: i64 = 3000;
pub const DEFAULT_MARQUEE_SPEED: f64 = 50.0;
pub const DEFAULT_ROOT_MARGIN_PX: f64 = 200.0;
pub const DEFAULT_PRELOAD_WINDOW: i64 = 1;
pub const DEFAULT_SWIPE_THRESHOLD_PX: f64 = 50.0;
/// Pixel size used for `rem`/`em` lengths; the engine never measures fonts.
pub const ROOT_FONT_SIZE_PX: f32 = 16.0;

/// A number of pixels or a CSS length string (`"24px"`, `"1.5rem"`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Length {
    Px(f64),
    Css(String),
}

impl Default for Length {
    fn default() -> Self {
        Length::Px(DEFAULT_GAP_PX)
    }
}

impl Length {
    /// Pixel value of this length. Unparseable strings count as 0px.
    pub fn to_px(&self) -> f32 {
        match self {
            Length::Px(v) if v.is_finite() => *v as f32,
            Length::Px(_) => 0.0,
            Length::Css(s) => parse_css_length(s).unwrap_or_else(|e| {
                warn!("{e}; using 0px");
                0.0
            }),
        }
    }

    /// CSS text for this length (numbers are pixels).
    pub fn to_css(&self) -> String {
        match self {
            Length::Px(v) => format!("{v}px"),
            Length::Css(s) => s.clone(),
        }
    }
}

/// Parse a CSS length into pixels. Unitless and `px` values are taken as-is;
/// `rem`/`em` are scaled by [`ROOT_FONT_SIZE_PX`].
pub fn parse_css_length(text: &str) -> Result<f32, SliderError> {
    let trimmed = text.trim();
    let split = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
        .unwrap_or(trimmed.len());
    let (number, unit) = trimmed.split_at(split);
    let value: f32 = number
        .parse()
        .map_err(|_| SliderError::InvalidLength(text.to_string()))?;
    if !value.is_finite() {
        return Err(SliderError::InvalidLength(text.to_string()));
    }
    match unit.trim().to_ascii_lowercase().as_str() {
        "" | "px" => Ok(value),
        "rem" | "em" => Ok(value * ROOT_FONT_SIZE_PX),
        _ => Err(SliderError::InvalidLength(text.to_string())),
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    #[default]
    Slide,
    Fade,
    #[serde(rename = "none")]
    Instant,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pagination {
    Arrows,
    Dots,
    #[default]
    Both,
    #[serde(rename = "none")]
    Hidden,
}

/// Superset of arrow placements used by the standalone and in-app sliders.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowPosition {
    #[default]
    Inside,
    Outside,
    Bottom,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarqueeDirection {
    #[default]
    Left,
    Right,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Politeness {
    #[default]
    Polite,
    Assertive,
    Off,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArrowOptions {
    pub enabled: bool,
    pub position: ArrowPosition,
    pub show_on_hover: bool,
}

impl Default for ArrowOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            position: ArrowPosition::Inside,
            show_on_hover: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DotsOptions {
    pub enabled: bool,
    pub clickable: bool,
}

impl Default for DotsOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            clickable: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AutoplayOptions {
    pub enabled: bool,
    #[serde(rename = "delay", alias = "delayMs")]
    pub delay_ms: i64,
    pub pause_on_hover: bool,
    pub pause_on_focus: bool,
    pub stop_on_interaction: bool,
    pub stop_on_last_slide: bool,
    /// Pause for this long after a manual navigation, then resume.
    pub hold_after_interaction: Option<i64>,
}

impl Default for AutoplayOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            delay_ms: DEFAULT_AUTOPLAY_DELAY_MS,
            pause_on_hover: true,
            pause_on_focus: true,
            stop_on_interaction: false,
            stop_on_last_slide: false,
            hold_after_interaction: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarqueeOptions {
    pub enabled: bool,
    /// Pixels per second once the sequence width is known.
    pub speed: f64,
    pub pause_on_hover: bool,
    pub direction: MarqueeDirection,
    pub gap: Option<Length>,
}

impl Default for MarqueeOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            speed: DEFAULT_MARQUEE_SPEED,
            pause_on_hover: true,
            direction: MarqueeDirection::Left,
            gap: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LazyLoadOptions {
    pub enabled: bool,
    #[serde(alias = "rootMarginPx")]
    pub root_margin: Length,
    pub threshold: f64,
    /// Items eagerly loaded on each side of the visible range.
    pub preload_window: i64,
}

impl Default for LazyLoadOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            root_margin: Length::Px(DEFAULT_ROOT_MARGIN_PX),
            threshold: 0.0,
            preload_window: DEFAULT_PRELOAD_WINDOW,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeyboardOptions {
    pub enabled: bool,
    pub only_in_viewport: bool,
    pub page_up_down: bool,
}

impl Default for KeyboardOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            only_in_viewport: true,
            page_up_down: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct A11yOptions {
    pub enabled: bool,
    pub prev_slide_message: String,
    pub next_slide_message: String,
    pub first_slide_message: String,
    pub last_slide_message: String,
    /// Template with a `{{index}}` placeholder (1-based).
    pub pagination_bullet_message: String,
    pub slide_role: String,
    pub container_role: String,
    pub container_role_description: String,
    pub item_role_description: String,
    pub container_label: String,
    pub live_region: bool,
    pub live_region_politeness: Politeness,
}

impl Default for A11yOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            prev_slide_message: "Previous slide".into(),
            next_slide_message: "Next slide".into(),
            first_slide_message: "This is the first slide".into(),
            last_slide_message: "This is the last slide".into(),
            pagination_bullet_message: "Go to slide {{index}}".into(),
            slide_role: "group".into(),
            container_role: "region".into(),
            container_role_description: "carousel".into(),
            item_role_description: "slide".into(),
            container_label: "Slider".into(),
            live_region: true,
            live_region_politeness: Politeness::Polite,
        }
    }
}

/// Partial options applied at or above one breakpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BreakpointOverride {
    pub slides_to_show: Option<i64>,
    pub slides_to_scroll: Option<i64>,
    pub gap: Option<Length>,
    #[serde(rename = "loop")]
    pub loop_enabled: Option<bool>,
    pub center_mode: Option<bool>,
}

/// Full option set. `arrows.position`, `arrows.showOnHover`, `dots.clickable`,
/// `keyboard.onlyInViewport`, `lazyLoad.threshold` and `marquee.gap` are kept
/// for the rendering layer and never read by the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SliderConfig {
    // Display
    pub slides_to_show: i64,
    pub slides_to_scroll: i64,
    pub gap: Length,
    pub center_mode: bool,
    pub initial_slide: i64,

    // Navigation
    pub pagination: Pagination,
    pub arrows: ArrowOptions,
    pub dots: DotsOptions,

    // Behavior
    pub autoplay: AutoplayOptions,
    pub marquee: MarqueeOptions,
    #[serde(rename = "loop")]
    pub loop_enabled: bool,
    /// Transition duration in milliseconds.
    pub speed: i64,
    pub direction: Direction,
    pub draggable: bool,
    pub swipe_threshold: f64,
    pub transition: Transition,

    // Features
    pub lazy_load: LazyLoadOptions,
    pub keyboard: KeyboardOptions,
    pub a11y: A11yOptions,

    /// Keyed by `sm`/`md`/`lg`/`xl`/`2xl` or a numeric min-width.
    pub responsive: HashMap<String, BreakpointOverride>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            slides_to_show: 1,
            slides_to_scroll: 1,
            gap: Length::default(),
            center_mode: false,
            initial_slide: 0,
            pagination: Pagination::Both,
            arrows: ArrowOptions::default(),
            dots: DotsOptions::default(),
            autoplay: AutoplayOptions::default(),
            marquee: MarqueeOptions::default(),
            loop_enabled: true,
            speed: DEFAULT_SPEED_MS,
            direction: Direction::Ltr,
            draggable: true,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD_PX,
            transition: Transition::Slide,
            lazy_load: LazyLoadOptions::default(),
            keyboard: KeyboardOptions::default(),
            a11y: A11yOptions::default(),
            responsive: HashMap::new(),
        }
    }
}

impl SliderConfig {
    /// Parse a JSON options document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SliderError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Copy of this config with invalid numeric options replaced by safe
    /// defaults. Each correction is logged at warn level.
    pub fn normalized(&self) -> Self {
        let mut cfg = self.clone();
        if cfg.slides_to_show < 1 {
            warn!("slidesToShow {} < 1; using 1", cfg.slides_to_show);
            cfg.slides_to_show = 1;
        }
        if cfg.slides_to_scroll < 1 {
            warn!("slidesToScroll {} < 1; using 1", cfg.slides_to_scroll);
            cfg.slides_to_scroll = 1;
        }
        if cfg.initial_slide < 0 {
            warn!("initialSlide {} < 0; using 0", cfg.initial_slide);
            cfg.initial_slide = 0;
        }
        if cfg.speed < 0 {
            warn!("speed {} < 0; using {DEFAULT_SPEED_MS}", cfg.speed);
            cfg.speed = DEFAULT_SPEED_MS;
        }
        if !(cfg.swipe_threshold.is_finite() && cfg.swipe_threshold > 0.0) {
            warn!(
                "swipeThreshold {} invalid; using {DEFAULT_SWIPE_THRESHOLD_PX}",
                cfg.swipe_threshold
            );
            cfg.swipe_threshold = DEFAULT_SWIPE_THRESHOLD_PX;
        }
        if cfg.autoplay.delay_ms <= 0 {
            warn!(
                "autoplay.delay {} <= 0; using {DEFAULT_AUTOPLAY_DELAY_MS}",
                cfg.autoplay.delay_ms
            );
            cfg.autoplay.delay_ms = DEFAULT_AUTOPLAY_DELAY_MS;
        }
        if let Some(hold) = cfg.autoplay.hold_after_interaction {
            if hold <= 0 {
                warn!("autoplay.holdAfterInteraction {hold} <= 0; disabling hold");
                cfg.autoplay.hold_after_interaction = None;
            }
        }
        if !(cfg.marquee.speed.is_finite() && cfg.marquee.speed > 0.0) {
            warn!(
                "marquee.speed {} invalid; using {DEFAULT_MARQUEE_SPEED}",
                cfg.marquee.speed
            );
            cfg.marquee.speed = DEFAULT_MARQUEE_SPEED;
        }
        if cfg.marquee.enabled && cfg.autoplay.enabled {
            warn!("marquee and autoplay are mutually exclusive; disabling autoplay");
            cfg.autoplay.enabled = false;
        }
        if cfg.lazy_load.preload_window < 0 {
            warn!(
                "lazyLoad.preloadWindow {} < 0; using {DEFAULT_PRELOAD_WINDOW}",
                cfg.lazy_load.preload_window
            );
            cfg.lazy_load.preload_window = DEFAULT_PRELOAD_WINDOW;
        }
        for (key, ov) in cfg.responsive.iter_mut() {
            if matches!(ov.slides_to_show, Some(n) if n < 1) {
                warn!("responsive.{key}.slidesToShow < 1; ignoring override");
                ov.slides_to_show = None;
            }
            if matches!(ov.slides_to_scroll, Some(n) if n < 1) {
                warn!("responsive.{key}.slidesToScroll < 1; ignoring override");
                ov.slides_to_scroll = None;
            }
        }
        cfg
    }
}

//! Breakpoint resolution: viewport width → tier → effective options.
//!
//! Tiers are min-width thresholds (mobile first). The matched tier is the
//! largest one whose minimum is at or below the viewport width. Each tunable
//! resolves as matched-tier override → base config → hard default; there is
//! no cascade through smaller tiers and no interpolation.

use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::config::{BreakpointOverride, Length, SliderConfig};
use crate::error::SliderError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BreakpointKey {
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
    /// Custom min-width in pixels.
    Custom(u32),
}

/// Standard tiers in ascending order.
pub const STANDARD_BREAKPOINTS: [BreakpointKey; 5] = [
    BreakpointKey::Sm,
    BreakpointKey::Md,
    BreakpointKey::Lg,
    BreakpointKey::Xl,
    BreakpointKey::Xxl,
];

impl BreakpointKey {
    pub fn min_width(self) -> u32 {
        match self {
            BreakpointKey::Sm => 640,
            BreakpointKey::Md => 768,
            BreakpointKey::Lg => 1024,
            BreakpointKey::Xl => 1280,
            BreakpointKey::Xxl => 1536,
            BreakpointKey::Custom(px) => px,
        }
    }
}

impl FromStr for BreakpointKey {
    type Err = SliderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "sm" => Ok(BreakpointKey::Sm),
            "md" => Ok(BreakpointKey::Md),
            "lg" => Ok(BreakpointKey::Lg),
            "xl" => Ok(BreakpointKey::Xl),
            "2xl" => Ok(BreakpointKey::Xxl),
            other => other
                .parse::<u32>()
                .map(BreakpointKey::Custom)
                .map_err(|_| SliderError::UnknownBreakpoint(s.to_string())),
        }
    }
}

impl fmt::Display for BreakpointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakpointKey::Sm => f.write_str("sm"),
            BreakpointKey::Md => f.write_str("md"),
            BreakpointKey::Lg => f.write_str("lg"),
            BreakpointKey::Xl => f.write_str("xl"),
            BreakpointKey::Xxl => f.write_str("2xl"),
            BreakpointKey::Custom(px) => write!(f, "{px}"),
        }
    }
}

/// Options after breakpoint resolution. Derived, never stored next to the
/// config it came from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolvedOptions {
    pub breakpoint: Option<BreakpointKey>,
    pub slides_to_show: usize,
    pub slides_to_scroll: usize,
    pub gap: Length,
    pub gap_px: f32,
    pub loop_enabled: bool,
    pub center_mode: bool,
}

/// Ordered tier table built once per config.
#[derive(Clone, Debug, Default)]
pub struct BreakpointResolver {
    tiers: Vec<(BreakpointKey, BreakpointOverride)>,
}

impl BreakpointResolver {
    pub fn new(config: &SliderConfig) -> Self {
        let mut tiers: Vec<(BreakpointKey, BreakpointOverride)> = STANDARD_BREAKPOINTS
            .iter()
            .map(|key| {
                let ov = config
                    .responsive
                    .get(key.to_string().as_str())
                    .cloned()
                    .unwrap_or_default();
                (*key, ov)
            })
            .collect();

        let mut custom: Vec<(BreakpointKey, BreakpointOverride)> = Vec::new();
        for (name, ov) in config.responsive.iter() {
            match name.parse::<BreakpointKey>() {
                Ok(BreakpointKey::Custom(px)) => custom.push((BreakpointKey::Custom(px), ov.clone())),
                Ok(_) => {}
                Err(e) => warn!("{e}; ignoring responsive entry"),
            }
        }
        // hashbrown iteration order is arbitrary; keep the table deterministic.
        custom.sort_by_key(|(key, _)| key.min_width());
        tiers.extend(custom);
        // Stable: at equal widths a custom tier sorts after the standard one and wins.
        tiers.sort_by_key(|(key, _)| key.min_width());
        Self { tiers }
    }

    /// Largest tier whose min-width is at or below `width`.
    pub fn tier_for(&self, width: f32) -> Option<BreakpointKey> {
        self.matched(width).map(|(key, _)| *key)
    }

    fn matched(&self, width: f32) -> Option<&(BreakpointKey, BreakpointOverride)> {
        if !width.is_finite() {
            return None;
        }
        self.tiers
            .iter()
            .rev()
            .find(|(key, _)| key.min_width() as f32 <= width)
    }

    /// Resolve every tunable for the given viewport width.
    pub fn resolve(&self, config: &SliderConfig, width: f32) -> ResolvedOptions {
        let matched = self.matched(width);
        let ov = matched.map(|(_, ov)| ov);

        let slides_to_show = ov
            .and_then(|o| o.slides_to_show)
            .unwrap_or(config.slides_to_show)
            .max(1) as usize;
        let slides_to_scroll = ov
            .and_then(|o| o.slides_to_scroll)
            .unwrap_or(config.slides_to_scroll)
            .max(1) as usize;
        let gap = ov
            .and_then(|o| o.gap.clone())
            .unwrap_or_else(|| config.gap.clone());
        let gap_px = gap.to_px().max(0.0);
        let loop_enabled = ov
            .and_then(|o| o.loop_enabled)
            .unwrap_or(config.loop_enabled);
        let center_mode = ov
            .and_then(|o| o.center_mode)
            .unwrap_or(config.center_mode);

        ResolvedOptions {
            breakpoint: matched.map(|(key, _)| *key),
            slides_to_show,
            slides_to_scroll,
            gap,
            gap_px,
            loop_enabled,
            center_mode,
        }
    }
}

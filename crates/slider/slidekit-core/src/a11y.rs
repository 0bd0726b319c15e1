//! Assistive state: live-region text and ARIA attributes.

use serde::{Deserialize, Serialize};

use crate::config::{A11yOptions, Politeness, Transition};
use crate::index::is_active;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideAria {
    pub role: String,
    pub role_description: String,
    pub label: String,
    pub hidden: bool,
    pub tab_index: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerAria {
    pub role: String,
    pub role_description: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveRegion {
    pub text: String,
    pub politeness: Politeness,
}

#[derive(Clone, Debug, Default)]
pub struct AccessibilityAnnouncer {
    opts: A11yOptions,
}

fn slide_label(index: usize, total: usize) -> String {
    format!("Slide {} of {}", index + 1, total)
}

impl AccessibilityAnnouncer {
    pub fn new(opts: &A11yOptions) -> Self {
        Self { opts: opts.clone() }
    }

    /// Live-region content; `None` in marquee mode or when disabled.
    pub fn live_region(&self, current: usize, total: usize, marquee: bool) -> Option<LiveRegion> {
        if marquee || !self.opts.enabled || !self.opts.live_region {
            return None;
        }
        Some(LiveRegion {
            text: slide_label(current, total),
            politeness: self.opts.live_region_politeness,
        })
    }

    pub fn container(&self) -> Option<ContainerAria> {
        self.opts.enabled.then(|| ContainerAria {
            role: self.opts.container_role.clone(),
            role_description: self.opts.container_role_description.clone(),
            label: self.opts.container_label.clone(),
        })
    }

    /// Per-slide attributes. Only slides in the visible range are focusable;
    /// with a fade transition the others are also hidden.
    pub fn slide(
        &self,
        index: usize,
        current: usize,
        slides_to_show: usize,
        total: usize,
        transition: Transition,
    ) -> Option<SlideAria> {
        if !self.opts.enabled {
            return None;
        }
        let active = is_active(index, current, slides_to_show);
        Some(SlideAria {
            role: self.opts.slide_role.clone(),
            role_description: self.opts.item_role_description.clone(),
            label: slide_label(index, total),
            hidden: transition == Transition::Fade && !active,
            tab_index: if active { 0 } else { -1 },
        })
    }

    /// Label for the "previous" control; at the start of a non-looping
    /// slider it announces the first slide instead.
    pub fn prev_label(&self, current: usize, loop_enabled: bool) -> &str {
        if !loop_enabled && current == 0 {
            &self.opts.first_slide_message
        } else {
            &self.opts.prev_slide_message
        }
    }

    pub fn next_label(&self, current: usize, max_index: usize, loop_enabled: bool) -> &str {
        if !loop_enabled && current >= max_index {
            &self.opts.last_slide_message
        } else {
            &self.opts.next_slide_message
        }
    }

    /// Pagination bullet label, 1-based.
    pub fn bullet_label(&self, index: usize) -> String {
        self.opts
            .pagination_bullet_message
            .replace("{{index}}", &(index + 1).to_string())
    }
}

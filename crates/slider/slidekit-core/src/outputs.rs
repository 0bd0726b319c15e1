//! Output contracts from the engine.
//!
//! Outputs carry the lifecycle events emitted since the previous drain and a
//! snapshot of the derived display state. Adapters forward events to host
//! callbacks and apply the frame to the track.

use serde::{Deserialize, Serialize};

use crate::autoplay::AutoplayState;
use crate::engine::SliderState;

/// Discrete signals, in emission order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
#[non_exhaustive]
pub enum SliderEvent {
    Init,
    Destroy,
    SlideChanged { current: usize, previous: usize },
    ReachStart,
    ReachEnd,
    SlideClick { index: usize },
    Load { index: usize },
    Error { index: usize, message: String },
    AutoplayStarted,
    AutoplayStopped,
    TransitionEnd { index: usize },
}

/// Derived display state for one step.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub state: SliderState,
    pub max_index: usize,
    pub total_slides: usize,
    pub autoplay: AutoplayState,
    /// Target track offset (`xPercent`) for the current index.
    pub offset_percent: f32,
    /// Offset the track shows right now (mid-transition it lags the target).
    pub displayed_offset_percent: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_px: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marquee_offset_percent: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakpoint: Option<String>,
    pub destroyed: bool,
}

/// Returned by `Slider::step()`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub events: Vec<SliderEvent>,
    pub frame: Frame,
}

impl Outputs {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Indices reported by `SlideChanged`, in order.
    pub fn slide_changes(&self) -> Vec<usize> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SliderEvent::SlideChanged { current, .. } => Some(*current),
                _ => None,
            })
            .collect()
    }
}

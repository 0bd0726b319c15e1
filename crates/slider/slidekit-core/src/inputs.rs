//! Input contracts for the engine.
//!
//! Adapters batch host events and commands into [`Inputs`] and pass them to
//! `Slider::step()`. Events are applied first, then commands, each in order;
//! every navigation goes through the same index path, so the last request
//! in a batch wins.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Inputs {
    /// Host events applied before commands.
    #[serde(default)]
    pub events: Vec<HostEvent>,
    /// Imperative commands applied after events.
    #[serde(default)]
    pub commands: Vec<SliderCommand>,
}

impl Inputs {
    pub fn event(event: HostEvent) -> Self {
        Self {
            events: vec![event],
            commands: Vec::new(),
        }
    }

    pub fn command(command: SliderCommand) -> Self {
        Self {
            events: Vec::new(),
            commands: vec![command],
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SliderCommand {
    GoTo { index: i64 },
    Next,
    Prev,
    StartAutoplay,
    StopAutoplay,
    Update,
    Destroy,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum HostEvent {
    Resize { width: f32 },
    ContainerWidth { width: f32 },
    SequenceWidth { width: f32 },
    ItemCount { count: usize },
    PointerDown { x: f32 },
    PointerMove { x: f32 },
    PointerUp,
    PointerLeave,
    HoverEnter,
    HoverLeave,
    FocusIn,
    FocusOut,
    Intersect { index: usize },
    MediaError { index: usize, message: String },
    Key { key: Key },
    SlideClick { index: usize },
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,
}

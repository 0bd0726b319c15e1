//! Slidekit Core (rendering-agnostic)
//!
//! A headless navigation/animation engine for paginated, scrollable item
//! collections. The engine consumes an item count, a [`SliderConfig`], the
//! viewport width and pointer/hover/visibility events from the host; it
//! exposes navigation commands, derived display state and lifecycle events.
//! Painting a slide is left to the adapter (wasm, native UI, tests).

pub mod a11y;
pub mod autoplay;
pub mod breakpoint;
pub mod config;
pub mod engine;
pub mod error;
pub mod gesture;
pub mod ids;
pub mod index;
pub mod inputs;
pub mod lazy;
pub mod marquee;
pub mod outputs;
pub mod projection;
pub mod provider;
pub mod tween;

// Re-exports for consumers (adapters)
pub use a11y::{AccessibilityAnnouncer, ContainerAria, LiveRegion, SlideAria};
pub use autoplay::{AutoplayScheduler, AutoplayState};
pub use breakpoint::{BreakpointKey, BreakpointResolver, ResolvedOptions};
pub use config::{
    A11yOptions, ArrowOptions, ArrowPosition, AutoplayOptions, BreakpointOverride, Direction,
    DotsOptions, KeyboardOptions, LazyLoadOptions, Length, MarqueeDirection, MarqueeOptions,
    Pagination, Politeness, SliderConfig, Transition,
};
pub use engine::{NavSource, SlideRenderProps, Slider, SliderState};
pub use error::SliderError;
pub use gesture::{GestureRecognizer, NavIntent, Swipe};
pub use ids::TimerHandle;
pub use index::IndexChange;
pub use inputs::{HostEvent, Inputs, Key, SliderCommand};
pub use lazy::{ItemVisibility, LazyVisibilityTracker};
pub use marquee::MarqueeDriver;
pub use outputs::{Frame, Outputs, SliderEvent};
pub use projection::SlideOffsetProjector;
pub use provider::{StaticViewport, ViewportProvider, VisibilityProvider};
pub use tween::{Ease, OffsetTween};

//! Host capabilities injected into the engine instead of global DOM access.

/// Reports the current viewport width.
pub trait ViewportProvider {
    fn viewport_width(&self) -> f32;
}

/// Answers whether an item intersects the viewport expanded by `root_margin_px`.
/// Adapters implement this over IntersectionObserver (web) or layout rects.
pub trait VisibilityProvider {
    fn is_visible(&mut self, index: usize, root_margin_px: f32) -> bool;
}

/// Fixed-width viewport for headless hosts and tests.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StaticViewport(pub f32);

impl ViewportProvider for StaticViewport {
    fn viewport_width(&self) -> f32 {
        self.0
    }
}

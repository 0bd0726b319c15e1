//! Track offset projection: index → translation.

use crate::breakpoint::ResolvedOptions;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SlideOffsetProjector {
    slides_to_show: usize,
    gap_px: f32,
    center_mode: bool,
    container_width_px: Option<f32>,
}

impl SlideOffsetProjector {
    pub fn new(opts: &ResolvedOptions, container_width_px: Option<f32>) -> Self {
        Self {
            slides_to_show: opts.slides_to_show.max(1),
            gap_px: opts.gap_px.max(0.0),
            center_mode: opts.center_mode,
            container_width_px: container_width_px.filter(|w| w.is_finite() && *w > 0.0),
        }
    }

    /// Track translation in percent of the viewport (`xPercent`).
    #[inline]
    pub fn offset_percent(&self, index: usize) -> f32 {
        -(index as f32 * (100.0 / self.slides_to_show as f32))
    }

    /// CSS width of one slide, leaving room for the gaps between visible slides.
    pub fn slide_width_css(&self) -> String {
        let gaps = self.gap_px * (self.slides_to_show - 1) as f32;
        format!("calc((100% - {gaps}px) / {})", self.slides_to_show)
    }

    pub fn slide_width_px(&self) -> Option<f32> {
        let container = self.container_width_px?;
        let gaps = self.gap_px * (self.slides_to_show - 1) as f32;
        Some(((container - gaps) / self.slides_to_show as f32).max(0.0))
    }

    /// Track translation in pixels, including a live drag displacement.
    pub fn offset_px(&self, index: usize, drag_delta_px: f32) -> Option<f32> {
        let container = self.container_width_px?;
        let slide = self.slide_width_px()?;
        let mut offset = -(index as f32) * (slide + self.gap_px) + drag_delta_px;
        if self.center_mode {
            offset += (container - slide) / 2.0;
        }
        Some(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Length;

    fn opts(show: usize, gap: f32, center: bool) -> ResolvedOptions {
        ResolvedOptions {
            breakpoint: None,
            slides_to_show: show,
            slides_to_scroll: 1,
            gap: Length::Px(gap as f64),
            gap_px: gap,
            loop_enabled: true,
            center_mode: center,
        }
    }

    #[test]
    fn percent_offsets() {
        let p = SlideOffsetProjector::new(&opts(4, 16.0, false), None);
        assert_eq!(p.offset_percent(0), 0.0);
        assert_eq!(p.offset_percent(2), -50.0);
        assert_eq!(p.slide_width_css(), "calc((100% - 48px) / 4)");
        assert_eq!(p.offset_px(1, 0.0), None);
    }

    #[test]
    fn pixel_offsets_with_drag_and_center() {
        let p = SlideOffsetProjector::new(&opts(2, 20.0, false), Some(420.0));
        assert_eq!(p.slide_width_px(), Some(200.0));
        assert_eq!(p.offset_px(1, 0.0), Some(-220.0));
        assert_eq!(p.offset_px(1, 30.0), Some(-190.0));

        let c = SlideOffsetProjector::new(&opts(1, 0.0, true), Some(400.0));
        assert_eq!(c.offset_px(0, 0.0), Some(0.0));
    }
}

//! Scroll-coupled image expansion
//!
//! As its container transits the viewport, an image grows from a boxed
//! width with rounded corners to full viewport width with square corners.
//! The style is a pure function of progress and viewport width.

use crate::primitives::ScrollProgress;
use crate::primitives::opacity::trim_float;

/// Bounds for the boxed (starting) width and the starting corner radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpandRange {
    /// Horizontal gutter subtracted from the viewport width
    pub gutter: f32,
    pub min_width: f32,
    pub max_width: f32,
    pub start_radius: f32,
}

impl ExpandRange {
    pub const STORY: Self = Self {
        gutter: 48.0,
        min_width: 320.0,
        max_width: 1140.0,
        start_radius: 24.0,
    };

    /// Width before any scroll progress: `clamp(vw - gutter, min, max)`
    pub fn start_width(&self, viewport_width: f32) -> f32 {
        (viewport_width - self.gutter).clamp(self.min_width, self.max_width)
    }

    pub fn style_at(&self, progress: ScrollProgress, viewport_width: f32) -> ExpandStyle {
        let start = self.start_width(viewport_width);
        ExpandStyle {
            width: progress.map(start, viewport_width),
            radius: self.start_radius * (1.0 - progress.value()),
        }
    }
}

impl Default for ExpandRange {
    fn default() -> Self {
        Self::STORY
    }
}

/// Derived container style for one scroll/resize tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpandStyle {
    /// px
    pub width: f32,
    /// px
    pub radius: f32,
}

impl ExpandStyle {
    pub fn to_css(&self) -> String {
        format!(
            "width: {}px; border-radius: {}px;",
            trim_float(self.width),
            trim_float(self.radius)
        )
    }
}

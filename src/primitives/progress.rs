//! ScrollProgress - how far an element has travelled through the viewport
//!
//! 0.0 when the element's top edge meets the viewport's bottom edge,
//! 1.0 when its bottom edge meets the viewport's top edge.

use super::bounded::bounded_f32;

bounded_f32!(ScrollProgress, 0.0, 1.0);

impl ScrollProgress {
    pub const START: Self = Self::new(0.0);
    pub const END: Self = Self::new(1.0);

    /// Progress from an element's client rect and the viewport height.
    ///
    /// `top` is the element's top relative to the viewport (as returned by
    /// `getBoundingClientRect`). The transit range is `viewport_height + height`
    /// pixels long; a degenerate range yields `START`.
    pub fn from_geometry(top: f64, height: f64, viewport_height: f64) -> Self {
        let range = viewport_height + height;
        if range <= 0.0 || !range.is_finite() {
            return Self::START;
        }
        Self::clamped(((viewport_height - top) / range) as f32)
    }

    /// Linear map onto `[from, to]`
    pub fn map(&self, from: f32, to: f32) -> f32 {
        from + (to - from) * self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f64 = 800.0;
    const H: f64 = 400.0;

    #[test]
    fn entering_from_below_is_zero() {
        assert_eq!(ScrollProgress::from_geometry(VH, H, VH), ScrollProgress::START);
    }

    #[test]
    fn leaving_above_is_one() {
        assert_eq!(ScrollProgress::from_geometry(-H, H, VH), ScrollProgress::END);
    }

    #[test]
    fn midway() {
        // top = 200: 600 of 1200 pixels travelled
        assert_eq!(ScrollProgress::from_geometry(200.0, H, VH).value(), 0.5);
    }

    #[test]
    fn clamped_outside_range() {
        assert_eq!(ScrollProgress::from_geometry(VH + 500.0, H, VH), ScrollProgress::START);
        assert_eq!(ScrollProgress::from_geometry(-H - 900.0, H, VH), ScrollProgress::END);
    }

    #[test]
    fn degenerate_range_is_start() {
        assert_eq!(ScrollProgress::from_geometry(0.0, 0.0, 0.0), ScrollProgress::START);
        assert_eq!(ScrollProgress::from_geometry(0.0, f64::NAN, VH), ScrollProgress::START);
    }

    #[test]
    fn monotonic_while_scrolling_down() {
        // Scrolling down moves the element's top upward in client coordinates.
        let mut last = ScrollProgress::START;
        let mut top = VH + 300.0;
        while top > -H - 300.0 {
            let p = ScrollProgress::from_geometry(top, H, VH);
            assert!(p >= last, "progress went backwards at top={top}");
            assert!((0.0..=1.0).contains(&p.value()));
            last = p;
            top -= 37.0;
        }
        assert_eq!(last, ScrollProgress::END);
    }

    #[test]
    fn map_endpoints_exact() {
        assert_eq!(ScrollProgress::START.map(24.0, 0.0), 24.0);
        assert_eq!(ScrollProgress::END.map(24.0, 0.0), 0.0);
    }
}

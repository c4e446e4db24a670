//! Opacity - transparency with CSS output

use super::bounded::bounded_f32;

bounded_f32!(Opacity, 0.0, 1.0);

impl Opacity {
    pub const FULL: Self = Self::new(1.0);
    pub const ZERO: Self = Self::new(0.0);

    /// Always emitted, even at full opacity, so a transition has both endpoints.
    pub fn to_css(&self) -> String {
        format!("opacity: {};", trim_float(self.0))
    }
}

/// Format a float with at most three decimals and no trailing zeros.
pub(crate) fn trim_float(v: f32) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_css() {
        assert_eq!(Opacity::FULL.to_css(), "opacity: 1;");
        assert_eq!(Opacity::ZERO.to_css(), "opacity: 0;");
        assert_eq!(Opacity::new(0.85).to_css(), "opacity: 0.85;");
    }

    #[test]
    fn trim_float_strips_zeros() {
        assert_eq!(trim_float(14.0), "14");
        assert_eq!(trim_float(0.92), "0.92");
        assert_eq!(trim_float(-2.5), "-2.5");
        assert_eq!(trim_float(-0.0001), "0");
    }
}

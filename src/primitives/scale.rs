//! Scale - CSS transform scale factor

use super::bounded::bounded_f32;
use super::opacity::trim_float;

bounded_f32!(Scale, 0.25, 3.0);

impl Scale {
    pub const NORMAL: Self = Self::new(1.0);
    /// Icon entrance start size
    pub const ICON_START: Self = Self::new(0.92);
    /// Button press
    pub const PRESS: Self = Self::new(0.98);
    /// Card press, barely perceptible
    pub const PRESS_SUBTLE: Self = Self::new(0.995);

    pub fn is_identity(&self) -> bool {
        (self.0 - 1.0).abs() < 0.0001
    }

    pub fn to_css(&self) -> String {
        if self.is_identity() {
            return String::new();
        }
        format!("scale({})", trim_float(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_css() {
        assert_eq!(Scale::NORMAL.to_css(), "");
        assert_eq!(Scale::ICON_START.to_css(), "scale(0.92)");
        assert_eq!(Scale::PRESS_SUBTLE.to_css(), "scale(0.995)");
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn scale_rejects_zero() {
        let _ = Scale::new(0.0);
    }
}

//! Easing - timing functions for CSS transitions

use super::opacity::trim_float;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    EaseOut,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Fast start, long soft landing. Used for heading lines.
    pub const EXPO_OUT: Self = Self::CubicBezier(0.16, 1.0, 0.3, 1.0);

    pub fn to_css(&self) -> String {
        match self {
            Self::EaseOut => "ease-out".to_string(),
            Self::CubicBezier(x1, y1, x2, y2) => format!(
                "cubic-bezier({}, {}, {}, {})",
                trim_float(*x1),
                trim_float(*y1),
                trim_float(*x2),
                trim_float(*y2),
            ),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::EaseOut
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_keyword() {
        assert_eq!(Easing::EaseOut.to_css(), "ease-out");
        assert_eq!(Easing::default(), Easing::EaseOut);
    }

    #[test]
    fn expo_out_bezier() {
        assert_eq!(Easing::EXPO_OUT.to_css(), "cubic-bezier(0.16, 1, 0.3, 1)");
    }
}

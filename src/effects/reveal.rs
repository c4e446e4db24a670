//! One-shot reveal: hidden until enough of the element is on screen, then
//! shown for good.

use crate::primitives::{Easing, MotionState, Scale, Transition, Tween};

/// Visibility phase of a revealed element. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    #[default]
    Hidden,
    Shown,
}

impl RevealPhase {
    /// Intersection ratios within this distance below the threshold still count;
    /// browsers report e.g. 0.2499 for a crossing at 0.25.
    const RATIO_SLACK: f64 = 1e-3;

    /// Fold one visibility observation into the phase.
    pub fn observe(self, intersecting: bool, ratio: f64, threshold: f64) -> Self {
        match self {
            Self::Shown => Self::Shown,
            Self::Hidden if intersecting && ratio + Self::RATIO_SLACK >= threshold => Self::Shown,
            Self::Hidden => Self::Hidden,
        }
    }

    pub fn is_shown(&self) -> bool {
        matches!(self, Self::Shown)
    }
}

/// What a reveal looks like and when it fires
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealPreset {
    /// Fraction of the element that must be visible, 0..=1
    pub threshold: f64,
    pub tween: Tween,
}

impl RevealPreset {
    /// Paragraphs and card grids: fade in while rising 14px
    pub const FADE_UP: Self = Self {
        threshold: 0.25,
        tween: Tween::new(
            MotionState::hidden(14.0),
            MotionState::REST,
            Transition::new(0.55, Easing::EaseOut),
        ),
    };

    /// Card icons: rise 10px and grow from 92%, once half visible
    pub const ICON_POP: Self = Self {
        threshold: 0.5,
        tween: Tween::new(
            MotionState::hidden(10.0).with_scale(Scale::ICON_START),
            MotionState::REST,
            Transition::new(0.45, Easing::EaseOut),
        ),
    };

    pub fn style(&self, phase: RevealPhase) -> String {
        self.tween.css(phase.is_shown())
    }
}

impl Default for RevealPreset {
    fn default() -> Self {
        Self::FADE_UP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: f64 = 0.25;

    #[test]
    fn starts_hidden() {
        assert_eq!(RevealPhase::default(), RevealPhase::Hidden);
    }

    #[test]
    fn below_threshold_stays_hidden() {
        let p = RevealPhase::Hidden.observe(true, 0.1, T);
        assert_eq!(p, RevealPhase::Hidden);
    }

    #[test]
    fn crossing_threshold_shows() {
        assert_eq!(RevealPhase::Hidden.observe(true, 0.25, T), RevealPhase::Shown);
        assert_eq!(RevealPhase::Hidden.observe(true, 0.2499, T), RevealPhase::Shown);
    }

    #[test]
    fn not_intersecting_never_shows() {
        assert_eq!(RevealPhase::Hidden.observe(false, 1.0, T), RevealPhase::Hidden);
    }

    #[test]
    fn shown_never_reverts() {
        let observations = [
            (true, 0.3),
            (false, 0.0),
            (true, 0.05),
            (false, 0.0),
            (true, 0.9),
        ];
        let mut phase = RevealPhase::Hidden;
        let mut transitions = 0;
        for (intersecting, ratio) in observations {
            let next = phase.observe(intersecting, ratio, T);
            if next != phase {
                transitions += 1;
            }
            phase = next;
            if transitions > 0 {
                assert_eq!(phase, RevealPhase::Shown);
            }
        }
        assert_eq!(transitions, 1);
    }

    #[test]
    fn fade_up_styles() {
        let preset = RevealPreset::FADE_UP;
        assert!(preset.style(RevealPhase::Hidden).starts_with("opacity: 0; transform: translateY(14px);"));
        assert!(preset.style(RevealPhase::Shown).starts_with("opacity: 1; transform: translateY(0px);"));
        assert!(preset.style(RevealPhase::Shown).contains("550ms ease-out"));
    }

    #[test]
    fn icon_pop_uses_half_threshold() {
        let preset = RevealPreset::ICON_POP;
        assert_eq!(preset.threshold, 0.5);
        assert_eq!(RevealPhase::Hidden.observe(true, 0.3, preset.threshold), RevealPhase::Hidden);
        assert!(preset.style(RevealPhase::Hidden).contains("scale(0.92)"));
        assert!(preset.style(RevealPhase::Shown).contains("450ms"));
    }
}

//! Motion - visual states and the transitions between them
//!
//! A `MotionState` is one endpoint (opacity, vertical offset, blur, scale).
//! A `Tween` pairs two endpoints with a `Transition` and renders the inline
//! style for either side; the browser interpolates when the style flips.
//!
//! Hover and press feedback is pure CSS, generated by `HoverMotion`.

use super::easing::Easing;
use super::opacity::{Opacity, trim_float};
use super::scale::Scale;

/// One endpoint of an animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    pub opacity: Opacity,
    /// Vertical offset in px, positive is downward
    pub offset_y: f32,
    /// Gaussian blur radius in px
    pub blur: f32,
    pub scale: Scale,
}

impl MotionState {
    /// Fully visible, in place, sharp
    pub const REST: Self = Self {
        opacity: Opacity::FULL,
        offset_y: 0.0,
        blur: 0.0,
        scale: Scale::NORMAL,
    };

    pub const fn hidden(offset_y: f32) -> Self {
        Self {
            opacity: Opacity::ZERO,
            offset_y,
            blur: 0.0,
            scale: Scale::NORMAL,
        }
    }

    pub const fn with_blur(mut self, blur: f32) -> Self {
        self.blur = blur;
        self
    }

    pub const fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }

    pub fn transform_css(&self) -> String {
        let mut parts = vec![format!("translateY({}px)", trim_float(self.offset_y))];
        let scale = self.scale.to_css();
        if !scale.is_empty() {
            parts.push(scale);
        }
        format!("transform: {};", parts.join(" "))
    }

    pub fn filter_css(&self) -> String {
        format!("filter: blur({}px);", trim_float(self.blur))
    }

    /// Opacity and transform; blur only when non-zero
    pub fn to_css(&self) -> String {
        let mut css = format!("{} {}", self.opacity.to_css(), self.transform_css());
        if self.blur > 0.0 {
            css.push(' ');
            css.push_str(&self.filter_css());
        }
        css
    }
}

/// Timing for a state change
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Seconds
    pub duration: f32,
    /// Seconds before the transition starts
    pub delay: f32,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration: f32, easing: Easing) -> Self {
        Self { duration, delay: 0.0, easing }
    }

    pub const fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    /// Seconds from trigger until the transition has finished
    pub fn end(&self) -> f32 {
        self.delay + self.duration
    }

    /// `transition` shorthand over the given properties
    pub fn to_css(&self, properties: &[&str]) -> String {
        let easing = self.easing.to_css();
        let duration = millis(self.duration);
        let delay = millis(self.delay);
        let items: Vec<String> = properties
            .iter()
            .map(|p| {
                if delay == 0 {
                    format!("{p} {duration}ms {easing}")
                } else {
                    format!("{p} {duration}ms {easing} {delay}ms")
                }
            })
            .collect();
        format!("transition: {};", items.join(", "))
    }
}

fn millis(seconds: f32) -> u32 {
    (seconds.max(0.0) * 1000.0).round() as u32
}

/// Two endpoints plus the timing between them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: MotionState,
    pub to: MotionState,
    pub transition: Transition,
}

impl Tween {
    pub const fn new(from: MotionState, to: MotionState, transition: Transition) -> Self {
        Self { from, to, transition }
    }

    pub const fn with_delay(mut self, delay: f32) -> Self {
        self.transition = self.transition.with_delay(delay);
        self
    }

    fn animates_blur(&self) -> bool {
        self.from.blur > 0.0 || self.to.blur > 0.0
    }

    /// Inline style for the start (`arrived == false`) or end state.
    ///
    /// The transition is always present so flipping `arrived` animates.
    pub fn css(&self, arrived: bool) -> String {
        let state = if arrived { &self.to } else { &self.from };
        let mut css = format!("{} {}", state.opacity.to_css(), state.transform_css());
        let props: &[&str] = if self.animates_blur() {
            css.push(' ');
            css.push_str(&state.filter_css());
            &["opacity", "transform", "filter"]
        } else {
            &["opacity", "transform"]
        };
        css.push(' ');
        css.push_str(&self.transition.to_css(props));
        css
    }
}

/// Hover lift and press feedback for interactive blocks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverMotion {
    /// Upward lift on hover, px
    pub lift: f32,
    pub shadow: &'static str,
    pub border: Option<&'static str>,
    pub press: Scale,
}

impl HoverMotion {
    pub const BUTTON: Self = Self {
        lift: 2.0,
        shadow: "0 14px 28px rgba(0,0,0,0.22)",
        border: None,
        press: Scale::PRESS,
    };
    pub const AUDIENCE_CARD: Self = Self {
        lift: 2.0,
        shadow: "0 12px 22px rgba(0,0,0,0.18)",
        border: None,
        press: Scale::PRESS,
    };
    pub const PRODUCT_CARD: Self = Self {
        lift: 6.0,
        shadow: "0 18px 36px rgba(0,0,0,0.14)",
        border: Some("rgba(17,39,58,0.25)"),
        press: Scale::PRESS_SUBTLE,
    };
    pub const POINT_CARD: Self = Self {
        lift: 5.0,
        shadow: "0 14px 30px rgba(0,0,0,0.12)",
        border: Some("rgba(17,39,58,0.22)"),
        press: Scale::PRESS_SUBTLE,
    };

    /// Base, `:hover` and `:active` rules for `selector`
    pub fn rules(&self, selector: &str) -> String {
        let lift = format!("translateY(-{}px)", trim_float(self.lift));
        let border = self
            .border
            .map(|b| format!(" border-color: {b};"))
            .unwrap_or_default();
        format!(
            "{selector} {{ transition: transform 200ms ease-out, box-shadow 200ms ease-out, border-color 200ms ease-out; }}\n\
             {selector}:hover {{ transform: {lift}; box-shadow: {shadow};{border} }}\n\
             {selector}:active {{ transform: {lift} {press}; }}\n",
            shadow = self.shadow,
            press = self.press.to_css(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_state_css() {
        assert_eq!(
            MotionState::REST.to_css(),
            "opacity: 1; transform: translateY(0px);"
        );
    }

    #[test]
    fn hidden_state_with_scale_and_blur() {
        let s = MotionState::hidden(10.0)
            .with_scale(Scale::ICON_START)
            .with_blur(8.0);
        assert_eq!(
            s.to_css(),
            "opacity: 0; transform: translateY(10px) scale(0.92); filter: blur(8px);"
        );
    }

    #[test]
    fn transition_without_delay() {
        let t = Transition::new(0.55, Easing::EaseOut);
        assert_eq!(
            t.to_css(&["opacity", "transform"]),
            "transition: opacity 550ms ease-out, transform 550ms ease-out;"
        );
    }

    #[test]
    fn transition_with_delay() {
        let t = Transition::new(0.55, Easing::EaseOut).with_delay(0.16);
        assert_eq!(
            t.to_css(&["opacity"]),
            "transition: opacity 550ms ease-out 160ms;"
        );
        assert!((t.end() - 0.71).abs() < 1e-6);
    }

    #[test]
    fn tween_flips_between_endpoints() {
        let tween = Tween::new(
            MotionState::hidden(14.0),
            MotionState::REST,
            Transition::new(0.55, Easing::EaseOut),
        );
        let hidden = tween.css(false);
        let shown = tween.css(true);
        assert!(hidden.starts_with("opacity: 0; transform: translateY(14px);"));
        assert!(shown.starts_with("opacity: 1; transform: translateY(0px);"));
        assert!(hidden.contains("transition: opacity 550ms"));
        assert!(shown.contains("transition: opacity 550ms"));
        assert!(!shown.contains("filter"));
    }

    #[test]
    fn tween_keeps_filter_on_both_sides_when_blurring() {
        let tween = Tween::new(
            MotionState::hidden(14.0).with_blur(8.0),
            MotionState::REST,
            Transition::new(0.55, Easing::EXPO_OUT),
        );
        assert!(tween.css(false).contains("filter: blur(8px);"));
        assert!(tween.css(true).contains("filter: blur(0px);"));
        assert!(tween.css(true).contains("filter 550ms cubic-bezier(0.16, 1, 0.3, 1)"));
    }

    #[test]
    fn hover_rules_for_card() {
        let css = HoverMotion::PRODUCT_CARD.rules(".product-card");
        assert!(css.contains(".product-card:hover { transform: translateY(-6px);"));
        assert!(css.contains("border-color: rgba(17,39,58,0.25);"));
        assert!(css.contains(".product-card:active { transform: translateY(-6px) scale(0.995); }"));
    }

    #[test]
    fn hover_rules_for_button_have_no_border() {
        let css = HoverMotion::BUTTON.rules(".mai-cta");
        assert!(css.contains("box-shadow: 0 14px 28px rgba(0,0,0,0.22); }"));
        assert!(css.contains("scale(0.98)"));
    }
}

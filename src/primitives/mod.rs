//! Style primitives - the numeric building blocks of every animation
//!
//! Each primitive:
//! - is range-checked where a range exists (`bounded_f32!`)
//! - renders itself with `to_css()`

#[macro_use]
pub mod bounded;
pub mod easing;
pub mod motion;
pub mod opacity;
pub mod progress;
pub mod scale;

pub use easing::Easing;
pub use motion::{HoverMotion, MotionState, Transition, Tween};
pub use opacity::Opacity;
pub use progress::ScrollProgress;
pub use scale::Scale;

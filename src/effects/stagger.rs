//! Staggered line entrance for headings
//!
//! All lines share one trigger (the heading becoming visible). Line `i`
//! starts `initial_delay + step * i` seconds after the trigger.

use crate::primitives::{Easing, MotionState, Transition, Tween};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaggerSchedule {
    /// Seconds before the first line starts
    pub initial_delay: f32,
    /// Seconds between consecutive line starts
    pub step: f32,
}

impl StaggerSchedule {
    pub const HEADING: Self = Self {
        initial_delay: 0.04,
        step: 0.12,
    };

    pub fn start_time(&self, index: usize) -> f32 {
        self.initial_delay + self.step * index as f32
    }

    pub fn start_times(&self, count: usize) -> Vec<f32> {
        (0..count).map(|i| self.start_time(i)).collect()
    }
}

/// Per-line motion: fade in, rise 14px, unblur 8px
pub const LINE_TWEEN: Tween = Tween::new(
    MotionState::hidden(14.0).with_blur(8.0),
    MotionState::REST,
    Transition::new(0.55, Easing::EXPO_OUT),
);

/// One heading line, optionally with its own class (accent colour etc.)
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingLine {
    pub text: String,
    pub class: Option<String>,
}

impl HeadingLine {
    pub fn accent(text: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: Some(class.into()),
        }
    }
}

impl From<&str> for HeadingLine {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
            class: None,
        }
    }
}

impl From<String> for HeadingLine {
    fn from(text: String) -> Self {
        Self { text, class: None }
    }
}

/// A line ready to render: its clip container holds one animated span
#[derive(Debug, Clone, PartialEq)]
pub struct LineSlot {
    pub index: usize,
    pub text: String,
    pub class: Option<String>,
    /// Seconds after the trigger
    pub delay: f32,
}

impl LineSlot {
    pub fn style(&self, shown: bool) -> String {
        LINE_TWEEN.with_delay(self.delay).css(shown)
    }
}

/// Render plan for a whole heading
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingPlan {
    pub slots: Vec<LineSlot>,
}

impl HeadingPlan {
    pub fn new(lines: &[HeadingLine], schedule: StaggerSchedule) -> Self {
        let slots = lines
            .iter()
            .enumerate()
            .map(|(index, line)| LineSlot {
                index,
                text: line.text.clone(),
                class: line.class.clone(),
                delay: schedule.start_time(index),
            })
            .collect();
        Self { slots }
    }

    /// Seconds from trigger until the last line has settled
    pub fn settle_time(&self) -> f32 {
        self.slots
            .last()
            .map(|s| LINE_TWEEN.transition.with_delay(s.delay).end())
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn start_times_follow_schedule() {
        let times = StaggerSchedule::HEADING.start_times(4);
        assert_eq!(times.len(), 4);
        for (i, t) in times.iter().enumerate() {
            assert!(close(*t, 0.04 + 0.12 * i as f32), "line {i} starts at {t}");
        }
    }

    #[test]
    fn single_line_only_has_initial_delay() {
        let plan = HeadingPlan::new(&["Why MAI?".into()], StaggerSchedule::HEADING);
        assert_eq!(plan.slots.len(), 1);
        assert!(close(plan.slots[0].delay, 0.04));
    }

    #[test]
    fn two_lines_render_in_order_with_step() {
        let plan = HeadingPlan::new(&["A".into(), "B".into()], StaggerSchedule::HEADING);
        let texts: Vec<&str> = plan.slots.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, ["A", "B"]);
        assert_eq!(plan.slots[0].index, 0);
        assert_eq!(plan.slots[1].index, 1);
        assert!(close(plan.slots[1].delay - plan.slots[0].delay, 0.12));
        assert!(plan.slots[0].style(true).contains("550ms cubic-bezier(0.16, 1, 0.3, 1) 40ms"));
        assert!(plan.slots[1].style(true).contains("550ms cubic-bezier(0.16, 1, 0.3, 1) 160ms"));
    }

    #[test]
    fn accent_line_keeps_class() {
        let plan = HeadingPlan::new(
            &[
                "Cost packages start at only".into(),
                HeadingLine::accent("Rs. 10* per sq. ft.", "text-mai-teal"),
            ],
            StaggerSchedule::HEADING,
        );
        assert_eq!(plan.slots[0].class, None);
        assert_eq!(plan.slots[1].class.as_deref(), Some("text-mai-teal"));
    }

    #[test]
    fn hidden_line_is_blurred() {
        let plan = HeadingPlan::new(&["A".into()], StaggerSchedule::HEADING);
        let hidden = plan.slots[0].style(false);
        assert!(hidden.contains("opacity: 0;"));
        assert!(hidden.contains("filter: blur(8px);"));
    }

    #[test]
    fn settle_time_covers_last_line() {
        let plan = HeadingPlan::new(&["A".into(), "B".into()], StaggerSchedule::HEADING);
        assert!(close(plan.settle_time(), 0.16 + 0.55));
        assert_eq!(HeadingPlan::new(&[], StaggerSchedule::HEADING).settle_time(), 0.0);
    }
}

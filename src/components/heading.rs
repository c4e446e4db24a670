//! StaggeredHeading - heading whose lines rise in one after another
//!
//! Structure:
//!   h1/h2/h3
//!     span (observed for visibility)
//!       span.line-clip (overflow hidden, one per line)
//!         span (animated)

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::effects::{HeadingLine, HeadingPlan, RevealPreset, StaggerSchedule};
use crate::viewport::{use_element_id, use_reveal};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingLevel {
    H1,
    #[default]
    H2,
    H3,
}

#[component]
pub fn StaggeredHeading(
    #[props(default)] level: HeadingLevel,
    #[props(default)] class: String,
    lines: Vec<HeadingLine>,
) -> Element {
    let id = use_element_id("heading");
    let phase = use_reveal(id.clone(), RevealPreset::FADE_UP.threshold);
    let plan = HeadingPlan::new(&lines, StaggerSchedule::HEADING);

    // Drop the will-change hint once every line has finished moving.
    let settle_ms = (plan.settle_time() * 1000.0).ceil() as u32;
    let mut settled = use_signal(|| false);
    use_effect(move || {
        if phase().is_shown() && !*settled.peek() {
            spawn(async move {
                TimeoutFuture::new(settle_ms).await;
                settled.set(true);
            });
        }
    });

    let shown = phase().is_shown();
    let hint = if settled() { "" } else { " will-change: transform;" };
    let lines: Vec<(usize, String, String, String)> = plan
        .slots
        .iter()
        .map(|slot| {
            let class = match &slot.class {
                Some(extra) => format!("block {extra}"),
                None => "block".to_string(),
            };
            let style = format!("{}{}", slot.style(shown), hint);
            (slot.index, class, style, slot.text.clone())
        })
        .collect();

    let body = rsx! {
        span {
            id: "{id}",
            class: "block",
            for (index, line_class, style, text) in lines {
                span {
                    key: "{index}",
                    class: "block line-clip",
                    span {
                        class: "{line_class}",
                        style: "{style}",
                        "{text}"
                    }
                }
            }
        }
    };

    match level {
        HeadingLevel::H1 => rsx! { h1 { class: "{class}", {body} } },
        HeadingLevel::H2 => rsx! { h2 { class: "{class}", {body} } },
        HeadingLevel::H3 => rsx! { h3 { class: "{class}", {body} } },
    }
}

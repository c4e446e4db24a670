use dioxus::prelude::*;

use crate::content::{Icon, Tone};

/// Pill-shaped call-to-action link; hover/press motion comes from `.mai-cta`
#[component]
pub fn CtaLink(
    href: String,
    label: String,
    #[props(default = Tone::Teal)] tone: Tone,
    #[props(default)] class: String,
) -> Element {
    let class = format!("mai-cta {} {class}", tone.fill_class())
        .trim_end()
        .to_string();
    rsx! {
        a {
            href: "{href}",
            class: "{class}",
            "{label}"
        }
    }
}

/// Decorative inline icon
#[component]
pub fn IconGlyph(icon: Icon, #[props(default)] class: String) -> Element {
    let svg = icon.svg();
    rsx! {
        span {
            class: "icon {class}",
            dangerous_inner_html: "{svg}",
        }
    }
}

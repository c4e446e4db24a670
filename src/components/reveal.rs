//! Reveal - fades its children in the first time they scroll into view

use dioxus::prelude::*;

use crate::effects::RevealPreset;
use crate::viewport::{use_element_id, use_reveal};

#[component]
pub fn Reveal(
    #[props(default)] class: String,
    #[props(default)] preset: RevealPreset,
    children: Element,
) -> Element {
    let id = use_element_id("reveal");
    let phase = use_reveal(id.clone(), preset.threshold);

    let phase = phase();
    let style = preset.style(phase);
    let shown = if phase.is_shown() { "true" } else { "false" };

    rsx! {
        div {
            id: "{id}",
            class: "{class}",
            style: "{style}",
            "data-shown": "{shown}",
            {children}
        }
    }
}

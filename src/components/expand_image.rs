//! ExpandImage - image that widens to full bleed as it scrolls past
//!
//! Structure:
//!   full-bleed div
//!     track div (measured for scroll progress, centres the frame)
//!       frame div (width + corner radius driven by progress)
//!         img

use dioxus::prelude::*;

use super::layout::FullBleed;
use crate::effects::ExpandRange;
use crate::viewport::{use_element_id, use_scroll_progress, use_viewport_width};

/// Intrinsic size of the story photographs
const IMAGE_WIDTH: u32 = 2752;
const IMAGE_HEIGHT: u32 = 1536;

#[component]
pub fn ExpandImage(src: String, alt: String, #[props(default)] priority: bool) -> Element {
    let id = use_element_id("expand");
    let viewport_width = use_viewport_width();
    let progress = use_scroll_progress(id.clone());

    let progress = progress();
    let frame_style = ExpandRange::STORY.style_at(progress, viewport_width()).to_css();
    let progress_attr = format!("{:.3}", progress.value());
    let (loading, fetch_priority) = if priority { ("eager", "high") } else { ("lazy", "auto") };

    rsx! {
        FullBleed {
            div {
                id: "{id}",
                class: "expand-track",
                "data-progress": "{progress_attr}",
                div {
                    class: "expand-frame",
                    style: "{frame_style}",
                    img {
                        src: "{src}",
                        alt: "{alt}",
                        width: "{IMAGE_WIDTH}",
                        height: "{IMAGE_HEIGHT}",
                        class: "expand-img",
                        "loading": "{loading}",
                        "fetchpriority": "{fetch_priority}",
                        "decoding": "async",
                    }
                }
            }
        }
    }
}

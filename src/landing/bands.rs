//! Photo bands between the content sections

use dioxus::prelude::*;

use super::heading_lines;
use crate::components::{CtaLink, ImageBand, Reveal, StaggeredHeading};
use crate::content::{
    COST_BAND, COST_CTA, COST_HEADING, COST_HIGHLIGHT, COST_NOTE, HOUSEKEEPING_BAND,
    HOUSEKEEPING_CTA, HOUSEKEEPING_HEADING, PLACEHOLDER_HREF, TAGLINE, TEAM_BAND, Tone,
};
use crate::effects::HeadingLine;

#[component]
pub fn CostBand() -> Element {
    let lines = vec![
        HeadingLine::from(COST_HEADING),
        HeadingLine::accent(COST_HIGHLIGHT, Tone::Teal.text_class()),
    ];
    rsx! {
        ImageBand {
            band: COST_BAND,
            div {
                class: "container-1140 px-6",
                StaggeredHeading { class: "type-h1 text-white", lines }
                Reveal {
                    p { class: "type-small band-note", "{COST_NOTE}" }
                }
                CtaLink {
                    href: PLACEHOLDER_HREF.to_string(),
                    label: COST_CTA.to_string(),
                    class: "mt-6",
                }
            }
        }
    }
}

#[component]
pub fn TeamBand() -> Element {
    rsx! {
        ImageBand {
            band: TEAM_BAND,
            div {
                class: "container-1140 px-6",
                p { class: "tagline", "{TAGLINE}" }
            }
        }
    }
}

#[component]
pub fn HousekeepingBand() -> Element {
    rsx! {
        ImageBand {
            band: HOUSEKEEPING_BAND,
            div {
                class: "container-1140 px-6",
                StaggeredHeading {
                    class: "type-h1 text-white",
                    lines: heading_lines(HOUSEKEEPING_HEADING),
                }
                CtaLink {
                    href: PLACEHOLDER_HREF.to_string(),
                    label: HOUSEKEEPING_CTA.to_string(),
                    class: "mt-7",
                }
            }
        }
    }
}

use dioxus::prelude::*;

use super::heading_lines;
use crate::components::{BleedTag, FullBleed, HeadingLevel, Reveal, StaggeredHeading};
use crate::content::{POINTS, Point, WHY_HEADING, WHY_SUBHEAD};
use crate::effects::RevealPreset;

#[component]
fn PointTile(point: Point) -> Element {
    let Point { title, text, icon_src, icon_alt } = point;
    rsx! {
        article {
            class: "point-card",
            Reveal {
                class: "point-icon-slot",
                preset: RevealPreset::ICON_POP,
                div {
                    class: "point-icon",
                    img {
                        src: "{icon_src}",
                        alt: "{icon_alt}",
                        width: "60",
                        height: "60",
                        class: "icon-60",
                    }
                }
            }
            StaggeredHeading {
                level: HeadingLevel::H3,
                class: "point-title text-mai-heading",
                lines: heading_lines(&[title]),
            }
            p { class: "type-body text-mist mt-3", "{text}" }
        }
    }
}

#[component]
pub fn WhySection() -> Element {
    rsx! {
        FullBleed {
            tag: BleedTag::Section,
            class: "bg-mai-light",
            div {
                class: "container-1140 band-pad-wide",
                StaggeredHeading {
                    class: "type-h2 text-center text-mai-heading",
                    lines: heading_lines(&[WHY_HEADING]),
                }
                Reveal {
                    p { class: "type-subhead text-center text-mist mt-3", "{WHY_SUBHEAD}" }
                }
                Reveal {
                    div {
                        class: "grid-points",
                        for (i, point) in POINTS.iter().enumerate() {
                            PointTile { key: "{i}", point: point.clone() }
                        }
                    }
                }
            }
        }
    }
}

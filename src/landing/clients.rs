use dioxus::prelude::*;

use super::heading_lines;
use crate::components::{BleedTag, FullBleed, Reveal, StaggeredHeading};
use crate::content::{
    CLIENTS, CLIENTS_FIRST_ROW, CLIENTS_HEADING, CLIENTS_NOTE, CLIENTS_SUBHEAD, ClientLogo,
};

#[component]
fn LogoRow(logos: Vec<ClientLogo>, class: String, width: u32, height: u32) -> Element {
    rsx! {
        Reveal {
            div {
                class: "{class}",
                for (i, ClientLogo { src, alt }) in logos.into_iter().enumerate() {
                    div {
                        key: "{i}",
                        class: "logo-cell",
                        img {
                            src: "{src}",
                            alt: "{alt}",
                            width: "{width}",
                            height: "{height}",
                            "loading": "lazy",
                            class: "client-logo",
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ClientsSection() -> Element {
    let (first, rest) = CLIENTS.split_at(CLIENTS_FIRST_ROW.min(CLIENTS.len()));
    rsx! {
        FullBleed {
            tag: BleedTag::Section,
            class: "bg-white",
            div {
                class: "container-1140 band-pad-tight",
                StaggeredHeading {
                    class: "type-h2 main-heading text-center text-mai-heading",
                    lines: heading_lines(&[CLIENTS_HEADING]),
                }
                Reveal {
                    p { class: "type-subhead text-center text-mist", "{CLIENTS_SUBHEAD}" }
                }
                LogoRow {
                    logos: first.to_vec(),
                    class: "grid-logos-wide",
                    width: 230,
                    height: 90,
                }
                LogoRow {
                    logos: rest.to_vec(),
                    class: "grid-logos-narrow",
                    width: 220,
                    height: 86,
                }
                p { class: "type-small note mt-9", "{CLIENTS_NOTE}" }
            }
        }
    }
}

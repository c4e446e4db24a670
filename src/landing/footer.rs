use dioxus::prelude::*;

use super::heading_lines;
use crate::components::{BleedTag, FullBleed, HeadingLevel, IconGlyph, StaggeredHeading};
use crate::content::{ABOUT, CONTACT, COPYRIGHT, Icon, LEGAL, SERVICES, SOCIAL, SocialLink, TAGLINE};

const COLUMN_HEADING_CLASS: &str = "footer-heading";

#[component]
fn ColumnHeading(text: String) -> Element {
    rsx! {
        StaggeredHeading {
            level: HeadingLevel::H3,
            class: COLUMN_HEADING_CLASS.to_string(),
            lines: heading_lines(&[text.as_str()]),
        }
    }
}

#[component]
pub fn SiteFooter() -> Element {
    let address = CONTACT.address;
    let phone = CONTACT.phone;
    let email = CONTACT.email;

    rsx! {
        FullBleed {
            tag: BleedTag::Footer,
            class: "site-footer",
            div {
                class: "container-1140 footer-pad",
                div {
                    class: "grid-footer",
                    div {
                        ColumnHeading { text: "About MAI" }
                        p { class: "footer-text mt-3", "{ABOUT}" }
                    }
                    div {
                        ColumnHeading { text: "Services" }
                        div {
                            class: "footer-text mt-3 stack-1",
                            for service in SERVICES.iter() {
                                p { "{service}" }
                            }
                        }
                    }
                    div {
                        ColumnHeading { text: "Contact" }
                        div {
                            class: "footer-text mt-3 stack-3",
                            p {
                                class: "contact-row contact-row-top",
                                IconGlyph { icon: Icon::MapPin, class: "icon-20" }
                                span { "{address}" }
                            }
                            p {
                                class: "contact-row",
                                IconGlyph { icon: Icon::Phone, class: "icon-20" }
                                span { "{phone}" }
                            }
                            p {
                                class: "contact-row",
                                IconGlyph { icon: Icon::Mail, class: "icon-20" }
                                span { "{email}" }
                            }
                        }
                    }
                    div {
                        ColumnHeading { text: "Connect" }
                        div {
                            class: "social-row mt-3",
                            for SocialLink { label, href, icon } in SOCIAL.iter().cloned() {
                                a {
                                    key: "{label}",
                                    href: "{href}",
                                    "aria-label": "{label}",
                                    IconGlyph { icon, class: "icon-28" }
                                }
                            }
                        }
                    }
                }
                div {
                    class: "footer-legal",
                    div {
                        class: "footer-legal-row",
                        p { "{COPYRIGHT}" }
                        p { "{LEGAL}" }
                    }
                }
                p { class: "footer-watermark", "{TAGLINE}" }
            }
        }
    }
}

//! Story sections: heading, scroll-expanding photo, then supporting copy

use dioxus::prelude::*;

use super::heading_lines;
use crate::components::{BleedTag, ExpandImage, FullBleed, HeadingLevel, Reveal, StaggeredHeading};
use crate::content::{
    AUDIENCE, AUDIENCE_HEADING, AudienceCard, HERO, HERO_INTRO, KHUSHNUMA, KHUSHNUMA_BODY,
    LEAVING_FRESH, LEAVING_FRESH_SUBHEAD, PRODUCTS_STORY, Story,
};

const STORY_HEADING_CLASS: &str = "type-h1 main-heading text-center text-mai-heading";

/// Heading above a full-bleed expanding image
#[component]
fn StoryOpener(story: Story, #[props(default)] level: HeadingLevel) -> Element {
    rsx! {
        div {
            class: "container-1140",
            StaggeredHeading {
                level,
                class: STORY_HEADING_CLASS.to_string(),
                lines: heading_lines(story.heading),
            }
        }
        ExpandImage {
            src: story.image_src.to_string(),
            alt: story.image_alt.to_string(),
            priority: story.priority,
        }
    }
}

#[component]
pub fn HeroSection() -> Element {
    rsx! {
        section {
            class: "story",
            StoryOpener { story: HERO, level: HeadingLevel::H1 }
            div {
                class: "container-1140 pt-10",
                Reveal {
                    p { class: "type-body text-center text-slate", "{HERO_INTRO}" }
                }
            }
        }
    }
}

#[component]
pub fn KhushnumaSection() -> Element {
    rsx! {
        section {
            class: "story",
            StoryOpener { story: KHUSHNUMA }
            div {
                class: "container-1140 pt-10",
                Reveal {
                    div {
                        class: "stack-5 text-center text-slate",
                        for paragraph in KHUSHNUMA_BODY.iter() {
                            p { class: "type-body", "{paragraph}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AudienceTile(card: AudienceCard) -> Element {
    let AudienceCard { src, alt, label, href } = card;
    rsx! {
        a {
            href: "{href}",
            class: "audience-card",
            div {
                class: "w-full",
                img {
                    src: "{src}",
                    alt: "{alt}",
                    width: "544",
                    height: "352",
                    "sizes": "(min-width: 1024px) 25vw, (min-width: 640px) 50vw, 100vw",
                    "loading": "lazy",
                    class: "block w-full h-auto",
                }
            }
            div {
                class: "audience-label",
                p { "{label}" }
            }
        }
    }
}

#[component]
pub fn LeavingFreshSection() -> Element {
    rsx! {
        section {
            class: "story",
            StoryOpener { story: LEAVING_FRESH }
            FullBleed {
                tag: BleedTag::Section,
                class: "bg-mai-light",
                div {
                    class: "container-1140 band-pad",
                    Reveal {
                        p {
                            class: "type-subhead text-center text-mist narrow-910",
                            "{LEAVING_FRESH_SUBHEAD}"
                        }
                    }
                    StaggeredHeading {
                        level: HeadingLevel::H3,
                        class: "main-heading text-center audience-heading text-mai-heading",
                        lines: heading_lines(&[AUDIENCE_HEADING]),
                    }
                    Reveal {
                        div {
                            class: "grid-audience",
                            for (i, card) in AUDIENCE.iter().enumerate() {
                                AudienceTile { key: "{i}", card: card.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Last story: no copy below, the products band follows directly
#[component]
pub fn ProductsOpener() -> Element {
    rsx! {
        section {
            class: "story story-flush",
            StoryOpener { story: PRODUCTS_STORY }
        }
    }
}

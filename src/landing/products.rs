use dioxus::prelude::*;

use super::heading_lines;
use crate::components::{BleedTag, CtaLink, FullBleed, HeadingLevel, Reveal, StaggeredHeading};
use crate::content::{
    PLACEHOLDER_HREF, PRODUCT_CTA, PRODUCTS, PRODUCTS_HEADING, PRODUCTS_INTRO, PRODUCTS_NOTE,
    ProductCard,
};
use crate::effects::HeadingLine;

#[component]
fn ProductTile(product: ProductCard) -> Element {
    let ProductCard { title, tone, text, extra } = product;
    let heading_class = format!("product-title {}", tone.text_class());

    rsx! {
        article {
            class: "product-card",
            "data-tone": "{tone}",
            StaggeredHeading {
                level: HeadingLevel::H3,
                class: heading_class,
                lines: vec![HeadingLine::from(title)],
            }
            div { class: "product-divider" }
            p { class: "type-body text-fog", "{text}" }
            if let Some(extra) = extra {
                p { class: "type-body text-fog mt-4", "{extra}" }
            }
            CtaLink {
                href: PLACEHOLDER_HREF.to_string(),
                label: PRODUCT_CTA.to_string(),
                tone,
                class: "cta-block",
            }
        }
    }
}

#[component]
pub fn ProductsSection() -> Element {
    let [intro, invite] = PRODUCTS_INTRO;
    rsx! {
        FullBleed {
            tag: BleedTag::Section,
            class: "bg-mai-light",
            div {
                class: "container-1140 band-pad-tight",
                Reveal {
                    p {
                        class: "type-subhead text-center text-mist",
                        "{intro}"
                        br {}
                        "{invite}"
                    }
                }
                StaggeredHeading {
                    class: "type-h2 main-heading text-center text-mai-heading",
                    lines: heading_lines(&[PRODUCTS_HEADING]),
                }
                Reveal {
                    div {
                        class: "grid-products",
                        for (i, product) in PRODUCTS.iter().enumerate() {
                            ProductTile { key: "{i}", product: product.clone() }
                        }
                    }
                }
                p { class: "type-small note mt-6", "{PRODUCTS_NOTE}" }
            }
        }
    }
}

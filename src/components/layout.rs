//! Layout blocks that break out of the 1140px column

use dioxus::prelude::*;

use crate::content::Band;

/// Element used for a full-bleed block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BleedTag {
    #[default]
    Div,
    Section,
    Footer,
}

fn join_class(base: &str, extra: &str) -> String {
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}

/// Spans the full viewport width regardless of its parent
#[component]
pub fn FullBleed(
    #[props(default)] tag: BleedTag,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let class = join_class("full-bleed", &class);
    match tag {
        BleedTag::Div => rsx! { div { class: "{class}", {children} } },
        BleedTag::Section => rsx! { section { class: "{class}", {children} } },
        BleedTag::Footer => rsx! { footer { class: "{class}", {children} } },
    }
}

/// Full-bleed photo under a tinted overlay, content centred on top
#[component]
pub fn ImageBand(band: Band, children: Element) -> Element {
    let section_class = join_class("image-band", band.height_class);
    let image_class = join_class("band-img", band.image_class);
    let content_class = join_class("band-content", band.height_class);
    let overlay_style = format!("background: {};", band.overlay);
    let (src, alt) = (band.src, band.alt);

    rsx! {
        FullBleed {
            tag: BleedTag::Section,
            class: section_class,
            img {
                src: "{src}",
                alt: "{alt}",
                class: "{image_class}",
                "loading": "lazy",
                "decoding": "async",
            }
            div { class: "band-overlay", style: "{overlay_style}" }
            div { class: "{content_class}", {children} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_class_skips_empty() {
        assert_eq!(join_class("full-bleed", ""), "full-bleed");
        assert_eq!(join_class("full-bleed", "bg-mai-light"), "full-bleed bg-mai-light");
    }
}

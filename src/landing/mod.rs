//! Landing - the whole page, top to bottom
//!
//! Sections are fixed and ordered; all copy comes from `content`, all motion
//! from `components`.

mod bands;
mod clients;
mod footer;
mod header;
mod products;
mod stories;
mod why;

use dioxus::prelude::*;

use crate::effects::HeadingLine;

pub(crate) fn heading_lines(lines: &[&str]) -> Vec<HeadingLine> {
    lines.iter().map(|line| HeadingLine::from(*line)).collect()
}

#[component]
pub fn Landing() -> Element {
    rsx! {
        div {
            class: "page",
            header::SiteHeader {}
            main {
                id: "top",
                class: "artboard",
                stories::HeroSection {}
                stories::KhushnumaSection {}
                stories::LeavingFreshSection {}
                stories::ProductsOpener {}
                products::ProductsSection {}
                bands::CostBand {}
                why::WhySection {}
                clients::ClientsSection {}
                bands::TeamBand {}
                bands::HousekeepingBand {}
                footer::SiteFooter {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_lines_keep_order() {
        let lines = heading_lines(&["Leaving a fresh", "is a memorable gesture."]);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "Leaving a fresh");
        assert_eq!(lines[1].text, "is a memorable gesture.");
        assert!(lines.iter().all(|l| l.class.is_none()));
    }
}

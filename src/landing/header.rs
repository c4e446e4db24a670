use dioxus::prelude::*;

use crate::content::{LOGO_ALT, LOGO_SRC};

#[component]
pub fn SiteHeader() -> Element {
    rsx! {
        header {
            class: "site-header",
            nav {
                "aria-label": "Primary",
                class: "container-1140 site-nav",
                a {
                    href: "#top",
                    class: "logo-link",
                    img {
                        src: "{LOGO_SRC}",
                        alt: "{LOGO_ALT}",
                        width: "224",
                        height: "114",
                        class: "logo",
                        "fetchpriority": "high",
                    }
                }
            }
        }
    }
}

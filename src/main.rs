mod components;
mod content;
mod effects;
mod error;
mod landing;
mod primitives;
mod style;
mod viewport;

use dioxus::prelude::*;
use content::{SITE_DESCRIPTION, SITE_TITLE};
use landing::Landing;

#[allow(non_snake_case)]
fn App() -> Element {
    let css = use_hook(style::stylesheet);

    rsx! {
        document::Title { "{SITE_TITLE}" }
        document::Meta { name: "description", content: SITE_DESCRIPTION }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        style { "{css}" }
        div {
            id: "main",
            Landing {}
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = dioxus::logger::init(tracing::Level::INFO) {
        web_sys::console::error_1(&format!("logger init failed: {err}").into());
    }
    dioxus::launch(App);
}

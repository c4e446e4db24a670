use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::DomError;

/// Whether an observer should keep reporting after a callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Watch {
    Continue,
    Stop,
}

type EntriesCallback = dyn FnMut(js_sys::Array, IntersectionObserver);

/// `IntersectionObserver` on a single element, disconnected on drop
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<EntriesCallback>,
}

impl VisibilityObserver {
    /// Calls `on_change(is_intersecting, ratio)` each time the visible
    /// fraction crosses `threshold`. Returning `Watch::Stop` disconnects.
    pub fn new(
        element: &Element,
        threshold: f64,
        mut on_change: impl FnMut(bool, f64) -> Watch + 'static,
    ) -> Result<Self, DomError> {
        let callback = Closure::<EntriesCallback>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if on_change(entry.is_intersecting(), entry.intersection_ratio()) == Watch::Stop {
                        observer.disconnect();
                        break;
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn observer_builds_and_disconnects() {
        let document = crate::viewport::window()
            .expect("window")
            .document()
            .expect("document");
        let element = document.create_element("div").expect("element");

        let observer = VisibilityObserver::new(&element, 0.25, |_, _| Watch::Stop)
            .expect("observer");
        drop(observer);
    }
}

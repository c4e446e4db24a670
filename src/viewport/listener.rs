use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Window};

use crate::error::DomError;

/// A passive `window` event listener, removed on drop
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn new(event: &'static str, callback: impl FnMut() + 'static) -> Result<Self, DomError> {
        let window = super::window()?;
        let callback = Closure::<dyn FnMut()>::new(callback);

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        window.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        tracing::debug!(event, "window listener registered");

        Ok(Self { window, event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let removed = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        if let Err(err) = removed {
            tracing::warn!(event = self.event, error = %DomError::from(err), "failed to remove window listener");
        } else {
            tracing::debug!(event = self.event, "window listener removed");
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fire(event: &str) {
        let window = crate::viewport::window().expect("window");
        let event = web_sys::Event::new(event).expect("event");
        window.dispatch_event(&event).expect("dispatch");
    }

    #[wasm_bindgen_test]
    fn listener_stops_firing_after_drop() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let listener = WindowListener::new("mai-test", move || counter.set(counter.get() + 1))
            .expect("listener");

        fire("mai-test");
        fire("mai-test");
        assert_eq!(hits.get(), 2);

        drop(listener);
        fire("mai-test");
        assert_eq!(hits.get(), 2);
    }
}

//! Viewport - browser bindings for scroll, resize and visibility
//!
//! Every registration is an RAII guard: dropping it deregisters. Hooks keep
//! their guards in component state and drop them on unmount.

mod hooks;
mod listener;
mod observer;

pub use hooks::{use_element_id, use_reveal, use_scroll_progress, use_viewport_width};
pub use listener::WindowListener;
pub use observer::{VisibilityObserver, Watch};

use std::sync::atomic::{AtomicU32, Ordering};

use crate::error::DomError;
use crate::primitives::ScrollProgress;

/// Assumed viewport width until the first real read
pub const FALLBACK_VIEWPORT_WIDTH: f32 = 1440.0;

static COUNTER: AtomicU32 = AtomicU32::new(0);

/// Unique DOM id, e.g. `mai-expand-7`
pub fn next_element_id(prefix: &str) -> String {
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("mai-{prefix}-{n}")
}

#[cfg(target_arch = "wasm32")]
pub fn window() -> Result<web_sys::Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

/// Outside a browser there is no window; every binding degrades to `NoWindow`.
#[cfg(not(target_arch = "wasm32"))]
pub fn window() -> Result<web_sys::Window, DomError> {
    Err(DomError::NoWindow)
}

pub fn element_by_id(id: &str) -> Result<web_sys::Element, DomError> {
    window()?
        .document()
        .ok_or(DomError::NoDocument)?
        .get_element_by_id(id)
        .ok_or_else(|| DomError::ElementNotFound(id.to_string()))
}

/// `window.innerWidth` in CSS px
pub fn viewport_width() -> Result<f32, DomError> {
    let w = window()?.inner_width()?;
    Ok(w.as_f64().unwrap_or(FALLBACK_VIEWPORT_WIDTH as f64) as f32)
}

fn viewport_height() -> Result<f64, DomError> {
    let h = window()?.inner_height()?;
    Ok(h.as_f64().unwrap_or(0.0))
}

/// Current scroll progress of element `id` through the viewport
pub fn measure_progress(id: &str) -> Result<ScrollProgress, DomError> {
    let rect = element_by_id(id)?.get_bounding_client_rect();
    Ok(ScrollProgress::from_geometry(rect.top(), rect.height(), viewport_height()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_ids_are_unique() {
        let a = next_element_id("reveal");
        let b = next_element_id("reveal");
        assert_ne!(a, b);
        assert!(a.starts_with("mai-reveal-"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_bindings_report_no_window() {
        assert!(matches!(viewport_width(), Err(DomError::NoWindow)));
        assert!(matches!(element_by_id("mai-reveal-0"), Err(DomError::NoWindow)));
        assert!(matches!(measure_progress("mai-expand-0"), Err(DomError::NoWindow)));
    }
}

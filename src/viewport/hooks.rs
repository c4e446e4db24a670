//! Dioxus hooks over the viewport bindings
//!
//! Each hook registers in `use_effect` (after the element is in the DOM),
//! stores its guard, and releases it in `use_drop`. Observed values live in
//! the calling component's own signals; nothing is shared between instances.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use super::{
    FALLBACK_VIEWPORT_WIDTH, VisibilityObserver, Watch, WindowListener, element_by_id,
    measure_progress, next_element_id, viewport_width,
};
use crate::effects::RevealPhase;
use crate::primitives::ScrollProgress;

/// Guard slot that lives exactly as long as the component
type GuardSlot<G> = Rc<RefCell<Option<G>>>;

fn use_guard_slot<G: 'static>() -> GuardSlot<G> {
    let slot: GuardSlot<G> = use_hook(|| Rc::new(RefCell::new(None)));
    let on_drop = slot.clone();
    use_drop(move || {
        on_drop.borrow_mut().take();
    });
    slot
}

/// Stable DOM id for this component instance
pub fn use_element_id(prefix: &'static str) -> String {
    use_hook(|| next_element_id(prefix))
}

/// `window.innerWidth`, read at mount and on every resize
pub fn use_viewport_width() -> Signal<f32> {
    let mut width = use_signal(|| FALLBACK_VIEWPORT_WIDTH);
    let slot = use_guard_slot::<WindowListener>();

    use_effect(move || {
        let mut read = move || match viewport_width() {
            Ok(w) => {
                if *width.peek() != w {
                    width.set(w);
                }
            }
            Err(err) => tracing::warn!(error = %err, "viewport width unavailable"),
        };
        read();
        match WindowListener::new("resize", read) {
            Ok(listener) => *slot.borrow_mut() = Some(listener),
            Err(err) => tracing::warn!(error = %err, "resize listener not registered"),
        }
    });

    width
}

/// Scroll progress of element `id`, recomputed on scroll and resize
pub fn use_scroll_progress(id: String) -> Signal<ScrollProgress> {
    let mut progress = use_signal(|| ScrollProgress::START);
    let slot = use_guard_slot::<[WindowListener; 2]>();

    use_effect(move || {
        let mut update = {
            let id = id.clone();
            move || match measure_progress(&id) {
                Ok(p) => {
                    if *progress.peek() != p {
                        progress.set(p);
                    }
                }
                Err(err) => tracing::debug!(id = %id, error = %err, "scroll progress not measured"),
            }
        };
        update();

        let listeners = WindowListener::new("scroll", update.clone())
            .and_then(|scroll| Ok([scroll, WindowListener::new("resize", update)?]));
        match listeners {
            Ok(listeners) => *slot.borrow_mut() = Some(listeners),
            Err(err) => tracing::warn!(id = %id, error = %err, "scroll listeners not registered"),
        }
    });

    progress
}

/// One-shot visibility phase of element `id`.
///
/// Flips to `Shown` the first time at least `threshold` of the element is
/// visible, then stops observing. If the observer cannot be created the
/// element is shown immediately.
pub fn use_reveal(id: String, threshold: f64) -> Signal<RevealPhase> {
    let mut phase = use_signal(RevealPhase::default);
    let slot = use_guard_slot::<VisibilityObserver>();

    use_effect(move || {
        let revealed_id = id.clone();
        let on_change = move |intersecting: bool, ratio: f64| {
            let current = *phase.peek();
            let next = current.observe(intersecting, ratio, threshold);
            if next != current {
                tracing::debug!(id = %revealed_id, ratio, "revealed");
                phase.set(next);
            }
            if next.is_shown() { Watch::Stop } else { Watch::Continue }
        };

        let observer = element_by_id(&id)
            .and_then(|element| VisibilityObserver::new(&element, threshold, on_change));
        match observer {
            Ok(observer) => *slot.borrow_mut() = Some(observer),
            Err(err) => {
                tracing::warn!(id = %id, error = %err, "reveal observer unavailable, showing now");
                phase.set(RevealPhase::Shown);
            }
        }
    });

    phase
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::cell::Cell;
    use std::time::Duration;

    use dioxus::dioxus_core::{NoOpMutations, ScopeId, VirtualDom};

    use super::*;

    thread_local! {
        static MOUNTED: Cell<bool> = const { Cell::new(true) };
        static RELEASED: Cell<u32> = const { Cell::new(0) };
        static SEEN_PHASE: Cell<Option<RevealPhase>> = const { Cell::new(None) };
        static SEEN_WIDTH: Cell<Option<f32>> = const { Cell::new(None) };
    }

    struct CountingGuard;

    impl Drop for CountingGuard {
        fn drop(&mut self) {
            RELEASED.with(|n| n.set(n.get() + 1));
        }
    }

    #[component]
    fn Guarded() -> Element {
        let slot = use_guard_slot::<CountingGuard>();
        use_hook(|| {
            *slot.borrow_mut() = Some(CountingGuard);
        });
        rsx! { div {} }
    }

    #[allow(non_snake_case)]
    fn GuardHost() -> Element {
        let mounted = MOUNTED.with(Cell::get);
        rsx! {
            if mounted {
                Guarded {}
            }
        }
    }

    #[allow(non_snake_case)]
    fn RevealHost() -> Element {
        let phase = use_reveal("mai-reveal-detached".to_string(), 0.25);
        SEEN_PHASE.with(|p| p.set(Some(phase())));
        rsx! { div {} }
    }

    #[allow(non_snake_case)]
    fn WidthHost() -> Element {
        let width = use_viewport_width();
        SEEN_WIDTH.with(|w| w.set(Some(width())));
        rsx! { div {} }
    }

    /// Run queued effects and re-render until the dom goes quiet.
    async fn settle(dom: &mut VirtualDom) {
        for _ in 0..4 {
            dom.render_immediate(&mut NoOpMutations);
            let _ = tokio::time::timeout(Duration::from_millis(20), dom.wait_for_work()).await;
        }
        dom.render_immediate(&mut NoOpMutations);
    }

    #[test]
    fn guard_released_once_on_unmount() {
        let mut dom = VirtualDom::new(GuardHost);
        dom.rebuild_in_place();
        assert_eq!(RELEASED.with(Cell::get), 0);

        MOUNTED.with(|m| m.set(false));
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate(&mut NoOpMutations);
        assert_eq!(RELEASED.with(Cell::get), 1);

        drop(dom);
        assert_eq!(RELEASED.with(Cell::get), 1);
    }

    #[tokio::test]
    async fn reveal_shows_when_observer_unavailable() {
        let mut dom = VirtualDom::new(RevealHost);
        dom.rebuild_in_place();
        assert_eq!(SEEN_PHASE.with(Cell::get), Some(RevealPhase::Hidden));

        settle(&mut dom).await;
        assert_eq!(SEEN_PHASE.with(Cell::get), Some(RevealPhase::Shown));
    }

    #[tokio::test]
    async fn viewport_width_keeps_fallback_without_window() {
        let mut dom = VirtualDom::new(WidthHost);
        dom.rebuild_in_place();
        settle(&mut dom).await;
        assert_eq!(SEEN_WIDTH.with(Cell::get), Some(FALLBACK_VIEWPORT_WIDTH));
    }
}

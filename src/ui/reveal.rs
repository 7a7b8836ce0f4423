//! Scroll-triggered entrance animations

use leptos::html;
use leptos::prelude::*;

use crate::core::reveal::ANIMATE_CLASS;
use crate::core::{RevealKind, RevealOptions};

/// Reactive reveal state of one observed container
#[derive(Clone, Copy)]
pub struct RevealState {
    kind: RevealKind,
    revealed: RwSignal<bool>,
    visible_items: RwSignal<usize>,
}

impl RevealState {
    /// Container class list, with the animation class once revealed
    pub fn class(&self, base: &str) -> String {
        if self.revealed.get() {
            format!("{base} {ANIMATE_CLASS}")
        } else {
            base.to_string()
        }
    }

    /// Inline style of the `index`-th child
    pub fn item_style(&self, index: usize) -> String {
        self.kind
            .item_style(index < self.visible_items.get())
            .unwrap_or_default()
    }

    #[cfg(not(feature = "ssr"))]
    fn reveal(&self, item_count: usize) {
        use gloo_timers::future::TimeoutFuture;
        use leptos::task::spawn_local;

        self.revealed.set(true);
        let visible_items = self.visible_items;
        for (index, delay) in self.kind.schedule(item_count).into_iter().enumerate() {
            spawn_local(async move {
                TimeoutFuture::new(delay).await;
                visible_items.try_update(|shown| *shown = (*shown).max(index + 1));
            });
        }
    }
}

/// Reveal `target` and stagger its `item_count` children on first entry
pub fn use_reveal(target: NodeRef<html::Div>, kind: RevealKind, item_count: usize) -> RevealState {
    use_reveal_with(target, kind, item_count, RevealOptions::default())
}

pub fn use_reveal_with(
    target: NodeRef<html::Div>,
    kind: RevealKind,
    item_count: usize,
    options: RevealOptions,
) -> RevealState {
    let state = RevealState {
        kind,
        revealed: RwSignal::new(false),
        visible_items: RwSignal::new(0),
    };

    Effect::new(move |installed: Option<bool>| {
        if installed == Some(true) {
            return true;
        }
        #[cfg(not(feature = "ssr"))]
        {
            use crate::core::{RevealAction, RevealTracker};

            if let Some(element) = target.get() {
                let mut tracker = RevealTracker::new(options);
                observe_intersections(&element, Some(options), move |is_intersecting| {
                    match tracker.on_intersection(is_intersecting) {
                        RevealAction::Ignore => false,
                        RevealAction::Reveal { unobserve } => {
                            state.reveal(item_count);
                            unobserve
                        }
                    }
                });
                return true;
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = (target, item_count, options);
        }
        false
    });

    state
}

/// Watch `element` entering the viewport.
///
/// `on_entry` receives `isIntersecting` for every notification and returns
/// whether to stop watching.
#[cfg(not(feature = "ssr"))]
pub(crate) fn observe_intersections(
    element: &web_sys::Element,
    options: Option<RevealOptions>,
    mut on_entry: impl FnMut(bool) -> bool + 'static,
) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                if on_entry(entry.is_intersecting()) {
                    observer.unobserve(&entry.target());
                }
            }
        },
    );

    let init = web_sys::IntersectionObserverInit::new();
    if let Some(options) = options {
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);
    }

    match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer.observe(element),
        Err(e) => leptos::logging::warn!("IntersectionObserver unavailable: {:?}", e),
    }

    // Keep the closure alive
    callback.forget();
}

//! Image preloading and lazily loaded backgrounds

use leptos::html;
use leptos::prelude::*;

use crate::core::preload::background_image;

/// Start fetching the images the first screens need
#[cfg(not(feature = "ssr"))]
pub fn preload_critical_images() {
    use crate::core::preload::CRITICAL_IMAGES;

    let mut requested = 0;
    for src in CRITICAL_IMAGES {
        if let Ok(image) = web_sys::HtmlImageElement::new() {
            image.set_src(src);
            requested += 1;
        }
    }
    leptos::logging::log!("Preloading {} critical images from Unsplash", requested);
}

/// Inline style that sets `url` as background once `target` is in view
pub fn use_lazy_background(target: NodeRef<html::Div>, url: String) -> Signal<String> {
    let loaded = RwSignal::new(false);

    Effect::new(move |installed: Option<bool>| {
        if installed == Some(true) {
            return true;
        }
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(element) = target.get() {
                super::reveal::observe_intersections(&element, None, move |is_intersecting| {
                    if is_intersecting {
                        loaded.set(true);
                    }
                    is_intersecting
                });
                return true;
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = target;
        }
        false
    });

    Signal::derive(move || {
        if loaded.get() {
            format!("background-image: {};", background_image(&url))
        } else {
            String::new()
        }
    })
}

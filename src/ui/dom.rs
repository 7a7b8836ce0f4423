//! Browser document helpers. Every lookup is optional: a missing element
//! turns the calling feature into a no-op.

use wasm_bindgen::JsCast;

use crate::core::Locale;

pub fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

pub fn body() -> Option<web_sys::HtmlElement> {
    document()?.body()
}

/// First element matching `selector`, cast to `T`
pub fn query<T: JsCast>(selector: &str) -> Option<T> {
    document()?.query_selector(selector).ok()??.dyn_into::<T>().ok()
}

pub fn element_by_id<T: JsCast>(id: &str) -> Option<T> {
    document()?.get_element_by_id(id)?.dyn_into::<T>().ok()
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn smooth_scroll_into_view(element: &web_sys::Element) {
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn set_body_class(class: &str, enabled: bool) {
    if let Some(body) = body() {
        let _ = body.class_list().toggle_with_force(class, enabled);
    }
}

/// Stop or restore scrolling of the page behind an overlay
pub fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = body() {
        let style = body.style();
        let _ = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
    }
}

/// Write `lang` and `dir` on the root element
pub fn set_document_locale(locale: Locale) {
    if let Some(html) = document().and_then(|document| document.document_element()) {
        let _ = html.set_attribute("lang", locale.code());
        let _ = html.set_attribute("dir", locale.direction().as_str());
    }
}

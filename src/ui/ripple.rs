//! Click ripples on buttons

use leptos::prelude::*;

use crate::core::RippleSet;

/// Add a ripple centred on the click inside the clicked element
pub fn spawn_ripple(ripples: RwSignal<RippleSet>, ev: &leptos::ev::MouseEvent) {
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::ButtonRect;
        use crate::core::ripple::RIPPLE_DURATION_MS;
        use gloo_timers::future::TimeoutFuture;
        use leptos::task::spawn_local;
        use wasm_bindgen::JsCast;

        let Some(element) = ev
            .current_target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        let bounds = element.get_bounding_client_rect();
        let rect = ButtonRect {
            left: bounds.left(),
            top: bounds.top(),
            width: bounds.width(),
            height: bounds.height(),
        };
        let Some(id) = ripples.try_update(|set| {
            set.spawn(rect, f64::from(ev.client_x()), f64::from(ev.client_y()))
        }) else {
            return;
        };

        spawn_local(async move {
            TimeoutFuture::new(RIPPLE_DURATION_MS).await;
            ripples.try_update(|set| set.remove(id));
        });
    }
    #[cfg(feature = "ssr")]
    {
        let _ = (ripples, ev);
    }
}

/// Live ripple spans of one button
#[component]
pub fn RippleLayer(ripples: RwSignal<RippleSet>) -> impl IntoView {
    view! {
        <For
            each=move || ripples.with(|set| set.ripples().to_vec())
            key=|ripple| ripple.id
            children=|ripple| view! { <span class="ripple" style=ripple.style()></span> }
        />
    }
}

/// `.btn` button with a click ripple
#[component]
pub fn RippleButton(
    /// Classes added after `btn`
    #[prop(optional, into)]
    class: String,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let ripples = RwSignal::new(RippleSet::default());

    view! {
        <button
            type=button_type
            class=format!("btn {class}")
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                spawn_ripple(ripples, &ev);
                if let Some(callback) = on_click {
                    callback.run(());
                }
            }
        >
            {children()}
            <RippleLayer ripples=ripples />
        </button>
    }
}

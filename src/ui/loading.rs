//! Loading screen shown on first paint

use leptos::prelude::*;

use super::state::use_site_context;
use crate::core::loading::STAGE_LIGHTS_DURATION;

#[component]
pub fn LoadingScreen() -> impl IntoView {
    let site = use_site_context();

    // Runs once, in the browser only
    Effect::new(move |_| {
        #[cfg(not(feature = "ssr"))]
        {
            use crate::core::LoadingPhase;
            use crate::core::loading::{LOADING_DISPLAY_MS, LOADING_FADE_MS};
            use gloo_timers::future::TimeoutFuture;
            use leptos::task::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(LOADING_DISPLAY_MS).await;
                site.loading.try_update(LoadingPhase::advance);
                TimeoutFuture::new(LOADING_FADE_MS).await;
                site.loading.try_update(LoadingPhase::advance);
            });
        }
    });

    let style = move || {
        let phase = site.loading.get();
        match phase.display() {
            Some(display) => format!("opacity: {}; display: {};", phase.opacity(), display),
            None => format!("opacity: {};", phase.opacity()),
        }
    };

    view! {
        <div id="loadingScreen" class="loading-screen" style=style aria-hidden="true">
            <div
                class="stage-lights"
                style=format!("animation-duration: {STAGE_LIGHTS_DURATION};")
            ></div>
            <div class="loading-logo">
                <span class="logo-text">"The Junction"</span>
                <span class="logo-sub">"Dubai"</span>
            </div>
        </div>
    }
}

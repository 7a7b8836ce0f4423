//! Full-screen overlays for gallery images and the story placeholder
//!
//! The [`OverlayManager`](crate::core::OverlayManager) in the site context is
//! the single source of truth; [`OverlayHost`] renders whatever it holds.
//! Opening and closing go through [`open_overlay`] and [`close_overlay`],
//! which schedule the fade timers.

use leptos::prelude::*;

use super::state::{SiteContext, use_site_context};
use crate::core::locale::phrases;
use crate::core::overlay::FADE_DURATION_MS;
use crate::core::preload::{STORY_BACKGROUND, background_image};
use crate::core::{Overlay, OverlayContent, OverlayHandle};

const INFO_BACKDROP: &str = "rgba(21,17,16,0.95)";
const PLACEHOLDER_BACKDROP: &str = "rgba(0,0,0,0.95)";

const INFO_CARD_STYLE: &str = "background: var(--surface); border: 1px solid rgba(255,255,255,0.06); \
    border-radius: var(--radius-lg); padding: 2rem; max-width: 500px; text-align: center; box-shadow: var(--shadow-lg);";
const INFO_CLOSE_STYLE: &str = "background: var(--accent); color: var(--bg); border: none; \
    padding: 0.8rem 1.5rem; border-radius: 999px; cursor: pointer; font-weight: 600;";
const PLACEHOLDER_FRAME_STYLE: &str = "position: relative; width: 100%; max-width: 900px; aspect-ratio: 16/9; \
    background: var(--surface); border-radius: var(--radius-lg); overflow: hidden; box-shadow: var(--shadow-lg);";
const PLACEHOLDER_CLOSE_STYLE: &str = "position: absolute; top: 1rem; right: 1rem; width: 40px; height: 40px; \
    background: rgba(0,0,0,0.7); color: white; border: none; border-radius: 50%; cursor: pointer; z-index: 10; \
    display: flex; align-items: center; justify-content: center; font-size: 18px;";
const PLAY_BADGE_STYLE: &str = "width: 80px; height: 80px; background: rgba(212,163,115,0.9); border-radius: 50%; \
    display: flex; align-items: center; justify-content: center; margin-bottom: 2rem; color: var(--bg);";
const NOTICE_STYLE: &str = "background: rgba(255,255,255,0.1); padding: 1rem 2rem; border-radius: var(--radius); \
    border: 1px solid rgba(255,255,255,0.1);";

/// Attach an overlay and schedule its fade-in
pub fn open_overlay(site: SiteContext, content: OverlayContent) -> Option<OverlayHandle> {
    let handle = site.overlays.try_update(|overlays| overlays.open(content))?;
    sync_page_lock(site);

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::overlay::FADE_IN_DELAY_MS;
        use gloo_timers::future::TimeoutFuture;
        use leptos::task::spawn_local;

        spawn_local(async move {
            TimeoutFuture::new(FADE_IN_DELAY_MS).await;
            site.overlays.try_update(|overlays| {
                let _ = overlays.mark_shown(handle);
            });
        });
    }

    Some(handle)
}

/// Fade an overlay out and dispose of it. Repeated calls are ignored.
pub fn close_overlay(site: SiteContext, handle: OverlayHandle) {
    if !matches!(
        site.overlays.try_update(|overlays| overlays.close(handle)),
        Some(Ok(()))
    ) {
        return;
    }
    sync_page_lock(site);

    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::future::TimeoutFuture;
        use leptos::task::spawn_local;

        spawn_local(async move {
            TimeoutFuture::new(FADE_DURATION_MS).await;
            site.overlays.try_update(|overlays| {
                let _ = overlays.dispose(handle);
            });
        });
    }
}

fn sync_page_lock(site: SiteContext) {
    let locked = site.overlays.with_untracked(|overlays| overlays.locks_page());
    if site.modal_open.get_untracked() != locked {
        site.modal_open.set(locked);
    }
}

/// Renders every attached overlay and locks page scrolling while needed
#[component]
pub fn OverlayHost() -> impl IntoView {
    let site = use_site_context();

    Effect::new(move |_| {
        let locked = site.modal_open.get();
        #[cfg(not(feature = "ssr"))]
        super::dom::set_body_scroll_locked(locked);
        #[cfg(feature = "ssr")]
        let _ = locked;
    });

    view! {
        <For
            each=move || site.overlays.with(|overlays| overlays.handles())
            key=|handle| *handle
            children=move |handle| view! { <OverlayView handle=handle /> }
        />
    }
}

#[component]
fn OverlayView(handle: OverlayHandle) -> impl IntoView {
    let site = use_site_context();
    let Some(content) = site
        .overlays
        .with_untracked(|overlays| overlays.get(handle).map(|o| o.content().clone()))
    else {
        return ().into_any();
    };

    // Escape closes the topmost overlay only
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape"
                && site.overlays.with_untracked(|overlays| overlays.topmost()) == Some(handle)
            {
                close_overlay(site, handle);
            }
        });

        on_cleanup(move || handle_keydown.remove());
    }

    let on_backdrop_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(not(feature = "ssr"))]
        {
            if ev.target() == ev.current_target() {
                close_overlay(site, handle);
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = ev;
        }
    };

    let base_style = root_style(&content);
    let style = move || {
        let opacity = site
            .overlays
            .with(|overlays| overlays.get(handle).map(Overlay::opacity))
            .unwrap_or(0.0);
        format!("{base_style} opacity: {opacity};")
    };

    let body = match content {
        OverlayContent::Info { title, description } => view! {
            <div class="overlay-card" style=INFO_CARD_STYLE>
                <h3 style="color: var(--accent); margin-bottom: 1rem;">{title}</h3>
                <p style="color: var(--muted); margin-bottom: 1.5rem;">{description}</p>
                <button
                    type="button"
                    class="overlay-close"
                    style=INFO_CLOSE_STYLE
                    on:click=move |_| close_overlay(site, handle)
                >
                    {move || phrases::CLOSE.get(site.locale())}
                </button>
            </div>
        }
        .into_any(),
        OverlayContent::Placeholder {
            title,
            message,
            notice,
        } => {
            let stage_style = format!(
                "width: 100%; height: 100%; background: linear-gradient(135deg, rgba(21,17,16,0.8), rgba(0,0,0,0.6)), {}; \
                 background-size: cover; background-position: center; display: flex; flex-direction: column; \
                 align-items: center; justify-content: center; text-align: center; color: var(--text); padding: 2rem;",
                background_image(STORY_BACKGROUND)
            );
            view! {
                <div class="overlay-frame" style=PLACEHOLDER_FRAME_STYLE>
                    <button
                        type="button"
                        class="overlay-close"
                        style=PLACEHOLDER_CLOSE_STYLE
                        aria-label=move || phrases::CLOSE.get(site.locale())
                        on:click=move |_| close_overlay(site, handle)
                    >
                        "×"
                    </button>
                    <div style=stage_style>
                        <div style=PLAY_BADGE_STYLE>
                            <svg width="32" height="32" viewBox="0 0 24 24" fill="none" aria-hidden="true">
                                <path d="M8 5.14v13.72L19 12L8 5.14z" fill="currentColor" />
                            </svg>
                        </div>
                        <h2 style="margin: 0 0 1rem; color: var(--accent);">{title}</h2>
                        <p style="margin: 0 0 1.5rem; color: var(--muted); max-width: 60ch; line-height: 1.6;">
                            {message}
                        </p>
                        <div style=NOTICE_STYLE>
                            <p style="margin: 0; font-size: 0.9rem; color: var(--muted);">{notice}</p>
                        </div>
                    </div>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <div class="overlay" role="dialog" aria-modal="true" style=style on:click=on_backdrop_click>
            {body}
        </div>
    }
    .into_any()
}

/// Inline style of the overlay root, minus its animated opacity
fn root_style(content: &OverlayContent) -> String {
    let layout = match content {
        OverlayContent::Info { .. } => {
            format!("background: {INFO_BACKDROP}; display: grid; place-items: center; padding: 2rem;")
        }
        OverlayContent::Placeholder { .. } => format!(
            "background: {PLACEHOLDER_BACKDROP}; display: flex; align-items: center; justify-content: center; \
             padding: 2rem; padding-top: 6rem;"
        ),
    };
    format!(
        "position: fixed; inset: 0; z-index: {}; transition: opacity {}ms ease; {layout}",
        content.z_index(),
        FADE_DURATION_MS
    )
}

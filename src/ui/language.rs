//! Language switching between English and Arabic
//!
//! Translatable text is rendered with both variants in `data-en` / `data-ar`
//! attributes and shows the one matching the active locale.

use leptos::prelude::*;

use super::state::{SiteContext, use_site_context};
use crate::core::{Locale, LocalizedText};

/// How long the `lang-switching` class stays on `<body>` (ms)
pub const LANG_TRANSITION_MS: u32 = 300;

pub const LANG_SWITCHING_CLASS: &str = "lang-switching";

/// Make `locale` the active language of the whole page
pub fn switch_language(site: SiteContext, locale: Locale) {
    let Some(ticket) = site.locale.try_update(|state| state.switch_to(locale)) else {
        return;
    };

    #[cfg(not(feature = "ssr"))]
    {
        use super::dom;
        use gloo_timers::future::TimeoutFuture;
        use leptos::task::spawn_local;

        dom::set_document_locale(locale);
        dom::set_body_class(LANG_SWITCHING_CLASS, true);

        spawn_local(async move {
            TimeoutFuture::new(LANG_TRANSITION_MS).await;
            // A newer switch owns the class now
            if site
                .locale
                .try_with_untracked(|state| state.is_latest(ticket))
                .unwrap_or(false)
            {
                dom::set_body_class(LANG_SWITCHING_CLASS, false);
            }
        });
    }
    #[cfg(feature = "ssr")]
    {
        let _ = ticket;
    }
}

/// Bilingual text from literal strings
#[component]
pub fn Bilingual(#[prop(into)] en: String, #[prop(into)] ar: String) -> impl IntoView {
    view! { <BilingualText text=LocalizedText::new(en, ar) /> }
}

/// Bilingual text tagged with both variants
#[component]
pub fn BilingualText(text: LocalizedText) -> impl IntoView {
    let site = use_site_context();
    let data_en = text.en.clone();
    let data_ar = text.ar.clone();

    view! {
        <span data-en=data_en data-ar=data_ar>
            {move || text.display(site.locale()).to_string()}
        </span>
    }
}

/// Language selector, shown once the loading screen is gone
#[component]
pub fn LanguageToggle() -> impl IntoView {
    let site = use_site_context();

    view! {
        <div
            id="languageToggle"
            class="language-toggle"
            style=move || format!("display: {};", site.loading.get().language_toggle_display())
        >
            {Locale::ALL
                .into_iter()
                .map(|locale| {
                    view! {
                        <button
                            type="button"
                            class="lang-btn"
                            class:active=move || site.locale() == locale
                            data-lang=locale.code()
                            aria-label=format!("Switch language to {}", locale.code())
                            on:click=move |_| site.set_locale(locale)
                        >
                            {locale.selector_label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

//! Site-wide reactive state
//!
//! One [`SiteContext`] is provided by the app root and shared by every
//! component. It replaces free-floating page globals with signals that have
//! defined initial values.

use leptos::prelude::*;

use crate::core::{Locale, LoadingPhase, LocaleState, MenuState, OverlayManager};

/// Locale the server renders before the visitor chooses one
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct DefaultLocale(pub Locale);

#[derive(Clone, Copy)]
pub struct SiteContext {
    /// Active locale and switch counter
    pub locale: RwSignal<LocaleState>,
    /// Set while a page-locking overlay is open; pins the navbar
    pub modal_open: RwSignal<bool>,
    pub loading: RwSignal<LoadingPhase>,
    pub menu: RwSignal<MenuState>,
    pub overlays: RwSignal<OverlayManager>,
}

impl SiteContext {
    fn new(locale: Locale) -> Self {
        Self {
            locale: RwSignal::new(LocaleState::new(locale)),
            modal_open: RwSignal::new(false),
            loading: RwSignal::new(LoadingPhase::default()),
            menu: RwSignal::new(MenuState::default()),
            overlays: RwSignal::new(OverlayManager::new()),
        }
    }

    /// Active locale, tracked
    pub fn locale(&self) -> Locale {
        self.locale.with(LocaleState::locale)
    }

    pub fn locale_untracked(&self) -> Locale {
        self.locale.with_untracked(LocaleState::locale)
    }

    /// Switch the whole page to `locale`
    pub fn set_locale(&self, locale: Locale) {
        super::language::switch_language(*self, locale);
    }

    pub fn toggle_menu(&self) {
        self.menu.update(MenuState::toggle);
    }

    pub fn close_menu(&self) {
        self.menu.update(MenuState::collapse);
    }
}

/// Locale the page was rendered with.
///
/// On the server this is the configured default; in the browser it is read
/// back from `<html lang>` so hydration starts from the same text.
fn initial_locale() -> Locale {
    if let Some(DefaultLocale(locale)) = use_context::<DefaultLocale>() {
        return locale;
    }
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(lang) = super::dom::document()
            .and_then(|document| document.document_element())
            .and_then(|html| html.get_attribute("lang"))
        {
            match lang.parse::<Locale>() {
                Ok(locale) => return locale,
                Err(e) => leptos::logging::warn!("{}", e),
            }
        }
    }
    Locale::default()
}

/// Provide site context to the application
pub fn provide_site_context() -> SiteContext {
    let ctx = SiteContext::new(initial_locale());
    provide_context(ctx);
    ctx
}

/// Use site context from anywhere in the component tree
pub fn use_site_context() -> SiteContext {
    use_context::<SiteContext>().expect("SiteContext should be provided")
}

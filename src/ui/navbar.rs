//! Fixed navigation bar
//!
//! Handles the mobile menu, in-page smooth scrolling and hiding the bar
//! while the visitor scrolls down.

use leptos::html;
use leptos::prelude::*;

use super::language::BilingualText;
use super::ripple::{RippleLayer, spawn_ripple};
use super::state::use_site_context;
use crate::core::overlay::{NAVBAR_RAISED_Z_INDEX, NAVBAR_Z_INDEX};
use crate::core::{NavbarBackdrop, NavbarVisibility, RippleSet, SiteContent};

/// Smooth-scroll to the section a `#id` link points at
#[cfg(not(feature = "ssr"))]
pub fn scroll_to_anchor(href: &str) {
    use super::dom;
    use crate::core::navigation::{anchor_target, scroll_offset};

    let Some(id) = anchor_target(href) else {
        return;
    };
    let Some(target) = dom::element_by_id::<web_sys::HtmlElement>(id) else {
        return;
    };
    let navbar_height = dom::query::<web_sys::HtmlElement>(".navbar")
        .map(|navbar| f64::from(navbar.offset_height()))
        .unwrap_or(0.0);
    dom::smooth_scroll_to(scroll_offset(f64::from(target.offset_top()), navbar_height));
}

/// Same-page link that scrolls smoothly and closes the mobile menu
#[component]
pub fn AnchorLink(
    #[prop(into)] href: String,
    #[prop(optional, into)] class: String,
    /// Show a click ripple (for `.btn` links)
    #[prop(optional)]
    ripple: bool,
    children: Children,
) -> impl IntoView {
    let site = use_site_context();
    let ripples = RwSignal::new(RippleSet::default());
    let target = href.clone();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        if ripple {
            spawn_ripple(ripples, &ev);
        }
        #[cfg(not(feature = "ssr"))]
        scroll_to_anchor(&target);
        #[cfg(feature = "ssr")]
        let _ = &target;
        site.close_menu();
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
            {ripple.then(|| view! { <RippleLayer ripples=ripples /> })}
        </a>
    }
}

fn navbar_style(visibility: NavbarVisibility, backdrop: Option<NavbarBackdrop>, raised: bool) -> String {
    let z_index = if raised {
        NAVBAR_RAISED_Z_INDEX
    } else {
        NAVBAR_Z_INDEX
    };
    let mut style = format!("transform: {}; z-index: {};", visibility.transform(), z_index);
    if let Some(backdrop) = backdrop {
        style.push_str(&format!(
            " backdrop-filter: {}; background: {};",
            backdrop.backdrop_filter(),
            backdrop.background()
        ));
    }
    style
}

#[component]
pub fn Navbar() -> impl IntoView {
    let site = use_site_context();
    let links = &SiteContent::embedded().nav;

    let toggle_ref = NodeRef::<html::Button>::new();
    let menu_ref = NodeRef::<html::Ul>::new();
    let visibility = RwSignal::new(NavbarVisibility::Shown);
    let backdrop = RwSignal::new(None::<NavbarBackdrop>);

    // Keep the bar on screen while a page-locking overlay is open
    Effect::new(move |_| {
        if site.modal_open.get() {
            visibility.set(NavbarVisibility::Shown);
        }
    });

    #[cfg(not(feature = "ssr"))]
    {
        use super::dom;
        use crate::core::ScrollReactor;
        use leptos::ev::{click, scroll};
        use wasm_bindgen::JsCast;

        let reactor = StoredValue::new(ScrollReactor::new(dom::scroll_y()));
        let handle_scroll = window_event_listener(scroll, move |_| {
            let scroll_y = dom::scroll_y();
            let modal_open = site.modal_open.get_untracked();
            if let Some(update) =
                reactor.try_update_value(|reactor| reactor.on_scroll(scroll_y, modal_open))
            {
                visibility.set(update.visibility);
                if let Some(next) = update.backdrop {
                    if backdrop.get_untracked() != Some(next) {
                        backdrop.set(Some(next));
                    }
                }
            }
        });

        // Clicking anywhere outside the toggle and the menu collapses it
        let handle_click = window_event_listener(click, move |ev| {
            let target = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
            let in_toggle = toggle_ref
                .get_untracked()
                .is_some_and(|toggle| toggle.contains(target.as_ref()));
            let in_menu = menu_ref
                .get_untracked()
                .is_some_and(|menu| menu.contains(target.as_ref()));
            if !in_toggle && !in_menu {
                site.close_menu();
            }
        });

        on_cleanup(move || {
            handle_scroll.remove();
            handle_click.remove();
        });
    }

    view! {
        <nav
            class="navbar"
            style=move || navbar_style(visibility.get(), backdrop.get(), site.modal_open.get())
        >
            <div class="nav-container">
                <AnchorLink href="#home" class="nav-logo">
                    <span class="logo-text">"The Junction"</span>
                    <span class="logo-sub">"Dubai"</span>
                </AnchorLink>

                <ul
                    id="navMenu"
                    class="nav-menu"
                    node_ref=menu_ref
                    style=move || format!("display: {};", site.menu.get().display())
                >
                    {links
                        .iter()
                        .map(|link| {
                            view! {
                                <li>
                                    <AnchorLink href=link.href.clone() class="nav-link">
                                        <BilingualText text=link.label.clone() />
                                    </AnchorLink>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <button
                    id="navToggle"
                    type="button"
                    class="nav-toggle"
                    class:active=move || site.menu.get().is_expanded()
                    node_ref=toggle_ref
                    aria-label="Toggle navigation"
                    aria-expanded=move || site.menu.get().is_expanded().to_string()
                    on:click=move |_| site.toggle_menu()
                >
                    {(0..3)
                        .map(|bar| {
                            view! {
                                <span style=move || {
                                    let style = site.menu.get().bar_styles()[bar];
                                    format!("transform: {}; opacity: {};", style.transform, style.opacity)
                                }></span>
                            }
                        })
                        .collect_view()}
                </button>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navbar_style_at_rest() {
        assert_eq!(
            navbar_style(NavbarVisibility::Shown, None, false),
            "transform: translateY(0); z-index: 100;"
        );
    }

    #[test]
    fn test_navbar_style_raised_with_backdrop() {
        let style = navbar_style(
            NavbarVisibility::Hidden,
            Some(NavbarBackdrop::Dense),
            true,
        );
        assert!(style.starts_with("transform: translateY(-100%); z-index: 2100;"));
        assert!(style.contains("backdrop-filter: saturate(140%) blur(20px);"));
    }
}

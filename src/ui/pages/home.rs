//! The single marketing page
//!
//! Sections, top to bottom: hero, about, workshops, events, gallery,
//! newsletter and footer. The loading screen, language selector, navbar
//! and overlay host sit above them.

use leptos::html;
use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::{Card, OverlayContent, RevealKind, SiteContent};
use crate::ui::gallery::GallerySection;
use crate::ui::language::{Bilingual, BilingualText, LanguageToggle};
use crate::ui::loading::LoadingScreen;
use crate::ui::navbar::{AnchorLink, Navbar};
use crate::ui::newsletter::NewsletterSection;
use crate::ui::overlay::{OverlayHost, open_overlay};
use crate::ui::reveal::{RevealState, use_reveal};
use crate::ui::state::use_site_context;

#[component]
pub fn HomePage() -> impl IntoView {
    // Warm the image cache once the page is live
    Effect::new(move |_| {
        #[cfg(not(feature = "ssr"))]
        crate::ui::preload::preload_critical_images();
    });

    view! {
        <Title text="The Junction Dubai" />
        <Meta
            name="description"
            content="The Junction Dubai: an independent stage for theatre, comedy, workshops and community events."
        />

        <LoadingScreen />
        <LanguageToggle />
        <Navbar />

        <main>
            <Hero />
            <AboutSection />
            <WorkshopsSection />
            <EventsSection />
            <GallerySection />
            <NewsletterSection />
        </main>

        <Footer />
        <OverlayHost />
    }
}

#[component]
fn Hero() -> impl IntoView {
    let on_scroll_indicator = move |_| {
        #[cfg(not(feature = "ssr"))]
        scroll_into_view("about");
    };

    view! {
        <section id="home" class="hero">
            <div class="hero-content">
                <h1 class="hero-title">
                    <Bilingual en="Where Stories Meet" ar="حيث تلتقي الحكايات" />
                </h1>
                <p class="hero-subtitle">
                    <Bilingual
                        en="Dubai's independent home for theatre, comedy and live art."
                        ar="البيت المستقل في دبي للمسرح والكوميديا والفن الحي."
                    />
                </p>
                <div class="hero-actions">
                    <AnchorLink href="#workshops" class="btn btn-primary" ripple=true>
                        <Bilingual en="Explore Workshops" ar="استكشف ورش العمل" />
                    </AnchorLink>
                    <AnchorLink href="#about" class="btn btn-secondary" ripple=true>
                        <Bilingual en="Our Story" ar="قصتنا" />
                    </AnchorLink>
                </div>
            </div>
            <div class="scroll-indicator" on:click=on_scroll_indicator>
                <span class="scroll-arrow"></span>
            </div>
        </section>
    }
}

#[cfg(not(feature = "ssr"))]
fn scroll_into_view(id: &str) {
    use crate::ui::dom;

    if let Some(section) = dom::element_by_id::<web_sys::Element>(id) {
        dom::smooth_scroll_into_view(&section);
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    let site = use_site_context();
    let cards = &SiteContent::embedded().about;
    let grid_ref = NodeRef::<html::Div>::new();
    let reveal = use_reveal(grid_ref, RevealKind::CardGrid, cards.len());

    let open_story = move |_| {
        open_overlay(site, OverlayContent::story(site.locale_untracked()));
    };

    view! {
        <section id="about" class="about">
            <div class="container">
                <h2 class="section-title">
                    <Bilingual en="About The Junction" ar="عن ذا جانكشن" />
                </h2>
                <div class=move || reveal.class("about-grid") node_ref=grid_ref>
                    <CardList cards=cards class="about-card" reveal=reveal />
                </div>
                <div class="video-placeholder" on:click=open_story>
                    <button type="button" class="play-button-large" aria-label="Play our story">
                        <svg width="48" height="48" viewBox="0 0 24 24" fill="currentColor">
                            <path d="M8 5v14l11-7z" />
                        </svg>
                    </button>
                    <p>
                        <Bilingual en="Watch our story" ar="شاهد قصتنا" />
                    </p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn WorkshopsSection() -> impl IntoView {
    let cards = &SiteContent::embedded().workshops;
    let grid_ref = NodeRef::<html::Div>::new();
    let reveal = use_reveal(grid_ref, RevealKind::CardGrid, cards.len());

    view! {
        <section id="workshops" class="workshops">
            <div class="container">
                <h2 class="section-title">
                    <Bilingual en="Workshops" ar="ورش العمل" />
                </h2>
                <div class=move || reveal.class("workshop-grid") node_ref=grid_ref>
                    <CardList cards=cards class="workshop-card" reveal=reveal />
                </div>
            </div>
        </section>
    }
}

#[component]
fn CardList(cards: &'static [Card], class: &'static str, reveal: RevealState) -> impl IntoView {
    cards
        .iter()
        .enumerate()
        .map(|(index, card)| {
            view! {
                <div class=class style=move || reveal.item_style(index)>
                    <div class="card-icon" aria-hidden="true">{card.icon.clone()}</div>
                    <h3><BilingualText text=card.title.clone() /></h3>
                    <p><BilingualText text=card.body.clone() /></p>
                </div>
            }
        })
        .collect_view()
}

#[component]
fn EventsSection() -> impl IntoView {
    let status_ref = NodeRef::<html::Div>::new();
    let reveal = use_reveal(status_ref, RevealKind::Section, 0);

    view! {
        <section id="events" class="events">
            <div class="container">
                <h2 class="section-title">
                    <Bilingual en="Events" ar="الفعاليات" />
                </h2>
                <div class=move || reveal.class("events-status") node_ref=status_ref>
                    <h3>
                        <Bilingual en="New season coming soon" ar="موسم جديد قريباً" />
                    </h3>
                    <p>
                        <Bilingual
                            en="We are putting the programme together. Join the newsletter to hear first."
                            ar="نحن نُعد البرنامج الآن. اشترك في النشرة لتكون أول من يعلم."
                        />
                    </p>
                    <AnchorLink href="#newsletter" class="btn btn-primary" ripple=true>
                        <Bilingual en="Get Notified" ar="أعلمني" />
                    </AnchorLink>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <p class="footer-brand">"The Junction Dubai"</p>
                <p class="footer-copy">
                    <Bilingual
                        en="© 2025 The Junction. All rights reserved."
                        ar="© 2025 ذا جانكشن. جميع الحقوق محفوظة."
                    />
                </p>
            </div>
        </footer>
    }
}

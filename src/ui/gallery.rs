//! Gallery grid with lazily loaded tiles that open overlays

use leptos::html;
use leptos::prelude::*;

use super::language::{Bilingual, BilingualText};
use super::overlay::open_overlay;
use super::preload::use_lazy_background;
use super::reveal::{RevealState, use_reveal};
use super::state::use_site_context;
use crate::core::{GalleryTile, RevealKind, SiteContent};

const HOVER_SHADOW: &str = "var(--shadow-lg)";

#[component]
pub fn GallerySection() -> impl IntoView {
    let tiles = &SiteContent::embedded().gallery;
    let grid_ref = NodeRef::<html::Div>::new();
    let reveal = use_reveal(grid_ref, RevealKind::GalleryGrid, tiles.len());

    view! {
        <section id="gallery" class="gallery">
            <div class="container">
                <h2 class="section-title">
                    <Bilingual en="Gallery" ar="المعرض" />
                </h2>
                <div class=move || reveal.class("gallery-grid") node_ref=grid_ref>
                    {tiles
                        .iter()
                        .cloned()
                        .enumerate()
                        .map(|(index, tile)| view! { <GalleryItem tile=tile index=index reveal=reveal /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn GalleryItem(tile: GalleryTile, index: usize, reveal: RevealState) -> impl IntoView {
    let site = use_site_context();
    let item_ref = NodeRef::<html::Div>::new();
    let hovered = RwSignal::new(false);
    let background = use_lazy_background(item_ref, tile.image.clone());

    let class = if tile.video {
        "gallery-item video-item"
    } else {
        "gallery-item"
    };
    let style = move || {
        let shadow = if hovered.get() { HOVER_SHADOW } else { "none" };
        format!(
            "{} {} box-shadow: {};",
            reveal.item_style(index),
            background.get(),
            shadow
        )
    };

    let title = tile.title.clone();
    let description = tile.description.clone();
    let is_video = tile.video;
    let image = tile.image.clone();
    let on_click = move |_| {
        let content = tile.overlay_content(site.locale_untracked());
        open_overlay(site, content);
    };

    view! {
        <div
            class=class
            node_ref=item_ref
            style=style
            data-bg=image
            on:click=on_click
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
        >
            {is_video.then(|| view! {
                <div class="play-button" aria-hidden="true">
                    <svg width="24" height="24" viewBox="0 0 24 24" fill="currentColor">
                        <path d="M8 5v14l11-7z" />
                    </svg>
                </div>
            })}
            <div class="gallery-overlay">
                <h3><BilingualText text=title /></h3>
                <p><BilingualText text=description /></p>
            </div>
        </div>
    }
}

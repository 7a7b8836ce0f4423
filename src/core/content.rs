//! Bilingual page content
//!
//! Navigation links, cards and gallery tiles are kept as data in
//! `site_content.json` and embedded at compile time.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::core::locale::{Locale, LocalizedText};
use crate::core::overlay::OverlayContent;

const SITE_CONTENT_JSON: &str = include_str!("site_content.json");

static SITE_CONTENT: LazyLock<SiteContent> = LazyLock::new(|| {
    SiteContent::parse(SITE_CONTENT_JSON).expect("embedded site content must be valid JSON")
});

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("malformed site content: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub href: String,
    pub label: LocalizedText,
}

/// Card in the about or workshop grid
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub icon: String,
    pub title: LocalizedText,
    pub body: LocalizedText,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GalleryTile {
    pub image: String,
    pub title: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
    /// Video tiles open the story placeholder instead of an info card
    #[serde(default)]
    pub video: bool,
}

impl GalleryTile {
    /// Overlay opened when the tile is clicked while `locale` is active
    pub fn overlay_content(&self, locale: Locale) -> OverlayContent {
        if self.video {
            OverlayContent::story(locale)
        } else {
            OverlayContent::info(
                self.title.display(locale),
                self.description.display(locale),
            )
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    #[serde(default)]
    pub nav: Vec<NavLink>,
    #[serde(default)]
    pub about: Vec<Card>,
    #[serde(default)]
    pub workshops: Vec<Card>,
    #[serde(default)]
    pub gallery: Vec<GalleryTile>,
}

impl SiteContent {
    pub fn parse(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Content compiled into the binary
    pub fn embedded() -> &'static SiteContent {
        &SITE_CONTENT
    }
}

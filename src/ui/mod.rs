#[cfg(not(feature = "ssr"))]
mod dom;
pub mod gallery;
pub mod language;
pub mod loading;
pub mod navbar;
pub mod newsletter;
pub mod overlay;
pub mod pages;
pub mod preload;
pub mod reveal;
pub mod ripple;
pub mod state;
pub mod styles;

pub use gallery::GallerySection;
pub use language::{Bilingual, BilingualText, LanguageToggle, switch_language};
pub use loading::LoadingScreen;
pub use navbar::{AnchorLink, Navbar};
pub use newsletter::NewsletterSection;
pub use overlay::{OverlayHost, close_overlay, open_overlay};
pub use state::{DefaultLocale, SiteContext, provide_site_context, use_site_context};
pub use styles::AnimationStyles;

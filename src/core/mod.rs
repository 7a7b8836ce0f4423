//! Platform-independent state and rules behind the site's interactivity

#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod loading;
pub mod locale;
pub mod navigation;
pub mod newsletter;
pub mod overlay;
pub mod preload;
pub mod reveal;
pub mod ripple;
pub mod scroll;
#[cfg(test)]
mod tests;

pub use content::{Card, ContentError, GalleryTile, NavLink, SiteContent};
pub use loading::LoadingPhase;
pub use locale::{Locale, LocaleError, LocaleState, LocalizedText, Phrase, TextDirection};
pub use navigation::MenuState;
pub use newsletter::{NewsletterForm, SubmissionPhase, SubmitRejected, is_valid_email};
pub use overlay::{Overlay, OverlayContent, OverlayError, OverlayHandle, OverlayManager, OverlayPhase};
pub use reveal::{RevealAction, RevealKind, RevealOptions, RevealTracker};
pub use ripple::{ButtonRect, Ripple, RippleSet};
pub use scroll::{NavbarBackdrop, NavbarUpdate, NavbarVisibility, ScrollReactor};

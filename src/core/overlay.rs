//! Full-screen overlay lifecycle
//!
//! Overlays move through `Opening -> Open -> Closing` and are then disposed.
//! The manager owns every attached overlay; disposing one removes it, which
//! in turn unmounts its view and drops its listeners.

use crate::core::locale::{Locale, phrases};

/// Delay before an attached overlay starts fading in (ms)
pub const FADE_IN_DELAY_MS: u32 = 10;

/// Duration of the fade transition in both directions (ms)
pub const FADE_DURATION_MS: u32 = 300;

pub const INFO_Z_INDEX: u32 = 1000;
pub const PLACEHOLDER_Z_INDEX: u32 = 2000;

/// Navbar stacking order at rest
pub const NAVBAR_Z_INDEX: u32 = 100;

/// Navbar stacking order while a page-locking overlay is shown
pub const NAVBAR_RAISED_Z_INDEX: u32 = 2100;

/// What an overlay displays
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OverlayContent {
    /// Title and description of a gallery image
    Info { title: String, description: String },
    /// Static card standing in for media that is not published yet
    Placeholder {
        title: String,
        message: String,
        notice: String,
    },
}

impl OverlayContent {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        OverlayContent::Info {
            title: title.into(),
            description: description.into(),
        }
    }

    /// The "story" video placeholder rendered in `locale`
    pub fn story(locale: Locale) -> Self {
        OverlayContent::Placeholder {
            title: phrases::STORY_TITLE.get(locale).to_string(),
            message: phrases::STORY_DESCRIPTION.get(locale).to_string(),
            notice: phrases::STORY_NOTICE.get(locale).to_string(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            OverlayContent::Info { title, .. } | OverlayContent::Placeholder { title, .. } => title,
        }
    }

    /// Whether the page behind must stop scrolling and keep its navbar on top
    pub fn locks_page(&self) -> bool {
        matches!(self, OverlayContent::Placeholder { .. })
    }

    pub fn z_index(&self) -> u32 {
        match self {
            OverlayContent::Info { .. } => INFO_Z_INDEX,
            OverlayContent::Placeholder { .. } => PLACEHOLDER_Z_INDEX,
        }
    }
}

/// Identifies one attached overlay. Invalid once the overlay is disposed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("overlay#{_0}")]
pub struct OverlayHandle(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayPhase {
    Opening,
    Open,
    Closing,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OverlayError {
    #[error("{0} is not attached")]
    UnknownHandle(OverlayHandle),
    #[error("{0} is already closing")]
    AlreadyClosing(OverlayHandle),
    #[error("{0} has not been closed")]
    NotClosing(OverlayHandle),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Overlay {
    handle: OverlayHandle,
    content: OverlayContent,
    phase: OverlayPhase,
}

impl Overlay {
    pub fn handle(&self) -> OverlayHandle {
        self.handle
    }

    pub fn content(&self) -> &OverlayContent {
        &self.content
    }

    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    pub fn opacity(&self) -> f32 {
        match self.phase {
            OverlayPhase::Open => 1.0,
            OverlayPhase::Opening | OverlayPhase::Closing => 0.0,
        }
    }

    fn is_closing(&self) -> bool {
        self.phase == OverlayPhase::Closing
    }
}

/// Owner of all attached overlays, in attach order
#[derive(Clone, Debug, Default)]
pub struct OverlayManager {
    overlays: Vec<Overlay>,
    next_id: u64,
}

impl OverlayManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a new overlay in the `Opening` phase
    pub fn open(&mut self, content: OverlayContent) -> OverlayHandle {
        let handle = OverlayHandle(self.next_id);
        self.next_id += 1;
        self.overlays.push(Overlay {
            handle,
            content,
            phase: OverlayPhase::Opening,
        });
        handle
    }

    /// Finish the fade-in delay. A no-op for an overlay already shown.
    pub fn mark_shown(&mut self, handle: OverlayHandle) -> Result<(), OverlayError> {
        let overlay = self.find_mut(handle)?;
        match overlay.phase {
            OverlayPhase::Opening => {
                overlay.phase = OverlayPhase::Open;
                Ok(())
            }
            OverlayPhase::Open => Ok(()),
            OverlayPhase::Closing => Err(OverlayError::AlreadyClosing(handle)),
        }
    }

    /// Start the fade-out. Only the first call on a given overlay succeeds.
    pub fn close(&mut self, handle: OverlayHandle) -> Result<(), OverlayError> {
        let overlay = self.find_mut(handle)?;
        if overlay.is_closing() {
            return Err(OverlayError::AlreadyClosing(handle));
        }
        overlay.phase = OverlayPhase::Closing;
        Ok(())
    }

    /// Close the most recently attached overlay that is not closing yet
    pub fn close_topmost(&mut self) -> Option<OverlayHandle> {
        let handle = self.topmost()?;
        self.close(handle).ok().map(|_| handle)
    }

    /// Detach a closed overlay once its fade-out has elapsed
    pub fn dispose(&mut self, handle: OverlayHandle) -> Result<(), OverlayError> {
        let index = self
            .overlays
            .iter()
            .position(|o| o.handle == handle)
            .ok_or(OverlayError::UnknownHandle(handle))?;
        if !self.overlays[index].is_closing() {
            return Err(OverlayError::NotClosing(handle));
        }
        self.overlays.remove(index);
        Ok(())
    }

    pub fn get(&self, handle: OverlayHandle) -> Option<&Overlay> {
        self.overlays.iter().find(|o| o.handle == handle)
    }

    pub fn overlays(&self) -> &[Overlay] {
        &self.overlays
    }

    pub fn handles(&self) -> Vec<OverlayHandle> {
        self.overlays.iter().map(Overlay::handle).collect()
    }

    /// Number of overlays currently in the document, closing ones included
    pub fn attached_count(&self) -> usize {
        self.overlays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }

    /// Most recently attached overlay that still accepts dismissal
    pub fn topmost(&self) -> Option<OverlayHandle> {
        self.overlays
            .iter()
            .rev()
            .find(|o| !o.is_closing())
            .map(Overlay::handle)
    }

    /// Whether a page-locking overlay is opening or open
    pub fn locks_page(&self) -> bool {
        self.overlays
            .iter()
            .any(|o| !o.is_closing() && o.content.locks_page())
    }

    fn find_mut(&mut self, handle: OverlayHandle) -> Result<&mut Overlay, OverlayError> {
        self.overlays
            .iter_mut()
            .find(|o| o.handle == handle)
            .ok_or(OverlayError::UnknownHandle(handle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info() -> OverlayContent {
        OverlayContent::info("Main Stage", "Our 120-seat black box theatre")
    }

    #[test]
    fn test_open_starts_transparent() {
        let mut manager = OverlayManager::new();
        let handle = manager.open(info());

        let overlay = manager.get(handle).unwrap();
        assert_eq!(overlay.phase(), OverlayPhase::Opening);
        assert_eq!(overlay.opacity(), 0.0);
        assert_eq!(manager.attached_count(), 1);
    }

    #[test]
    fn test_full_lifecycle_releases_overlay() {
        let mut manager = OverlayManager::new();
        let handle = manager.open(info());

        manager.mark_shown(handle).unwrap();
        assert_eq!(manager.get(handle).unwrap().opacity(), 1.0);

        manager.close(handle).unwrap();
        assert_eq!(manager.get(handle).unwrap().phase(), OverlayPhase::Closing);
        assert_eq!(manager.attached_count(), 1);

        manager.dispose(handle).unwrap();
        assert!(manager.is_empty());
        assert!(manager.get(handle).is_none());
    }

    #[test]
    fn test_double_close_is_rejected() {
        let mut manager = OverlayManager::new();
        let handle = manager.open(info());
        manager.mark_shown(handle).unwrap();

        assert!(manager.close(handle).is_ok());
        assert_eq!(
            manager.close(handle),
            Err(OverlayError::AlreadyClosing(handle))
        );
    }

    #[test]
    fn test_dispose_is_guarded() {
        let mut manager = OverlayManager::new();
        let handle = manager.open(info());

        assert_eq!(manager.dispose(handle), Err(OverlayError::NotClosing(handle)));

        manager.close(handle).unwrap();
        manager.dispose(handle).unwrap();
        assert_eq!(
            manager.dispose(handle),
            Err(OverlayError::UnknownHandle(handle))
        );
        assert_eq!(
            manager.close(handle),
            Err(OverlayError::UnknownHandle(handle))
        );
    }

    #[test]
    fn test_close_before_fade_in_completes() {
        let mut manager = OverlayManager::new();
        let handle = manager.open(info());

        manager.close(handle).unwrap();
        assert_eq!(
            manager.mark_shown(handle),
            Err(OverlayError::AlreadyClosing(handle))
        );
        assert_eq!(manager.get(handle).unwrap().opacity(), 0.0);
    }

    #[test]
    fn test_topmost_skips_closing_overlays() {
        let mut manager = OverlayManager::new();
        let first = manager.open(info());
        let second = manager.open(OverlayContent::story(Locale::En));

        assert_eq!(manager.topmost(), Some(second));
        assert_eq!(manager.close_topmost(), Some(second));
        assert_eq!(manager.topmost(), Some(first));
        assert_eq!(manager.close_topmost(), Some(first));
        assert_eq!(manager.close_topmost(), None);
    }

    #[test]
    fn test_only_placeholders_lock_the_page() {
        let mut manager = OverlayManager::new();
        let image = manager.open(info());
        assert!(!manager.locks_page());

        let story = manager.open(OverlayContent::story(Locale::Ar));
        assert!(manager.locks_page());

        manager.close(story).unwrap();
        assert!(!manager.locks_page());

        manager.close(image).unwrap();
        assert!(!manager.locks_page());
    }

    #[test]
    fn test_story_content_is_localized() {
        let english = OverlayContent::story(Locale::En);
        let arabic = OverlayContent::story(Locale::Ar);

        assert_eq!(english.title(), "The Junction Story");
        assert_eq!(arabic.title(), "قصة ذا جانكشن");
        assert!(english.locks_page());
        assert_eq!(english.z_index(), PLACEHOLDER_Z_INDEX);
        assert!(NAVBAR_RAISED_Z_INDEX > PLACEHOLDER_Z_INDEX);
    }

    #[test]
    fn test_empty_strings_are_allowed() {
        let content = OverlayContent::info("", "");
        assert_eq!(content.title(), "");
        assert_eq!(content.z_index(), INFO_Z_INDEX);
    }

    #[test]
    fn test_handles_are_unique_and_displayable() {
        let mut manager = OverlayManager::new();
        let a = manager.open(info());
        let b = manager.open(info());

        assert_ne!(a, b);
        assert_eq!(a.to_string(), "overlay#0");
        assert_eq!(manager.handles(), vec![a, b]);
    }
}

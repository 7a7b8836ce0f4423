//! Loading screen shown while the page settles

/// How long the loading screen stays fully visible (ms)
pub const LOADING_DISPLAY_MS: u32 = 1500;

/// Fade-out duration before the screen is removed (ms)
pub const LOADING_FADE_MS: u32 = 300;

/// Animation duration of the stage lights on the loading screen
pub const STAGE_LIGHTS_DURATION: &str = "2s";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LoadingPhase {
    #[default]
    Showing,
    Fading,
    Hidden,
}

impl LoadingPhase {
    /// Move one step towards `Hidden`; returns false once there
    pub fn advance(&mut self) -> bool {
        let next = match self {
            LoadingPhase::Showing => LoadingPhase::Fading,
            LoadingPhase::Fading => LoadingPhase::Hidden,
            LoadingPhase::Hidden => return false,
        };
        *self = next;
        true
    }

    pub fn is_loading(&self) -> bool {
        *self != LoadingPhase::Hidden
    }

    pub fn opacity(&self) -> &'static str {
        match self {
            LoadingPhase::Showing => "1",
            LoadingPhase::Fading | LoadingPhase::Hidden => "0",
        }
    }

    pub fn display(&self) -> Option<&'static str> {
        match self {
            LoadingPhase::Hidden => Some("none"),
            LoadingPhase::Showing | LoadingPhase::Fading => None,
        }
    }

    /// The language selector appears once the loading screen is gone
    pub fn language_toggle_display(&self) -> &'static str {
        match self {
            LoadingPhase::Hidden => "flex",
            LoadingPhase::Showing | LoadingPhase::Fading => "none",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phases_advance_monotonically() {
        let mut phase = LoadingPhase::default();
        assert!(phase.is_loading());

        assert!(phase.advance());
        assert_eq!(phase, LoadingPhase::Fading);
        assert_eq!(phase.opacity(), "0");
        assert_eq!(phase.display(), None);

        assert!(phase.advance());
        assert_eq!(phase, LoadingPhase::Hidden);
        assert!(!phase.is_loading());

        assert!(!phase.advance());
        assert_eq!(phase, LoadingPhase::Hidden);
    }

    #[test]
    fn test_language_toggle_waits_for_loading() {
        assert_eq!(LoadingPhase::Showing.language_toggle_display(), "none");
        assert_eq!(LoadingPhase::Fading.language_toggle_display(), "none");
        assert_eq!(LoadingPhase::Hidden.language_toggle_display(), "flex");
        assert_eq!(LoadingPhase::Hidden.display(), Some("none"));
    }
}

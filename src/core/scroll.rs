//! Navbar reaction to vertical scrolling

/// Scrolling down past this offset hides the navbar (px)
pub const HIDE_THRESHOLD: f64 = 200.0;

/// Past this offset the navbar switches to its dense backdrop (px)
pub const DENSE_THRESHOLD: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NavbarVisibility {
    #[default]
    Shown,
    Hidden,
}

impl NavbarVisibility {
    pub fn transform(&self) -> &'static str {
        match self {
            NavbarVisibility::Shown => "translateY(0)",
            NavbarVisibility::Hidden => "translateY(-100%)",
        }
    }
}

/// Navbar translucency, chosen by distance from the top of the page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarBackdrop {
    Light,
    Dense,
}

impl NavbarBackdrop {
    pub fn for_offset(scroll_y: f64) -> Self {
        if scroll_y > DENSE_THRESHOLD {
            NavbarBackdrop::Dense
        } else {
            NavbarBackdrop::Light
        }
    }

    pub fn backdrop_filter(&self) -> &'static str {
        match self {
            NavbarBackdrop::Light => "saturate(140%) blur(10px)",
            NavbarBackdrop::Dense => "saturate(140%) blur(20px)",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            NavbarBackdrop::Light => {
                "linear-gradient(180deg, rgba(21,17,16,0.9), rgba(21,17,16,0.6))"
            }
            NavbarBackdrop::Dense => {
                "linear-gradient(180deg, rgba(21,17,16,0.95), rgba(21,17,16,0.85))"
            }
        }
    }
}

/// Result of one scroll event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarUpdate {
    pub visibility: NavbarVisibility,
    /// `None` leaves the current backdrop untouched
    pub backdrop: Option<NavbarBackdrop>,
}

/// Remembers the previous scroll sample between events
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollReactor {
    last_scroll_y: f64,
}

impl ScrollReactor {
    pub fn new(initial_scroll_y: f64) -> Self {
        Self {
            last_scroll_y: initial_scroll_y,
        }
    }

    pub fn last_scroll_y(&self) -> f64 {
        self.last_scroll_y
    }

    /// React to the page being scrolled to `scroll_y`.
    ///
    /// While a modal is open the navbar is pinned and the sample is left as
    /// it was.
    pub fn on_scroll(&mut self, scroll_y: f64, modal_open: bool) -> NavbarUpdate {
        if modal_open {
            return NavbarUpdate {
                visibility: NavbarVisibility::Shown,
                backdrop: None,
            };
        }

        let visibility = if scroll_y > self.last_scroll_y && scroll_y > HIDE_THRESHOLD {
            NavbarVisibility::Hidden
        } else {
            NavbarVisibility::Shown
        };

        self.last_scroll_y = scroll_y;

        NavbarUpdate {
            visibility,
            backdrop: Some(NavbarBackdrop::for_offset(scroll_y)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_down_past_threshold_hides() {
        let mut reactor = ScrollReactor::new(0.0);
        let update = reactor.on_scroll(250.0, false);
        assert_eq!(update.visibility, NavbarVisibility::Hidden);
        assert_eq!(update.visibility.transform(), "translateY(-100%)");
    }

    #[test]
    fn test_scroll_up_shows() {
        let mut reactor = ScrollReactor::new(0.0);
        reactor.on_scroll(600.0, false);
        let update = reactor.on_scroll(400.0, false);
        assert_eq!(update.visibility, NavbarVisibility::Shown);
        assert_eq!(update.visibility.transform(), "translateY(0)");
    }

    #[test]
    fn test_scroll_down_near_top_stays_visible() {
        let mut reactor = ScrollReactor::new(0.0);
        assert_eq!(
            reactor.on_scroll(150.0, false).visibility,
            NavbarVisibility::Shown
        );
        assert_eq!(
            reactor.on_scroll(200.0, false).visibility,
            NavbarVisibility::Shown
        );
        assert_eq!(
            reactor.on_scroll(201.0, false).visibility,
            NavbarVisibility::Hidden
        );
    }

    #[test]
    fn test_backdrop_threshold() {
        let mut reactor = ScrollReactor::new(0.0);
        assert_eq!(
            reactor.on_scroll(50.0, false).backdrop,
            Some(NavbarBackdrop::Light)
        );
        assert_eq!(
            reactor.on_scroll(51.0, false).backdrop,
            Some(NavbarBackdrop::Dense)
        );
        assert!(NavbarBackdrop::Dense.backdrop_filter().contains("blur(20px)"));
        assert!(NavbarBackdrop::Light.background().contains("0.6"));
    }

    #[test]
    fn test_modal_pins_navbar_and_keeps_sample() {
        let mut reactor = ScrollReactor::new(300.0);
        let update = reactor.on_scroll(900.0, true);

        assert_eq!(update.visibility, NavbarVisibility::Shown);
        assert_eq!(update.backdrop, None);
        assert_eq!(reactor.last_scroll_y(), 300.0);
    }

    #[test]
    fn test_sample_updates_after_each_event() {
        let mut reactor = ScrollReactor::default();
        reactor.on_scroll(120.0, false);
        assert_eq!(reactor.last_scroll_y(), 120.0);
        reactor.on_scroll(80.0, false);
        assert_eq!(reactor.last_scroll_y(), 80.0);
    }
}

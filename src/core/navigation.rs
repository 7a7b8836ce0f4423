//! Mobile menu state and in-page anchor scrolling

/// Gap kept between the fixed navbar and a scrolled-to section (px)
pub const SCROLL_MARGIN: f64 = 20.0;

/// Mobile menu state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Collapsed,
    Expanded,
}

/// Inline style of one hamburger bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarStyle {
    pub transform: &'static str,
    pub opacity: &'static str,
}

impl BarStyle {
    const REST: BarStyle = BarStyle {
        transform: "none",
        opacity: "1",
    };
}

impl MenuState {
    pub fn toggle(&mut self) {
        *self = match self {
            MenuState::Collapsed => MenuState::Expanded,
            MenuState::Expanded => MenuState::Collapsed,
        };
    }

    pub fn collapse(&mut self) {
        *self = MenuState::Collapsed;
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self, MenuState::Expanded)
    }

    /// CSS `display` of the menu container
    pub fn display(&self) -> &'static str {
        match self {
            MenuState::Expanded => "flex",
            MenuState::Collapsed => "none",
        }
    }

    /// Styles of the three toggle bars; expanded bars form a cross
    pub fn bar_styles(&self) -> [BarStyle; 3] {
        match self {
            MenuState::Collapsed => [BarStyle::REST; 3],
            MenuState::Expanded => [
                BarStyle {
                    transform: "rotate(45deg) translate(8px, 8px)",
                    opacity: "1",
                },
                BarStyle {
                    transform: "none",
                    opacity: "0",
                },
                BarStyle {
                    transform: "rotate(-45deg) translate(8px, -8px)",
                    opacity: "1",
                },
            ],
        }
    }
}

/// Element id targeted by a same-page link, e.g. `"#about"` -> `"about"`
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts a section just below the fixed navbar
pub fn scroll_offset(target_top: f64, navbar_height: f64) -> f64 {
    (target_top - navbar_height - SCROLL_MARGIN).max(0.0)
}

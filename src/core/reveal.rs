//! Entrance animations for sections scrolled into view
//!
//! A container is revealed the first time at least [`THRESHOLD`] of it is
//! visible. Card and gallery grids then show their children one by one.

/// Fraction of the container that must be visible
pub const THRESHOLD: f64 = 0.1;

/// Shrinks the viewport from below so reveals fire slightly before full entry
pub const ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Class added to a container when it is revealed
pub const ANIMATE_CLASS: &str = "animate-in";

/// How a container's children take part in its entrance
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealKind {
    /// Only the container animates
    Section,
    /// About and workshop cards
    CardGrid,
    /// Gallery tiles
    GalleryGrid,
}

impl RevealKind {
    /// Delay between two consecutive children (ms)
    pub fn stagger_step_ms(&self) -> Option<u32> {
        match self {
            RevealKind::Section => None,
            RevealKind::CardGrid => Some(150),
            RevealKind::GalleryGrid => Some(100),
        }
    }

    /// Reveal delay of every child, in child order
    pub fn schedule(&self, item_count: usize) -> Vec<u32> {
        match self.stagger_step_ms() {
            Some(step) => (0..item_count as u32).map(|index| index * step).collect(),
            None => Vec::new(),
        }
    }

    /// Inline style of a child before or after its reveal
    pub fn item_style(&self, revealed: bool) -> Option<String> {
        let (opacity, transform, transition) = match (self, revealed) {
            (RevealKind::Section, _) => return None,
            (RevealKind::CardGrid, false) => ("0", "translateY(20px)", "0.6s"),
            (RevealKind::CardGrid, true) => ("1", "translateY(0)", "0.6s"),
            (RevealKind::GalleryGrid, false) => ("0", "translateY(30px) scale(0.95)", "0.7s"),
            (RevealKind::GalleryGrid, true) => ("1", "translateY(0) scale(1)", "0.7s"),
        };
        Some(format!(
            "opacity: {opacity}; transform: {transform}; transition: opacity {transition} ease, transform {transition} ease;"
        ))
    }
}

/// Observer configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
    /// Keep observing after the first reveal and replay on re-entry
    pub replay: bool,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: THRESHOLD,
            root_margin: ROOT_MARGIN,
            replay: false,
        }
    }
}

/// What to do with one intersection notification
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    Ignore,
    Reveal { unobserve: bool },
}

/// Per-container reveal bookkeeping
#[derive(Clone, Copy, Debug, Default)]
pub struct RevealTracker {
    options: RevealOptions,
    reveals: u32,
}

impl RevealTracker {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            reveals: 0,
        }
    }

    pub fn reveals(&self) -> u32 {
        self.reveals
    }

    pub fn on_intersection(&mut self, is_intersecting: bool) -> RevealAction {
        if !is_intersecting || (self.reveals > 0 && !self.options.replay) {
            return RevealAction::Ignore;
        }
        self.reveals += 1;
        RevealAction::Reveal {
            unobserve: !self.options.replay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_schedule_steps_by_150ms() {
        assert_eq!(RevealKind::CardGrid.schedule(4), vec![0, 150, 300, 450]);
    }

    #[test]
    fn test_gallery_schedule_steps_by_100ms() {
        assert_eq!(RevealKind::GalleryGrid.schedule(3), vec![0, 100, 200]);
    }

    #[test]
    fn test_plain_sections_have_no_children_schedule() {
        assert!(RevealKind::Section.schedule(5).is_empty());
        assert_eq!(RevealKind::Section.item_style(false), None);
    }

    #[test]
    fn test_item_styles() {
        let hidden = RevealKind::GalleryGrid.item_style(false).unwrap();
        assert!(hidden.contains("opacity: 0"));
        assert!(hidden.contains("translateY(30px) scale(0.95)"));
        assert!(hidden.contains("0.7s"));

        let shown = RevealKind::CardGrid.item_style(true).unwrap();
        assert!(shown.contains("opacity: 1"));
        assert!(shown.contains("translateY(0)"));
        assert!(shown.contains("0.6s"));
    }

    #[test]
    fn test_reveals_once_by_default() {
        let mut tracker = RevealTracker::default();
        assert_eq!(tracker.on_intersection(false), RevealAction::Ignore);
        assert_eq!(
            tracker.on_intersection(true),
            RevealAction::Reveal { unobserve: true }
        );
        assert_eq!(tracker.on_intersection(true), RevealAction::Ignore);
        assert_eq!(tracker.reveals(), 1);
    }

    #[test]
    fn test_replay_reveals_on_every_entry() {
        let mut tracker = RevealTracker::new(RevealOptions {
            replay: true,
            ..RevealOptions::default()
        });
        for _ in 0..3 {
            assert_eq!(
                tracker.on_intersection(true),
                RevealAction::Reveal { unobserve: false }
            );
            assert_eq!(tracker.on_intersection(false), RevealAction::Ignore);
        }
        assert_eq!(tracker.reveals(), 3);
    }

    #[test]
    fn test_default_options() {
        let options = RevealOptions::default();
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin, "0px 0px -50px 0px");
        assert!(!options.replay);
    }
}

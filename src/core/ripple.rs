//! Click ripple geometry for buttons

/// Lifetime of a ripple element (ms)
pub const RIPPLE_DURATION_MS: u32 = 600;

/// Bounding box of the clicked button in viewport coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// A ripple circle positioned inside its button
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub id: u64,
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    /// Square sized to the button's larger side, centred on the click
    pub fn from_click(id: u64, rect: ButtonRect, client_x: f64, client_y: f64) -> Self {
        let size = rect.width.max(rect.height);
        Self {
            id,
            size,
            left: client_x - rect.left - size / 2.0,
            top: client_y - rect.top - size / 2.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {left}px; top: {top}px;",
            size = self.size,
            left = self.left,
            top = self.top
        )
    }
}

/// Ripples alive inside one button
#[derive(Clone, Debug, Default)]
pub struct RippleSet {
    ripples: Vec<Ripple>,
    next_id: u64,
}

impl RippleSet {
    pub fn spawn(&mut self, rect: ButtonRect, client_x: f64, client_y: f64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.ripples
            .push(Ripple::from_click(id, rect, client_x, client_y));
        id
    }

    pub fn remove(&mut self, id: u64) {
        self.ripples.retain(|r| r.id != id);
    }

    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: ButtonRect = ButtonRect {
        left: 100.0,
        top: 40.0,
        width: 160.0,
        height: 48.0,
    };

    #[test]
    fn test_ripple_centres_on_click() {
        let ripple = Ripple::from_click(0, RECT, 180.0, 64.0);
        assert_eq!(ripple.size, 160.0);
        assert_eq!(ripple.left, 0.0);
        assert_eq!(ripple.top, -56.0);
        assert_eq!(
            ripple.style(),
            "width: 160px; height: 160px; left: 0px; top: -56px;"
        );
    }

    #[test]
    fn test_ripples_coexist_and_expire_individually() {
        let mut set = RippleSet::default();
        let first = set.spawn(RECT, 110.0, 50.0);
        let second = set.spawn(RECT, 200.0, 60.0);
        assert_eq!(set.ripples().len(), 2);

        set.remove(first);
        assert_eq!(set.ripples().len(), 1);
        assert_eq!(set.ripples()[0].id, second);

        set.remove(first);
        assert_eq!(set.ripples().len(), 1);
    }
}

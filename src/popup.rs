/// Floating contact button and its dialog.
///
/// `visible` follows the scroll position, `open` follows clicks; the two never
/// influence each other. The dialog is only on screen when both are set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactPopup {
    visible: bool,
    open: bool,
}

impl ContactPopup {
    pub fn new() -> Self {
        Self::default()
    }

    /// `hero_bottom` is the hero section's bottom edge relative to the
    /// viewport top. Returns whether visibility changed.
    pub fn on_scroll(&mut self, hero_bottom: f64) -> bool {
        let visible = hero_bottom < 0.0;
        let changed = visible != self.visible;
        self.visible = visible;
        changed
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn dialog_shown(&self) -> bool {
        self.visible && self.open
    }
}

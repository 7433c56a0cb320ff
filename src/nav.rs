/// Class marking the mobile menu panel.
pub const MENU_CLASS: &str = "mobile-menu";
/// Class marking the hamburger button.
pub const MENU_BUTTON_CLASS: &str = "menu-button";

/// Mobile navigation drawer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Any click that lands outside the menu and its button closes the menu.
    pub fn on_document_click(&mut self, inside_menu: bool) {
        if !inside_menu {
            self.close();
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// Selector matching the menu region for `Element::closest`.
pub fn menu_region_selector() -> String {
    format!(".{MENU_CLASS}, .{MENU_BUTTON_CLASS}")
}

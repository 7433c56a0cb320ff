use portfolio_site::nav::{menu_region_selector, NavMenu};
use portfolio_site::popup::ContactPopup;

#[test]
fn popup_starts_hidden_and_closed() {
    let popup = ContactPopup::new();
    assert!(!popup.is_visible());
    assert!(!popup.is_open());
    assert!(!popup.dialog_shown());
}

#[test]
fn popup_visibility_tracks_hero_bottom() {
    let mut popup = ContactPopup::new();
    for (bottom, visible) in [(800.0, false), (1.0, false), (0.0, false), (-0.5, true), (-900.0, true), (0.0, false)] {
        popup.on_scroll(bottom);
        assert_eq!(popup.is_visible(), visible, "hero bottom at {bottom}");
    }
}

#[test]
fn popup_reports_only_visibility_changes() {
    let mut popup = ContactPopup::new();
    assert!(!popup.on_scroll(100.0));
    assert!(popup.on_scroll(-10.0));
    assert!(!popup.on_scroll(-20.0));
    assert!(popup.on_scroll(50.0));
}

#[test]
fn popup_open_is_independent_of_scroll() {
    let mut popup = ContactPopup::new();
    popup.open();
    assert!(popup.is_open());
    assert!(!popup.dialog_shown(), "dialog stays off screen above the fold");

    popup.on_scroll(-10.0);
    assert!(popup.dialog_shown());

    popup.on_scroll(10.0);
    assert!(popup.is_open());
    assert!(!popup.dialog_shown());

    popup.on_scroll(-10.0);
    popup.close();
    assert!(popup.is_visible());
    assert!(!popup.dialog_shown());
}

#[test]
fn menu_toggles_and_closes_on_outside_click() {
    let mut nav = NavMenu::new();
    assert!(!nav.is_open());
    nav.toggle();
    assert!(nav.is_open());

    nav.on_document_click(true);
    assert!(nav.is_open());

    nav.on_document_click(false);
    assert!(!nav.is_open());

    nav.toggle();
    nav.toggle();
    assert!(!nav.is_open());
}

#[test]
fn menu_region_covers_panel_and_button() {
    assert_eq!(menu_region_selector(), ".mobile-menu, .menu-button");
}

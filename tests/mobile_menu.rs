use vip_club_site_wasm::domain::navigation::{MenuChange, MenuEvent, MobileMenu};

#[test]
fn hamburger_toggles() {
    let mut menu = MobileMenu::default();
    assert!(!menu.is_open());
    assert_eq!(menu.handle(MenuEvent::HamburgerClicked), MenuChange::Opened);
    assert!(menu.is_open());
    assert_eq!(menu.handle(MenuEvent::HamburgerClicked), MenuChange::Closed);
}

#[test]
fn every_dismissal_path_closes() {
    for event in [
        MenuEvent::OverlayClicked,
        MenuEvent::NavLinkClicked,
        MenuEvent::EscapePressed,
        MenuEvent::IndicatorClicked,
        MenuEvent::Resized { width: 1024.0 },
    ] {
        let mut menu = MobileMenu::default();
        menu.handle(MenuEvent::HamburgerClicked);
        assert_eq!(menu.handle(event), MenuChange::Closed, "{:?}", event);
        assert_eq!(menu.handle(event), MenuChange::Unchanged, "{:?}", event);
    }
}

#[test]
fn narrow_resize_keeps_the_menu_open() {
    let mut menu = MobileMenu::default();
    menu.handle(MenuEvent::HamburgerClicked);
    assert_eq!(menu.handle(MenuEvent::Resized { width: 768.0 }), MenuChange::Unchanged);
    assert!(menu.is_open());
}

#[test]
fn cta_hides_only_on_narrow_open_menu() {
    let mut menu = MobileMenu::default();
    assert!(menu.cta_visible(400.0));
    menu.handle(MenuEvent::HamburgerClicked);
    assert!(!menu.cta_visible(400.0));
    assert!(menu.cta_visible(1200.0));
}

use super::*;
use crate::components::nav_menu::MENU_ITEMS;

#[test]
fn phone_link_strips_spaces() {
    assert_eq!(tel_href(CONTACT_PHONE), "tel:+919876543210");
    assert_eq!(tel_href("022 1234"), "tel:0221234");
}

#[test]
fn menu_anchors_point_at_page_sections() {
    let hrefs: Vec<_> = MENU_ITEMS.iter().map(|(_, href)| *href).collect();
    assert_eq!(hrefs, ["#projects", "#walkthrough", "#floor-plans", "#price-list", "#location"]);
    assert_eq!(MENU_ITEMS[0].0, "Overview");
}

#[test]
fn about_cards_are_in_display_order() {
    let titles: Vec<_> = ABOUT_CARDS.iter().map(|(title, _)| *title).collect();
    assert_eq!(titles, ["Excellence", "Innovation", "Trust"]);
}

#[test]
fn footer_names_the_developer() {
    assert_eq!(
        copyright_line(2025),
        "© 2025 Shri Vishnu Waman Thakur Developers. All rights reserved."
    );
}

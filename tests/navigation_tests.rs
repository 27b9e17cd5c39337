//! Integration tests for menu filtering and active-state derivation.

mod common;

use common::{site_menu, titles};
use gpui::TestAppContext;
use gpui_site_nav::*;

#[test]
fn test_anonymous_viewer_sees_public_items() {
    let menu = site_menu();
    let visible = filter_navigation(&menu, false);
    assert_eq!(titles(&visible), vec!["Home", "Docs", "Playground", "GitHub"]);
}

#[test]
fn test_signed_in_viewer_sees_everything_in_order() {
    let menu = site_menu();
    let visible = filter_navigation(&menu, true);
    assert_eq!(
        titles(&visible),
        vec!["Home", "Docs", "Playground", "Dashboard", "Monitoring", "GitHub"]
    );
}

#[test]
fn test_filter_drops_exactly_gated_items() {
    let menu = site_menu();
    let visible = filter_navigation(&menu, false);
    for item in &menu {
        let kept = visible.contains(&item);
        assert_eq!(kept, !item.requires_auth, "item {}", item.title);
    }
}

#[test]
fn test_two_item_example() {
    let items = vec![
        NavigationItem::new("Dashboard", "/dashboard").requires_auth(),
        NavigationItem::new("Home", "/"),
    ];

    assert_eq!(titles(&filter_navigation(&items, false)), vec!["Home"]);
    assert_eq!(titles(&filter_navigation(&items, true)), vec!["Dashboard", "Home"]);
}

#[test]
fn test_active_item_for_nested_docs_page() {
    let menu = site_menu();
    let resolved = resolve_navigation(&menu, "/docs/guides/testing", true);
    let active: Vec<&str> = resolved
        .iter()
        .filter(|entry| entry.is_active)
        .map(|entry| entry.item.title.as_str())
        .collect();
    assert_eq!(active, vec!["Docs"]);
}

#[test]
fn test_exact_items_do_not_match_children() {
    let menu = site_menu();
    let resolved = resolve_navigation(&menu, "/playground/users", false);
    assert!(resolved.iter().all(|entry| !entry.is_active));
}

#[test]
fn test_external_item_is_never_active() {
    let menu = site_menu();
    let github = menu.iter().find(|item| item.title == "GitHub").unwrap();
    assert!(github.is_external);
    assert!(!github.is_active(&github.href));
    assert_eq!(github.link_attributes().rel, Some("noopener noreferrer"));
}

#[gpui::test]
async fn test_menu_tracks_session_and_location(cx: &mut TestAppContext) {
    cx.update(|cx| init_site_nav(cx, |site| site.set_menu(site_menu())));

    cx.update(|cx| SiteNav::navigate(cx, "/monitoring/logs"));
    let anonymous = cx.update(|cx| NavMenu::new().resolve_items(cx));
    assert!(anonymous.iter().all(|(item, active)| !item.requires_auth && !active));

    cx.update(|cx| SiteNav::login(cx));
    let signed_in = cx.update(|cx| NavMenu::new().resolve_items(cx));
    let active: Vec<String> = signed_in
        .into_iter()
        .filter(|(_, active)| *active)
        .map(|(item, _)| item.title)
        .collect();
    assert_eq!(active, vec!["Monitoring"]);
}

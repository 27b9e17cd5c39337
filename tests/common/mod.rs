//! Shared fixtures for integration tests.

#![allow(dead_code)]

use gpui_site_nav::*;

/// The documentation site's primary menu.
pub fn site_menu() -> Vec<NavigationItem> {
    vec![
        NavigationItem::new("Home", "/"),
        NavigationItem::new("Docs", "/docs").match_prefix(),
        NavigationItem::new("Playground", "/playground"),
        NavigationItem::new("Dashboard", "/dashboard")
            .requires_auth()
            .match_prefix(),
        NavigationItem::new("Monitoring", "/monitoring")
            .requires_auth()
            .match_prefix(),
        NavigationItem::new("GitHub", "https://github.com/modernapi/template"),
    ]
}

/// Labels of a trail, in order.
pub fn labels(trail: &[BreadcrumbEntry]) -> Vec<&str> {
    trail.iter().map(|entry| entry.label.as_str()).collect()
}

/// Titles of the visible menu items, in order.
pub fn titles(items: &[&NavigationItem]) -> Vec<String> {
    items.iter().map(|item| item.title.clone()).collect()
}

/// Assert the structural trail invariants: one trailing current entry
/// without href, and every other non-placeholder entry navigable.
pub fn assert_trail_invariants(trail: &[BreadcrumbEntry]) {
    let Some((last, rest)) = trail.split_last() else {
        return;
    };
    assert!(last.is_current, "last entry '{}' should be current", last.label);
    assert!(last.href.is_none(), "current entry should not link");
    for entry in rest {
        assert!(!entry.is_current, "'{}' should not be current", entry.label);
        assert!(
            entry.is_ellipsis() || entry.href.is_some(),
            "'{}' should link somewhere",
            entry.label
        );
        assert!(!entry.label.is_empty());
    }
}

/// Route crate diagnostics to the test output (`RUST_LOG=trace`).
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

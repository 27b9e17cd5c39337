//! GPUI context integration.
//!
//! The pure derivation functions never look at global state. This module is
//! the thin layer that stores the two inputs they need, the current location
//! and the viewer's session, as a GPUI `Global`, and hands them over as plain
//! parameters.
//!
//! - [`SiteContext`] — the global: current path, auth flag, breadcrumb options
//!   and the static menu.
//! - [`SiteNav`] — static helpers (`SiteNav::navigate`, `SiteNav::login`, …)
//!   that read and write the global through `cx`.
//!
//! # Initialization
//!
//! ```ignore
//! use gpui_site_nav::{init_site_nav, NavigationItem};
//!
//! init_site_nav(cx, |site| {
//!     site.add_item(NavigationItem::new("Home", "/"));
//!     site.add_item(NavigationItem::new("Dashboard", "/dashboard").requires_auth().match_prefix());
//! });
//! ```

use crate::breadcrumb::{build_breadcrumbs, BreadcrumbEntry, BreadcrumbOptions};
use crate::nav::{resolve_navigation, NavigationItem, ResolvedNavItem};
use crate::segment::normalize_path;
use crate::{debug_log, error_log, info_log, warn_log};
use gpui::{App, BorrowAppContext, Global};

/// Location, session and menu state shared by the navigation widgets.
#[derive(Debug, Clone)]
pub struct SiteContext {
    current_path: String,
    authenticated: bool,
    breadcrumbs: BreadcrumbOptions,
    menu: Vec<NavigationItem>,
}

impl SiteContext {
    /// Anonymous viewer at `/` with default breadcrumb options and no menu.
    pub fn new() -> Self {
        Self {
            current_path: "/".to_string(),
            authenticated: false,
            breadcrumbs: BreadcrumbOptions::default(),
            menu: Vec::new(),
        }
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Record a location change. The path is stored normalized.
    pub fn set_path(&mut self, path: &str) {
        let path = normalize_path(path).into_owned();
        debug_log!("Location changed: '{}' -> '{}'", self.current_path, path);
        self.current_path = path;
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn set_authenticated(&mut self, authenticated: bool) {
        if self.authenticated != authenticated {
            debug_log!("Session changed: authenticated = {}", authenticated);
        }
        self.authenticated = authenticated;
    }

    pub fn breadcrumb_options(&self) -> &BreadcrumbOptions {
        &self.breadcrumbs
    }

    pub fn set_breadcrumb_options(&mut self, options: BreadcrumbOptions) {
        if let Err(err) = options.validate() {
            warn_log!("Breadcrumb options are invalid and will be corrected: {}", err);
        }
        self.breadcrumbs = options;
    }

    /// Append an item to the static menu.
    pub fn add_item(&mut self, item: NavigationItem) {
        self.menu.push(item);
    }

    pub fn set_menu(&mut self, items: Vec<NavigationItem>) {
        self.menu = items;
    }

    /// The full, unfiltered menu.
    pub fn menu(&self) -> &[NavigationItem] {
        &self.menu
    }

    /// Trail for the current location.
    pub fn breadcrumbs(&self) -> Vec<BreadcrumbEntry> {
        build_breadcrumbs(&self.current_path, &self.breadcrumbs)
    }

    /// Menu items the current viewer may see, with their active state.
    pub fn resolved_menu(&self) -> Vec<ResolvedNavItem<'_>> {
        resolve_navigation(&self.menu, &self.current_path, self.authenticated)
    }
}

impl Default for SiteContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Global for SiteContext {}

/// Install the [`SiteContext`] global.
pub fn init_site_nav<F>(cx: &mut App, configure: F)
where
    F: FnOnce(&mut SiteContext),
{
    let mut site = SiteContext::new();
    configure(&mut site);
    info_log!(
        "Site navigation initialised with {} menu items at '{}'",
        site.menu().len(),
        site.current_path()
    );
    cx.set_global(site);
}

/// Static helpers over the [`SiteContext`] global.
///
/// Every mutating helper refreshes all windows so breadcrumbs and menus are
/// re-derived on the next frame. Mutations made before [`init_site_nav`] are
/// logged as errors and dropped.
///
/// ```ignore
/// SiteNav::navigate(cx, "/docs/guides/testing");
/// SiteNav::login(cx);
/// let trail = SiteNav::breadcrumbs(cx);
/// ```
pub struct SiteNav;

impl SiteNav {
    /// Move to `path`.
    pub fn navigate(cx: &mut App, path: impl Into<String>) {
        let path = path.into();
        if !cx.has_global::<SiteContext>() {
            error_log!("Site navigation is not initialised, ignoring navigation to '{}'", path);
            return;
        }
        cx.update_global::<SiteContext, _>(|site, _| site.set_path(&path));
        cx.refresh_windows();
    }

    /// Mark the viewer as signed in.
    pub fn login(cx: &mut App) {
        Self::set_authenticated(cx, true);
    }

    /// Mark the viewer as signed out.
    pub fn logout(cx: &mut App) {
        Self::set_authenticated(cx, false);
    }

    pub fn set_authenticated(cx: &mut App, authenticated: bool) {
        if !cx.has_global::<SiteContext>() {
            error_log!("Site navigation is not initialised, ignoring session change");
            return;
        }
        cx.update_global::<SiteContext, _>(|site, _| site.set_authenticated(authenticated));
        cx.refresh_windows();
    }

    pub fn current_path(cx: &App) -> String {
        cx.global::<SiteContext>().current_path().to_string()
    }

    pub fn is_authenticated(cx: &App) -> bool {
        cx.global::<SiteContext>().is_authenticated()
    }

    /// Trail for the current location.
    pub fn breadcrumbs(cx: &App) -> Vec<BreadcrumbEntry> {
        cx.global::<SiteContext>().breadcrumbs()
    }

    /// Visible menu items paired with their active state.
    pub fn menu(cx: &App) -> Vec<(NavigationItem, bool)> {
        cx.global::<SiteContext>()
            .resolved_menu()
            .into_iter()
            .map(|resolved| (resolved.item.clone(), resolved.is_active))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::TestAppContext;

    fn site_menu(site: &mut SiteContext) {
        site.add_item(NavigationItem::new("Home", "/"));
        site.add_item(NavigationItem::new("Docs", "/docs").match_prefix());
        site.add_item(
            NavigationItem::new("Dashboard", "/dashboard")
                .requires_auth()
                .match_prefix(),
        );
    }

    #[test]
    fn test_set_path_normalizes() {
        let mut site = SiteContext::new();
        site.set_path("docs/guides/");
        assert_eq!(site.current_path(), "/docs/guides");
    }

    #[test]
    fn test_resolved_menu_follows_session() {
        let mut site = SiteContext::new();
        site_menu(&mut site);
        assert_eq!(site.resolved_menu().len(), 2);

        site.set_authenticated(true);
        site.set_path("/dashboard/api-keys");
        let menu = site.resolved_menu();
        assert_eq!(menu.len(), 3);
        assert!(menu[2].is_active);
        assert!(!menu[0].is_active);
    }

    #[gpui::test]
    async fn test_navigate_updates_breadcrumbs(cx: &mut TestAppContext) {
        cx.update(|cx| init_site_nav(cx, site_menu));
        assert!(cx.update(|cx| SiteNav::breadcrumbs(cx)).is_empty());

        cx.update(|cx| SiteNav::navigate(cx, "/docs/guides/git-workflow"));
        let trail = cx.update(|cx| SiteNav::breadcrumbs(cx));
        assert_eq!(trail.len(), 4);
        assert_eq!(trail[3].label, "Git Workflow");
        assert_eq!(
            cx.update(|cx| SiteNav::current_path(cx)),
            "/docs/guides/git-workflow"
        );
    }

    #[gpui::test]
    async fn test_mutations_before_init_are_dropped(cx: &mut TestAppContext) {
        cx.update(|cx| {
            SiteNav::navigate(cx, "/docs");
            SiteNav::login(cx);
            assert!(!cx.has_global::<SiteContext>());
        });
    }

    #[gpui::test]
    async fn test_login_logout(cx: &mut TestAppContext) {
        cx.update(|cx| init_site_nav(cx, site_menu));
        assert_eq!(cx.update(|cx| SiteNav::menu(cx)).len(), 2);

        cx.update(|cx| SiteNav::login(cx));
        assert!(cx.update(|cx| SiteNav::is_authenticated(cx)));
        let titles: Vec<String> = cx
            .update(|cx| SiteNav::menu(cx))
            .into_iter()
            .map(|(item, _)| item.title)
            .collect();
        assert_eq!(titles, vec!["Home", "Docs", "Dashboard"]);

        cx.update(|cx| SiteNav::logout(cx));
        assert_eq!(cx.update(|cx| SiteNav::menu(cx)).len(), 2);
    }
}

//! Navigation menu filtering and active-state derivation.
//!
//! The site menu is a static, ordered list of [`NavigationItem`]s. Before it
//! is rendered, items that require authentication are dropped for anonymous
//! viewers, and each remaining item is checked against the current path to
//! decide whether it is highlighted.
//!
//! The authentication flag is always passed in. Nothing here reads the
//! session store, so the filter is trivially testable.
//!
//! # Examples
//!
//! ```
//! use gpui_site_nav::{filter_navigation, NavigationItem};
//!
//! let items = vec![
//!     NavigationItem::new("Dashboard", "/dashboard").requires_auth(),
//!     NavigationItem::new("Home", "/"),
//! ];
//!
//! let visible = filter_navigation(&items, false);
//! assert_eq!(visible.len(), 1);
//! assert_eq!(visible[0].title, "Home");
//! ```

use crate::error::ConfigError;
use crate::segment::normalize_path;
use crate::trace_log;

/// How an item decides whether it is the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveMatch {
    /// Active only when the current path equals the item's href.
    #[default]
    Exact,
    /// Active for the href itself and everything below it. Used for section
    /// roots such as `/dashboard`.
    Prefix,
}

/// Link attributes a renderer should attach to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinkAttributes {
    /// `target` attribute, `Some("_blank")` for external links.
    pub target: Option<&'static str>,
    /// `rel` attribute, `Some("noopener noreferrer")` for external links.
    pub rel: Option<&'static str>,
}

impl LinkAttributes {
    const EXTERNAL: Self = Self {
        target: Some("_blank"),
        rel: Some("noopener noreferrer"),
    };

    /// Whether the link opens outside the current view.
    pub fn opens_new_tab(&self) -> bool {
        self.target == Some("_blank")
    }
}

/// Whether `href` points outside the site.
///
/// ```
/// use gpui_site_nav::nav::is_external_url;
///
/// assert!(is_external_url("https://github.com/modernapi"));
/// assert!(is_external_url("//cdn.example.com/app.js"));
/// assert!(!is_external_url("/docs"));
/// ```
pub fn is_external_url(href: &str) -> bool {
    const SCHEMES: &[&str] = &["http://", "https://", "mailto:", "//"];
    let lower = href.trim_start().to_ascii_lowercase();
    SCHEMES.iter().any(|scheme| lower.starts_with(scheme))
}

/// A single entry of the site menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationItem {
    pub title: String,
    /// Site path or absolute external URL.
    pub href: String,
    /// Hidden from anonymous viewers when set.
    pub requires_auth: bool,
    pub is_external: bool,
    pub active_match: ActiveMatch,
}

impl NavigationItem {
    /// Create an item. Absolute URLs are marked external automatically.
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        let href = href.into();
        Self {
            title: title.into(),
            is_external: is_external_url(&href),
            href,
            requires_auth: false,
            active_match: ActiveMatch::Exact,
        }
    }

    /// Like [`new`](Self::new), but rejects empty titles and hrefs.
    pub fn try_new(title: impl Into<String>, href: impl Into<String>) -> Result<Self, ConfigError> {
        let item = Self::new(title, href);
        if item.title.trim().is_empty() {
            return Err(ConfigError::EmptyTitle { href: item.href });
        }
        if item.href.trim().is_empty() {
            return Err(ConfigError::EmptyHref { title: item.title });
        }
        Ok(item)
    }

    /// Hide this item from anonymous viewers.
    pub fn requires_auth(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    /// Force the item to be treated as an external link.
    pub fn external(mut self) -> Self {
        self.is_external = true;
        self
    }

    /// Treat the item as a section root: active for every path below it.
    pub fn match_prefix(mut self) -> Self {
        self.active_match = ActiveMatch::Prefix;
        self
    }

    /// Whether the viewer may see this item.
    pub fn is_visible(&self, authenticated: bool) -> bool {
        !self.requires_auth || authenticated
    }

    /// Whether this item corresponds to `current_path`.
    ///
    /// External items are never active. Prefix matching respects segment
    /// boundaries, so `/dashboard` does not match `/dashboards`, and a root
    /// href (`/`) only ever matches exactly.
    pub fn is_active(&self, current_path: &str) -> bool {
        if self.is_external {
            return false;
        }

        let current = normalize_path(current_path);
        let href = normalize_path(&self.href);

        if current == href {
            return true;
        }

        match self.active_match {
            ActiveMatch::Exact => false,
            ActiveMatch::Prefix => {
                href != "/"
                    && current
                        .strip_prefix(&*href)
                        .is_some_and(|rest| rest.starts_with('/'))
            }
        }
    }

    /// Attributes the rendered link should carry.
    pub fn link_attributes(&self) -> LinkAttributes {
        if self.is_external {
            LinkAttributes::EXTERNAL
        } else {
            LinkAttributes::default()
        }
    }
}

/// A visible item together with its derived active state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNavItem<'a> {
    pub item: &'a NavigationItem,
    pub is_active: bool,
}

/// Items visible to the viewer, in their original order.
///
/// An item is dropped if and only if it requires authentication and the
/// viewer is anonymous.
pub fn filter_navigation(items: &[NavigationItem], authenticated: bool) -> Vec<&NavigationItem> {
    let visible: Vec<&NavigationItem> = items
        .iter()
        .filter(|item| item.is_visible(authenticated))
        .collect();
    trace_log!(
        "Navigation filter: {} of {} items visible (authenticated: {})",
        visible.len(),
        items.len(),
        authenticated
    );
    visible
}

/// Filter `items` for the viewer and mark the active ones.
pub fn resolve_navigation<'a>(
    items: &'a [NavigationItem],
    current_path: &str,
    authenticated: bool,
) -> Vec<ResolvedNavItem<'a>> {
    filter_navigation(items, authenticated)
        .into_iter()
        .map(|item| ResolvedNavItem {
            item,
            is_active: item.is_active(current_path),
        })
        .collect()
}

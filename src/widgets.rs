//! GPUI widgets for breadcrumbs and the site menu.
//!
//! Both widgets are builders that produce a plain [`Div`]. They read the
//! current location and session from the [`SiteContext`] global unless given
//! explicit data, derive what to show with the pure functions of this crate,
//! and wire clicks back into [`SiteNav`].
//!
//! - [`Breadcrumbs`] / [`breadcrumbs`] — the trail for the current page.
//!   Links navigate, the current page and the ellipsis are inert text.
//! - [`NavMenu`] / [`nav_menu`] — the auth-filtered menu with the active
//!   item highlighted. External items open in the system browser.
//!
//! ```ignore
//! div()
//!     .child(nav_menu(cx))
//!     .child(Breadcrumbs::new().separator("/").build(cx))
//! ```

use crate::breadcrumb::BreadcrumbEntry;
use crate::context::{SiteContext, SiteNav};
use crate::nav::{resolve_navigation, NavigationItem};
use crate::trace_log;
use gpui::*;

const LINK_COLOR: u32 = 0x2196f3;
const TEXT_COLOR: u32 = 0x333333;
const MUTED_COLOR: u32 = 0x888888;

/// How a breadcrumb entry is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Clickable link to an ancestor page.
    Link,
    /// The page being viewed.
    Current,
    /// Stand-in for truncated entries.
    Placeholder,
}

impl EntryKind {
    pub fn of(entry: &BreadcrumbEntry) -> Self {
        if entry.is_current {
            EntryKind::Current
        } else if entry.href.is_some() {
            EntryKind::Link
        } else {
            EntryKind::Placeholder
        }
    }
}

// ============================================================================
// Breadcrumbs
// ============================================================================

/// Breadcrumb trail renderer.
pub struct Breadcrumbs {
    trail: Option<Vec<BreadcrumbEntry>>,
    separator: SharedString,
}

impl Breadcrumbs {
    /// Render the trail derived from the global [`SiteContext`].
    pub fn new() -> Self {
        Self {
            trail: None,
            separator: SharedString::from("›"),
        }
    }

    /// Render `trail` instead of deriving one.
    pub fn trail(mut self, trail: Vec<BreadcrumbEntry>) -> Self {
        self.trail = Some(trail);
        self
    }

    pub fn separator(mut self, separator: impl Into<SharedString>) -> Self {
        self.separator = separator.into();
        self
    }

    /// The entries this widget will render.
    pub fn resolve_trail(&self, cx: &App) -> Vec<BreadcrumbEntry> {
        if let Some(trail) = &self.trail {
            return trail.clone();
        }
        cx.try_global::<SiteContext>()
            .map(SiteContext::breadcrumbs)
            .unwrap_or_default()
    }

    pub fn build(self, cx: &App) -> Div {
        let trail = self.resolve_trail(cx);
        let mut container = div().flex().flex_row().items_center().gap_2().text_sm();

        if trail.is_empty() {
            return container;
        }
        trace_log!("Rendering {} breadcrumb entries", trail.len());

        for (index, entry) in trail.into_iter().enumerate() {
            if index > 0 {
                container = container.child(
                    div()
                        .text_color(rgb(MUTED_COLOR))
                        .child(self.separator.clone()),
                );
            }
            container = container.child(render_entry(entry));
        }

        container
    }
}

impl Default for Breadcrumbs {
    fn default() -> Self {
        Self::new()
    }
}

fn render_entry(entry: BreadcrumbEntry) -> Div {
    let kind = EntryKind::of(&entry);
    let label = SharedString::from(entry.label);
    match (kind, entry.href) {
        (EntryKind::Link, Some(href)) => div()
            .cursor_pointer()
            .text_color(rgb(LINK_COLOR))
            .hover(|this| this.text_color(rgb(TEXT_COLOR)))
            .child(label)
            .on_mouse_down(MouseButton::Left, move |_event, _window, cx| {
                SiteNav::navigate(cx, href.clone());
            }),
        (EntryKind::Current, _) => div()
            .font_weight(FontWeight::MEDIUM)
            .text_color(rgb(TEXT_COLOR))
            .child(label),
        _ => div().text_color(rgb(MUTED_COLOR)).child(label),
    }
}

/// Breadcrumbs for the current location with the default separator.
pub fn breadcrumbs(cx: &App) -> Div {
    Breadcrumbs::new().build(cx)
}

// ============================================================================
// NavMenu
// ============================================================================

/// Site menu renderer.
pub struct NavMenu {
    items: Option<Vec<NavigationItem>>,
    vertical: bool,
}

impl NavMenu {
    /// Render the menu stored in the global [`SiteContext`].
    pub fn new() -> Self {
        Self {
            items: None,
            vertical: false,
        }
    }

    /// Render `items` instead of the global menu. Location and session still
    /// come from the global context.
    pub fn items(mut self, items: Vec<NavigationItem>) -> Self {
        self.items = Some(items);
        self
    }

    /// Stack items vertically, e.g. for a sidebar.
    pub fn vertical(mut self) -> Self {
        self.vertical = true;
        self
    }

    /// Visible items with their active state.
    pub fn resolve_items(&self, cx: &App) -> Vec<(NavigationItem, bool)> {
        let Some(site) = cx.try_global::<SiteContext>() else {
            trace_log!("NavMenu: no site context, rendering nothing");
            return Vec::new();
        };

        let items = self.items.as_deref().unwrap_or_else(|| site.menu());
        resolve_navigation(items, site.current_path(), site.is_authenticated())
            .into_iter()
            .map(|resolved| (resolved.item.clone(), resolved.is_active))
            .collect()
    }

    pub fn build(self, cx: &App) -> Div {
        let items = self.resolve_items(cx);
        let mut container = div().flex().gap_4();
        container = if self.vertical {
            container.flex_col()
        } else {
            container.flex_row().items_center()
        };

        for (item, is_active) in items {
            container = container.child(render_item(item, is_active));
        }
        container
    }
}

impl Default for NavMenu {
    fn default() -> Self {
        Self::new()
    }
}

fn render_item(item: NavigationItem, is_active: bool) -> Div {
    let title = SharedString::from(item.title.clone());
    let link = div()
        .cursor_pointer()
        .text_color(if is_active {
            rgb(LINK_COLOR)
        } else {
            rgb(TEXT_COLOR)
        })
        .hover(|this| this.text_color(rgb(LINK_COLOR)))
        .child(title);

    if item.link_attributes().opens_new_tab() {
        let url = item.href;
        link.on_mouse_down(MouseButton::Left, move |_event, _window, cx| {
            cx.open_url(&url);
        })
    } else {
        let href = item.href;
        link.on_mouse_down(MouseButton::Left, move |_event, _window, cx| {
            SiteNav::navigate(cx, href.clone());
        })
    }
}

/// The global menu laid out horizontally.
pub fn nav_menu(cx: &App) -> Div {
    NavMenu::new().build(cx)
}

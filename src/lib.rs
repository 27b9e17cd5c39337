//! Breadcrumb trails and auth-aware navigation menus for GPUI documentation
//! sites.
//!
//! The crate is split into a pure derivation core and a thin GPUI layer:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`segment`] | Split and normalize URL paths |
//! | [`label`] | Turn segments into readable labels |
//! | [`breadcrumb`] | Build, suppress and truncate breadcrumb trails |
//! | [`nav`] | Filter the menu by session and derive active items |
//! | [`context`] | `SiteContext` global and `SiteNav` helpers |
//! | [`widgets`] | `Breadcrumbs` and `NavMenu` renderers |
//!
//! Every derivation is a synchronous function of its inputs. Nothing is
//! cached; the widgets recompute on every render.
//!
//! # Example
//!
//! ```
//! use gpui_site_nav::{build_breadcrumbs, filter_navigation, BreadcrumbOptions, NavigationItem};
//!
//! let trail = build_breadcrumbs("/docs/quickstart", &BreadcrumbOptions::default());
//! assert_eq!(trail.last().map(|e| e.label.as_str()), Some("Quick Start"));
//!
//! let menu = vec![
//!     NavigationItem::new("Docs", "/docs").match_prefix(),
//!     NavigationItem::new("Monitoring", "/monitoring").requires_auth(),
//! ];
//! assert_eq!(filter_navigation(&menu, false).len(), 1);
//! ```
//!
//! # Features
//!
//! - `log` (default) — diagnostics through the `log` crate.
//! - `tracing` — diagnostics through `tracing` instead.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod logging;

pub mod breadcrumb;
pub mod context;
pub mod error;
pub mod label;
pub mod nav;
pub mod segment;
pub mod widgets;

pub use breadcrumb::{
    build_breadcrumbs, docs_breadcrumbs, truncate_trail, BreadcrumbEntry, BreadcrumbOptions,
    ELLIPSIS_LABEL,
};
pub use context::{init_site_nav, SiteContext, SiteNav};
pub use error::ConfigError;
pub use label::{format_label, format_segment, LabelTable};
pub use nav::{
    filter_navigation, resolve_navigation, ActiveMatch, LinkAttributes, NavigationItem,
    ResolvedNavItem,
};
pub use segment::{normalize_path, split_path};
pub use widgets::{breadcrumbs, nav_menu, Breadcrumbs, NavMenu};

//! Breadcrumb trail derivation.
//!
//! [`build_breadcrumbs`] turns the current path into an ordered trail of
//! [`BreadcrumbEntry`] values:
//!
//! ```text
//! "/docs/guides/git-workflow"
//!     → Home (/) › Documentation (/docs) › Guides (/docs/guides) › Git Workflow
//! ```
//!
//! The trail is rebuilt from scratch on every call. Nothing is cached and no
//! input is rejected; malformed paths degrade to best-effort labels.
//!
//! # Rules
//!
//! 1. Explicit [`items`](BreadcrumbOptions::with_items) are used verbatim and
//!    skip derivation and suppression (they are still truncated).
//! 2. A synthetic home entry is prepended when
//!    [`show_home`](BreadcrumbOptions::with_show_home) is set and the path is
//!    not root.
//! 3. Each segment links to its accumulated prefix, except the last one which
//!    is the current page and carries no link.
//! 4. A trail consisting of nothing but the current page is suppressed.
//! 5. Trails longer than `max_items` keep their first entry, an ellipsis
//!    placeholder and the last `max_items - 2` entries.
//!
//! # Examples
//!
//! ```
//! use gpui_site_nav::{build_breadcrumbs, BreadcrumbOptions};
//!
//! let trail = build_breadcrumbs("/docs/guides/git-workflow", &BreadcrumbOptions::default());
//! let labels: Vec<&str> = trail.iter().map(|e| e.label.as_str()).collect();
//! assert_eq!(labels, ["Home", "Documentation", "Guides", "Git Workflow"]);
//! assert!(trail[3].is_current);
//! ```

use crate::error::ConfigError;
use crate::label::LabelTable;
use crate::segment::{is_root, join_segments, segment_prefixes, split_path};
use crate::{trace_log, warn_log};

/// Label of the truncation placeholder.
pub const ELLIPSIS_LABEL: &str = "…";

/// Smallest `max_items` that still fits first entry, ellipsis and current page.
pub const MIN_MAX_ITEMS: usize = 3;

/// Default truncation threshold.
pub const DEFAULT_MAX_ITEMS: usize = 4;

/// One entry of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbEntry {
    /// Display text, never empty for derived entries.
    pub label: String,
    /// Link target. `None` for the current page and the ellipsis placeholder.
    pub href: Option<String>,
    /// `true` only for the last entry of a derived trail.
    pub is_current: bool,
}

impl BreadcrumbEntry {
    /// A navigable entry.
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
            is_current: false,
        }
    }

    /// The current page.
    pub fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
            is_current: true,
        }
    }

    /// The non-navigable placeholder that stands in for truncated entries.
    pub fn ellipsis() -> Self {
        Self {
            label: ELLIPSIS_LABEL.to_string(),
            href: None,
            is_current: false,
        }
    }

    /// Whether this entry is the truncation placeholder.
    pub fn is_ellipsis(&self) -> bool {
        !self.is_current && self.href.is_none() && self.label == ELLIPSIS_LABEL
    }

    /// Whether clicking this entry should navigate anywhere.
    pub fn is_navigable(&self) -> bool {
        self.href.is_some()
    }
}

/// Options recognised by [`build_breadcrumbs`].
#[derive(Debug, Clone, PartialEq)]
pub struct BreadcrumbOptions {
    /// Prepend a synthetic home entry linking to `/`.
    pub show_home: bool,
    /// Truncation threshold.
    pub max_items: usize,
    /// Explicit trail that replaces automatic derivation.
    pub items: Option<Vec<BreadcrumbEntry>>,
    /// Segment label overrides.
    pub labels: LabelTable,
}

impl BreadcrumbOptions {
    /// Defaults: home entry shown, at most four entries, built-in labels.
    pub fn new() -> Self {
        Self {
            show_home: true,
            max_items: DEFAULT_MAX_ITEMS,
            items: None,
            labels: LabelTable::default(),
        }
    }

    /// Toggle the synthetic home entry.
    pub fn with_show_home(mut self, show_home: bool) -> Self {
        self.show_home = show_home;
        self
    }

    /// Set the truncation threshold. Values below three are clamped when the
    /// trail is built and rejected by [`validate`](Self::validate).
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    /// Use `items` instead of deriving the trail from the path.
    pub fn with_items(mut self, items: Vec<BreadcrumbEntry>) -> Self {
        self.items = Some(items);
        self
    }

    /// Replace the label table.
    pub fn with_labels(mut self, labels: LabelTable) -> Self {
        self.labels = labels;
        self
    }

    /// Check the options without building anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_items < MIN_MAX_ITEMS {
            return Err(ConfigError::InvalidMaxItems {
                max_items: self.max_items,
                minimum: MIN_MAX_ITEMS,
            });
        }

        if let Some(items) = &self.items {
            if let Some(index) = items.iter().position(|entry| entry.label.is_empty()) {
                return Err(ConfigError::EmptyLabel { index });
            }
        }

        self.labels.validate()
    }

    /// `max_items` raised to the supported minimum.
    fn effective_max_items(&self) -> usize {
        if self.max_items < MIN_MAX_ITEMS {
            warn_log!(
                "Breadcrumb max_items {} is below the minimum {}, clamping",
                self.max_items,
                MIN_MAX_ITEMS
            );
            MIN_MAX_ITEMS
        } else {
            self.max_items
        }
    }
}

impl Default for BreadcrumbOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive the breadcrumb trail for `path`.
pub fn build_breadcrumbs(path: &str, options: &BreadcrumbOptions) -> Vec<BreadcrumbEntry> {
    let max_items = options.effective_max_items();

    if let Some(items) = &options.items {
        trace_log!("Using {} explicit breadcrumb items", items.len());
        return truncate_trail(items.clone(), max_items);
    }

    if is_root(path) {
        return Vec::new();
    }

    let prefixes = segment_prefixes(path);
    let segments: Vec<&str> = prefixes.iter().map(|(segment, _)| segment.as_str()).collect();
    let mut trail = Vec::with_capacity(prefixes.len() + 1);

    if options.show_home {
        trail.push(BreadcrumbEntry::link(options.labels.home_label(), "/"));
    }

    let last = prefixes.len() - 1;
    for (index, (segment, href)) in prefixes.iter().enumerate() {
        let label = options.labels.label_for(&segments, index);
        trace_log!("Breadcrumb segment '{}' labelled '{}'", segment, label);

        if index == last {
            trail.push(BreadcrumbEntry::current(label));
        } else {
            trail.push(BreadcrumbEntry::link(label, href.clone()));
        }
    }

    if trail.len() == 1 && trail[0].is_current {
        trace_log!("Suppressing lone breadcrumb for '{}'", path);
        return Vec::new();
    }

    truncate_trail(trail, max_items)
}

/// Collapse the middle of `trail` into a single ellipsis placeholder so that
/// at most `max_items` entries remain.
///
/// The first entry and the last `max_items - 2` entries are kept. Trails that
/// already fit, and `max_items` below [`MIN_MAX_ITEMS`], are returned as-is.
pub fn truncate_trail(trail: Vec<BreadcrumbEntry>, max_items: usize) -> Vec<BreadcrumbEntry> {
    if trail.len() <= max_items || max_items < MIN_MAX_ITEMS {
        return trail;
    }

    let keep_tail = max_items - 2;
    let tail_start = trail.len() - keep_tail;
    trace_log!(
        "Truncating breadcrumb trail of {} entries to {}",
        trail.len(),
        max_items
    );

    let mut entries = trail.into_iter();
    let mut truncated = Vec::with_capacity(max_items);
    truncated.extend(entries.next());
    truncated.push(BreadcrumbEntry::ellipsis());
    truncated.extend(entries.skip(tail_start - 1));
    truncated
}

/// Trail for a documentation page, independent of the URL shape.
///
/// Produces `Home › Documentation › <section> › <page_title>`, labelling the
/// first two levels through `labels` exactly as derived trails would. An
/// empty `page_title` makes the section itself the current page. `section`
/// may contain slashes and is normalized; if nothing is left of it the trail
/// stops at the documentation index, `Home › Documentation`.
///
/// ```
/// use gpui_site_nav::{docs_breadcrumbs, LabelTable};
///
/// let trail = docs_breadcrumbs(&LabelTable::default(), "guides", "Git Workflow");
/// assert_eq!(trail[2].label, "Guides");
/// assert_eq!(trail[2].href.as_deref(), Some("/docs/guides"));
/// assert!(trail[3].is_current);
/// ```
pub fn docs_breadcrumbs(
    labels: &LabelTable,
    section: &str,
    page_title: &str,
) -> Vec<BreadcrumbEntry> {
    let mut segments = vec!["docs".to_string()];
    segments.extend(split_path(section));
    let docs_label = labels.label_for(&segments, 0);
    let home = BreadcrumbEntry::link(labels.home_label(), "/");

    if segments.len() == 1 {
        trace_log!("Empty docs section, trail ends at the documentation index");
        return vec![home, BreadcrumbEntry::current(docs_label)];
    }

    let section_label = labels.label_for(&segments, segments.len() - 1);
    let mut trail = vec![home, BreadcrumbEntry::link(docs_label, "/docs")];

    if page_title.is_empty() {
        trail.push(BreadcrumbEntry::current(section_label));
    } else {
        trail.push(BreadcrumbEntry::link(section_label, join_segments(&segments)));
        trail.push(BreadcrumbEntry::current(page_title));
    }

    trail
}

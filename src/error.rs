//! Configuration errors.
//!
//! Deriving a breadcrumb trail or a navigation menu never fails: unknown
//! segments fall back to generic labels and odd paths degrade to an empty
//! trail. What *can* be wrong is the configuration handed to the builders,
//! and [`ConfigError`] describes those cases.
//!
//! # Examples
//!
//! ```
//! use gpui_site_nav::{BreadcrumbOptions, ConfigError};
//!
//! let options = BreadcrumbOptions::new().with_max_items(2);
//! assert_eq!(
//!     options.validate(),
//!     Err(ConfigError::InvalidMaxItems { max_items: 2, minimum: 3 })
//! );
//! ```

use std::fmt;

/// Invalid breadcrumb or navigation configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_items` is too small to hold the first entry, the ellipsis and the
    /// current page.
    InvalidMaxItems { max_items: usize, minimum: usize },

    /// An explicit breadcrumb entry has an empty label.
    EmptyLabel { index: usize },

    /// A label table maps `segment` to an empty label. The home label is
    /// reported with `segment` set to `"/"`.
    EmptyOverride { segment: String },

    /// A navigation item has an empty title.
    EmptyTitle { href: String },

    /// A navigation item has an empty destination.
    EmptyHref { title: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMaxItems { max_items, minimum } => {
                write!(f, "max_items must be at least {}, got {}", minimum, max_items)
            }
            ConfigError::EmptyLabel { index } => {
                write!(f, "Entry {} has an empty label", index)
            }
            ConfigError::EmptyOverride { segment } => {
                write!(f, "Label override for '{}' is empty", segment)
            }
            ConfigError::EmptyTitle { href } => {
                write!(f, "Navigation item for '{}' has an empty title", href)
            }
            ConfigError::EmptyHref { title } => {
                write!(f, "Navigation item '{}' has an empty href", title)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

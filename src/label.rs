//! Human-readable labels for path segments.
//!
//! The default transform turns a slug into title case by splitting on `-` and
//! capitalizing each word (`"git-workflow"` → `"Git Workflow"`). A
//! [`LabelTable`] layers overrides on top:
//!
//! - **global overrides** apply to a segment wherever it appears
//!   (`docs` → `Documentation`, `login` → `Sign In`, ...);
//! - **section overrides** apply only to the second segment of a path whose
//!   first segment names the section (`/docs/api` → `API Reference`).
//!
//! Lookup order for the segment at `index` is: section override (only when
//! `index == 1`), then global override, then the default transform.
//!
//! ```
//! use gpui_site_nav::label::{format_segment, LabelTable};
//!
//! assert_eq!(format_segment("git-workflow"), "Git Workflow");
//!
//! let labels = LabelTable::default();
//! let segments = ["docs", "api"];
//! assert_eq!(labels.label_for(&segments, 0), "Documentation");
//! assert_eq!(labels.label_for(&segments, 1), "API Reference");
//! ```

use crate::error::ConfigError;
use std::collections::HashMap;

const DEFAULT_HOME_LABEL: &str = "Home";

const SITE_LABELS: &[(&str, &str)] = &[
    ("docs", "Documentation"),
    ("auth", "Authentication"),
    ("login", "Sign In"),
    ("register", "Sign Up"),
    ("dashboard", "Dashboard"),
];

const DOCS_SECTION_LABELS: &[(&str, &str)] = &[
    ("api", "API Reference"),
    ("quickstart", "Quick Start"),
    ("examples", "Examples"),
    ("guides", "Guides"),
    ("reference", "Reference"),
    ("tutorial", "Tutorial"),
];

/// Capitalize the first character of `word`, leaving the rest untouched.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Default slug-to-label transform.
///
/// Empty words produced by doubled or edge hyphens are skipped. The result is
/// never empty for a non-empty segment: if every word is empty the segment is
/// returned as-is.
///
/// ```
/// use gpui_site_nav::label::format_segment;
///
/// assert_eq!(format_segment("deployment"), "Deployment");
/// assert_eq!(format_segment("ci--cd"), "Ci Cd");
/// assert_eq!(format_segment("Git Workflow"), "Git Workflow");
/// ```
pub fn format_segment(segment: &str) -> String {
    let label = segment
        .split('-')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    if label.is_empty() {
        segment.to_string()
    } else {
        label
    }
}

/// Label a single segment with the default table and no path context.
pub fn format_label(segment: &str) -> String {
    LabelTable::default().label(segment)
}

/// Consolidated, configurable segment label overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelTable {
    home_label: String,
    overrides: HashMap<String, String>,
    sections: HashMap<String, HashMap<String, String>>,
}

impl LabelTable {
    /// A table with no overrides. Every segment uses [`format_segment`].
    pub fn empty() -> Self {
        Self {
            home_label: DEFAULT_HOME_LABEL.to_string(),
            overrides: HashMap::new(),
            sections: HashMap::new(),
        }
    }

    /// Override the label for `segment` everywhere it appears.
    pub fn with_override(mut self, segment: impl Into<String>, label: impl Into<String>) -> Self {
        self.overrides.insert(segment.into(), label.into());
        self
    }

    /// Override the label for `segment` when it directly follows `section`
    /// as the second segment of a path.
    pub fn with_section_override(
        mut self,
        section: impl Into<String>,
        segment: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        self.sections
            .entry(section.into())
            .or_default()
            .insert(segment.into(), label.into());
        self
    }

    /// Set the label of the synthetic root entry.
    pub fn with_home_label(mut self, label: impl Into<String>) -> Self {
        self.home_label = label.into();
        self
    }

    /// Label of the synthetic root entry. An empty home label reads as
    /// `"Home"`.
    pub fn home_label(&self) -> &str {
        if self.home_label.is_empty() {
            DEFAULT_HOME_LABEL
        } else {
            &self.home_label
        }
    }

    /// Section-scoped override for `segment` under `section`, if any.
    /// Empty overrides are ignored.
    pub fn section_label(&self, section: &str, segment: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|labels| labels.get(segment))
            .map(String::as_str)
            .filter(|label| !label.is_empty())
    }

    /// Label `segment` using global overrides only.
    pub fn label(&self, segment: &str) -> String {
        self.overrides
            .get(segment)
            .filter(|label| !label.is_empty())
            .cloned()
            .unwrap_or_else(|| format_segment(segment))
    }

    /// Reject empty labels anywhere in the table.
    ///
    /// Lookups already skip empty entries, so this only reports configuration
    /// that would otherwise be silently ignored. When several entries are
    /// empty, the home label is reported first, then the smallest segment.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.home_label.is_empty() {
            return Err(ConfigError::EmptyOverride {
                segment: "/".to_string(),
            });
        }

        let empty_segment = self
            .overrides
            .iter()
            .chain(self.sections.values().flatten())
            .filter(|(_, label)| label.is_empty())
            .map(|(segment, _)| segment)
            .min();

        match empty_segment {
            Some(segment) => Err(ConfigError::EmptyOverride {
                segment: segment.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Label the segment at `index` of `segments`, taking its section into
    /// account.
    ///
    /// An out-of-range `index` yields an empty string.
    pub fn label_for<S: AsRef<str>>(&self, segments: &[S], index: usize) -> String {
        let Some(segment) = segments.get(index).map(AsRef::as_ref) else {
            return String::new();
        };

        if index == 1 {
            if let Some(label) = self.section_label(segments[0].as_ref(), segment) {
                return label.to_string();
            }
        }

        self.label(segment)
    }
}

impl Default for LabelTable {
    /// The site's built-in labels, including the `docs` section table.
    fn default() -> Self {
        let table = SITE_LABELS
            .iter()
            .fold(Self::empty(), |table, (segment, label)| {
                table.with_override(*segment, *label)
            });
        DOCS_SECTION_LABELS
            .iter()
            .fold(table, |table, (segment, label)| {
                table.with_section_override("docs", *segment, *label)
            })
    }
}

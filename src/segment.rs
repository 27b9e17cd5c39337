//! Path segmentation.
//!
//! Splits URL paths into their non-empty segments and rebuilds the running
//! prefixes that breadcrumb links point at.
//!
//! # Normalization rules
//!
//! 1. **Empty paths** become `"/"` (root)
//! 2. **Leading slash** is ensured (`"docs"` → `"/docs"`)
//! 3. **Trailing slashes** are removed, except for root
//! 4. **Repeated slashes** collapse (`"/docs//guides"` → `"/docs/guides"`)
//!
//! No input is rejected. Any string, including `""` and `"/"`, yields a
//! (possibly empty) list of segments.
//!
//! # Examples
//!
//! ```
//! use gpui_site_nav::segment::{join_segments, normalize_path, split_path};
//!
//! let segments = split_path("/docs//guides/git-workflow/");
//! assert_eq!(segments, vec!["docs", "guides", "git-workflow"]);
//! assert_eq!(join_segments(&segments), "/docs/guides/git-workflow");
//! assert_eq!(normalize_path("docs/guides/"), "/docs/guides");
//! ```

use std::borrow::Cow;

/// Iterate over the non-empty segments of `path` without allocating.
pub fn split_path_iter(path: &str) -> impl Iterator<Item = &str> + '_ {
    path.split('/').filter(|s| !s.is_empty())
}

/// Split a path into segments, filtering empty segments.
///
/// ```
/// use gpui_site_nav::segment::split_path;
///
/// assert_eq!(split_path("/users/123"), vec!["users", "123"]);
/// assert_eq!(split_path("/"), Vec::<String>::new());
/// assert_eq!(split_path(""), Vec::<String>::new());
/// ```
pub fn split_path(path: &str) -> Vec<String> {
    split_path_iter(path).map(String::from).collect()
}

/// Rebuild a rooted path from segments. The inverse of [`split_path`].
pub fn join_segments<S: AsRef<str>>(segments: &[S]) -> String {
    if segments.is_empty() {
        return "/".to_string();
    }
    let mut path = String::new();
    for segment in segments {
        path.push('/');
        path.push_str(segment.as_ref());
    }
    path
}

/// Normalize a path for comparison and display.
///
/// Returns `Cow::Borrowed` when the path is already in normal form.
///
/// ```
/// use gpui_site_nav::segment::normalize_path;
///
/// assert_eq!(normalize_path("/dashboard"), "/dashboard");
/// assert_eq!(normalize_path("dashboard/"), "/dashboard");
/// assert_eq!(normalize_path("//"), "/");
/// ```
#[must_use]
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if path == "/" {
        return Cow::Borrowed(path);
    }

    let already_normal = path.starts_with('/')
        && !path.ends_with('/')
        && !path.contains("//");
    if already_normal {
        return Cow::Borrowed(path);
    }

    let segments: Vec<&str> = split_path_iter(path).collect();
    Cow::Owned(join_segments(&segments))
}

/// `true` when the path has no segments (`""`, `"/"`, `"//"`, ...).
pub fn is_root(path: &str) -> bool {
    split_path_iter(path).next().is_none()
}

/// Pair every segment with the accumulated path that ends at it.
///
/// ```
/// use gpui_site_nav::segment::segment_prefixes;
///
/// let prefixes = segment_prefixes("/docs/guides");
/// assert_eq!(prefixes[0], ("docs".to_string(), "/docs".to_string()));
/// assert_eq!(prefixes[1], ("guides".to_string(), "/docs/guides".to_string()));
/// ```
pub fn segment_prefixes(path: &str) -> Vec<(String, String)> {
    let mut running = String::new();
    split_path_iter(path)
        .map(|segment| {
            running.push('/');
            running.push_str(segment);
            (segment.to_string(), running.clone())
        })
        .collect()
}

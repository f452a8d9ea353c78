//! Canonical path prefixes and request path segmentation.

/// Separator between path segments.
pub const SEPARATOR: char = '/';

/// Join `prefix` and `part` with exactly one separator.
///
/// Trailing separators on `prefix` and leading or trailing separators on
/// `part` are dropped first, so the result is the same however either
/// argument is written. An empty `part` yields the normalized prefix.
///
/// ```
/// use peephole_core::subpath;
///
/// assert_eq!(subpath("/a/", "/b"), "/a/b");
/// assert_eq!(subpath("/a", "b"), "/a/b");
/// assert_eq!(subpath("/", "x"), "/x");
/// ```
pub fn subpath(prefix: &str, part: &str) -> String {
    let prefix = prefix.trim_end_matches(SEPARATOR);
    let part = part.trim_matches(SEPARATOR);
    if part.is_empty() {
        return if prefix.is_empty() {
            String::from(SEPARATOR)
        } else {
            prefix.to_owned()
        };
    }
    format!("{prefix}{SEPARATOR}{part}")
}

/// Split a request path suffix into its non-empty segments.
///
/// Repeated, leading, and trailing separators produce no segments.
pub fn split_path(suffix: &str) -> Vec<&str> {
    suffix
        .split(SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .collect()
}

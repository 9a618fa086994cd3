/// Path utilities for normalization and query-string handling
///
/// All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

pub mod query;
pub use query::{parse_query_string, QueryParams, QueryValue};

/// Validates if a path is in canonical form
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//` or `\`
/// - Must not end with `/` (except root `/`)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use statepath_router::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/user/:id"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("login"));
/// assert!(!is_valid_path("//login"));
/// assert!(!is_valid_path("/user/:id/"));
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains('\\') {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Normalize a path to canonical form
///
/// Returns `Cow::Borrowed` when input is already valid (zero allocations).
/// Concatenated route fragments such as `"/" + "/login"` or `"/user/:id" + "/"`
/// go through here, so doubled and trailing slashes are expected input.
///
/// # Examples
///
/// ```
/// use statepath_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// assert!(matches!(normalize_path("/login"), Cow::Borrowed("/login")));
/// assert_eq!(normalize_path("//login"), "/login");
/// assert_eq!(normalize_path("/user/:id/"), "/user/:id");
/// assert_eq!(normalize_path("//"), "/");
/// assert_eq!(normalize_path("about\\company"), "/about/company");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}

/// Splits a URL into its path and (optional) query string
///
/// A `#fragment` suffix is dropped.
///
/// ```
/// use statepath_router::path::split_query;
///
/// assert_eq!(split_query("/user/1?q=2"), ("/user/1", Some("q=2")));
/// assert_eq!(split_query("/user/1"), ("/user/1", None));
/// assert_eq!(split_query("/user/1#top"), ("/user/1", None));
/// ```
pub fn split_query(url: &str) -> (&str, Option<&str>) {
    let url = url.split_once('#').map_or(url, |(before, _)| before);
    match url.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (url, None),
    }
}

/// Splits a normalized path into its non-empty segments
pub fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Percent-decodes one URL component, keeping the raw text when it is not valid UTF-8
pub fn decode_component(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| raw.to_string())
}

/// Pattern parsing for route path fragments
///
/// Pure functional classification of fragment segments into typed segments.
/// All functions are **pure**: same input → same output, no side effects.

/// Represents the different types of route pattern segments
///
/// # Examples
///
/// ```
/// use statepath_router::route::pattern::{classify_segment, PatternSegment};
///
/// assert_eq!(classify_segment("about"), PatternSegment::Static("about".to_string()));
/// assert_eq!(classify_segment(":id"), PatternSegment::Param("id".to_string()));
/// assert_eq!(classify_segment("*path"), PatternSegment::Wildcard("path".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegment {
    /// Wildcard segment: `*name`, captures one or more path segments
    Wildcard(String),
    /// Named parameter: `:name`, captures exactly one path segment
    Param(String),
    /// Static text segment
    Static(String),
}

impl PatternSegment {
    /// Parameter name for dynamic segments
    pub fn param_name(&self) -> Option<&str> {
        match self {
            PatternSegment::Wildcard(name) | PatternSegment::Param(name) => Some(name),
            PatternSegment::Static(_) => None,
        }
    }

    /// Whether this segment matches one path segment literally
    pub fn is_static(&self) -> bool {
        matches!(self, PatternSegment::Static(_))
    }
}

/// Classifies a single segment into a pattern type (pure function)
///
/// # Parsing Rules (evaluated in order)
///
/// 1. **Wildcard**: `*name`
/// 2. **Param**: `:name`
/// 3. **Static**: any other text
///
/// An empty name (`*` or `:`) is classified but rejected later by
/// [`parse_fragment`](super::parser::parse_fragment).
pub fn classify_segment(segment: &str) -> PatternSegment {
    if let Some(name) = segment.strip_prefix('*') {
        return PatternSegment::Wildcard(name.to_string());
    }

    match segment.strip_prefix(':') {
        Some(name) => PatternSegment::Param(name.to_string()),
        None => PatternSegment::Static(segment.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_static() {
        let seg = classify_segment("profile");
        assert_eq!(seg, PatternSegment::Static("profile".to_string()));
        assert!(seg.is_static());
        assert_eq!(seg.param_name(), None);
    }

    #[test]
    fn test_classify_param() {
        let seg = classify_segment(":id");
        assert_eq!(seg, PatternSegment::Param("id".to_string()));
        assert_eq!(seg.param_name(), Some("id"));
    }

    #[test]
    fn test_classify_wildcard() {
        let seg = classify_segment("*path");
        assert_eq!(seg, PatternSegment::Wildcard("path".to_string()));
        assert_eq!(seg.param_name(), Some("path"));
    }

    #[test]
    fn test_classify_marker_inside_static() {
        // Only a leading marker makes a segment dynamic
        assert_eq!(
            classify_segment("v1:beta"),
            PatternSegment::Static("v1:beta".to_string())
        );
        assert_eq!(
            classify_segment("a*b"),
            PatternSegment::Static("a*b".to_string())
        );
    }

    #[test]
    fn test_classify_empty_names() {
        assert_eq!(classify_segment(":"), PatternSegment::Param(String::new()));
        assert_eq!(classify_segment("*"), PatternSegment::Wildcard(String::new()));
    }
}

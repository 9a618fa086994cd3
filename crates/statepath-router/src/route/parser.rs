/// Pattern parsing and specificity ranking for flattened route chains
///
/// Turns the path fragments of a [`Description`](super::Description) into one
/// segment list, remembering which fragment (and therefore which handler)
/// each segment came from.

use std::cmp::Ordering;

use super::pattern::{classify_segment, PatternSegment};
use crate::path::segments;
use crate::RouterError;

/// A pattern segment tagged with the index of the description part that declared it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedSegment {
    pub segment: PatternSegment,
    pub part: usize,
}

/// Segment counts used to rank competing matches
///
/// Ordering: fewer wildcards first. Among patterns with wildcards, more static
/// then more dynamic segments win; otherwise fewer dynamic then more static
/// segments win. Equal specificity is left to registration order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Specificity {
    pub statics: usize,
    pub dynamics: usize,
    pub stars: usize,
}

impl Ord for Specificity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.stars.cmp(&other.stars).then_with(|| {
            if self.stars > 0 {
                other
                    .statics
                    .cmp(&self.statics)
                    .then_with(|| other.dynamics.cmp(&self.dynamics))
            } else {
                self.dynamics
                    .cmp(&other.dynamics)
                    .then_with(|| other.statics.cmp(&self.statics))
            }
        })
    }
}

impl PartialOrd for Specificity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Result of parsing a whole chain of fragments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPattern {
    pub segments: Vec<OwnedSegment>,
    pub specificity: Specificity,
}

/// Internal state accumulator for fold-based parsing
#[derive(Default)]
struct ParseState {
    parsed: ParsedPattern,
}

impl ParseState {
    fn with_segment(mut self, segment: PatternSegment, part: usize) -> Self {
        let counts = &mut self.parsed.specificity;
        match &segment {
            PatternSegment::Static(_) => counts.statics += 1,
            PatternSegment::Param(_) => counts.dynamics += 1,
            PatternSegment::Wildcard(_) => counts.stars += 1,
        }
        self.parsed.segments.push(OwnedSegment { segment, part });
        self
    }

    fn finalize(self) -> ParsedPattern {
        self.parsed
    }
}

/// Parses one relative path fragment such as `/user/:id` into segments
///
/// Empty segments are ignored, so `/`, `` and `//` all parse to nothing.
///
/// # Examples
///
/// ```
/// use statepath_router::route::parser::parse_fragment;
/// use statepath_router::route::pattern::PatternSegment;
///
/// let segs = parse_fragment("/about/*path").unwrap();
/// assert_eq!(segs, vec![
///     PatternSegment::Static("about".to_string()),
///     PatternSegment::Wildcard("path".to_string()),
/// ]);
///
/// assert!(parse_fragment("/").unwrap().is_empty());
/// assert!(parse_fragment("/user/:").is_err());
/// ```
pub fn parse_fragment(fragment: &str) -> Result<Vec<PatternSegment>, RouterError> {
    segments(fragment)
        .into_iter()
        .map(|raw| {
            let segment = classify_segment(raw);
            match segment.param_name() {
                Some("") => Err(RouterError::invalid_pattern(
                    fragment,
                    format!("segment `{}` has an empty parameter name", raw),
                )),
                _ => Ok(segment),
            }
        })
        .collect()
}

/// Parses the fragments of a chain, in order, into one tagged segment list
///
/// # Examples
///
/// ```
/// use statepath_router::route::parser::parse_chain;
///
/// let parsed = parse_chain(["/", "/user/:id", "/profile"]).unwrap();
/// let parts: Vec<usize> = parsed.segments.iter().map(|s| s.part).collect();
/// assert_eq!(parts, vec![1, 1, 2]);
/// assert_eq!(parsed.specificity.statics, 2);
/// assert_eq!(parsed.specificity.dynamics, 1);
/// ```
pub fn parse_chain<'a, I>(fragments: I) -> Result<ParsedPattern, RouterError>
where
    I: IntoIterator<Item = &'a str>,
{
    fragments
        .into_iter()
        .enumerate()
        .try_fold(ParseState::default(), |state, (part, fragment)| {
            Ok(parse_fragment(fragment)?
                .into_iter()
                .fold(state, |state, segment| state.with_segment(segment, part)))
        })
        .map(ParseState::finalize)
}

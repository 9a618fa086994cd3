/// Path matching against registered route chains
///
/// [`PathMatcher`] is the seam between the recognizer and whatever engine
/// matches concrete paths. [`SegmentMatcher`] is the engine shipped with the
/// crate: static segments, `:name` params, `*name` wildcards, and query strings.

use indexmap::IndexMap;

use crate::path::{decode_component, normalize_path, parse_query_string, segments, split_query, QueryParams};
use crate::route::{parse_chain, Description, Handler, OwnedSegment, ParsedPattern, PatternSegment};
use crate::RouterError;

/// Path params captured by one handler's fragment
pub type Params = IndexMap<String, String>;

/// One handler of a matched chain with the params its own fragment captured
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizedSegment {
    pub handler: Handler,
    pub params: Params,
}

/// Result of recognizing a concrete path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recognition {
    /// Root-to-leaf handler chain of the winning description
    pub segments: Vec<RecognizedSegment>,
    /// Query-string params of the recognized URL (empty when there is none)
    pub query_params: QueryParams,
}

impl Recognition {
    pub fn handler_chain(&self) -> impl Iterator<Item = &Handler> {
        self.segments.iter().map(|segment| &segment.handler)
    }
}

/// A matcher that route chains are registered with and paths recognized against
///
/// Implementations must break ties between equally good matches in favor of
/// the description registered first.
pub trait PathMatcher {
    /// Registers one flattened chain
    fn add(&mut self, description: &Description) -> Result<(), RouterError>;

    /// Recognizes a path (optionally with `?query`), `None` when nothing matches
    fn recognize(&self, url: &str) -> Option<Recognition>;
}

#[derive(Debug, Clone)]
struct Entry {
    description: Description,
    pattern: ParsedPattern,
}

/// One param value captured during matching
#[derive(Debug, Clone)]
struct Capture {
    part: usize,
    name: String,
    value: String,
}

/// Segment-by-segment matcher ranking candidates by specificity
///
/// Every registered chain that matches the path is a candidate; the least
/// wildcard-heavy and most static candidate wins, and among equally specific
/// candidates the first registered one does.
///
/// # Examples
///
/// ```
/// use statepath_router::{flatten, route, PathMatcher, SegmentMatcher};
///
/// let tree = route("/user/:id", "user").with_children([route("/profile", "profile")]);
/// let mut matcher = SegmentMatcher::new();
/// for description in flatten(&tree) {
///     matcher.add(&description).unwrap();
/// }
///
/// let recognition = matcher.recognize("/user/7/profile?tab=bio").unwrap();
/// assert_eq!(recognition.segments[0].params.get("id"), Some(&"7".to_string()));
/// assert!(recognition.segments[1].params.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SegmentMatcher {
    entries: Vec<Entry>,
    case_insensitive: bool,
}

impl SegmentMatcher {
    /// Creates an empty, case-sensitive matcher
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures case sensitivity for static segments (functional builder)
    pub fn with_case_sensitivity(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    /// Number of registered chains
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn recognition_for(entry: &Entry, captures: Vec<Capture>, query_params: QueryParams) -> Recognition {
        let mut segments: Vec<RecognizedSegment> = entry
            .description
            .handlers()
            .map(|handler| RecognizedSegment {
                handler: handler.clone(),
                params: Params::new(),
            })
            .collect();

        for capture in captures {
            segments[capture.part].params.insert(capture.name, capture.value);
        }

        Recognition {
            segments,
            query_params,
        }
    }
}

impl PathMatcher for SegmentMatcher {
    fn add(&mut self, description: &Description) -> Result<(), RouterError> {
        let pattern = parse_chain(description.parts().iter().map(|part| part.path.as_str()))?;
        tracing::debug!(
            pattern = %normalize_path(&description.pattern()),
            depth = description.len(),
            "registered route chain"
        );
        self.entries.push(Entry {
            description: description.clone(),
            pattern,
        });
        Ok(())
    }

    fn recognize(&self, url: &str) -> Option<Recognition> {
        let (raw_path, query) = split_query(url);
        let path = normalize_path(raw_path);
        let path_segments = segments(&path);

        // `min_by_key` keeps the first of equal minimums: registration order breaks ties
        let (entry, captures) = self
            .entries
            .iter()
            .filter_map(|entry| {
                let mut captures = Vec::new();
                match_segments(&entry.pattern.segments, &path_segments, &mut captures, self.case_insensitive)
                    .then_some((entry, captures))
            })
            .inspect(|(entry, _)| {
                tracing::trace!(path = %path, candidate = %entry.description.pattern(), "candidate match");
            })
            .min_by_key(|(entry, _)| entry.pattern.specificity)?;

        let query_params = query.map(parse_query_string).unwrap_or_default();
        Some(Self::recognition_for(entry, captures, query_params))
    }
}

/// Walks pattern and path segments together
///
/// Wildcards capture one or more segments, longest first, backtracking when
/// the rest of the pattern fails to match. `captures` is shared across the
/// walk: each capture is pushed before recursing and popped when that branch
/// fails, so on `false` it is left as it was passed in.
fn match_segments(
    pattern: &[OwnedSegment],
    path: &[&str],
    captures: &mut Vec<Capture>,
    case_insensitive: bool,
) -> bool {
    let Some((first, rest)) = pattern.split_first() else {
        return path.is_empty();
    };

    match &first.segment {
        PatternSegment::Wildcard(name) => {
            // A wildcard needs at least one segment for itself
            for take in (1..=path.len()).rev() {
                let value = path[..take]
                    .iter()
                    .map(|segment| decode_component(segment))
                    .collect::<Vec<_>>()
                    .join("/");
                captures.push(Capture {
                    part: first.part,
                    name: name.clone(),
                    value,
                });
                if match_segments(rest, &path[take..], captures, case_insensitive) {
                    return true;
                }
                captures.pop();
            }
            false
        }
        PatternSegment::Param(name) => {
            let Some((value, remaining)) = path.split_first() else {
                return false;
            };
            captures.push(Capture {
                part: first.part,
                name: name.clone(),
                value: decode_component(value),
            });
            if match_segments(rest, remaining, captures, case_insensitive) {
                return true;
            }
            captures.pop();
            false
        }
        PatternSegment::Static(expected) => {
            let Some((actual, remaining)) = path.split_first() else {
                return false;
            };
            let matches = if case_insensitive {
                expected.eq_ignore_ascii_case(actual)
            } else {
                expected == actual
            };
            matches && match_segments(rest, remaining, captures, case_insensitive)
        }
    }
}

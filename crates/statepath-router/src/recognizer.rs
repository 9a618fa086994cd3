/// Route registration and redirect-following resolution
///
/// A [`Recognizer`] is built once per route tree: every flattened description
/// is registered with a [`PathMatcher`] in declaration order. Resolving a path
/// then recognizes it, builds the state, and follows redirect markers in a
/// bounded loop until a named leaf is reached.

use crate::config::RouterConfig;
use crate::matcher::{PathMatcher, Recognition, SegmentMatcher};
use crate::path::{normalize_path, split_query};
use crate::route::{flatten, Description, RouteDefinition};
use crate::state::{build_state, PartialState, State};
use crate::RouterError;

/// A route tree registered with a matcher, ready to resolve paths
///
/// # Examples
///
/// ```
/// use statepath_router::{redirect, route, Recognizer};
///
/// let tree = route("/", "root").with_children([
///     redirect("/", "/login"),
///     route("/login", "login"),
/// ]);
/// let recognizer = Recognizer::new(&tree).unwrap();
///
/// let state = recognizer.resolve("/").unwrap().unwrap();
/// assert_eq!(state.names(), vec!["root", "login"]);
/// assert_eq!(state.redirect_from.as_deref(), Some("/"));
/// assert_eq!(state.redirect_to.as_deref(), Some("/login"));
/// ```
#[derive(Debug, Clone)]
pub struct Recognizer<M = SegmentMatcher> {
    matcher: M,
    config: RouterConfig,
    descriptions: Vec<Description>,
}

impl Recognizer<SegmentMatcher> {
    /// Registers a tree with the default matcher and configuration
    pub fn new(definition: &RouteDefinition) -> Result<Self, RouterError> {
        Self::with_config(definition, RouterConfig::default())
    }

    /// Registers a tree with the default matcher configured from `config`
    pub fn with_config(definition: &RouteDefinition, config: RouterConfig) -> Result<Self, RouterError> {
        let matcher = SegmentMatcher::new().with_case_sensitivity(config.case_insensitive);
        Self::with_matcher(definition, matcher, config)
    }
}

impl<M: PathMatcher> Recognizer<M> {
    /// Registers every description of `definition`, in flattening order, with `matcher`
    pub fn with_matcher(
        definition: &RouteDefinition,
        mut matcher: M,
        config: RouterConfig,
    ) -> Result<Self, RouterError> {
        let descriptions = flatten(definition);
        for description in &descriptions {
            matcher.add(description)?;
        }
        tracing::debug!(routes = descriptions.len(), "route tree registered");

        Ok(Self {
            matcher,
            config,
            descriptions,
        })
    }

    /// Registered descriptions in registration order
    pub fn descriptions(&self) -> &[Description] {
        &self.descriptions
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Raw matcher output for a path, without building state or following redirects
    pub fn recognize(&self, path: &str) -> Option<Recognition> {
        self.matcher.recognize(path)
    }

    /// Resolves a path to its state, following redirects
    ///
    /// Returns `Ok(None)` when the path, or any redirect target along the way,
    /// is not recognized. After one or more hops `redirect_to` holds the last
    /// target and `redirect_from` holds `path`.
    pub fn resolve(&self, path: &str) -> Result<Option<State>, RouterError> {
        let mut chain = vec![path.to_string()];
        let mut current = path.to_string();

        loop {
            let Some(recognition) = self.matcher.recognize(&current) else {
                tracing::debug!(path = %current, "no route recognized");
                return Ok(None);
            };

            match build_state(&recognition.segments) {
                None => return Ok(None),
                Some(PartialState::Level(route)) => {
                    let state = State::new(route, recognition.query_params);
                    return Ok(Some(if chain.len() > 1 {
                        state.with_redirect(path, current)
                    } else {
                        state
                    }));
                }
                Some(PartialState::Redirect(target)) => {
                    if chain.len() > self.config.max_redirects {
                        tracing::warn!(from = %path, limit = self.config.max_redirects, "redirect limit exceeded");
                        return Err(RouterError::RedirectLimit {
                            from: path.to_string(),
                            limit: self.config.max_redirects,
                        });
                    }
                    let revisits = chain.iter().any(|seen| same_path(seen, &target));
                    chain.push(target.clone());
                    if revisits {
                        tracing::warn!(from = %path, chain = %chain.join(" -> "), "redirect cycle");
                        return Err(RouterError::RedirectCycle {
                            from: path.to_string(),
                            chain,
                        });
                    }

                    tracing::debug!(from = %current, to = %target, "following redirect");
                    current = target;
                }
            }
        }
    }
}

/// Two paths name the same location when their normalized paths agree
fn same_path(a: &str, b: &str) -> bool {
    normalize_path(split_query(a).0) == normalize_path(split_query(b).0)
}

/// Builds a reusable recognizer for a route tree with default configuration
pub fn build_recognizer(definition: &RouteDefinition) -> Result<Recognizer, RouterError> {
    Recognizer::new(definition)
}

/// Resolves `path` against an already built recognizer
pub fn resolve<M: PathMatcher>(recognizer: &Recognizer<M>, path: &str) -> Result<Option<State>, RouterError> {
    recognizer.resolve(path)
}

/// One-shot build and resolve
///
/// Prefer [`build_recognizer`] when resolving more than one path against the
/// same tree.
///
/// ```
/// use statepath_router::{parse, route};
///
/// let tree = route("/user/:id", "user");
/// let state = parse(&tree, "/user/7?tab=bio").unwrap().unwrap();
/// assert_eq!(state.route.params["id"], "7");
/// assert!(parse(&tree, "/nope").unwrap().is_none());
/// ```
pub fn parse(definition: &RouteDefinition, path: &str) -> Result<Option<State>, RouterError> {
    build_recognizer(definition)?.resolve(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::{redirect, route};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_direct_match_has_no_redirect_fields() {
        let recognizer = build_recognizer(&route("/", "root").with_children([route("/login", "login")])).unwrap();
        let state = recognizer.resolve("/login").unwrap().unwrap();
        assert_eq!(state.redirect_to, None);
        assert_eq!(state.redirect_from, None);
    }

    #[test]
    fn test_multi_hop_collapses_to_one() {
        let tree = route("/", "root").with_children([
            redirect("/a", "/b"),
            redirect("/b", "/c"),
            route("/c", "c"),
        ]);
        let state = parse(&tree, "/a").unwrap().unwrap();
        assert_eq!(state.redirect_from.as_deref(), Some("/a"));
        assert_eq!(state.redirect_to.as_deref(), Some("/c"));
    }

    #[test]
    fn test_cycle_detected() {
        let tree = route("/", "root").with_children([redirect("/a", "/b"), redirect("/b", "/a")]);
        let err = parse(&tree, "/a").unwrap_err();
        assert_eq!(
            err,
            RouterError::RedirectCycle {
                from: "/a".to_string(),
                chain: vec!["/a".to_string(), "/b".to_string(), "/a".to_string()],
            }
        );
    }

    #[test]
    fn test_self_redirect_is_cycle() {
        let tree = redirect("/loop", "/loop/");
        assert!(matches!(
            parse(&tree, "/loop"),
            Err(RouterError::RedirectCycle { .. })
        ));
    }

    #[test]
    fn test_limit_enforced() {
        let tree = route("/", "root").with_children([
            redirect("/1", "/2"),
            redirect("/2", "/3"),
            redirect("/3", "/4"),
            route("/4", "four"),
        ]);
        let config = RouterConfig::default().with_max_redirects(2);
        let recognizer = Recognizer::with_config(&tree, config).unwrap();
        assert_eq!(
            recognizer.resolve("/1").unwrap_err(),
            RouterError::RedirectLimit {
                from: "/1".to_string(),
                limit: 2,
            }
        );
        assert!(recognizer.resolve("/2").unwrap().is_some());
    }

    #[test]
    fn test_zero_limit_disables_redirects() {
        let tree = route("/", "root").with_children([redirect("/", "/home"), route("/home", "home")]);
        let recognizer = Recognizer::with_config(&tree, RouterConfig::default().with_max_redirects(0)).unwrap();
        assert!(recognizer.resolve("/").is_err());
        assert!(recognizer.resolve("/home").unwrap().is_some());
    }

    #[test]
    fn test_unrecognized_redirect_target() {
        let tree = route("/", "root").with_children([redirect("/old", "/gone")]);
        assert_eq!(parse(&tree, "/old").unwrap(), None);
    }

    #[test]
    fn test_query_of_redirecting_path_dropped() {
        let tree = route("/", "root").with_children([redirect("/old", "/new"), route("/new", "new")]);
        let state = parse(&tree, "/old?keep=no").unwrap().unwrap();
        assert!(state.query_params.is_empty());
        assert_eq!(state.redirect_from.as_deref(), Some("/old?keep=no"));
    }

    #[test]
    fn test_redirect_target_query_kept() {
        let tree = route("/", "root").with_children([redirect("/old", "/new?from=old"), route("/new", "new")]);
        let state = parse(&tree, "/old").unwrap().unwrap();
        assert_eq!(state.query_params["from"].as_str(), Some("old"));
        assert_eq!(state.redirect_to.as_deref(), Some("/new?from=old"));
    }

    #[test]
    fn test_invalid_tree_fails_to_build() {
        let tree = route("/", "root").with_children([route("/files/*", "files")]);
        assert!(matches!(
            build_recognizer(&tree),
            Err(RouterError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_descriptions_in_registration_order() {
        let tree = route("/", "root").with_children([route("/b", "b"), route("/a", "a")]);
        let recognizer = build_recognizer(&tree).unwrap();
        let patterns: Vec<String> = recognizer.descriptions().iter().map(Description::pattern).collect();
        assert_eq!(patterns, vec!["//b", "//a"]);
    }
}

/// Nested application state built from a recognized handler chain
///
/// A [`State`] is a typed tree of [`StateLevel`]s, one per named handler from
/// the root to the leaf. It serializes to the nested mapping consumers read:
///
/// ```text
/// { "root": { "user": { "id": "123", "profile": {} } }, "queryParams": {} }
/// ```

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::matcher::{Params, RecognizedSegment};
use crate::path::{QueryParams, QueryValue};
use crate::route::Handler;

/// One named level of the state tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateLevel {
    pub name: String,
    pub params: Params,
    pub child: Option<Box<StateLevel>>,
}

impl StateLevel {
    pub fn new(name: impl Into<String>, params: Params) -> Self {
        Self {
            name: name.into(),
            params,
            child: None,
        }
    }

    pub fn with_child(mut self, child: StateLevel) -> Self {
        self.child = Some(Box::new(child));
        self
    }

    /// This level followed by every descendant, root first
    pub fn levels(&self) -> impl Iterator<Item = &StateLevel> {
        std::iter::successors(Some(self), |level| level.child.as_deref())
    }

    /// Route names from this level down to the leaf
    pub fn names(&self) -> Vec<&str> {
        self.levels().map(|level| level.name.as_str()).collect()
    }

    pub fn depth(&self) -> usize {
        self.levels().count()
    }

    pub fn leaf(&self) -> &StateLevel {
        self.levels().last().unwrap_or(self)
    }

    /// A child key shadows a param of the same name.
    pub fn to_json(&self) -> Value {
        let mut map: Map<String, Value> = self
            .params
            .iter()
            .map(|(key, value)| (key.clone(), Value::String(value.clone())))
            .collect();
        if let Some(child) = &self.child {
            map.insert(child.name.clone(), child.to_json());
        }
        Value::Object(map)
    }
}

/// Complete result of resolving a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    /// Root level of the matched chain
    pub route: StateLevel,
    /// Query params of the path the state was recognized from
    pub query_params: QueryParams,
    /// Path the terminal state was recognized from, set only after a redirect
    pub redirect_to: Option<String>,
    /// Path first asked for, set only after a redirect
    pub redirect_from: Option<String>,
}

impl State {
    pub fn new(route: StateLevel, query_params: QueryParams) -> Self {
        Self {
            route,
            query_params,
            redirect_to: None,
            redirect_from: None,
        }
    }

    pub fn with_redirect(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.redirect_from = Some(from.into());
        self.redirect_to = Some(to.into());
        self
    }

    pub fn names(&self) -> Vec<&str> {
        self.route.names()
    }

    /// Finds the level for a route name
    pub fn level(&self, name: &str) -> Option<&StateLevel> {
        self.route.levels().find(|level| level.name == name)
    }

    pub fn is_redirected(&self) -> bool {
        self.redirect_from.is_some()
    }

    /// Builds the nested mapping representation
    ///
    /// Keys keep insertion order: the route name, `queryParams`, then the
    /// redirect fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use statepath_router::{State, StateLevel};
    ///
    /// let state = State::new(
    ///     StateLevel::new("root", Default::default()).with_child(StateLevel::new("login", Default::default())),
    ///     Default::default(),
    /// )
    /// .with_redirect("/", "/login");
    ///
    /// assert_eq!(
    ///     state.to_json(),
    ///     serde_json::json!({
    ///         "root": { "login": {} },
    ///         "queryParams": {},
    ///         "redirectTo": "/login",
    ///         "redirectFrom": "/"
    ///     })
    /// );
    /// ```
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert(self.route.name.clone(), self.route.to_json());
        map.insert("queryParams".to_string(), query_json(&self.query_params));
        if let Some(to) = &self.redirect_to {
            map.insert("redirectTo".to_string(), Value::String(to.clone()));
        }
        if let Some(from) = &self.redirect_from {
            map.insert("redirectFrom".to_string(), Value::String(from.clone()));
        }
        Value::Object(map)
    }
}

impl Serialize for State {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl Serialize for StateLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

fn query_json(query_params: &QueryParams) -> Value {
    let map = query_params
        .iter()
        .map(|(key, value)| {
            let value = match value {
                QueryValue::Single(single) => Value::String(single.clone()),
                QueryValue::List(list) => list.iter().cloned().map(Value::String).collect(),
            };
            (key.clone(), value)
        })
        .collect();
    Value::Object(map)
}

/// What a handler chain amounts to before redirects are followed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartialState {
    /// The chain ends in named routes
    Level(StateLevel),
    /// The chain ends in a redirect marker to this path
    Redirect(String),
}

/// Turns a recognized handler chain into a partial state
///
/// Each named handler opens a level holding its own params. A chain ending in
/// a redirect yields [`PartialState::Redirect`]; an empty chain yields `None`.
///
/// # Examples
///
/// ```
/// use statepath_router::{build_state, Handler, PartialState, RecognizedSegment};
///
/// let chain = vec![
///     RecognizedSegment { handler: Handler::Normal { name: "root".into() }, params: Default::default() },
///     RecognizedSegment { handler: Handler::Redirect { target_path: "/login".into() }, params: Default::default() },
/// ];
/// assert_eq!(build_state(&chain), Some(PartialState::Redirect("/login".to_string())));
/// assert_eq!(build_state(&[]), None);
/// ```
pub fn build_state(segments: &[RecognizedSegment]) -> Option<PartialState> {
    let leaf = segments.last()?;
    if let Handler::Redirect { target_path } = &leaf.handler {
        return Some(PartialState::Redirect(target_path.clone()));
    }

    segments
        .iter()
        .rev()
        .fold(None, |child: Option<StateLevel>, segment| match &segment.handler {
            Handler::Normal { name } => Some(StateLevel {
                name: name.clone(),
                params: segment.params.clone(),
                child: child.map(Box::new),
            }),
            Handler::Redirect { .. } => child,
        })
        .map(PartialState::Level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn named(name: &str, params: &[(&str, &str)]) -> RecognizedSegment {
        RecognizedSegment {
            handler: Handler::Normal {
                name: name.to_string(),
            },
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    fn level_of(partial: Option<PartialState>) -> StateLevel {
        match partial {
            Some(PartialState::Level(level)) => level,
            other => panic!("expected a level, got {:?}", other),
        }
    }

    #[test]
    fn test_single_level() {
        let level = level_of(build_state(&[named("login", &[])]));
        assert_eq!(level, StateLevel::new("login", Params::new()));
        assert_eq!(level.to_json(), json!({}));
    }

    #[test]
    fn test_nested_levels_keep_own_params() {
        let level = level_of(build_state(&[
            named("root", &[]),
            named("user", &[("id", "123")]),
            named("profile", &[]),
        ]));
        assert_eq!(level.names(), vec!["root", "user", "profile"]);
        assert_eq!(level.depth(), 3);
        assert_eq!(
            level.to_json(),
            json!({ "user": { "id": "123", "profile": {} } })
        );
        assert_eq!(level.leaf().name, "profile");
    }

    #[test]
    fn test_redirect_leaf() {
        let chain = [
            named("root", &[]),
            RecognizedSegment {
                handler: Handler::Redirect {
                    target_path: "/sign-up".to_string(),
                },
                params: Params::new(),
            },
        ];
        assert_eq!(
            build_state(&chain),
            Some(PartialState::Redirect("/sign-up".to_string()))
        );
    }

    #[test]
    fn test_empty_chain() {
        assert_eq!(build_state(&[]), None);
    }

    #[test]
    fn test_child_shadows_param_of_same_name() {
        let level = level_of(build_state(&[named("root", &[("user", "x")]), named("user", &[])]));
        assert_eq!(level.to_json(), json!({ "user": {} }));
    }

    #[test]
    fn test_state_json_shape() {
        let mut query = QueryParams::new();
        query.insert("q".to_string(), QueryValue::from("456"));
        query.insert(
            "tag".to_string(),
            QueryValue::List(vec!["a".to_string(), "b".to_string()]),
        );
        let route = level_of(build_state(&[named("root", &[]), named("login", &[])]));
        let state = State::new(route, query);

        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            json!({
                "root": { "login": {} },
                "queryParams": { "q": "456", "tag": ["a", "b"] }
            })
        );
        assert!(!state.is_redirected());
        assert_eq!(state.level("login").map(StateLevel::depth), Some(1));
        assert!(state.level("user").is_none());
    }

    #[test]
    fn test_json_keys_in_insertion_order() {
        let mut query = QueryParams::new();
        query.insert("zq".to_string(), QueryValue::from("1"));
        query.insert("aq".to_string(), QueryValue::from("2"));
        let route = level_of(build_state(&[named("root", &[]), named("pair", &[("zeta", "z"), ("alpha", "a")])]));
        let state = State::new(route, query).with_redirect("/old", "/z/a");

        assert_eq!(
            serde_json::to_string(&state).unwrap(),
            r#"{"root":{"pair":{"zeta":"z","alpha":"a"}},"queryParams":{"zq":"1","aq":"2"},"redirectTo":"/z/a","redirectFrom":"/old"}"#
        );
    }
}

/// Route tree declaration
///
/// A tree is built once from [`route`] and [`redirect`] nodes and never
/// mutated afterwards. Nothing here validates path syntax or name collisions;
/// malformed fragments surface when the tree is registered with a matcher.

use serde::{Deserialize, Serialize};

/// One level of a route hierarchy
///
/// Deserializes from TOML/JSON: a node with `name` is a route, a node with
/// `redirect` is a redirect.
///
/// ```
/// use statepath_router::RouteDefinition;
///
/// let node: RouteDefinition = serde_json::from_str(
///     r#"{ "path": "/", "redirect": "/sign-up" }"#
/// ).unwrap();
/// assert!(node.is_redirect());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RouteDefinition {
    /// A named route; `path` is relative to the parent route
    Route {
        path: String,
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        children: Option<Vec<RouteDefinition>>,
    },
    /// A leaf that re-resolves `target_path` instead of producing a state level
    Redirect {
        path: String,
        #[serde(rename = "redirect")]
        target_path: String,
    },
}

/// Defines a named route without children
///
/// # Examples
///
/// ```
/// use statepath_router::{route, redirect};
///
/// let tree = route("/", "root").with_children([
///     redirect("/", "/login"),
///     route("/login", "login"),
///     route("/user/:id", "user").with_children([route("/profile", "profile")]),
/// ]);
/// assert_eq!(tree.children().len(), 3);
/// ```
pub fn route(path: impl Into<String>, name: impl Into<String>) -> RouteDefinition {
    RouteDefinition::Route {
        path: path.into(),
        name: name.into(),
        children: None,
    }
}

/// Defines a redirect from `path` to the absolute `target_path`
pub fn redirect(path: impl Into<String>, target_path: impl Into<String>) -> RouteDefinition {
    RouteDefinition::Redirect {
        path: path.into(),
        target_path: target_path.into(),
    }
}

impl RouteDefinition {
    /// Same as the free function [`route`]
    pub fn route(path: impl Into<String>, name: impl Into<String>) -> Self {
        route(path, name)
    }

    /// Same as the free function [`redirect`]
    pub fn redirect(path: impl Into<String>, target_path: impl Into<String>) -> Self {
        redirect(path, target_path)
    }

    /// Replaces the children of a named route
    ///
    /// Redirects are leaves; calling this on one returns it unchanged.
    pub fn with_children<I>(self, new_children: I) -> Self
    where
        I: IntoIterator<Item = RouteDefinition>,
    {
        match self {
            RouteDefinition::Route { path, name, .. } => RouteDefinition::Route {
                path,
                name,
                children: Some(new_children.into_iter().collect()),
            },
            redirect @ RouteDefinition::Redirect { .. } => redirect,
        }
    }

    /// Path fragment relative to the parent
    pub fn path(&self) -> &str {
        match self {
            RouteDefinition::Route { path, .. } | RouteDefinition::Redirect { path, .. } => path,
        }
    }

    /// Route name, `None` for redirects
    pub fn name(&self) -> Option<&str> {
        match self {
            RouteDefinition::Route { name, .. } => Some(name),
            RouteDefinition::Redirect { .. } => None,
        }
    }

    /// Redirect target, `None` for named routes
    pub fn target_path(&self) -> Option<&str> {
        match self {
            RouteDefinition::Redirect { target_path, .. } => Some(target_path),
            RouteDefinition::Route { .. } => None,
        }
    }

    /// Children in declaration order (empty for leaves and redirects)
    pub fn children(&self) -> &[RouteDefinition] {
        match self {
            RouteDefinition::Route {
                children: Some(children),
                ..
            } => children,
            _ => &[],
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, RouteDefinition::Redirect { .. })
    }

    /// Whether this node has no children to descend into
    pub fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }
}

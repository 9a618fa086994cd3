/// Flattening of a route tree into root-to-leaf chains
///
/// Every leaf of the tree yields one [`Description`]: the ordered list of
/// `(path, handler)` pairs from the root down to that leaf. Descriptions come
/// out in declaration order, which the matcher later uses as its tie-break.

use super::definition::RouteDefinition;

/// What a matched level of a description stands for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handler {
    /// A named route level
    Normal { name: String },
    /// A redirect marker carrying the path to resolve instead
    Redirect { target_path: String },
}

impl Handler {
    fn for_node(node: &RouteDefinition) -> Self {
        match node {
            RouteDefinition::Route { name, .. } => Handler::Normal { name: name.clone() },
            RouteDefinition::Redirect { target_path, .. } => Handler::Redirect {
                target_path: target_path.clone(),
            },
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Handler::Normal { name } => Some(name),
            Handler::Redirect { .. } => None,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Handler::Redirect { .. })
    }
}

/// One `(path, handler)` pair of a description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionPart {
    pub path: String,
    pub handler: Handler,
}

/// A root-to-leaf chain of the route tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    parts: Vec<DescriptionPart>,
}

impl Description {
    fn leaf(node: &RouteDefinition) -> Self {
        Self {
            parts: vec![DescriptionPart {
                path: node.path().to_string(),
                handler: Handler::for_node(node),
            }],
        }
    }

    fn prepend(mut self, part: DescriptionPart) -> Self {
        self.parts.insert(0, part);
        self
    }

    pub fn parts(&self) -> &[DescriptionPart] {
        &self.parts
    }

    pub fn handlers(&self) -> impl Iterator<Item = &Handler> {
        self.parts.iter().map(|part| &part.handler)
    }

    /// The handler of the leaf this chain ends in
    pub fn leaf_handler(&self) -> &Handler {
        // A description always holds at least the node it was built from
        &self.parts[self.parts.len() - 1].handler
    }

    /// Concatenation of every part's path, e.g. `"/" + "/user/:id" + "/"`
    ///
    /// No normalization happens here; the matcher owns that.
    pub fn pattern(&self) -> String {
        self.parts.iter().map(|part| part.path.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// Expands a route tree into one description per leaf
///
/// A leaf (no children, empty children, or a redirect) yields a single
/// one-part description. An internal node yields `[node] + d` for every
/// description `d` of every child, children in declaration order.
///
/// # Examples
///
/// ```
/// use statepath_router::{flatten, redirect, route};
///
/// let tree = route("/", "root").with_children([
///     redirect("/", "/login"),
///     route("/login", "login"),
/// ]);
///
/// let patterns: Vec<String> = flatten(&tree).iter().map(|d| d.pattern()).collect();
/// assert_eq!(patterns, vec!["//", "//login"]);
/// ```
pub fn flatten(node: &RouteDefinition) -> Vec<Description> {
    if node.is_leaf() {
        return vec![Description::leaf(node)];
    }

    let current = DescriptionPart {
        path: node.path().to_string(),
        handler: Handler::for_node(node),
    };

    node.children()
        .iter()
        .flat_map(flatten)
        .map(|description| description.prepend(current.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::definition::{redirect, route};

    fn normal(name: &str) -> Handler {
        Handler::Normal {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_flatten_leaf() {
        let descriptions = flatten(&route("/login", "login"));
        assert_eq!(descriptions.len(), 1);
        assert_eq!(
            descriptions[0].parts(),
            &[DescriptionPart {
                path: "/login".to_string(),
                handler: normal("login"),
            }]
        );
    }

    #[test]
    fn test_flatten_redirect_leaf() {
        let descriptions = flatten(&redirect("/old", "/new"));
        assert_eq!(descriptions.len(), 1);
        assert_eq!(
            descriptions[0].leaf_handler(),
            &Handler::Redirect {
                target_path: "/new".to_string()
            }
        );
    }

    #[test]
    fn test_flatten_empty_children_is_leaf() {
        let descriptions = flatten(&route("/", "root").with_children(Vec::new()));
        assert_eq!(descriptions.len(), 1);
        assert_eq!(descriptions[0].len(), 1);
    }

    #[test]
    fn test_flatten_nested_in_declaration_order() {
        let tree = route("/", "root").with_children([
            redirect("/", "/sign-up"),
            route("/login", "login"),
            route("/user/:id", "user")
                .with_children([route("/", "index"), route("/profile", "profile")]),
        ]);

        let descriptions = flatten(&tree);
        let patterns: Vec<String> = descriptions.iter().map(Description::pattern).collect();
        assert_eq!(
            patterns,
            vec!["//", "//login", "//user/:id/", "//user/:id/profile"]
        );

        let chains: Vec<Vec<Option<&str>>> = descriptions
            .iter()
            .map(|d| d.handlers().map(Handler::name).collect())
            .collect();
        assert_eq!(
            chains,
            vec![
                vec![Some("root"), None],
                vec![Some("root"), Some("login")],
                vec![Some("root"), Some("user"), Some("index")],
                vec![Some("root"), Some("user"), Some("profile")],
            ]
        );
    }

    #[test]
    fn test_one_description_per_leaf() {
        let tree = route("/a", "a").with_children([
            route("/b", "b").with_children([route("/c", "c"), route("/d", "d")]),
            route("/e", "e").with_children([route("/f", "f")]),
            redirect("/g", "/a/e/f"),
        ]);
        let descriptions = flatten(&tree);
        assert_eq!(descriptions.len(), 4);
        assert!(descriptions.iter().all(|d| d.parts()[0].handler == normal("a")));
        assert_eq!(descriptions[3].pattern(), "/a/g");
    }
}

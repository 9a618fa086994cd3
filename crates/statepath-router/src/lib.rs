//! # statepath router
//!
//! Recognizes URL paths against a declared, hierarchical route tree and turns
//! them into nested application state:
//! - Static segments (`/login`)
//! - Named parameters (`/user/:id`)
//! - Wildcards spanning one or more segments (`/about/*path`)
//! - Query strings, including list keys (`?tag[]=a&tag[]=b`)
//! - Redirect leaves, followed in a bounded loop
//! - History-driven navigation with pop notifications
//!
//! ## How a path becomes state
//!
//! 1. The tree is flattened into one root-to-leaf [`Description`] per leaf.
//! 2. Each description is registered, in declaration order, with a [`PathMatcher`].
//! 3. A path is recognized into a handler chain; each handler keeps the params
//!    its own fragment captured.
//! 4. The chain becomes a nested [`State`], or a redirect to re-resolve.
//!
//! Among matching candidates the more specific pattern wins (no wildcard over
//! wildcard, static over dynamic); equally specific patterns go to the one
//! declared first.
//!
//! ## Path Normalization
//!
//! Fragments and incoming paths are normalized before matching:
//! - Trailing slashes: `/path/` → `/path`
//! - Double slashes: `/path//to` → `/path/to`
//! - Backslashes: `\path\to` → `/path/to`
//!
//! ## Example
//!
//! ```
//! use statepath_router::{build_recognizer, redirect, route};
//!
//! let tree = route("/", "root").with_children([
//!     redirect("/", "/login"),
//!     route("/login", "login"),
//!     route("/user/:id", "user").with_children([
//!         route("/", "index"),
//!         route("/profile", "profile"),
//!     ]),
//! ]);
//! let recognizer = build_recognizer(&tree).unwrap();
//!
//! let state = recognizer.resolve("/user/123/profile?q=456").unwrap().unwrap();
//! assert_eq!(
//!     serde_json::to_value(&state).unwrap(),
//!     serde_json::json!({
//!         "root": { "user": { "id": "123", "profile": {} } },
//!         "queryParams": { "q": "456" }
//!     })
//! );
//!
//! assert!(recognizer.resolve("/undefined").unwrap().is_none());
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
mod error;
pub mod matcher;
pub mod navigation;
pub mod path;
pub mod recognizer;
pub mod route;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::RouterConfig;
pub use error::RouterError;
pub use matcher::{Params, PathMatcher, Recognition, RecognizedSegment, SegmentMatcher};
pub use navigation::{
    Action, History, HistoryMode, Location, MemoryHistory, NavigationController, NavigationEvent,
};
pub use path::{is_valid_path, normalize_path, parse_query_string, QueryParams, QueryValue};
pub use recognizer::{build_recognizer, parse, resolve, Recognizer};
pub use route::{flatten, redirect, route, Description, DescriptionPart, Handler, RouteDefinition};
pub use state::{build_state, PartialState, State, StateLevel};

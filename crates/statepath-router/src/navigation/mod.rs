/// Navigation controller binding a recognizer to a history source
///
/// The controller owns the current [`State`]. Every history event it applies
/// recomputes that state; only pop events (back/forward) are reported to the
/// `on_pop` callback, since pushes and replaces originate from the caller who
/// already receives the new state as a return value.

use crate::matcher::{PathMatcher, SegmentMatcher};
use crate::recognizer::{build_recognizer, Recognizer};
use crate::route::RouteDefinition;
use crate::state::State;
use crate::RouterError;

pub mod history;
pub use history::{Action, History, HistoryMode, Location, MemoryHistory, NavigationEvent};

/// Keeps the current state in step with a [`History`]
///
/// # Examples
///
/// ```
/// use statepath_router::{route, MemoryHistory, NavigationController, State};
///
/// let tree = route("/", "root").with_children([route("/a", "a"), route("/b", "b")]);
/// let mut pops = 0;
/// let mut controller =
///     NavigationController::start(&tree, MemoryHistory::new("/a"), |_: Option<&State>| pops += 1).unwrap();
///
/// controller.navigate("/b").unwrap();
/// let back = controller.back().unwrap().unwrap();
/// assert_eq!(back.names(), vec!["root", "a"]);
/// drop(controller);
/// assert_eq!(pops, 1);
/// ```
pub struct NavigationController<H, F, M = SegmentMatcher>
where
    H: History,
    F: FnMut(Option<&State>),
    M: PathMatcher,
{
    recognizer: Recognizer<M>,
    history: H,
    on_pop: F,
    current: Option<State>,
}

impl<H, F> NavigationController<H, F, SegmentMatcher>
where
    H: History,
    F: FnMut(Option<&State>),
{
    /// Builds the recognizer and applies the history's current location
    ///
    /// The initial location never invokes `on_pop`.
    pub fn start(definition: &RouteDefinition, history: H, on_pop: F) -> Result<Self, RouterError> {
        Self::with_recognizer(build_recognizer(definition)?, history, on_pop)
    }
}

impl<H, F, M> NavigationController<H, F, M>
where
    H: History,
    F: FnMut(Option<&State>),
    M: PathMatcher,
{
    /// Same as [`start`](NavigationController::start) with a prebuilt recognizer
    pub fn with_recognizer(recognizer: Recognizer<M>, history: H, on_pop: F) -> Result<Self, RouterError> {
        let initial = history.location().path();
        let current = recognizer.resolve(&initial)?;
        tracing::debug!(location = %initial, recognized = current.is_some(), "navigation started");

        Ok(Self {
            recognizer,
            history,
            on_pop,
            current,
        })
    }

    /// Current state; `None` when the current location is not recognized
    pub fn current(&self) -> Option<&State> {
        self.current.as_ref()
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn recognizer(&self) -> &Recognizer<M> {
        &self.recognizer
    }

    /// Pushes `path` and returns the state it resolves to
    ///
    /// `path` is resolved before the push, so on error neither the history
    /// nor the current state changes.
    pub fn navigate(&mut self, path: &str) -> Result<Option<&State>, RouterError> {
        let state = self.recognizer.resolve(&Location::parse(path).path())?;
        let event = self.history.push(path);
        Ok(self.commit(event, state))
    }

    /// Replaces the current entry with `path` and returns the state it resolves to
    ///
    /// On error the entry is not replaced.
    pub fn replace(&mut self, path: &str) -> Result<Option<&State>, RouterError> {
        let state = self.recognizer.resolve(&Location::parse(path).path())?;
        let event = self.history.replace(path);
        Ok(self.commit(event, state))
    }

    pub fn back(&mut self) -> Result<Option<&State>, RouterError> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Result<Option<&State>, RouterError> {
        self.go(1)
    }

    /// Moves through the history; nothing changes when the move is out of range
    ///
    /// When the entry moved to fails to resolve, the history moves back by
    /// `-delta` and `on_pop` is not called.
    pub fn go(&mut self, delta: isize) -> Result<Option<&State>, RouterError> {
        let Some(event) = self.history.go(delta) else {
            tracing::debug!(delta, "history move out of range");
            return Ok(self.current.as_ref());
        };

        match self.recognizer.resolve(&event.location.path()) {
            Ok(state) => Ok(self.commit(event, state)),
            Err(err) => {
                self.history.go(-delta);
                Err(err)
            }
        }
    }

    /// Applies an event produced by the history source
    ///
    /// The history already moved, so on error only the current state is left
    /// as it was.
    pub fn handle_event(&mut self, event: NavigationEvent) -> Result<Option<&State>, RouterError> {
        let state = self.recognizer.resolve(&event.location.path())?;
        Ok(self.commit(event, state))
    }

    fn commit(&mut self, event: NavigationEvent, state: Option<State>) -> Option<&State> {
        self.current = state;
        tracing::debug!(location = %event.location, action = ?event.action, recognized = self.current.is_some(), "navigation applied");

        if event.action == Action::Pop {
            (self.on_pop)(self.current.as_ref());
        }
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::{redirect, route};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    fn tree() -> RouteDefinition {
        route("/", "root").with_children([
            redirect("/", "/home"),
            route("/home", "home"),
            route("/user/:id", "user"),
            redirect("/loop", "/loop"),
        ])
    }

    #[test]
    fn test_initial_state_without_pop() {
        let pops = RefCell::new(0);
        let controller =
            NavigationController::start(&tree(), MemoryHistory::default(), |_: Option<&State>| *pops.borrow_mut() += 1).unwrap();
        let state = controller.current().unwrap();
        assert_eq!(state.names(), vec!["root", "home"]);
        assert_eq!(state.redirect_from.as_deref(), Some("/"));
        assert_eq!(*pops.borrow(), 0);
    }

    #[test]
    fn test_replace_does_not_pop() {
        let pops = RefCell::new(0);
        let mut controller =
            NavigationController::start(&tree(), MemoryHistory::new("/home"), |_: Option<&State>| *pops.borrow_mut() += 1).unwrap();
        let state = controller.replace("/user/3").unwrap().unwrap();
        assert_eq!(state.route.child.as_ref().map(|user| user.params["id"].as_str()), Some("3"));
        assert_eq!(controller.history().len(), 1);
        assert_eq!(*pops.borrow(), 0);
    }

    #[test]
    fn test_error_keeps_current_state() {
        let mut controller = NavigationController::start(&tree(), MemoryHistory::new("/home"), |_: Option<&State>| {}).unwrap();
        let before = controller.current().cloned();
        assert!(matches!(
            controller.navigate("/loop"),
            Err(RouterError::RedirectCycle { .. })
        ));
        assert_eq!(controller.current().cloned(), before);
    }

    #[test]
    fn test_failed_navigate_leaves_history_alone() {
        let mut controller = NavigationController::start(&tree(), MemoryHistory::new("/home"), |_: Option<&State>| {}).unwrap();
        assert!(controller.navigate("/loop").is_err());
        assert_eq!(controller.history().location().path(), "/home");
        assert_eq!(controller.history().len(), 1);

        assert!(controller.replace("/loop").is_err());
        assert_eq!(controller.history().location().path(), "/home");
        assert_eq!(controller.current().map(State::names), Some(vec!["root", "home"]));
    }

    #[test]
    fn test_failed_pop_moves_history_back() {
        let pops = RefCell::new(0);
        let history = MemoryHistory::with_entries(["/loop", "/home"], 1);
        let mut controller =
            NavigationController::start(&tree(), history, |_: Option<&State>| *pops.borrow_mut() += 1).unwrap();

        assert!(matches!(controller.back(), Err(RouterError::RedirectCycle { .. })));
        assert_eq!(controller.history().index(), 1);
        assert_eq!(controller.history().location().path(), "/home");
        assert_eq!(controller.current().map(State::names), Some(vec!["root", "home"]));
        assert_eq!(*pops.borrow(), 0);
    }

    #[test]
    fn test_out_of_range_go_keeps_state() {
        let mut seen = Vec::new();
        let mut controller =
            NavigationController::start(&tree(), MemoryHistory::new("/home"), |state: Option<&State>| {
                seen.push(state.map(|s| s.names().join("/")))
            })
            .unwrap();
        assert!(controller.forward().unwrap().is_some());
        assert!(controller.back().unwrap().is_some());
        drop(controller);
        assert!(seen.is_empty());
    }

    #[test]
    fn test_unrecognized_location_clears_state() {
        let mut controller = NavigationController::start(&tree(), MemoryHistory::new("/home"), |_: Option<&State>| {}).unwrap();
        assert_eq!(controller.navigate("/nowhere").unwrap(), None);
        assert_eq!(controller.current(), None);
    }

    #[test]
    fn test_external_pop_event_notifies() {
        let seen = RefCell::new(Vec::new());
        let mut controller = NavigationController::start(&tree(), MemoryHistory::new("/home"), |state: Option<&State>| {
            seen.borrow_mut().push(state.map(|s| s.names().join("/")))
        })
        .unwrap();
        controller
            .handle_event(NavigationEvent {
                location: Location::parse("/user/9"),
                action: Action::Pop,
            })
            .unwrap();
        drop(controller);
        assert_eq!(seen.into_inner(), vec![Some("root/user".to_string())]);
    }
}

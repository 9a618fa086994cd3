/// History sources and the locations they report
///
/// A [`History`] owns a stack of locations and reports every change as a
/// [`NavigationEvent`]. [`MemoryHistory`] keeps its stack in memory, which is
/// all a command-line or server-side consumer needs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a full URL is mapped to a location
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// Pathname and search of the URL
    #[default]
    Browser,
    /// Whatever follows `#`
    Hash,
}

/// Kind of history change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Push,
    Pop,
    Replace,
}

/// Pathname plus search string (`?...`, empty when absent)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub pathname: String,
    pub search: String,
}

impl Location {
    /// Splits a path such as `/user/1?tab=bio#top`; the fragment is dropped
    pub fn parse(path: &str) -> Self {
        let path = path.split_once('#').map_or(path, |(before, _)| before);
        let (pathname, search) = match path.split_once('?') {
            Some((pathname, query)) if !query.is_empty() => (pathname, format!("?{}", query)),
            Some((pathname, _)) => (pathname, String::new()),
            None => (path, String::new()),
        };

        Self {
            pathname: if pathname.starts_with('/') {
                pathname.to_string()
            } else {
                format!("/{}", pathname)
            },
            search,
        }
    }

    /// Derives the location from a full URL
    ///
    /// # Examples
    ///
    /// ```
    /// use statepath_router::{HistoryMode, Location};
    ///
    /// let browser = Location::from_href("https://app.test/user/1?tab=bio", HistoryMode::Browser);
    /// assert_eq!(browser.path(), "/user/1?tab=bio");
    ///
    /// let hash = Location::from_href("https://app.test/index.html#/user/1", HistoryMode::Hash);
    /// assert_eq!(hash.path(), "/user/1");
    /// ```
    pub fn from_href(href: &str, mode: HistoryMode) -> Self {
        match mode {
            HistoryMode::Browser => {
                let without_origin = match href.split_once("://") {
                    // The authority ends at the first `/`, `?` or `#`
                    Some((_, rest)) => rest.find(['/', '?', '#']).map_or("/", |end| &rest[end..]),
                    None => href,
                };
                Self::parse(without_origin)
            }
            HistoryMode::Hash => Self::parse(href.split_once('#').map_or("/", |(_, hash)| hash)),
        }
    }

    /// `pathname + search`, the string handed to the recognizer
    pub fn path(&self) -> String {
        format!("{}{}", self.pathname, self.search)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pathname, self.search)
    }
}

/// A change reported by a history source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEvent {
    pub location: Location,
    pub action: Action,
}

/// Source of locations and navigation events
pub trait History {
    /// Location of the current entry
    fn location(&self) -> &Location;

    /// Adds an entry after the current one, dropping any forward entries
    fn push(&mut self, path: &str) -> NavigationEvent;

    /// Overwrites the current entry
    fn replace(&mut self, path: &str) -> NavigationEvent;

    /// Moves `delta` entries; `None` when that leaves the stack or `delta` is 0
    fn go(&mut self, delta: isize) -> Option<NavigationEvent>;
}

/// In-memory entry stack with a cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<Location>,
    index: usize,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl MemoryHistory {
    /// Starts with a single entry
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![Location::parse(initial)],
            index: 0,
        }
    }

    /// Starts from a full URL interpreted with `mode`
    pub fn from_href(href: &str, mode: HistoryMode) -> Self {
        Self {
            entries: vec![Location::from_href(href, mode)],
            index: 0,
        }
    }

    /// Starts with several entries, the cursor clamped to the last one
    pub fn with_entries<'a, I>(paths: I, index: usize) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let entries: Vec<Location> = paths.into_iter().map(Location::parse).collect();
        if entries.is_empty() {
            return Self::default();
        }
        let index = index.min(entries.len() - 1);
        Self { entries, index }
    }

    pub fn entries(&self) -> &[Location] {
        &self.entries
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_go(&self, delta: isize) -> bool {
        self.target_index(delta).is_some()
    }

    fn target_index(&self, delta: isize) -> Option<usize> {
        if delta == 0 {
            return None;
        }
        self.index
            .checked_add_signed(delta)
            .filter(|&index| index < self.entries.len())
    }

    fn event(&self, action: Action) -> NavigationEvent {
        NavigationEvent {
            location: self.entries[self.index].clone(),
            action,
        }
    }
}

impl History for MemoryHistory {
    fn location(&self) -> &Location {
        &self.entries[self.index]
    }

    fn push(&mut self, path: &str) -> NavigationEvent {
        self.entries.truncate(self.index + 1);
        self.entries.push(Location::parse(path));
        self.index = self.entries.len() - 1;
        self.event(Action::Push)
    }

    fn replace(&mut self, path: &str) -> NavigationEvent {
        self.entries[self.index] = Location::parse(path);
        self.event(Action::Replace)
    }

    fn go(&mut self, delta: isize) -> Option<NavigationEvent> {
        self.index = self.target_index(delta)?;
        Some(self.event(Action::Pop))
    }
}

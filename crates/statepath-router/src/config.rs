// File: src/config.rs
// Purpose: Router options, deserializable from the `[router]` table of statepath.toml

use serde::{Deserialize, Serialize};

use crate::navigation::HistoryMode;

/// Router configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Redirect hops allowed in one resolution (default: 25)
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,

    /// Whether static segments match case-insensitively (default: false)
    #[serde(default = "default_false")]
    pub case_insensitive: bool,

    /// How a full URL maps to a location (default: browser)
    #[serde(default)]
    pub history_mode: HistoryMode,
}

// Default values
fn default_max_redirects() -> usize {
    25
}

fn default_false() -> bool {
    false
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            max_redirects: default_max_redirects(),
            case_insensitive: false,
            history_mode: HistoryMode::default(),
        }
    }
}

impl RouterConfig {
    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    pub fn with_case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    pub fn with_history_mode(mut self, history_mode: HistoryMode) -> Self {
        self.history_mode = history_mode;
        self
    }
}

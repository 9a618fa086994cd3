use std::cell::Cell;
use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Result};
use colored::Colorize;
use serde_json::Value;
use statepath_router::{Location, MemoryHistory, NavigationController, State};

use super::{print_json, recognizer, state_json};
use crate::config::Config;

/// One navigation step given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Push(String),
    Replace(String),
    Back,
    Forward,
}

impl FromStr for Step {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "back" => Ok(Step::Back),
            "forward" => Ok(Step::Forward),
            _ => match s.split_once(':') {
                Some(("push", path)) if !path.is_empty() => Ok(Step::Push(path.to_string())),
                Some(("replace", path)) if !path.is_empty() => Ok(Step::Replace(path.to_string())),
                _ => bail!("invalid step `{}`: expected push:/path, replace:/path, back or forward", s),
            },
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Push(path) => write!(f, "push {}", path),
            Step::Replace(path) => write!(f, "replace {}", path),
            Step::Back => write!(f, "back"),
            Step::Forward => write!(f, "forward"),
        }
    }
}

/// State after one step, and whether the step fired a pop notification
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub label: String,
    pub state: Value,
    pub popped: bool,
}

pub fn execute(config: &Config, start: &str, steps: &[Step]) -> Result<()> {
    for outcome in replay(config, start, steps)? {
        let marker = if outcome.popped { " (popstate)".yellow() } else { "".normal() };
        println!("{}{}", outcome.label.cyan().bold(), marker);
        print_json(&outcome.state)?;
    }
    Ok(())
}

/// Starts a controller at `start` and applies `steps` in order
///
/// `start` is read as a full URL with the configured history mode.
pub fn replay(config: &Config, start: &str, steps: &[Step]) -> Result<Vec<Outcome>> {
    let pops = Cell::new(0usize);
    let history = MemoryHistory::new(&Location::from_href(start, config.router.history_mode).path());
    let mut controller = NavigationController::with_recognizer(recognizer(config)?, history, |_: Option<&State>| {
        pops.set(pops.get() + 1)
    })?;

    let mut outcomes = vec![Outcome {
        label: format!("start {}", start),
        state: state_json(controller.current()),
        popped: false,
    }];

    for step in steps {
        let before = pops.get();
        let state = match step {
            Step::Push(path) => controller.navigate(path)?,
            Step::Replace(path) => controller.replace(path)?,
            Step::Back => controller.back()?,
            Step::Forward => controller.forward()?,
        };
        let state = state_json(state);
        outcomes.push(Outcome {
            label: step.to_string(),
            state,
            popped: pops.get() > before,
        });
    }

    Ok(outcomes)
}

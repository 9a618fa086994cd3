pub mod navigate;
pub mod resolve;
pub mod routes;

use anyhow::{Context, Result};
use serde_json::Value;
use statepath_router::{Recognizer, State};

use crate::config::Config;

/// Registers the configured tree with the configured router options
pub fn recognizer(config: &Config) -> Result<Recognizer> {
    let routes = config.routes()?;
    Recognizer::with_config(routes, config.router.clone()).context("Failed to register route tree")
}

/// JSON for a resolution result, `null` when nothing matched
pub fn state_json(state: Option<&State>) -> Value {
    state.map_or(Value::Null, State::to_json)
}

pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

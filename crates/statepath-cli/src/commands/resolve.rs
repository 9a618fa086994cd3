use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::Value;
use statepath_router::Recognizer;

use super::{print_json, recognizer, state_json};
use crate::config::Config;

pub fn execute(config: &Config, paths: &[String]) -> Result<()> {
    let recognizer = recognizer(config)?;

    for path in paths {
        let value = resolve_path(&recognizer, path)?;
        if value.is_null() {
            println!("{} {}", path.cyan(), "no matching route".yellow());
            continue;
        }
        println!("{}", path.cyan().bold());
        print_json(&value)?;
    }

    Ok(())
}

/// Resolves one path into its JSON state
pub fn resolve_path(recognizer: &Recognizer, path: &str) -> Result<Value> {
    let state = recognizer
        .resolve(path)
        .with_context(|| format!("Failed to resolve {}", path))?;
    Ok(state_json(state.as_ref()))
}

use anyhow::Result;
use colored::Colorize;
use statepath_router::{normalize_path, Description, Handler};

use super::recognizer;
use crate::config::Config;

pub fn execute(config: &Config) -> Result<()> {
    let recognizer = recognizer(config)?;

    println!("{}", "Registered routes (in match priority order for ties):".green().bold());
    for description in recognizer.descriptions() {
        let (pattern, chain) = describe(description);
        println!("  {:<32} {}", pattern.cyan(), chain);
    }

    Ok(())
}

/// Normalized pattern and the handler chain, e.g. `root > user > profile`
pub fn describe(description: &Description) -> (String, String) {
    let pattern = normalize_path(&description.pattern()).into_owned();
    let chain = description
        .handlers()
        .map(|handler| match handler {
            Handler::Normal { name } => name.clone(),
            Handler::Redirect { target_path } => format!("=> {}", target_path),
        })
        .collect::<Vec<_>>()
        .join(" > ");
    (pattern, chain)
}

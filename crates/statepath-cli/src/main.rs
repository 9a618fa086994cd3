mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::navigate::Step;
use crate::config::Config;

#[derive(Parser)]
#[command(name = "statepath")]
#[command(version, about = "statepath CLI - resolve paths against a route tree into nested state", long_about = None)]
struct Cli {
    /// Config file declaring [router] options and the [routes] tree
    #[arg(short, long, global = true, default_value = "statepath.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve paths and print their state as JSON
    Resolve {
        /// Paths to resolve, e.g. /user/123/profile?q=456
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// List registered route chains
    Routes,

    /// Replay navigation steps against an in-memory history
    Navigate {
        /// Initial URL (read with the configured history mode)
        #[arg(short, long, default_value = "/")]
        start: String,

        /// Steps: push:/path, replace:/path, back, forward
        steps: Vec<Step>,
    },
}

fn main() -> Result<()> {
    // stdout carries only command output
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    // Parse CLI arguments
    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    // Execute command
    match cli.command {
        Commands::Resolve { paths } => {
            commands::resolve::execute(&config, &paths)?;
        }
        Commands::Routes => {
            commands::routes::execute(&config)?;
        }
        Commands::Navigate { start, steps } => {
            commands::navigate::execute(&config, &start, &steps)?;
        }
    }

    Ok(())
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// hover-sim: drive the hover-focus controllers against an in-memory host.
#[derive(Parser, Debug)]
#[command(name = "hover-sim", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. debug, hover_focus=trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a scenario file and print the resulting hook state.
    Replay {
        /// Scenario TOML file.
        scenario: PathBuf,
    },
    /// Run a scenario, then apply config file edits to every open editor
    /// until interrupted.
    Watch {
        /// Scenario TOML file.
        scenario: PathBuf,
    },
    /// Print the effective configuration as JSON.
    PrintConfig,
}

pub fn parse() -> Args {
    Args::parse()
}

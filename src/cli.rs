//! Command-line interface for strictly_games.

use clap::{Parser, Subcommand};

/// Strictly Games - console checkers with validated multi-jump captures
#[derive(Parser, Debug)]
#[command(name = "strictly_games")]
#[command(about = "Two-player console checkers", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file (defaults to ./checkers.toml when present)
    #[arg(short, long, env = "STRICTLY_CHECKERS_CONFIG")]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Command {
    /// Show the main menu (default)
    #[default]
    Menu,

    /// Start a game right away
    Play,

    /// Print the rules and exit
    Rules,
}

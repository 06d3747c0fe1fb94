//! Strictly Games - console checkers.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_games::{Cli, Command, Console, Settings};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let settings = Settings::load(cli.config.as_deref())?;
    let command = cli.command.unwrap_or_default();
    info!(?command, rules = ?settings.rules(), "Starting Strictly Games");

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let mut console = Console::new(stdin, stdout, settings);

    match command {
        Command::Menu => console.run_menu(),
        Command::Play => console.play().map(|_| ()),
        Command::Rules => console.instructions(),
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
#[instrument]
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,strictly_games=info,strictly_checkers=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

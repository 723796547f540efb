//! `wumpus` binary entry point.

use anyhow::Result;
use clap::Parser;
use wumpus_client::commands::{Check, Replay, Solve};
use wumpus_client::{ClientConfig, logging};

/// Autonomous Wumpus World agent
#[derive(Parser)]
#[command(name = "wumpus")]
#[command(about = "Solve Wumpus World caves from percepts alone", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Run the agent on a board and write its transcript
    Solve(Solve),

    /// Re-score a recorded transcript
    Replay(Replay),

    /// Validate a board and print it with percept letters
    Check(Check),
}

fn main() -> Result<()> {
    // Load .env file if it exists (WUMPUS_CONFIG, WUMPUS_LOG_FILE, ...)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(&config.logging)?;

    match cli.command {
        Command::Solve(cmd) => cmd.execute(&config),
        Command::Replay(cmd) => cmd.execute(),
        Command::Check(cmd) => cmd.execute(),
    }
}

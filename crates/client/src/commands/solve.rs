//! Solve a board and write the transcript.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use wumpus_content::{
    BoardLoader, ConfigLoader, TranscriptDocument, TranscriptLoader, write_transcript,
};
use wumpus_core::GameConfig;
use wumpus_solver::{Solution, Solver};

use crate::config::ClientConfig;

/// Run the agent on a board
#[derive(Clone, Debug, Parser)]
pub struct Solve {
    /// Board file (dotted or compact layout)
    #[arg(value_name = "BOARD")]
    pub board: PathBuf,

    /// Agent configuration TOML (overrides WUMPUS_CONFIG)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the transcript here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Transcript format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: TranscriptFormat,

    /// Print the agent's believed map
    #[arg(long)]
    pub beliefs: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum TranscriptFormat {
    /// One `ACTION row col` line per step
    Text,
    /// JSON document with entry, outcome, score, digest and steps
    Json,
}

impl Solve {
    pub fn execute(self, env: &ClientConfig) -> Result<()> {
        let solution = self.run(env)?;

        match &self.output {
            Some(path) => {
                self.write_output(path, &solution)?;
                eprintln!(
                    "{} {}",
                    style("Transcript written to").bold().cyan(),
                    path.display()
                );
            }
            None => self.print_transcript(&solution)?,
        }

        crate::report::print_summary(&solution);
        if self.beliefs {
            crate::report::print_beliefs(&solution);
        }
        Ok(())
    }

    /// Loads the board and configuration, then solves.
    pub fn run(&self, env: &ClientConfig) -> Result<Solution> {
        let config = self.agent_config(env)?;
        let board = BoardLoader::load(&self.board)?;
        tracing::info!("Loaded board {} ({}x{})", self.board.display(), board.size(), board.size());

        let (cave, entry) = board.into_parts();
        Solver::new(config)
            .solve(cave, entry)
            .with_context(|| format!("Solver failed on {}", self.board.display()))
    }

    /// `--config` wins over `WUMPUS_CONFIG`; neither means defaults.
    fn agent_config(&self, env: &ClientConfig) -> Result<GameConfig> {
        match self.config.as_ref().or(env.agent_config.as_ref()) {
            Some(path) => {
                tracing::info!("Using agent config {}", path.display());
                ConfigLoader::load(path)
            }
            None => Ok(GameConfig::default()),
        }
    }

    pub fn write_output(&self, path: &Path, solution: &Solution) -> Result<()> {
        match self.format {
            TranscriptFormat::Text => TranscriptLoader::save_text(path, &solution.transcript),
            TranscriptFormat::Json => TranscriptLoader::save_json(path, &document(solution)),
        }
    }

    fn print_transcript(&self, solution: &Solution) -> Result<()> {
        match self.format {
            TranscriptFormat::Text => write_transcript(&solution.transcript, io::stdout().lock())
                .context("Failed to write transcript to stdout"),
            TranscriptFormat::Json => {
                let json = serde_json::to_string_pretty(&document(solution))
                    .context("Failed to serialize transcript document")?;
                println!("{json}");
                Ok(())
            }
        }
    }
}

fn document(solution: &Solution) -> TranscriptDocument {
    TranscriptDocument::new(
        solution.cave.size(),
        solution.entry,
        solution.outcome,
        solution.score,
        &solution.transcript,
    )
}

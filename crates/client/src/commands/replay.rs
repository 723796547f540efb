//! Re-score a recorded transcript.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use wumpus_content::TranscriptLoader;
use wumpus_core::{Action, AgentStatus, Transcript};

/// Re-score a transcript and report its outcome
#[derive(Clone, Debug, Parser)]
pub struct Replay {
    /// Transcript file (text, or a JSON document when it ends in `.json`)
    #[arg(value_name = "TRANSCRIPT")]
    pub transcript: PathBuf,
}

/// Figures recomputed from the steps alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplaySummary {
    pub steps: usize,
    pub moves: usize,
    pub score: i64,
    pub outcome: AgentStatus,
    pub digest: String,
    /// `Some(false)` when a JSON document's recorded figures disagree with
    /// its steps. Text transcripts carry nothing to compare.
    pub consistent: Option<bool>,
}

impl ReplaySummary {
    fn of(transcript: &Transcript, consistent: Option<bool>) -> Self {
        Self {
            steps: transcript.len(),
            moves: transcript.count(Action::MoveForward),
            score: transcript.replay_score(),
            outcome: transcript.outcome(),
            digest: hex::encode(transcript.digest()),
            consistent,
        }
    }
}

impl Replay {
    pub fn execute(self) -> Result<()> {
        let summary = self.run()?;

        println!("{}", style("=== Replay ===").bold().green());
        println!("  Steps:   {}", summary.steps);
        println!("  Moves:   {}", summary.moves);
        println!("  Score:   {}", summary.score);
        println!("  Outcome: {}", summary.outcome);
        println!("  Digest:  {}", summary.digest);
        match summary.consistent {
            Some(true) => println!("  {}", style("Recorded score and digest match").green()),
            Some(false) => println!("  {}", style("Recorded score or digest differ").red()),
            None => {}
        }
        Ok(())
    }

    pub fn run(&self) -> Result<ReplaySummary> {
        let is_json = self
            .transcript
            .extension()
            .is_some_and(|extension| extension.eq_ignore_ascii_case("json"));

        if is_json {
            let document = TranscriptLoader::load_json(&self.transcript)?;
            let consistent = document.is_consistent();
            if !consistent {
                tracing::warn!("{} does not match its own steps", self.transcript.display());
            }
            Ok(ReplaySummary::of(&document.steps, Some(consistent)))
        } else {
            let transcript = TranscriptLoader::load(&self.transcript)?;
            Ok(ReplaySummary::of(&transcript, None))
        }
    }
}

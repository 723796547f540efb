//! Human-readable summaries printed after a run.

use console::style;
use wumpus_core::{AgentStatus, CellBelief};
use wumpus_solver::Solution;

pub fn print_summary(solution: &Solution) {
    let outcome = match solution.outcome {
        AgentStatus::Won => style(solution.outcome.as_str()).bold().green(),
        AgentStatus::Dead(_) => style(solution.outcome.as_str()).bold().red(),
        _ => style(solution.outcome.as_str()).bold().yellow(),
    };

    eprintln!("{}", style("=== Expedition ===").bold().green());
    eprintln!("  Outcome: {outcome}");
    eprintln!("  Score:   {}", solution.score);
    eprintln!("  Steps:   {}", solution.transcript.len());
    eprintln!(
        "  Gold:    {}/{}",
        solution.agent.gold_collected,
        solution.cave.total_gold()
    );
    eprintln!("  Digest:  {}", hex::encode(solution.transcript.digest()));
}

/// Believed map, one glyph per cell, with a legend.
pub fn print_beliefs(solution: &Solution) {
    eprintln!();
    eprintln!("{}", style("Believed map:").bold().yellow());
    for line in solution.beliefs.to_string().lines() {
        eprintln!("  {line}");
    }
    let legend: Vec<String> = [
        CellBelief::Visited,
        CellBelief::Safe,
        CellBelief::SuspectedPit,
        CellBelief::SuspectedWumpus,
        CellBelief::ConfirmedDangerous,
        CellBelief::Unknown,
    ]
    .into_iter()
    .map(|belief| format!("{} {belief:?}", belief.glyph()))
    .collect();
    eprintln!("  ({})", legend.join(", "));
}

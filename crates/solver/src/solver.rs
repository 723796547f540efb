//! The perceive, infer, plan, act loop.

use tracing::{debug, info};
use wumpus_core::{
    AgentState, AgentStatus, BeliefMap, Cave, CommandOutcome, GameConfig, GameEngine, GameState,
    MoveOutcome, Position, Transcript,
};

use crate::error::SolveError;
use crate::knowledge::{Inference, KnowledgeBase};
use crate::planner::{PlanContext, Planner};

/// Everything a front end needs to present a finished run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub transcript: Transcript,
    pub beliefs: BeliefMap,
    /// Ground truth after the run: grabbed gold removed, killed wumpus slain.
    pub cave: Cave,
    pub entry: Position,
    pub agent: AgentState,
    pub outcome: AgentStatus,
    pub score: i64,
}

impl Solution {
    pub fn is_won(&self) -> bool {
        self.outcome == AgentStatus::Won
    }
}

/// Runs one agent through one cave.
pub struct Solver {
    config: GameConfig,
    planner: Planner,
}

impl Solver {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            planner: Planner::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Explores `cave` from `entry` until the agent wins, dies or climbs out.
    ///
    /// Replans after every first visit, shot and grab, so each plan is made
    /// against current knowledge.
    pub fn solve(&self, cave: Cave, entry: Position) -> Result<Solution, SolveError> {
        let size = cave.size();
        let total_gold = cave.total_gold();
        info!(size, %entry, total_gold, "solving cave");

        let mut state = GameState::new(cave, entry, self.config.initial_facing)?;
        let mut knowledge = KnowledgeBase::new(size);

        GameEngine::new(&mut state).perceive()?;
        let inferences = knowledge.record_visit(entry, &state.cave);
        note_inferences(&mut state, &inferences)?;

        let mut decisions = 0usize;
        while state.agent.status.is_running() {
            decisions += 1;
            let ctx = PlanContext::new(
                knowledge,
                state.agent,
                entry,
                total_gold,
                self.config.clone(),
            );
            let (returned, plan) = self.planner.decide(ctx);
            knowledge = returned;
            let plan = plan.ok_or(SolveError::NoPlan {
                at: state.agent.position,
            })?;
            debug!(decision = decisions, goal = %plan.goal, "executing plan");

            for command in plan.commands {
                let outcome = GameEngine::new(&mut state).execute(command)?;
                match outcome {
                    CommandOutcome::Moved(MoveOutcome::Entered {
                        position,
                        first_visit: true,
                        ..
                    }) => {
                        let inferences = knowledge.record_visit(position, &state.cave);
                        note_inferences(&mut state, &inferences)?;
                        break;
                    }
                    CommandOutcome::Moved(MoveOutcome::Died { .. }) => break,
                    CommandOutcome::Shot(shot) => {
                        knowledge.rule_out_wumpus(shot.path());
                        let observer = state.agent.position;
                        let inferences = knowledge.revise_wumpus(&state.cave, observer);
                        note_inferences(&mut state, &inferences)?;
                        break;
                    }
                    CommandOutcome::Grabbed(at) => {
                        knowledge.resense(at, &state.cave);
                        break;
                    }
                    CommandOutcome::Climbed(_) => break,
                    CommandOutcome::Turned(_) | CommandOutcome::Moved(_) => {}
                }
            }
        }

        let beliefs = knowledge.beliefs();
        let (cave, agent, transcript) = state.into_parts();
        info!(
            outcome = %agent.status,
            score = agent.score,
            steps = transcript.len(),
            decisions,
            "expedition finished"
        );

        Ok(Solution {
            transcript,
            beliefs,
            cave,
            entry,
            outcome: agent.status,
            score: agent.score,
            agent,
        })
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

/// Writes detection and inference steps for a batch of derived facts.
fn note_inferences(state: &mut GameState, inferences: &[Inference]) -> Result<(), SolveError> {
    let observer = state.agent.position;
    let mut engine = GameEngine::new(state);
    for inference in inferences {
        for action in inference.steps(observer) {
            engine.note(action, inference.cell)?;
        }
    }
    if !inferences.is_empty() {
        debug!(%observer, count = inferences.len(), "recorded inferences");
    }
    Ok(())
}

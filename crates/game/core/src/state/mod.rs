//! Authoritative expedition state.
//!
//! This module owns the agent, the cave it explores and the transcript of
//! everything that happened. Solver layers read this state but mutate it
//! exclusively through the engine.
pub mod agent;
pub mod belief;
pub mod common;

pub use agent::{AgentState, AgentStatus, DeathCause};
pub use belief::{BeliefMap, CellBelief};
pub use common::{Direction, Position, UnknownDirection};

use crate::action::Action;
use crate::env::{Cave, CaveError, Percepts};
use crate::transcript::{Step, Transcript};

/// Canonical snapshot of a single expedition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// Hidden ground truth. Gold and wumpus liveness change during the run.
    pub cave: Cave,

    /// Cell the agent entered through and must climb out of.
    pub entry: Position,

    pub agent: AgentState,

    /// Append-only record of committed steps.
    transcript: Transcript,

    /// Cells whose percepts have been reported at least once.
    perceived: Vec<bool>,
}

impl GameState {
    /// Places the agent at `entry` facing `facing`.
    ///
    /// Fails when the entry lies outside the cave or holds a hazard.
    pub fn new(cave: Cave, entry: Position, facing: Direction) -> Result<Self, CaveError> {
        cave.check_entry(entry)?;
        let size = cave.size();
        Ok(Self {
            cave,
            entry,
            agent: AgentState::new(entry, facing),
            transcript: Transcript::new(),
            perceived: vec![false; size * size],
        })
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Splits the state into the ground truth, the final agent and the transcript.
    pub fn into_parts(self) -> (Cave, AgentState, Transcript) {
        (self.cave, self.agent, self.transcript)
    }

    /// Appends a step and applies its score delta.
    pub(crate) fn record(&mut self, action: Action, cell: Position) {
        self.agent.score += action.score_delta();
        self.transcript.push(Step::new(action, cell));
    }

    /// Senses the agent's cell. The first time a cell is sensed its breeze and
    /// stench are written to the transcript.
    ///
    /// Returns the percepts and whether this was the first perception.
    pub(crate) fn perceive_here(&mut self) -> (Percepts, bool) {
        let here = self.agent.position;
        let percepts = self.cave.sense(here);
        let index = here.index(self.cave.size());
        let first = !self.perceived[index];
        if first {
            self.perceived[index] = true;
            if percepts.contains(Percepts::BREEZE) {
                self.record(Action::PerceiveBreeze, here);
            }
            if percepts.contains(Percepts::STENCH) {
                self.record(Action::PerceiveStench, here);
            }
        }
        (percepts, first)
    }
}

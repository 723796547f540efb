//! Append-only record of everything the agent did and concluded.

use sha2::{Digest, Sha256};

use crate::action::Action;
use crate::state::{AgentStatus, DeathCause, Position};

/// One transcript entry: an action and the cell it concerns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub action: Action,
    pub cell: Position,
}

impl Step {
    pub fn new(action: Action, cell: Position) -> Self {
        Self { action, cell }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.action, self.cell.row, self.cell.col)
    }
}

/// Ordered, replayable sequence of [`Step`]s.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Transcript {
    steps: Vec<Step>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a transcript from previously recorded steps.
    pub fn from_steps(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub(crate) fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn actions(&self) -> impl Iterator<Item = Action> + '_ {
        self.steps.iter().map(|step| step.action)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn count(&self, action: Action) -> usize {
        self.actions().filter(|&recorded| recorded == action).count()
    }

    /// Sum of every step's score delta.
    pub fn replay_score(&self) -> i64 {
        self.actions().map(Action::score_delta).sum()
    }

    /// Outcome implied by the final step. A transcript that stops before a
    /// terminal step reports [`AgentStatus::Running`].
    pub fn outcome(&self) -> AgentStatus {
        match self.last().map(|step| step.action) {
            Some(Action::KillAllWumpusAndGrabAllFood) => AgentStatus::Won,
            Some(Action::ClimbOutOfTheCave) => AgentStatus::Stuck,
            Some(Action::FallIntoPit) => AgentStatus::Dead(DeathCause::Pit),
            Some(Action::BeEatenByWumpus) => AgentStatus::Dead(DeathCause::Wumpus),
            _ => AgentStatus::Running,
        }
    }

    /// SHA-256 over the text form of every step, one per line.
    pub fn digest(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        for step in &self.steps {
            hasher.update(step.action.as_str().as_bytes());
            hasher.update(format!(" {} {}\n", step.cell.row, step.cell.col).as_bytes());
        }
        hasher.finalize().into()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

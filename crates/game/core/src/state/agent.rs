use std::fmt;

use super::{Direction, Position};

/// Why the agent stopped breathing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DeathCause {
    Pit,
    Wumpus,
}

/// Lifecycle of an expedition.
///
/// ```text
/// Running ──► Running        (non-terminal command)
///    │
///    ├──────► Won            (climbed out holding every piece of gold)
///    ├──────► Dead(cause)    (entered a pit or a live wumpus)
///    └──────► Stuck          (climbed out with gold left behind)
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AgentStatus {
    #[default]
    Running,
    Won,
    Dead(DeathCause),
    Stuck,
}

impl AgentStatus {
    pub fn is_running(self) -> bool {
        matches!(self, AgentStatus::Running)
    }

    pub fn is_terminal(self) -> bool {
        !self.is_running()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AgentStatus::Running => "running",
            AgentStatus::Won => "won",
            AgentStatus::Dead(DeathCause::Pit) => "fell into a pit",
            AgentStatus::Dead(DeathCause::Wumpus) => "eaten by a wumpus",
            AgentStatus::Stuck => "stuck",
        }
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mutable state of the single agent exploring the cave.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentState {
    pub position: Position,
    pub facing: Direction,
    pub alive: bool,
    pub has_gold: bool,
    pub gold_collected: u32,
    pub arrow_available: bool,
    pub score: i64,
    pub status: AgentStatus,
}

impl AgentState {
    pub fn new(position: Position, facing: Direction) -> Self {
        Self {
            position,
            facing,
            alive: true,
            has_gold: false,
            gold_collected: 0,
            arrow_available: true,
            score: 0,
            status: AgentStatus::Running,
        }
    }

    /// The cell directly ahead of the agent, which may lie outside the cave.
    pub fn ahead(&self) -> Position {
        self.position.step(self.facing)
    }

    pub(crate) fn die(&mut self, cause: DeathCause) {
        self.alive = false;
        self.status = AgentStatus::Dead(cause);
    }
}

use crate::action::{Action, ActionTransition};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameState, Position};

/// Fires the single arrow along the agent's facing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShootAction;

/// Where the arrow went.
///
/// `path` lists the cells the arrow crossed, starting next to the agent. On a
/// hit it ends at the struck cell; on a miss it runs to the wall.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    Hit { at: Position, path: Vec<Position> },
    Miss { path: Vec<Position> },
}

impl ShotOutcome {
    pub fn path(&self) -> &[Position] {
        match self {
            ShotOutcome::Hit { path, .. } | ShotOutcome::Miss { path } => path,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShootError {
    #[error("the arrow has already been spent")]
    ArrowSpent,
}

impl GameError for ShootError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "SHOOT_ARROW_SPENT"
    }
}

impl ActionTransition for ShootAction {
    type Error = ShootError;
    type Result = ShotOutcome;

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        if !state.agent.arrow_available {
            return Err(ShootError::ArrowSpent);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<ShotOutcome, Self::Error> {
        let origin = state.agent.position;
        let facing = state.agent.facing;
        state.agent.arrow_available = false;
        state.record(Action::Shoot, origin);

        let mut path = Vec::new();
        let mut cell = origin.step(facing);
        while state.cave.contains(cell) {
            path.push(cell);
            if state.cave.kill_wumpus(cell) {
                state.record(Action::KillWumpus, cell);
                return Ok(ShotOutcome::Hit { at: cell, path });
            }
            cell = cell.step(facing);
        }

        state.record(Action::KillNoWumpus, origin);
        Ok(ShotOutcome::Miss { path })
    }
}

use crate::action::{Action, ActionTransition};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Direction, GameState};

/// Rotates the agent in place to face `direction`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnAction {
    pub direction: Direction,
}

impl TurnAction {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnError {
    #[error("agent already faces {0}")]
    AlreadyFacing(Direction),
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "TURN_ALREADY_FACING"
    }
}

impl ActionTransition for TurnAction {
    type Error = TurnError;
    type Result = Direction;

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        if state.agent.facing == self.direction {
            return Err(TurnError::AlreadyFacing(self.direction));
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<Direction, Self::Error> {
        state.agent.facing = self.direction;
        let here = state.agent.position;
        state.record(Action::turn(self.direction), here);
        Ok(self.direction)
    }
}

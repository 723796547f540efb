use crate::action::{Action, ActionTransition};
use crate::env::{CaveObject, Percepts};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{DeathCause, Direction, GameState, Position};

/// Steps one cell in the direction the agent faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveForwardAction;

/// Result of a committed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveOutcome {
    /// The agent survived. `first_visit` is true when the cell had never been
    /// perceived before, in which case its percepts were just recorded.
    Entered {
        position: Position,
        percepts: Percepts,
        first_visit: bool,
    },
    Died {
        position: Position,
        cause: DeathCause,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("moving {facing} from {from} leaves the cave")]
    OutOfBounds { from: Position, facing: Direction },

    #[error("agent ended at {position}, outside the cave")]
    LeftCave { position: Position },
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::OutOfBounds { .. } => ErrorSeverity::Fatal,
            Self::LeftCave { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "MOVE_OUT_OF_BOUNDS",
            Self::LeftCave { .. } => "MOVE_LEFT_CAVE",
        }
    }
}

impl ActionTransition for MoveForwardAction {
    type Error = MoveError;
    type Result = MoveOutcome;

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        if !state.cave.contains(state.agent.ahead()) {
            return Err(MoveError::OutOfBounds {
                from: state.agent.position,
                facing: state.agent.facing,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<MoveOutcome, Self::Error> {
        let destination = state.agent.ahead();
        state.agent.position = destination;
        state.record(Action::MoveForward, destination);

        let cause = if state.cave.exists(CaveObject::Pit, destination) {
            Some((Action::FallIntoPit, DeathCause::Pit))
        } else if state.cave.is_wumpus_alive(destination) {
            Some((Action::BeEatenByWumpus, DeathCause::Wumpus))
        } else {
            None
        };

        if let Some((action, cause)) = cause {
            state.record(action, destination);
            state.agent.die(cause);
            return Ok(MoveOutcome::Died {
                position: destination,
                cause,
            });
        }

        let (percepts, first_visit) = state.perceive_here();
        Ok(MoveOutcome::Entered {
            position: destination,
            percepts,
            first_visit,
        })
    }

    fn post_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        let position = state.agent.position;
        if !state.cave.contains(position) {
            return Err(MoveError::LeftCave { position });
        }
        Ok(())
    }
}

use crate::action::{Action, ActionTransition};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{AgentStatus, GameState, Position};

/// Leaves the cave through the entry cell, ending the expedition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClimbOutAction;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClimbError {
    #[error("cannot climb out at {at}; the entry is {entry}")]
    NotAtEntry { at: Position, entry: Position },
}

impl GameError for ClimbError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "CLIMB_NOT_AT_ENTRY"
    }
}

impl ActionTransition for ClimbOutAction {
    type Error = ClimbError;
    type Result = AgentStatus;

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        if state.agent.position != state.entry {
            return Err(ClimbError::NotAtEntry {
                at: state.agent.position,
                entry: state.entry,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<AgentStatus, Self::Error> {
        let entry = state.entry;
        state.record(Action::ClimbOutOfTheCave, entry);

        let status = if state.agent.gold_collected >= state.cave.total_gold() {
            state.record(Action::KillAllWumpusAndGrabAllFood, entry);
            AgentStatus::Won
        } else {
            AgentStatus::Stuck
        };
        state.agent.status = status;
        Ok(status)
    }
}

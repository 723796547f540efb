use crate::action::{Action, ActionTransition};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameState, Position};

/// Picks up the gold lying in the agent's cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrabGoldAction;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GrabError {
    #[error("no gold at {0}")]
    NoGold(Position),
}

impl GameError for GrabError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        "GRAB_NO_GOLD"
    }
}

impl ActionTransition for GrabGoldAction {
    type Error = GrabError;
    type Result = Position;

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        let here = state.agent.position;
        if !state.cave.exists(crate::env::CaveObject::Gold, here) {
            return Err(GrabError::NoGold(here));
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<Position, Self::Error> {
        let here = state.agent.position;
        if !state.cave.remove_gold(here) {
            return Err(GrabError::NoGold(here));
        }
        state.agent.has_gold = true;
        state.agent.gold_collected += 1;
        state.record(Action::GrabGold, here);
        Ok(here)
    }
}

//! Agent commands and the transcript vocabulary.
//!
//! A [`Command`] is what the planner asks the agent to do. Each command maps
//! to a transition type implementing [`ActionTransition`], which validates it
//! against the [`GameState`], mutates the state, and records the resulting
//! [`Action`] steps. Informational steps (percepts and inferences) have no
//! transition; the engine records them directly.
//!
//! # Module Structure
//!
//! - `kind`: the closed [`Action`] vocabulary and its score table
//! - `turn`, `movement`, `grab`, `shoot`, `climb`: one transition per command

mod climb;
mod grab;
mod kind;
mod movement;
mod shoot;
mod turn;

pub use climb::{ClimbError, ClimbOutAction};
pub use grab::{GrabError, GrabGoldAction};
pub use kind::Action;
pub use movement::{MoveError, MoveForwardAction, MoveOutcome};
pub use shoot::{ShootAction, ShootError, ShotOutcome};
pub use turn::{TurnAction, TurnError};

use std::fmt;

use crate::state::{Direction, GameState};

/// Defines how a concrete command mutates game state.
pub trait ActionTransition {
    type Error;
    type Result;

    /// Validates pre-conditions using the state **before** mutation.
    ///
    /// A rejected command leaves the state untouched.
    fn pre_validate(&self, _state: &GameState) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the command by mutating the game state directly.
    fn apply(&self, state: &mut GameState) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Physical command the planner can hand to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    Turn(Direction),
    MoveForward,
    GrabGold,
    Shoot,
    ClimbOut,
}

impl Command {
    /// Transcript step this command records first.
    pub fn action(self) -> Action {
        match self {
            Command::Turn(direction) => Action::turn(direction),
            Command::MoveForward => Action::MoveForward,
            Command::GrabGold => Action::GrabGold,
            Command::Shoot => Action::Shoot,
            Command::ClimbOut => Action::ClimbOutOfTheCave,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.action().as_str())
    }
}

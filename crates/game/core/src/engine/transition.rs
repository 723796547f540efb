//! Command dispatch and execution logic.

use crate::action::{
    ActionTransition, ClimbOutAction, Command, GrabGoldAction, MoveForwardAction, ShootAction,
    TurnAction,
};
use crate::state::GameState;

use super::CommandOutcome;
use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline and returns the result.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the game state and return result
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
) -> Result<T::Result, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = transition
        .apply(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}

/// Routes a command to its transition and wraps the result in [`CommandOutcome`].
pub(super) fn execute_transition(
    command: Command,
    state: &mut GameState,
) -> Result<CommandOutcome, ExecuteError> {
    match command {
        Command::Turn(direction) => drive_transition(&TurnAction::new(direction), state)
            .map(CommandOutcome::Turned)
            .map_err(ExecuteError::Turn),
        Command::MoveForward => drive_transition(&MoveForwardAction, state)
            .map(CommandOutcome::Moved)
            .map_err(ExecuteError::Move),
        Command::GrabGold => drive_transition(&GrabGoldAction, state)
            .map(CommandOutcome::Grabbed)
            .map_err(ExecuteError::Grab),
        Command::Shoot => drive_transition(&ShootAction, state)
            .map(CommandOutcome::Shot)
            .map_err(ExecuteError::Shoot),
        Command::ClimbOut => drive_transition(&ClimbOutAction, state)
            .map(CommandOutcome::Climbed)
            .map_err(ExecuteError::Climb),
    }
}

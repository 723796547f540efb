//! Agent execution pipeline.
//!
//! The [`GameEngine`] is the only writer of [`GameState`]. Every physical
//! command flows through the three-phase transition pipeline, and every
//! committed step lands in the transcript with its score delta applied.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{Action, Command, MoveOutcome, ShotOutcome};
use crate::env::Percepts;
use crate::state::{AgentStatus, Direction, GameState, Position};

/// Command-specific result of a successful execution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandOutcome {
    Turned(Direction),
    Moved(MoveOutcome),
    Grabbed(Position),
    Shot(ShotOutcome),
    Climbed(AgentStatus),
}

/// Executes agent commands against a borrowed [`GameState`].
///
/// All mutations flow through the pipeline:
/// pre_validate → apply → post_validate
///
/// A command rejected in `pre_validate` leaves the state untouched, so the
/// transcript and the score never reflect rejected commands.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Executes a physical command.
    pub fn execute(&mut self, command: Command) -> Result<CommandOutcome, ExecuteError> {
        self.ensure_running()?;
        transition::execute_transition(command, self.state)
    }

    /// Senses the agent's current cell, recording its percepts the first time.
    pub fn perceive(&mut self) -> Result<(Percepts, bool), ExecuteError> {
        self.ensure_running()?;
        Ok(self.state.perceive_here())
    }

    /// Records an informational step such as a detection or inference.
    pub fn note(&mut self, action: Action, cell: Position) -> Result<(), ExecuteError> {
        self.ensure_running()?;
        if !action.is_informational() {
            return Err(ExecuteError::NotInformational { action });
        }
        self.state.record(action, cell);
        Ok(())
    }

    fn ensure_running(&self) -> Result<(), ExecuteError> {
        let status = self.state.agent.status;
        if !status.is_running() {
            return Err(ExecuteError::AgentNotRunning { status });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{MoveError, ShootError, TurnError};
    use crate::env::Cave;
    use crate::state::DeathCause;
    use crate::transcript::Step;

    fn steps(state: &GameState) -> Vec<(Action, Position)> {
        state
            .transcript()
            .steps()
            .iter()
            .map(|step| (step.action, step.cell))
            .collect()
    }

    #[test]
    fn arrow_kills_the_first_wumpus_in_line() {
        let cave = Cave::builder(10).wumpus(Position::new(3, 5)).build();
        let mut state = GameState::new(cave, Position::new(3, 2), Direction::Right).unwrap();
        let mut engine = GameEngine::new(&mut state);

        let outcome = engine.execute(Command::Shoot).unwrap();
        assert_eq!(
            outcome,
            CommandOutcome::Shot(ShotOutcome::Hit {
                at: Position::new(3, 5),
                path: vec![Position::new(3, 3), Position::new(3, 4), Position::new(3, 5)],
            })
        );
        assert_eq!(
            steps(&state),
            vec![
                (Action::Shoot, Position::new(3, 2)),
                (Action::KillWumpus, Position::new(3, 5)),
            ]
        );
        assert_eq!(state.agent.score, 490);
        assert!(!state.cave.is_wumpus_alive(Position::new(3, 5)));
    }

    #[test]
    fn second_shot_is_rejected_without_side_effects() {
        let cave = Cave::builder(4).build();
        let mut state = GameState::new(cave, Position::new(3, 0), Direction::Up).unwrap();
        GameEngine::new(&mut state).execute(Command::Shoot).unwrap();
        assert_eq!(
            steps(&state),
            vec![
                (Action::Shoot, Position::new(3, 0)),
                (Action::KillNoWumpus, Position::new(3, 0)),
            ]
        );

        let before = state.clone();
        let error = GameEngine::new(&mut state).execute(Command::Shoot).unwrap_err();
        assert_eq!(
            error,
            ExecuteError::Shoot(TransitionPhaseError::new(
                TransitionPhase::PreValidate,
                ShootError::ArrowSpent
            ))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn walking_into_a_pit_ends_the_run() {
        let cave = Cave::builder(3).pit(Position::new(1, 0)).build();
        let mut state = GameState::new(cave, Position::new(2, 0), Direction::Up).unwrap();
        let mut engine = GameEngine::new(&mut state);

        let outcome = engine.execute(Command::MoveForward).unwrap();
        assert_eq!(
            outcome,
            CommandOutcome::Moved(MoveOutcome::Died {
                position: Position::new(1, 0),
                cause: DeathCause::Pit,
            })
        );
        assert!(matches!(
            engine.execute(Command::Turn(Direction::Left)),
            Err(ExecuteError::AgentNotRunning { .. })
        ));
        assert_eq!(state.agent.status, AgentStatus::Dead(DeathCause::Pit));
        assert_eq!(state.agent.score, -1001);
        assert_eq!(
            state.transcript().last(),
            Some(&Step::new(Action::FallIntoPit, Position::new(1, 0)))
        );
    }

    #[test]
    fn moves_record_percepts_once_per_cell() {
        let cave = Cave::builder(3).wumpus(Position::new(0, 1)).build();
        let mut state = GameState::new(cave, Position::new(2, 1), Direction::Up).unwrap();
        let mut engine = GameEngine::new(&mut state);

        engine.perceive().unwrap();
        engine.execute(Command::MoveForward).unwrap();
        engine.execute(Command::Turn(Direction::Down)).unwrap();
        engine.execute(Command::MoveForward).unwrap();
        engine.execute(Command::Turn(Direction::Up)).unwrap();
        let revisit = engine.execute(Command::MoveForward).unwrap();

        assert_eq!(
            revisit,
            CommandOutcome::Moved(MoveOutcome::Entered {
                position: Position::new(1, 1),
                percepts: Percepts::STENCH,
                first_visit: false,
            })
        );
        assert_eq!(state.transcript().count(Action::PerceiveStench), 1);
    }

    #[test]
    fn illegal_commands_carry_their_phase() {
        let cave = Cave::builder(2).build();
        let mut state = GameState::new(cave, Position::new(0, 0), Direction::Up).unwrap();
        let mut engine = GameEngine::new(&mut state);

        assert_eq!(
            engine.execute(Command::MoveForward),
            Err(ExecuteError::Move(TransitionPhaseError::new(
                TransitionPhase::PreValidate,
                MoveError::OutOfBounds {
                    from: Position::new(0, 0),
                    facing: Direction::Up,
                }
            )))
        );
        assert_eq!(
            engine.execute(Command::Turn(Direction::Up)),
            Err(ExecuteError::Turn(TransitionPhaseError::new(
                TransitionPhase::PreValidate,
                TurnError::AlreadyFacing(Direction::Up)
            )))
        );
        assert!(matches!(
            engine.note(Action::MoveForward, Position::new(0, 0)),
            Err(ExecuteError::NotInformational { .. })
        ));
        assert!(state.transcript().is_empty());
    }

    #[test]
    fn climbing_out_with_all_gold_wins() {
        let cave = Cave::builder(2).gold(Position::new(1, 0)).build();
        let mut state = GameState::new(cave, Position::new(1, 0), Direction::Up).unwrap();
        let mut engine = GameEngine::new(&mut state);

        engine.execute(Command::GrabGold).unwrap();
        let outcome = engine.execute(Command::ClimbOut).unwrap();

        assert_eq!(outcome, CommandOutcome::Climbed(AgentStatus::Won));
        assert_eq!(
            state.transcript().actions().collect::<Vec<_>>(),
            vec![
                Action::GrabGold,
                Action::ClimbOutOfTheCave,
                Action::KillAllWumpusAndGrabAllFood,
            ]
        );
        assert_eq!(state.agent.score, 1000);
    }

    #[test]
    fn climbing_out_without_the_gold_is_stuck() {
        let cave = Cave::builder(2).gold(Position::new(0, 1)).build();
        let mut state = GameState::new(cave, Position::new(1, 0), Direction::Up).unwrap();
        let outcome = GameEngine::new(&mut state).execute(Command::ClimbOut).unwrap();

        assert_eq!(outcome, CommandOutcome::Climbed(AgentStatus::Stuck));
        assert_eq!(state.transcript().len(), 1);
    }
}

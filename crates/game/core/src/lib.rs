//! Deterministic ground truth and agent rules for the Wumpus World.
//!
//! `wumpus-core` defines the hidden cave, the percept model, the closed action
//! vocabulary and the agent execution state machine. All agent mutation flows
//! through [`engine::GameEngine`], which appends every committed step to the
//! [`Transcript`]. The solver and the loaders depend on the types re-exported
//! here.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;
pub mod transcript;

pub use action::{
    Action, ActionTransition, ClimbError, ClimbOutAction, Command, GrabError, GrabGoldAction,
    MoveError, MoveForwardAction, MoveOutcome, ShootAction, ShootError, ShotOutcome, TurnAction,
    TurnError,
};
pub use config::GameConfig;
pub use engine::{CommandOutcome, ExecuteError, GameEngine, TransitionPhase, TransitionPhaseError};
pub use env::{Cave, CaveBuilder, CaveError, CaveObject, CellContents, PerceptOracle, Percepts};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    AgentState, AgentStatus, BeliefMap, CellBelief, DeathCause, Direction, GameState, Position,
    UnknownDirection,
};
pub use transcript::{Step, Transcript};

//! Error types for the command execution pipeline.

use crate::action::{Action, ClimbError, GrabError, MoveError, ShootError, TurnError};
use crate::error::{ErrorSeverity, GameError};
use crate::state::AgentStatus;

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing a command through the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("turn failed: {0}")]
    Turn(TransitionPhaseError<TurnError>),

    #[error("move failed: {0}")]
    Move(TransitionPhaseError<MoveError>),

    #[error("grab failed: {0}")]
    Grab(TransitionPhaseError<GrabError>),

    #[error("shoot failed: {0}")]
    Shoot(TransitionPhaseError<ShootError>),

    #[error("climb failed: {0}")]
    Climb(TransitionPhaseError<ClimbError>),

    #[error("agent is no longer running (status: {status})")]
    AgentNotRunning { status: AgentStatus },

    #[error("{action} is not an informational step")]
    NotInformational { action: Action },
}

impl ExecuteError {
    /// Phase that failed, for errors raised by a transition.
    pub fn phase(&self) -> Option<TransitionPhase> {
        match self {
            Self::Turn(e) => Some(e.phase),
            Self::Move(e) => Some(e.phase),
            Self::Grab(e) => Some(e.phase),
            Self::Shoot(e) => Some(e.phase),
            Self::Climb(e) => Some(e.phase),
            Self::AgentNotRunning { .. } | Self::NotInformational { .. } => None,
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Turn(e) => e.error.severity(),
            Self::Move(e) => e.error.severity(),
            Self::Grab(e) => e.error.severity(),
            Self::Shoot(e) => e.error.severity(),
            Self::Climb(e) => e.error.severity(),
            Self::AgentNotRunning { .. } => ErrorSeverity::Validation,
            Self::NotInformational { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Turn(e) => e.error.error_code(),
            Self::Move(e) => e.error.error_code(),
            Self::Grab(e) => e.error.error_code(),
            Self::Shoot(e) => e.error.error_code(),
            Self::Climb(e) => e.error.error_code(),
            Self::AgentNotRunning { .. } => "AGENT_NOT_RUNNING",
            Self::NotInformational { .. } => "NOT_INFORMATIONAL",
        }
    }
}

use wumpus_core::{CaveError, ErrorSeverity, ExecuteError, GameError, Position};

/// Errors that abort a solve.
///
/// Being stuck is not an error: it is reported as the outcome of a
/// [`Solution`](crate::Solution).
#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    #[error("invalid cave: {0}")]
    Cave(#[from] CaveError),

    #[error("agent rejected a planned command: {0}")]
    Execute(#[from] ExecuteError),

    #[error("policy produced no plan with the agent at {at}")]
    NoPlan { at: Position },
}

impl GameError for SolveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Cave(error) => error.severity(),
            Self::Execute(error) => error.severity(),
            Self::NoPlan { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Cave(error) => error.error_code(),
            Self::Execute(error) => error.error_code(),
            Self::NoPlan { .. } => "SOLVE_NO_PLAN",
        }
    }
}

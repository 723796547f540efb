use wumpus_core::{CaveError, ErrorSeverity, GameError, Position};

/// Reasons a board file is rejected before any planning starts.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board file is empty")]
    Empty,

    #[error("invalid size header '{header}' (expected a positive integer)")]
    BadSizeHeader { header: String },

    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row}: expected {expected} cells, found {found}")]
    ColumnCount {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown token '{token}' at ({row}, {col})")]
    UnknownToken {
        row: usize,
        col: usize,
        token: String,
    },

    #[error("agent start given twice: {first} and {second}")]
    MultipleAgents { first: Position, second: Position },

    #[error(transparent)]
    Entry(#[from] CaveError),
}

impl GameError for BoardError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "BOARD_EMPTY",
            Self::BadSizeHeader { .. } => "BOARD_BAD_SIZE_HEADER",
            Self::RowCount { .. } => "BOARD_ROW_COUNT",
            Self::ColumnCount { .. } => "BOARD_COLUMN_COUNT",
            Self::UnknownToken { .. } => "BOARD_UNKNOWN_TOKEN",
            Self::MultipleAgents { .. } => "BOARD_MULTIPLE_AGENTS",
            Self::Entry(inner) => inner.error_code(),
        }
    }
}

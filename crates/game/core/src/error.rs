//! Common error infrastructure for wumpus-core.
//!
//! Domain-specific errors (e.g., `MoveError`, `ShootError`) live next to the
//! transitions they validate. This module provides the shared severity
//! classification and the [`GameError`] trait they all implement.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each command has its own error type with specific variants
//! - **Rich Context**: Errors carry the positions involved
//! - **Severity Classification**: Errors are categorized for recovery strategies

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: The planner may pick a different command
/// - **Validation**: The command was malformed for the current state
/// - **Internal**: Ground truth and agent state disagree
/// - **Fatal**: A logic defect; the run cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - retry with an alternative command.
    ///
    /// Examples: no gold at the agent's cell
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: arrow already spent, turning to the current facing
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// These indicate bugs and should be investigated.
    Internal,

    /// Fatal error - the planner asked for something impossible.
    ///
    /// Examples: moving through the cave wall
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all wumpus-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

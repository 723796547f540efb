//! Subcommand implementations.
//!
//! Each command owns its CLI arguments and execution logic.

mod check;
mod replay;
mod solve;

pub use check::Check;
pub use replay::Replay;
pub use solve::{Solve, TranscriptFormat};

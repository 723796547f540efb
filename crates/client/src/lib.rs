//! Command-line front end for the Wumpus World solver.
//!
//! ```text
//! wumpus solve <BOARD>       board file ─► Solver ─► transcript + summary
//! wumpus replay <TRANSCRIPT> transcript ─► score, outcome, digest
//! wumpus check <BOARD>       board file ─► board with percept letters
//! ```
//!
//! Logs go to stderr (and optionally a file); transcripts go to stdout or
//! the `--output` file.

pub mod commands;
pub mod config;
pub mod logging;
pub mod report;

pub use config::{ClientConfig, LogConfig};

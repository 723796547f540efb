//! Hidden ground truth and the percept channel the agent observes it through.
mod cave;
mod percept;

pub use cave::{Cave, CaveBuilder, CaveError, CaveObject, CellContents};
pub use percept::{PerceptOracle, Percepts, sense};

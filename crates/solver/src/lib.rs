//! Autonomous agent for the Wumpus World.
//!
//! The [`Solver`] drives a [`wumpus_core::GameEngine`] through a hidden cave:
//! it perceives, folds percepts into a [`KnowledgeBase`], asks the
//! [`Planner`] for the next goal, and executes commands until the agent wins,
//! dies or gives up. The result is a replayable transcript plus the believed
//! map.
pub mod error;
pub mod knowledge;
pub mod planner;
pub mod solver;

pub use error::SolveError;
pub use knowledge::{Fact, Hazard, Inference, KnowledgeBase};
pub use planner::{Cost, Goal, Plan, PlanContext, Planner, RouteMap};
pub use solver::{Solution, Solver};

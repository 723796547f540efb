//! Priority-ordered behavior nodes for deterministic agent policies.
//!
//! A policy is a tree of nodes evaluated against a mutable context. Every
//! tick completes immediately: a node either succeeds or fails, and the
//! first succeeding branch of a [`Selector`] wins. There is no running state
//! and no clock, so a policy evaluated twice on equal contexts takes the
//! same branch.
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Success or Failure
//! - Composite nodes: [`Sequence`] (guard, then act) and [`Selector`] (priority list)
//! - [`builder`]: boxing shorthands for assembling trees

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod status;

pub use behavior::Behavior;
pub use composite::{Selector, Sequence};
pub use status::Status;

//! Leaf nodes of the expedition policy.
//!
//! Conditions inspect the [`PlanContext`](super::PlanContext) and never write
//! a plan. Actions write a plan and succeed, or fail without touching it.

mod actions;
mod conditions;

pub use actions::{
    AbandonExpedition, ExploreSafeFrontier, GrabGold, ReturnToEntry, ShootSuspectedWumpus,
    TakeLeastRisk,
};
pub use conditions::{AllGoldCollected, CanShoot, GlitterHere, RiskAllowed};

use behavior_tree::{Behavior, Status};
use wumpus_core::Percepts;

use crate::planner::PlanContext;

/// The agent's cell glitters.
pub struct GlitterHere;

impl Behavior<PlanContext> for GlitterHere {
    fn tick(&self, ctx: &mut PlanContext) -> Status {
        let here = ctx.agent().position;
        Status::from_bool(
            ctx.knowledge()
                .percepts(here)
                .is_some_and(|percepts| percepts.contains(Percepts::GLITTER)),
        )
    }
}

/// Every piece of gold in the cave is in hand. Trivially true for a cave
/// without gold.
pub struct AllGoldCollected;

impl Behavior<PlanContext> for AllGoldCollected {
    fn tick(&self, ctx: &mut PlanContext) -> Status {
        Status::from_bool(ctx.agent().gold_collected >= ctx.total_gold())
    }
}

/// Shooting is enabled and the arrow has not been spent.
pub struct CanShoot;

impl Behavior<PlanContext> for CanShoot {
    fn tick(&self, ctx: &mut PlanContext) -> Status {
        Status::from_bool(ctx.config().allow_shooting && ctx.agent().arrow_available)
    }
}

pub struct RiskAllowed;

impl Behavior<PlanContext> for RiskAllowed {
    fn tick(&self, ctx: &mut PlanContext) -> Status {
        Status::from_bool(ctx.config().allow_risk)
    }
}

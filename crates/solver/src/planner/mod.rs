//! Goal selection and routing.
//!
//! Each decision builds a [`PlanContext`] from the current knowledge and agent
//! snapshot, ticks the expedition policy once, and returns the chosen
//! [`Plan`]. The solver executes the plan only until something new is learnt,
//! then asks again.
mod context;
mod goal;
pub mod nodes;
pub mod policy;
mod route;

pub use context::PlanContext;
pub use goal::{Goal, Plan};
pub use route::{Cost, RouteMap};

use tracing::debug;

use crate::knowledge::KnowledgeBase;
use policy::PolicyTree;

/// Evaluates the expedition policy against a planning context.
pub struct Planner {
    policy: PolicyTree,
}

impl Planner {
    pub fn new() -> Self {
        Self::with_policy(policy::expedition())
    }

    pub fn with_policy(policy: PolicyTree) -> Self {
        Self { policy }
    }

    /// Ticks the policy once and hands the knowledge base back with the plan.
    pub fn decide(&self, mut ctx: PlanContext) -> (KnowledgeBase, Option<Plan>) {
        let status = self.policy.tick(&mut ctx);
        match ctx.plan() {
            Some(plan) => debug!(
                goal = %plan.goal,
                commands = plan.commands.len(),
                "policy chose a plan"
            ),
            None => debug!(?status, "policy produced no plan"),
        }
        ctx.finish()
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wumpus_core::{AgentState, Cave, Command, Direction, GameConfig, Position};

    fn decide(cave: &Cave, visited: &[Position], agent: AgentState, config: GameConfig) -> Plan {
        let mut kb = KnowledgeBase::new(cave.size());
        for &cell in visited {
            kb.record_visit(cell, cave);
        }
        let entry = Position::bottom_left(cave.size());
        let ctx = PlanContext::new(kb, agent, entry, cave.total_gold(), config);
        let (_, plan) = Planner::new().decide(ctx);
        plan.unwrap()
    }

    #[test]
    fn nothing_to_fetch_means_climbing_out() {
        let cave = Cave::builder(4).build();
        let agent = AgentState::new(Position::new(3, 0), Direction::Up);

        let plan = decide(&cave, &[Position::new(3, 0)], agent, GameConfig::new());
        assert_eq!(plan, Plan::new(Goal::ReturnToEntry, vec![Command::ClimbOut]));
    }

    #[test]
    fn safe_cells_are_explored_nearest_first() {
        let cave = Cave::builder(4).gold(Position::new(0, 3)).build();
        let agent = AgentState::new(Position::new(3, 0), Direction::Up);

        let plan = decide(&cave, &[Position::new(3, 0)], agent, GameConfig::new());
        assert_eq!(
            plan,
            Plan::new(
                Goal::Explore {
                    target: Position::new(2, 0)
                },
                vec![Command::MoveForward]
            )
        );
    }

    #[test]
    fn lined_up_suspect_is_shot_before_gambling() {
        let cave = Cave::builder(4)
            .wumpus(Position::new(2, 0))
            .gold(Position::new(0, 3))
            .build();
        let agent = AgentState::new(Position::new(3, 0), Direction::Right);

        let plan = decide(&cave, &[Position::new(3, 0)], agent, GameConfig::new());
        assert_eq!(
            plan,
            Plan::new(
                Goal::ShootWumpus {
                    target: Position::new(2, 0),
                    from: Position::new(3, 0),
                    direction: Direction::Up,
                },
                vec![Command::Turn(Direction::Up), Command::Shoot]
            )
        );
    }

    #[test]
    fn cautious_agent_gives_up_instead_of_gambling() {
        let cave = Cave::builder(4)
            .pit(Position::new(2, 0))
            .pit(Position::new(3, 1))
            .gold(Position::new(0, 3))
            .build();
        let agent = AgentState::new(Position::new(3, 0), Direction::Up);

        let plan = decide(&cave, &[Position::new(3, 0)], agent, GameConfig::cautious());
        assert_eq!(plan, Plan::new(Goal::Abandon, vec![Command::ClimbOut]));

        let plan = decide(&cave, &[Position::new(3, 0)], agent, GameConfig::new());
        assert_eq!(
            plan,
            Plan::new(
                Goal::TakeRisk {
                    target: Position::new(2, 0),
                    risk: 1
                },
                vec![Command::MoveForward]
            )
        );
    }
}

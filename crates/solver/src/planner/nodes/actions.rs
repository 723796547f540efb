use std::cmp::Reverse;

use behavior_tree::{Behavior, Status};
use tracing::debug;
use wumpus_core::{CellBelief, Command, Position};

use crate::knowledge::{Fact, Hazard};
use crate::planner::{Goal, PlanContext};

/// Picks up the gold in the agent's cell.
pub struct GrabGold;

impl Behavior<PlanContext> for GrabGold {
    fn tick(&self, ctx: &mut PlanContext) -> Status {
        let at = ctx.agent().position;
        ctx.set_plan(Goal::GrabGold { at }, vec![Command::GrabGold]);
        Status::Success
    }
}

/// Walks home and climbs out once the gold is in hand.
pub struct ReturnToEntry;

impl Behavior<PlanContext> for ReturnToEntry {
    fn tick(&self, ctx: &mut PlanContext) -> Status {
        climb_out(ctx, Goal::ReturnToEntry)
    }
}

/// Walks home and climbs out empty-handed. Always the last resort.
pub struct AbandonExpedition;

impl Behavior<PlanContext> for AbandonExpedition {
    fn tick(&self, ctx: &mut PlanContext) -> Status {
        climb_out(ctx, Goal::Abandon)
    }
}

fn climb_out(ctx: &mut PlanContext, goal: Goal) -> Status {
    let entry = ctx.entry();
    let (_, routes) = ctx.survey();
    let Some(mut commands) = routes.commands_to(entry) else {
        return Status::Failure;
    };
    commands.push(Command::ClimbOut);
    ctx.set_plan(goal, commands);
    Status::Success
}

/// Walks to the nearest cell proven safe.
///
/// Candidates are ranked by moves, then Manhattan distance from the agent,
/// then the order in which the route search reached them.
pub struct ExploreSafeFrontier;

impl Behavior<PlanContext> for ExploreSafeFrontier {
    fn tick(&self, ctx: &mut PlanContext) -> Status {
        let here = ctx.agent().position;
        let (knowledge, routes) = ctx.survey();

        let best = Position::all(knowledge.size())
            .filter(|&cell| !knowledge.is_visited(cell) && knowledge.is_safe(cell))
            .filter_map(|cell| {
                let cost = routes.cost_to(cell)?;
                let order = routes.settle_order(cell)?;
                Some(((cost.moves, here.manhattan(cell), order), cell))
            })
            .min_by_key(|&(key, _)| key);

        let Some((_, target)) = best else {
            return Status::Failure;
        };
        let Some(commands) = routes.commands_to(target) else {
            return Status::Failure;
        };
        ctx.set_plan(Goal::Explore { target }, commands);
        Status::Success
    }
}

/// Shoots at the most likely wumpus that lines up with a reachable cell.
///
/// Targets are unvisited cells whose wumpus fact is `Present`, or still open
/// and implicated by some stench, and which are not known pits. Confirmed
/// wumpuses come first, then the most implicated suspects, then row-major
/// order. The firing spot minimises moves, then turns including the final
/// turn to face the target, then search order.
pub struct ShootSuspectedWumpus;

impl Behavior<PlanContext> for ShootSuspectedWumpus {
    fn tick(&self, ctx: &mut PlanContext) -> Status {
        let (knowledge, routes) = ctx.survey();
        let size = knowledge.size();

        let mut targets: Vec<(bool, Reverse<u32>, usize, Position)> = Position::all(size)
            .filter(|&cell| {
                !knowledge.is_visited(cell) && knowledge.fact(cell, Hazard::Pit) != Fact::Present
            })
            .filter_map(|cell| {
                let implication = knowledge.implication(cell, Hazard::Wumpus);
                match knowledge.fact(cell, Hazard::Wumpus) {
                    Fact::Present => Some((false, Reverse(implication), cell.index(size), cell)),
                    Fact::Unknown if implication > 0 => {
                        Some((true, Reverse(implication), cell.index(size), cell))
                    }
                    _ => None,
                }
            })
            .collect();
        targets.sort();

        for (_, _, _, target) in targets {
            let spot = Position::all(size)
                .filter_map(|from| {
                    let direction = from.line_to(target)?;
                    let order = routes.settle_order(from)?;
                    let (cost, commands) = routes.commands_facing(from, direction)?;
                    Some(((cost, order), from, direction, commands))
                })
                .min_by_key(|(key, ..)| *key);

            if let Some((_, from, direction, mut commands)) = spot {
                commands.push(Command::Shoot);
                debug!(%target, %from, %direction, "wumpus in line of fire");
                ctx.set_plan(
                    Goal::ShootWumpus {
                        target,
                        from,
                        direction,
                    },
                    commands,
                );
                return Status::Success;
            }
        }
        Status::Failure
    }
}

/// Steps into the frontier cell with the lowest risk score.
///
/// Ties go to fewer moves, then fewer turns, then search order of the cell
/// the agent steps from. Confirmed hazards are never entered.
pub struct TakeLeastRisk;

impl Behavior<PlanContext> for TakeLeastRisk {
    fn tick(&self, ctx: &mut PlanContext) -> Status {
        let (knowledge, routes) = ctx.survey();

        let best = knowledge
            .frontier()
            .into_iter()
            .filter(|&cell| knowledge.belief(cell) != CellBelief::ConfirmedDangerous)
            .filter_map(|cell| {
                let risk = knowledge.risk(cell);
                let (cost, order, commands) = routes.commands_into(cell)?;
                Some(((risk, cost, order), cell, commands))
            })
            .min_by_key(|(key, ..)| *key);

        let Some(((risk, ..), target, commands)) = best else {
            return Status::Failure;
        };
        ctx.set_plan(Goal::TakeRisk { target, risk }, commands);
        Status::Success
    }
}

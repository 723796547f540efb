//! Goals the policy can pick and the plans that realise them.

use std::fmt;

use wumpus_core::{Command, Direction, Position};

/// Why the agent is about to act.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Goal {
    /// Pick up the gold glittering in the current cell.
    GrabGold { at: Position },

    /// Every piece of gold is in hand; head home and climb out.
    ReturnToEntry,

    /// Walk to the nearest cell proven safe.
    Explore { target: Position },

    /// Spend the arrow on a suspected or confirmed wumpus.
    ShootWumpus {
        target: Position,
        from: Position,
        direction: Direction,
    },

    /// Step into the least suspicious unproven cell.
    TakeRisk { target: Position, risk: u32 },

    /// Nothing left to try; climb out with whatever was found.
    Abandon,
}

impl Goal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::GrabGold { .. } => "grab_gold",
            Goal::ReturnToEntry => "return_to_entry",
            Goal::Explore { .. } => "explore",
            Goal::ShootWumpus { .. } => "shoot_wumpus",
            Goal::TakeRisk { .. } => "take_risk",
            Goal::Abandon => "abandon",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Goal::GrabGold { at } => write!(f, "grab gold at {at}"),
            Goal::ReturnToEntry => f.write_str("return to entry"),
            Goal::Explore { target } => write!(f, "explore {target}"),
            Goal::ShootWumpus {
                target,
                from,
                direction,
            } => write!(f, "shoot {direction} from {from} at {target}"),
            Goal::TakeRisk { target, risk } => write!(f, "risk {target} (risk {risk})"),
            Goal::Abandon => f.write_str("abandon expedition"),
        }
    }
}

/// A goal plus the physical commands that pursue it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plan {
    pub goal: Goal,
    pub commands: Vec<Command>,
}

impl Plan {
    pub fn new(goal: Goal, commands: Vec<Command>) -> Self {
        Self { goal, commands }
    }
}

use crate::state::Direction;

/// Agent configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Direction the agent faces when it enters the cave.
    pub initial_facing: Direction,

    /// Whether the planner may spend the arrow on a suspected wumpus.
    pub allow_shooting: bool,

    /// Whether the planner may step into an unproven cell once every provably
    /// safe option is exhausted. A cautious agent climbs out instead.
    pub allow_risk: bool,
}

impl GameConfig {
    // ===== board conventions =====
    /// Side length of the standard cave.
    pub const DEFAULT_GRID_SIZE: usize = 10;

    // ===== score table =====
    pub const MOVE_COST: i64 = -1;
    pub const SHOOT_COST: i64 = -10;
    pub const WUMPUS_BOUNTY: i64 = 500;
    pub const GOLD_REWARD: i64 = 1000;
    pub const DEATH_PENALTY: i64 = -1000;

    pub fn new() -> Self {
        Self {
            initial_facing: Direction::Up,
            allow_shooting: true,
            allow_risk: true,
        }
    }

    /// Configuration for an agent that never gambles on unproven cells.
    pub fn cautious() -> Self {
        Self {
            allow_risk: false,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

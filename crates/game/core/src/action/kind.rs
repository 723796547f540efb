//! Closed vocabulary of transcript steps.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::config::GameConfig;
use crate::state::Direction;

/// Every step the agent can write to its transcript.
///
/// The textual names are the wire format shared with transcript consumers.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Action {
    TurnLeft,
    TurnRight,
    TurnUp,
    TurnDown,
    MoveForward,
    GrabGold,
    Shoot,
    PerceiveBreeze,
    PerceiveStench,
    DetectPit,
    DetectWumpus,
    DetectNoPit,
    DetectNoWumpus,
    DetectSafe,
    InferPit,
    InferNotPit,
    InferWumpus,
    InferNotWumpus,
    InferSafe,
    KillWumpus,
    KillNoWumpus,
    FallIntoPit,
    BeEatenByWumpus,
    ClimbOutOfTheCave,
    KillAllWumpusAndGrabAllFood,
}

impl Action {
    /// Score change applied when this step is recorded.
    pub fn score_delta(self) -> i64 {
        match self {
            Action::MoveForward => GameConfig::MOVE_COST,
            Action::Shoot => GameConfig::SHOOT_COST,
            Action::KillWumpus => GameConfig::WUMPUS_BOUNTY,
            Action::GrabGold => GameConfig::GOLD_REWARD,
            Action::FallIntoPit | Action::BeEatenByWumpus => GameConfig::DEATH_PENALTY,
            _ => 0,
        }
    }

    /// Steps that only report knowledge and never change the world.
    pub fn is_informational(self) -> bool {
        matches!(
            self,
            Action::PerceiveBreeze
                | Action::PerceiveStench
                | Action::DetectPit
                | Action::DetectWumpus
                | Action::DetectNoPit
                | Action::DetectNoWumpus
                | Action::DetectSafe
                | Action::InferPit
                | Action::InferNotPit
                | Action::InferWumpus
                | Action::InferNotWumpus
                | Action::InferSafe
        )
    }

    /// Steps after which the expedition is over.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Action::FallIntoPit
                | Action::BeEatenByWumpus
                | Action::ClimbOutOfTheCave
                | Action::KillAllWumpusAndGrabAllFood
        )
    }

    pub fn turn(direction: Direction) -> Self {
        match direction {
            Direction::Up => Action::TurnUp,
            Direction::Down => Action::TurnDown,
            Direction::Left => Action::TurnLeft,
            Direction::Right => Action::TurnRight,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

//! The expedition policy, assembled from the leaf nodes.
//!
//! ```text
//! expedition()
//!   └─ Selector
//!       ├─ Sequence [GlitterHere, GrabGold]
//!       ├─ Sequence [AllGoldCollected, ReturnToEntry]
//!       ├─ ExploreSafeFrontier
//!       ├─ Sequence [CanShoot, ShootSuspectedWumpus]
//!       ├─ Sequence [RiskAllowed, TakeLeastRisk]
//!       └─ AbandonExpedition
//! ```

use behavior_tree::Behavior;
use behavior_tree::builder::{node, selector, sequence};

use super::PlanContext;
use super::nodes::{
    AbandonExpedition, AllGoldCollected, CanShoot, ExploreSafeFrontier, GlitterHere, GrabGold,
    ReturnToEntry, RiskAllowed, ShootSuspectedWumpus, TakeLeastRisk,
};

pub type PolicyTree = Box<dyn Behavior<PlanContext>>;

/// Full priority list, from grabbing gold down to giving up.
pub fn expedition() -> PolicyTree {
    selector(vec![
        grab_when_glittering(),
        return_when_done(),
        node(ExploreSafeFrontier),
        shoot_when_armed(),
        gamble_when_allowed(),
        node(AbandonExpedition),
    ])
}

pub fn grab_when_glittering() -> PolicyTree {
    sequence(vec![node(GlitterHere), node(GrabGold)])
}

pub fn return_when_done() -> PolicyTree {
    sequence(vec![node(AllGoldCollected), node(ReturnToEntry)])
}

pub fn shoot_when_armed() -> PolicyTree {
    sequence(vec![node(CanShoot), node(ShootSuspectedWumpus)])
}

pub fn gamble_when_allowed() -> PolicyTree {
    sequence(vec![node(RiskAllowed), node(TakeLeastRisk)])
}

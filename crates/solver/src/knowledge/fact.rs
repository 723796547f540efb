use arrayvec::ArrayVec;
use wumpus_core::{Action, Percepts, Position};

/// Three-valued truth of a hazard predicate for one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Fact {
    #[default]
    Unknown,
    Present,
    Absent,
}

/// The two hazard predicates tracked per cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Hazard {
    Pit,
    Wumpus,
}

impl Hazard {
    /// Evaluation order used by propagation.
    pub const ALL: [Hazard; 2] = [Hazard::Pit, Hazard::Wumpus];

    /// Percept a neighbouring hazard of this kind produces.
    pub fn signal(self) -> Percepts {
        match self {
            Hazard::Pit => Percepts::BREEZE,
            Hazard::Wumpus => Percepts::STENCH,
        }
    }
}

/// A newly derived fact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Inference {
    pub cell: Position,
    pub hazard: Hazard,
    pub fact: Fact,
    /// Visited cell whose percept clause produced the fact.
    pub source: Position,
    /// The fact completed the cell's safety.
    pub now_safe: bool,
}

impl Inference {
    /// Transcript steps reporting this inference to an agent standing at
    /// `observer`. Facts drawn from the observer's own clause are detections.
    pub fn steps(&self, observer: Position) -> ArrayVec<Action, 2> {
        let detected = self.source == observer;
        let mut steps = ArrayVec::new();

        let fact = match (self.hazard, self.fact, detected) {
            (_, Fact::Unknown, _) => return steps,
            (Hazard::Pit, Fact::Present, true) => Action::DetectPit,
            (Hazard::Pit, Fact::Present, false) => Action::InferPit,
            (Hazard::Pit, Fact::Absent, true) => Action::DetectNoPit,
            (Hazard::Pit, Fact::Absent, false) => Action::InferNotPit,
            (Hazard::Wumpus, Fact::Present, true) => Action::DetectWumpus,
            (Hazard::Wumpus, Fact::Present, false) => Action::InferWumpus,
            (Hazard::Wumpus, Fact::Absent, true) => Action::DetectNoWumpus,
            (Hazard::Wumpus, Fact::Absent, false) => Action::InferNotWumpus,
        };
        steps.push(fact);

        if self.now_safe {
            steps.push(if detected {
                Action::DetectSafe
            } else {
                Action::InferSafe
            });
        }
        steps
    }
}

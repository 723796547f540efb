use bitflags::bitflags;

use super::{Cave, CaveObject};
use crate::state::Position;

bitflags! {
    /// What the agent senses while standing in a cell.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Percepts: u8 {
        /// An orthogonal neighbour holds a pit.
        const BREEZE = 1 << 0;
        /// An orthogonal neighbour holds a live wumpus.
        const STENCH = 1 << 1;
        /// This cell holds gold.
        const GLITTER = 1 << 2;
    }
}

/// Read-only percept channel into the ground truth.
///
/// The solver observes the cave only through this trait, and only for cells
/// the agent has actually stood in.
pub trait PerceptOracle {
    fn size(&self) -> usize;

    fn percepts(&self, position: Position) -> Percepts;
}

/// Derives the percept set of `position` from the cave's current contents.
pub fn sense(cave: &Cave, position: Position) -> Percepts {
    let mut percepts = Percepts::empty();
    for neighbor in position.neighbors(cave.size()) {
        if cave.exists(CaveObject::Pit, neighbor) {
            percepts.insert(Percepts::BREEZE);
        }
        if cave.is_wumpus_alive(neighbor) {
            percepts.insert(Percepts::STENCH);
        }
    }
    if cave.exists(CaveObject::Gold, position) {
        percepts.insert(Percepts::GLITTER);
    }
    percepts
}

impl Cave {
    pub fn sense(&self, position: Position) -> Percepts {
        sense(self, position)
    }
}

impl PerceptOracle for Cave {
    fn size(&self) -> usize {
        Cave::size(self)
    }

    fn percepts(&self, position: Position) -> Percepts {
        sense(self, position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_pit_breezes_exactly_its_neighbours() {
        let pit = Position::new(0, 1);
        let cave = Cave::builder(4).pit(pit).build();

        let breezy: Vec<Position> = cave
            .cells()
            .map(|(position, _)| position)
            .filter(|&position| cave.sense(position).contains(Percepts::BREEZE))
            .collect();

        assert_eq!(
            breezy,
            vec![Position::new(0, 0), Position::new(0, 2), Position::new(1, 1)]
        );
    }

    #[test]
    fn stench_disappears_once_the_wumpus_dies() {
        let mut cave = Cave::builder(3).wumpus(Position::new(1, 1)).build();
        assert!(cave.sense(Position::new(0, 1)).contains(Percepts::STENCH));

        cave.kill_wumpus(Position::new(1, 1));
        assert!(!cave.sense(Position::new(0, 1)).contains(Percepts::STENCH));
    }

    #[test]
    fn glitter_only_in_the_gold_cell() {
        let cave = Cave::builder(2).gold(Position::new(1, 1)).build();
        assert_eq!(cave.sense(Position::new(1, 1)), Percepts::GLITTER);
        assert_eq!(cave.sense(Position::new(0, 1)), Percepts::empty());
    }
}

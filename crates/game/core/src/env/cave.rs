use bitflags::bitflags;

use crate::error::{ErrorSeverity, GameError};
use crate::state::Position;

bitflags! {
    /// Ground-truth contents of a single cave cell.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CellContents: u8 {
        const PIT = 1 << 0;
        const WUMPUS = 1 << 1;
        const GOLD = 1 << 2;
        /// The wumpus in this cell has been killed by the arrow.
        const SLAIN = 1 << 3;
    }
}

/// Object kinds that can be queried with [`Cave::exists`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CaveObject {
    Pit,
    Wumpus,
    Gold,
}

impl CaveObject {
    fn flag(self) -> CellContents {
        match self {
            CaveObject::Pit => CellContents::PIT,
            CaveObject::Wumpus => CellContents::WUMPUS,
            CaveObject::Gold => CellContents::GOLD,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CaveError {
    #[error("entry {entry} lies outside a {size}x{size} cave")]
    EntryOutOfBounds { entry: Position, size: usize },

    #[error("entry {entry} holds a pit or a wumpus")]
    HazardOnEntry { entry: Position },
}

impl GameError for CaveError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EntryOutOfBounds { .. } => "CAVE_ENTRY_OUT_OF_BOUNDS",
            Self::HazardOnEntry { .. } => "CAVE_HAZARD_ON_ENTRY",
        }
    }
}

/// Hidden N×N world the agent explores.
///
/// The cave is fixed once built. Only gold removal and wumpus kills mutate
/// it, and only the engine performs those.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cave {
    size: usize,
    cells: Vec<CellContents>,
    total_gold: u32,
}

impl Cave {
    pub fn builder(size: usize) -> CaveBuilder {
        CaveBuilder::new(size)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, position: Position) -> bool {
        position.in_bounds(self.size)
    }

    /// Raw contents of a cell.
    ///
    /// # Panics
    ///
    /// Panics when `position` lies outside the cave.
    pub fn contents(&self, position: Position) -> CellContents {
        self.cells[self.index(position)]
    }

    pub fn exists(&self, kind: CaveObject, position: Position) -> bool {
        self.contents(position).contains(kind.flag())
    }

    /// True when the cell holds a wumpus that has not been killed.
    pub fn is_wumpus_alive(&self, position: Position) -> bool {
        let cell = self.contents(position);
        cell.contains(CellContents::WUMPUS) && !cell.contains(CellContents::SLAIN)
    }

    /// Kills the wumpus at `position`. Returns false when there was no live wumpus.
    pub fn kill_wumpus(&mut self, position: Position) -> bool {
        if !self.is_wumpus_alive(position) {
            return false;
        }
        let index = self.index(position);
        self.cells[index].insert(CellContents::SLAIN);
        true
    }

    /// Removes the gold at `position`. Returns false when there was none.
    pub fn remove_gold(&mut self, position: Position) -> bool {
        let index = self.index(position);
        let cell = &mut self.cells[index];
        if !cell.contains(CellContents::GOLD) {
            return false;
        }
        cell.remove(CellContents::GOLD);
        true
    }

    /// Gold pieces placed when the cave was built.
    pub fn total_gold(&self) -> u32 {
        self.total_gold
    }

    pub fn remaining_gold(&self) -> u32 {
        self.cells
            .iter()
            .filter(|cell| cell.contains(CellContents::GOLD))
            .count() as u32
    }

    /// Iterates every cell with its contents in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, CellContents)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (Position::from_index(index, self.size), *cell))
    }

    /// True when a pit or a live wumpus would kill an agent entering `position`.
    pub fn is_deadly(&self, position: Position) -> bool {
        self.exists(CaveObject::Pit, position) || self.is_wumpus_alive(position)
    }

    /// Checks that `entry` is inside the cave and harmless to stand on.
    pub fn check_entry(&self, entry: Position) -> Result<(), CaveError> {
        if !self.contains(entry) {
            return Err(CaveError::EntryOutOfBounds {
                entry,
                size: self.size,
            });
        }
        if self.is_deadly(entry) {
            return Err(CaveError::HazardOnEntry { entry });
        }
        Ok(())
    }

    fn index(&self, position: Position) -> usize {
        assert!(
            self.contains(position),
            "position {position} outside {size}x{size} cave",
            size = self.size
        );
        position.index(self.size)
    }
}

/// Incremental construction of a [`Cave`].
#[derive(Clone, Debug)]
pub struct CaveBuilder {
    size: usize,
    cells: Vec<CellContents>,
}

impl CaveBuilder {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![CellContents::empty(); size * size],
        }
    }

    pub fn pit(self, position: Position) -> Self {
        self.with(position, CellContents::PIT)
    }

    pub fn wumpus(self, position: Position) -> Self {
        self.with(position, CellContents::WUMPUS)
    }

    pub fn gold(self, position: Position) -> Self {
        self.with(position, CellContents::GOLD)
    }

    /// Places `kind` at `position`. Placing the same kind twice is a no-op.
    pub fn place(self, kind: CaveObject, position: Position) -> Self {
        self.with(position, kind.flag())
    }

    pub fn build(self) -> Cave {
        let total_gold = self
            .cells
            .iter()
            .filter(|cell| cell.contains(CellContents::GOLD))
            .count() as u32;
        Cave {
            size: self.size,
            cells: self.cells,
            total_gold,
        }
    }

    fn with(mut self, position: Position, flag: CellContents) -> Self {
        assert!(
            position.in_bounds(self.size),
            "position {position} outside {size}x{size} cave",
            size = self.size
        );
        self.cells[position.index(self.size)].insert(flag);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn killing_and_grabbing_only_succeed_once() {
        let mut cave = Cave::builder(3)
            .wumpus(Position::new(0, 1))
            .gold(Position::new(0, 1))
            .gold(Position::new(2, 2))
            .build();

        assert_eq!(cave.total_gold(), 2);
        assert!(cave.kill_wumpus(Position::new(0, 1)));
        assert!(!cave.kill_wumpus(Position::new(0, 1)));
        assert!(cave.exists(CaveObject::Wumpus, Position::new(0, 1)));
        assert!(!cave.is_wumpus_alive(Position::new(0, 1)));

        assert!(cave.remove_gold(Position::new(2, 2)));
        assert!(!cave.remove_gold(Position::new(2, 2)));
        assert_eq!(cave.remaining_gold(), 1);
        assert_eq!(cave.total_gold(), 2);
    }

    #[test]
    fn entry_must_be_in_bounds_and_harmless() {
        let cave = Cave::builder(2).pit(Position::new(1, 0)).build();
        assert_eq!(
            cave.check_entry(Position::new(1, 0)),
            Err(CaveError::HazardOnEntry {
                entry: Position::new(1, 0)
            })
        );
        assert!(matches!(
            cave.check_entry(Position::new(2, 0)),
            Err(CaveError::EntryOutOfBounds { .. })
        ));
        assert!(cave.check_entry(Position::new(0, 0)).is_ok());
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn out_of_range_queries_panic() {
        let cave = Cave::builder(2).build();
        cave.exists(CaveObject::Pit, Position::new(-1, 0));
    }
}

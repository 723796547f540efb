use std::fmt;

use super::Position;

/// What the agent believes about a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum CellBelief {
    #[default]
    Unknown,
    Safe,
    Visited,
    SuspectedPit,
    SuspectedWumpus,
    ConfirmedDangerous,
}

impl CellBelief {
    /// Single-character glyph used by the text rendering of a [`BeliefMap`].
    pub fn glyph(self) -> char {
        match self {
            CellBelief::Unknown => '?',
            CellBelief::Safe => 's',
            CellBelief::Visited => 'v',
            CellBelief::SuspectedPit => 'p',
            CellBelief::SuspectedWumpus => 'w',
            CellBelief::ConfirmedDangerous => 'X',
        }
    }
}

/// Snapshot of the agent's beliefs for every cell, handed to the display layer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BeliefMap {
    size: usize,
    cells: Vec<CellBelief>,
}

impl BeliefMap {
    /// Builds a map by asking `belief` about every cell in row-major order.
    pub fn from_fn(size: usize, mut belief: impl FnMut(Position) -> CellBelief) -> Self {
        let cells = (0..size * size)
            .map(|index| belief(Position::from_index(index, size)))
            .collect();
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, position: Position) -> Option<CellBelief> {
        position
            .in_bounds(self.size)
            .then(|| self.cells[position.index(self.size)])
    }

    /// Iterates `(position, belief)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, CellBelief)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, belief)| (Position::from_index(index, self.size), *belief))
    }

    pub fn count(&self, belief: CellBelief) -> usize {
        self.cells.iter().filter(|&&cell| cell == belief).count()
    }
}

impl fmt::Display for BeliefMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size.max(1)) {
            let line: String = row.iter().map(|belief| belief.glyph()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_line_per_row() {
        let map = BeliefMap::from_fn(2, |position| {
            if position == Position::new(1, 0) {
                CellBelief::Visited
            } else {
                CellBelief::Unknown
            }
        });
        assert_eq!(map.to_string(), "??\nv?\n");
        assert_eq!(map.get(Position::new(1, 0)), Some(CellBelief::Visited));
        assert_eq!(map.get(Position::new(2, 0)), None);
    }
}

use std::fmt;

use arrayvec::ArrayVec;

/// Discrete cave cell expressed as `(row, col)`; row 0 is the top row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Bottom-left corner of a cave with the given side length.
    pub const fn bottom_left(size: usize) -> Self {
        Self::new(size as i32 - 1, 0)
    }

    /// Returns the adjacent position in `direction`, which may lie outside the cave.
    pub fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self::new(self.row + dr, self.col + dc)
    }

    pub fn in_bounds(self, size: usize) -> bool {
        self.row >= 0 && self.col >= 0 && (self.row as usize) < size && (self.col as usize) < size
    }

    /// In-bounds orthogonal neighbours in UP, DOWN, LEFT, RIGHT order.
    pub fn neighbors(self, size: usize) -> ArrayVec<Position, 4> {
        Direction::ALL
            .iter()
            .map(|&direction| self.step(direction))
            .filter(|position| position.in_bounds(size))
            .collect()
    }

    /// Every cell of a cave of the given side length in row-major order.
    pub fn all(size: usize) -> impl Iterator<Item = Position> {
        (0..size * size).map(move |index| Self::from_index(index, size))
    }

    pub fn manhattan(self, other: Position) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Direction of a one-step move from `self` to `other`, if they are adjacent.
    pub fn direction_to(self, other: Position) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&direction| self.step(direction) == other)
    }

    /// Direction along which `other` lies on the same row or column.
    pub fn line_to(self, other: Position) -> Option<Direction> {
        match (self.row == other.row, self.col == other.col) {
            (true, true) => None,
            (true, false) if other.col < self.col => Some(Direction::Left),
            (true, false) => Some(Direction::Right),
            (false, true) if other.row < self.row => Some(Direction::Up),
            (false, true) => Some(Direction::Down),
            (false, false) => None,
        }
    }

    /// Row-major index into a cave of the given side length. Only meaningful
    /// for in-bounds positions.
    pub fn index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    pub fn from_index(index: usize, size: usize) -> Self {
        Self::new((index / size) as i32, (index % size) as i32)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Facing of the agent and direction of travel for moves and arrows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Fixed neighbour-scan order used everywhere ties must be broken.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the `(row, col)` offset of one step in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "UP" => Ok(Direction::Up),
            "DOWN" => Ok(Direction::Down),
            "LEFT" => Ok(Direction::Left),
            "RIGHT" => Ok(Direction::Right),
            _ => Err(UnknownDirection(s.to_owned())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction '{0}' (expected UP, DOWN, LEFT or RIGHT)")]
pub struct UnknownDirection(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_follow_scan_order_and_respect_bounds() {
        let inner = Position::new(1, 1).neighbors(3);
        assert_eq!(
            inner.as_slice(),
            &[
                Position::new(0, 1),
                Position::new(2, 1),
                Position::new(1, 0),
                Position::new(1, 2),
            ]
        );

        let corner = Position::bottom_left(3).neighbors(3);
        assert_eq!(corner.as_slice(), &[Position::new(1, 0), Position::new(2, 1)]);
    }

    #[test]
    fn line_to_only_reports_shared_rows_and_columns() {
        let origin = Position::new(3, 2);
        assert_eq!(origin.line_to(Position::new(3, 5)), Some(Direction::Right));
        assert_eq!(origin.line_to(Position::new(0, 2)), Some(Direction::Up));
        assert_eq!(origin.line_to(Position::new(4, 3)), None);
        assert_eq!(origin.line_to(origin), None);
    }

    #[test]
    fn direction_parses_case_insensitively() {
        assert_eq!("left".parse::<Direction>(), Ok(Direction::Left));
        assert!("north".parse::<Direction>().is_err());
    }
}

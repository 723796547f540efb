//! Board files: a cave plus the cell the agent enters from.

mod error;
mod parse;

pub use error::BoardError;

use std::fmt;

use wumpus_core::{Cave, CaveObject, Percepts, Position};

/// On-disk layout of a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoardFormat {
    /// Size header, then '.'-separated tokens that may combine letters.
    Dotted,
    /// One character per cell, no header. Holds at most one object per cell.
    Compact,
}

impl BoardFormat {
    /// Guesses the layout from the first non-blank line: a leading digit
    /// can only be a size header.
    pub fn detect(first_line: &str) -> Self {
        if first_line.starts_with(|c: char| c.is_ascii_digit()) {
            BoardFormat::Dotted
        } else {
            BoardFormat::Compact
        }
    }
}

/// A validated cave and its entry cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cave: Cave,
    entry: Position,
}

impl Board {
    /// Pairs a cave with its entry, rejecting entries that are out of bounds
    /// or hold a hazard.
    pub fn new(cave: Cave, entry: Position) -> Result<Self, BoardError> {
        cave.check_entry(entry)?;
        Ok(Self { cave, entry })
    }

    /// Parses either layout. Without an `A` token the entry is the
    /// bottom-left cell.
    pub fn parse(text: &str) -> Result<Self, BoardError> {
        parse::parse(text)
    }

    pub fn cave(&self) -> &Cave {
        &self.cave
    }

    pub fn entry(&self) -> Position {
        self.entry
    }

    pub fn size(&self) -> usize {
        self.cave.size()
    }

    pub fn into_parts(self) -> (Cave, Position) {
        (self.cave, self.entry)
    }

    /// Renders the board in `format`.
    ///
    /// The dotted layout is lossless and appends `B`/`S` to every cell next
    /// to a pit or live wumpus. The compact layout keeps only the first of
    /// `A`, `P`, `W`, `G` present in each cell.
    pub fn render(&self, format: BoardFormat) -> String {
        match format {
            BoardFormat::Dotted => self.to_string(),
            BoardFormat::Compact => {
                let mut out = String::new();
                for row in self.rows() {
                    for position in row {
                        let glyph = self.letters(position).chars().next().unwrap_or('-');
                        out.push(glyph);
                    }
                    out.push('\n');
                }
                out
            }
        }
    }

    fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = Position>> {
        let size = self.size() as i32;
        (0..size).map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// Object letters of a cell, in `A`, `P`, `W`, `G` order.
    fn letters(&self, position: Position) -> String {
        let mut letters = String::new();
        if position == self.entry {
            letters.push('A');
        }
        for (object, letter) in [
            (CaveObject::Pit, 'P'),
            (CaveObject::Wumpus, 'W'),
            (CaveObject::Gold, 'G'),
        ] {
            if self.cave.exists(object, position) {
                letters.push(letter);
            }
        }
        letters
    }

    fn token(&self, position: Position) -> String {
        let mut token = self.letters(position);
        if token.is_empty() {
            token.push('-');
        }
        let percepts = self.cave.sense(position);
        if percepts.contains(Percepts::BREEZE) {
            token.push('B');
        }
        if percepts.contains(Percepts::STENCH) {
            token.push('S');
        }
        token
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.size())?;
        for row in self.rows() {
            let tokens: Vec<String> = row.map(|position| self.token(position)).collect();
            writeln!(f, "{}", tokens.join("."))?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::parse(s)
    }
}

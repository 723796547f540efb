//! Text layouts of a board.
//!
//! Dotted layout, with a size header and '.'-separated tokens:
//!
//! ```text
//! 4
//! G.-.-.-
//! -.-.B.-
//! -.B.P.B
//! A.-.B.-
//! ```
//!
//! Compact layout, one character per cell and no header:
//!
//! ```text
//! G---
//! ----
//! --P-
//! A---
//! ```
//!
//! `B` and `S` mark percepts implied by neighbouring hazards. They are
//! accepted anywhere and ignored, since percepts are always derived from
//! the hazards themselves.

use wumpus_core::{Cave, CaveBuilder, CaveObject, Position};

use super::{Board, BoardError, BoardFormat};

/// What a single token places on its cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Token {
    agent: bool,
    pit: bool,
    wumpus: bool,
    gold: bool,
}

impl Token {
    fn parse(text: &str, row: usize, col: usize) -> Result<Self, BoardError> {
        let unknown = || BoardError::UnknownToken {
            row,
            col,
            token: text.to_owned(),
        };
        if text.is_empty() {
            return Err(unknown());
        }

        let mut token = Token::default();
        for glyph in text.chars() {
            match glyph {
                'A' => token.agent = true,
                'P' => token.pit = true,
                'W' => token.wumpus = true,
                'G' => token.gold = true,
                '-' | 'B' | 'S' => {}
                _ => return Err(unknown()),
            }
        }
        Ok(token)
    }

    fn objects(self) -> impl Iterator<Item = CaveObject> {
        [
            (self.pit, CaveObject::Pit),
            (self.wumpus, CaveObject::Wumpus),
            (self.gold, CaveObject::Gold),
        ]
        .into_iter()
        .filter_map(|(present, object)| present.then_some(object))
    }
}

/// Non-blank lines with surrounding whitespace trimmed.
fn content_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

pub(super) fn parse(text: &str) -> Result<Board, BoardError> {
    let lines = content_lines(text);
    let first = lines.first().ok_or(BoardError::Empty)?;

    match BoardFormat::detect(first) {
        BoardFormat::Dotted => {
            let size = first
                .parse::<usize>()
                .ok()
                .filter(|&size| size > 0)
                .ok_or_else(|| BoardError::BadSizeHeader {
                    header: (*first).to_owned(),
                })?;
            let rows = &lines[1..];
            check_row_count(size, rows.len())?;
            build(size, rows.iter().map(|line| line.split('.').collect()))
        }
        BoardFormat::Compact => {
            let size = lines.len();
            build(
                size,
                lines.iter().map(|line| {
                    line.char_indices()
                        .map(|(start, glyph)| &line[start..start + glyph.len_utf8()])
                        .collect()
                }),
            )
        }
    }
}

fn check_row_count(expected: usize, found: usize) -> Result<(), BoardError> {
    if expected != found {
        return Err(BoardError::RowCount { expected, found });
    }
    Ok(())
}

fn build<'a>(
    size: usize,
    rows: impl Iterator<Item = Vec<&'a str>>,
) -> Result<Board, BoardError> {
    let mut builder = CaveBuilder::new(size);
    let mut agent: Option<Position> = None;

    for (row, tokens) in rows.enumerate() {
        if tokens.len() != size {
            return Err(BoardError::ColumnCount {
                row,
                expected: size,
                found: tokens.len(),
            });
        }
        for (col, text) in tokens.into_iter().enumerate() {
            let token = Token::parse(text, row, col)?;
            let position = Position::new(row as i32, col as i32);
            if token.agent {
                if let Some(first) = agent {
                    return Err(BoardError::MultipleAgents {
                        first,
                        second: position,
                    });
                }
                agent = Some(position);
            }
            for object in token.objects() {
                builder = builder.place(object, position);
            }
        }
    }

    let cave: Cave = builder.build();
    let entry = agent.unwrap_or_else(|| Position::bottom_left(size));
    Board::new(cave, entry)
}

//! Board file loader.

use std::path::Path;

use anyhow::Context;

use crate::board::{Board, BoardFormat};
use crate::loaders::{LoadResult, read_file, write_file};

/// Loader for board files in either layout.
pub struct BoardLoader;

impl BoardLoader {
    /// Load and validate a board.
    pub fn load(path: &Path) -> LoadResult<Board> {
        let content = read_file(path)?;
        Board::parse(&content).with_context(|| format!("Invalid board file {}", path.display()))
    }

    /// Save a board in `format`.
    pub fn save(path: &Path, board: &Board, format: BoardFormat) -> LoadResult<()> {
        write_file(path, &board.render(format))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use wumpus_core::Position;

    #[test]
    fn saved_board_loads_back() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("cave.txt");
        let board = Board::parse("3\n-.W.-\n-.-.G\nA.-.P\n").expect("valid board");

        BoardLoader::save(&path, &board, BoardFormat::Dotted).expect("save board");
        let loaded = BoardLoader::load(&path).expect("load board");

        assert_eq!(loaded, board);
        assert_eq!(loaded.entry(), Position::new(2, 0));
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn errors_name_the_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("broken.txt");
        fs::write(&path, "2\n-.-\n").expect("write fixture");

        let error = BoardLoader::load(&path).expect_err("one row is missing");
        let message = format!("{error:#}");
        assert!(message.contains("broken.txt"));
        assert!(message.contains("expected 2 rows, found 1"));

        let missing = BoardLoader::load(&dir.path().join("absent.txt"));
        assert!(missing.is_err());
    }
}

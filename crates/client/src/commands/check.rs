//! Validate a board and print it with percept letters.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use wumpus_content::{Board, BoardLoader};
use wumpus_core::CaveObject;

/// Validate a board and print it with implied percepts
#[derive(Clone, Debug, Parser)]
pub struct Check {
    /// Board file (dotted or compact layout)
    #[arg(value_name = "BOARD")]
    pub board: PathBuf,
}

impl Check {
    pub fn execute(self) -> Result<()> {
        let board = self.run()?;
        let cave = board.cave();
        let count = |object| {
            cave.cells()
                .filter(|&(position, _)| cave.exists(object, position))
                .count()
        };

        println!("{} {}", style("Board:").bold().cyan(), self.board.display());
        println!("  Size:      {0}x{0}", board.size());
        println!("  Entry:     {}", board.entry());
        println!("  Pits:      {}", count(CaveObject::Pit));
        println!("  Wumpuses:  {}", count(CaveObject::Wumpus));
        println!("  Gold:      {}", cave.total_gold());
        println!();
        print!("{board}");
        Ok(())
    }

    pub fn run(&self) -> Result<Board> {
        BoardLoader::load(&self.board)
    }
}

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use std::io::{stdin, stdout, Write};

use connect4_core::board::{Board, Cell};
use connect4_core::minimax::Minimax;
use connect4_core::WIDTH;

/// The ways a player can pick the next column
pub enum Strategy {
    Human,
    Random(StdRng),
    Search(Minimax),
}

impl Strategy {
    pub fn random() -> Self {
        Strategy::Random(StdRng::from_os_rng())
    }

    pub fn search(color: Cell) -> Self {
        Strategy::Search(Minimax::new(color))
    }

    /// Picks a column that is in range and not complete
    pub fn choose_column(&mut self, board: &mut Board) -> Result<usize> {
        match self {
            Strategy::Human => read_column(board),
            Strategy::Random(rng) => {
                let columns = board.uncompleted_columns();
                let column = columns[rng.random_range(0..columns.len())];
                println!("Random move: column {}", column + 1);
                Ok(column)
            }
            Strategy::Search(search) => {
                let column = search.choose_column(board);
                println!("AI move: column {}", column + 1);
                Ok(column)
            }
        }
    }
}

fn read_column(board: &Board) -> Result<usize> {
    let stdin = stdin();
    loop {
        print!("Enter a column to drop a token [1-{}]: ", WIDTH);
        stdout().flush()?;

        let mut buffer = String::new();
        stdin.read_line(&mut buffer)?;

        let column = match buffer.trim().parse::<usize>() {
            Ok(number @ 1..=WIDTH) => number - 1,
            _ => {
                println!("Invalid column!!! Values [1-{}]", WIDTH);
                continue;
            }
        };
        if board.is_column_complete(column) {
            println!("Invalid column!!! It's completed");
            continue;
        }
        return Ok(column);
    }
}

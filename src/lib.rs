//! A playable implementation of the board game 'Connect 4'
//!
//! The board tracks token gravity and detects wins incrementally around
//! the most recently dropped token. The computer opponent explores every
//! play and counter-play to a fixed depth and picks the best column.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_core::board::{Board, Cell};
//! use connect4_core::minimax::Minimax;
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // the second player threatens to connect four along the bottom row
//! let mut board = Board::from_moves("515273")?;
//! let mut search = Minimax::new(Cell::PlayerOne);
//!
//! // the only move that does not lose on the spot is the block
//! assert_eq!(search.choose_column(&mut board), 3);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod coordinate;

pub mod line;

pub mod board;

pub mod minimax;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of aligned tokens that wins the game
pub const LINE_LENGTH: usize = 4;

// ensure that a winning line fits on the board along every axis
const_assert!(LINE_LENGTH <= WIDTH && LINE_LENGTH <= HEIGHT);

use anyhow::{anyhow, Result};

use std::fmt;

use crate::coordinate::{Coordinate, Direction};
use crate::line::Line;
use crate::{HEIGHT, LINE_LENGTH, WIDTH};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }

    /// The other player's mark; `Empty` has no opposite and maps to itself
    pub fn opposite(self) -> Cell {
        match self {
            Cell::PlayerOne => Cell::PlayerTwo,
            Cell::PlayerTwo => Cell::PlayerOne,
            Cell::Empty => Cell::Empty,
        }
    }

    fn code(self) -> char {
        match self {
            Cell::PlayerOne => 'X',
            Cell::PlayerTwo => 'O',
            Cell::Empty => '.',
        }
    }
}

/// The 6x7 grid of token occupancy
///
/// Tokens obey gravity: each column's occupied cells form a contiguous
/// run starting at row 0. Win detection is incremental, anchored at the
/// most recent drop: a new alignment must contain the newest token, so
/// only the windows through that cell are ever tested.
#[derive(Clone, Eq, PartialEq)]
pub struct Board {
    cells: [Cell; WIDTH * HEIGHT], // cells are stored left-to-right, bottom-to-top
    last_drop: Option<Coordinate>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; WIDTH * HEIGHT],
            last_drop: None,
        }
    }

    /// Builds a board by replaying a string of one-indexed columns,
    /// alternating colors starting with `PlayerOne`
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();
        let mut cell = Cell::PlayerOne;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    board.drop_token_checked(column - 1, cell)?;
                    cell = cell.opposite();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    /// Sets every cell to `Empty` and forgets the last drop
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; WIDTH * HEIGHT];
        self.last_drop = None;
    }

    /// Drops a token into the lowest empty cell of `column` and returns
    /// where it landed
    ///
    /// The column must be in range and not complete, and `cell` must be a
    /// player mark; violations are programmer errors and panic. External
    /// input goes through [`drop_token_checked`](Self::drop_token_checked).
    pub fn drop_token(&mut self, column: usize, cell: Cell) -> Coordinate {
        assert!(column < WIDTH, "column {} out of range", column);
        assert!(!self.is_column_complete(column), "column {} is full", column);
        assert!(!cell.is_empty(), "cannot drop an empty cell");

        let mut coordinate = Coordinate::new(0, column as i32);
        while !self.is_vacant(coordinate) {
            coordinate = Direction::North.next(coordinate);
        }
        self.set_cell(coordinate, cell);
        self.last_drop = Some(coordinate);
        coordinate
    }

    /// Validating wrapper around [`drop_token`](Self::drop_token) for
    /// externally supplied columns
    pub fn drop_token_checked(&mut self, column: usize, cell: Cell) -> Result<Coordinate> {
        if column >= WIDTH {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column + 1,
                WIDTH
            ));
        }
        if self.is_column_complete(column) {
            return Err(anyhow!("Invalid move, column {} full", column + 1));
        }
        Ok(self.drop_token(column, cell))
    }

    /// Empties the topmost occupied cell of `column`
    ///
    /// Intended only to reverse the most recent drop in that column; the
    /// search undoes its tentative drops in exact reverse order. The
    /// column must be in range and non-empty. If the removed cell was the
    /// win-check anchor the anchor is cleared, so a subsequent
    /// [`is_winner`](Self::is_winner) answers as it would before any drop.
    pub fn remove_top(&mut self, column: usize) {
        assert!(column < WIDTH, "column {} out of range", column);
        assert!(!self.is_column_empty(column), "column {} is empty", column);

        let top = self.top(column);
        self.set_cell(top, Cell::Empty);
        if self.last_drop == Some(top) {
            self.last_drop = None;
        }
    }

    fn set_cell(&mut self, coordinate: Coordinate, cell: Cell) {
        self.cells[Self::index(coordinate)] = cell;
    }

    pub fn cell(&self, coordinate: Coordinate) -> Cell {
        self.cells[Self::index(coordinate)]
    }

    fn index(coordinate: Coordinate) -> usize {
        debug_assert!(coordinate.is_valid());
        coordinate.column as usize + WIDTH * coordinate.row as usize
    }

    pub fn is_occupied(&self, coordinate: Coordinate, cell: Cell) -> bool {
        self.cell(coordinate) == cell
    }

    pub fn is_vacant(&self, coordinate: Coordinate) -> bool {
        self.is_occupied(coordinate, Cell::Empty)
    }

    /// True iff the column's top cell is occupied
    pub fn is_column_complete(&self, column: usize) -> bool {
        !self.is_vacant(Coordinate::new(HEIGHT as i32 - 1, column as i32))
    }

    /// True iff every column is complete
    pub fn is_complete(&self) -> bool {
        (0..WIDTH).all(|column| self.is_column_complete(column))
    }

    /// True iff the column's bottom cell is empty
    pub fn is_column_empty(&self, column: usize) -> bool {
        self.is_vacant(Coordinate::new(0, column as i32))
    }

    /// True iff every column is empty
    pub fn is_empty(&self) -> bool {
        (0..WIDTH).all(|column| self.is_column_empty(column))
    }

    /// The columns that can still accept a drop, in ascending order
    ///
    /// The order fixes the search's branching order and therefore which
    /// column wins ties.
    pub fn uncompleted_columns(&self) -> Vec<usize> {
        (0..WIDTH)
            .filter(|&column| !self.is_column_complete(column))
            .collect()
    }

    /// The topmost occupied cell of `column`, which must be non-empty
    pub fn top(&self, column: usize) -> Coordinate {
        assert!(!self.is_column_empty(column), "column {} is empty", column);

        let mut coordinate = Coordinate::new(HEIGHT as i32 - 1, column as i32);
        while self.is_vacant(coordinate) {
            coordinate = Direction::South.next(coordinate);
        }
        coordinate
    }

    pub fn is_top(&self, column: usize, cell: Cell) -> bool {
        if self.is_column_empty(column) {
            return false;
        }
        self.is_occupied(self.top(column), cell)
    }

    /// True iff the most recent drop completed an alignment
    ///
    /// Tests the four window positions that could contain the last-dropped
    /// cell along each of the four line axes. False before any drop.
    pub fn is_winner(&self) -> bool {
        let last_drop = match self.last_drop {
            Some(coordinate) => coordinate,
            None => return false,
        };
        for direction in Direction::axes().iter() {
            let mut line = Line::new(last_drop, *direction);
            for _ in 0..LINE_LENGTH {
                if self.is_connect_four(&line) {
                    return true;
                }
                line.shift();
            }
        }
        false
    }

    /// The color of the winning alignment, if the most recent drop made one
    pub fn winner(&self) -> Option<Cell> {
        if self.is_winner() {
            self.last_drop.map(|coordinate| self.cell(coordinate))
        } else {
            None
        }
    }

    // pairwise equality across the window; callers anchor the window at an
    // occupied cell, so an all-empty window is never tested
    fn is_connect_four(&self, line: &Line) -> bool {
        let coordinates = line.coordinates();
        for (i, coordinate) in coordinates.iter().enumerate() {
            if !coordinate.is_valid() {
                return false;
            }
            if i > 0 && self.cell(coordinates[i - 1]) != self.cell(*coordinate) {
                return false;
            }
        }
        true
    }

    pub fn is_finished(&self) -> bool {
        self.is_complete() || self.is_winner()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..HEIGHT as i32).rev() {
            for column in 0..WIDTH as i32 {
                write!(f, "{}", self.cell(Coordinate::new(row, column)).code())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

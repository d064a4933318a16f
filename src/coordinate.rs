use crate::{HEIGHT, WIDTH};

/// A position on (or off) the board grid
///
/// Row 0 is the bottom of the board, column 0 its left edge. Coordinates
/// are signed so that sliding a window can step off the grid; `is_valid`
/// reports whether a coordinate is on the board.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Coordinate {
    pub row: i32,
    pub column: i32,
}

impl Coordinate {
    pub const ORIGIN: Coordinate = Coordinate::new(0, 0);

    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Returns the component-wise sum of the two coordinates, without
    /// any bounds check
    pub fn shifted(self, other: Coordinate) -> Coordinate {
        Coordinate::new(self.row + other.row, self.column + other.column)
    }

    pub fn is_valid(self) -> bool {
        Self::is_row_valid(self.row) && Self::is_column_valid(self.column)
    }

    pub fn is_column_valid(column: i32) -> bool {
        0 <= column && column < WIDTH as i32
    }

    fn is_row_valid(row: i32) -> bool {
        0 <= row && row < HEIGHT as i32
    }
}

/// The eight compass unit vectors
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const fn values() -> [Direction; 8] {
        [
            Direction::North,
            Direction::NorthEast,
            Direction::East,
            Direction::SouthEast,
            Direction::South,
            Direction::SouthWest,
            Direction::West,
            Direction::NorthWest,
        ]
    }

    /// The four directions spanning a half circle, one per line axis
    /// (vertical, both diagonals, horizontal); the remaining axes are
    /// their opposites
    pub const fn axes() -> [Direction; 4] {
        [
            Direction::North,
            Direction::NorthEast,
            Direction::East,
            Direction::SouthEast,
        ]
    }

    pub const fn delta(self) -> Coordinate {
        match self {
            Direction::North => Coordinate::new(1, 0),
            Direction::NorthEast => Coordinate::new(1, 1),
            Direction::East => Coordinate::new(0, 1),
            Direction::SouthEast => Coordinate::new(-1, 1),
            Direction::South => Coordinate::new(-1, 0),
            Direction::SouthWest => Coordinate::new(-1, -1),
            Direction::West => Coordinate::new(0, -1),
            Direction::NorthWest => Coordinate::new(1, -1),
        }
    }

    /// Returns the direction whose delta cancels this one's
    ///
    /// Found by scanning the set of directions, which is closed under
    /// negation.
    pub fn opposite(self) -> Direction {
        *Direction::values()
            .iter()
            .find(|direction| direction.delta().shifted(self.delta()) == Coordinate::ORIGIN)
            .unwrap()
    }

    /// Returns `coordinate` shifted one step along this direction
    pub fn next(self, coordinate: Coordinate) -> Coordinate {
        coordinate.shifted(self.delta())
    }
}

//! An agent to play Connect 4 with an exhaustive depth-limited game tree search

use rayon::prelude::*;

use crate::board::{Board, Cell};

/// The number of plies explored below each candidate column
pub const MAX_PLIES: usize = 4;

/// Score of a position won by the searching player
pub const WIN_SCORE: i32 = 1;
/// Score of a position won by the opponent
pub const LOSS_SCORE: i32 = -1;
/// Score of a drawn position, or of an unresolved one at the ply budget
pub const NEUTRAL_SCORE: i32 = 0;

/// Applies a tentative drop, evaluates the position, and removes the
/// token again on every exit path, so the board reads unchanged to the
/// caller
fn with_drop<T>(
    board: &mut Board,
    column: usize,
    cell: Cell,
    evaluate: impl FnOnce(&mut Board) -> T,
) -> T {
    board.drop_token(column, cell);
    let result = evaluate(board);
    board.remove_top(column);
    result
}

/// An agent choosing columns by brute-force minimax
///
/// # Notes
/// Every reachable position within the ply budget is visited; there is no
/// pruning, so the worst case is 7 branches per ply. The search mutates
/// the board it is handed and undoes each drop in exact reverse order,
/// leaving the board in its prior state.
///
/// # Position Scoring
/// A position at the cutoff scores +1 if its final drop connected four for
/// the searching color, -1 if it connected four for the opponent, and 0
/// otherwise, for draws and positions still open at the ply budget alike.
pub struct Minimax {
    color: Cell,
    plies: usize,

    /// The number of positions evaluated by this `Minimax` so far (for diagnostics only)
    pub node_count: usize,
}

impl Minimax {
    /// Creates a searcher for `color` with the standard ply budget
    pub fn new(color: Cell) -> Self {
        Self::with_plies(color, MAX_PLIES)
    }

    /// Creates a searcher for `color` with an explicit ply budget
    pub fn with_plies(color: Cell, plies: usize) -> Self {
        assert!(!color.is_empty(), "the searching color must be a player mark");
        Self {
            color,
            plies,
            node_count: 0,
        }
    }

    /// Chooses the best column for the searching color
    ///
    /// Candidates are explored in ascending column order and ties keep the
    /// earliest column, so repeated calls on the same position return the
    /// same answer. The board must have at least one uncompleted column.
    pub fn choose_column(&mut self, board: &mut Board) -> usize {
        let columns = board.uncompleted_columns();
        assert!(!columns.is_empty(), "no column left to play");

        let mut best_column = columns[0];
        let mut best_score = LOSS_SCORE;
        for &column in columns.iter() {
            let score = with_drop(board, column, self.color, |board| self.min_score(board, 0));
            if score > best_score {
                best_score = score;
                best_column = column;
            }
        }
        best_column
    }

    /// Explores the top-level candidates in parallel
    ///
    /// Each worker clones the board before mutating it; the drop/undo
    /// protocol is not safe for concurrent sharing. Results are reduced in
    /// ascending column order, so ties break exactly as in
    /// [`choose_column`](Self::choose_column).
    pub fn choose_column_parallel(&mut self, board: &Board) -> usize {
        let columns = board.uncompleted_columns();
        assert!(!columns.is_empty(), "no column left to play");

        let (color, plies) = (self.color, self.plies);
        let results: Vec<(i32, usize)> = columns
            .par_iter()
            .map(|&column| {
                let mut scratch = board.clone();
                let mut search = Minimax::with_plies(color, plies);
                let score = with_drop(&mut scratch, column, color, |board| {
                    search.min_score(board, 0)
                });
                (score, search.node_count)
            })
            .collect();

        let mut best_column = columns[0];
        let mut best_score = LOSS_SCORE;
        for (&column, &(score, nodes)) in columns.iter().zip(results.iter()) {
            self.node_count += nodes;
            if score > best_score {
                best_score = score;
                best_column = column;
            }
        }
        best_column
    }

    // the opponent just has to spoil: keep the minimum over the searching
    // player's replies
    fn min_score(&mut self, board: &mut Board, plies: usize) -> i32 {
        self.node_count += 1;
        if self.is_cutoff(board, plies) {
            return self.terminal_score(board);
        }
        let mut minimum = WIN_SCORE;
        for column in board.uncompleted_columns() {
            let score = with_drop(board, column, self.color.opposite(), |board| {
                self.max_score(board, plies + 1)
            });
            if score < minimum {
                minimum = score;
            }
        }
        minimum
    }

    fn max_score(&mut self, board: &mut Board, plies: usize) -> i32 {
        self.node_count += 1;
        if self.is_cutoff(board, plies) {
            return self.terminal_score(board);
        }
        let mut maximum = LOSS_SCORE;
        for column in board.uncompleted_columns() {
            let score = with_drop(board, column, self.color, |board| {
                self.min_score(board, plies + 1)
            });
            if score > maximum {
                maximum = score;
            }
        }
        maximum
    }

    fn is_cutoff(&self, board: &Board, plies: usize) -> bool {
        plies == self.plies || board.is_finished()
    }

    fn terminal_score(&self, board: &Board) -> i32 {
        match board.winner() {
            Some(winner) if winner == self.color => WIN_SCORE,
            Some(_) => LOSS_SCORE,
            None => NEUTRAL_SCORE,
        }
    }
}

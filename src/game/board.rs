//! Board storage and move application.

use super::types::{Move, MoveError, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Columns and rows of the grid.
pub const SIZE: u8 = 3;

/// Total moves available in a session.
///
/// One fewer than the number of squares: the budget caps a game at four
/// rounds, so one square always stays open.
pub const MOVE_BUDGET: u8 = 8;

/// The 3×3 board plus the remaining-move counter.
///
/// The grid is indexed `grid[col][row]`; every scan in the crate walks it
/// column-major (column outer, row inner), which fixes tie-breaking in the
/// search and the winner scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    grid: [[Square; SIZE as usize]; SIZE as usize],
    moves_remaining: u8,
}

impl Board {
    /// Creates a fresh board: all squares empty, full move budget.
    pub fn new() -> Self {
        Self {
            grid: [[Square::Empty; SIZE as usize]; SIZE as usize],
            moves_remaining: MOVE_BUDGET,
        }
    }

    /// Returns the square at (col, row), or `Empty` for any out-of-range
    /// coordinate.
    ///
    /// Total on all inputs: line detection deliberately samples positions
    /// off the edge of the grid and relies on them reading as "no match".
    pub fn get(&self, col: i32, row: i32) -> Square {
        if (0..SIZE as i32).contains(&col) && (0..SIZE as i32).contains(&row) {
            self.grid[col as usize][row as usize]
        } else {
            Square::Empty
        }
    }

    /// Checks whether the in-range square (col, row) is empty.
    pub fn is_empty(&self, col: u8, row: u8) -> bool {
        self.get(col as i32, row as i32).is_empty()
    }

    /// Places `player`'s mark at (col, row) without validation.
    ///
    /// Callers must have verified that the coordinate is in range and the
    /// square is empty; use [`Board::apply_move`] for the validated path.
    /// The move counter is untouched, so the search can pair this with
    /// [`Board::clear`] to backtrack.
    pub fn set(&mut self, col: u8, row: u8, player: Player) {
        self.grid[col as usize][row as usize] = Square::Taken(player);
    }

    /// Resets the square at (col, row) to empty without touching the move
    /// counter. Backtracking counterpart of [`Board::set`].
    pub fn clear(&mut self, col: u8, row: u8) {
        self.grid[col as usize][row as usize] = Square::Empty;
    }

    /// Returns the number of moves left in the session.
    pub fn moves_remaining(&self) -> u8 {
        self.moves_remaining
    }

    /// Validates and applies a move, consuming one unit of the move budget.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] or [`MoveError::SquareOccupied`]
    /// without mutating any state.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        if mv.col >= SIZE || mv.row >= SIZE {
            return Err(MoveError::OutOfRange(mv.col, mv.row));
        }
        if !self.is_empty(mv.col, mv.row) {
            return Err(MoveError::SquareOccupied(mv.col, mv.row));
        }
        self.set(mv.col, mv.row, mv.player);
        // The counter never goes negative; the round structure keeps it
        // from reaching zero before the session ends.
        self.moves_remaining = self.moves_remaining.saturating_sub(1);
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

//! Win detection rules.
//!
//! Pure functions over [`Board`]. A "line" here is whatever the
//! direction-sampling predicate [`check_line`] accepts: it counts matching
//! marks at offsets +1, +2, −1 and −2 along a direction and fires on any
//! two matches. This reproduces the original game's predicate exactly,
//! including its indifference to whether the matches are adjacent; do not
//! tighten it to require contiguity.

use super::board::Board;
use super::types::{Player, Square};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Direction of a candidate line through a square.
///
/// Iteration order is significant: the winner scan tests directions in
/// declaration order, and the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum LineDirection {
    /// Down a column: step (0, 1).
    Column,
    /// Along a row: step (1, 0).
    Row,
    /// Main diagonal: step (1, 1).
    Diagonal,
    /// Anti-diagonal: step (1, −1).
    Antidiagonal,
}

impl LineDirection {
    /// Unit step (dcol, drow) along the line.
    pub fn step(self) -> (i32, i32) {
        match self {
            LineDirection::Column => (0, 1),
            LineDirection::Row => (1, 0),
            LineDirection::Diagonal => (1, 1),
            LineDirection::Antidiagonal => (1, -1),
        }
    }
}

/// Checks whether `player` holds at least two of the four squares sampled
/// around (col, row) along `dir`, at offsets +1, +2, −1 and −2.
///
/// Out-of-range samples read as empty and contribute nothing. The square
/// at (col, row) itself is not consulted.
pub fn check_line(board: &Board, col: i32, row: i32, dir: LineDirection, player: Player) -> bool {
    let (dcol, drow) = dir.step();
    let hits = [1, 2, -1, -2]
        .into_iter()
        .filter(|k| board.get(col + k * dcol, row + k * drow).taken_by(player))
        .count();
    hits >= 2
}

/// Checks whether `player`'s mark at (col, row) is part of a completed
/// line in any of the four directions.
pub fn completes_line(board: &Board, col: u8, row: u8, player: Player) -> bool {
    LineDirection::iter().any(|dir| check_line(board, col as i32, row as i32, dir, player))
}

/// Scans the board for a winner.
///
/// Squares are visited column-major (column outer, row inner); the first
/// taken square whose occupant completes a line decides the result.
#[instrument(skip(board))]
pub fn judge_winner(board: &Board) -> Option<Player> {
    for col in 0..3u8 {
        for row in 0..3u8 {
            let Square::Taken(player) = board.get(col as i32, row as i32) else {
                continue;
            };
            if completes_line(board, col, row, player) {
                return Some(player);
            }
        }
    }
    None
}

/// Scores the board from `player`'s perspective: +1 for a win, −1 for a
/// loss, 0 otherwise.
pub fn score(board: &Board, player: Player) -> i32 {
    match judge_winner(board) {
        Some(winner) if winner == player => 1,
        Some(_) => -1,
        None => 0,
    }
}

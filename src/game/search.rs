//! Depth-bounded negamax search for the computer's move.
//!
//! The search is a plain recursive depth-first traversal with in-place
//! backtracking over the shared board: place a mark, recurse, erase it.
//! The tree is tiny (branching ≤ 9, depth ≤ 8), so it always runs to
//! completion.

use super::board::{Board, SIZE};
use super::rules::score;
use super::types::{Move, MoveError, Player};
use tracing::{debug, instrument};

/// Error raised by [`choose_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum SearchError {
    /// The computer was asked to move with no open square remaining.
    /// A controller-level invariant violation; not recoverable.
    #[display("no open square remains for the computer to play")]
    Exhausted,

    /// Committing the chosen move failed. Unreachable while the board is
    /// mutated only through the session's turn structure.
    #[display("failed to commit chosen move: {}", _0)]
    #[from]
    Commit(MoveError),
}

impl std::error::Error for SearchError {}

/// Evaluates the board from `player`'s perspective to the given depth.
///
/// Returns `score(player)` immediately at depth 0 or on any decided
/// position. Otherwise tries every empty square in column-major order,
/// negating the opponent's evaluation, and returns the best value found.
///
/// Starts from −1 rather than an "unset" marker, so a position entered
/// with no empty square at all also returns −1: the absence of any
/// candidate reads as a loss. Callers that need to distinguish the two
/// must check for open squares themselves, as [`choose_move`] does.
pub fn negamax(board: &mut Board, depth: u8, player: Player) -> i32 {
    let s = score(board, player);
    if depth == 0 || s != 0 {
        return s;
    }

    let mut best = -1;
    for col in 0..SIZE {
        for row in 0..SIZE {
            if !board.is_empty(col, row) {
                continue;
            }
            board.set(col, row, player);
            let value = -negamax(board, depth - 1, player.opponent());
            board.clear(col, row);
            if value > best {
                best = value;
            }
        }
    }
    best
}

/// Searches for the computer's best move, commits it, and returns its
/// coordinates.
///
/// Every empty square is tried in column-major order with a lookahead of
/// `moves_remaining − 1`; strict comparison means the first square
/// reaching the maximum wins ties. The running maximum starts at −2,
/// strictly below every reachable value, so the first candidate always
/// becomes the incumbent.
///
/// # Errors
///
/// [`SearchError::Exhausted`] if no empty square exists at all.
#[instrument(skip(board), fields(moves_remaining = board.moves_remaining()))]
pub fn choose_move(board: &mut Board) -> Result<(u8, u8), SearchError> {
    let depth = board.moves_remaining().saturating_sub(1);
    let mut best: Option<(u8, u8)> = None;
    let mut max = -2;

    for col in 0..SIZE {
        for row in 0..SIZE {
            if !board.is_empty(col, row) {
                continue;
            }
            board.set(col, row, Player::Computer);
            let value = -negamax(board, depth, Player::Human);
            board.clear(col, row);
            if value > max {
                max = value;
                best = Some((col, row));
            }
        }
    }

    let (col, row) = best.ok_or(SearchError::Exhausted)?;
    board.apply_move(Move::new(col, row, Player::Computer))?;
    debug!(col, row, value = max, "computer move committed");
    Ok((col, row))
}

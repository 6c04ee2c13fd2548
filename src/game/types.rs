//! Core domain types for #-shaped chess.

use serde::{Deserialize, Serialize};

/// A player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The computer opponent (moves second each round).
    Computer,
    /// The human player (moves first each round).
    Human,
}

impl Player {
    /// Returns the opposing player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Computer => Player::Human,
            Player::Human => Player::Computer,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square taken by a player.
    Taken(Player),
}

impl Square {
    /// Checks if the square is empty.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }

    /// Checks if the square is taken by the given player.
    pub fn taken_by(self, player: Player) -> bool {
        self == Square::Taken(player)
    }
}

/// A move: a player placing their mark at (col, row).
///
/// Moves are first-class domain events that can be validated before
/// application, serialized for transcripts, and logged for debugging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Column of the target square, in [0, 3).
    pub col: u8,
    /// Row of the target square, in [0, 3).
    pub row: u8,
    /// The player making the move.
    pub player: Player,
}

impl Move {
    /// Creates a new move.
    pub fn new(col: u8, row: u8, player: Player) -> Self {
        Self { col, row, player }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> ({}, {})", self.player, self.col, self.row)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinate lies outside the 3×3 grid.
    #[display("square ({}, {}) is outside the board", _0, _1)]
    OutOfRange(u8, u8),

    /// The square is already taken.
    #[display("square ({}, {}) is already taken", _0, _1)]
    SquareOccupied(u8, u8),
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involutive() {
        assert_eq!(Player::Computer.opponent(), Player::Human);
        assert_eq!(Player::Human.opponent(), Player::Computer);
        assert_eq!(Player::Human.opponent().opponent(), Player::Human);
    }

    #[test]
    fn test_square_queries() {
        assert!(Square::Empty.is_empty());
        assert!(!Square::Taken(Player::Human).is_empty());
        assert!(Square::Taken(Player::Human).taken_by(Player::Human));
        assert!(!Square::Taken(Player::Human).taken_by(Player::Computer));
        assert!(!Square::Empty.taken_by(Player::Computer));
    }
}

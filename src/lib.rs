//! #-shaped chess: a 3×3 board game against an exhaustive-search
//! computer opponent.
//!
//! # Architecture
//!
//! - **Board**: 3×3 grid plus a remaining-move counter of eight, so one
//!   square always stays open and a game never exceeds four rounds.
//! - **Rules**: the direction-sampling win predicate and the
//!   column-major winner scan.
//! - **Search**: depth-bounded negamax with in-place backtracking,
//!   used to pick the computer's move.
//! - **Controller**: owns the board for the session and drives the
//!   round structure through a [`Frontend`] seam.
//! - **Console**: the interactive front-end (rendering, input, secret
//!   reveal), kept outside the game's correctness surface.
//!
//! # Example
//!
//! ```
//! use hash_chess::GameController;
//!
//! let mut controller = GameController::new();
//! let won = controller.apply_human_move(1, 1)?;
//! assert!(!won);
//!
//! let reply = controller.computer_turn()?;
//! assert!(!reply.line_completed);
//! assert_eq!(controller.judge_winner(), None);
//! # Ok::<(), anyhow::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod console;
mod game;

pub use console::{Console, ConsoleSettings};
pub use game::{
    Board, ComputerMove, Frontend, GameController, LineDirection, MAX_ROUNDS, MOVE_BUDGET, Move,
    MoveError, Outcome, Player, SIZE, SearchError, Square, check_line, choose_move,
    completes_line, judge_winner, negamax, score,
};

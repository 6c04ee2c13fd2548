mod board;
mod controller;
mod rules;
mod search;
mod types;

pub use board::{Board, MOVE_BUDGET, SIZE};
pub use controller::{ComputerMove, Frontend, GameController, MAX_ROUNDS, Outcome};
pub use rules::{LineDirection, check_line, completes_line, judge_winner, score};
pub use search::{SearchError, choose_move, negamax};
pub use types::{Move, MoveError, Player, Square};

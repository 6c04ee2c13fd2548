//! Turn sequencing between the human and the computer.

use super::board::Board;
use super::rules::{completes_line, judge_winner};
use super::search::{SearchError, choose_move};
use super::types::{Move, MoveError, Player};
use anyhow::Result;
use serde::Serialize;
use tracing::{info, instrument};

/// Rounds per session: one human move followed by one computer move.
///
/// Four rounds consume the whole move budget of eight.
pub const MAX_ROUNDS: u8 = 4;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// The human completed a line; the secret was revealed.
    HumanWon,
    /// The computer completed a line.
    ComputerWon,
    /// All rounds were played without a winner.
    RoundsExhausted,
}

/// The computer's committed move for one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerMove {
    /// Column of the committed move.
    pub col: u8,
    /// Row of the committed move.
    pub row: u8,
    /// Whether the move completed a line for the computer.
    pub line_completed: bool,
}

/// Presentation seam between the game and its front-end.
///
/// The front-end supplies human coordinates and observes state changes;
/// it never mutates the board. Coordinates it supplies are validated
/// again by the game, so a misbehaving front-end is merely re-prompted.
pub trait Frontend {
    /// Asks for the human's next move as (col, row).
    fn human_move(&mut self, board: &Board) -> Result<(u8, u8)>;

    /// Reports a rejected human move before the re-prompt.
    fn move_rejected(&mut self, error: &MoveError);

    /// Shows the board after a state change.
    fn present(&mut self, board: &Board) -> Result<()>;

    /// Performs the reveal action after a human win.
    fn reveal_secret(&mut self) -> Result<()>;
}

/// Owns the board for the lifetime of one session and drives the round
/// structure: human move, win check, computer move, win check.
#[derive(Debug)]
pub struct GameController {
    board: Board,
    history: Vec<Move>,
}

impl GameController {
    /// Creates a controller with a fresh board.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
        }
    }

    /// Rebuilds a controller by applying a recorded sequence of moves to
    /// a fresh board.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] hit while replaying.
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut controller = Self::new();
        for &mv in moves {
            controller.board.apply_move(mv)?;
            controller.history.push(mv);
        }
        Ok(controller)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns every move applied so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Scans the board for a winner.
    pub fn judge_winner(&self) -> Option<Player> {
        judge_winner(&self.board)
    }

    /// Applies a human move, returning whether it completed a line.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] without mutating state if the square is
    /// taken or out of range.
    #[instrument(skip(self))]
    pub fn apply_human_move(&mut self, col: u8, row: u8) -> Result<bool, MoveError> {
        let mv = Move::new(col, row, Player::Human);
        self.board.apply_move(mv)?;
        self.history.push(mv);
        Ok(completes_line(&self.board, col, row, Player::Human))
    }

    /// Runs the search, commits the computer's move, and reports it.
    ///
    /// # Errors
    ///
    /// [`SearchError::Exhausted`] if the board has no open square, which
    /// the round structure never allows; treat it as fatal.
    #[instrument(skip(self))]
    pub fn computer_turn(&mut self) -> Result<ComputerMove, SearchError> {
        let (col, row) = choose_move(&mut self.board)?;
        self.history.push(Move::new(col, row, Player::Computer));
        Ok(ComputerMove {
            col,
            row,
            line_completed: completes_line(&self.board, col, row, Player::Computer),
        })
    }

    /// Plays a session against the given front-end.
    ///
    /// Each round accepts one human move (re-prompting on rejection),
    /// checks for a human win, then lets the computer respond and checks
    /// again. After [`MAX_ROUNDS`] rounds without a winner the session
    /// ends with [`Outcome::RoundsExhausted`].
    pub fn play(&mut self, frontend: &mut dyn Frontend) -> Result<Outcome> {
        frontend.present(&self.board)?;

        for round in 0..MAX_ROUNDS {
            let line_completed = loop {
                let (col, row) = frontend.human_move(&self.board)?;
                match self.apply_human_move(col, row) {
                    Ok(line_completed) => break line_completed,
                    Err(error) => frontend.move_rejected(&error),
                }
            };

            if line_completed {
                info!(round, "human completed a line");
                frontend.present(&self.board)?;
                frontend.reveal_secret()?;
                return Ok(Outcome::HumanWon);
            }

            let mv = self.computer_turn()?;
            frontend.present(&self.board)?;
            if self.judge_winner() == Some(Player::Computer) {
                info!(round, col = mv.col, row = mv.row, "computer completed a line");
                return Ok(Outcome::ComputerWon);
            }
        }

        info!("round budget exhausted with no winner");
        Ok(Outcome::RoundsExhausted)
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

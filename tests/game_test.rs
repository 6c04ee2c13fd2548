//! End-to-end tests for the session controller and search.

use hash_chess::{
    Board, Frontend, GameController, MOVE_BUDGET, Move, MoveError, Outcome, Player,
};
use std::collections::VecDeque;

/// Front-end driven by a scripted list of human moves.
#[derive(Debug, Default)]
struct ScriptedFrontend {
    moves: VecDeque<(u8, u8)>,
    rejections: Vec<MoveError>,
    presents: usize,
    revealed: bool,
}

impl ScriptedFrontend {
    fn new(moves: &[(u8, u8)]) -> Self {
        Self {
            moves: moves.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl Frontend for ScriptedFrontend {
    fn human_move(&mut self, _board: &Board) -> anyhow::Result<(u8, u8)> {
        self.moves
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script ran out of moves"))
    }

    fn move_rejected(&mut self, error: &MoveError) {
        self.rejections.push(*error);
    }

    fn present(&mut self, _board: &Board) -> anyhow::Result<()> {
        self.presents += 1;
        Ok(())
    }

    fn reveal_secret(&mut self) -> anyhow::Result<()> {
        self.revealed = true;
        Ok(())
    }
}

#[test]
fn test_human_column_win_reported_on_third_placement() {
    // Human builds column 0 while the computer marks sit elsewhere.
    let mut controller = GameController::replay(&[
        Move::new(0, 0, Player::Human),
        Move::new(1, 0, Player::Computer),
        Move::new(0, 1, Player::Human),
        Move::new(1, 1, Player::Computer),
    ])
    .expect("valid sequence");

    let won = controller.apply_human_move(0, 2).expect("square is free");
    assert!(won, "third mark in the column must report a completed line");
    assert_eq!(controller.judge_winner(), Some(Player::Human));
}

#[test]
fn test_human_win_triggers_reveal() {
    let mut controller = GameController::replay(&[
        Move::new(0, 0, Player::Human),
        Move::new(1, 0, Player::Computer),
        Move::new(0, 1, Player::Human),
        Move::new(1, 1, Player::Computer),
    ])
    .expect("valid sequence");

    let mut frontend = ScriptedFrontend::new(&[(0, 2)]);
    let outcome = controller.play(&mut frontend).expect("session completes");

    assert_eq!(outcome, Outcome::HumanWon);
    assert!(frontend.revealed, "human win must trigger the reveal action");
    assert_eq!(frontend.presents, 2);
}

#[test]
fn test_computer_completes_its_column() {
    // Two computer marks in column 0, six moves remaining: completing
    // the column scores an immediate win and beats every alternative.
    let mut controller = GameController::replay(&[
        Move::new(0, 0, Player::Computer),
        Move::new(0, 1, Player::Computer),
    ])
    .expect("valid sequence");
    assert_eq!(controller.board().moves_remaining(), 6);

    let mv = controller.computer_turn().expect("open squares remain");
    assert_eq!((mv.col, mv.row), (0, 2));
    assert!(mv.line_completed);
    assert_eq!(controller.judge_winner(), Some(Player::Computer));
}

#[test]
fn test_occupied_square_rejected_without_mutation() {
    let mut controller = GameController::new();
    controller.apply_human_move(2, 2).expect("square is free");
    let board_before = controller.board().clone();

    let result = controller.apply_human_move(2, 2);
    assert_eq!(result, Err(MoveError::SquareOccupied(2, 2)));
    assert_eq!(controller.board(), &board_before);
    assert_eq!(controller.board().moves_remaining(), MOVE_BUDGET - 1);
}

#[test]
fn test_drawn_session_exhausts_rounds_and_budget() {
    // A blocking line for the human: neither side ever completes a
    // line, the session runs all four rounds, and exactly eight moves
    // land on the board.
    let mut controller = GameController::new();
    let mut frontend = ScriptedFrontend::new(&[(1, 1), (0, 2), (1, 0), (0, 1)]);

    let outcome = controller.play(&mut frontend).expect("session completes");

    assert_eq!(outcome, Outcome::RoundsExhausted);
    assert_eq!(controller.judge_winner(), None);
    assert_eq!(controller.board().moves_remaining(), 0);
    assert_eq!(controller.history().len(), 8);
    assert!(!frontend.revealed);

    // The deterministic search line for this script.
    let expected = [
        Move::new(1, 1, Player::Human),
        Move::new(0, 0, Player::Computer),
        Move::new(0, 2, Player::Human),
        Move::new(2, 0, Player::Computer),
        Move::new(1, 0, Player::Human),
        Move::new(1, 2, Player::Computer),
        Move::new(0, 1, Player::Human),
        Move::new(2, 1, Player::Computer),
    ];
    assert_eq!(controller.history(), &expected);

    // Eight moves on a nine-square board: the last square stays open.
    assert!(controller.board().is_empty(2, 2));
}

#[test]
fn test_rejected_move_reprompts_within_the_round() {
    let mut controller = GameController::new();
    // Second entry repeats the opening square and must be rejected.
    let mut frontend = ScriptedFrontend::new(&[(1, 1), (1, 1), (0, 2), (1, 0), (0, 1)]);

    let outcome = controller.play(&mut frontend).expect("session completes");

    assert_eq!(outcome, Outcome::RoundsExhausted);
    assert_eq!(frontend.rejections, vec![MoveError::SquareOccupied(1, 1)]);
    assert_eq!(controller.history().len(), 8);
}

#[test]
fn test_history_serializes_as_transcript() {
    let mut controller = GameController::new();
    controller.apply_human_move(0, 0).expect("square is free");
    controller.computer_turn().expect("open squares remain");

    let transcript = serde_json::to_value(controller.history()).expect("serializable");
    let entries = transcript.as_array().expect("array transcript");
    assert_eq!(entries.len(), 2);
    assert_eq!(
        entries[0],
        serde_json::json!({ "col": 0, "row": 0, "player": "Human" })
    );
    assert_eq!(entries[1]["player"], serde_json::json!("Computer"));
}

//! Console front-end: board rendering, coordinate input, and the secret
//! reveal.
//!
//! Everything here sits outside the game's correctness surface; the
//! controller talks to it only through the [`Frontend`] trait.

mod input;

use crate::game::{Board, Frontend, MoveError, Outcome, Player, Square};
use anyhow::{Context, Result};
use crossterm::{
    cursor::MoveTo,
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use derive_getters::Getters;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::instrument;

/// Width of one rendered cell, in block characters.
const CELL_WIDTH: usize = 8;

/// Settings for the console front-end.
#[derive(Debug, Clone, Getters)]
pub struct ConsoleSettings {
    /// File revealed when the human completes a line.
    secret_path: PathBuf,
    /// Disable colors and screen clearing.
    plain: bool,
}

impl ConsoleSettings {
    /// Creates console settings.
    pub fn new(secret_path: PathBuf, plain: bool) -> Self {
        Self { secret_path, plain }
    }
}

/// Interactive console front-end over stdin/stdout.
#[derive(Debug)]
pub struct Console {
    settings: ConsoleSettings,
}

impl Console {
    /// Creates a console with the given settings.
    pub fn new(settings: ConsoleSettings) -> Self {
        Self { settings }
    }

    /// Prints the welcome banner and waits for ENTER.
    pub fn banner(&self) -> Result<()> {
        println!("Welcome to play #-shaped chess with me!");
        println!("Once you win, the secret is yours!");
        println!("But the probability that you can win is: 0.00000004396!");
        println!("Press [ENTER] to start the game!");
        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .context("waiting for ENTER")?;
        Ok(())
    }

    /// Prints the closing message for the given outcome.
    pub fn farewell(&self, outcome: Outcome) {
        match outcome {
            Outcome::HumanWon => {}
            Outcome::ComputerWon => println!("This time I win :P"),
            Outcome::RoundsExhausted => println!("You should WIN the game :("),
        }
    }

    /// Reads the secret file.
    pub fn read_secret(&self) -> Result<String> {
        std::fs::read_to_string(&self.settings.secret_path).with_context(|| {
            format!("reading secret from {}", self.settings.secret_path.display())
        })
    }

    #[instrument(skip(self, board))]
    fn render(&self, board: &Board) -> Result<()> {
        if *self.settings.plain() {
            return self.render_plain(board);
        }

        let mut out = io::stdout();
        execute!(out, Clear(ClearType::All), MoveTo(0, 0)).context("clearing screen")?;
        queue!(out, Print("       0        1        2\n\n"))?;
        for row in 0..3 {
            if row > 0 {
                queue!(out, Print("   --------+--------+--------\n"))?;
            }
            // Each board row is a band of CELL_WIDTH/2 text lines; the
            // row label sits on the third.
            for band in 0..CELL_WIDTH / 2 {
                if band == 2 {
                    queue!(out, Print(format!("{row}  ")))?;
                } else {
                    queue!(out, Print("   "))?;
                }
                for col in 0..3 {
                    if col > 0 {
                        queue!(out, Print("|"))?;
                    }
                    match board.get(col, row) {
                        Square::Taken(Player::Computer) => {
                            queue!(out, SetForegroundColor(Color::Red))?;
                        }
                        Square::Taken(Player::Human) => {
                            queue!(out, SetForegroundColor(Color::Green))?;
                        }
                        Square::Empty => {}
                    }
                    queue!(out, Print("█".repeat(CELL_WIDTH)), ResetColor)?;
                }
                queue!(out, Print("\n"))?;
            }
        }
        out.flush().context("flushing board")?;
        Ok(())
    }

    fn render_plain(&self, board: &Board) -> Result<()> {
        let mut text = String::new();
        for row in 0..3 {
            if row > 0 {
                text.push_str("-+-+-\n");
            }
            for col in 0..3 {
                if col > 0 {
                    text.push('|');
                }
                text.push(match board.get(col, row) {
                    Square::Empty => '.',
                    Square::Taken(Player::Computer) => 'C',
                    Square::Taken(Player::Human) => 'H',
                });
            }
            text.push('\n');
        }
        print!("{text}");
        io::stdout().flush().context("flushing board")?;
        Ok(())
    }
}

impl Frontend for Console {
    fn human_move(&mut self, _board: &Board) -> Result<(u8, u8)> {
        let mut reader = io::stdin().lock();
        let mut writer = io::stdout();
        let row = input::read_coordinate("row", &mut reader, &mut writer)?;
        let col = input::read_coordinate("col", &mut reader, &mut writer)?;
        Ok((col, row))
    }

    fn move_rejected(&mut self, error: &MoveError) {
        println!("{error}");
    }

    fn present(&mut self, board: &Board) -> Result<()> {
        self.render(board)
    }

    fn reveal_secret(&mut self) -> Result<()> {
        let secret = self.read_secret()?;
        println!("{secret}");
        Ok(())
    }
}

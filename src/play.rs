//! Interactive games over any line-oriented reader and writer.

use crate::config::{PlayConfig, Seating};
use crate::input::{Command, HELP, parse_command};
use crate::render::board_string;
use anyhow::{Context, Result};
use flawless_tictactoe::{Session, Verdict};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Results across all games played in one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    /// Games the player won.
    pub player_wins: usize,
    /// Games the computer won.
    pub computer_wins: usize,
    /// Drawn games.
    pub draws: usize,
}

impl Scoreboard {
    fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::OpponentWins => self.player_wins += 1,
            Verdict::EngineWins => self.computer_wins += 1,
            Verdict::Draw => self.draws += 1,
        }
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "You {} - Computer {} - Draws {}",
            self.player_wins, self.computer_wins, self.draws
        )
    }
}

enum Flow {
    GameOver(Verdict),
    Quit,
}

/// Drives games between a human on `input`/`output` and the engine.
pub struct Game<R, W> {
    input: R,
    output: W,
    session: Session,
    seating: Seating,
    color: bool,
}

impl<R: BufRead, W: Write> Game<R, W> {
    /// Creates a game; the first session starts immediately.
    #[instrument(skip(input, output))]
    pub fn new(input: R, output: W, config: &PlayConfig) -> Self {
        Self {
            input,
            output,
            session: Session::new(config.first().resolve()),
            seating: *config.first(),
            color: *config.color(),
        }
    }

    /// Plays until the player quits or input ends.
    #[instrument(skip(self))]
    pub fn run(mut self) -> Result<Scoreboard> {
        let mut score = Scoreboard::default();
        loop {
            self.announce_seating()?;
            match self.play_one()? {
                Flow::Quit => break,
                Flow::GameOver(verdict) => {
                    score.record(verdict);
                    writeln!(self.output, "{}", verdict_message(verdict))?;
                    writeln!(self.output, "{}", score)?;
                }
            }
            if !self.confirm("Play again? [y/n]: ")? {
                break;
            }
            let first = match self.seating {
                Seating::Random => Some(self.seating.resolve()),
                Seating::Engine | Seating::Opponent => None,
            };
            self.session.restart(first);
        }
        info!(%score, "Leaving");
        Ok(score)
    }

    fn announce_seating(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "You are {}, the computer is {}.",
            self.session.opponent(),
            self.session.engine()
        )?;
        if let Some(pos) = self.session.last_moves().engine {
            writeln!(self.output, "Computer plays {}.", pos)?;
        }
        Ok(())
    }

    fn play_one(&mut self) -> Result<Flow> {
        self.show_board()?;
        loop {
            if let Some(verdict) = self.session.verdict() {
                return Ok(Flow::GameOver(verdict));
            }
            let Some(line) = self.prompt("Your move (row col): ")? else {
                return Ok(Flow::Quit);
            };
            match parse_command(&line) {
                Ok(Command::Place(pos)) => match self.session.play_turn(pos) {
                    Ok(turn) => {
                        if let Some(reply) = turn.engine_reply {
                            debug!(%reply, "Engine replied");
                            writeln!(self.output, "Computer plays {}.", reply.position)?;
                        }
                        self.show_board()?;
                    }
                    Err(e) => {
                        warn!(error = %e, "Move rejected");
                        writeln!(self.output, "{}. Try again.", e)?;
                    }
                },
                Ok(Command::Restart) => {
                    self.session.restart(None);
                    writeln!(self.output, "Starting over.")?;
                    self.announce_seating()?;
                    self.show_board()?;
                }
                Ok(Command::Quit) => return Ok(Flow::Quit),
                Ok(Command::Help) => writeln!(self.output, "{}", HELP)?,
                Err(e) => writeln!(self.output, "{}.", e)?,
            }
        }
    }

    fn show_board(&mut self) -> Result<()> {
        let text = board_string(
            self.session.board(),
            self.session.last_moves(),
            self.session.engine(),
            self.color,
        );
        write!(self.output, "\n{}\n", text)?;
        Ok(())
    }

    /// Prints `message` and reads a line; `None` at end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush().context("Failed to flush output")?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        Ok((read > 0).then_some(line))
    }

    fn confirm(&mut self, message: &str) -> Result<bool> {
        Ok(self
            .prompt(message)?
            .is_some_and(|answer| answer.trim().to_ascii_lowercase().starts_with('y')))
    }
}

fn verdict_message(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::OpponentWins => "You win!",
        Verdict::EngineWins => "The computer wins.",
        Verdict::Draw => "It's a draw.",
    }
}

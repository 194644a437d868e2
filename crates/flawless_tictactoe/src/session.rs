//! A single game between the engine and an outside opponent.
//!
//! The session owns the board, the symbol assignment and the last-move
//! markers. X always moves first, so whoever moves first plays X.

use super::rules::{self, Outcome};
use super::strategy::{self, Decision};
use super::{Board, LastMoves, MoveError, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Who opens the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum FirstMover {
    /// The engine opens, playing X.
    #[display("engine")]
    Engine,
    /// The opponent opens, playing X; the engine plays O.
    #[display("opponent")]
    Opponent,
}

/// Game result from the session's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The engine completed a line.
    EngineWins,
    /// The opponent completed a line.
    OpponentWins,
    /// Full board, no line.
    Draw,
}

/// What happened during one opponent turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// The engine's answer, absent if the opponent's move ended the game.
    pub engine_reply: Option<Decision>,
    /// Board outcome after the turn.
    pub outcome: Outcome,
}

/// Game session against the engine.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    engine: Player,
    first: FirstMover,
    last_moves: LastMoves,
}

impl Session {
    /// Starts a game. When the engine moves first it plays its opening move
    /// immediately.
    #[instrument]
    pub fn new(first: FirstMover) -> Self {
        let engine = match first {
            FirstMover::Engine => Player::X,
            FirstMover::Opponent => Player::O,
        };
        let mut session = Self {
            board: Board::new(),
            engine,
            first,
            last_moves: LastMoves::default(),
        };
        info!(%first, %engine, "Session started");
        if first == FirstMover::Engine {
            session.make_move();
        }
        session
    }

    /// Clears the board and starts over. `None` keeps the current seating.
    #[instrument(skip(self))]
    pub fn restart(&mut self, first: Option<FirstMover>) {
        *self = Self::new(first.unwrap_or(self.first));
    }

    /// Records the opponent's placement.
    ///
    /// Rejected placements leave the session unchanged.
    #[instrument(skip(self))]
    pub fn record_opponent_move(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.outcome().is_terminal() {
            warn!(%pos, "Move after game over rejected");
            return Err(MoveError::GameOver);
        }
        self.board.place(pos, self.opponent())?;
        self.last_moves.opponent = Some(pos);
        debug!(%pos, board = %self.board, "Opponent move recorded");
        Ok(())
    }

    /// Lets the engine pick and play a move.
    ///
    /// Returns `None` without changing anything when the board is full.
    #[instrument(skip(self))]
    pub fn make_move(&mut self) -> Option<Decision> {
        let decision = strategy::select_move(&self.board, self.engine)?;
        debug_assert!(
            self.board.is_empty(decision.position),
            "selector returned occupied {}",
            decision.position
        );
        self.board = self.board.with(decision.position, self.engine);
        self.last_moves.engine = Some(decision.position);
        Some(decision)
    }

    /// Applies the opponent's move and, if the game continues, the engine's
    /// reply.
    #[instrument(skip(self))]
    pub fn play_turn(&mut self, pos: Position) -> Result<Turn, MoveError> {
        self.record_opponent_move(pos)?;
        let engine_reply = if self.outcome().is_terminal() {
            None
        } else {
            self.make_move()
        };
        let outcome = self.outcome();
        if outcome.is_terminal() {
            info!(%outcome, "Game over");
        }
        Ok(Turn {
            engine_reply,
            outcome,
        })
    }

    /// Symbol-level outcome of the current board.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(&self.board)
    }

    /// Outcome from the session's point of view, once the game is over.
    pub fn verdict(&self) -> Option<Verdict> {
        match self.outcome() {
            Outcome::InProgress => None,
            Outcome::Draw => Some(Verdict::Draw),
            Outcome::Won(player) if player == self.engine => Some(Verdict::EngineWins),
            Outcome::Won(_) => Some(Verdict::OpponentWins),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The engine's symbol.
    pub fn engine(&self) -> Player {
        self.engine
    }

    /// The opponent's symbol.
    pub fn opponent(&self) -> Player {
        self.engine.opponent()
    }

    /// Who opened this game.
    pub fn first_mover(&self) -> FirstMover {
        self.first
    }

    /// Last placement of each side.
    pub fn last_moves(&self) -> &LastMoves {
        &self.last_moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_first_opens_in_center_as_x() {
        let session = Session::new(FirstMover::Engine);
        assert_eq!(session.engine(), Player::X);
        assert!(session.board().is_owned_by(Position::Center, Player::X));
        assert_eq!(session.last_moves().engine, Some(Position::Center));
        assert_eq!(session.last_moves().opponent, None);
    }

    #[test]
    fn test_opponent_first_leaves_board_empty() {
        let session = Session::new(FirstMover::Opponent);
        assert_eq!(session.engine(), Player::O);
        assert_eq!(*session.board(), Board::new());
    }

    #[test]
    fn test_occupied_square_rejected_without_change() {
        let mut session = Session::new(FirstMover::Engine);
        let before = *session.board();

        let result = session.record_opponent_move(Position::Center);

        assert_eq!(result, Err(MoveError::SquareOccupied(Position::Center)));
        assert_eq!(*session.board(), before);
        assert_eq!(session.last_moves().opponent, None);
    }

    #[test]
    fn test_play_turn_updates_both_markers() {
        let mut session = Session::new(FirstMover::Opponent);
        let turn = session.play_turn(Position::TopLeft).unwrap();

        assert_eq!(turn.outcome, Outcome::InProgress);
        let reply = turn.engine_reply.unwrap();
        assert_eq!(reply.position, Position::Center);
        assert_eq!(session.last_moves().opponent, Some(Position::TopLeft));
        assert_eq!(session.last_moves().engine, Some(Position::Center));
    }

    #[test]
    fn test_restart_keeps_seating() {
        let mut session = Session::new(FirstMover::Opponent);
        session.play_turn(Position::TopLeft).unwrap();

        session.restart(None);

        assert_eq!(session.engine(), Player::O);
        assert_eq!(*session.board(), Board::new());
        assert_eq!(*session.last_moves(), LastMoves::default());
    }

    #[test]
    fn test_restart_can_swap_seating() {
        let mut session = Session::new(FirstMover::Opponent);
        session.restart(Some(FirstMover::Engine));
        assert_eq!(session.engine(), Player::X);
        assert_eq!(session.first_mover(), FirstMover::Engine);
        assert!(!session.board().is_empty(Position::Center));
    }

    #[test]
    fn test_make_move_on_full_board_changes_nothing() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        let mut session = Session {
            board,
            engine: Player::O,
            first: FirstMover::Opponent,
            last_moves: LastMoves::default(),
        };

        assert_eq!(session.make_move(), None);
        assert_eq!(*session.board(), board);
        assert_eq!(*session.last_moves(), LastMoves::default());
    }

    #[test]
    fn test_make_move_places_selected_cell() {
        let mut session = Session::new(FirstMover::Opponent);
        session.record_opponent_move(Position::TopLeft).unwrap();

        let decision = session.make_move().unwrap();

        assert_eq!(decision.position, Position::Center);
        assert!(session.board().is_owned_by(Position::Center, Player::O));
        assert_eq!(session.board().count(Player::O), 1);
        assert_eq!(session.last_moves().engine, Some(Position::Center));
    }

    #[test]
    fn test_moves_rejected_after_game_over() {
        let mut session = Session::new(FirstMover::Opponent);
        session.play_turn(Position::TopLeft).unwrap();
        session.play_turn(Position::TopCenter).unwrap();
        let turn = session.play_turn(Position::MiddleLeft).unwrap();

        // O answers on the backward diagonal.
        assert_eq!(turn.engine_reply.map(|d| d.position), Some(Position::BottomLeft));
        assert_eq!(turn.outcome, Outcome::Won(Player::O));
        assert_eq!(session.verdict(), Some(Verdict::EngineWins));
        assert_eq!(
            session.play_turn(Position::BottomRight),
            Err(MoveError::GameOver)
        );
    }
}

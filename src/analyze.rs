//! One-shot analysis of a board position.

use crate::render::board_string;
use derive_more::{Display, Error};
use flawless_tictactoe::{Board, Decision, LastMoves, Outcome, Player, evaluate, select_move};
use serde::Serialize;
use tracing::{debug, instrument};

/// Symbol choice on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Side {
    /// Play as X.
    X,
    /// Play as O.
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}

/// The counts of X and O do not correspond to alternating play.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Cannot tell whose turn it is: {} X and {} O; pass --engine", x, o)]
pub struct TurnError {
    /// Number of X squares.
    pub x: usize,
    /// Number of O squares.
    pub o: usize,
}

/// Result of analysing one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Board notation.
    pub board: String,
    /// Symbol the engine plays.
    pub engine: Player,
    /// Outcome of the position as given.
    pub outcome: Outcome,
    /// The engine's move, if the game is not over.
    pub decision: Option<Decision>,
}

/// The side to move, assuming X opened and turns alternated.
pub fn side_to_move(board: &Board) -> Result<Player, TurnError> {
    let x = board.count(Player::X);
    let o = board.count(Player::O);
    if x == o {
        Ok(Player::X)
    } else if x == o + 1 {
        Ok(Player::O)
    } else {
        Err(TurnError { x, o })
    }
}

/// Analyses `board` for `engine`, inferring the side to move when `None`.
#[instrument(skip(board), fields(board = %board))]
pub fn analyze(board: &Board, engine: Option<Player>) -> Result<Analysis, TurnError> {
    let engine = match engine {
        Some(engine) => engine,
        None => side_to_move(board)?,
    };
    let outcome = evaluate(board);
    let decision = if outcome.is_terminal() {
        None
    } else {
        select_move(board, engine)
    };
    debug!(?outcome, ?decision, "Analysis complete");
    Ok(Analysis {
        board: board.notation(),
        engine,
        outcome,
        decision,
    })
}

impl Analysis {
    /// Human-readable report; the suggested move is highlighted when
    /// `color` is on.
    pub fn report(&self, board: &Board, color: bool) -> String {
        let last_moves = LastMoves {
            engine: self.decision.map(|d| d.position),
            opponent: None,
        };
        let shown = match self.decision {
            Some(d) => board.with(d.position, self.engine),
            None => *board,
        };
        let mut out = board_string(&shown, &last_moves, self.engine, color);
        match (self.outcome, self.decision) {
            (Outcome::InProgress, Some(d)) => {
                out.push_str(&format!(
                    "{} plays {} {} by {}\n",
                    self.engine,
                    d.position.label(),
                    d.position,
                    d.strategy
                ));
            }
            (outcome, _) => out.push_str(&format!("{}\n", outcome)),
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flawless_tictactoe::{Position, Strategy};

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_side_to_move() {
        assert_eq!(side_to_move(&Board::new()), Ok(Player::X));
        assert_eq!(side_to_move(&board("X../.../...")), Ok(Player::O));
        assert_eq!(side_to_move(&board("XX./.../...")), Err(TurnError { x: 2, o: 0 }));
        assert_eq!(side_to_move(&board("O../.../...")), Err(TurnError { x: 0, o: 1 }));
    }

    #[test]
    fn test_inferred_block() {
        let analysis = analyze(&board("X../X../.O."), None).unwrap();
        assert_eq!(analysis.engine, Player::O);
        assert_eq!(analysis.outcome, Outcome::InProgress);
        assert_eq!(
            analysis.decision,
            Some(Decision::new(Position::BottomLeft, Strategy::Block))
        );
    }

    #[test]
    fn test_terminal_board_has_no_decision() {
        let analysis = analyze(&board("XXX/OO./..."), Some(Player::O)).unwrap();
        assert_eq!(analysis.outcome, Outcome::Won(Player::X));
        assert_eq!(analysis.decision, None);
    }

    #[test]
    fn test_report_mentions_move() {
        let b = board("X../X../.O.");
        let analysis = analyze(&b, None).unwrap();
        let text = analysis.report(&b, false);
        assert!(text.ends_with("O plays Bottom-left (2, 0) by block\n"));
        assert!(text.contains("2 O|O| \n"));
    }

    #[test]
    fn test_json_shape() {
        let analysis = analyze(&Board::new(), None).unwrap();
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["engine"], "X");
        assert_eq!(json["outcome"], "InProgress");
        assert_eq!(json["decision"]["position"], "Center");
        assert_eq!(json["decision"]["strategy"], "center");
    }
}

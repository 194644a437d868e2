//! Tests for the move selector's priority chain.

use flawless_tictactoe::lines::LINES;
use flawless_tictactoe::{
    Board, FirstMover, Player, Position, Session, Strategy, completing_moves, has_fork,
    select_move,
};

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

/// Every pair of cells on every line, holding `symbol`, must make the engine
/// play the remaining cell.
fn assert_completes_every_line(symbol: Player, engine: Player, expected: Strategy) {
    for line in LINES {
        let cells = line.cells();
        for i in 0..3 {
            for j in (i + 1)..3 {
                let remaining = cells[3 - i - j];
                let b = Board::new()
                    .with(cells[i], symbol)
                    .with(cells[j], symbol);

                let decision = select_move(&b, engine).unwrap();

                assert_eq!(decision.position, remaining, "{:?} with {b}", line.kind());
                assert_eq!(decision.strategy, expected);
            }
        }
    }
}

#[test]
fn test_winning_moves_on_every_line() {
    assert_completes_every_line(Player::O, Player::O, Strategy::Win);
    assert_completes_every_line(Player::X, Player::X, Strategy::Win);
}

#[test]
fn test_blocking_moves_on_every_line() {
    assert_completes_every_line(Player::X, Player::O, Strategy::Block);
    assert_completes_every_line(Player::O, Player::X, Strategy::Block);
}

#[test]
fn test_win_taken_when_block_also_available() {
    let b = board("OO./XX./X..");
    let decision = select_move(&b, Player::O).unwrap();
    assert_eq!(decision.position, Position::TopRight);
    assert_eq!(decision.strategy, Strategy::Win);
}

#[test]
fn test_first_completing_move_in_line_order() {
    // Row 0 completes at (0,2) and column 0 at (2,0); rows come first.
    let b = board("XX./X../...");
    assert_eq!(completing_moves(&b, Player::X)[0], Position::TopRight);
    assert_eq!(
        select_move(&b, Player::X).map(|d| d.position),
        Some(Position::TopRight)
    );
}

#[test]
fn test_forking_move_if_one_is_available() {
    let b = board(".O./O../...");
    let decision = select_move(&b, Player::O).unwrap();
    assert_eq!(decision.position, Position::TopLeft);
    assert_eq!(decision.strategy, Strategy::Fork);
    assert!(has_fork(&b.with(decision.position, Player::O), Player::O));
}

#[test]
fn test_directly_block_a_potential_fork() {
    // .x.    ox.
    // x.. => x..
    // ...    ...
    let b = board(".X./X../...");
    let decision = select_move(&b, Player::O).unwrap();
    assert_eq!(decision.position, Position::TopLeft);
    assert_eq!(decision.strategy, Strategy::DirectForkBlock);
}

#[test]
fn test_indirectly_block_when_direct_block_would_allow_a_fork() {
    //  x..    xo.
    //  .o. => .o.
    //  ..x    ..x
    let b = board("X../.O./..X");
    let decision = select_move(&b, Player::O).unwrap();

    // Corners would hand X a fork; one of the four edges is marked.
    assert!(!decision.position.is_corner());
    assert!(Position::SIDES.contains(&decision.position));
    assert_eq!(decision.strategy, Strategy::ForcingBlock);

    let after = b.with(decision.position, Player::O);
    let threats = completing_moves(&after, Player::O);
    assert_eq!(threats.len(), 1);
    assert!(!has_fork(&after.with(threats[0], Player::X), Player::X));
}

#[test]
fn test_mark_the_center() {
    let decision = select_move(&Board::new(), Player::O).unwrap();
    assert_eq!(decision.position, Position::Center);
}

#[test]
fn test_mark_the_opposite_corner() {
    let b = board("..X/.O./...");
    let decision = select_move(&b, Player::O).unwrap();
    assert_eq!(decision.position, Position::BottomLeft);
    assert_eq!(decision.strategy, Strategy::OppositeCorner);
}

#[test]
fn test_opposite_corner_needs_empty_mirror() {
    // X's corner at (2,2) faces O at (0,0), so a free corner is taken instead.
    // o..
    // xxo
    // o.x
    let b = board("O../XXO/O.X");
    let decision = select_move(&b, Player::O).unwrap();
    assert_eq!(decision.position, Position::TopRight);
    assert_eq!(decision.strategy, Strategy::EmptyCorner);
}

#[test]
fn test_mark_any_corner() {
    let b = board(".../.X./...");
    let decision = select_move(&b, Player::O).unwrap();
    assert!(decision.position.is_corner());
    assert_eq!(decision.position, Position::TopLeft);
}

#[test]
fn test_engine_moving_first_opens_center() {
    let session = Session::new(FirstMover::Engine);
    assert!(session.board().is_owned_by(Position::Center, Player::X));
    assert_eq!(session.board().count(Player::X), 1);
    assert_eq!(session.board().count(Player::O), 0);
}

#[test]
fn test_full_board_selects_nothing() {
    assert!(select_move(&board("XOX/XOO/OXX"), Player::X).is_none());
}

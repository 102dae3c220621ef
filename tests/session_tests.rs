//! Game session integration tests
//!
//! Multi-jump continuation for human and AI turns, the move clock and winner handling.

use std::time::Duration;

use dama::game::{AiPlayer, ClickOutcome, GameError, GameMode, GameSession};
use draughts_engine::{Board, Move, Position, Searcher, Side};

fn pos(row: i8, col: i8) -> Position {
    Position::new(row, col)
}

fn board(text: &str) -> Board {
    text.parse().expect("valid board text")
}

/// White man on (6,1) can jump (5,2) and then (3,4); a second white man waits on (7,6).
fn double_jump_for_white() -> Board {
    board(
        ".......b
         ........
         ........
         ....b...
         ........
         ..b.....
         .w......
         ......w.",
    )
}

/// Black man on (1,2) can jump (2,3) and then (4,5).
fn double_jump_for_black() -> Board {
    board(
        ".....b..
         ..b.....
         ...w....
         ........
         .....w..
         ........
         ........
         w.......",
    )
}

fn session(mode: GameMode, board: Board, turn: Side) -> GameSession {
    GameSession::with_board(mode, board, turn, Duration::from_secs(10))
}

#[test]
fn test_human_continuation_keeps_turn_in_extreme_mode() {
    let mut session = session(GameMode::Extreme, double_jump_for_white(), Side::White);
    session.click(pos(6, 1)).unwrap();

    let ClickOutcome::Moved(first) = session.click(pos(4, 3)).unwrap() else {
        panic!("first jump should be played");
    };
    assert_eq!(first.captured, Some(pos(5, 2)));
    assert!(first.continues);
    assert_eq!(session.turn(), Side::White);
    assert_eq!(session.selected(), Some(pos(4, 3)));
    assert_eq!(session.pending_continuation(), Some(pos(4, 3)));
    assert_eq!(session.legal_moves(), vec![Move::new(pos(4, 3), pos(2, 5))]);

    // Another piece, or a plain step with the jumping piece, does not continue the capture.
    assert_eq!(session.click(pos(7, 6)).unwrap(), ClickOutcome::Ignored);
    assert_eq!(session.click(pos(3, 2)).unwrap(), ClickOutcome::Ignored);
    assert_eq!(session.selected(), Some(pos(4, 3)));
    assert!(matches!(
        session.commit_move(Move::new(pos(7, 6), pos(6, 5))),
        Err(GameError::ContinuationPending { .. })
    ));

    let ClickOutcome::Moved(second) = session.click(pos(2, 5)).unwrap() else {
        panic!("second jump should be played");
    };
    assert_eq!(second.captured, Some(pos(3, 4)));
    assert!(!second.continues);
    assert_eq!(session.turn(), Side::Black);
    assert_eq!(session.pending_continuation(), None);
    assert_eq!(session.board().count(Side::Black), 1);
}

#[test]
fn test_no_continuation_outside_extreme_mode() {
    for mode in [GameMode::Solo, GameMode::TwoPlayer] {
        let mut session = session(mode, double_jump_for_white(), Side::White);
        let outcome = session
            .commit_move(Move::new(pos(6, 1), pos(4, 3)))
            .unwrap();
        assert!(!outcome.continues, "{mode} must pass the turn after a capture");
        assert_eq!(session.turn(), Side::Black);
        assert_eq!(session.pending_continuation(), None);
    }
}

#[test]
fn test_ai_continuation_uses_the_same_rule() {
    let mut session = session(GameMode::Extreme, double_jump_for_black(), Side::Black);
    let mut ai = AiPlayer::new(Some(3), Searcher::default());

    let first = session
        .commit_move(Move::new(pos(1, 2), pos(3, 4)))
        .unwrap();
    assert!(first.continues);
    assert!(session.is_ai_turn());

    let second = session.play_ai_turn(&mut ai).unwrap();
    assert_eq!(second.mv, Move::new(pos(3, 4), pos(5, 6)));
    assert_eq!(second.captured, Some(pos(4, 5)));
    assert!(!second.continues);
    assert_eq!(session.turn(), Side::White);
    assert_eq!(session.board().count(Side::White), 1);
}

#[test]
fn test_timeout_passes_turn_and_clears_selection() {
    let mut session = GameSession::new(GameMode::Extreme);
    session.click(pos(5, 0)).unwrap();
    assert_eq!(session.tick(Duration::from_secs(9)), None);
    assert_eq!(session.time_left(), Some(Duration::from_secs(1)));

    assert_eq!(session.tick(Duration::from_secs(1)), Some(Side::White));
    assert_eq!(session.turn(), Side::Black);
    assert_eq!(session.selected(), None);
    assert_eq!(session.time_left(), Some(Duration::from_secs(10)));
}

#[test]
fn test_timeout_ends_a_pending_continuation() {
    let mut session = session(GameMode::Extreme, double_jump_for_white(), Side::White);
    session.commit_move(Move::new(pos(6, 1), pos(4, 3))).unwrap();
    assert_eq!(session.tick(Duration::from_secs(10)), Some(Side::White));
    assert_eq!(session.pending_continuation(), None);
    assert_eq!(session.turn(), Side::Black);
}

#[test]
fn test_move_resets_the_clock() {
    let mut session = GameSession::new(GameMode::Extreme);
    session.tick(Duration::from_secs(8));
    session.commit_move(Move::new(pos(5, 0), pos(4, 1))).unwrap();
    assert_eq!(session.time_left(), Some(Duration::from_secs(10)));
}

#[test]
fn test_last_capture_declares_winner_and_freezes_the_game() {
    let board = board(
        "........
         ........
         ........
         ........
         ...b....
         ..w.....
         ........
         ........",
    );
    let mut session = session(GameMode::Solo, board, Side::White);
    let outcome = session
        .commit_move(Move::new(pos(5, 2), pos(3, 4)))
        .unwrap();
    assert_eq!(outcome.winner, Some(Side::White));
    assert_eq!(session.winner(), Some(Side::White));
    assert!(session.legal_moves().is_empty());
    assert!(!session.is_ai_turn());

    let mut ai = AiPlayer::new(Some(1), Searcher::default());
    assert!(matches!(
        session.click(pos(3, 4)),
        Err(GameError::GameOver { winner: Side::White })
    ));
    assert!(matches!(
        session.play_ai_turn(&mut ai),
        Err(GameError::GameOver { .. })
    ));
    assert_eq!(session.tick(Duration::from_secs(30)), None);

    session.restart();
    assert_eq!(session.winner(), None);
}

#[test]
fn test_stuck_side_reports_no_legal_move() {
    let board = board(
        "........
         ........
         ........
         ........
         ........
         ..w.....
         ........
         b.......",
    );
    let mut session = session(GameMode::Solo, board, Side::Black);
    assert!(!session.has_legal_move());
    let mut ai = AiPlayer::new(Some(1), Searcher::default());
    assert!(matches!(
        session.play_ai_turn(&mut ai),
        Err(GameError::NoLegalMove { side: Side::Black })
    ));
    assert_eq!(session.winner(), None);
}

#[test]
fn test_promotion_is_reported() {
    let board = board(
        "........
         ..w.....
         ........
         ........
         ........
         ........
         ........
         ......b.",
    );
    let mut session = session(GameMode::TwoPlayer, board, Side::White);
    let outcome = session
        .commit_move(Move::new(pos(1, 2), pos(0, 1)))
        .unwrap();
    assert!(outcome.promoted);
    assert!(session.board().piece_at(pos(0, 1)).unwrap().is_king());
}

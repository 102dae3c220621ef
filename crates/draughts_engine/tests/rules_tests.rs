//! Integration tests for the engine's public API
//!
//! Exercise the six front-end operations the way a caller would, including property checks over
//! randomly played games.

use draughts_engine::constants::PIECES_PER_SIDE;
use draughts_engine::move_gen::generate_moves;
use draughts_engine::{
    apply_move, check_winner, choose_random_move_with, create_initial_board, is_legal_move, Board,
    Move, Piece, Position, Rank, Side,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn pos(row: i8, col: i8) -> Position {
    Position::new(row, col)
}

#[test]
fn test_initial_board_has_twelve_men_per_side_on_dark_squares() {
    let board = create_initial_board();
    assert_eq!(board.count(Side::White), PIECES_PER_SIDE);
    assert_eq!(board.count(Side::Black), PIECES_PER_SIDE);
    assert!(board
        .pieces()
        .all(|(position, piece)| position.is_dark() && piece.rank == Rank::Man));
}

#[test]
fn test_opening_scenarios() {
    let board = create_initial_board();
    assert!(is_legal_move(&board, pos(5, 0), pos(4, 1), Side::White));
    assert!(!is_legal_move(&board, pos(5, 0), pos(3, 0), Side::White));
}

#[test]
fn test_lone_capture_scenario() {
    let board = Board::empty()
        .with_piece(pos(3, 3), Piece::man(Side::White))
        .unwrap()
        .with_piece(pos(2, 2), Piece::man(Side::Black))
        .unwrap();
    assert!(is_legal_move(&board, pos(3, 3), pos(1, 1), Side::White));

    let after = apply_move(&board, pos(3, 3), pos(1, 1));
    assert!(after.piece_at(pos(2, 2)).is_none());
    assert!(after.piece_at(pos(3, 3)).is_none());
    assert_eq!(after.piece_at(pos(1, 1)), Some(Piece::man(Side::White)));
    assert_eq!(check_winner(&after), Some(Side::White));
}

#[test]
fn test_white_without_pieces_means_black_wins() {
    let board: Board = ".b......
                        ........
                        ........
                        ........
                        ........
                        ........
                        ........
                        ........"
        .parse()
        .unwrap();
    assert_eq!(check_winner(&board), Some(Side::Black));
}

#[test]
fn test_is_legal_move_rejections() {
    let board = create_initial_board();
    // off board
    assert!(!is_legal_move(&board, pos(5, 0), pos(4, -1), Side::White));
    assert!(!is_legal_move(&board, pos(-1, 0), pos(0, 1), Side::White));
    // empty source
    assert!(!is_legal_move(&board, pos(4, 1), pos(3, 0), Side::White));
    // wrong side
    assert!(!is_legal_move(&board, pos(2, 1), pos(3, 0), Side::White));
    // occupied destination
    assert!(!is_legal_move(&board, pos(6, 1), pos(5, 2), Side::White));
}

/// Play random games and check the piece-count and promotion invariants after every move.
#[test]
fn test_random_games_preserve_invariants() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..25 {
        let mut board = create_initial_board();
        let mut side = Side::White;
        for _ in 0..200 {
            if check_winner(&board).is_some() {
                break;
            }
            let Some(mv) = choose_random_move_with(&board, side, &mut rng) else {
                break;
            };
            assert!(is_legal_move(&board, mv.from, mv.to, side));

            let before = board.total_pieces();
            let kings_before = board.count_kings(side);
            let moving = board.piece_at(mv.from).unwrap();
            let next = apply_move(&board, mv.from, mv.to);

            let after = next.total_pieces();
            if mv.is_capture() {
                assert_eq!(after, before - 1, "capture {mv} must remove one piece");
            } else {
                assert_eq!(after, before, "step {mv} must not change the count");
            }

            let landed = next.piece_at(mv.to).unwrap();
            if mv.to.row == side.king_row() || moving.is_king() {
                assert_eq!(landed.rank, Rank::King);
            } else {
                assert_eq!(landed.rank, Rank::Man);
            }
            assert!(next.count_kings(side) >= kings_before);
            assert!(next.pieces().all(|(position, _)| position.is_dark()));

            board = next;
            side = side.opponent();
        }
    }
}

#[test]
fn test_no_winner_while_both_sides_have_pieces_even_if_stuck() {
    // Black's man on (7,0) has reached the far edge as a man in this hand-made position and has
    // nowhere to go; white still has moves.
    let board: Board = "........
                        ........
                        ........
                        ........
                        ........
                        ..w.....
                        ........
                        b......."
        .parse()
        .unwrap();
    assert!(generate_moves(&board, Side::Black).is_empty());
    assert_eq!(check_winner(&board), None);
}

#[test]
fn test_apply_move_leaves_input_untouched() {
    let board = create_initial_board();
    let copy = board;
    let _ = apply_move(&board, pos(5, 0), pos(4, 1));
    assert_eq!(board, copy);
    let mv = Move::new(pos(5, 0), pos(4, 1));
    assert!(!mv.is_capture());
}

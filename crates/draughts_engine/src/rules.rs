//! Checkers rules - pure functions over [`Board`]
//!
//! # Rules implemented
//!
//! - Men step one square diagonally forward; kings step in any diagonal direction.
//! - A capture jumps two squares diagonally over an opposing piece, with the same direction
//!   constraint as a step. Captures are optional.
//! - A man landing on its king row is promoted.
//! - A side with no pieces left has lost.
//!
//! Multi-jump sequences are not validated here. After a capture the caller asks
//! [`can_capture_again`] whether the landing piece may keep going and, if so, restricts the next
//! move to [`capture_moves_from`] the landing square.

use tracing::trace;

use crate::constants::*;
use crate::error::{EngineError, EngineResult};
use crate::types::*;

/// Standard starting position: black men on the dark squares of rows 0-2, white men on rows 5-7.
pub fn initial_board() -> Board {
    let mut board = Board::empty();
    for row in BLACK_HOME_ROWS.chain(WHITE_HOME_ROWS) {
        let side = if BLACK_HOME_ROWS.contains(&row) {
            Side::Black
        } else {
            Side::White
        };
        for col in 0..BOARD_SIZE {
            let pos = Position::new(row, col);
            if pos.is_dark() {
                board.cells[row as usize][col as usize] = Some(Piece::man(side));
            }
        }
    }
    board
}

/// Single-step legality check for `side` moving the piece on `from` to `to`.
///
/// Illegal when either square is off the board, `from` is empty or holds an opposing piece,
/// `to` is occupied, the displacement is not diagonal, or a man moves backwards. A two-row
/// displacement additionally needs an opposing piece on the midpoint.
pub fn is_legal_move(board: &Board, from: Position, to: Position, side: Side) -> bool {
    if !from.is_on_board() || !to.is_on_board() {
        trace!("Move rejected as {} -> {} leaves the board", from, to);
        return false;
    }

    let Some(piece) = board.piece_at(from) else {
        trace!("Move rejected as there is no piece on {}", from);
        return false;
    };
    if piece.side != side {
        trace!("Move rejected as piece on {} belongs to {}", from, piece.side);
        return false;
    }
    if !board.is_empty_at(to) {
        trace!("Move rejected as {} is occupied", to);
        return false;
    }

    let mv = Move::new(from, to);
    let d_row = mv.row_delta();
    let d_col = mv.col_delta();
    if d_col.abs() != d_row.abs() {
        return false;
    }

    let direction_ok = piece.is_king() || d_row.signum() == side.forward();
    match d_row.abs() {
        1 => direction_ok,
        2 => {
            let jumped = board.piece_at(from.midpoint(to));
            direction_ok && jumped.is_some_and(|p| p.side != side)
        }
        _ => false,
    }
}

/// Apply a move that has already passed [`is_legal_move`].
///
/// Returns a new board; the input is left untouched. Moves the piece, removes the jumped piece on
/// a capture step and promotes a man that lands on its king row. Behaviour for a move that was
/// not validated is unspecified; use [`apply_move_checked`] when the move comes from an
/// untrusted source.
pub fn apply_move(board: &Board, from: Position, to: Position) -> Board {
    let mut next = *board;
    let moving = next.cells[from.row as usize][from.col as usize].take();
    let placed = moving.map(|piece| {
        if piece.rank == Rank::Man && to.row == piece.side.king_row() {
            Piece::king(piece.side)
        } else {
            piece
        }
    });
    next.cells[to.row as usize][to.col as usize] = placed;

    if let Some(jumped) = Move::new(from, to).captured_square() {
        next.cells[jumped.row as usize][jumped.col as usize] = None;
    }
    next
}

/// Validate then apply.
///
/// # Errors
///
/// Returns [`EngineError::OffBoard`] for coordinates outside the grid and
/// [`EngineError::IllegalMove`] when the legality check fails.
pub fn apply_move_checked(board: &Board, mv: Move, side: Side) -> EngineResult<Board> {
    for position in [mv.from, mv.to] {
        if !position.is_on_board() {
            return Err(EngineError::OffBoard { position });
        }
    }
    if !is_legal_move(board, mv.from, mv.to, side) {
        return Err(EngineError::IllegalMove { mv, side });
    }
    Ok(apply_move(board, mv.from, mv.to))
}

/// Winner by piece exhaustion. Stalemate (pieces left but no legal move) is not a win.
pub fn check_winner(board: &Board) -> Option<Side> {
    let white = board.count(Side::White);
    let black = board.count(Side::Black);
    if white == 0 {
        Some(Side::Black)
    } else if black == 0 {
        Some(Side::White)
    } else {
        None
    }
}

/// Legal capture steps for the piece on `square`, in generation order.
///
/// Empty when the square is empty or the piece has nothing to jump.
pub fn capture_moves_from(board: &Board, square: Position) -> Vec<Move> {
    let Some(piece) = board.piece_at(square) else {
        return Vec::new();
    };
    JUMP_OFFSETS
        .iter()
        .map(|&(d_row, d_col)| Move::new(square, square.offset(d_row, d_col)))
        .filter(|mv| is_legal_move(board, mv.from, mv.to, piece.side))
        .collect()
}

/// Whether the piece of `side` standing on `square` has another capture available.
///
/// This is the one check behind the forced-continuation rule; both human and AI turns go
/// through it.
pub fn can_capture_again(board: &Board, square: Position, side: Side) -> bool {
    match board.piece_at(square) {
        Some(piece) if piece.side == side => !capture_moves_from(board, square).is_empty(),
        _ => false,
    }
}

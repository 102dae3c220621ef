//! Move generation
//!
//! Enumerates every legal single-step move for a side. Both AI strategies draw from this list,
//! and the search relies on its order for tie-breaking: sources in row-major order, then
//! [`DIAGONAL_OFFSETS`] in declaration order.

use crate::constants::*;
use crate::rules::is_legal_move;
use crate::types::*;

/// All legal moves for `side`, captures and simple steps mixed, in generation order.
pub fn generate_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut moves = Vec::new();
    for (from, piece) in board.pieces() {
        if piece.side != side {
            continue;
        }
        for &(d_row, d_col) in &DIAGONAL_OFFSETS {
            let to = from.offset(d_row, d_col);
            if to.is_on_board() && is_legal_move(board, from, to, side) {
                moves.push(Move::new(from, to));
            }
        }
    }
    moves
}

/// Whether `side` has at least one legal move.
pub fn has_any_move(board: &Board, side: Side) -> bool {
    board
        .pieces()
        .filter(|(_, piece)| piece.side == side)
        .any(|(from, _)| {
            DIAGONAL_OFFSETS
                .iter()
                .any(|&(d_row, d_col)| is_legal_move(board, from, from.offset(d_row, d_col), side))
        })
}

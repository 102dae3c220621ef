//! Public API for the draughts engine
//!
//! The six operations a front end needs. All of them are pure: boards go in by reference and
//! new boards come out, nothing is cached between calls.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::move_gen::generate_moves;
use crate::rules;
use crate::search::Searcher;
use crate::types::*;

/// Fresh starting position.
pub fn create_initial_board() -> Board {
    rules::initial_board()
}

/// Single-step legality for `side`; see [`rules::is_legal_move`].
pub fn is_legal_move(board: &Board, from: Position, to: Position, side: Side) -> bool {
    rules::is_legal_move(board, from, to, side)
}

/// Board after a validated move; see [`rules::apply_move`] for the precondition.
pub fn apply_move(board: &Board, from: Position, to: Position) -> Board {
    rules::apply_move(board, from, to)
}

/// Side that has captured every opposing piece, if any.
pub fn check_winner(board: &Board) -> Option<Side> {
    rules::check_winner(board)
}

/// Uniformly random legal move using the thread-local generator.
pub fn choose_random_move(board: &Board, side: Side) -> Option<Move> {
    choose_random_move_with(board, side, &mut rand::rng())
}

/// Uniformly random legal move drawn from `rng`.
pub fn choose_random_move_with<R: Rng + ?Sized>(
    board: &Board,
    side: Side,
    rng: &mut R,
) -> Option<Move> {
    generate_moves(board, side).choose(rng).copied()
}

/// Best move found by a four-ply minimax search.
pub fn choose_search_move(board: &Board, side: Side) -> Option<Move> {
    Searcher::default().search(board, side).best_move
}

//! Plain depth-limited minimax
//!
//! Scores are always from `side`'s point of view. `maximizing` says whose turn it is at this
//! node: `side` when true, the opponent when false.

use crate::constants::*;
use crate::evaluation::evaluate;
use crate::move_gen::generate_moves;
use crate::rules::apply_move;
use crate::types::*;

pub(crate) fn minimax(
    board: &Board,
    side: Side,
    depth: u32,
    maximizing: bool,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if depth == 0 {
        return evaluate(board, side);
    }

    let mover = if maximizing { side } else { side.opponent() };
    let moves = generate_moves(board, mover);
    if moves.is_empty() {
        // Whoever is stuck here has lost this line.
        return if maximizing { SCORE_LOSS } else { SCORE_WIN };
    }

    let scores = moves.iter().map(|mv| {
        let child = apply_move(board, mv.from, mv.to);
        minimax(&child, side, depth - 1, !maximizing, nodes)
    });

    if maximizing {
        scores.fold(SCORE_LOSS, i32::max)
    } else {
        scores.fold(SCORE_WIN, i32::min)
    }
}

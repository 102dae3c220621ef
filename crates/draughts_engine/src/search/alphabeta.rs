//! Alpha-beta variant of [`super::minimax`]
//!
//! Fail-soft bounds: a result at or below `alpha` is only an upper bound, a result at or above
//! `beta` only a lower bound, anything strictly between is exact. The root only replaces its
//! best move on a strictly greater score, so a cut-off child can never displace an earlier move
//! with the same true value and the chosen move matches plain minimax.

use crate::constants::*;
use crate::evaluation::evaluate;
use crate::move_gen::generate_moves;
use crate::rules::apply_move;
use crate::types::*;

pub(crate) fn alphabeta(
    board: &Board,
    side: Side,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
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
        return if maximizing { SCORE_LOSS } else { SCORE_WIN };
    }

    if maximizing {
        let mut best = SCORE_LOSS;
        for mv in moves {
            let child = apply_move(board, mv.from, mv.to);
            best = best.max(alphabeta(&child, side, depth - 1, alpha, beta, false, nodes));
            alpha = alpha.max(best);
            if alpha >= beta {
                break;
            }
        }
        best
    } else {
        let mut best = SCORE_WIN;
        for mv in moves {
            let child = apply_move(board, mv.from, mv.to);
            best = best.min(alphabeta(&child, side, depth - 1, alpha, beta, true, nodes));
            beta = beta.min(best);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

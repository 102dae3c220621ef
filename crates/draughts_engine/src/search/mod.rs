//! Fixed-depth adversarial search
//!
//! Implements the AI for the timed mode:
//! - Plain minimax over every legal move, no memoization (`minimax`)
//! - An optional alpha-beta variant that visits fewer nodes but picks the same move (`alphabeta`)
//!
//! ## Tie-breaking
//!
//! The root keeps the first candidate with the strictly best score, so equal scores resolve to
//! the earliest move in generation order. When every candidate loses outright the first one is
//! still returned: the side has legal moves, so "no move" would be wrong. Returning nothing
//! there, as a strict comparison against −∞ would, is deliberately not done.
//!
//! ## Module Organization
//!
//! - `minimax` - reference recursive search
//! - `alphabeta` - pruned search with identical move choice

mod alphabeta;
mod minimax;

use tracing::debug;

use crate::constants::*;
use crate::move_gen::generate_moves;
use crate::rules::apply_move;
use crate::types::*;

/// Result of one root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub best_move: Option<Move>,
    /// Propagated score of `best_move`; `SCORE_LOSS` when there was nothing to search.
    pub score: i32,
    /// Nodes visited, root excluded.
    pub nodes: u64,
}

/// Depth-limited minimax searcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Searcher {
    depth: u32,
    alpha_beta: bool,
}

impl Default for Searcher {
    fn default() -> Self {
        Searcher::new(SEARCH_DEPTH)
    }
}

impl Searcher {
    /// A searcher looking `depth` plies ahead. Depth is at least one ply so that the root
    /// always has a move to return.
    pub fn new(depth: u32) -> Self {
        Searcher {
            depth: depth.max(1),
            alpha_beta: false,
        }
    }

    pub fn with_alpha_beta(mut self, enabled: bool) -> Self {
        self.alpha_beta = enabled;
        self
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn uses_alpha_beta(&self) -> bool {
        self.alpha_beta
    }

    /// Search every legal move of `side`.
    pub fn search(&self, board: &Board, side: Side) -> SearchOutcome {
        let moves = generate_moves(board, side);
        self.search_among(board, side, &moves)
    }

    /// Search only `candidates` at the root; deeper plies consider every legal move.
    pub fn search_among(&self, board: &Board, side: Side, candidates: &[Move]) -> SearchOutcome {
        let mut nodes = 0u64;
        let mut best: Option<(Move, i32)> = None;

        for &mv in candidates {
            let child = apply_move(board, mv.from, mv.to);
            let score = if self.alpha_beta {
                let alpha = best.map_or(SCORE_LOSS, |(_, score)| score);
                alphabeta::alphabeta(
                    &child,
                    side,
                    self.depth - 1,
                    alpha,
                    SCORE_WIN,
                    false,
                    &mut nodes,
                )
            } else {
                minimax::minimax(&child, side, self.depth - 1, false, &mut nodes)
            };

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }

        let outcome = SearchOutcome {
            best_move: best.map(|(mv, _)| mv),
            score: best.map_or(SCORE_LOSS, |(_, score)| score),
            nodes,
        };
        debug!(
            "Search for {} at depth {} (alpha-beta: {}): {} candidates, {} nodes, best {:?} scoring {}",
            side,
            self.depth,
            self.alpha_beta,
            candidates.len(),
            outcome.nodes,
            outcome.best_move,
            outcome.score
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::initial_board;

    fn pos(row: i8, col: i8) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_depth_is_clamped_to_one() {
        assert_eq!(Searcher::new(0).depth(), 1);
        assert_eq!(Searcher::default().depth(), SEARCH_DEPTH);
    }

    #[test]
    fn test_no_candidates_gives_no_move() {
        let outcome = Searcher::default().search_among(&initial_board(), Side::White, &[]);
        assert_eq!(outcome.best_move, None);
        assert_eq!(outcome.score, SCORE_LOSS);
        assert_eq!(outcome.nodes, 0);
    }

    #[test]
    fn test_takes_free_piece() {
        // White can jump the lone black man and leave black with nothing.
        let board: Board = "........
                            ........
                            ........
                            ........
                            ...b....
                            ....w...
                            ........
                            ........"
            .parse()
            .unwrap();
        let outcome = Searcher::default().search(&board, Side::White);
        assert_eq!(outcome.best_move, Some(Move::new(pos(5, 4), pos(3, 2))));
        assert_eq!(outcome.score, SCORE_WIN);
    }

    #[test]
    fn test_all_losing_candidates_still_return_first() {
        // Both of black's steps land next to white's king, which jumps the last black piece.
        let board: Board = "........
                            ........
                            ...b....
                            ........
                            ...W....
                            ........
                            ........
                            ........"
            .parse()
            .unwrap();
        let outcome = Searcher::default().search(&board, Side::Black);
        assert_eq!(outcome.score, SCORE_LOSS);
        assert_eq!(outcome.best_move, Some(Move::new(pos(2, 3), pos(3, 2))));
    }

    #[test]
    fn test_alpha_beta_agrees_with_plain_search() {
        let plain = Searcher::default();
        let pruned = Searcher::default().with_alpha_beta(true);
        let board = initial_board();
        for side in [Side::White, Side::Black] {
            let a = plain.search(&board, side);
            let b = pruned.search(&board, side);
            assert_eq!(a.best_move, b.best_move);
            assert_eq!(a.score, b.score);
            assert!(b.nodes <= a.nodes);
        }
    }
}

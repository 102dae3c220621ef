//! AI move selectors
//!
//! A [`Strategy`] picks one move out of a candidate list. Callers normally pass every legal move
//! ([`Strategy::choose`]); during a multi-jump they pass only the captures available from the
//! landing square, and both strategies respect that restriction without knowing about it.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::move_gen::generate_moves;
use crate::search::Searcher;
use crate::types::*;

pub trait Strategy {
    /// Short label used in logs.
    fn name(&self) -> &'static str;

    /// Pick one of `candidates`, or `None` when the list is empty.
    fn select(&mut self, board: &Board, side: Side, candidates: &[Move]) -> Option<Move>;

    /// Pick among every legal move of `side`.
    fn choose(&mut self, board: &Board, side: Side) -> Option<Move> {
        let moves = generate_moves(board, side);
        self.select(board, side, &moves)
    }
}

/// Uniformly random choice among the candidates.
#[derive(Debug, Clone)]
pub struct RandomMover<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomMover<R> {
    pub fn new(rng: R) -> Self {
        RandomMover { rng }
    }
}

impl RandomMover<StdRng> {
    /// Reproducible mover for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        RandomMover::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        RandomMover::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> Strategy for RandomMover<R> {
    fn name(&self) -> &'static str {
        "random"
    }

    fn select(&mut self, _board: &Board, _side: Side, candidates: &[Move]) -> Option<Move> {
        candidates.choose(&mut self.rng).copied()
    }
}

impl Strategy for Searcher {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn select(&mut self, board: &Board, side: Side, candidates: &[Move]) -> Option<Move> {
        self.search_among(board, side, candidates).best_move
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::initial_board;
    use std::collections::HashSet;

    #[test]
    fn test_random_mover_only_returns_candidates() {
        let board = initial_board();
        let legal = generate_moves(&board, Side::White);
        let mut mover = RandomMover::seeded(7);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let mv = mover.choose(&board, Side::White).unwrap();
            assert!(legal.contains(&mv));
            seen.insert(mv);
        }
        // 200 uniform draws over 7 moves reach every one of them.
        assert_eq!(seen.len(), legal.len());
    }

    #[test]
    fn test_random_mover_is_reproducible_with_a_seed() {
        let board = initial_board();
        let mut a = RandomMover::seeded(42);
        let mut b = RandomMover::seeded(42);
        for _ in 0..20 {
            assert_eq!(a.choose(&board, Side::Black), b.choose(&board, Side::Black));
        }
    }

    #[test]
    fn test_empty_candidates_yield_none() {
        let board = initial_board();
        assert_eq!(RandomMover::seeded(1).select(&board, Side::White, &[]), None);
        assert_eq!(Searcher::default().select(&board, Side::White, &[]), None);
    }

    #[test]
    fn test_searcher_respects_candidate_restriction() {
        let board = initial_board();
        let only = Move::new(Position::new(5, 6), Position::new(4, 7));
        assert_eq!(Searcher::default().select(&board, Side::White, &[only]), Some(only));
    }
}

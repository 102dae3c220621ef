//! Checkers engine for Dama
//!
//! Rules, move generation and AI move selection for 8×8 checkers. Everything here is pure and
//! synchronous; game flow (turns, selection, timers, multi-jump continuation) belongs to the
//! caller.
//!
//! ## Module Organization
//!
//! - `types` / `board` - board model and text notation
//! - `rules` - legality, move application, promotion, winner, continuation probe
//! - `move_gen` - ordered legal-move enumeration
//! - `evaluation` - material evaluation
//! - `search` - fixed-depth minimax (optionally alpha-beta)
//! - `strategy` - random and search-based move selectors
//! - `api` - the operations a front end calls

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod move_gen;
pub mod rules;
pub mod search;
pub mod strategy;
pub mod types;

pub use api::{
    apply_move, check_winner, choose_random_move, choose_random_move_with, choose_search_move,
    create_initial_board, is_legal_move,
};
pub use error::{EngineError, EngineResult};
pub use search::{SearchOutcome, Searcher};
pub use strategy::{RandomMover, Strategy};
pub use types::{Board, Cell, Move, Piece, Position, Rank, Side};

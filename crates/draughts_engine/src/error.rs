//! Error types for the draughts engine
//!
//! The rule queries themselves never fail: legality is a `bool`, "no move" and "no winner" are
//! `None`. These errors cover the fallible edges around them: the checked move application and
//! parsing boards from text.

use thiserror::Error;

use crate::types::{Move, Position, Side};

/// Errors that can occur in the draughts engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Coordinates outside the 8×8 grid
    #[error("Position {position} is off the board")]
    OffBoard { position: Position },

    /// Move rejected by the legality check
    #[error("Illegal move {mv} for {side}")]
    IllegalMove { mv: Move, side: Side },

    /// Board text did not have eight rows
    #[error("Board text has {found} rows (expected 8)")]
    RowCount { found: usize },

    /// A board row did not have eight squares
    #[error("Board row {row} has {found} squares (expected 8)")]
    RowWidth { row: usize, found: usize },

    /// Unrecognised square character
    #[error("Unknown square character '{found}' at row {row}, col {col}")]
    UnknownSquare { row: usize, col: usize, found: char },

    /// A piece placed where pieces can never stand
    #[error("Piece on light square at row {row}, col {col}")]
    PieceOnLightSquare { row: usize, col: usize },
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

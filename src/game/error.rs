//! Error types for game module
//!
//! Errors raised by [`GameSession`](crate::game::session::GameSession) when an action does not
//! fit the current state of play. Rule violations come from the engine and are wrapped as-is.

use draughts_engine::{EngineError, Move, Position, Side};

/// Errors that can occur in game logic
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// The game has a winner; only restart or mode change are accepted
    #[error("Game is over, {winner} won")]
    GameOver { winner: Side },

    /// Input arrived while the AI is to move
    #[error("Waiting for the AI to move for {side}")]
    AiToMove { side: Side },

    /// The AI was asked to play for a side it does not control
    #[error("{side} is not played by the AI in this mode")]
    NotAiTurn { side: Side },

    /// A multi-jump is in progress and the move does not continue it
    #[error("Move {mv} does not continue the capture from {square}")]
    ContinuationPending { square: Position, mv: Move },

    /// Side to move has pieces but nothing to play
    #[error("No legal move for {side}")]
    NoLegalMove { side: Side },

    /// Move rejected by the rules engine
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;

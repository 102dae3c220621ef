//! Checkers AI opponent
//!
//! Wires the engine's strategies to the game: [`StrategyKind`] names them, [`AiPlayer`] owns one
//! instance of each and hands out the one a mode calls for.
//!
//! The AI never bypasses the rules. The session asks it to pick among the moves the session
//! would accept from a human, then commits the pick through the same path as a click.

pub mod player;

// Re-export for convenience
pub use player::{AiPlayer, StrategyKind};

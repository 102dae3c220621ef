//! Game module - checkers game flow on top of the engine
//!
//! The engine in `draughts_engine` answers rule questions about a board. This module holds the
//! state of an actual game and decides what happens next.
//!
//! # Module Organization
//!
//! - `mode` - [`GameMode`]: solo, two-player, extreme
//! - `ai` - [`AiPlayer`] and [`StrategyKind`], the AI seat
//! - `timer` - [`TurnTimer`], the per-move clock of timed modes
//! - `session` - [`GameSession`], selection, turns, multi-jumps, winner
//! - `driver` - headless match runner used by the `dama` binary
//! - `error` - [`GameError`] and the [`GameResult`] alias

pub mod ai;
pub mod driver;
pub mod error;
pub mod mode;
pub mod session;
pub mod timer;

pub use ai::{AiPlayer, StrategyKind};
pub use driver::{run_match, MatchConfig, MatchEnd, MatchSummary};
pub use error::{GameError, GameResult};
pub use mode::GameMode;
pub use session::{ClickOutcome, GameSession, MoveOutcome};
pub use timer::TurnTimer;

//! Game modes
//!
//! | Mode      | Black played by | Turn timer | Multi-jump continuation |
//! |-----------|-----------------|------------|-------------------------|
//! | Solo      | random AI       | no         | no                      |
//! | TwoPlayer | human           | no         | no                      |
//! | Extreme   | minimax AI      | 10 s       | forced                  |
//!
//! White is always a human seat; the AI, when there is one, always plays black.

use std::fmt;

use clap::ValueEnum;
use draughts_engine::Side;
use serde::{Deserialize, Serialize};

use crate::game::ai::StrategyKind;

/// Which kind of game is being played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Human (white) against the random AI
    #[default]
    Solo,
    /// Two humans sharing the board
    TwoPlayer,
    /// Human against the minimax AI, with a move clock and forced multi-jumps
    Extreme,
}

impl GameMode {
    /// The side the AI plays, if this mode has an AI.
    pub fn ai_side(self) -> Option<Side> {
        match self {
            GameMode::Solo | GameMode::Extreme => Some(Side::Black),
            GameMode::TwoPlayer => None,
        }
    }

    /// The strategy the AI uses in this mode.
    pub fn ai_strategy(self) -> Option<StrategyKind> {
        match self {
            GameMode::Solo => Some(StrategyKind::Random),
            GameMode::Extreme => Some(StrategyKind::Search),
            GameMode::TwoPlayer => None,
        }
    }

    pub fn is_timed(self) -> bool {
        matches!(self, GameMode::Extreme)
    }

    /// Whether a piece that captured and can capture again must keep going.
    pub fn enforces_continuation(self) -> bool {
        matches!(self, GameMode::Extreme)
    }

    /// Whether `side` is played by the AI in this mode.
    pub fn is_ai(self, side: Side) -> bool {
        self.ai_side() == Some(side)
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameMode::Solo => "solo",
            GameMode::TwoPlayer => "two-player",
            GameMode::Extreme => "extreme",
        };
        f.write_str(name)
    }
}

//! User settings
//!
//! Every field has a default so that a partial or older `settings.json` still loads.

use std::time::Duration;

use draughts_engine::constants::SEARCH_DEPTH;
use draughts_engine::Searcher;
use serde::{Deserialize, Serialize};

use crate::game::mode::GameMode;

/// Seconds a player gets per move in timed modes
pub const MOVE_TIME_LIMIT_SECS: u64 = 10;

/// Pause before the AI plays, so its moves can be followed
pub const AI_MOVE_DELAY_MS: u64 = 600;

/// User preferences for a game of checkers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Mode the game starts in
    pub mode: GameMode,

    /// Per-move time limit in timed modes
    pub move_time_limit_secs: u64,

    /// Delay before each AI move
    pub ai_move_delay_ms: u64,

    /// Plies searched by the minimax AI
    pub search_depth: u32,

    /// Use alpha-beta pruning in the search (same moves, fewer nodes)
    pub alpha_beta: bool,

    /// Seed for the random AI; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::Solo,
            move_time_limit_secs: MOVE_TIME_LIMIT_SECS,
            ai_move_delay_ms: AI_MOVE_DELAY_MS,
            search_depth: SEARCH_DEPTH,
            alpha_beta: false,
            seed: None,
        }
    }
}

impl GameSettings {
    pub fn move_time_limit(&self) -> Duration {
        Duration::from_secs(self.move_time_limit_secs)
    }

    pub fn ai_move_delay(&self) -> Duration {
        Duration::from_millis(self.ai_move_delay_ms)
    }

    /// Searcher configured from `search_depth` and `alpha_beta`.
    pub fn searcher(&self) -> Searcher {
        Searcher::new(self.search_depth).with_alpha_beta(self.alpha_beta)
    }
}

//! AI player resource

use std::fmt;

use clap::ValueEnum;
use draughts_engine::{RandomMover, Searcher, Strategy};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::GameSettings;

/// Move-selection strategies available to the AI (and to stand-ins for human seats)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// Uniformly random legal move
    Random,
    /// Fixed-depth minimax
    Search,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Random => f.write_str("random"),
            StrategyKind::Search => f.write_str("search"),
        }
    }
}

/// Owns the strategy instances used to play a side
#[derive(Debug, Clone)]
pub struct AiPlayer {
    random: RandomMover,
    searcher: Searcher,
}

impl AiPlayer {
    /// Random mover seeded with `seed` (OS entropy when `None`) and the given searcher.
    pub fn new(seed: Option<u64>, searcher: Searcher) -> Self {
        let random = match seed {
            Some(seed) => RandomMover::seeded(seed),
            None => RandomMover::from_os_rng(),
        };
        debug!(
            "[AI] Player ready (seed: {:?}, depth: {}, alpha-beta: {})",
            seed,
            searcher.depth(),
            searcher.uses_alpha_beta()
        );
        Self { random, searcher }
    }

    pub fn from_settings(settings: &GameSettings) -> Self {
        Self::new(settings.seed, settings.searcher())
    }

    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }

    pub fn strategy(&mut self, kind: StrategyKind) -> &mut dyn Strategy {
        match kind {
            StrategyKind::Random => &mut self.random,
            StrategyKind::Search => &mut self.searcher,
        }
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new(None, Searcher::default())
    }
}

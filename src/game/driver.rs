//! Headless match driver
//!
//! Plays a whole game through a [`GameSession`]. AI seats move through
//! [`GameSession::play_ai_turn`]; human seats are played by a stand-in strategy that goes
//! through [`GameSession::click`] exactly as a person would, select then destination.

use std::thread;
use std::time::Duration;

use draughts_engine::{Side, Strategy};
use serde::Serialize;
use tracing::{info, warn};

use crate::game::ai::{AiPlayer, StrategyKind};
use crate::game::error::{GameError, GameResult};
use crate::game::mode::GameMode;
use crate::game::session::{ClickOutcome, GameSession, MoveOutcome};

/// Plies after which an undecided match is abandoned
pub const DEFAULT_MAX_PLIES: u32 = 200;

/// How a match is driven
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    /// Stand-in for the white (human) seat
    pub white: StrategyKind,
    /// Stand-in for the black seat when no AI plays it
    pub black: StrategyKind,
    pub max_plies: u32,
    /// Thinking time charged to the clock before each AI move
    pub ai_delay: Duration,
    /// Actually wait `ai_delay` instead of only charging it
    pub realtime: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            white: StrategyKind::Search,
            black: StrategyKind::Random,
            max_plies: DEFAULT_MAX_PLIES,
            ai_delay: Duration::ZERO,
            realtime: false,
        }
    }
}

impl MatchConfig {
    fn stand_in(&self, side: Side) -> StrategyKind {
        match side {
            Side::White => self.white,
            Side::Black => self.black,
        }
    }
}

/// Why a match stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "kebab-case")]
pub enum MatchEnd {
    Winner { side: Side },
    /// Side to move still had pieces but no move
    NoLegalMove { side: Side },
    PlyLimit,
}

/// Result of a driven match, printable as JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    pub mode: GameMode,
    pub plies: u32,
    pub captures: u32,
    pub timeouts: u32,
    pub end: MatchEnd,
    pub white_pieces: usize,
    pub black_pieces: usize,
    pub final_board: String,
}

/// Play `session` to the end (or `max_plies`).
///
/// `ai` plays the mode's AI seat; `stand_ins` plays the human seats.
pub fn run_match(
    session: &mut GameSession,
    ai: &mut AiPlayer,
    stand_ins: &mut AiPlayer,
    config: &MatchConfig,
) -> GameResult<MatchSummary> {
    let mut plies = 0;
    let mut captures = 0;
    let mut timeouts = 0;

    let end = loop {
        if let Some(side) = session.winner() {
            break MatchEnd::Winner { side };
        }
        if plies >= config.max_plies {
            break MatchEnd::PlyLimit;
        }
        if !session.has_legal_move() {
            break MatchEnd::NoLegalMove {
                side: session.turn(),
            };
        }

        let result = if session.is_ai_turn() {
            if config.realtime && !config.ai_delay.is_zero() {
                thread::sleep(config.ai_delay);
            }
            if let Some(side) = session.tick(config.ai_delay) {
                warn!("[MATCH] {} timed out", side);
                timeouts += 1;
                continue;
            }
            session.play_ai_turn(ai)
        } else {
            let kind = config.stand_in(session.turn());
            play_by_clicks(session, stand_ins.strategy(kind))
        };

        match result {
            Ok(outcome) => {
                plies += 1;
                if outcome.captured.is_some() {
                    captures += 1;
                }
            }
            Err(GameError::NoLegalMove { side }) => break MatchEnd::NoLegalMove { side },
            Err(e) => return Err(e),
        }
    };

    let board = session.board();
    let summary = MatchSummary {
        mode: session.mode(),
        plies,
        captures,
        timeouts,
        end,
        white_pieces: board.count(Side::White),
        black_pieces: board.count(Side::Black),
        final_board: board.to_string(),
    };
    info!(
        "[MATCH] Finished after {} plies: {:?} (white {}, black {})",
        summary.plies, summary.end, summary.white_pieces, summary.black_pieces
    );
    Ok(summary)
}

/// Let `strategy` pick a move for a human seat and enter it as two clicks.
pub fn play_by_clicks(
    session: &mut GameSession,
    strategy: &mut dyn Strategy,
) -> GameResult<MoveOutcome> {
    let side = session.turn();
    let candidates = session.legal_moves();
    let mv = strategy
        .select(session.board(), side, &candidates)
        .ok_or(GameError::NoLegalMove { side })?;

    if session.selected() != Some(mv.from) {
        session.click(mv.from)?;
    }
    match session.click(mv.to)? {
        ClickOutcome::Moved(outcome) => Ok(outcome),
        other => {
            warn!("[MATCH] Click on {} gave {:?}, committing {} directly", mv.to, other, mv);
            session.commit_move(mv)
        }
    }
}

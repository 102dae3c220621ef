//! Game session state machine
//!
//! [`GameSession`] owns everything a front end needs to run a game of checkers: the board, the
//! side to move, the selected square, a pending multi-jump, the winner, the move clock and the
//! mode. The engine stays stateless; every rule question goes back to it with the current board.
//!
//! # Turn flow
//!
//! 1. A human selects one of their pieces with [`click`](GameSession::click), then clicks a
//!    destination. The AI instead picks from [`legal_moves`](GameSession::legal_moves) through
//!    [`play_ai_turn`](GameSession::play_ai_turn).
//! 2. Both paths end in [`commit_move`](GameSession::commit_move), which applies the move,
//!    checks for a winner and decides whether the turn passes.
//! 3. In modes that enforce continuation, a piece that captured and can capture again keeps
//!    the turn. Until it finishes, only captures from its square are accepted.
//! 4. In timed modes, [`tick`](GameSession::tick) passes the turn when the clock runs out.

use std::time::Duration;

use draughts_engine::move_gen::{generate_moves, has_any_move};
use draughts_engine::rules::{
    apply_move_checked, can_capture_again, capture_moves_from, check_winner, is_legal_move,
};
use draughts_engine::{create_initial_board, Board, Move, Position, Side, Strategy};
use tracing::{debug, info};

use crate::core::GameSettings;
use crate::game::ai::AiPlayer;
use crate::game::error::{GameError, GameResult};
use crate::game::mode::GameMode;
use crate::game::timer::TurnTimer;

/// What a committed move did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub side: Side,
    pub mv: Move,
    /// Square of the piece removed by a capture
    pub captured: Option<Position>,
    /// A man reached its king row
    pub promoted: bool,
    /// The same piece must capture again before the turn passes
    pub continues: bool,
    pub winner: Option<Side>,
}

/// How the session interpreted a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Selected(Position),
    Deselected,
    Moved(MoveOutcome),
    /// A multi-jump is pending and the click did not continue it
    Ignored,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    turn: Side,
    selected: Option<Position>,
    pending: Option<Position>,
    winner: Option<Side>,
    mode: GameMode,
    timer: TurnTimer,
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::new(GameMode::default())
    }
}

impl GameSession {
    /// Fresh game in `mode` with the default move clock.
    pub fn new(mode: GameMode) -> Self {
        Self::with_board(mode, create_initial_board(), Side::White, TurnTimer::default().limit())
    }

    pub fn from_settings(settings: &GameSettings) -> Self {
        Self::with_board(
            settings.mode,
            create_initial_board(),
            Side::White,
            settings.move_time_limit(),
        )
    }

    /// Session resuming from an arbitrary position, `turn` to move.
    pub fn with_board(mode: GameMode, board: Board, turn: Side, move_time_limit: Duration) -> Self {
        let mut session = Self {
            board,
            turn,
            selected: None,
            pending: None,
            winner: check_winner(&board),
            mode,
            timer: TurnTimer::new(move_time_limit),
        };
        if session.winner.is_some() {
            session.timer.stop();
        }
        session
    }

    /// Back to the starting position, white to move, same mode.
    pub fn restart(&mut self) {
        self.board = create_initial_board();
        self.turn = Side::White;
        self.selected = None;
        self.pending = None;
        self.winner = None;
        self.timer.reset();
        info!("[SESSION] New {} game", self.mode);
    }

    /// Switch mode; always starts a new game.
    pub fn set_mode(&mut self, mode: GameMode) {
        info!("[SESSION] Mode changed from {} to {}", self.mode, mode);
        self.mode = mode;
        self.restart();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    /// Landing square of a capture that must be continued.
    pub fn pending_continuation(&self) -> Option<Position> {
        self.pending
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Time left on the move clock, in timed modes only.
    pub fn time_left(&self) -> Option<Duration> {
        self.mode.is_timed().then(|| self.timer.remaining())
    }

    pub fn is_ai_turn(&self) -> bool {
        self.winner.is_none() && self.mode.is_ai(self.turn)
    }

    /// Moves the session would accept right now, in generation order.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.winner.is_some() {
            return Vec::new();
        }
        match self.pending {
            Some(square) => capture_moves_from(&self.board, square),
            None => generate_moves(&self.board, self.turn),
        }
    }

    /// Whether the side to move can play at all. False once the game is decided.
    pub fn has_legal_move(&self) -> bool {
        if self.winner.is_some() {
            return false;
        }
        match self.pending {
            Some(square) => !capture_moves_from(&self.board, square).is_empty(),
            None => has_any_move(&self.board, self.turn),
        }
    }

    /// Human input on `pos`.
    ///
    /// With a selection, a click on a legal destination plays the move. Otherwise a click on
    /// one of the mover's pieces selects it and anything else clears the selection. While a
    /// multi-jump is pending the selection is locked to the jumping piece.
    pub fn click(&mut self, pos: Position) -> GameResult<ClickOutcome> {
        if let Some(winner) = self.winner {
            return Err(GameError::GameOver { winner });
        }
        if self.is_ai_turn() {
            return Err(GameError::AiToMove { side: self.turn });
        }

        if let Some(from) = self.selected {
            let mv = Move::new(from, pos);
            if self.accepts(mv) {
                return self.commit_move(mv).map(ClickOutcome::Moved);
            }
        }

        if let Some(square) = self.pending {
            debug!(
                "[SESSION] Click on {} ignored, {} must keep capturing from {}",
                pos, self.turn, square
            );
            return Ok(ClickOutcome::Ignored);
        }

        match self.board.piece_at(pos) {
            Some(piece) if piece.side == self.turn => {
                self.selected = Some(pos);
                Ok(ClickOutcome::Selected(pos))
            }
            _ => {
                self.selected = None;
                Ok(ClickOutcome::Deselected)
            }
        }
    }

    /// Apply `mv` for the side to move.
    ///
    /// The single path by which moves reach the board, for human and AI turns alike. Applies
    /// the move through the engine's checked variant, records a winner, and either keeps the
    /// turn for a forced continuation or passes it.
    pub fn commit_move(&mut self, mv: Move) -> GameResult<MoveOutcome> {
        if let Some(winner) = self.winner {
            return Err(GameError::GameOver { winner });
        }
        self.check_continuation(mv)?;

        let side = self.turn;
        let was_king = self.board.piece_at(mv.from).is_some_and(|p| p.is_king());
        self.board = apply_move_checked(&self.board, mv, side)?;
        let promoted = !was_king && self.board.piece_at(mv.to).is_some_and(|p| p.is_king());
        let captured = mv.captured_square();
        info!("[SESSION] {} played {}", side, mv);

        let winner = check_winner(&self.board);
        let continues = winner.is_none()
            && captured.is_some()
            && self.mode.enforces_continuation()
            && can_capture_again(&self.board, mv.to, side);

        if let Some(winner) = winner {
            info!("[SESSION] {} wins", winner);
            self.winner = Some(winner);
            self.selected = None;
            self.pending = None;
            self.timer.stop();
        } else if continues {
            info!("[SESSION] {} must continue capturing from {}", side, mv.to);
            self.pending = Some(mv.to);
            self.selected = Some(mv.to);
        } else {
            self.pass_turn();
        }

        Ok(MoveOutcome {
            side,
            mv,
            captured,
            promoted,
            continues,
            winner,
        })
    }

    /// Let `strategy` pick among [`legal_moves`](Self::legal_moves) and commit its choice.
    pub fn play_turn_with(&mut self, strategy: &mut dyn Strategy) -> GameResult<MoveOutcome> {
        if let Some(winner) = self.winner {
            return Err(GameError::GameOver { winner });
        }
        let side = self.turn;
        let candidates = self.legal_moves();
        let mv = strategy
            .select(&self.board, side, &candidates)
            .ok_or(GameError::NoLegalMove { side })?;
        debug!("[AI] {} picked {} for {}", strategy.name(), mv, side);
        self.commit_move(mv)
    }

    /// Play one move for the AI side with the strategy the mode calls for.
    ///
    /// A forced continuation leaves the turn with the AI; call again until it passes.
    pub fn play_ai_turn(&mut self, ai: &mut AiPlayer) -> GameResult<MoveOutcome> {
        if let Some(winner) = self.winner {
            return Err(GameError::GameOver { winner });
        }
        let kind = match self.mode.ai_strategy() {
            Some(kind) if self.mode.is_ai(self.turn) => kind,
            _ => return Err(GameError::NotAiTurn { side: self.turn }),
        };
        self.play_turn_with(ai.strategy(kind))
    }

    /// Advance the move clock. Returns the side whose time ran out, if any.
    ///
    /// No effect outside timed modes or once the game is decided.
    pub fn tick(&mut self, elapsed: Duration) -> Option<Side> {
        if !self.mode.is_timed() || self.winner.is_some() {
            return None;
        }
        if !self.timer.tick(elapsed) {
            return None;
        }
        let side = self.turn;
        info!(
            "[TIMER] {} ran out of time, turn passes to {}",
            side,
            side.opponent()
        );
        self.pass_turn();
        Some(side)
    }

    fn pass_turn(&mut self) {
        self.turn = self.turn.opponent();
        self.selected = None;
        self.pending = None;
        self.timer.reset();
    }

    fn accepts(&self, mv: Move) -> bool {
        self.check_continuation(mv).is_ok() && is_legal_move(&self.board, mv.from, mv.to, self.turn)
    }

    fn check_continuation(&self, mv: Move) -> GameResult<()> {
        match self.pending {
            Some(square) if mv.from != square || !mv.is_capture() => {
                Err(GameError::ContinuationPending { square, mv })
            }
            _ => Ok(()),
        }
    }
}

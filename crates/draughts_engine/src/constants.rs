//! # Engine Constants - Board Geometry, Piece Values & Search Parameters
//!
//! ## Board Geometry
//!
//! The board is a fixed 8×8 grid addressed by `(row, col)`. Row 0 is black's home edge and
//! row 7 is white's home edge, so white men advance toward decreasing rows and black men toward
//! increasing rows. Only dark squares (`(row + col)` odd) ever hold a piece.
//!
//! ## Diagonal Offsets
//!
//! Move generation walks `DIAGONAL_OFFSETS` in order. The order is part of the engine's contract:
//! the search breaks ties in favour of the first move generated, so changing the order changes
//! which of two equally scored moves the AI plays.
//!
//! | Offset     | Meaning                          |
//! |------------|----------------------------------|
//! | `(±1, ±1)` | simple step                      |
//! | `(±2, ±2)` | capture step over the midpoint   |
//!
//! ## Material Values
//!
//! The static evaluation is pure material: a king is worth three men. Scores are summed from the
//! acting side's point of view, so the starting position evaluates to 0 for either side.
//!
//! ## Search Bounds
//!
//! `SCORE_WIN` / `SCORE_LOSS` stand in for ±∞. A side with no legal move inside the search tree
//! scores `SCORE_LOSS` when it is the maximizing side and `SCORE_WIN` when it is the minimizing
//! side. They are symmetric so that neither overflows when compared or negated.

pub const BOARD_SIZE: i8 = 8;
pub const BOARD_SIZE_US: usize = BOARD_SIZE as usize;

/// Rows each side fills at game start.
pub const BLACK_HOME_ROWS: core::ops::Range<i8> = 0..3;
pub const WHITE_HOME_ROWS: core::ops::Range<i8> = 5..8;

pub const PIECES_PER_SIDE: usize = 12;

/// Candidate displacements, in generation order (Δrow ascending, then Δcol ascending).
pub const DIAGONAL_OFFSETS: [(i8, i8); 8] = [
    (-2, -2),
    (-2, 2),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (2, -2),
    (2, 2),
];

/// Capture displacements, in generation order.
pub const JUMP_OFFSETS: [(i8, i8); 4] = [(-2, -2), (-2, 2), (2, -2), (2, 2)];

pub const MAN_VALUE: i32 = 1;
pub const KING_VALUE: i32 = 3;

pub const SCORE_WIN: i32 = i32::MAX;
pub const SCORE_LOSS: i32 = -i32::MAX;

/// Plies searched by the adversarial strategy.
pub const SEARCH_DEPTH: u32 = 4;

pub const EMPTY_CHAR: char = '.';
pub const WHITE_MAN_CHAR: char = 'w';
pub const WHITE_KING_CHAR: char = 'W';
pub const BLACK_MAN_CHAR: char = 'b';
pub const BLACK_KING_CHAR: char = 'B';

//! # Engine Core Types
//!
//! ## Overview
//!
//! Everything the engine passes around is a small `Copy` value:
//!
//! - [`Side`] - white or black; decides ownership, forward direction and king row
//! - [`Rank`] - man or king
//! - [`Piece`] - a side plus a rank
//! - [`Cell`] - `Option<Piece>`, the five possible occupants of a square
//! - [`Position`] - a `(row, col)` pair, signed so off-board coordinates can be represented
//!   and rejected instead of wrapping
//! - [`Move`] - an ordered `(from, to)` pair
//! - [`Board`] - the 8×8 grid of cells
//!
//! ## Why is `Board` `Copy`?
//!
//! A board is 64 one-byte cells. Copying it is cheaper than any bookkeeping needed to undo a
//! move, so the rules engine works in a return-new-board style: [`crate::rules::apply_move`]
//! takes `&Board` and returns a fresh `Board`, and the search simply recurses on the copies.
//! Callers holding a board can never observe it being changed underneath them.

use core::fmt;

use crate::constants::*;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Row delta of a forward step for this side's men.
    pub fn forward(self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    /// Row on which this side's men are promoted.
    pub fn king_row(self) -> i8 {
        match self {
            Side::White => 0,
            Side::Black => BOARD_SIZE - 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => f.write_str("White"),
            Side::Black => f.write_str("Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Rank {
    Man,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub side: Side,
    pub rank: Rank,
}

impl Piece {
    pub const fn man(side: Side) -> Self {
        Piece { side, rank: Rank::Man }
    }

    pub const fn king(side: Side) -> Self {
        Piece { side, rank: Rank::King }
    }

    pub fn is_king(self) -> bool {
        self.rank == Rank::King
    }

    /// Material value used by the static evaluation.
    pub fn value(self) -> i32 {
        match self.rank {
            Rank::Man => MAN_VALUE,
            Rank::King => KING_VALUE,
        }
    }

    pub fn to_char(self) -> char {
        match (self.side, self.rank) {
            (Side::White, Rank::Man) => WHITE_MAN_CHAR,
            (Side::White, Rank::King) => WHITE_KING_CHAR,
            (Side::Black, Rank::Man) => BLACK_MAN_CHAR,
            (Side::Black, Rank::King) => BLACK_KING_CHAR,
        }
    }

    pub fn from_char(c: char) -> Option<Piece> {
        match c {
            WHITE_MAN_CHAR => Some(Piece::man(Side::White)),
            WHITE_KING_CHAR => Some(Piece::king(Side::White)),
            BLACK_MAN_CHAR => Some(Piece::man(Side::Black)),
            BLACK_KING_CHAR => Some(Piece::king(Side::Black)),
            _ => None,
        }
    }
}

/// Occupant of a square.
pub type Cell = Option<Piece>;

/// A `(row, col)` coordinate. Not necessarily on the board; see [`Position::is_on_board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Self {
        Position { row, col }
    }

    #[inline]
    pub fn is_on_board(self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    /// Dark squares are the only playable ones.
    #[inline]
    pub fn is_dark(self) -> bool {
        (i16::from(self.row) + i16::from(self.col)).rem_euclid(2) == 1
    }

    pub fn offset(self, d_row: i8, d_col: i8) -> Position {
        Position::new(self.row + d_row, self.col + d_col)
    }

    /// Square halfway between `self` and `other`; meaningful for capture steps.
    pub fn midpoint(self, other: Position) -> Position {
        Position::new((self.row + other.row) / 2, (self.col + other.col) / 2)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    pub const fn new(from: Position, to: Position) -> Self {
        Move { from, to }
    }

    pub fn row_delta(self) -> i8 {
        self.to.row - self.from.row
    }

    pub fn col_delta(self) -> i8 {
        self.to.col - self.from.col
    }

    /// A two-row diagonal jump.
    pub fn is_capture(self) -> bool {
        self.row_delta().abs() == 2
    }

    /// Square jumped over by a capture step.
    pub fn captured_square(self) -> Option<Position> {
        self.is_capture().then(|| self.from.midpoint(self.to))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// The 8×8 playing grid, indexed `cells[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    pub(crate) cells: [[Cell; BOARD_SIZE_US]; BOARD_SIZE_US],
}

//! Board utilities and helper functions
//!
//! Provides fundamental board operations used throughout the engine:
//! - Square access with off-board positions mapped to `None`
//! - Piece counting per side
//! - Text rendering and parsing (`.`, `w`, `W`, `b`, `B`)

use core::fmt;
use core::str::FromStr;

use crate::constants::*;
use crate::error::{EngineError, EngineResult};
use crate::types::*;

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Board {
            cells: [[None; BOARD_SIZE_US]; BOARD_SIZE_US],
        }
    }

    /// Occupant at `pos`, or `None` when the square is empty or off the board.
    #[inline]
    pub fn piece_at(&self, pos: Position) -> Cell {
        if pos.is_on_board() {
            self.cells[pos.row as usize][pos.col as usize]
        } else {
            None
        }
    }

    #[inline]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        pos.is_on_board() && self.piece_at(pos).is_none()
    }

    /// Place (or clear) a square.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OffBoard`] when `pos` is outside the grid.
    pub fn set(&mut self, pos: Position, cell: Cell) -> EngineResult<()> {
        if !pos.is_on_board() {
            return Err(EngineError::OffBoard { position: pos });
        }
        self.cells[pos.row as usize][pos.col as usize] = cell;
        Ok(())
    }

    /// Builder-style placement for tests and fixtures.
    pub fn with_piece(mut self, pos: Position, piece: Piece) -> EngineResult<Self> {
        self.set(pos, Some(piece))?;
        Ok(self)
    }

    /// Iterate over every occupied square in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|piece| (Position::new(row as i8, col as i8), piece))
            })
        })
    }

    pub fn count(&self, side: Side) -> usize {
        self.pieces().filter(|(_, piece)| piece.side == side).count()
    }

    pub fn count_kings(&self, side: Side) -> usize {
        self.pieces()
            .filter(|(_, piece)| piece.side == side && piece.is_king())
            .count()
    }

    pub fn total_pieces(&self) -> usize {
        self.pieces().count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            for cell in cells {
                let c = cell.map_or(EMPTY_CHAR, Piece::to_char);
                write!(f, "{c}")?;
            }
            if row + 1 < BOARD_SIZE_US {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE_US {
            return Err(EngineError::RowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let width = line.chars().count();
            if width != BOARD_SIZE_US {
                return Err(EngineError::RowWidth { row, found: width });
            }
            for (col, c) in line.chars().enumerate() {
                if c == EMPTY_CHAR {
                    continue;
                }
                let piece = Piece::from_char(c)
                    .ok_or(EngineError::UnknownSquare { row, col, found: c })?;
                let pos = Position::new(row as i8, col as i8);
                if !pos.is_dark() {
                    return Err(EngineError::PieceOnLightSquare { row, col });
                }
                board.cells[row][col] = Some(piece);
            }
        }
        Ok(board)
    }
}

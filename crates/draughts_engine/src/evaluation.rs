//! Static evaluation
//!
//! Pure material count from one side's point of view: +3 per own king, +1 per own man,
//! -3 per opposing king, -1 per opposing man.

use crate::types::*;

/// Material balance of `board` as seen by `side`.
pub fn evaluate(board: &Board, side: Side) -> i32 {
    board
        .pieces()
        .map(|(_, piece)| {
            if piece.side == side {
                piece.value()
            } else {
                -piece.value()
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::initial_board;

    #[test]
    fn test_starting_position_is_balanced() {
        let board = initial_board();
        assert_eq!(evaluate(&board, Side::White), 0);
        assert_eq!(evaluate(&board, Side::Black), 0);
    }

    #[test]
    fn test_kings_are_worth_three_men() {
        let board = Board::empty()
            .with_piece(Position::new(0, 1), Piece::king(Side::White))
            .unwrap()
            .with_piece(Position::new(7, 0), Piece::man(Side::Black))
            .unwrap()
            .with_piece(Position::new(7, 2), Piece::man(Side::Black))
            .unwrap();
        assert_eq!(evaluate(&board, Side::White), 1);
        assert_eq!(evaluate(&board, Side::Black), -1);
    }

    #[test]
    fn test_empty_board_evaluates_to_zero() {
        assert_eq!(evaluate(&Board::empty(), Side::White), 0);
    }

    #[test]
    fn test_evaluation_is_antisymmetric() {
        let board = crate::rules::apply_move(
            &initial_board(),
            Position::new(5, 0),
            Position::new(4, 1),
        );
        assert_eq!(evaluate(&board, Side::White), -evaluate(&board, Side::Black));
    }
}

//! Crowned men invariant: no man rests on its promotion row.

use super::Invariant;
use crate::{Board, Player, Rank, Square};

/// Invariant: a man that reaches its promotion row is crowned immediately,
/// so no man is ever found standing there between moves.
pub struct CrownedMenInvariant;

impl Invariant<Board> for CrownedMenInvariant {
    fn holds(board: &Board) -> bool {
        Square::all().all(|sq| match board.cell(sq).piece() {
            Some(piece) if piece.rank() == Rank::Man => sq.row() != piece.owner().promotion_row(),
            _ => true,
        })
    }

    fn description() -> &'static str {
        "Men on their promotion row are crowned"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_opening_holds() {
        assert!(CrownedMenInvariant::holds(&Board::starting()));
    }

    #[test]
    fn test_uncrowned_man_violates() {
        let board = Board::with_pieces(&[(Square::new(0, 1).unwrap(), Cell::OrangeMan)]);
        assert!(!CrownedMenInvariant::holds(&board));
    }

    #[test]
    fn test_king_on_far_row_holds() {
        let board = Board::with_pieces(&[(Square::new(0, 1).unwrap(), Cell::OrangeKing)]);
        assert!(CrownedMenInvariant::holds(&board));
        assert_eq!(Player::Orange.promotion_row(), 0);
    }
}

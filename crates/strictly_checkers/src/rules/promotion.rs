//! Promotion of men to kings.

use crate::{Board, Piece, Square};
use tracing::{debug, instrument};

/// Whether `piece` standing on `square` has reached its promotion row.
pub fn reaches_promotion_row(piece: Piece, square: Square) -> bool {
    square.row() == piece.owner().promotion_row()
}

/// Crowns the man on `square` if it stands on its promotion row.
///
/// Returns `true` if a promotion happened. Kings are left as they are.
#[instrument(skip(board))]
pub fn promote_if_needed(board: &mut Board, square: Square) -> bool {
    match board.cell(square).piece() {
        Some(piece) if !piece.is_king() && reaches_promotion_row(piece, square) => {
            board.set_cell(square, piece.crowned().cell());
            debug!(%square, owner = %piece.owner(), "Man crowned");
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Player};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_green_promotes_on_row_seven() {
        let mut board = Board::with_pieces(&[(sq(7, 2), Cell::GreenMan)]);
        assert!(promote_if_needed(&mut board, sq(7, 2)));
        assert_eq!(board.cell(sq(7, 2)), Cell::GreenKing);
    }

    #[test]
    fn test_orange_promotes_on_row_zero() {
        let mut board = Board::with_pieces(&[(sq(0, 3), Cell::OrangeMan)]);
        assert!(promote_if_needed(&mut board, sq(0, 3)));
        assert_eq!(board.cell(sq(0, 3)), Cell::OrangeKing);
    }

    #[test]
    fn test_no_promotion_on_own_home_row() {
        let mut board = Board::with_pieces(&[(sq(0, 1), Cell::GreenMan)]);
        assert!(!promote_if_needed(&mut board, sq(0, 1)));
        assert_eq!(board.cell(sq(0, 1)), Cell::GreenMan);
    }

    #[test]
    fn test_king_never_demotes() {
        let mut board = Board::with_pieces(&[(sq(0, 1), Cell::GreenKing)]);
        assert!(!promote_if_needed(&mut board, sq(0, 1)));
        assert_eq!(board.cell(sq(0, 1)), Cell::GreenKing);
        assert!(reaches_promotion_row(Piece::man(Player::Green), sq(7, 0)));
    }
}

//! Piece count invariant: tracked counts agree with the grid.

use super::Invariant;
use crate::{Board, Player};

/// Invariant: each side's tracked piece count equals the pieces on the grid.
pub struct PieceCountInvariant;

impl Invariant<Board> for PieceCountInvariant {
    fn holds(board: &Board) -> bool {
        board.green_count() == board.tally(Player::Green)
            && board.orange_count() == board.tally(Player::Orange)
    }

    fn description() -> &'static str {
        "Piece counts match the pieces on the board"
    }
}

//! Win detection for checkers.

use crate::{Board, Player};
use tracing::instrument;

/// Checks if a side has lost all its pieces.
///
/// Returns the opponent of the side left with no pieces. There is no
/// stalemate rule: a side with pieces but no legal move has not lost.
#[instrument(skip(board), fields(green = board.green_count(), orange = board.orange_count()))]
pub fn check_winner(board: &Board) -> Option<Player> {
    if board.green_count() == 0 {
        return Some(Player::Orange);
    }
    if board.orange_count() == 0 {
        return Some(Player::Green);
    }
    None
}

//! Playable squares invariant: pieces stand on dark squares only.

use super::Invariant;
use crate::{Board, Square};

/// Invariant: every piece sits on a playable (dark) square.
///
/// Diagonal moves preserve square colour, so a piece can never reach a
/// light square through play.
pub struct PlayableSquaresInvariant;

impl Invariant<Board> for PlayableSquaresInvariant {
    fn holds(board: &Board) -> bool {
        Square::all()
            .filter(|sq| !board.cell(*sq).is_empty())
            .all(|sq| sq.is_playable())
    }

    fn description() -> &'static str {
        "Pieces occupy dark squares only"
    }
}

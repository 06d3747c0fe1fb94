//! Move classification.

use tracing::{debug, instrument};

use crate::action::{Move, MoveError, ValidatedMove};
use crate::board::Board;
use crate::capture::CaptureSearch;
use crate::config::RuleSet;
use crate::contracts::{AdvancesForward, DestinationEmpty, PieceSelectable, SquaresDistinct};
use crate::types::Player;

/// Judges move requests against one position.
///
/// Checks run in a fixed order and the first failure is reported:
///
/// 1. start and end differ
/// 2. the start holds a piece of the player to move
/// 3. the direction suits the piece
/// 4. a single diagonal step needs an empty destination
/// 5. anything longer needs a capture chain to the destination
#[derive(Debug, Clone, Copy)]
pub struct MoveValidator<'a> {
    board: &'a Board,
    to_move: Player,
    rules: &'a RuleSet,
}

impl<'a> MoveValidator<'a> {
    /// Creates a validator for `to_move` on `board`.
    pub fn new(board: &'a Board, to_move: Player, rules: &'a RuleSet) -> Self {
        Self {
            board,
            to_move,
            rules,
        }
    }

    /// Validates `mov`, returning it with its pending captures.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn validate(&self, mov: Move) -> Result<ValidatedMove, MoveError> {
        SquaresDistinct::check(&mov)?;
        let piece = PieceSelectable::check(&mov, self.board, self.to_move)?;
        AdvancesForward::check(&mov, piece, self.rules)?;

        if mov.is_single_step() {
            DestinationEmpty::check(&mov, self.board)?;
            debug!("Simple step accepted");
            return Ok(ValidatedMove::step(mov, piece));
        }

        let chain = CaptureSearch::new(self.board, piece, mov.from, mov.to, self.rules.revisit)
            .run()
            .ok_or(MoveError::MoveNotAllowed)?;
        debug!(captures = chain.len(), "Capture move accepted");
        Ok(ValidatedMove::capture(mov, piece, chain.into_captured()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Square};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn mv(fr: u8, fc: u8, tr: u8, tc: u8) -> Move {
        Move::from_coords(fr, fc, tr, tc).unwrap()
    }

    #[test]
    fn test_same_square_always_rejected_first() {
        let board = Board::starting();
        let rules = RuleSet::default();
        let validator = MoveValidator::new(&board, Player::Green, &rules);
        for square in Square::all() {
            assert_eq!(
                validator.validate(Move::new(square, square)),
                Err(MoveError::MustMovePiece),
                "{square}"
            );
        }
    }

    #[test]
    fn test_opening_step() {
        let board = Board::starting();
        let rules = RuleSet::default();
        let validated = MoveValidator::new(&board, Player::Green, &rules)
            .validate(mv(2, 1, 3, 0))
            .unwrap();
        assert!(validated.captures().is_empty());
    }

    #[test]
    fn test_backward_step_rejected() {
        let board = Board::with_pieces(&[(sq(3, 2), Cell::GreenMan), (sq(6, 1), Cell::OrangeMan)]);
        let rules = RuleSet::default();
        let validator = MoveValidator::new(&board, Player::Green, &rules);
        assert_eq!(validator.validate(mv(3, 2, 2, 1)), Err(MoveError::MustMoveForward));
    }

    #[test]
    fn test_step_onto_piece_rejected() {
        let board = Board::starting();
        let rules = RuleSet::default();
        let validator = MoveValidator::new(&board, Player::Green, &rules);
        assert_eq!(validator.validate(mv(1, 0, 2, 1)), Err(MoveError::SquareOccupied(sq(2, 1))));
    }

    #[test]
    fn test_long_move_without_capture_rejected() {
        let board = Board::starting();
        let rules = RuleSet::default();
        let validator = MoveValidator::new(&board, Player::Green, &rules);
        assert_eq!(validator.validate(mv(2, 1, 4, 3)), Err(MoveError::MoveNotAllowed));
        assert_eq!(validator.validate(mv(2, 1, 3, 1)), Err(MoveError::MoveNotAllowed));
    }

    #[test]
    fn test_capture_carries_pending_squares() {
        let board = Board::with_pieces(&[(sq(3, 2), Cell::GreenMan), (sq(4, 3), Cell::OrangeMan)]);
        let rules = RuleSet::default();
        let validated = MoveValidator::new(&board, Player::Green, &rules)
            .validate(mv(3, 2, 5, 4))
            .unwrap();
        assert_eq!(validated.captures(), &vec![sq(4, 3)]);
        assert!(validated.is_capture());
    }

    #[test]
    fn test_opponent_piece_not_selectable() {
        let board = Board::starting();
        let rules = RuleSet::default();
        let validator = MoveValidator::new(&board, Player::Green, &rules);
        assert_eq!(validator.validate(mv(5, 0, 4, 1)), Err(MoveError::NotYourPiece(sq(5, 0))));
    }
}

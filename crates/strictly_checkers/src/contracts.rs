//! Contract-based validation for checkers.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. Each precondition is a small checker the
//! [`MoveValidator`](crate::MoveValidator) chains in a fixed order, so the
//! first failing check decides the reason reported to the player.

use tracing::{instrument, warn};

use crate::action::{Move, MoveError, ValidatedMove};
use crate::board::Board;
use crate::config::RuleSet;
use crate::invariants::{self, CheckersInvariants, InvariantSet};
use crate::typestate::GameInProgress;
use crate::types::{Piece, Player};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
///
/// - Precondition: {P(state, action)} must hold before applying the action,
///   and yields the evidence needed to apply it
/// - Postcondition: {Q(before, after)} must hold after applying the action
pub trait Contract<S, A> {
    /// Evidence produced by a successful precondition check.
    type Verified;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Verified, MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &Board, after: &Board) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the piece must actually move.
pub struct SquaresDistinct;

impl SquaresDistinct {
    /// Rejects a move whose start and end coincide.
    pub fn check(mov: &Move) -> Result<(), MoveError> {
        if mov.from == mov.to {
            Err(MoveError::MustMovePiece)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the origin holds a piece of the player to move.
pub struct PieceSelectable;

impl PieceSelectable {
    /// Returns the selected piece.
    pub fn check(mov: &Move, board: &Board, to_move: Player) -> Result<Piece, MoveError> {
        board
            .cell(mov.from)
            .piece()
            .filter(|piece| piece.owner() == to_move)
            .ok_or(MoveError::NotYourPiece(mov.from))
    }
}

/// Precondition: the move heads toward the piece's promotion row.
///
/// Men must strictly advance on every move; a sideways or backward request
/// is refused before any capture search. Kings are exempt unless the rules
/// forbid backward king steps, in which case their single non-capturing
/// steps are held to the same rule as men.
pub struct AdvancesForward;

impl AdvancesForward {
    /// Rejects moves in the wrong direction for `piece`.
    pub fn check(mov: &Move, piece: Piece, rules: &RuleSet) -> Result<(), MoveError> {
        let restricted = if piece.is_king() {
            !rules.kings_step_backward && mov.is_single_step()
        } else {
            true
        };

        if restricted && mov.row_delta().signum() != piece.owner().forward() {
            Err(MoveError::MustMoveForward)
        } else {
            Ok(())
        }
    }
}

/// Precondition: a single step lands on an empty square.
pub struct DestinationEmpty;

impl DestinationEmpty {
    /// Rejects a step onto an occupied square.
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        if board.cell(mov.to).is_empty() {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(mov.to))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions are the validator's checks. Postconditions:
/// - All board invariants hold
/// - Neither side gains material
pub struct MoveContract;

impl Contract<GameInProgress, Move> for MoveContract {
    type Verified = ValidatedMove;

    fn pre(game: &GameInProgress, action: &Move) -> Result<ValidatedMove, MoveError> {
        game.validator().validate(*action)
    }

    fn post(before: &Board, after: &Board) -> Result<(), MoveError> {
        CheckersInvariants::check_all(after).map_err(|violations| {
            MoveError::InvariantViolation(format!(
                "Postcondition failed: {}",
                invariants::describe(&violations)
            ))
        })?;

        if !MaterialMonotonic::holds(before, after) {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: a side gained pieces".to_string(),
            ));
        }
        Ok(())
    }
}

/// Transition property: piece counts never increase.
pub struct MaterialMonotonic;

impl MaterialMonotonic {
    /// Checks that neither side has more pieces after the move than before.
    #[instrument(skip(before, after))]
    pub fn holds(before: &Board, after: &Board) -> bool {
        let valid = after.green_count() <= before.green_count()
            && after.orange_count() <= before.orange_count();
        if !valid {
            warn!(
                green_before = before.green_count(),
                green_after = after.green_count(),
                orange_before = before.orange_count(),
                orange_after = after.orange_count(),
                "Material increased"
            );
        }
        valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, GameSetup, Square};

    fn mv(fr: u8, fc: u8, tr: u8, tc: u8) -> Move {
        Move::from_coords(fr, fc, tr, tc).unwrap()
    }

    #[test]
    fn test_precondition_same_square() {
        assert_eq!(SquaresDistinct::check(&mv(2, 1, 2, 1)), Err(MoveError::MustMovePiece));
        assert!(SquaresDistinct::check(&mv(2, 1, 3, 0)).is_ok());
    }

    #[test]
    fn test_precondition_wrong_owner() {
        let board = Board::starting();
        assert!(matches!(
            PieceSelectable::check(&mv(5, 0, 4, 1), &board, Player::Green),
            Err(MoveError::NotYourPiece(_))
        ));
        assert!(matches!(
            PieceSelectable::check(&mv(3, 0, 4, 1), &board, Player::Green),
            Err(MoveError::NotYourPiece(_))
        ));
        assert_eq!(
            PieceSelectable::check(&mv(2, 1, 3, 0), &board, Player::Green),
            Ok(Piece::man(Player::Green))
        );
    }

    #[test]
    fn test_men_must_advance() {
        let rules = RuleSet::default();
        let green = Piece::man(Player::Green);
        assert!(AdvancesForward::check(&mv(3, 2, 4, 3), green, &rules).is_ok());
        assert_eq!(AdvancesForward::check(&mv(3, 2, 2, 1), green, &rules), Err(MoveError::MustMoveForward));
        assert_eq!(AdvancesForward::check(&mv(3, 2, 3, 4), green, &rules), Err(MoveError::MustMoveForward));

        let orange = Piece::man(Player::Orange);
        assert!(AdvancesForward::check(&mv(5, 2, 4, 1), orange, &rules).is_ok());
        assert_eq!(AdvancesForward::check(&mv(5, 2, 6, 1), orange, &rules), Err(MoveError::MustMoveForward));
    }

    #[test]
    fn test_king_direction_follows_rules() {
        let king = Piece::king(Player::Green);
        let backward_step = mv(4, 3, 3, 2);
        let backward_jump = mv(4, 3, 2, 1);

        let lenient = RuleSet::default();
        assert!(AdvancesForward::check(&backward_step, king, &lenient).is_ok());

        let strict = RuleSet {
            kings_step_backward: false,
            ..RuleSet::default()
        };
        assert_eq!(AdvancesForward::check(&backward_step, king, &strict), Err(MoveError::MustMoveForward));
        assert!(AdvancesForward::check(&backward_jump, king, &strict).is_ok());
    }

    #[test]
    fn test_precondition_destination() {
        let board = Board::starting();
        assert!(DestinationEmpty::check(&mv(2, 1, 3, 0), &board).is_ok());
        assert!(matches!(
            DestinationEmpty::check(&mv(1, 0, 2, 1), &board),
            Err(MoveError::SquareOccupied(_))
        ));
    }

    #[test]
    fn test_contract_pre_matches_validator() {
        let game = GameSetup::new(RuleSet::default()).start();
        let validated = MoveContract::pre(&game, &mv(2, 1, 3, 0)).unwrap();
        assert!(!validated.is_capture());
        assert_eq!(MoveContract::pre(&game, &mv(2, 1, 2, 1)), Err(MoveError::MustMovePiece));
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = Board::starting();
        let mut after = before.clone();
        after.set_cell(Square::new(3, 0).unwrap(), Cell::GreenMan);
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_detects_material_gain() {
        let before = Board::with_pieces(&[(Square::new(2, 1).unwrap(), Cell::GreenMan)]);
        let after = Board::with_pieces(&[
            (Square::new(2, 1).unwrap(), Cell::GreenMan),
            (Square::new(2, 3).unwrap(), Cell::GreenMan),
        ]);
        assert!(MoveContract::post(&before, &after).is_err());
        assert!(MoveContract::post(&before, &before).is_ok());
    }
}

//! End-to-end scenarios through the game controller.

use strictly_checkers::{
    AnyGame, Board, Cell, GameController, Move, MoveError, Phase, Player, RuleSet, Square,
};

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).expect("square on the board")
}

fn mv(fr: u8, fc: u8, tr: u8, tc: u8) -> Move {
    Move::from_coords(fr, fc, tr, tc).expect("move on the board")
}

fn position(pieces: &[(Square, Cell)], to_move: Player) -> GameController {
    GameController::from_position(Board::with_pieces(pieces), to_move, RuleSet::default())
        .expect("Valid position")
}

#[test]
fn test_opening_step() {
    let mut game = GameController::new(RuleSet::default());
    assert!(game.is_selectable_piece(sq(2, 1)));

    let applied = game.apply_move(mv(2, 1, 3, 0)).expect("Legal opening move");

    assert!(applied.captured().is_empty());
    assert!(!applied.promoted());
    assert_eq!(game.cell(sq(2, 1)), Cell::Empty);
    assert_eq!(game.cell(sq(3, 0)), Cell::GreenMan);
    assert_eq!(game.board().green_count(), 12);
    assert_eq!(game.board().orange_count(), 12);
    assert_eq!(game.current_player(), Some(Player::Orange));
}

#[test]
fn test_rejection_reasons() {
    let mut game = GameController::default();

    let cases = [
        (mv(2, 1, 2, 1), "must move the piece"),
        (mv(3, 0, 4, 1), "select a valid piece"),
        (mv(5, 0, 4, 1), "select a valid piece"),
        (mv(2, 1, 2, 3), "must move forward"),
        (mv(1, 0, 2, 1), "square already occupied"),
        (mv(2, 1, 4, 3), "move not allowed"),
    ];

    for (action, reason) in cases {
        let err = game.apply_move(action).expect_err("Illegal move");
        assert_eq!(err.to_string(), reason, "{action}");
    }

    assert_eq!(game.board(), &Board::starting());
    assert_eq!(game.current_player(), Some(Player::Green));
}

#[test]
fn test_single_capture() {
    let mut game = position(
        &[
            (sq(3, 2), Cell::GreenMan),
            (sq(4, 3), Cell::OrangeMan),
            (sq(6, 1), Cell::OrangeMan),
        ],
        Player::Green,
    );

    let applied = game.apply_move(mv(3, 2, 5, 4)).expect("Legal capture");

    assert_eq!(applied.captured(), &vec![sq(4, 3)]);
    assert_eq!(game.cell(sq(3, 2)), Cell::Empty);
    assert_eq!(game.cell(sq(4, 3)), Cell::Empty);
    assert_eq!(game.cell(sq(5, 4)), Cell::GreenMan);
    assert_eq!(game.board().orange_count(), 1);
    assert_eq!(game.current_player(), Some(Player::Orange));
}

#[test]
fn test_double_capture() {
    let mut game = position(
        &[
            (sq(2, 1), Cell::GreenMan),
            (sq(3, 2), Cell::OrangeMan),
            (sq(5, 4), Cell::OrangeMan),
            (sq(7, 0), Cell::OrangeMan),
        ],
        Player::Green,
    );

    let applied = game.apply_move(mv(2, 1, 6, 5)).expect("Legal double capture");

    assert_eq!(applied.captured(), &vec![sq(3, 2), sq(5, 4)]);
    assert_eq!(game.cell(sq(6, 5)), Cell::GreenMan);
    assert_eq!(game.board().orange_count(), 1);
}

#[test]
fn test_promotion_on_step_and_kings_never_demote() {
    let mut game = position(
        &[(sq(6, 1), Cell::GreenMan), (sq(3, 4), Cell::OrangeMan)],
        Player::Green,
    );

    let applied = game.apply_move(mv(6, 1, 7, 2)).expect("Legal step");
    assert!(applied.promoted());
    assert_eq!(game.cell(sq(7, 2)), Cell::GreenKing);

    game.apply_move(mv(3, 4, 2, 3)).expect("Orange steps");

    // Kings may step backward by default.
    let applied = game.apply_move(mv(7, 2, 6, 3)).expect("King steps back");
    assert!(!applied.promoted());
    assert_eq!(game.cell(sq(6, 3)), Cell::GreenKing);
}

#[test]
fn test_promotion_by_capture() {
    let mut game = position(
        &[
            (sq(5, 2), Cell::GreenMan),
            (sq(6, 3), Cell::OrangeMan),
            (sq(1, 0), Cell::OrangeMan),
        ],
        Player::Green,
    );

    let applied = game.apply_move(mv(5, 2, 7, 4)).expect("Legal capture");
    assert!(applied.promoted());
    assert_eq!(game.cell(sq(7, 4)), Cell::GreenKing);
}

#[test]
fn test_strict_kings_cannot_step_back() {
    let rules = RuleSet {
        kings_step_backward: false,
        ..RuleSet::default()
    };
    let board = Board::with_pieces(&[(sq(4, 3), Cell::GreenKing), (sq(6, 1), Cell::OrangeMan)]);
    let mut game = GameController::from_position(board, Player::Green, rules).expect("Valid position");

    assert_eq!(game.apply_move(mv(4, 3, 3, 2)), Err(MoveError::MustMoveForward));
    assert!(game.apply_move(mv(4, 3, 5, 4)).is_ok());
}

#[test]
fn test_win_then_game_over() {
    let mut game = position(
        &[(sq(3, 2), Cell::GreenMan), (sq(4, 3), Cell::OrangeMan)],
        Player::Green,
    );

    game.apply_move(mv(3, 2, 5, 4)).expect("Winning capture");

    assert_eq!(game.board().orange_count(), 0);
    assert_eq!(game.winner(), Some(Player::Green));
    assert_eq!(game.current_player(), None);
    assert_eq!(game.phase(), Phase::GameOver { winner: Player::Green });
    assert!(!game.is_selectable_piece(sq(5, 4)));

    let before = game.board().clone();
    assert_eq!(game.apply_move(mv(5, 4, 6, 5)), Err(MoveError::GameOver));
    assert_eq!(game.board(), &before);
    assert_eq!(game.history().len(), 1);
}

#[test]
fn test_reset_after_game_over() {
    let mut game = position(
        &[(sq(3, 2), Cell::GreenMan), (sq(4, 3), Cell::OrangeMan)],
        Player::Green,
    );
    game.apply_move(mv(3, 2, 5, 4)).expect("Winning capture");

    game.reset();

    assert_eq!(game.board(), &Board::starting());
    assert_eq!(game.current_player(), Some(Player::Green));
    assert!(game.winner().is_none());
}

#[test]
fn test_game_survives_serialization() {
    let mut game = GameController::default();
    game.apply_move(mv(2, 1, 3, 2)).expect("Legal move");
    game.apply_move(mv(5, 4, 4, 3)).expect("Legal move");

    let json = serde_json::to_string(game.game()).expect("Serializable game");
    let restored: AnyGame = serde_json::from_str(&json).expect("Deserializable game");
    assert_eq!(&restored, game.game());

    let mut resumed = GameController::from(restored);
    let applied = resumed.apply_move(mv(3, 2, 5, 4)).expect("Capture after resume");
    assert_eq!(applied.captured(), &vec![sq(4, 3)]);
    assert_eq!(resumed.history().len(), 3);
}

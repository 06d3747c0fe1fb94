//! First-class action types for checkers.
//!
//! A [`Move`] is the player's intent. Validation turns it into a
//! [`ValidatedMove`] carrying the pending captures, and committing that
//! yields an [`AppliedMove`] for the history.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

use crate::types::{Piece, Player, Square};

/// A move request: relocate the piece on `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Square of the piece being moved.
    pub from: Square,
    /// Destination square.
    pub to: Square,
}

impl Move {
    /// Creates a new move.
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// Creates a move from raw coordinates, or `None` if any is off the board.
    pub fn from_coords(from_row: u8, from_col: u8, to_row: u8, to_col: u8) -> Option<Self> {
        Some(Self::new(
            Square::new(from_row, from_col)?,
            Square::new(to_row, to_col)?,
        ))
    }

    /// Signed row distance travelled.
    pub fn row_delta(&self) -> i8 {
        self.to.row() as i8 - self.from.row() as i8
    }

    /// Signed column distance travelled.
    pub fn col_delta(&self) -> i8 {
        self.to.col() as i8 - self.from.col() as i8
    }

    /// True for a one-square diagonal step.
    pub fn is_single_step(&self) -> bool {
        self.row_delta().abs() == 1 && self.col_delta().abs() == 1
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Why a move was rejected.
///
/// The display text is the reason shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Start and end squares are the same.
    #[display("must move the piece")]
    MustMovePiece,

    /// The origin does not hold a piece of the player to move.
    #[display("select a valid piece")]
    NotYourPiece(Square),

    /// A man tried to move sideways or toward its own side.
    #[display("must move forward")]
    MustMoveForward,

    /// A single step onto an occupied square.
    #[display("square already occupied")]
    SquareOccupied(Square),

    /// No capture chain connects the two squares.
    #[display("move not allowed")]
    MoveNotAllowed,

    /// The game is already over.
    #[display("game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// A move that passed validation against a specific position.
///
/// Only the validator creates these; the pending captures are discarded
/// with the value if it is never committed.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ValidatedMove {
    /// The requested move.
    mv: Move,
    /// The piece being moved.
    piece: Piece,
    /// Squares to clear when the move is committed.
    captures: Vec<Square>,
}

impl ValidatedMove {
    pub(crate) fn step(mv: Move, piece: Piece) -> Self {
        Self {
            mv,
            piece,
            captures: Vec::new(),
        }
    }

    pub(crate) fn capture(mv: Move, piece: Piece, captures: Vec<Square>) -> Self {
        Self { mv, piece, captures }
    }

    /// True if the move captures at least one piece.
    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }

    pub(crate) fn into_parts(self) -> (Move, Piece, Vec<Square>) {
        (self.mv, self.piece, self.captures)
    }
}

/// A committed move, as recorded in the game history.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppliedMove {
    /// Who moved.
    player: Player,
    /// What was moved where.
    mv: Move,
    /// Squares emptied by captures.
    captured: Vec<Square>,
    /// Whether the piece was crowned on arrival.
    promoted: bool,
}

impl AppliedMove {
    pub(crate) fn new(player: Player, mv: Move, captured: Vec<Square>, promoted: bool) -> Self {
        Self {
            player,
            mv,
            captured,
            promoted,
        }
    }
}

impl std::fmt::Display for AppliedMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.player, self.mv)?;
        if !self.captured.is_empty() {
            write!(f, " capturing {}", self.captured.len())?;
        }
        if self.promoted {
            write!(f, " (crowned)")?;
        }
        Ok(())
    }
}

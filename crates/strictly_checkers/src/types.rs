//! Core domain types for checkers.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::board::BOARD_SIZE;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Player {
    /// Green (moves first, advances toward row 7).
    Green,
    /// Orange (advances toward row 0).
    Orange,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Green => Player::Orange,
            Player::Orange => Player::Green,
        }
    }

    /// Row delta of one step toward the promotion row.
    pub fn forward(self) -> i8 {
        match self {
            Player::Green => 1,
            Player::Orange => -1,
        }
    }

    /// The farthest row from this player's starting side.
    pub fn promotion_row(self) -> u8 {
        match self {
            Player::Green => BOARD_SIZE - 1,
            Player::Orange => 0,
        }
    }

    /// Returns true if moving along `diagonal` advances this player.
    pub fn advances(self, diagonal: Diagonal) -> bool {
        diagonal.delta().0 == self.forward()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Green => write!(f, "Green"),
            Player::Orange => write!(f, "Orange"),
        }
    }
}

/// Rank of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Unpromoted piece; moves and captures toward its promotion row only.
    Man,
    /// Promoted piece; captures along all four diagonals.
    King,
}

/// A piece: an owner and a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    owner: Player,
    rank: Rank,
}

impl Piece {
    /// Creates a piece.
    pub fn new(owner: Player, rank: Rank) -> Self {
        Self { owner, rank }
    }

    /// Creates an unpromoted piece.
    pub fn man(owner: Player) -> Self {
        Self::new(owner, Rank::Man)
    }

    /// Creates a king.
    pub fn king(owner: Player) -> Self {
        Self::new(owner, Rank::King)
    }

    /// Returns the owner.
    pub fn owner(&self) -> Player {
        self.owner
    }

    /// Returns the rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns true for kings.
    pub fn is_king(&self) -> bool {
        self.rank == Rank::King
    }

    /// Returns the king of the same owner. Kings stay kings.
    pub fn crowned(self) -> Self {
        Self::king(self.owner)
    }

    /// Whether this piece may jump along `diagonal`.
    ///
    /// Men jump only toward their promotion row, kings in every direction.
    pub fn captures_toward(&self, diagonal: Diagonal) -> bool {
        self.is_king() || self.owner.advances(diagonal)
    }

    /// The cell value holding this piece.
    pub fn cell(self) -> Cell {
        match (self.owner, self.rank) {
            (Player::Green, Rank::Man) => Cell::GreenMan,
            (Player::Green, Rank::King) => Cell::GreenKing,
            (Player::Orange, Rank::Man) => Cell::OrangeMan,
            (Player::Orange, Rank::King) => Cell::OrangeKing,
        }
    }
}

/// Contents of one board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No piece.
    #[default]
    Empty,
    /// Green man.
    GreenMan,
    /// Green king.
    GreenKing,
    /// Orange man.
    OrangeMan,
    /// Orange king.
    OrangeKing,
}

impl Cell {
    /// Returns the piece in this cell, if any.
    pub fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::GreenMan => Some(Piece::man(Player::Green)),
            Cell::GreenKing => Some(Piece::king(Player::Green)),
            Cell::OrangeMan => Some(Piece::man(Player::Orange)),
            Cell::OrangeKing => Some(Piece::king(Player::Orange)),
        }
    }

    /// Returns true if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Returns the owner of the piece in this cell, if any.
    pub fn owner(self) -> Option<Player> {
        self.piece().map(|p| p.owner())
    }

    /// Returns true if the cell holds a piece of `player`.
    pub fn belongs_to(self, player: Player) -> bool {
        self.owner() == Some(player)
    }

    /// Single-character symbol used by text renderers.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::GreenMan => 'g',
            Cell::GreenKing => 'G',
            Cell::OrangeMan => 'o',
            Cell::OrangeKing => 'O',
        }
    }
}

impl From<Piece> for Cell {
    fn from(piece: Piece) -> Self {
        piece.cell()
    }
}

/// One of the four diagonal directions.
///
/// "Up" means increasing row index, the direction Green advances.
/// Iteration order is the order in which capture chains are explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Diagonal {
    /// Row +1, column -1.
    UpLeft,
    /// Row +1, column +1.
    UpRight,
    /// Row -1, column +1.
    DownRight,
    /// Row -1, column -1.
    DownLeft,
}

impl Diagonal {
    /// Returns the (row, column) delta of one step.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Diagonal::UpLeft => (1, -1),
            Diagonal::UpRight => (1, 1),
            Diagonal::DownRight => (-1, 1),
            Diagonal::DownLeft => (-1, -1),
        }
    }
}

/// A square on the board. Always within bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square, or `None` if the coordinates are off the board.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some(Self { row, col })
    }

    /// Row index (0-7).
    pub fn row(&self) -> u8 {
        self.row
    }

    /// Column index (0-7).
    pub fn col(&self) -> u8 {
        self.col
    }

    /// The neighbouring square along `diagonal`, or `None` at the edge.
    pub fn step(self, diagonal: Diagonal) -> Option<Self> {
        let (dr, dc) = diagonal.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Self::new(row, col)
    }

    /// Playable squares are the dark ones, where `row + col` is odd.
    pub fn is_playable(&self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Iterates all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

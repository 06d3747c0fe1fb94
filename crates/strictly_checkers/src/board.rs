//! The 8×8 checkers board and its piece counts.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::types::{Cell, Piece, Player, Square};

/// Number of rows and columns.
pub const BOARD_SIZE: u8 = 8;

const SIZE: usize = BOARD_SIZE as usize;

/// Rows filled with men at the start, per side.
const HOME_ROWS: u8 = 3;

/// Board state: the grid plus per-side piece counts.
///
/// Counts are tracked separately from the grid and must agree with it
/// whenever a move is not in the middle of being applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][col]`.
    cells: [[Cell; SIZE]; SIZE],
    green_count: usize,
    orange_count: usize,
}

impl Board {
    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
            green_count: 0,
            orange_count: 0,
        }
    }

    /// Creates the opening position.
    ///
    /// Green men fill rows 0-2 and Orange men rows 5-7, on the dark
    /// squares only. Rows 3 and 4 are empty.
    #[instrument]
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for square in Square::all().filter(Square::is_playable) {
            let owner = if square.row() < HOME_ROWS {
                Player::Green
            } else if square.row() >= BOARD_SIZE - HOME_ROWS {
                Player::Orange
            } else {
                continue;
            };
            board.set_cell(square, Piece::man(owner).cell());
        }
        board.recount();
        debug!(green = board.green_count, orange = board.orange_count, "Opening position set");
        board
    }

    /// Creates a board holding exactly the given pieces, with counts derived from the grid.
    #[instrument(skip(pieces))]
    pub fn with_pieces(pieces: &[(Square, Cell)]) -> Self {
        let mut board = Self::empty();
        for &(square, cell) in pieces {
            board.set_cell(square, cell);
        }
        board.recount();
        board
    }

    /// Restores the opening position.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::starting();
    }

    /// Returns the cell at `square`.
    pub fn cell(&self, square: Square) -> Cell {
        self.cells[usize::from(square.row())][usize::from(square.col())]
    }

    /// Writes a cell. Piece counts are left untouched.
    pub fn set_cell(&mut self, square: Square, cell: Cell) {
        self.cells[usize::from(square.row())][usize::from(square.col())] = cell;
    }

    /// Number of Green pieces.
    pub fn green_count(&self) -> usize {
        self.green_count
    }

    /// Number of Orange pieces.
    pub fn orange_count(&self) -> usize {
        self.orange_count
    }

    /// Number of pieces belonging to `player`.
    pub fn count(&self, player: Player) -> usize {
        match player {
            Player::Green => self.green_count,
            Player::Orange => self.orange_count,
        }
    }

    /// Removes `captured` pieces from `player`'s count.
    pub(crate) fn decrement(&mut self, player: Player, captured: usize) {
        let count = match player {
            Player::Green => &mut self.green_count,
            Player::Orange => &mut self.orange_count,
        };
        *count = count.saturating_sub(captured);
    }

    /// Counts the pieces of `player` actually present on the grid.
    pub fn tally(&self, player: Player) -> usize {
        self.squares_of(player).count()
    }

    /// Squares occupied by `player`'s pieces, in row-major order.
    pub fn squares_of(&self, player: Player) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |sq| self.cell(*sq).belongs_to(player))
    }

    /// Row-major view of the grid, row 0 first.
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    fn recount(&mut self) {
        self.green_count = self.tally(Player::Green);
        self.orange_count = self.tally(Player::Orange);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

/// A position supplied from outside the opening layout is not playable.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid position: {}", reason)]
pub struct PositionError {
    /// What is wrong with the position.
    pub reason: String,
}

impl PositionError {
    /// Creates a position error.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_starting_counts() {
        let board = Board::starting();
        assert_eq!(board.green_count(), 12);
        assert_eq!(board.orange_count(), 12);
        assert_eq!(board.tally(Player::Green), 12);
        assert_eq!(board.tally(Player::Orange), 12);
    }

    #[test]
    fn test_starting_layout() {
        let board = Board::starting();
        assert_eq!(board.cell(sq(0, 1)), Cell::GreenMan);
        assert_eq!(board.cell(sq(0, 0)), Cell::Empty);
        assert_eq!(board.cell(sq(1, 0)), Cell::GreenMan);
        assert_eq!(board.cell(sq(2, 1)), Cell::GreenMan);
        assert_eq!(board.cell(sq(5, 0)), Cell::OrangeMan);
        assert_eq!(board.cell(sq(7, 6)), Cell::OrangeMan);
        for col in 0..BOARD_SIZE {
            assert!(board.cell(sq(3, col)).is_empty());
            assert!(board.cell(sq(4, col)).is_empty());
        }
    }

    #[test]
    fn test_green_on_home_rows_only() {
        let board = Board::starting();
        assert!(board.squares_of(Player::Green).all(|s| s.row() < 3));
        assert!(board.squares_of(Player::Orange).all(|s| s.row() > 4));
    }

    #[test]
    fn test_set_cell_leaves_counts() {
        let mut board = Board::starting();
        board.set_cell(sq(0, 1), Cell::Empty);
        assert_eq!(board.green_count(), 12);
        assert_eq!(board.tally(Player::Green), 11);
    }

    #[test]
    fn test_with_pieces_counts() {
        let board = Board::with_pieces(&[
            (sq(3, 2), Cell::GreenMan),
            (sq(4, 3), Cell::OrangeMan),
            (sq(6, 5), Cell::OrangeKing),
        ]);
        assert_eq!(board.green_count(), 1);
        assert_eq!(board.orange_count(), 2);
    }

    #[test]
    fn test_reset_restores_opening() {
        let mut board = Board::empty();
        board.reset();
        assert_eq!(board, Board::starting());
    }
}

//! Game rules for checkers.
//!
//! Pure functions evaluating a board after a move has been placed on it.
//! Rules are kept apart from board storage so the typestate engine and the
//! contracts can compose them.

pub mod promotion;
pub mod win;

pub use promotion::{promote_if_needed, reaches_promotion_row};
pub use win::check_winner;

//! Strictly Checkers - rule enforcement for 8×8 diagonal-capture checkers.
//!
//! The crate is pure game logic with no I/O:
//!
//! - **Board**: the 8×8 grid and per-side piece counts
//! - **Capture search**: recursive discovery of multi-jump chains
//! - **Validator**: classifies a proposed move or explains why it is illegal
//! - **Typestate**: `GameInProgress` / `GameFinished` phases, so a finished
//!   game cannot accept moves
//! - **Controller**: a mutable facade over the phases for turn loops
//!
//! # Example
//!
//! ```
//! use strictly_checkers::{GameController, Move, RuleSet, Square};
//!
//! let mut game = GameController::new(RuleSet::default());
//! let mv = Move::from_coords(2, 1, 3, 0).expect("on the board");
//! let applied = game.apply_move(mv).expect("legal opening move");
//! assert!(applied.captured().is_empty());
//! assert_eq!(game.cell(Square::new(3, 0).unwrap()).piece().map(|p| p.owner()),
//!            Some(strictly_checkers::Player::Green));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod capture;
mod config;
mod contracts;
mod controller;
mod phases;
mod typestate;
mod types;
mod validator;
mod wrapper;

pub mod invariants;
pub mod rules;

pub use action::{AppliedMove, Move, MoveError, ValidatedMove};
pub use board::{BOARD_SIZE, Board, PositionError};
pub use capture::{CaptureChain, CaptureSearch};
pub use config::{RevisitPolicy, RuleSet};
pub use contracts::{Contract, MoveContract};
pub use controller::GameController;
pub use phases::Phase;
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
pub use types::{Cell, Diagonal, Piece, Player, Rank, Square};
pub use validator::MoveValidator;
pub use wrapper::AnyGame;

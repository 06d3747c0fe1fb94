//! Phase-specific typestate structs for checkers.
//!
//! Each phase is its own type with phase-specific fields. A `GameFinished`
//! always has a winner, and only `GameInProgress` has a way to move.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::action::{AppliedMove, Move, MoveError, ValidatedMove};
use crate::board::{Board, PositionError};
use crate::config::RuleSet;
use crate::contracts::{Contract, MoveContract};
use crate::invariants::{self, CheckersInvariants, InvariantSet};
use crate::phases::Phase;
use crate::rules;
use crate::types::{Cell, Player, Square};
use crate::validator::MoveValidator;

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase - opening position, nobody has moved.
#[derive(Debug, Clone)]
pub struct GameSetup {
    board: Board,
    rules: RuleSet,
}

impl GameSetup {
    /// Creates a new game in setup phase.
    #[instrument]
    pub fn new(rules: RuleSet) -> Self {
        Self {
            board: Board::starting(),
            rules,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the rules.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Starts the game with Green to move (consumes setup).
    #[instrument(skip(self))]
    pub fn start(self) -> GameInProgress {
        GameInProgress {
            board: self.board,
            to_move: Player::Green,
            rules: self.rules,
            history: Vec::new(),
        }
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self::new(RuleSet::default())
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - can accept moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInProgress {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) rules: RuleSet,
    pub(crate) history: Vec<AppliedMove>,
}

impl GameInProgress {
    /// Starts a game from an arbitrary position.
    ///
    /// The position must satisfy every board invariant and both sides
    /// must still have pieces.
    #[instrument(skip(board))]
    pub fn from_position(board: Board, to_move: Player, rules: RuleSet) -> Result<Self, PositionError> {
        CheckersInvariants::check_all(&board)
            .map_err(|violations| PositionError::new(invariants::describe(&violations)))?;

        if let Some(winner) = rules::check_winner(&board) {
            return Err(PositionError::new(format!(
                "{} has no pieces left",
                winner.opponent()
            )));
        }

        Ok(Self {
            board,
            to_move,
            rules,
            history: Vec::new(),
        })
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the rules in force.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Returns move history.
    pub fn history(&self) -> &[AppliedMove] {
        &self.history
    }

    /// A validator bound to this position.
    pub fn validator(&self) -> MoveValidator<'_> {
        MoveValidator::new(&self.board, self.to_move, &self.rules)
    }

    /// True if `square` holds a piece of the player to move.
    pub fn is_selectable(&self, square: Square) -> bool {
        self.board.cell(square).belongs_to(self.to_move)
    }

    /// Validates a move without applying it.
    pub fn validate(&self, action: Move) -> Result<ValidatedMove, MoveError> {
        MoveContract::pre(self, &action)
    }

    /// Makes a move, consuming self and transitioning to the next state.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always
    /// - Postconditions checked in debug builds only
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn make_move(self, action: Move) -> Result<GameResult, MoveError> {
        let validated = self.validate(action)?;
        self.commit(validated).map(|(result, _)| result)
    }

    /// Applies a validated move: relocation, captures, promotion, win check.
    pub(crate) fn commit(self, validated: ValidatedMove) -> Result<(GameResult, AppliedMove), MoveError> {
        #[cfg(debug_assertions)]
        let before = self.board.clone();

        let mut game = self;
        let (action, piece, captures) = validated.into_parts();
        let mover = game.to_move;

        game.board.set_cell(action.to, piece.cell());
        game.board.set_cell(action.from, Cell::Empty);

        for &square in &captures {
            game.board.set_cell(square, Cell::Empty);
        }
        game.board.decrement(mover.opponent(), captures.len());

        let promoted = rules::promote_if_needed(&mut game.board, action.to);

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &game.board)?;

        let applied = AppliedMove::new(mover, action, captures, promoted);
        debug!(%applied, "Move applied");
        game.history.push(applied.clone());

        if let Some(winner) = rules::check_winner(&game.board) {
            info!(%winner, moves = game.history.len(), "Game over");
            let finished = GameFinished {
                board: game.board,
                winner,
                rules: game.rules,
                history: game.history,
            };
            return Ok((GameResult::Finished(finished), applied));
        }

        game.to_move = mover.opponent();
        Ok((GameResult::InProgress(game), applied))
    }

    /// Replays moves from the opening position.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(rules: RuleSet, moves: &[Move]) -> Result<GameResult, MoveError> {
        let mut game = GameSetup::new(rules).start();

        for action in moves {
            match game.make_move(*action)? {
                GameResult::InProgress(g) => game = g,
                GameResult::Finished(g) => return Ok(GameResult::Finished(g)),
            }
        }

        Ok(GameResult::InProgress(game))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished - the winner is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameFinished {
    board: Board,
    winner: Player,
    rules: RuleSet,
    history: Vec<AppliedMove>,
}

impl GameFinished {
    /// Returns the winner.
    pub fn winner(&self) -> Player {
        self.winner
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the rules the game was played under.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Returns move history.
    pub fn history(&self) -> &[AppliedMove] {
        &self.history
    }

    /// Restarts the game under the same rules (consumes finished, returns setup).
    #[instrument(skip(self))]
    pub fn restart(self) -> GameSetup {
        GameSetup::new(self.rules)
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug, Clone)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}

impl GameResult {
    /// The turn state after the move.
    pub fn phase(&self) -> Phase {
        match self {
            GameResult::InProgress(game) => Phase::AwaitingMove(game.to_move()),
            GameResult::Finished(game) => Phase::GameOver {
                winner: game.winner(),
            },
        }
    }
}

//! Serializable wrapper for the checkers typestate machine.

use serde::{Deserialize, Serialize};

use crate::action::AppliedMove;
use crate::board::Board;
use crate::config::RuleSet;
use crate::phases::Phase;
use crate::typestate::{GameFinished, GameInProgress, GameResult, GameSetup};

/// A game in any phase past setup.
///
/// Setup has no state worth persisting, so a stored game is always either
/// running or decided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnyGame {
    /// Game in progress.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}

impl AnyGame {
    /// Starts a fresh game under `rules`.
    pub fn new(rules: RuleSet) -> Self {
        AnyGame::InProgress(GameSetup::new(rules).start())
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        match self {
            AnyGame::InProgress(g) => g.board(),
            AnyGame::Finished(g) => g.board(),
        }
    }

    /// Returns the move history.
    pub fn history(&self) -> &[AppliedMove] {
        match self {
            AnyGame::InProgress(g) => g.history(),
            AnyGame::Finished(g) => g.history(),
        }
    }

    /// Returns the rules in force.
    pub fn rules(&self) -> &RuleSet {
        match self {
            AnyGame::InProgress(g) => g.rules(),
            AnyGame::Finished(g) => g.rules(),
        }
    }

    /// Returns the turn state.
    pub fn phase(&self) -> Phase {
        match self {
            AnyGame::InProgress(g) => Phase::AwaitingMove(g.to_move()),
            AnyGame::Finished(g) => Phase::GameOver { winner: g.winner() },
        }
    }

    /// Checks if the game is over.
    pub fn is_over(&self) -> bool {
        matches!(self, AnyGame::Finished(_))
    }
}

impl Default for AnyGame {
    fn default() -> Self {
        Self::new(RuleSet::default())
    }
}

impl From<GameInProgress> for AnyGame {
    fn from(game: GameInProgress) -> Self {
        AnyGame::InProgress(game)
    }
}

impl From<GameFinished> for AnyGame {
    fn from(game: GameFinished) -> Self {
        AnyGame::Finished(game)
    }
}

impl From<GameResult> for AnyGame {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::InProgress(g) => AnyGame::InProgress(g),
            GameResult::Finished(g) => AnyGame::Finished(g),
        }
    }
}

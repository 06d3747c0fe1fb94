//! The game controller: one mutable handle over the typestate machine.
//!
//! Front ends hold a [`GameController`] and talk to it in squares and
//! moves. Internally each accepted move consumes the current phase and
//! stores the next one.

use tracing::{debug, info, instrument, warn};

use crate::action::{AppliedMove, Move, MoveError, ValidatedMove};
use crate::board::{Board, PositionError};
use crate::config::RuleSet;
use crate::phases::Phase;
use crate::typestate::{GameInProgress, GameSetup};
use crate::types::{Cell, Player, Square};
use crate::wrapper::AnyGame;

/// Owns the game state and applies moves to it.
#[derive(Debug, Clone)]
pub struct GameController {
    game: AnyGame,
    rules: RuleSet,
}

impl GameController {
    /// Starts a new game from the opening position with Green to move.
    #[instrument]
    pub fn new(rules: RuleSet) -> Self {
        info!("Starting new checkers game");
        Self {
            game: AnyGame::new(rules),
            rules,
        }
    }

    /// Starts a game from an arbitrary position.
    pub fn from_position(board: Board, to_move: Player, rules: RuleSet) -> Result<Self, PositionError> {
        let game = GameInProgress::from_position(board, to_move, rules)?;
        Ok(Self {
            game: game.into(),
            rules,
        })
    }

    /// Restores the opening position, Green to move, history cleared.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        self.game = GameSetup::new(self.rules).start().into();
    }

    /// Contents of `square`.
    pub fn cell(&self, square: Square) -> Cell {
        self.game.board().cell(square)
    }

    /// True if `square` holds a piece of the player to move.
    pub fn is_selectable_piece(&self, square: Square) -> bool {
        match &self.game {
            AnyGame::InProgress(game) => game.is_selectable(square),
            AnyGame::Finished(_) => false,
        }
    }

    /// Judges a move without touching the state.
    pub fn validate_move(&self, mv: Move) -> Result<ValidatedMove, MoveError> {
        match &self.game {
            AnyGame::InProgress(game) => game.validate(mv),
            AnyGame::Finished(_) => Err(MoveError::GameOver),
        }
    }

    /// Validates and commits a move.
    ///
    /// A rejected move leaves the board, the turn, and the history as they
    /// were.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, mv: Move) -> Result<AppliedMove, MoveError> {
        let validated = match self.validate_move(mv) {
            Ok(validated) => validated,
            Err(err) => {
                debug!(%err, "Move rejected");
                return Err(err);
            }
        };

        let game = match std::mem::take(&mut self.game) {
            AnyGame::InProgress(game) => game,
            finished @ AnyGame::Finished(_) => {
                self.game = finished;
                return Err(MoveError::GameOver);
            }
        };

        let snapshot = game.clone();
        match game.commit(validated) {
            Ok((result, applied)) => {
                self.game = result.into();
                if let Phase::GameOver { winner } = self.game.phase() {
                    info!(%winner, "Player wins");
                }
                Ok(applied)
            }
            Err(err) => {
                warn!(%err, "Commit failed, restoring previous position");
                self.game = snapshot.into();
                Err(err)
            }
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    /// Player to move, or `None` once the game is over.
    pub fn current_player(&self) -> Option<Player> {
        self.game.phase().current_player()
    }

    /// Winner, once decided.
    pub fn winner(&self) -> Option<Player> {
        self.game.phase().winner()
    }

    /// Returns the turn state.
    pub fn phase(&self) -> Phase {
        self.game.phase()
    }

    /// Returns the committed moves, oldest first.
    pub fn history(&self) -> &[AppliedMove] {
        self.game.history()
    }

    /// Returns the rules in force.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Returns the underlying game, e.g. for persistence.
    pub fn game(&self) -> &AnyGame {
        &self.game
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(RuleSet::default())
    }
}

impl From<AnyGame> for GameController {
    fn from(game: AnyGame) -> Self {
        let rules = *game.rules();
        Self { game, rules }
    }
}

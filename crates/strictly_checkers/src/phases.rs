//! Turn state of a game as a tagged value.

use serde::{Deserialize, Serialize};

use crate::types::Player;

/// Where a game stands between moves.
///
/// A finished game has a winner and no player to move. The two cannot
/// coexist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the given player to move.
    AwaitingMove(Player),
    /// The game is over.
    GameOver {
        /// Side that captured every opposing piece.
        winner: Player,
    },
}

impl Phase {
    /// Returns the player to move, if the game is still running.
    pub fn current_player(&self) -> Option<Player> {
        match self {
            Phase::AwaitingMove(player) => Some(*player),
            Phase::GameOver { .. } => None,
        }
    }

    /// Returns the winner if the game is over.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Phase::AwaitingMove(_) => None,
            Phase::GameOver { winner } => Some(*winner),
        }
    }

    /// Returns true once a winner is decided.
    pub fn is_over(&self) -> bool {
        matches!(self, Phase::GameOver { .. })
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::AwaitingMove(player) => write!(f, "Player {} to move", player),
            Phase::GameOver { winner } => write!(f, "Player {} wins", winner),
        }
    }
}

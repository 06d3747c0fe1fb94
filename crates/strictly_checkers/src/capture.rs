//! Recursive search for multi-jump capture chains.
//!
//! A chain connects the moving piece's origin to a target square through
//! one or more jumps. Each jump passes over an adjacent opponent piece and
//! lands on the empty square directly beyond it. The search is a
//! depth-first walk over that jump graph; directions are tried in
//! [`Diagonal`] order and the first chain that reaches the target wins.
//!
//! Every jump captures a distinct opponent piece, so recursion depth never
//! exceeds the opponent's piece count regardless of board size.

use std::collections::HashSet;

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument, trace};

use crate::board::Board;
use crate::config::RevisitPolicy;
use crate::types::{Diagonal, Piece, Square};

/// A successful capture chain.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct CaptureChain {
    /// Jumped-over squares, in jump order.
    captured: Vec<Square>,
    /// Landing squares, in jump order. The last one is the target.
    landings: Vec<Square>,
}

impl CaptureChain {
    /// Number of pieces the chain captures.
    pub fn len(&self) -> usize {
        self.captured.len()
    }

    /// True if the chain captures nothing. Never the case for a found chain.
    pub fn is_empty(&self) -> bool {
        self.captured.is_empty()
    }

    /// Consumes the chain, returning the captured squares.
    pub fn into_captured(self) -> Vec<Square> {
        self.captured
    }
}

/// Depth-first capture chain search for one piece toward one target.
///
/// The visited set lives for a single [`CaptureSearch::run`] call.
#[derive(Debug)]
pub struct CaptureSearch<'a> {
    board: &'a Board,
    piece: Piece,
    origin: Square,
    target: Square,
    policy: RevisitPolicy,
    visited: HashSet<Square>,
}

impl<'a> CaptureSearch<'a> {
    /// Prepares a search for `piece` jumping from `origin` to `target`.
    pub fn new(
        board: &'a Board,
        piece: Piece,
        origin: Square,
        target: Square,
        policy: RevisitPolicy,
    ) -> Self {
        Self {
            board,
            piece,
            origin,
            target,
            policy,
            visited: HashSet::new(),
        }
    }

    /// Runs the search. Returns the first chain found, if any.
    #[instrument(skip(self), fields(piece = ?self.piece, origin = %self.origin, target = %self.target, policy = ?self.policy))]
    pub fn run(mut self) -> Option<CaptureChain> {
        let mut captured = Vec::new();
        let mut path = Vec::new();

        if self.extend(self.origin, &mut captured, &mut path) {
            let landings = path.split_off(1);
            debug!(captures = captured.len(), "Capture chain found");
            Some(CaptureChain { captured, landings })
        } else {
            debug!("No capture chain reaches the target");
            None
        }
    }

    /// Explores from `at`. On success `captured` and `path` hold the chain.
    fn extend(&mut self, at: Square, captured: &mut Vec<Square>, path: &mut Vec<Square>) -> bool {
        if self.blocks_revisit(at, path) {
            trace!(square = %at, "Already visited");
            return false;
        }
        path.push(at);

        if at == self.target {
            return true;
        }

        for diagonal in Diagonal::iter() {
            let Some((over, landing)) = self.jump(at, diagonal, captured) else {
                continue;
            };
            trace!(from = %at, over = %over, to = %landing, "Trying jump");

            captured.push(over);
            if self.extend(landing, captured, path) {
                return true;
            }
            captured.pop();
        }

        path.pop();
        false
    }

    fn blocks_revisit(&mut self, at: Square, path: &[Square]) -> bool {
        match self.policy {
            RevisitPolicy::Search => !self.visited.insert(at),
            RevisitPolicy::Path => path.contains(&at),
            RevisitPolicy::Captures => false,
        }
    }

    /// The jump available from `at` along `diagonal`, as (jumped, landing).
    fn jump(&self, at: Square, diagonal: Diagonal, captured: &[Square]) -> Option<(Square, Square)> {
        if !self.piece.captures_toward(diagonal) {
            return None;
        }

        let over = at.step(diagonal)?;
        let landing = over.step(diagonal)?;

        let opponent = self.piece.owner().opponent();
        if !self.board.cell(over).belongs_to(opponent) || captured.contains(&over) {
            return None;
        }

        // The mover has left its origin, so that square counts as empty.
        let open = landing == self.origin || self.board.cell(landing).is_empty();
        open.then_some((over, landing))
    }
}

//! The turn loop.

use std::io::{BufRead, Write};

use anyhow::{Result, anyhow};
use strictly_checkers::{Board, GameController, Move, Player, Square};
use tracing::{debug, info, instrument};

use super::input::{INVALID_COORDINATE, parse_coordinate};
use super::{Console, render};

impl<R: BufRead, W: Write> Console<R, W> {
    /// Plays a game from the opening position.
    ///
    /// Returns the winner, or `None` if input ran out first.
    pub fn play(&mut self) -> Result<Option<Player>> {
        let game = GameController::new(*self.settings.rules());
        self.play_game(game)
    }

    /// Plays `game` to the end.
    #[instrument(skip_all)]
    pub fn play_game(&mut self, mut game: GameController) -> Result<Option<Player>> {
        self.clear()?;
        self.writeln("\nThe game has just begun: good luck ;)\n")?;

        while let Some(player) = game.current_player() {
            self.show_board(game.board())?;
            let banner = render::paint(&format!("Player {}", player), render::player_color(player), self.color());
            self.writeln(&banner)?;

            if !self.take_turn(&mut game)? {
                info!(moves = game.history().len(), "Input ended mid-game");
                return Ok(None);
            }
        }

        let Some(winner) = game.winner() else {
            return Err(anyhow!("game ended without a winner"));
        };
        info!(%winner, moves = game.history().len(), "Game finished");

        self.clear()?;
        self.show_board(game.board())?;
        let banner = render::paint(
            &format!("The winner is player {}", winner),
            render::player_color(winner),
            self.color(),
        );
        self.writeln(&banner)?;
        Ok(Some(winner))
    }

    /// Repeats piece and destination prompts until a move is accepted.
    /// Returns false at end of input.
    fn take_turn(&mut self, game: &mut GameController) -> Result<bool> {
        loop {
            let Some(from) = self.ask_for_piece(game)? else {
                return Ok(false);
            };

            self.writeln("Move your piece: ")?;
            let Some(to) = self.ask_for_square(game.board())? else {
                return Ok(false);
            };

            match game.apply_move(Move::new(from, to)) {
                Ok(applied) => {
                    debug!(%applied, "Turn complete");
                    return Ok(true);
                }
                Err(err) => {
                    self.show_board(game.board())?;
                    self.error(&err.to_string())?;
                }
            }
        }
    }

    fn ask_for_piece(&mut self, game: &GameController) -> Result<Option<Square>> {
        self.writeln("Select your piece: ")?;
        loop {
            let Some(square) = self.ask_for_square(game.board())? else {
                return Ok(None);
            };
            if game.is_selectable_piece(square) {
                return Ok(Some(square));
            }
            self.show_board(game.board())?;
            self.error("Select a valid piece: ")?;
        }
    }

    fn ask_for_square(&mut self, board: &Board) -> Result<Option<Square>> {
        let Some(row) = self.ask_for_coordinate("Row: ", board)? else {
            return Ok(None);
        };
        let Some(col) = self.ask_for_coordinate("Col: ", board)? else {
            return Ok(None);
        };
        let square = Square::new(row, col).ok_or_else(|| anyhow!("({}, {}) is off the board", row, col))?;
        Ok(Some(square))
    }

    fn ask_for_coordinate(&mut self, label: &str, board: &Board) -> Result<Option<u8>> {
        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(None);
            };
            if let Some(value) = parse_coordinate(&line) {
                return Ok(Some(value));
            }
            self.show_board(board)?;
            self.error(INVALID_COORDINATE)?;
        }
    }
}

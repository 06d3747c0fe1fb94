//! Main menu and instructions screen.

use std::io::{BufRead, Write};

use anyhow::Result;
use strictly_checkers::Player;
use tracing::{debug, instrument};

use super::input::{MenuKey, parse_menu_key, read_line};
use super::{Console, render};

const MENU: &str = "\n==========\n|| MENU ||\n==========\n\np: Start playing\n\ni: Instructions\n\nq: Close game\n";

const INSTRUCTIONS: &[(&str, &[&str])] = &[
    (
        "Objective:",
        &["  The objective of Checkers is to eliminate all of the opponent's pieces from the board.\n"],
    ),
    (
        "Moving:",
        &[
            "  - Normal pieces (g, o) move forward diagonally to an adjacent empty square.",
            "  - When a piece reaches the opposite side of the board, it becomes a King (G, O), which can move both forward and backward diagonally.\n",
        ],
    ),
    (
        "Capturing:",
        &[
            "  - If an opponent's piece is adjacent and the square immediately beyond it is empty, you can jump over the opponent's piece and remove it from the board.",
            "  - Multiple jumps are allowed if after the first jump, another capturing opportunity is available. Enter only the final square; every piece jumped on the way is removed.\n",
        ],
    ),
    (
        "Winning the Game:",
        &["  - You win by capturing all of the opponent's pieces.\n"],
    ),
    (
        "Gameplay:",
        &[
            "  - Players take turns to move one piece at a time. Green moves first.",
            "  - To move a piece, first select the piece by entering its row and column numbers, then enter the row and column numbers of the destination square.\n",
        ],
    ),
    (
        "Note:",
        &["  - The board is an 8x8 grid, with rows and columns numbered from 0 to 7."],
    ),
];

impl<R: BufRead, W: Write> Console<R, W> {
    /// Runs the menu until the player quits or input ends.
    #[instrument(skip(self))]
    pub fn run_menu(&mut self) -> Result<()> {
        loop {
            self.writeln(MENU)?;

            let key = loop {
                let Some(line) = read_line(&mut self.input)? else {
                    return Ok(());
                };
                match parse_menu_key(&line) {
                    Some(key) => break key,
                    None => self.error("Please, enter a valid key: ")?,
                }
            };
            debug!(?key, "Menu selection");

            match key {
                MenuKey::Quit => {
                    self.writeln("BYE BYE")?;
                    return Ok(());
                }
                MenuKey::Instructions => {
                    self.instructions()?;
                    if self.prompt("\nEnter any key to go back: ")?.is_none() {
                        return Ok(());
                    }
                }
                MenuKey::Play => {
                    if self.play()?.is_none() {
                        return Ok(());
                    }
                    if self.prompt("Enter any key to return to the menu")?.is_none() {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Prints the rules of the game.
    pub fn instructions(&mut self) -> Result<()> {
        self.clear()?;
        let color = self.color();

        let title = render::bold("Checkers Game Instructions", color);
        self.writeln(&format!("{}\n", title))?;

        let (objective, objective_lines) = INSTRUCTIONS[0];
        self.writeln(&render::bold(objective, color))?;
        for line in objective_lines {
            self.writeln(line)?;
        }

        self.writeln(&render::bold("Players:", color))?;
        self.writeln("  There are two players:")?;
        for player in [Player::Green, Player::Orange] {
            let name = render::paint(&format!("    {}", player), render::player_color(player), color);
            self.writeln(&name)?;
        }
        self.writeln("")?;

        for (heading, lines) in &INSTRUCTIONS[1..] {
            self.writeln(&render::bold(heading, color))?;
            for line in *lines {
                self.writeln(line)?;
            }
        }
        Ok(())
    }
}

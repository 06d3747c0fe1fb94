//! Console front end: menu, instructions, and the turn loop.
//!
//! The console is generic over its input and output streams so that a
//! whole session can be driven from a script in tests.

mod input;
mod menu;
mod render;
mod session;

pub use input::{INVALID_COORDINATE, MenuKey, parse_coordinate, parse_menu_key};
pub use render::render_board;

use std::io::{BufRead, Write};

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::Color,
    terminal::{Clear, ClearType},
};
use strictly_checkers::Board;

use crate::settings::Settings;

/// A checkers session bound to one input and one output stream.
pub struct Console<R, W> {
    input: R,
    output: W,
    settings: Settings,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading from `input` and writing to `output`.
    pub fn new(input: R, output: W, settings: Settings) -> Self {
        Self {
            input,
            output,
            settings,
        }
    }

    /// Returns the settings in use.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Consumes the console, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn color(&self) -> bool {
        *self.settings.display().color()
    }

    fn write(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    fn writeln(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn error(&mut self, text: &str) -> Result<()> {
        let line = render::paint(text, Color::Red, self.color());
        self.writeln(&line)
    }

    fn show_board(&mut self, board: &Board) -> Result<()> {
        let text = render_board(board, self.color());
        self.writeln(&text)
    }

    fn clear(&mut self) -> Result<()> {
        if *self.settings.display().clear_screen() {
            queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
            self.output.flush()?;
        }
        Ok(())
    }

    /// Prints `text` and reads the reply. `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        self.write(text)?;
        Ok(input::read_line(&mut self.input)?)
    }
}

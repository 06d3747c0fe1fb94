//! Line-oriented input parsing.

use std::io::BufRead;

use strictly_checkers::BOARD_SIZE;

/// Shown when a coordinate prompt gets anything but a single digit.
pub const INVALID_COORDINATE: &str = "Invalid input. Please enter a number between 0 and 7.";

/// Parses one board coordinate: exactly one digit in `0..BOARD_SIZE`.
///
/// Surrounding whitespace is ignored.
pub fn parse_coordinate(line: &str) -> Option<u8> {
    let mut chars = line.trim().chars();
    let digit = chars.next()?.to_digit(10)?;
    if chars.next().is_some() {
        return None;
    }
    u8::try_from(digit).ok().filter(|d| *d < BOARD_SIZE)
}

/// Menu choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    /// Start a game.
    Play,
    /// Show the instructions.
    Instructions,
    /// Leave the program.
    Quit,
}

/// Parses a menu key, case-insensitively.
pub fn parse_menu_key(line: &str) -> Option<MenuKey> {
    match line.trim().to_lowercase().as_str() {
        "p" => Some(MenuKey::Play),
        "i" => Some(MenuKey::Instructions),
        "q" => Some(MenuKey::Quit),
        _ => None,
    }
}

/// Reads one line. Returns `None` at end of input.
pub fn read_line(input: &mut impl BufRead) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

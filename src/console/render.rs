//! Text rendering of the board and messages.

use crossterm::style::{Color, Stylize};
use strictly_checkers::{BOARD_SIZE, Board, Cell, Player};

const ORANGE: Color = Color::Rgb {
    r: 255,
    g: 165,
    b: 0,
};

const RULE: &str = "   =====================";

/// Terminal colour for a player's pieces and banners.
pub fn player_color(player: Player) -> Color {
    match player {
        Player::Green => Color::Green,
        Player::Orange => ORANGE,
    }
}

/// Wraps `text` in `color` when colouring is enabled.
pub fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        text.with(color).to_string()
    } else {
        text.to_string()
    }
}

/// Bold `text` when colouring is enabled.
pub fn bold(text: &str, enabled: bool) -> String {
    if enabled {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

/// Renders the board with row 7 at the top.
///
/// ```text
///       0 1 2 3 4 5 6 7
///    =====================
///   7|| o . o . o . o . ||
///   ...
///   0|| . g . g . g . g ||
///    =====================
/// ```
pub fn render_board(board: &Board, color: bool) -> String {
    let header: Vec<String> = (0..BOARD_SIZE).map(|col| col.to_string()).collect();
    let mut out = format!("\n      {}\n", header.join(" "));
    out.push_str(RULE);
    out.push('\n');

    for (row_index, row) in board.rows().iter().enumerate().rev() {
        out.push_str(&format!("  {}|| ", row_index));
        for cell in row {
            out.push_str(&render_cell(*cell, color));
            out.push(' ');
        }
        out.push_str("||\n");
    }

    out.push_str(RULE);
    out.push('\n');
    out
}

fn render_cell(cell: Cell, color: bool) -> String {
    let symbol = cell.symbol().to_string();
    match cell.owner() {
        Some(player) => paint(&symbol, player_color(player), color),
        None => symbol,
    }
}

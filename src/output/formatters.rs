//! Formatting utilities for terminal output

use crate::core::{Cell, Color, KeyboardHints};
use colored::{ColoredString, Colorize};

/// Paint a tile in its hint colour
#[must_use]
pub fn paint_tile(text: &str, color: Color) -> ColoredString {
    match color {
        Color::Green => text.white().on_green().bold(),
        Color::Yellow => text.black().on_yellow().bold(),
        Color::Gray => text.white().on_bright_black(),
        Color::Default => text.normal(),
    }
}

/// One board cell, padded; `_` marks an empty cell
#[must_use]
pub fn cell_text(cell: &Cell) -> String {
    format!(" {} ", cell.letter.unwrap_or('_'))
}

/// Format a board row as coloured tiles
#[must_use]
pub fn format_row(row: &[Cell]) -> String {
    row.iter()
        .map(|cell| paint_tile(&cell_text(cell), cell.color).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format the keyboard as three QWERTY lines, letters coloured by hint
#[must_use]
pub fn format_keyboard(hints: &KeyboardHints) -> String {
    KeyboardHints::LAYOUT
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys: Vec<String> = row
                .chars()
                .map(|key| match hints.get(key) {
                    Color::Green => key.to_string().green().bold().to_string(),
                    Color::Yellow => key.to_string().yellow().bold().to_string(),
                    Color::Gray => key.to_string().bright_black().to_string(),
                    Color::Default => key.to_string(),
                })
                .collect();
            format!("{}{}", " ".repeat(i), keys.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

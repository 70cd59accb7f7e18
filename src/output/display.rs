//! Display functions for the line-based game

use super::formatters::{format_keyboard, format_row};
use crate::game::{GameState, Snapshot};
use colored::Colorize;
use std::io::{self, Write};

/// Write the board and keyboard
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_board<W: Write>(out: &mut W, snapshot: &Snapshot) -> io::Result<()> {
    writeln!(out)?;
    for row in snapshot.rows {
        writeln!(out, "  {}", format_row(row))?;
    }
    writeln!(out)?;
    writeln!(out, "{}", format_keyboard(snapshot.hints))?;
    writeln!(out)?;
    Ok(())
}

/// Write the end-of-game summary
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_result<W: Write>(out: &mut W, snapshot: &Snapshot) -> io::Result<()> {
    writeln!(out, "{}", "═".repeat(40).cyan())?;
    match (snapshot.state, snapshot.secret) {
        (GameState::Loss, Some(secret)) => writeln!(
            out,
            "{}",
            format!("You lost! The word was {secret}").red().bold()
        )?,
        _ => writeln!(
            out,
            "{}",
            format!(
                "You won in {} {}!",
                snapshot.attempt,
                if snapshot.attempt == 1 { "attempt" } else { "attempts" }
            )
            .green()
            .bold()
        )?,
    }
    writeln!(out, "\n{}", snapshot.score_line().bright_white().bold())?;
    writeln!(out, "{}", snapshot.emoji_grid())?;
    writeln!(out, "{}", "═".repeat(40).cyan())?;
    Ok(())
}

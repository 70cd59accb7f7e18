//! Hard mode constraints
//!
//! In hard mode a guess must respect the feedback of the row directly above
//! it: greens stay in place and yellows must be reused somewhere. Only that
//! one row is consulted, not every earlier row.

use super::{Cell, Color};
use std::fmt;

/// Why a candidate guess breaks hard mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardModeViolation {
    /// A green letter was moved or dropped (`position` is 0-based)
    MissingFixedLetter { letter: char, position: usize },
    /// A yellow letter is absent from the guess
    MustUseLetter(char),
}

impl fmt::Display for HardModeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFixedLetter { letter, position } => {
                write!(f, "Position {} must be '{letter}'", position + 1)
            }
            Self::MustUseLetter(letter) => write!(f, "Guess must contain '{letter}'"),
        }
    }
}

impl std::error::Error for HardModeViolation {}

/// Check `candidate` against the previous row's feedback
///
/// All green positions are checked before any yellow letter, left to right, and
/// the first failure is reported. Comparison is case-insensitive.
///
/// # Errors
/// Returns the first [`HardModeViolation`] found.
///
/// # Examples
/// ```
/// use wordle_tui::core::{Cell, Color, HardModeViolation, hard_mode};
///
/// let previous = [
///     Cell { letter: Some('T'), color: Color::Yellow },
///     Cell { letter: Some('R'), color: Color::Green },
/// ];
/// assert!(hard_mode::check("TR", &previous).is_ok());
/// assert!(hard_mode::check("AR", &previous).is_err());
/// assert_eq!(
///     hard_mode::check("AT", &previous),
///     Err(HardModeViolation::MissingFixedLetter { letter: 'R', position: 1 })
/// );
/// ```
pub fn check(candidate: &str, previous: &[Cell]) -> Result<(), HardModeViolation> {
    let candidate: Vec<char> = candidate
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .collect();

    for (position, cell) in previous.iter().enumerate() {
        if cell.color != Color::Green {
            continue;
        }
        if let Some(letter) = cell.letter
            && candidate.get(position) != Some(&letter)
        {
            return Err(HardModeViolation::MissingFixedLetter { letter, position });
        }
    }

    for cell in previous {
        if cell.color != Color::Yellow {
            continue;
        }
        if let Some(letter) = cell.letter
            && !candidate.contains(&letter)
        {
            return Err(HardModeViolation::MustUseLetter(letter));
        }
    }

    Ok(())
}

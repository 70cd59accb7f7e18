//! Game state, settings and rejection reasons

use crate::core::HardModeViolation;
use std::fmt;

/// Where the game currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Collecting and evaluating guesses
    Idle,
    /// Settings panel open; guesses are paused
    Settings,
    /// Secret found (terminal)
    Win,
    /// Out of rows (terminal)
    Loss,
}

impl GameState {
    /// Check whether the game has ended
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Win | Self::Loss)
    }
}

/// Player options that survive a restart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub hard_mode: bool,
}

/// Board height; the width always comes from the dictionary's word length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { rows: 6 }
    }
}

/// Result of feeding one input event to the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Event consumed; keep going
    Continue,
    /// Submission refused; the active row is untouched
    Rejected(GuessError),
    /// The game just reached a terminal state
    Finished(GameState),
    /// The player asked to leave
    Quit,
    /// Event has no meaning in the current state
    Ignored,
}

/// Why a submitted row was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    IncompleteGuess,
    NotInDictionary(String),
    /// `position` is 0-based
    MissingFixedLetter { letter: char, position: usize },
    MustUseLetter(char),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteGuess => write!(f, "Not enough letters"),
            Self::NotInDictionary(word) => write!(f, "'{word}' is not in the word list"),
            Self::MissingFixedLetter { letter, position } => fmt::Display::fmt(
                &HardModeViolation::MissingFixedLetter {
                    letter: *letter,
                    position: *position,
                },
                f,
            ),
            Self::MustUseLetter(letter) => {
                fmt::Display::fmt(&HardModeViolation::MustUseLetter(*letter), f)
            }
        }
    }
}

impl std::error::Error for GuessError {}

impl From<HardModeViolation> for GuessError {
    fn from(violation: HardModeViolation) -> Self {
        match violation {
            HardModeViolation::MissingFixedLetter { letter, position } => {
                Self::MissingFixedLetter { letter, position }
            }
            HardModeViolation::MustUseLetter(letter) => Self::MustUseLetter(letter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states() {
        assert!(GameState::Win.is_terminal());
        assert!(GameState::Loss.is_terminal());
        assert!(!GameState::Idle.is_terminal());
        assert!(!GameState::Settings.is_terminal());
    }

    #[test]
    fn guess_error_messages() {
        assert_eq!(GuessError::IncompleteGuess.to_string(), "Not enough letters");
        assert_eq!(
            GuessError::NotInDictionary("XYZZY".into()).to_string(),
            "'XYZZY' is not in the word list"
        );
        assert_eq!(
            GuessError::MissingFixedLetter {
                letter: 'R',
                position: 1
            }
            .to_string(),
            "Position 2 must be 'R'"
        );
    }

    #[test]
    fn hard_mode_violation_converts() {
        assert_eq!(
            GuessError::from(HardModeViolation::MustUseLetter('T')),
            GuessError::MustUseLetter('T')
        );
    }

    #[test]
    fn default_config_is_classic_wordle() {
        let config = GameConfig::default();
        assert_eq!(config.rows, 6);
        assert!(!Settings::default().hard_mode);
    }
}

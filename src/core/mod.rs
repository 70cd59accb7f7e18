//! Core domain types for Wordle
//!
//! Words, feedback colours, the board, keyboard hints and hard-mode rules.
//! Nothing here touches the terminal or the file system.

mod board;
mod feedback;
pub mod hard_mode;
mod keyboard;
mod word;

pub use board::{Cell, GuessBoard};
pub use feedback::{Color, Feedback};
pub use hard_mode::HardModeViolation;
pub use keyboard::KeyboardHints;
pub use word::{Word, WordError};

//! Wordle TUI
//!
//! A terminal Wordle game: evaluation, hard mode, a keyboard of hints and a
//! state machine shared by the full-screen and line-based front ends.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_tui::core::{Color, Feedback, Word};
//!
//! let guess = Word::new("trace").unwrap();
//! let secret = Word::new("crane").unwrap();
//!
//! let feedback = Feedback::calculate(&guess, &secret);
//! assert_eq!(feedback.colors()[0], Color::Gray);
//! assert_eq!(feedback.to_emoji(), "⬛🟩🟩🟨🟩");
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

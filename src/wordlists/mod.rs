//! Word lists and the dictionary
//!
//! Provides the embedded default word list, file loading, and the
//! [`WordStore`] the game validates guesses against.

mod embedded;
pub mod loader;
mod store;

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};
pub use store::{DictionaryError, WordStore};

/// Word length of the embedded list
pub const DEFAULT_WORD_LEN: usize = 5;

//! Word representation
//!
//! A Word is a validated, upper-cased run of ASCII letters. Dictionary entries,
//! secrets and submitted guesses all pass through here.

use std::fmt;

/// An upper-case ASCII word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength { expected: usize, found: usize },
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, found } => {
                write!(f, "Word must be exactly {expected} letters, got {found}")
            }
            Self::Empty => write!(f, "Word is empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string of any non-zero length
    ///
    /// The text is upper-cased.
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains anything but ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_tui::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_ascii_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Create a new Word that must be exactly `len` letters long
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` on a length mismatch, or any error of [`Word::new`].
    pub fn with_len(text: impl Into<String>, len: usize) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        let found = word.text.len();
        if found == len {
            Ok(word)
        } else {
            Err(WordError::InvalidLength {
                expected: len,
                found,
            })
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters as upper-case ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

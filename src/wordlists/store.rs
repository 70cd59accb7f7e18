//! In-memory dictionary
//!
//! A [`WordStore`] is loaded once at startup and answers membership queries
//! with a hash lookup. It is never empty.

use super::loader;
use crate::core::Word;
use log::{debug, info};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Fatal dictionary problems
#[derive(Debug)]
pub enum DictionaryError {
    Io { path: PathBuf, source: io::Error },
    Empty { origin: String, word_len: usize },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read dictionary '{}': {source}", path.display())
            }
            Self::Empty { origin, word_len } => {
                write!(f, "dictionary '{origin}' has no valid {word_len}-letter words")
            }
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Empty { .. } => None,
        }
    }
}

/// Set of valid words of one fixed length
#[derive(Debug, Clone)]
pub struct WordStore {
    word_len: usize,
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl WordStore {
    /// Load a dictionary file, keeping only `word_len`-letter entries
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Io` if the file cannot be read and
    /// `DictionaryError::Empty` if no valid entries remain.
    pub fn load<P: AsRef<Path>>(path: P, word_len: usize) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let words = loader::load_from_file(path, word_len).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::build(words, word_len, &path.display().to_string())
    }

    /// Build a store from an in-memory list with the same normalisation as [`WordStore::load`]
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if no entry has `word_len` letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_tui::wordlists::WordStore;
    ///
    /// let store = WordStore::from_words(&["crane", "Slate", "toolong"], 5).unwrap();
    /// assert_eq!(store.len(), 2);
    /// assert!(store.contains("SLATE"));
    /// assert!(!store.contains("toolong"));
    /// ```
    pub fn from_words(words: &[&str], word_len: usize) -> Result<Self, DictionaryError> {
        Self::build(loader::words_from_slice(words, word_len), word_len, "<memory>")
    }

    fn build(candidates: Vec<Word>, word_len: usize, origin: &str) -> Result<Self, DictionaryError> {
        let mut index = FxHashSet::default();
        let words: Vec<Word> = candidates
            .into_iter()
            .filter(|word| index.insert(word.text().to_string()))
            .collect();

        if words.is_empty() {
            return Err(DictionaryError::Empty {
                origin: origin.to_string(),
                word_len,
            });
        }

        info!("loaded {} {word_len}-letter words from {origin}", words.len());
        Ok(Self {
            word_len,
            words,
            index,
        })
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: an empty store cannot be built
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length every word in the store shares
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    /// Case-insensitive exact membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(&word.to_ascii_uppercase())
    }

    /// Pick a secret uniformly at random
    pub fn pick_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        let word = &self.words[rng.random_range(0..self.words.len())];
        debug!("picked secret {word}");
        word
    }
}

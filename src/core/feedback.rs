//! Wordle feedback calculation and representation
//!
//! Feedback is one [`Color`] per letter of a guess:
//! - Gray: letter not in word (or all copies already accounted for)
//! - Yellow: letter in word, wrong position
//! - Green: letter in correct position
//!
//! `Default` marks a cell that has not been evaluated yet.

use super::Word;

/// Feedback colour of a cell or keyboard key
///
/// The derived ordering `Default < Gray < Yellow < Green` is what keyboard
/// hints upgrade along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Color {
    #[default]
    Default,
    Gray,
    Yellow,
    Green,
}

impl Color {
    /// Emoji square for this colour
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Gray => '⬛',
            Self::Default => '⬜',
        }
    }
}

/// Feedback for one evaluated guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Color>);

impl Feedback {
    /// Calculate the feedback when `guess` is scored against `secret`
    ///
    /// Implements Wordle's duplicate-letter rules: a letter never scores more
    /// non-Gray marks than it has copies in the secret.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches Green and consume those secret positions
    /// 2. Second pass: for each remaining position, consume the earliest
    ///    unconsumed secret position holding the same letter and mark Yellow
    ///
    /// Both passes scan left to right, so the result is deterministic.
    ///
    /// # Panics
    /// Panics in debug mode if the words differ in length
    ///
    /// # Examples
    /// ```
    /// use wordle_tui::core::{Color, Feedback, Word};
    ///
    /// let guess = Word::new("trace").unwrap();
    /// let secret = Word::new("crane").unwrap();
    /// let feedback = Feedback::calculate(&guess, &secret);
    ///
    /// use Color::{Gray, Green, Yellow};
    /// assert_eq!(feedback.colors(), &[Gray, Green, Green, Yellow, Green]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let guess = guess.letters();
        let secret = secret.letters();
        debug_assert_eq!(guess.len(), secret.len(), "guess and secret lengths differ");

        let mut result = vec![Color::Gray; guess.len()];
        let mut consumed = vec![false; secret.len()];

        // First pass: greens
        for (i, (&g, &s)) in guess.iter().zip(secret).enumerate() {
            if g == s {
                result[i] = Color::Green;
                consumed[i] = true;
            }
        }

        // Second pass: yellows from whatever the greens left over
        for (i, &g) in guess.iter().enumerate() {
            if result[i] == Color::Green {
                continue;
            }
            let hit = secret
                .iter()
                .zip(consumed.iter())
                .position(|(&s, &used)| !used && s == g);
            if let Some(j) = hit {
                result[i] = Color::Yellow;
                consumed[j] = true;
            }
        }

        Self(result)
    }

    /// Per-position colours
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&c| c == Color::Green)
    }

    /// Count the positions with the given colour
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.0.iter().filter(|&&c| c == color).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

impl From<Vec<Color>> for Feedback {
    fn from(colors: Vec<Color>) -> Self {
        Self(colors)
    }
}

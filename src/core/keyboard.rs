//! Keyboard hints
//!
//! Tracks the best colour ever seen for each letter A-Z. Hints only move up
//! the `Default < Gray < Yellow < Green` ladder.

use super::Color;

const ALPHABET: usize = 26;

/// Best known colour per letter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyboardHints {
    keys: [Color; ALPHABET],
}

impl KeyboardHints {
    /// QWERTY rows, top to bottom, as drawn by every front end
    pub const LAYOUT: [&'static str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one finalized row into the hints
    ///
    /// Each letter keeps `max(existing, new)`; non-letters are ignored.
    ///
    /// # Examples
    /// ```
    /// use wordle_tui::core::{Color, KeyboardHints};
    ///
    /// let mut hints = KeyboardHints::new();
    /// hints.apply("AB".chars(), &[Color::Green, Color::Gray]);
    /// hints.apply("AB".chars(), &[Color::Yellow, Color::Yellow]);
    ///
    /// assert_eq!(hints.get('a'), Color::Green);
    /// assert_eq!(hints.get('B'), Color::Yellow);
    /// ```
    pub fn apply<I>(&mut self, letters: I, colors: &[Color])
    where
        I: IntoIterator<Item = char>,
    {
        for (letter, &color) in letters.into_iter().zip(colors) {
            if let Some(index) = Self::index(letter) {
                self.keys[index] = self.keys[index].max(color);
            }
        }
    }

    /// Hint for a letter; `Default` for anything outside A-Z
    #[must_use]
    pub fn get(&self, letter: char) -> Color {
        Self::index(letter).map_or(Color::Default, |index| self.keys[index])
    }

    /// All letters with their hint, in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, Color)> + '_ {
        ('A'..='Z').zip(self.keys.iter().copied())
    }

    fn index(letter: char) -> Option<usize> {
        let upper = letter.to_ascii_uppercase();
        upper
            .is_ascii_uppercase()
            .then(|| usize::from(upper as u8 - b'A'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_start_default() {
        let hints = KeyboardHints::new();
        assert_eq!(hints.iter().count(), 26);
        assert!(hints.iter().all(|(_, c)| c == Color::Default));
    }

    #[test]
    fn hints_never_downgrade() {
        let mut hints = KeyboardHints::new();
        let sequence = [
            Color::Gray,
            Color::Green,
            Color::Yellow,
            Color::Gray,
            Color::Default,
        ];

        let mut previous = Color::Default;
        for color in sequence {
            hints.apply(['E'], &[color]);
            let current = hints.get('E');
            assert!(current >= previous);
            previous = current;
        }
        assert_eq!(hints.get('E'), Color::Green);
    }

    #[test]
    fn hints_duplicate_letter_in_row_keeps_best() {
        // LEVEL vs ALLEY: L is yellow at 0 and 4, E is gray at 1 and green at 3
        let mut hints = KeyboardHints::new();
        hints.apply(
            "LEVEL".chars(),
            &[
                Color::Yellow,
                Color::Gray,
                Color::Gray,
                Color::Green,
                Color::Yellow,
            ],
        );
        assert_eq!(hints.get('L'), Color::Yellow);
        assert_eq!(hints.get('E'), Color::Green);
        assert_eq!(hints.get('V'), Color::Gray);
        assert_eq!(hints.get('Z'), Color::Default);
    }

    #[test]
    fn hints_ignore_non_letters() {
        let mut hints = KeyboardHints::new();
        hints.apply(['1', '?'], &[Color::Green, Color::Green]);
        assert_eq!(hints, KeyboardHints::new());
        assert_eq!(hints.get('1'), Color::Default);
    }

    #[test]
    fn layout_covers_alphabet_once() {
        let mut keys: Vec<char> = KeyboardHints::LAYOUT.iter().flat_map(|row| row.chars()).collect();
        keys.sort_unstable();
        assert_eq!(keys, ('A'..='Z').collect::<Vec<_>>());
    }

    #[test]
    fn hints_iter_is_alphabetical() {
        let mut hints = KeyboardHints::new();
        hints.apply(['Z', 'a'], &[Color::Yellow, Color::Gray]);
        let keys: Vec<_> = hints.iter().collect();
        assert_eq!(keys[0], ('A', Color::Gray));
        assert_eq!(keys[25], ('Z', Color::Yellow));
    }
}

//! Word list loading utilities
//!
//! Turns dictionary files or in-memory slices into validated [`Word`]s of a
//! fixed length.

use crate::core::Word;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Strip the line terminator and parse one dictionary entry
///
/// Returns `None` for entries of the wrong length or with non-letters.
fn parse_line(line: &str, word_len: usize) -> Option<Word> {
    let entry = line.trim_end_matches(['\r', '\n']);
    Word::with_len(entry, word_len).ok()
}

/// Read words of length `word_len` from any buffered reader
///
/// Entries of any other length, containing non-letters, or not valid UTF-8
/// are skipped.
///
/// # Errors
///
/// Returns an I/O error if reading fails part way through.
pub fn words_from_reader<R: BufRead>(reader: R, word_len: usize) -> io::Result<Vec<Word>> {
    let mut words = Vec::new();
    for line in reader.split(b'\n') {
        let line = line?;
        let Ok(text) = std::str::from_utf8(&line) else {
            continue;
        };
        if let Some(word) = parse_line(text, word_len) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Load words of length `word_len` from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use wordle_tui::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_len: usize) -> io::Result<Vec<Word>> {
    let file = File::open(path)?;
    words_from_reader(BufReader::new(file), word_len)
}

/// Convert an embedded string slice to a Word vector
///
/// # Examples
/// ```
/// use wordle_tui::wordlists::loader::words_from_slice;
/// use wordle_tui::wordlists::DEFAULT_WORDS;
///
/// let words = words_from_slice(DEFAULT_WORDS, 5);
/// assert_eq!(words.len(), DEFAULT_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], word_len: usize) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| parse_line(s, word_len))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"], 5);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[2].text(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_wrong_length() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"], 5);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn words_from_slice_respects_word_len() {
        let words = words_from_slice(&["crane", "abc", "xyz"], 3);
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn reader_strips_crlf_and_folds_case() {
        let input = Cursor::new("Crane\r\nSLATE\r\nbad\r\n\r\nirate\n");
        let words = words_from_reader(input, 5).unwrap();
        let texts: Vec<_> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["CRANE", "SLATE", "IRATE"]);
    }

    #[test]
    fn reader_skips_entries_with_non_letters() {
        let input = Cursor::new("cr4ne\nsl te\nslate\n");
        let words = words_from_reader(input, 5).unwrap();
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn reader_skips_lines_that_are_not_utf8() {
        let input = Cursor::new(b"crane\nperch\xe9\nslate\r\n".to_vec());
        let words = words_from_reader(input, 5).unwrap();
        let texts: Vec<_> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["CRANE", "SLATE"]);
    }

    #[test]
    fn load_missing_file_is_an_error() {
        assert!(load_from_file("/definitely/not/here.txt", 5).is_err());
    }
}

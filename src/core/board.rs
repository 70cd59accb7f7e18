//! The guess board
//!
//! An R×L grid of [`Cell`]s with a write cursor. Only the active row is ever
//! written to, and a row's colours are set exactly once when it is finalized.

use super::Color;

/// One letter position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub letter: Option<char>,
    pub color: Color,
}

impl Cell {
    /// Check whether the cell has been scored
    #[inline]
    #[must_use]
    pub fn is_evaluated(&self) -> bool {
        self.color != Color::Default
    }
}

/// Board of guesses plus the (row, column) write cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessBoard {
    cells: Vec<Vec<Cell>>,
    cursor_row: usize,
    cursor_col: usize,
    finalized: usize,
}

impl GuessBoard {
    /// Create an empty board with `rows` rows of `word_len` cells
    ///
    /// # Panics
    /// Panics if either dimension is zero
    #[must_use]
    pub fn new(rows: usize, word_len: usize) -> Self {
        assert!(rows > 0 && word_len > 0, "board dimensions must be non-zero");
        Self {
            cells: vec![vec![Cell::default(); word_len]; rows],
            cursor_row: 0,
            cursor_col: 0,
            finalized: 0,
        }
    }

    /// Number of rows
    #[inline]
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of cells per row
    #[inline]
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.cells[0].len()
    }

    /// Current (row, column) write position
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    /// Number of rows that have been scored
    #[inline]
    #[must_use]
    pub const fn finalized_rows(&self) -> usize {
        self.finalized
    }

    /// All rows, top to bottom
    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    /// A single row
    ///
    /// # Panics
    /// Panics if `index` is out of range
    #[must_use]
    pub fn row(&self, index: usize) -> &[Cell] {
        &self.cells[index]
    }

    /// The row directly above the active one, if any
    #[must_use]
    pub fn previous_row(&self) -> Option<&[Cell]> {
        self.cursor_row
            .checked_sub(1)
            .map(|index| self.cells[index].as_slice())
    }

    /// Write a letter at the cursor and advance; no-op once the row is full
    pub fn insert_letter(&mut self, ch: char) {
        if self.cursor_col < self.word_len() {
            self.cells[self.cursor_row][self.cursor_col].letter = Some(ch.to_ascii_uppercase());
            self.cursor_col += 1;
        }
    }

    /// Blank the last written cell of the active row; no-op at column 0
    pub fn delete_letter(&mut self) {
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
            self.cells[self.cursor_row][self.cursor_col].letter = None;
        }
    }

    /// Check whether every cell of the active row holds a letter
    #[inline]
    #[must_use]
    pub fn is_row_full(&self) -> bool {
        self.cursor_col == self.word_len()
    }

    /// Letters of the active row, concatenated
    #[must_use]
    pub fn current_row_text(&self) -> String {
        self.cells[self.cursor_row]
            .iter()
            .filter_map(|cell| cell.letter)
            .collect()
    }

    /// Commit colours to the active row and move the cursor on
    ///
    /// The cursor moves to the start of the next row when there is one; on the
    /// last row it stays put with the column reset.
    ///
    /// # Panics
    /// Panics if `colors` does not have one entry per column
    pub fn finalize_row(&mut self, colors: &[Color]) {
        assert_eq!(colors.len(), self.word_len(), "one colour per cell");

        for (cell, &color) in self.cells[self.cursor_row].iter_mut().zip(colors) {
            cell.color = color;
        }
        self.finalized += 1;
        self.cursor_col = 0;
        if self.cursor_row + 1 < self.row_count() {
            self.cursor_row += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_word(board: &mut GuessBoard, word: &str) {
        for ch in word.chars() {
            board.insert_letter(ch);
        }
    }

    #[test]
    fn new_board_is_blank() {
        let board = GuessBoard::new(6, 5);
        assert_eq!(board.row_count(), 6);
        assert_eq!(board.word_len(), 5);
        assert_eq!(board.cursor(), (0, 0));
        assert!(board.rows().iter().flatten().all(|c| *c == Cell::default()));
        assert!(board.previous_row().is_none());
    }

    #[test]
    fn insert_uppercases_and_stops_at_row_end() {
        let mut board = GuessBoard::new(6, 5);
        type_word(&mut board, "cranes");

        assert_eq!(board.current_row_text(), "CRANE");
        assert_eq!(board.cursor(), (0, 5));
        assert!(board.is_row_full());
        assert!(board.row(1).iter().all(|c| c.letter.is_none()));
    }

    #[test]
    fn delete_is_noop_at_column_zero() {
        let mut board = GuessBoard::new(6, 5);
        board.delete_letter();
        assert_eq!(board.cursor(), (0, 0));

        type_word(&mut board, "ab");
        board.delete_letter();
        assert_eq!(board.current_row_text(), "A");
        assert_eq!(board.cursor(), (0, 1));
        assert_eq!(board.row(0)[1].letter, None);
    }

    #[test]
    fn finalize_commits_colors_and_advances() {
        let mut board = GuessBoard::new(6, 5);
        type_word(&mut board, "trace");
        let colors = [
            Color::Gray,
            Color::Green,
            Color::Green,
            Color::Yellow,
            Color::Green,
        ];
        board.finalize_row(&colors);

        assert_eq!(board.cursor(), (1, 0));
        assert_eq!(board.finalized_rows(), 1);
        let previous = board.previous_row().unwrap();
        assert!(previous.iter().all(Cell::is_evaluated));
        assert_eq!(previous[3].letter, Some('C'));
        assert_eq!(previous[3].color, Color::Yellow);
        assert!(board.row(1).iter().all(|c| !c.is_evaluated()));
    }

    #[test]
    fn finalize_last_row_keeps_cursor_on_board() {
        let mut board = GuessBoard::new(2, 3);
        for _ in 0..2 {
            type_word(&mut board, "abc");
            board.finalize_row(&[Color::Gray; 3]);
        }
        assert_eq!(board.cursor(), (1, 0));
        assert_eq!(board.finalized_rows(), 2);
    }
}

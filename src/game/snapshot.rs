//! Read-only view of a game for renderers

use super::state::{GameState, Settings};
use crate::core::{Cell, KeyboardHints};

/// Everything a front end needs to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'g> {
    pub state: GameState,
    pub rows: &'g [Vec<Cell>],
    /// (row, column) of the write cursor
    pub cursor: (usize, usize),
    pub hints: &'g KeyboardHints,
    /// Only present once the game is lost
    pub secret: Option<&'g str>,
    pub settings: Settings,
    /// 1-based attempt in progress, or attempts used once the game is over
    pub attempt: usize,
    pub max_rows: usize,
}

impl Snapshot<'_> {
    /// Emoji grid of the scored rows, one line per guess
    ///
    /// Suitable for sharing a result without giving the letters away.
    #[must_use]
    pub fn emoji_grid(&self) -> String {
        self.rows
            .iter()
            .filter(|row| row.iter().all(Cell::is_evaluated))
            .map(|row| row.iter().map(|cell| cell.color.emoji()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Heading line for the result screen, e.g. "Wordle 3/6"
    #[must_use]
    pub fn score_line(&self) -> String {
        match self.state {
            GameState::Win => format!("Wordle {}/{}", self.attempt, self.max_rows),
            _ => format!("Wordle X/{}", self.max_rows),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::Word;
    use crate::game::{Game, GameConfig, InputEvent, Settings};
    use crate::wordlists::WordStore;

    #[test]
    fn emoji_grid_lists_scored_rows_only() {
        let store = WordStore::from_words(&["crane", "trace"], 5).unwrap();
        let mut game = Game::with_secret(
            &store,
            GameConfig::default(),
            Settings::default(),
            Word::new("crane").unwrap(),
        );
        for c in "tracecr".chars() {
            game.handle(InputEvent::Letter(c));
            if c == 'e' {
                game.handle(InputEvent::Commit);
            }
        }

        let snapshot = game.snapshot();
        assert_eq!(snapshot.emoji_grid(), "⬛🟩🟩🟨🟩");
        assert_eq!(snapshot.score_line(), "Wordle X/6");
    }

    #[test]
    fn score_line_after_win() {
        let store = WordStore::from_words(&["crane", "trace"], 5).unwrap();
        let mut game = Game::with_secret(
            &store,
            GameConfig::default(),
            Settings::default(),
            Word::new("crane").unwrap(),
        );
        for word in ["trace", "crane"] {
            for c in word.chars() {
                game.handle(InputEvent::Letter(c));
            }
            game.handle(InputEvent::Commit);
        }

        let snapshot = game.snapshot();
        assert_eq!(snapshot.score_line(), "Wordle 2/6");
        assert_eq!(snapshot.emoji_grid(), "⬛🟩🟩🟨🟩\n🟩🟩🟩🟩🟩");
    }
}

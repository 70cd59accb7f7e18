//! The game state machine
//!
//! A [`Game`] owns everything about one round: secret, board, hints, settings
//! and state. Restarting builds a new `Game`; nothing is reset in place.

use super::input::InputEvent;
use super::snapshot::Snapshot;
use super::state::{GameConfig, GameState, GuessError, Settings, Step};
use crate::core::{Feedback, GuessBoard, KeyboardHints, Word, hard_mode};
use crate::wordlists::WordStore;
use log::{debug, info};
use rand::Rng;

/// One round of Wordle
#[derive(Debug, Clone)]
pub struct Game<'a> {
    store: &'a WordStore,
    config: GameConfig,
    settings: Settings,
    secret: Word,
    board: GuessBoard,
    hints: KeyboardHints,
    state: GameState,
}

impl<'a> Game<'a> {
    /// Start a round with a random secret from `store`
    ///
    /// The board is `config.rows` tall and as wide as the store's words.
    pub fn new<R: Rng + ?Sized>(
        store: &'a WordStore,
        config: GameConfig,
        settings: Settings,
        rng: &mut R,
    ) -> Self {
        let secret = store.pick_secret(rng).clone();
        Self::with_secret(store, config, settings, secret)
    }

    /// Start a round with a known secret
    ///
    /// # Examples
    /// ```
    /// use wordle_tui::game::{Game, GameConfig, GameState, InputEvent, Settings, Step};
    /// use wordle_tui::wordlists::WordStore;
    /// use wordle_tui::core::Word;
    ///
    /// let store = WordStore::from_words(&["crane", "trace"], 5).unwrap();
    /// let secret = Word::new("crane").unwrap();
    /// let mut game = Game::with_secret(&store, GameConfig::default(), Settings::default(), secret);
    ///
    /// for c in "crane".chars() {
    ///     game.handle(InputEvent::Letter(c));
    /// }
    /// assert_eq!(game.handle(InputEvent::Commit), Step::Finished(GameState::Win));
    /// ```
    #[must_use]
    pub fn with_secret(
        store: &'a WordStore,
        config: GameConfig,
        settings: Settings,
        secret: Word,
    ) -> Self {
        debug_assert_eq!(secret.letters().len(), store.word_len());
        info!(
            "new game: {} rows of {} letters, hard mode {}",
            config.rows,
            store.word_len(),
            settings.hard_mode
        );
        Self {
            store,
            config,
            settings,
            secret,
            board: GuessBoard::new(config.rows, store.word_len()),
            hints: KeyboardHints::new(),
            state: GameState::Idle,
        }
    }

    /// A fresh round with a new secret, keeping store, config and settings
    #[must_use]
    pub fn restart<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        Self::new(self.store, self.config, self.settings, rng)
    }

    /// Feed one input event through the state machine
    pub fn handle(&mut self, event: InputEvent) -> Step {
        match self.state {
            GameState::Idle => self.handle_idle(event),
            GameState::Settings => self.handle_settings(event),
            GameState::Win | GameState::Loss => match event {
                InputEvent::Quit => Step::Quit,
                _ => Step::Ignored,
            },
        }
    }

    fn handle_idle(&mut self, event: InputEvent) -> Step {
        match event {
            InputEvent::Letter(c) if c.is_ascii_alphabetic() => {
                self.board.insert_letter(c);
                Step::Continue
            }
            InputEvent::Backspace => {
                self.board.delete_letter();
                Step::Continue
            }
            InputEvent::Commit => match self.submit() {
                Ok(state) if state.is_terminal() => Step::Finished(state),
                Ok(_) => Step::Continue,
                Err(err) => Step::Rejected(err),
            },
            InputEvent::ToggleSettings => {
                self.state = GameState::Settings;
                Step::Continue
            }
            InputEvent::Quit => Step::Quit,
            InputEvent::Letter(_) | InputEvent::Other => Step::Ignored,
        }
    }

    fn handle_settings(&mut self, event: InputEvent) -> Step {
        match event {
            InputEvent::Commit => {
                self.settings.hard_mode = !self.settings.hard_mode;
                info!("hard mode {}", if self.settings.hard_mode { "on" } else { "off" });
                Step::Continue
            }
            InputEvent::ToggleSettings | InputEvent::Quit => {
                self.state = GameState::Idle;
                Step::Continue
            }
            _ => Step::Ignored,
        }
    }

    /// Validate, score and commit the active row
    ///
    /// Checks run in order: row complete, hard mode (from the second row on),
    /// dictionary membership. On any failure the board is left untouched.
    ///
    /// # Errors
    ///
    /// Returns the first [`GuessError`] found.
    pub fn submit(&mut self) -> Result<GameState, GuessError> {
        if !self.board.is_row_full() {
            return Err(GuessError::IncompleteGuess);
        }

        let text = self.board.current_row_text();

        if self.settings.hard_mode
            && let Some(previous) = self.board.previous_row()
        {
            hard_mode::check(&text, previous).inspect_err(|violation| {
                debug!("hard mode rejected {text}: {violation}");
            })?;
        }

        let Some(guess) = Word::new(text.as_str())
            .ok()
            .filter(|word| self.store.contains(word.text()))
        else {
            debug!("rejected {text}: not in dictionary");
            return Err(GuessError::NotInDictionary(text));
        };

        let last_row = self.board.cursor().0 + 1 == self.board.row_count();
        let feedback = Feedback::calculate(&guess, &self.secret);
        self.board.finalize_row(feedback.colors());
        self.hints.apply(guess.text().chars(), feedback.colors());
        debug!("guess {guess}: {}", feedback.to_emoji());

        if feedback.is_perfect() {
            self.state = GameState::Win;
        } else if last_row {
            self.state = GameState::Loss;
        }
        if self.state.is_terminal() {
            info!(
                "game over: {:?} after {} guesses (secret {})",
                self.state,
                self.board.finalized_rows(),
                self.secret
            );
        }
        Ok(self.state)
    }

    /// Give up the round in progress
    ///
    /// The round ends as a loss, so the secret shows up in the snapshot. Does
    /// nothing once the game is already over.
    pub fn forfeit(&mut self) -> Step {
        if self.state.is_terminal() {
            return Step::Ignored;
        }
        self.state = GameState::Loss;
        info!(
            "forfeited after {} guesses (secret {})",
            self.board.finalized_rows(),
            self.secret
        );
        Step::Finished(GameState::Loss)
    }

    /// Current state
    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Current settings
    #[inline]
    #[must_use]
    pub const fn settings(&self) -> Settings {
        self.settings
    }

    /// Board dimensions
    #[inline]
    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    /// The board
    #[must_use]
    pub const fn board(&self) -> &GuessBoard {
        &self.board
    }

    /// Keyboard hints so far
    #[must_use]
    pub const fn hints(&self) -> &KeyboardHints {
        &self.hints
    }

    /// Read-only view for renderers
    ///
    /// The secret is only exposed once the game is lost.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        let finalized = self.board.finalized_rows();
        Snapshot {
            state: self.state,
            rows: self.board.rows(),
            cursor: self.board.cursor(),
            hints: &self.hints,
            secret: (self.state == GameState::Loss).then(|| self.secret.text()),
            settings: self.settings,
            attempt: if self.state.is_terminal() {
                finalized
            } else {
                finalized + 1
            },
            max_rows: self.board.row_count(),
        }
    }
}

//! Input events understood by the game
//!
//! Front ends decode raw keys or lines into these once, so the state machine
//! never looks at key codes.

/// A single decoded input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A letter to type into the active row
    Letter(char),
    /// Remove the last typed letter
    Backspace,
    /// Submit the row (or flip hard mode while in settings)
    Commit,
    /// Leave the current screen or game
    Quit,
    /// Open or close the settings panel
    ToggleSettings,
    /// Anything else; ignored
    Other,
}

impl InputEvent {
    /// Map a printable character to an event
    ///
    /// `@` toggles settings, ASCII letters type, everything else is `Other`.
    ///
    /// # Examples
    /// ```
    /// use wordle_tui::game::InputEvent;
    ///
    /// assert_eq!(InputEvent::from_char('a'), InputEvent::Letter('a'));
    /// assert_eq!(InputEvent::from_char('@'), InputEvent::ToggleSettings);
    /// assert_eq!(InputEvent::from_char('7'), InputEvent::Other);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Self {
        match c {
            '@' => Self::ToggleSettings,
            c if c.is_ascii_alphabetic() => Self::Letter(c),
            _ => Self::Other,
        }
    }
}

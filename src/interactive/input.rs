//! Key decoding for the TUI
//!
//! The only place that looks at crossterm key codes.

use crate::game::InputEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Decode a crossterm key press into a game input event
#[must_use]
pub fn decode_key(key: KeyEvent) -> InputEvent {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputEvent::Quit,
        KeyCode::Char(c) => InputEvent::from_char(c),
        KeyCode::Backspace | KeyCode::Delete => InputEvent::Backspace,
        KeyCode::Enter => InputEvent::Commit,
        KeyCode::Esc => InputEvent::Quit,
        _ => InputEvent::Other,
    }
}

/// What a key means on the result screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndScreenKey {
    Restart,
    Exit,
    Nothing,
}

/// Decode a key press while a finished game is on screen
#[must_use]
pub fn decode_end_screen_key(key: KeyEvent) -> EndScreenKey {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => EndScreenKey::Exit,
        KeyCode::Char('r' | 'R') => EndScreenKey::Restart,
        KeyCode::Char('q') | KeyCode::Esc => EndScreenKey::Exit,
        _ => EndScreenKey::Nothing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn decodes_playing_keys() {
        assert_eq!(decode_key(key(KeyCode::Char('a'))), InputEvent::Letter('a'));
        assert_eq!(decode_key(key(KeyCode::Char('Q'))), InputEvent::Letter('Q'));
        assert_eq!(decode_key(key(KeyCode::Char('@'))), InputEvent::ToggleSettings);
        assert_eq!(decode_key(key(KeyCode::Char('1'))), InputEvent::Other);
        assert_eq!(decode_key(key(KeyCode::Backspace)), InputEvent::Backspace);
        assert_eq!(decode_key(key(KeyCode::Delete)), InputEvent::Backspace);
        assert_eq!(decode_key(key(KeyCode::Enter)), InputEvent::Commit);
        assert_eq!(decode_key(key(KeyCode::Esc)), InputEvent::Quit);
        assert_eq!(decode_key(key(KeyCode::Left)), InputEvent::Other);
    }

    #[test]
    fn ctrl_c_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(decode_key(ctrl_c), InputEvent::Quit);
        assert_eq!(decode_end_screen_key(ctrl_c), EndScreenKey::Exit);
    }

    #[test]
    fn decodes_end_screen_keys() {
        assert_eq!(decode_end_screen_key(key(KeyCode::Char('r'))), EndScreenKey::Restart);
        assert_eq!(decode_end_screen_key(key(KeyCode::Char('R'))), EndScreenKey::Restart);
        assert_eq!(decode_end_screen_key(key(KeyCode::Esc)), EndScreenKey::Exit);
        assert_eq!(decode_end_screen_key(key(KeyCode::Char('q'))), EndScreenKey::Exit);
        assert_eq!(decode_end_screen_key(key(KeyCode::Enter)), EndScreenKey::Nothing);
    }
}

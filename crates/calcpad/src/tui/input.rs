//! Keyboard input handling
//!
//! Maps crossterm key events onto calculator [`Key`]s so the keyboard drives
//! exactly the same transitions as the on-screen keypad.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::{Key, Operation};

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Send a key to the calculator
    Press(Key),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        // Windows reports releases too; only presses count
        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('q' | 'Q') => KeyAction::Quit,
            KeyCode::Char(c) => Self::map_char(c).map_or(KeyAction::None, KeyAction::Press),
            KeyCode::Enter => KeyAction::Press(Key::Equals),
            KeyCode::Backspace => KeyAction::Press(Key::Backspace),
            KeyCode::Esc | KeyCode::Delete => KeyAction::Press(Key::Clear),
            KeyCode::F(9) => KeyAction::Press(Key::ToggleSign),
            _ => KeyAction::None,
        }
    }

    /// Maps a typed character to a key
    #[must_use]
    pub fn map_char(c: char) -> Option<Key> {
        match c {
            '0'..='9' | '.' | '%' | '=' => Key::from_char(c),
            'c' | 'C' => Some(Key::Clear),
            'n' | 'N' | '~' => Some(Key::ToggleSign),
            _ => Operation::from_char(c).map(Key::Operator),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    fn press(code: KeyCode) -> KeyAction {
        InputHandler::new().handle_key(key_event(code))
    }

    #[test]
    fn test_handle_digit_keys() {
        for d in 0..=9u8 {
            let c = char::from(b'0' + d);
            assert_eq!(press(KeyCode::Char(c)), KeyAction::Press(Key::Digit(d)));
        }
    }

    #[test]
    fn test_handle_operator_keys() {
        for op in Operation::ALL {
            let c = op.symbol().chars().next().unwrap();
            assert_eq!(press(KeyCode::Char(c)), KeyAction::Press(Key::Operator(op)));
        }
    }

    #[test]
    fn test_handle_function_chars() {
        assert_eq!(
            press(KeyCode::Char('.')),
            KeyAction::Press(Key::DecimalPoint)
        );
        assert_eq!(press(KeyCode::Char('%')), KeyAction::Press(Key::Percent));
        assert_eq!(press(KeyCode::Char('=')), KeyAction::Press(Key::Equals));
        assert_eq!(press(KeyCode::Char('c')), KeyAction::Press(Key::Clear));
        assert_eq!(press(KeyCode::Char('C')), KeyAction::Press(Key::Clear));
        assert_eq!(press(KeyCode::Char('n')), KeyAction::Press(Key::ToggleSign));
        assert_eq!(press(KeyCode::Char('~')), KeyAction::Press(Key::ToggleSign));
    }

    #[test]
    fn test_handle_special_keys() {
        assert_eq!(press(KeyCode::Enter), KeyAction::Press(Key::Equals));
        assert_eq!(press(KeyCode::Backspace), KeyAction::Press(Key::Backspace));
        assert_eq!(press(KeyCode::Esc), KeyAction::Press(Key::Clear));
        assert_eq!(press(KeyCode::Delete), KeyAction::Press(Key::Clear));
        assert_eq!(press(KeyCode::F(9)), KeyAction::Press(Key::ToggleSign));
    }

    #[test]
    fn test_handle_quit() {
        let handler = InputHandler::new();
        assert_eq!(press(KeyCode::Char('q')), KeyAction::Quit);
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_ignored_input() {
        let handler = InputHandler::new();
        assert_eq!(press(KeyCode::Char('x')), KeyAction::None);
        assert_eq!(press(KeyCode::Char('^')), KeyAction::None);
        assert_eq!(press(KeyCode::Left), KeyAction::None);
        assert_eq!(press(KeyCode::Tab), KeyAction::None);
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('5'))),
            KeyAction::None
        );
    }

    #[test]
    fn test_release_events_ignored() {
        let handler = InputHandler::new();
        let mut event = key_event(KeyCode::Char('5'));
        event.kind = KeyEventKind::Release;
        assert_eq!(handler.handle_key(event), KeyAction::None);
    }

    #[test]
    fn test_map_char_rejects_unknown() {
        assert_eq!(InputHandler::map_char('a'), None);
        assert_eq!(InputHandler::map_char('('), None);
        assert_eq!(
            InputHandler::map_char('×'),
            Some(Key::Operator(Operation::Multiply))
        );
    }
}

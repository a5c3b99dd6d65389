//! TUI application state

use ratatui::layout::Rect;
use tracing::trace;

use super::input::KeyAction;
use super::keypad::Keypad;
use super::ui::keypad_area;
use crate::core::{Calculator, Key};

/// Calculator application state
#[derive(Debug, Default)]
pub struct CalculatorApp {
    calc: Calculator,
    keypad: Keypad,
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a new calculator app
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the engine state
    #[must_use]
    pub const fn calculator(&self) -> &Calculator {
        &self.calc
    }

    /// Returns the keypad, including its highlight state
    #[must_use]
    pub const fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns true if the app should quit
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Signals the app to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Sends `key` to the calculator and highlights its button
    pub fn press(&mut self, key: Key) {
        self.keypad.highlight(key);
        self.calc.press(key);
    }

    /// Applies a keyboard action
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Press(key) => self.press(key),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Handles a mouse click at (`x`, `y`) on a frame of size `frame`.
    ///
    /// Returns the key that was sent, or `None` when the click missed the
    /// keypad.
    pub fn click(&mut self, frame: Rect, x: u16, y: u16) -> Option<Key> {
        let area = keypad_area(frame);
        let idx = self.keypad.hit_test(area, x, y)?;
        let key = self.keypad.get_button(idx)?.key;
        trace!(x, y, %key, "keypad click");
        self.press(key);
        Some(key)
    }

    /// Clears the keypad highlight
    pub fn release_keys(&mut self) {
        self.keypad.release_all();
    }
}

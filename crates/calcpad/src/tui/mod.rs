//! Terminal front end: keypad, keyboard mapping and rendering

mod app;
mod input;
mod keypad;
mod runner;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use runner::{handle_event, run, run_in_terminal};
pub use ui::{keypad_area, render, HELP_SHORTCUTS};

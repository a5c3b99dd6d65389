//! calcpad - a desk calculator with 16-digit decimal arithmetic
//!
//! The crate is built around [`Calculator`](core::Calculator), a small
//! keystroke state machine: every button press or key is a [`Key`](core::Key)
//! and every key is a total transition that leaves a valid display behind.
//! Arithmetic is decimal (not binary floating point), so `0.1 + 0.2` is `0.3`.
//!
//! - [`core`] - engine, numeric policy, key vocabulary
//! - [`driver`] - one interface over the headless engine and the TUI
//! - `tui` - terminal keypad front end (feature `tui`, on by default)
//!
//! # Example
//!
//! ```rust
//! use calcpad::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for key in parse_key_sequence("2+3+4=").unwrap() {
//!     calc.press(key);
//! }
//! assert_eq!(calc.display(), "9");
//!
//! // Failures show up on the display, never as a panic or an Err
//! assert_eq!(calc.apply(Key::Operator(Operation::Divide)), "9");
//! calc.apply(Key::Digit(0));
//! assert_eq!(calc.apply(Key::Equals), ERROR_SENTINEL);
//! ```

#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]
#![warn(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::numeric::{format_decimal, parse_decimal};
    pub use crate::core::{
        compute, parse_key_sequence, step, CalcError, CalcResult, Calculator, Key, Operation,
        ERROR_SENTINEL,
    };
    pub use crate::driver::{CalculatorDriver, HeadlessDriver};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}

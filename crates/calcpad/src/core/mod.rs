//! Calculator core: engine state machine, decimal policy and key vocabulary
//!
//! Everything in here is headless. The TUI and the CLI only ever drive a
//! [`Calculator`] through [`Key`] events and read back its display text.

pub mod engine;
pub mod key;
pub mod numeric;
mod operations;

pub use engine::{step, Calculator, ERROR_SENTINEL};
pub use key::{parse_key_sequence, Key};
pub use operations::{compute, Operation};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// `ParseFailure` and `DivideByZero` never leave the engine's key operations;
/// they are turned into the error sentinel on the display. The key-script
/// variants are returned to whoever parses a script.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The display text is not a decimal numeral
    #[error("Invalid number: {0:?}")]
    ParseFailure(String),

    /// Right-hand operand of a division is exactly zero
    #[error("Division by zero")]
    DivideByZero,

    /// A key symbol that maps to no calculator key
    #[error("Unknown key: {0:?}")]
    UnknownKey(String),

    /// A key script with no keys in it
    #[error("Empty key script")]
    EmptyScript,
}

impl CalcError {
    /// Create a parse failure for the given text
    #[must_use]
    pub fn parse_failure(text: impl Into<String>) -> Self {
        Self::ParseFailure(text.into())
    }

    /// Create an unknown-key error for the given symbol
    #[must_use]
    pub fn unknown_key(symbol: impl Into<String>) -> Self {
        Self::UnknownKey(symbol.into())
    }
}

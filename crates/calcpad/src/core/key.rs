//! Input events: one [`Key`] per button or keyboard shortcut

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult, Operation};

/// A single calculator input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Digit 0-9. Larger values are inert: the engine ignores them and
    /// their label is `"?"`. Build checked digits with [`Key::digit`].
    Digit(u8),
    /// Decimal point
    DecimalPoint,
    /// Remove the last typed character
    Backspace,
    /// Reset the calculator
    Clear,
    /// Divide the displayed value by 100
    Percent,
    /// Flip the sign of the displayed value
    ToggleSign,
    /// Select a pending operation
    Operator(Operation),
    /// Resolve the pending operation
    Equals,
}

impl Key {
    /// Creates a digit key, or `None` if `d > 9`
    #[must_use]
    pub const fn digit(d: u8) -> Option<Self> {
        if d <= 9 {
            Some(Self::Digit(d))
        } else {
            None
        }
    }

    /// Caption shown on the keypad button
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Digit(d) => match d {
                0 => "0",
                1 => "1",
                2 => "2",
                3 => "3",
                4 => "4",
                5 => "5",
                6 => "6",
                7 => "7",
                8 => "8",
                9 => "9",
                _ => "?",
            },
            Self::DecimalPoint => ".",
            Self::Backspace => "⌫",
            Self::Clear => "C",
            Self::Percent => "%",
            Self::ToggleSign => "±",
            Self::Operator(op) => op.symbol(),
            Self::Equals => "=",
        }
    }

    /// Maps a single character to a key.
    ///
    /// Besides the button captions this accepts the keyboard aliases used by
    /// key scripts: `<` for backspace, `n`/`~` for ±, `c` for clear.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if let Some(d) = c.to_digit(10) {
            return Some(Self::Digit(d as u8));
        }
        if let Some(op) = Operation::from_char(c) {
            return Some(Self::Operator(op));
        }
        match c {
            '.' => Some(Self::DecimalPoint),
            '⌫' | '<' => Some(Self::Backspace),
            'C' | 'c' => Some(Self::Clear),
            '%' => Some(Self::Percent),
            '±' | 'n' | '~' => Some(Self::ToggleSign),
            '=' => Some(Self::Equals),
            _ => None,
        }
    }

    /// Maps a button caption or a named key to a key.
    pub fn from_symbol(symbol: &str) -> CalcResult<Self> {
        let mut chars = symbol.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::from_char(c).ok_or_else(|| CalcError::unknown_key(symbol));
        }
        match symbol.to_ascii_lowercase().as_str() {
            "enter" | "return" => Ok(Self::Equals),
            "backspace" | "bksp" => Ok(Self::Backspace),
            "esc" | "escape" | "clear" | "delete" => Ok(Self::Clear),
            "neg" | "negate" | "plusminus" => Ok(Self::ToggleSign),
            "percent" => Ok(Self::Percent),
            _ => Err(CalcError::unknown_key(symbol)),
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses a compact key script such as `"5+3="` or `"9{Backspace}<"`.
///
/// Every character is one key; whitespace is skipped and named keys are
/// written in braces.
pub fn parse_key_sequence(script: &str) -> CalcResult<Vec<Key>> {
    let mut keys = Vec::new();
    let mut chars = script.chars();

    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            continue;
        }
        if c == '{' {
            let mut name = String::new();
            loop {
                match chars.next() {
                    Some('}') => break,
                    Some(ch) => name.push(ch),
                    None => return Err(CalcError::unknown_key(format!("{{{name}"))),
                }
            }
            keys.push(Key::from_symbol(name.trim())?);
            continue;
        }
        let key = Key::from_char(c).ok_or_else(|| CalcError::unknown_key(c.to_string()))?;
        keys.push(key);
    }

    if keys.is_empty() {
        return Err(CalcError::EmptyScript);
    }
    Ok(keys)
}

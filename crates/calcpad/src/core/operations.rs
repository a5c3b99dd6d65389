//! Binary operations under the working-precision policy

use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};

use crate::core::numeric::{round_quotient, round_significant};
use crate::core::{CalcError, CalcResult};

/// The four operators a pending operation can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operation {
    /// All operations in keypad order, top to bottom
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Maps an operator character to its operation
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Applies `op` to `a` and `b`.
///
/// Add, subtract and multiply are rounded to 16 significant digits; the
/// quotient is rounded to 16 fractional digits. Both roundings are half-up.
pub fn compute(a: &BigDecimal, b: &BigDecimal, op: Operation) -> CalcResult<BigDecimal> {
    let result = match op {
        Operation::Add => round_significant(a + b),
        Operation::Subtract => round_significant(a - b),
        Operation::Multiply => round_significant(a * b),
        Operation::Divide => {
            if b.is_zero() {
                return Err(CalcError::DivideByZero);
            }
            round_quotient(a / b)
        }
    };
    Ok(result)
}

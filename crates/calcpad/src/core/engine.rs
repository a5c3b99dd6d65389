//! Calculator engine: the keystroke state machine
//!
//! The engine holds four fields: the display text, an optional pending left
//! operand, an optional pending operator, and the entry-mode flag that decides
//! whether the next digit starts a fresh number. Every key is a total
//! transition; arithmetic failures end in the `"Error"` display instead of
//! escaping to the caller.

use bigdecimal::BigDecimal;
use tracing::{debug, warn};

use crate::core::numeric::{format_decimal, parse_decimal, round_significant};
use crate::core::{compute, CalcError, CalcResult, Key, Operation};

/// Display text shown after a parse or divide-by-zero failure
pub const ERROR_SENTINEL: &str = "Error";

const INITIAL_DISPLAY: &str = "0";

/// Calculator state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculator {
    display: String,
    pending_operand: Option<BigDecimal>,
    pending_operator: Option<Operation>,
    start_new_number: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Pure transition: returns the state after `key`, leaving `state` untouched.
#[must_use]
pub fn step(state: &Calculator, key: Key) -> Calculator {
    state.clone().transition(key)
}

impl Calculator {
    /// Creates a calculator showing `0` with nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            pending_operand: None,
            pending_operator: None,
            start_new_number: true,
        }
    }

    // ===== Accessors =====

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Pending left operand, if an operator has been chosen
    #[must_use]
    pub fn pending_operand(&self) -> Option<&BigDecimal> {
        self.pending_operand.as_ref()
    }

    /// Pending operator
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operation> {
        self.pending_operator
    }

    /// True when the next digit starts a new number
    #[must_use]
    pub fn is_entry_mode(&self) -> bool {
        self.start_new_number
    }

    /// True when the display shows the error sentinel
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == ERROR_SENTINEL
    }

    /// Pending operation as text, e.g. `"12.5 *"`; empty when nothing is pending
    #[must_use]
    pub fn pending_summary(&self) -> String {
        match (&self.pending_operand, self.pending_operator) {
            (Some(left), Some(op)) => format!("{} {}", format_decimal(left), op),
            _ => String::new(),
        }
    }

    // ===== Dispatch =====

    /// Applies `key` and returns the new display text
    pub fn apply(&mut self, key: Key) -> &str {
        self.press(key);
        &self.display
    }

    /// Consumes the state and returns the state after `key`
    #[must_use]
    pub fn transition(mut self, key: Key) -> Self {
        self.press(key);
        self
    }

    /// Applies `key` in place
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(d) => self.input_digit(d),
            Key::DecimalPoint => self.input_decimal_point(),
            Key::Backspace => self.backspace(),
            Key::Clear => self.clear(),
            Key::Percent => self.apply_percent(),
            Key::ToggleSign => self.toggle_sign(),
            Key::Operator(op) => self.set_operator(op),
            Key::Equals => self.evaluate(),
        }
        debug!(
            key = %key,
            display = %self.display,
            pending = %self.pending_summary(),
            entry_mode = self.start_new_number,
            "key applied"
        );
    }

    // ===== Entry editing =====

    /// Types a digit. Values above 9 are ignored.
    pub fn input_digit(&mut self, d: u8) {
        let Some(c) = char::from_digit(u32::from(d), 10) else {
            return;
        };

        if self.start_new_number {
            self.display.clear();
            self.display.push(c);
            // A first "0" leaves the next digit free to overwrite it
            self.start_new_number = d == 0;
        } else if self.display == "0" || self.display == "-0" {
            // Overwrite the zero and keep the sign
            self.display.pop();
            self.display.push(c);
        } else {
            self.display.push(c);
        }
    }

    /// Types a decimal point; a second point in the same number is ignored.
    pub fn input_decimal_point(&mut self) {
        if self.start_new_number {
            self.display = "0.".to_string();
            self.start_new_number = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Removes the last typed character.
    ///
    /// With no number in progress the display resets to `0`, which also
    /// dismisses a result or the error sentinel. A leftover `-` or `-0` resets
    /// the same way, so zero is never shown signed.
    pub fn backspace(&mut self) {
        if self.start_new_number {
            self.display = INITIAL_DISPLAY.to_string();
            return;
        }

        self.display.pop();
        if matches!(self.display.as_str(), "" | "-" | "-0") {
            self.display = INITIAL_DISPLAY.to_string();
            self.start_new_number = true;
        }
    }

    /// Adds or removes a leading minus sign. No-op on `0` and on the sentinel.
    pub fn toggle_sign(&mut self) {
        if self.display == "0" || self.is_error() {
            return;
        }
        if let Some(rest) = self.display.strip_prefix('-') {
            self.display = rest.to_string();
        } else {
            self.display.insert(0, '-');
        }
    }

    /// Resets every field to its initial value
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    // ===== Arithmetic =====

    /// Replaces the display with the displayed value divided by 100
    pub fn apply_percent(&mut self) {
        let result = parse_decimal(&self.display)
            .map(|value| round_significant(value / BigDecimal::from(100)));
        match result {
            Ok(value) => {
                self.display = format_decimal(&value);
                self.start_new_number = true;
            }
            Err(err) => self.fail(&err),
        }
    }

    /// Selects `op` as the pending operation.
    ///
    /// When an operation is already pending and a new number has been typed
    /// since, the pending operation is resolved first so `2 + 3 + 4` runs
    /// left to right. Pressing operators back to back only swaps the operator.
    pub fn set_operator(&mut self, op: Operation) {
        match self.resolve_chain() {
            Ok(()) => {
                self.pending_operator = Some(op);
                self.start_new_number = true;
            }
            Err(err) => self.fail(&err),
        }
    }

    fn resolve_chain(&mut self) -> CalcResult<()> {
        let displayed = parse_decimal(&self.display)?;
        match (&self.pending_operand, self.pending_operator) {
            (None, _) => self.pending_operand = Some(displayed),
            (Some(left), Some(pending)) if !self.start_new_number => {
                let result = compute(left, &displayed, pending)?;
                self.display = format_decimal(&result);
                self.pending_operand = Some(result);
            }
            _ => {}
        }
        Ok(())
    }

    /// Resolves the pending operation (the `=` key). No-op when nothing is pending.
    pub fn evaluate(&mut self) {
        let (Some(left), Some(op)) = (&self.pending_operand, self.pending_operator) else {
            return;
        };

        let outcome = parse_decimal(&self.display).and_then(|right| compute(left, &right, op));
        self.pending_operand = None;
        self.pending_operator = None;
        match outcome {
            Ok(result) => {
                self.display = format_decimal(&result);
                self.start_new_number = true;
            }
            Err(err) => self.fail(&err),
        }
    }

    fn fail(&mut self, err: &CalcError) {
        warn!(error = %err, display = %self.display, "showing error sentinel");
        self.display = ERROR_SENTINEL.to_string();
        self.pending_operand = None;
        self.pending_operator = None;
        self.start_new_number = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_key_sequence;

    fn run(script: &str) -> Calculator {
        let mut calc = Calculator::new();
        for key in parse_key_sequence(script).unwrap() {
            calc.press(key);
        }
        calc
    }

    fn show(script: &str) -> String {
        run(script).display().to_string()
    }

    // ===== Initial state =====

    #[test]
    fn test_new_state() {
        let calc = Calculator::new();
        assert_eq!(calc.display(), "0");
        assert!(calc.pending_operand().is_none());
        assert!(calc.pending_operator().is_none());
        assert!(calc.is_entry_mode());
        assert!(!calc.is_error());
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(Calculator::default(), Calculator::new());
    }

    // ===== Digits =====

    #[test]
    fn test_digits_accumulate() {
        assert_eq!(show("1234567890"), "1234567890");
    }

    #[test]
    fn test_leading_zero_collapses() {
        assert_eq!(show("007"), "7");
        assert_eq!(show("00"), "0");
    }

    #[test]
    fn test_first_zero_keeps_entry_mode() {
        let calc = run("0");
        assert_eq!(calc.display(), "0");
        assert!(calc.is_entry_mode());
        assert!(!run("5").is_entry_mode());
    }

    #[test]
    fn test_digit_out_of_range_ignored() {
        let mut calc = Calculator::new();
        calc.input_digit(12);
        assert_eq!(calc, Calculator::new());
    }

    #[test]
    fn test_no_length_limit() {
        let script = "9".repeat(40);
        assert_eq!(show(&script), script);
    }

    // ===== Decimal point =====

    #[test]
    fn test_decimal_point_fresh_entry() {
        let calc = run(".");
        assert_eq!(calc.display(), "0.");
        assert!(!calc.is_entry_mode());
    }

    #[test]
    fn test_decimal_point_idempotent() {
        assert_eq!(show("1.."), show("1."));
        assert_eq!(show("1.5.2"), "1.52");
    }

    #[test]
    fn test_zero_then_point() {
        assert_eq!(show("0.5"), "0.5");
    }

    // ===== Backspace =====

    #[test]
    fn test_backspace_removes_last_char() {
        let calc = run("123<");
        assert_eq!(calc.display(), "12");
        assert!(!calc.is_entry_mode());
    }

    #[test]
    fn test_backspace_to_empty_resets() {
        let calc = run("9<");
        assert_eq!(calc.display(), "0");
        assert!(calc.is_entry_mode());
        let again = step(&calc, Key::Backspace);
        assert_eq!(again, calc);
    }

    #[test]
    fn test_backspace_leaves_no_bare_minus() {
        let calc = run("5n<");
        assert_eq!(calc.display(), "0");
        assert!(calc.is_entry_mode());
    }

    #[test]
    fn test_backspace_leaves_no_signed_zero() {
        let calc = run("0.n<");
        assert_eq!(calc.display(), "0");
        assert!(calc.is_entry_mode());

        let twice = step(&step(&calc, Key::ToggleSign), Key::ToggleSign);
        assert_eq!(twice, calc);
        assert_eq!(show("0.n<5"), "5");
    }

    #[test]
    fn test_signed_fraction_backspace_keeps_sign() {
        assert_eq!(show("0.5n<"), "-0.");
        assert_eq!(show("0.5n<<"), "0");
    }

    #[test]
    fn test_digit_replaces_signed_zero() {
        let mut calc = run("1n");
        calc.display = "-0".to_string();
        calc.input_digit(5);
        assert_eq!(calc.display(), "-5");
    }

    #[test]
    fn test_backspace_after_result_resets_display() {
        let calc = run("5+3=<");
        assert_eq!(calc.display(), "0");
        assert!(calc.is_entry_mode());
    }

    #[test]
    fn test_backspace_dismisses_error() {
        let calc = run("7/0=<");
        assert_eq!(calc.display(), "0");
        assert!(!calc.is_error());
    }

    // ===== Sign =====

    #[test]
    fn test_toggle_sign() {
        assert_eq!(show("5n"), "-5");
        assert_eq!(show("5nn"), "5");
    }

    #[test]
    fn test_toggle_sign_on_zero_is_noop() {
        assert_eq!(show("n"), "0");
    }

    #[test]
    fn test_toggle_sign_keeps_entry_mode() {
        let calc = run("5n");
        assert!(!calc.is_entry_mode());
        assert_eq!(show("5n2"), "-52");
    }

    #[test]
    fn test_toggle_sign_on_error_is_noop() {
        assert_eq!(show("1/0=n"), ERROR_SENTINEL);
    }

    // ===== Clear =====

    #[test]
    fn test_clear_resets_everything() {
        assert_eq!(run("12+34c"), Calculator::new());
    }

    // ===== Percent =====

    #[test]
    fn test_percent() {
        let calc = run("50%");
        assert_eq!(calc.display(), "0.5");
        assert!(calc.is_entry_mode());
    }

    #[test]
    fn test_percent_of_fraction() {
        assert_eq!(show("12.5%"), "0.125");
    }

    #[test]
    fn test_percent_then_digit_starts_new_number() {
        assert_eq!(show("50%7"), "7");
    }

    #[test]
    fn test_percent_on_error_clears_pending() {
        let calc = run("1/0=%");
        assert!(calc.is_error());
        assert!(calc.pending_operator().is_none());
    }

    #[test]
    fn test_percent_failure_clears_pending_pair() {
        let mut calc = run("5+");
        calc.display = "bogus".to_string();
        calc.apply_percent();
        assert!(calc.is_error());
        assert!(calc.pending_operand().is_none());
        assert!(calc.pending_operator().is_none());
        assert!(calc.is_entry_mode());
    }

    // ===== Operators =====

    #[test]
    fn test_set_operator_stores_operand() {
        let calc = run("5+");
        assert_eq!(calc.pending_operand(), Some(&BigDecimal::from(5)));
        assert_eq!(calc.pending_operator(), Some(Operation::Add));
        assert!(calc.is_entry_mode());
        assert_eq!(calc.pending_summary(), "5 +");
    }

    #[test]
    fn test_operator_pressed_twice_replaces() {
        let calc = run("5+*");
        assert_eq!(calc.pending_operator(), Some(Operation::Multiply));
        assert_eq!(calc.pending_operand(), Some(&BigDecimal::from(5)));
        assert_eq!(show("5+*3="), "15");
    }

    #[test]
    fn test_chained_operator_shows_intermediate() {
        let calc = run("2+3+");
        assert_eq!(calc.display(), "5");
        assert_eq!(calc.pending_summary(), "5 +");
    }

    #[test]
    fn test_operator_after_result_continues() {
        assert_eq!(show("2+3=*4="), "20");
    }

    #[test]
    fn test_operator_on_error_stays_error() {
        let calc = run("7/0=+");
        assert!(calc.is_error());
        assert!(calc.pending_operand().is_none());
        assert!(calc.pending_operator().is_none());
    }

    #[test]
    fn test_chained_divide_by_zero() {
        let calc = run("8/0.0+");
        assert!(calc.is_error());
        assert!(calc.pending_operand().is_none());
        assert!(calc.pending_operator().is_none());
        assert!(calc.is_entry_mode());
    }

    #[test]
    fn test_lone_zero_operand_does_not_resolve_chain() {
        // "0" keeps entry mode, so the next operator only swaps the pending one
        let calc = run("5*0+");
        assert_eq!(calc.pending_operand(), Some(&BigDecimal::from(5)));
        assert_eq!(calc.pending_operator(), Some(Operation::Add));
        assert_eq!(calc.display(), "0");
    }

    // ===== Evaluate =====

    #[test]
    fn test_evaluate_without_pending_is_noop() {
        let calc = run("42=");
        assert_eq!(calc.display(), "42");
        assert!(!calc.is_entry_mode());
    }

    #[test]
    fn test_evaluate_clears_pending() {
        let calc = run("6*7=");
        assert_eq!(calc.display(), "42");
        assert!(calc.pending_operand().is_none());
        assert!(calc.pending_operator().is_none());
        assert!(calc.is_entry_mode());
    }

    #[test]
    fn test_evaluate_uses_displayed_operand_when_nothing_typed() {
        // The left operand doubles as the right one
        assert_eq!(show("4*="), "16");
    }

    #[test]
    fn test_repeated_equals_is_noop() {
        assert_eq!(show("5+3=="), "8");
    }

    #[test]
    fn test_decimal_arithmetic_is_exact() {
        assert_eq!(show("0.1+0.2="), "0.3");
    }

    #[test]
    fn test_negative_operand() {
        assert_eq!(show("5n-3="), "-8");
    }

    #[test]
    fn test_trailing_point_operand() {
        assert_eq!(show("5.+1="), "6");
    }

    #[test]
    fn test_two_thirds_rounds_half_up() {
        assert_eq!(show("2/3="), "0.6666666666666667");
    }

    // ===== Scenarios =====

    #[test]
    fn test_scenario_addition() {
        assert_eq!(show("5+3="), "8");
    }

    #[test]
    fn test_scenario_one_third() {
        assert_eq!(show("1/3="), "0.3333333333333333");
    }

    #[test]
    fn test_scenario_divide_by_zero_then_clear() {
        let calc = run("7/0=");
        assert_eq!(calc.display(), ERROR_SENTINEL);
        let cleared = step(&calc, Key::Clear);
        assert_eq!(cleared.display(), "0");
        assert!(cleared.pending_operand().is_none());
        assert!(cleared.pending_operator().is_none());
    }

    #[test]
    fn test_scenario_chain() {
        assert_eq!(show("2+3+4="), "9");
    }

    #[test]
    fn test_scenario_percent() {
        assert_eq!(show("50%"), "0.5");
    }

    #[test]
    fn test_scenario_backspace() {
        let first = run("9<");
        assert_eq!(first.display(), "0");
        assert!(first.is_entry_mode());
        let second = step(&first, Key::Backspace);
        assert_eq!(second.display(), "0");
    }

    // ===== Error recovery =====

    #[test]
    fn test_digit_overwrites_error() {
        assert_eq!(show("7/0=5"), "5");
    }

    #[test]
    fn test_point_overwrites_error() {
        assert_eq!(show("7/0=."), "0.");
    }

    // ===== Purity =====

    #[test]
    fn test_step_does_not_mutate_input() {
        let before = run("12+");
        let snapshot = before.clone();
        let after = step(&before, Key::Digit(3));
        assert_eq!(before, snapshot);
        assert_eq!(after.display(), "3");
    }

    #[test]
    fn test_apply_returns_display() {
        let mut calc = Calculator::new();
        assert_eq!(calc.apply(Key::Digit(4)), "4");
        assert_eq!(calc.apply(Key::Operator(Operation::Multiply)), "4");
        assert_eq!(calc.apply(Key::Digit(2)), "2");
        assert_eq!(calc.apply(Key::Equals), "8");
    }

    #[test]
    fn test_independent_instances() {
        let mut a = Calculator::new();
        let mut b = Calculator::new();
        a.apply(Key::Digit(1));
        b.apply(Key::Digit(2));
        assert_eq!(a.display(), "1");
        assert_eq!(b.display(), "2");
    }
}

//! Unified calculator driver
//!
//! **Write the key scenario once, run it against every front end.** The
//! headless engine and the TUI app both implement [`CalculatorDriver`], and
//! the `verify_*` functions below drive either one.

use crate::core::{parse_key_sequence, CalcResult, Calculator, Key, ERROR_SENTINEL};

/// Abstract driver for calculator interactions
///
/// # Example
///
/// ```rust
/// use calcpad::driver::{verify_chained_evaluation, CalculatorDriver, HeadlessDriver};
///
/// let mut driver = HeadlessDriver::new();
/// verify_chained_evaluation(&mut driver);
/// assert_eq!(driver.run_script("12*3=").unwrap(), "36");
/// ```
pub trait CalculatorDriver {
    /// Presses one key
    fn press(&mut self, key: Key);

    /// Current display text
    fn display(&self) -> String;

    /// Pending operation text (`"5 +"`), empty when nothing is pending
    fn pending(&self) -> String;

    /// Returns the calculator to its initial state
    fn reset(&mut self);

    /// Presses every key in order and returns the final display
    fn press_all(&mut self, keys: &[Key]) -> String {
        for &key in keys {
            self.press(key);
        }
        self.display()
    }

    /// Parses and runs a key script, returning the final display
    fn run_script(&mut self, script: &str) -> CalcResult<String> {
        let keys = parse_key_sequence(script)?;
        Ok(self.press_all(&keys))
    }
}

/// Driver over a bare [`Calculator`]
#[derive(Debug, Default, Clone)]
pub struct HeadlessDriver {
    calc: Calculator,
}

impl HeadlessDriver {
    /// Creates a driver around a fresh calculator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calc
    }
}

impl CalculatorDriver for HeadlessDriver {
    fn press(&mut self, key: Key) {
        self.calc.press(key);
    }

    fn display(&self) -> String {
        self.calc.display().to_string()
    }

    fn pending(&self) -> String {
        self.calc.pending_summary()
    }

    fn reset(&mut self) {
        self.calc.clear();
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::CalculatorDriver;
    use crate::core::Key;
    use crate::tui::CalculatorApp;

    /// Driver over the TUI app, so keypad highlighting runs too
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, key: Key) {
            self.app.press(key);
        }

        fn display(&self) -> String {
            self.app.calculator().display().to_string()
        }

        fn pending(&self) -> String {
            self.app.calculator().pending_summary()
        }

        fn reset(&mut self) {
            self.app.press(Key::Clear);
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified verification scenarios =====
// These run against ANY CalculatorDriver implementation

#[allow(clippy::panic)]
fn expect<D: CalculatorDriver>(driver: &mut D, script: &str, want: &str) {
    driver.reset();
    let got = driver
        .run_script(script)
        .unwrap_or_else(|e| panic!("script {script:?} rejected: {e}"));
    assert_eq!(got, want, "script {script:?}");
}

/// Verifies the four operations
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    expect(driver, "5+3=", "8");
    expect(driver, "10-4=", "6");
    expect(driver, "6*7=", "42");
    expect(driver, "20/4=", "5");
    expect(driver, "0.1+0.2=", "0.3");
    expect(driver, "1/3=", "0.3333333333333333");
}

/// Verifies left-to-right evaluation as each operator is pressed
pub fn verify_chained_evaluation<D: CalculatorDriver>(driver: &mut D) {
    expect(driver, "2+3+", "5");
    assert_eq!(driver.pending(), "5 +");
    expect(driver, "2+3+4=", "9");
    expect(driver, "2+3*4=", "20");
    expect(driver, "9-*2=", "18");
}

/// Verifies the sentinel on division by zero and recovery via clear
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    expect(driver, "7/0=", ERROR_SENTINEL);
    driver.press(Key::Clear);
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.pending(), "");

    expect(driver, "7/0=4", "4");
}

/// Verifies percent
pub fn verify_percent<D: CalculatorDriver>(driver: &mut D) {
    expect(driver, "50%", "0.5");
    expect(driver, "5%%", "0.0005");
    expect(driver, "200+10%=", "200.1");
}

/// Verifies backspace, including the reset to `0`
pub fn verify_backspace<D: CalculatorDriver>(driver: &mut D) {
    expect(driver, "123<", "12");
    expect(driver, "9<", "0");
    expect(driver, "9<<", "0");
    expect(driver, "1.5<<", "1");
    expect(driver, "-<", "0");
}

/// Verifies sign toggling
pub fn verify_sign_toggle<D: CalculatorDriver>(driver: &mut D) {
    expect(driver, "n", "0");
    expect(driver, "42n", "-42");
    expect(driver, "42nn", "42");
    expect(driver, "3n*3=", "-9");
}

//! Unified Calculator Driver - The Probar Way
//!
//! **Write the test logic once, run it everywhere.** Every front end that can
//! press keys and read back the display implements [`CalculatorDriver`]; the
//! `verify_*` functions below then check the same behaviour against each one.
//!
//! Probar: Balanced testing - Balanced testing across front ends

use crate::core::{CalcError, CalcResult, CalculatorEngine, Operation};
use crate::keypad::{parse_keys, KeyAction};
use crate::viewmodel::CalculatorViewModel;

/// Abstract driver trait for calculator interactions
///
/// # Example
///
/// ```rust
/// use calcpad::driver::{run_full_specification, CalculatorDriver, EngineDriver};
/// use calcpad::viewmodel::CalculatorViewModel;
///
/// run_full_specification(&mut EngineDriver::new());
/// run_full_specification(&mut CalculatorViewModel::new());
/// ```
pub trait CalculatorDriver {
    /// Presses a single key
    fn press(&mut self, action: KeyAction) -> CalcResult<()>;

    /// Gets the main display text
    fn display(&self) -> String;

    /// Gets the expression trace
    fn expression(&self) -> String;

    /// Gets the error message currently shown, if the driver surfaces one
    fn error_message(&self) -> Option<String>;

    /// Returns the calculator to the all-clear state
    fn reset(&mut self);

    /// Presses keys in order, returning the last error seen
    fn press_all(&mut self, actions: &[KeyAction]) -> CalcResult<()> {
        let mut outcome = Ok(());
        for &action in actions {
            if let Err(err) = self.press(action) {
                outcome = Err(err);
            }
        }
        outcome
    }

    /// Presses the keys of a script such as `"3+4="`
    ///
    /// # Panics
    ///
    /// Panics if the script contains a character with no key.
    fn press_script(&mut self, script: &str) -> CalcResult<()> {
        let actions = parse_keys(script)
            .unwrap_or_else(|c| panic!("no key for {c:?} in script {script:?}"));
        self.press_all(&actions)
    }
}

/// Driver over a bare engine, with no view model in between
#[derive(Debug, Default)]
pub struct EngineDriver {
    engine: CalculatorEngine,
}

impl EngineDriver {
    /// Creates a driver around a fresh engine
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }
}

impl CalculatorDriver for EngineDriver {
    fn press(&mut self, action: KeyAction) -> CalcResult<()> {
        match action {
            KeyAction::Digit(d) => self.engine.append_digit(d),
            KeyAction::Decimal => self.engine.input_decimal(),
            KeyAction::Operator(op) => return self.engine.set_operation(op),
            KeyAction::Equals => return self.engine.calculate(),
            KeyAction::ClearEntry => self.engine.clear_entry(),
            KeyAction::AllClear => self.engine.clear(),
        }
        Ok(())
    }

    fn display(&self) -> String {
        self.engine.display_value()
    }

    fn expression(&self) -> String {
        self.engine.expression().to_string()
    }

    fn error_message(&self) -> Option<String> {
        None
    }

    fn reset(&mut self) {
        self.engine.clear();
    }
}

impl CalculatorDriver for CalculatorViewModel {
    fn press(&mut self, action: KeyAction) -> CalcResult<()> {
        self.dispatch(action)
    }

    fn display(&self) -> String {
        self.state().display_value.clone()
    }

    fn expression(&self) -> String {
        self.state().expression.clone()
    }

    fn error_message(&self) -> Option<String> {
        self.state().error_message.clone()
    }

    fn reset(&mut self) {
        self.on_all_clear_click();
    }
}

// ===== Unified Test Specifications =====
// These checks work with ANY CalculatorDriver implementation

/// Verifies digits concatenate into an integer
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(driver.press_script("1234567890"), Ok(()));
    assert_eq!(driver.display(), "1234567890");
    assert_eq!(driver.expression(), "");
    driver.reset();
}

/// Verifies whole results carry no trailing `.0`
pub fn verify_whole_number_format<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(driver.press_script("4/2="), Ok(()));
    assert_eq!(driver.display(), "2");
    assert_eq!(driver.expression(), "4 ÷ 2");
    driver.reset();
}

/// Verifies a second operator evaluates the pending one first
pub fn verify_chained_operations<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(driver.press_script("3+4+"), Ok(()));
    assert_eq!(driver.display(), "7");
    assert_eq!(driver.expression(), "7 + ");
    assert_eq!(driver.press_script("5="), Ok(()));
    assert_eq!(driver.display(), "12");
    driver.reset();
}

/// Verifies divide-by-zero fails and leaves the all-clear state behind
pub fn verify_divide_by_zero_reset<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(driver.press_script("5/0"), Ok(()));
    let result = driver.press(KeyAction::Equals);
    assert_eq!(result, Err(CalcError::DivideByZero));
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.expression(), "");
    driver.reset();
}

/// Verifies clear entry keeps the pending operation
pub fn verify_clear_entry_keeps_operation<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    let keys = [
        KeyAction::Digit(9),
        KeyAction::Operator(Operation::Subtract),
        KeyAction::Digit(3),
        KeyAction::ClearEntry,
        KeyAction::Digit(4),
        KeyAction::Equals,
    ];
    assert_eq!(driver.press_all(&keys), Ok(()));
    assert_eq!(driver.display(), "5");
    driver.reset();
}

/// Verifies decimal entry
pub fn verify_decimal_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(driver.press_script("1.5"), Ok(()));
    assert_eq!(driver.display(), "1.5");
    driver.reset();
}

/// Complete verification suite - runs all checks
pub fn run_full_specification<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_whole_number_format(driver);
    verify_chained_operations(driver);
    verify_divide_by_zero_reset(driver);
    verify_clear_entry_keeps_operation(driver);
    verify_decimal_entry(driver);
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== EngineDriver =====

    #[test]
    fn test_engine_driver_full_specification() {
        run_full_specification(&mut EngineDriver::new());
    }

    #[test]
    fn test_engine_driver_has_no_error_message() {
        let mut driver = EngineDriver::new();
        let _ = driver.press_script("1/0=");
        assert!(driver.error_message().is_none());
    }

    #[test]
    fn test_engine_driver_engine_access() {
        let mut driver = EngineDriver::new();
        driver.press(KeyAction::Digit(6)).unwrap();
        assert_eq!(driver.engine().display_value(), "6");
    }

    // ===== View model driver =====

    #[test]
    fn test_view_model_full_specification() {
        run_full_specification(&mut CalculatorViewModel::new());
    }

    #[test]
    fn test_view_model_driver_surfaces_error() {
        let mut driver = CalculatorViewModel::new();
        assert_eq!(
            driver.press_script("8/0="),
            Err(CalcError::DivideByZero)
        );
        assert_eq!(
            driver.error_message().as_deref(),
            Some("Cannot divide by zero")
        );
        driver.reset();
        assert!(driver.error_message().is_none());
    }

    // ===== press_all =====

    #[test]
    fn test_press_all_keeps_going_after_error() {
        let mut driver = EngineDriver::new();
        let result = driver.press_script("1/0=7");
        assert_eq!(result, Err(CalcError::DivideByZero));
        assert_eq!(driver.display(), "7");
    }

    #[test]
    #[should_panic(expected = "no key for")]
    fn test_press_script_panics_on_unknown_key() {
        let mut driver = EngineDriver::new();
        let _ = driver.press_script("1+(2)");
    }
}

//! Calculation engine state machine
//!
//! Probar: Error prevention - State machine prevents invalid transitions
//!
//! The engine holds one pending operation at a time and evaluates eagerly:
//! selecting a second operator after entering a right-hand operand computes
//! the first one before the new operator is captured.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{format_number, CalcResult, Operation};

/// Complete numeric state of one calculator session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Value being entered, or the last computed result
    pub current_value: f64,
    /// Left-hand operand captured when an operation was selected
    pub operand: f64,
    /// Operation awaiting its right-hand operand
    pub pending_operation: Option<Operation>,
    /// Next digit starts a fresh number instead of extending the current one
    pub is_new_number: bool,
    /// A decimal point has been entered for the in-progress number
    pub has_decimal: bool,
    /// Human-readable trace of the current or just-completed calculation
    pub expression: String,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            current_value: 0.0,
            operand: 0.0,
            pending_operation: None,
            is_new_number: true,
            has_decimal: false,
            expression: String::new(),
        }
    }
}

impl fmt::Display for CalculatorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = self
            .pending_operation
            .map_or_else(|| "none".to_string(), |op| format!("{op:?}"));
        write!(
            f,
            "Current: {}, Operand: {}, Op: {}, New: {}",
            self.current_value, self.operand, op, self.is_new_number
        )
    }
}

/// Four-function calculator engine
///
/// # Example
///
/// ```rust
/// use calcpad::core::{CalculatorEngine, Operation};
///
/// let mut engine = CalculatorEngine::new();
/// engine.append_digit(4);
/// engine.set_operation(Operation::Divide).unwrap();
/// engine.append_digit(2);
/// engine.calculate().unwrap();
///
/// assert_eq!(engine.display_value(), "2");
/// assert_eq!(engine.expression(), "4 ÷ 2");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CalculatorEngine {
    state: CalculatorState,
    /// Fractional digits typed since the decimal point
    fraction: String,
}

impl CalculatorEngine {
    /// Creates an engine in the all-clear state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a read-only view of the engine state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the formatted current value
    #[must_use]
    pub fn display_value(&self) -> String {
        format_number(self.state.current_value)
    }

    /// Returns the expression trace
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.state.expression
    }

    /// Enters one digit (0-9)
    pub fn append_digit(&mut self, digit: u8) {
        debug_assert!(digit <= 9, "digit out of range: {digit}");
        let digit_value = f64::from(digit);

        if self.state.is_new_number {
            self.state.current_value = digit_value;
            self.state.is_new_number = false;
            self.fraction.clear();
        } else if self.state.has_decimal {
            self.fraction.push(char::from(b'0' + digit));
            let text = format!(
                "{}.{}",
                format_number(self.state.current_value.trunc()),
                self.fraction
            );
            if let Ok(value) = text.parse::<f64>() {
                self.state.current_value = value;
            }
        } else {
            self.state.current_value = self.state.current_value * 10.0 + digit_value;
        }

        debug!(digit, value = self.state.current_value, "digit entered");
    }

    /// Enters a decimal point
    ///
    /// On a fresh number this starts `0.`; the digits that follow are
    /// appended as fractional digits.
    pub fn input_decimal(&mut self) {
        if self.state.is_new_number {
            self.state.current_value = 0.0;
            self.state.is_new_number = false;
            self.fraction.clear();
        }
        self.state.has_decimal = true;
        debug!(value = self.state.current_value, "decimal point entered");
    }

    /// Selects the operation to apply to the next operand
    ///
    /// A pending operation with a freshly entered right-hand operand is
    /// evaluated first, so `3 + 4 +` leaves `7 + ` in the trace. If that
    /// evaluation divides by zero the engine resets and `op` is not selected.
    pub fn set_operation(&mut self, op: Operation) -> CalcResult<()> {
        if self.state.pending_operation.is_some() && !self.state.is_new_number {
            self.calculate()?;
        }

        self.state.operand = self.state.current_value;
        self.state.pending_operation = Some(op);
        self.state.expression = format!("{} {} ", format_number(self.state.operand), op.symbol());
        self.start_new_number();

        debug!(?op, operand = self.state.operand, "operation selected");
        Ok(())
    }

    /// Evaluates the pending operation, if any
    ///
    /// Division by zero resets the engine to the all-clear state before the
    /// error is returned.
    pub fn calculate(&mut self) -> CalcResult<()> {
        let Some(op) = self.state.pending_operation else {
            return Ok(());
        };

        self.state
            .expression
            .push_str(&format_number(self.state.current_value));

        match op.apply(self.state.operand, self.state.current_value) {
            Ok(result) => {
                debug!(expression = %self.state.expression, result, "calculated");
                self.state.current_value = result;
                self.state.pending_operation = None;
                self.start_new_number();
                Ok(())
            }
            Err(err) => {
                warn!(expression = %self.state.expression, %err, "calculation failed, resetting");
                self.clear();
                Err(err)
            }
        }
    }

    /// Clears the in-progress number, keeping any pending operation
    pub fn clear_entry(&mut self) {
        self.state.current_value = 0.0;
        self.start_new_number();
        debug!("entry cleared");
    }

    /// Resets every field to the all-clear state
    pub fn clear(&mut self) {
        self.state = CalculatorState::default();
        self.fraction.clear();
        debug!("all cleared");
    }

    fn start_new_number(&mut self) {
        self.state.is_new_number = true;
        self.state.has_decimal = false;
        self.fraction.clear();
    }
}

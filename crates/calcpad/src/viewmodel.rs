//! Observable state holder between a view and the engine
//!
//! Probar: Visual feedback - every event republishes what the view must show
//!
//! The view model forwards one user event at a time into its
//! [`CalculatorEngine`], then publishes a fresh [`UiState`] to every
//! subscriber. A divide-by-zero becomes a transient error message; the next
//! event clears it.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{CalcResult, CalculatorEngine, Operation};
use crate::keypad::KeyAction;

/// What the view renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    /// Main display text
    pub display_value: String,
    /// Expression trace above the display
    pub expression: String,
    /// Transient error message, if the last event failed
    pub error_message: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            display_value: "0".to_string(),
            expression: String::new(),
            error_message: None,
        }
    }
}

type Subscriber = Box<dyn FnMut(&UiState)>;

/// State holder owning one calculator session
pub struct CalculatorViewModel {
    engine: CalculatorEngine,
    state: UiState,
    subscribers: Vec<Subscriber>,
}

impl fmt::Debug for CalculatorViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalculatorViewModel")
            .field("engine", &self.engine)
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Default for CalculatorViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorViewModel {
    /// Creates a view model around a fresh engine
    #[must_use]
    pub fn new() -> Self {
        Self::with_engine(CalculatorEngine::new())
    }

    /// Creates a view model around an existing engine
    #[must_use]
    pub fn with_engine(engine: CalculatorEngine) -> Self {
        let state = UiState {
            display_value: engine.display_value(),
            expression: engine.expression().to_string(),
            error_message: None,
        };
        Self {
            engine,
            state,
            subscribers: Vec::new(),
        }
    }

    /// Returns the last published state
    #[must_use]
    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Returns the underlying engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Registers a callback invoked with every published state
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: FnMut(&UiState) + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Handles a digit button
    pub fn on_number_click(&mut self, digit: u8) {
        self.engine.append_digit(digit);
        self.publish(None);
    }

    /// Handles the decimal point button
    pub fn on_decimal_click(&mut self) {
        self.engine.input_decimal();
        self.publish(None);
    }

    /// Handles an operator button
    pub fn on_operation_click(&mut self, op: Operation) -> CalcResult<()> {
        let result = self.engine.set_operation(op);
        self.publish_result(result)
    }

    /// Handles the equals button
    pub fn on_equals_click(&mut self) -> CalcResult<()> {
        let result = self.engine.calculate();
        self.publish_result(result)
    }

    /// Handles the clear entry button (C)
    pub fn on_clear_entry_click(&mut self) {
        self.engine.clear_entry();
        self.publish(None);
    }

    /// Handles the all clear button (AC)
    pub fn on_all_clear_click(&mut self) {
        self.engine.clear();
        self.publish(None);
    }

    /// Routes a keypad action to its handler
    pub fn dispatch(&mut self, action: KeyAction) -> CalcResult<()> {
        debug!(?action, "dispatch");
        match action {
            KeyAction::Digit(d) => self.on_number_click(d),
            KeyAction::Decimal => self.on_decimal_click(),
            KeyAction::Operator(op) => return self.on_operation_click(op),
            KeyAction::Equals => return self.on_equals_click(),
            KeyAction::ClearEntry => self.on_clear_entry_click(),
            KeyAction::AllClear => self.on_all_clear_click(),
        }
        Ok(())
    }

    fn publish_result(&mut self, result: CalcResult<()>) -> CalcResult<()> {
        match result {
            Ok(()) => {
                self.publish(None);
                Ok(())
            }
            Err(err) => {
                warn!(%err, "showing error");
                self.publish(Some(err.to_string()));
                Err(err)
            }
        }
    }

    fn publish(&mut self, error_message: Option<String>) {
        self.state = UiState {
            display_value: self.engine.display_value(),
            expression: self.engine.expression().to_string(),
            error_message,
        };
        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }
    }
}

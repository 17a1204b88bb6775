//! calcpad - Four-Function Calculator Engine
//!
//! A small state machine that accumulates digit input, holds one pending
//! binary operation at a time and renders a running expression trace next
//! to the current value.
//!
//! # Probar Testing Principles
//!
//! - **Error prevention**: Type-safe operations prevent invalid states at compile time
//! - **Visual feedback**: Every event republishes display and expression text
//! - **Balanced testing**: One driver specification runs against engine and view model
//!
//! # Example
//!
//! ```rust
//! use calcpad::prelude::*;
//!
//! let mut engine = CalculatorEngine::new();
//! engine.append_digit(3);
//! engine.set_operation(Operation::Add).unwrap();
//! engine.append_digit(4);
//! engine.set_operation(Operation::Add).unwrap();
//! engine.append_digit(5);
//! engine.calculate().unwrap();
//! assert_eq!(engine.display_value(), "12");
//!
//! // Division by zero resets the engine and reports the failure
//! engine.set_operation(Operation::Divide).unwrap();
//! engine.append_digit(0);
//! assert_eq!(engine.calculate(), Err(CalcError::DivideByZero));
//! assert_eq!(engine.display_value(), "0");
//! assert_eq!(engine.expression(), "");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod keypad;
pub mod viewmodel;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        format_number, CalcError, CalcResult, CalculatorEngine, CalculatorState, Operation,
    };
    pub use crate::driver::{CalculatorDriver, EngineDriver};
    pub use crate::keypad::{parse_keys, KeyAction, Keypad, KeypadButton};
    pub use crate::viewmodel::{CalculatorViewModel, UiState};
}

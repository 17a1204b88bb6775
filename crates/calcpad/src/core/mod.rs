//! Core calculation engine
//!
//! Probar: Error prevention - the engine is the only place numeric state changes

mod engine;
mod format;
mod operations;

pub use engine::{CalculatorEngine, CalculatorState};
pub use format::format_number;
pub use operations::Operation;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// The engine pre-constrains every input, so the only failure is a zero divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Cannot divide by zero")]
    DivideByZero,
}

//! Number formatting shared by the display and the expression trace

/// Formats a value for display
///
/// Whole numbers render without a fractional part (`2`, not `2.0`); anything
/// else uses the default float text. Negative zero renders as `0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

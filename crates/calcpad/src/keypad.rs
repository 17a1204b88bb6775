//! Keypad vocabulary for calculator front ends
//!
//! Probar: Visual feedback - every button maps to exactly one engine call
//!
//! Layout:
//! ```text
//! [ AC ] [ C ] [ ÷ ] [ × ]
//! [ 7  ] [ 8 ] [ 9 ] [ - ]
//! [ 4  ] [ 5 ] [ 6 ] [ + ]
//! [ 1  ] [ 2 ] [ 3 ] [ = ]
//! [ 0  ] [ . ]
//! ```

use serde::{Deserialize, Serialize};

use crate::core::Operation;

/// Actions that keypad buttons can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyAction {
    /// Enter a digit (0-9)
    Digit(u8),
    /// Enter a decimal point
    Decimal,
    /// Select an operation
    Operator(Operation),
    /// Evaluate the pending operation
    Equals,
    /// Clear the in-progress number (C)
    ClearEntry,
    /// Clear everything (AC)
    AllClear,
}

impl KeyAction {
    /// Maps a typed character to an action
    ///
    /// Accepts `0-9`, `.`, `+ - * x × / ÷`, `=` or newline, `c`/`C` for clear
    /// entry and `a`/`A` for all clear.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        let action = match c {
            '0'..='9' => Self::Digit(c as u8 - b'0'),
            '.' => Self::Decimal,
            '+' => Self::Operator(Operation::Add),
            '-' => Self::Operator(Operation::Subtract),
            '*' | 'x' | '×' => Self::Operator(Operation::Multiply),
            '/' | '÷' => Self::Operator(Operation::Divide),
            '=' | '\n' => Self::Equals,
            'c' | 'C' => Self::ClearEntry,
            'a' | 'A' => Self::AllClear,
            _ => return None,
        };
        Some(action)
    }

    /// Returns the button label for this action
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::ClearEntry => "C".to_string(),
            Self::AllClear => "AC".to_string(),
        }
    }
}

/// Parses a keystroke script such as `"12+3="` into actions
///
/// Whitespace other than newline is skipped. Returns the first unrecognised
/// character as the error.
pub fn parse_keys(script: &str) -> Result<Vec<KeyAction>, char> {
    script
        .chars()
        .filter(|c| *c == '\n' || !c.is_whitespace())
        .map(|c| KeyAction::from_char(c).ok_or(c))
        .collect()
}

/// A single keypad button placed on the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The action this button performs
    pub action: KeyAction,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

/// The calculator button grid
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard layout
    #[must_use]
    pub fn new() -> Self {
        use KeyAction::{AllClear, ClearEntry, Decimal, Digit, Equals, Operator};

        let layout: [&[KeyAction]; 5] = [
            &[
                AllClear,
                ClearEntry,
                Operator(Operation::Divide),
                Operator(Operation::Multiply),
            ],
            &[Digit(7), Digit(8), Digit(9), Operator(Operation::Subtract)],
            &[Digit(4), Digit(5), Digit(6), Operator(Operation::Add)],
            &[Digit(1), Digit(2), Digit(3), Equals],
            &[Digit(0), Decimal],
        ];

        let buttons = layout
            .iter()
            .enumerate()
            .flat_map(|(row, actions)| {
                actions
                    .iter()
                    .enumerate()
                    .map(move |(col, &action)| KeypadButton { action, row, col })
            })
            .collect();

        Self {
            buttons,
            rows: layout.len(),
            cols: 4,
        }
    }

    /// Returns all buttons in row-major order
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Number of rows in the grid
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the grid
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the button at a grid position
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Returns the button performing `action`
    #[must_use]
    pub fn find(&self, action: KeyAction) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.action == action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // ===== KeyAction =====

    #[test]
    fn test_from_char_digits() {
        for d in 0..=9u8 {
            let c = char::from(b'0' + d);
            assert_eq!(KeyAction::from_char(c), Some(KeyAction::Digit(d)));
        }
    }

    #[test]
    fn test_from_char_operators() {
        assert_eq!(
            KeyAction::from_char('+'),
            Some(KeyAction::Operator(Operation::Add))
        );
        assert_eq!(
            KeyAction::from_char('-'),
            Some(KeyAction::Operator(Operation::Subtract))
        );
        for c in ['*', 'x', '×'] {
            assert_eq!(
                KeyAction::from_char(c),
                Some(KeyAction::Operator(Operation::Multiply))
            );
        }
        for c in ['/', '÷'] {
            assert_eq!(
                KeyAction::from_char(c),
                Some(KeyAction::Operator(Operation::Divide))
            );
        }
    }

    #[test]
    fn test_from_char_controls() {
        assert_eq!(KeyAction::from_char('.'), Some(KeyAction::Decimal));
        assert_eq!(KeyAction::from_char('='), Some(KeyAction::Equals));
        assert_eq!(KeyAction::from_char('\n'), Some(KeyAction::Equals));
        assert_eq!(KeyAction::from_char('c'), Some(KeyAction::ClearEntry));
        assert_eq!(KeyAction::from_char('A'), Some(KeyAction::AllClear));
    }

    #[test]
    fn test_from_char_rejects_unknown() {
        assert_eq!(KeyAction::from_char('('), None);
        assert_eq!(KeyAction::from_char('%'), None);
        assert_eq!(KeyAction::from_char('q'), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(KeyAction::Digit(7).label(), "7");
        assert_eq!(KeyAction::Decimal.label(), ".");
        assert_eq!(KeyAction::Operator(Operation::Divide).label(), "÷");
        assert_eq!(KeyAction::Equals.label(), "=");
        assert_eq!(KeyAction::ClearEntry.label(), "C");
        assert_eq!(KeyAction::AllClear.label(), "AC");
    }

    // ===== parse_keys =====

    #[test]
    fn test_parse_keys_script() {
        let keys = parse_keys("12 + 3 =").unwrap();
        assert_eq!(
            keys,
            vec![
                KeyAction::Digit(1),
                KeyAction::Digit(2),
                KeyAction::Operator(Operation::Add),
                KeyAction::Digit(3),
                KeyAction::Equals,
            ]
        );
    }

    #[test]
    fn test_parse_keys_empty() {
        assert_eq!(parse_keys("   "), Ok(vec![]));
    }

    #[test]
    fn test_parse_keys_reports_bad_char() {
        assert_eq!(parse_keys("1+(2)"), Err('('));
    }

    // ===== Keypad =====

    #[test]
    fn test_keypad_dimensions() {
        let keypad = Keypad::new();
        assert_eq!(keypad.rows(), 5);
        assert_eq!(keypad.cols(), 4);
        assert_eq!(keypad.buttons().len(), 18);
    }

    #[test]
    fn test_keypad_button_at() {
        let keypad = Keypad::default();
        assert_eq!(
            keypad.button_at(1, 0).map(|b| b.action),
            Some(KeyAction::Digit(7))
        );
        assert_eq!(
            keypad.button_at(3, 3).map(|b| b.action),
            Some(KeyAction::Equals)
        );
        assert!(keypad.button_at(4, 3).is_none());
        assert!(keypad.button_at(9, 0).is_none());
    }

    #[test]
    fn test_keypad_actions_unique_and_complete() {
        let keypad = Keypad::new();
        let actions: HashSet<_> = keypad.buttons().iter().map(|b| b.action).collect();
        assert_eq!(actions.len(), keypad.buttons().len());

        for d in 0..=9 {
            assert!(keypad.find(KeyAction::Digit(d)).is_some());
        }
        for op in Operation::ALL {
            assert!(keypad.find(KeyAction::Operator(op)).is_some());
        }
        for action in [
            KeyAction::Decimal,
            KeyAction::Equals,
            KeyAction::ClearEntry,
            KeyAction::AllClear,
        ] {
            assert!(keypad.find(action).is_some());
        }
    }

    #[test]
    fn test_keypad_labels_round_trip_through_from_char() {
        let keypad = Keypad::new();
        for button in keypad.buttons() {
            let label = button.action.label();
            if let Some(c) = label.chars().next().filter(|_| label.chars().count() == 1) {
                assert_eq!(KeyAction::from_char(c), Some(button.action), "label {label}");
            }
        }
    }
}

//! Display text derived from a calculator snapshot.

use serde::Serialize;

use crate::calculator::{CalculatorState, is_blank_operand};

/// What a renderer needs to draw the calculator display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CalculatorDisplay {
    /// First operand, operator symbol and second operand, concatenated.
    pub text: String,
    /// Label for the clear key: "C" while there is a first operand, else "AC".
    pub clear_label: &'static str,
    /// Whether the display shows the division-by-zero sentinel.
    pub is_error: bool,
}

impl CalculatorDisplay {
    pub fn from_state(state: &CalculatorState) -> Self {
        let symbol = state.operator().map(|op| op.symbol()).unwrap_or_default();
        let text = format!("{}{}{}", state.operand1(), symbol, state.operand2());

        let clear_label = if is_blank_operand(state.operand1()) {
            "AC"
        } else {
            "C"
        };

        Self {
            text,
            clear_label,
            is_error: state.is_error(),
        }
    }
}

impl From<&CalculatorState> for CalculatorDisplay {
    fn from(state: &CalculatorState) -> Self {
        Self::from_state(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Operator;

    #[test]
    fn test_empty_display() {
        let display = CalculatorDisplay::from_state(&CalculatorState::new());
        assert_eq!(display.text, "");
        assert_eq!(display.clear_label, "AC");
        assert!(!display.is_error);
    }

    #[test]
    fn test_expression_display() {
        let state = CalculatorState::from_parts("12", Some(Operator::Divide), "4%").unwrap();
        let display = CalculatorDisplay::from(&state);
        assert_eq!(display.text, "12÷4%");
        assert_eq!(display.clear_label, "C");
    }

    #[test]
    fn test_error_display() {
        let state = CalculatorState::from_parts("Error", None, "").unwrap();
        let display = CalculatorDisplay::from_state(&state);
        assert_eq!(display.text, "Error");
        assert!(display.is_error);
    }
}

//! Calculator state snapshot.
//!
//! A `CalculatorState` is an immutable value: the reducer never edits one in
//! place, it builds the next snapshot and hands it back to the owner.

use serde::Serialize;
use thiserror::Error;

/// Text placed into the first operand after a division by zero.
pub const ERROR_SENTINEL: &str = "Error";

/// Marker appended to an operand to defer percent resolution.
pub const PERCENT_MARKER: char = '%';

/// Canonical upper bound on operand and result length.
pub const DEFAULT_MAX_LENGTH: usize = 15;

/// A pending binary operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Symbol shown on the display between the two operands.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Apply the operation. Division by zero is handled by the caller.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

/// Rejected raw parts passed to [`CalculatorState::from_parts`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("an operator requires a non-blank first operand")]
    OperatorWithoutOperand,

    #[error("a second operand requires a pending operator")]
    OperandWithoutOperator,
}

/// Two operands under construction plus the pending operator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CalculatorState {
    operand1: String,
    operator: Option<Operator>,
    operand2: String,
}

impl CalculatorState {
    /// The empty state used at startup and after Clear.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state from raw parts, checking the operator/operand invariants.
    pub fn from_parts(
        operand1: impl Into<String>,
        operator: Option<Operator>,
        operand2: impl Into<String>,
    ) -> Result<Self, StateError> {
        let operand1 = operand1.into();
        let operand2 = operand2.into();

        if operator.is_some() && is_blank(&operand1) {
            return Err(StateError::OperatorWithoutOperand);
        }
        if operator.is_none() && !is_blank(&operand2) {
            return Err(StateError::OperandWithoutOperator);
        }

        Ok(Self {
            operand1,
            operator,
            operand2,
        })
    }

    pub fn operand1(&self) -> &str {
        &self.operand1
    }

    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    pub fn operand2(&self) -> &str {
        &self.operand2
    }

    /// The operand that digits currently go to.
    pub fn active_operand(&self) -> &str {
        if self.operator.is_some() {
            &self.operand2
        } else {
            &self.operand1
        }
    }

    /// Whether the first operand holds the division-by-zero sentinel.
    pub fn is_error(&self) -> bool {
        self.operand1 == ERROR_SENTINEL
    }

    /// The state left behind by a division by zero.
    pub(crate) fn error() -> Self {
        Self {
            operand1: ERROR_SENTINEL.to_string(),
            operator: None,
            operand2: String::new(),
        }
    }

    /// A finished result: the value lands in the first operand, the rest clears.
    pub(crate) fn with_result(result: String) -> Self {
        Self {
            operand1: result,
            operator: None,
            operand2: String::new(),
        }
    }

    pub(crate) fn with_operand1(&self, operand1: String) -> Self {
        Self {
            operand1,
            ..self.clone()
        }
    }

    pub(crate) fn with_operand2(&self, operand2: String) -> Self {
        Self {
            operand2,
            ..self.clone()
        }
    }

    pub(crate) fn with_operator(&self, operator: Option<Operator>) -> Self {
        Self {
            operator,
            ..self.clone()
        }
    }

    /// Replace whichever operand is active.
    pub(crate) fn with_active_operand(&self, operand: String) -> Self {
        if self.operator.is_some() {
            self.with_operand2(operand)
        } else {
            self.with_operand1(operand)
        }
    }
}

/// Blank in the keypad sense: empty or only whitespace.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty() {
        let state = CalculatorState::new();
        assert_eq!(state.operand1(), "");
        assert_eq!(state.operator(), None);
        assert_eq!(state.operand2(), "");
        assert!(!state.is_error());
    }

    #[test]
    fn test_from_parts_checks_invariants() {
        assert_eq!(
            CalculatorState::from_parts("", Some(Operator::Add), ""),
            Err(StateError::OperatorWithoutOperand)
        );
        assert_eq!(
            CalculatorState::from_parts("1", None, "2"),
            Err(StateError::OperandWithoutOperator)
        );
        assert!(CalculatorState::from_parts("1", Some(Operator::Add), "2").is_ok());
    }

    #[test]
    fn test_active_operand_follows_operator() {
        let state = CalculatorState::from_parts("12", None, "").unwrap();
        assert_eq!(state.active_operand(), "12");

        let state = CalculatorState::from_parts("12", Some(Operator::Divide), "3").unwrap();
        assert_eq!(state.active_operand(), "3");
    }

    #[test]
    fn test_operator_symbols() {
        assert_eq!(Operator::Add.symbol(), "+");
        assert_eq!(Operator::Subtract.symbol(), "-");
        assert_eq!(Operator::Multiply.symbol(), "×");
        assert_eq!(Operator::Divide.symbol(), "÷");
    }

    #[test]
    fn test_state_serializes_to_json() {
        let state = CalculatorState::from_parts("100", Some(Operator::Add), "10%").unwrap();
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(
            json,
            r#"{"operand1":"100","operator":"add","operand2":"10%"}"#
        );
    }
}

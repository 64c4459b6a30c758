//! The calculator state machine.
//!
//! `Reducer::reduce` maps a snapshot and one action to the next snapshot.
//! Every action returns a valid state; anything that cannot be applied
//! returns the input unchanged.

use super::action::Action;
use super::format::format_result;
use super::percent::{has_marker, parse_number, resolve};
use super::state::{CalculatorState, DEFAULT_MAX_LENGTH, Operator, PERCENT_MARKER, is_blank};

/// Pure state reducer, parameterised by display limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reducer {
    max_length: usize,
    guard_error: bool,
}

impl Default for Reducer {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            guard_error: false,
        }
    }
}

/// Reduce with the canonical limits and no error guard.
pub fn reduce(state: &CalculatorState, action: Action) -> CalculatorState {
    Reducer::default().reduce(state, action)
}

impl Reducer {
    pub fn new(max_length: usize, guard_error: bool) -> Self {
        Self {
            max_length,
            guard_error,
        }
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Compute the state that follows `action`.
    pub fn reduce(&self, state: &CalculatorState, action: Action) -> CalculatorState {
        if self.guard_error && state.is_error() {
            return self.reduce_guarded(state, action);
        }

        match action {
            Action::Digit(digit) => self.enter_digit(state, digit),
            Action::Decimal => enter_decimal(state),
            Action::Operation(op) => enter_operation(state, op),
            Action::Percent => enter_percent(state),
            Action::SquareRoot => self.square_root(state),
            Action::SignChange => self.change_sign(state),
            Action::Delete => delete(state),
            Action::Clear => CalculatorState::new(),
            Action::Calculate => self.calculate(state),
        }
    }

    /// While the error sentinel is showing, only a fresh digit, Delete and
    /// Clear do anything.
    fn reduce_guarded(&self, state: &CalculatorState, action: Action) -> CalculatorState {
        match action {
            Action::Digit(digit) => self.enter_digit(&CalculatorState::new(), digit),
            Action::Delete => delete(state),
            Action::Clear => CalculatorState::new(),
            _ => state.clone(),
        }
    }

    fn enter_digit(&self, state: &CalculatorState, digit: u8) -> CalculatorState {
        if digit > 9 {
            return state.clone();
        }

        let operand = state.active_operand();
        if has_marker(operand) || operand.chars().count() >= self.max_length {
            return state.clone();
        }

        state.with_active_operand(format!("{operand}{digit}"))
    }

    fn square_root(&self, state: &CalculatorState) -> CalculatorState {
        if is_blank(state.operand1()) {
            return state.clone();
        }

        match parse_number(state.operand1()) {
            Some(value) => CalculatorState::with_result(self.format(value.sqrt())),
            None => state.clone(),
        }
    }

    /// Negate the second operand if it has content, otherwise the first.
    fn change_sign(&self, state: &CalculatorState) -> CalculatorState {
        if !is_blank(state.operand2()) {
            match parse_number(state.operand2()) {
                Some(value) => state.with_operand2(self.format(-value)),
                None => state.clone(),
            }
        } else if !is_blank(state.operand1()) {
            match parse_number(state.operand1()) {
                Some(value) => state.with_operand1(self.format(-value)),
                None => state.clone(),
            }
        } else {
            state.clone()
        }
    }

    fn calculate(&self, state: &CalculatorState) -> CalculatorState {
        let operand1 = state.operand1();
        let operand2 = state.operand2();

        match state.operator() {
            // A lone percent resolves on its own: `50% =` gives 0.5.
            None if is_blank(operand2) => {
                if !has_marker(operand1) {
                    return state.clone();
                }
                match resolve(operand1, None) {
                    Some(value) => CalculatorState::with_result(self.format(value)),
                    None => state.clone(),
                }
            }
            Some(op) if !is_blank(operand1) && !is_blank(operand2) => {
                let Some(lhs) = resolve(operand1, None) else {
                    return state.clone();
                };
                let Some(rhs) = resolve(operand2, Some((lhs, op))) else {
                    return state.clone();
                };

                if op == Operator::Divide && rhs == 0.0 {
                    tracing::warn!(dividend = lhs, "division by zero");
                    return CalculatorState::error();
                }

                CalculatorState::with_result(self.format(op.apply(lhs, rhs)))
            }
            _ => state.clone(),
        }
    }

    fn format(&self, value: f64) -> String {
        format_result(value, self.max_length)
    }
}

/// A number may not start with a bare decimal point, and a percent marker
/// closes the operand.
fn enter_decimal(state: &CalculatorState) -> CalculatorState {
    let operand = state.active_operand();
    if is_blank(operand) || operand.contains('.') || has_marker(operand) {
        return state.clone();
    }

    state.with_active_operand(format!("{operand}."))
}

/// The second operand is kept when the operator is replaced.
fn enter_operation(state: &CalculatorState, op: Operator) -> CalculatorState {
    if is_blank(state.operand1()) {
        return state.clone();
    }

    state.with_operator(Some(op))
}

fn enter_percent(state: &CalculatorState) -> CalculatorState {
    let operand = state.active_operand();
    if is_blank(operand) || has_marker(operand) {
        return state.clone();
    }

    state.with_active_operand(format!("{operand}{PERCENT_MARKER}"))
}

fn delete(state: &CalculatorState) -> CalculatorState {
    if !is_blank(state.operand2()) {
        state.with_operand2(drop_last(state.operand2()))
    } else if state.operator().is_some() {
        state.with_operator(None)
    } else if !is_blank(state.operand1()) {
        state.with_operand1(drop_last(state.operand1()))
    } else {
        state.clone()
    }
}

fn drop_last(text: &str) -> String {
    let mut chars = text.chars();
    chars.next_back();
    chars.as_str().to_string()
}

//! The host-side owner of the current calculator snapshot.

use crate::calculator::{Action, CalculatorState, Reducer};
use crate::display::CalculatorDisplay;

/// Holds the current snapshot and replaces it on every dispatched action.
///
/// Dispatch takes `&mut self`, so actions are applied strictly one at a time.
#[derive(Debug, Default)]
pub struct Session {
    reducer: Reducer,
    state: CalculatorState,
}

impl Session {
    pub fn new(reducer: Reducer) -> Self {
        Self {
            reducer,
            state: CalculatorState::new(),
        }
    }

    /// Apply one action and return the new snapshot.
    pub fn dispatch(&mut self, action: Action) -> &CalculatorState {
        let next = self.reducer.reduce(&self.state, action);

        if next == self.state {
            tracing::trace!(%action, "action had no effect");
        } else {
            tracing::debug!(
                %action,
                display = %CalculatorDisplay::from_state(&next).text,
                "state updated"
            );
        }

        self.state = next;
        &self.state
    }

    /// Apply a sequence of actions in order.
    pub fn dispatch_all(&mut self, actions: impl IntoIterator<Item = Action>) -> &CalculatorState {
        for action in actions {
            self.dispatch(action);
        }
        &self.state
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn display(&self) -> CalculatorDisplay {
        CalculatorDisplay::from_state(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{Operator, parse_keys};

    #[test]
    fn test_initial_session_is_empty() {
        let session = Session::default();
        assert_eq!(session.state(), &CalculatorState::new());
        assert_eq!(session.display().text, "");
    }

    #[test]
    fn test_dispatch_replaces_snapshot() {
        let mut session = Session::default();
        session.dispatch(Action::Digit(4));
        session.dispatch(Action::Operation(Operator::Multiply));
        let state = session.dispatch(Action::Digit(2)).clone();
        assert_eq!(session.display().text, "4×2");

        session.dispatch(Action::Calculate);
        assert_eq!(session.state().operand1(), "8");
        assert_eq!(state.operand2(), "2");
    }

    #[test]
    fn test_dispatch_key_script() {
        let mut session = Session::default();
        session.dispatch_all(parse_keys("100 + 10% =").unwrap());
        assert_eq!(session.display().text, "110");

        session.dispatch_all(parse_keys("/ 0 =").unwrap());
        assert!(session.display().is_error);

        session.dispatch_all(parse_keys("ac").unwrap());
        assert_eq!(session.state(), &CalculatorState::new());
    }

    #[test]
    fn test_session_uses_configured_reducer() {
        let mut session = Session::new(Reducer::new(3, false));
        session.dispatch_all(parse_keys("123456").unwrap());
        assert_eq!(session.display().text, "123");
    }
}

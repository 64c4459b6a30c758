//! Discrete keypad actions.

use std::fmt;

use super::state::Operator;

/// One user action, dispatched to the reducer one at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// A digit key, `0..=9`.
    Digit(u8),
    Decimal,
    Operation(Operator),
    Percent,
    SquareRoot,
    SignChange,
    Delete,
    Clear,
    Calculate,
}

impl Action {
    /// Digit action from a character, if it is an ASCII digit.
    pub fn from_digit_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self::Digit(d as u8))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::Decimal => f.write_str("."),
            Self::Operation(op) => f.write_str(op.symbol()),
            Self::Percent => f.write_str("%"),
            Self::SquareRoot => f.write_str("√"),
            Self::SignChange => f.write_str("±"),
            Self::Delete => f.write_str("⌫"),
            Self::Clear => f.write_str("AC"),
            Self::Calculate => f.write_str("="),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_digit_char() {
        assert_eq!(Action::from_digit_char('7'), Some(Action::Digit(7)));
        assert_eq!(Action::from_digit_char('x'), None);
    }

    #[test]
    fn test_display_matches_keypad_labels() {
        assert_eq!(Action::Operation(Operator::Multiply).to_string(), "×");
        assert_eq!(Action::Digit(0).to_string(), "0");
        assert_eq!(Action::Calculate.to_string(), "=");
    }
}

//! Key-script parsing.
//!
//! Turns typed keypad input such as `"100 + 10% ="` or `"16 sqrt"` into the
//! sequence of actions the reducer consumes.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use super::action::Action;
use super::state::Operator;

lazy_static! {
    /// One keypad token, words first so `clear` is not read as `c`.
    static ref KEY_TOKEN: Regex = Regex::new(
        r"(?i)^(?:sqrt|neg|del|clear|ac|[0-9.+\-*x×/÷%=√±⌫c])"
    ).unwrap();
}

/// A key script that could not be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("unknown key '{key}' at position {position}")]
    UnknownKey { key: char, position: usize },
}

/// Parse a key script into actions. Whitespace is skipped.
pub fn parse_keys(input: &str) -> Result<Vec<Action>, KeyError> {
    let mut actions = Vec::new();
    let mut rest = input;
    let mut position = 0;

    while let Some(c) = rest.chars().next() {
        if c.is_whitespace() {
            rest = &rest[c.len_utf8()..];
            position += 1;
            continue;
        }

        let Some(token) = KEY_TOKEN.find(rest) else {
            return Err(KeyError::UnknownKey { key: c, position });
        };

        let text = token.as_str();
        if let Some(action) = key_action(text) {
            actions.push(action);
        }

        position += text.chars().count();
        rest = &rest[token.end()..];
    }

    Ok(actions)
}

/// Map a single matched token to its action.
fn key_action(token: &str) -> Option<Action> {
    let lower = token.to_lowercase();
    let action = match lower.as_str() {
        "." => Action::Decimal,
        "+" => Action::Operation(Operator::Add),
        "-" => Action::Operation(Operator::Subtract),
        "*" | "x" | "×" => Action::Operation(Operator::Multiply),
        "/" | "÷" => Action::Operation(Operator::Divide),
        "%" => Action::Percent,
        "=" => Action::Calculate,
        "sqrt" | "√" => Action::SquareRoot,
        "neg" | "±" => Action::SignChange,
        "del" | "⌫" => Action::Delete,
        "c" | "ac" | "clear" => Action::Clear,
        other => return other.chars().next().and_then(Action::from_digit_char),
    };
    Some(action)
}

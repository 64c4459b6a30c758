//! Percent resolution for operands carrying a trailing `%`.
//!
//! The meaning of `n%` depends on where it appears:
//! - standalone (`50% =`) it is `n / 100`
//! - after `+` or `-` it is that fraction *of the base* (`100 + 10% = 110`)
//! - after `×` or `÷` it is the plain fraction (`200 × 10% = 20`)

use super::state::{Operator, PERCENT_MARKER};

/// Parse operand text as a plain decimal number.
pub fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok()
}

/// Resolve operand text to a number.
///
/// `context` is the other operand's value and the pending operator. Returns
/// `None` when the numeric portion does not parse.
pub fn resolve(text: &str, context: Option<(f64, Operator)>) -> Option<f64> {
    let Some(raw) = text.strip_suffix(PERCENT_MARKER) else {
        return parse_number(text);
    };

    let fraction = parse_number(raw)? / 100.0;

    match context {
        Some((base, Operator::Add | Operator::Subtract)) => Some(base * fraction),
        Some((_, Operator::Multiply | Operator::Divide)) | None => Some(fraction),
    }
}

/// Whether the operand already carries a trailing percent marker.
pub fn has_marker(text: &str) -> bool {
    text.ends_with(PERCENT_MARKER)
}

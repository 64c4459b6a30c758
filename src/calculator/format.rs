//! Result formatting for the calculator display.
//!
//! Results are rendered as a plain integer, a shortest round-tripping
//! decimal, or scientific notation for very large and very small magnitudes,
//! then cut to the display width.

/// Magnitudes above this are shown in scientific notation.
const SCIENTIFIC_ABOVE: f64 = 999_999_999_999.0;

/// Non-zero magnitudes below this are shown in scientific notation.
const SCIENTIFIC_BELOW: f64 = 0.0001;

/// Mantissa digits after the decimal point in scientific notation.
const MANTISSA_DIGITS: usize = 6;

/// Format a result for display, truncated to `max_len` characters.
///
/// Truncation is a plain cut with no re-rounding, so long decimals lose
/// their tail digits.
pub fn format_result(value: f64, max_len: usize) -> String {
    let text = if !value.is_finite() {
        value.to_string()
    } else if needs_scientific(value) {
        format_scientific(value)
    } else if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        // `as` maps -0.0 to 0
        format!("{}", value as i64)
    } else {
        value.to_string()
    };

    truncate(text, max_len)
}

fn needs_scientific(value: f64) -> bool {
    let magnitude = value.abs();
    magnitude > SCIENTIFIC_ABOVE || (magnitude < SCIENTIFIC_BELOW && value != 0.0)
}

/// Render as `d.ddddddE±XX`.
fn format_scientific(value: f64) -> String {
    let raw = format!("{:.*E}", MANTISSA_DIGITS, value);

    let Some((mantissa, exponent)) = raw.split_once('E') else {
        return raw;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return raw;
    };

    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}E{sign}{:02}", exponent.unsigned_abs())
}

fn truncate(text: String, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text
    } else {
        text.chars().take(max_len).collect()
    }
}

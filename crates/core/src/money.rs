//! Currency parsing and display formatting.
//!
//! All user-entered numbers arrive as raw field text; nothing here ever
//! panics on malformed input.

/// Parse a quantity or unit-price field.
///
/// Accepts finite, non-negative decimals. Returns `None` for anything else,
/// including negative values and empty strings.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

/// Parse the discount field.
///
/// Negative discounts are allowed (they act as a surcharge); only the finite
/// decimal shape is checked.
pub fn parse_discount(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// Format a currency value for display: exactly two decimal places.
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

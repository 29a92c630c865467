// src/models/price.rs

//! Money handling. Prices are stored and summed as integer cents; the wire
//! format is a decimal string with two fraction digits ("49.99").

use crate::errors::{AppError, Result};
use serde::Serializer;

/// Parses a decimal price string ("49.99", "12.5", "7") into cents.
///
/// At most two fraction digits are accepted. Malformed or negative input is
/// a validation error rather than a NaN total.
pub fn parse_price(input: &str) -> Result<i64> {
  let s = input.trim();
  let (whole, frac) = match s.split_once('.') {
    Some((w, f)) => (w, f),
    None => (s, ""),
  };

  let valid = (!whole.is_empty() || !frac.is_empty())
    && whole.chars().all(|c| c.is_ascii_digit())
    && frac.chars().all(|c| c.is_ascii_digit())
    && frac.len() <= 2;
  if !valid {
    return Err(AppError::Validation(format!("Invalid price value: '{}'", input)));
  }

  let whole_cents = if whole.is_empty() {
    0
  } else {
    whole
      .parse::<i64>()
      .ok()
      .and_then(|w| w.checked_mul(100))
      .ok_or_else(|| AppError::Validation(format!("Price out of range: '{}'", input)))?
  };
  let frac_cents = match frac.len() {
    0 => 0,
    1 => frac.parse::<i64>().unwrap_or(0) * 10,
    _ => frac.parse::<i64>().unwrap_or(0),
  };

  whole_cents
    .checked_add(frac_cents)
    .ok_or_else(|| AppError::Validation(format!("Price out of range: '{}'", input)))
}

/// Formats cents back into the two-decimal wire form.
pub fn format_price(cents: i64) -> String {
  format!("{}.{:02}", cents / 100, cents % 100)
}

/// Serde helper so money columns serialize as decimal strings.
pub fn serialize_cents<S>(cents: &i64, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
  S: Serializer,
{
  serializer.serialize_str(&format_price(*cents))
}

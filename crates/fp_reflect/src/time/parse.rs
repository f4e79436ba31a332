use alloc::string::ToString;

use serde_json::Value;

use crate::convert::{ConvertError, Numeric, ValueKind};
use crate::time::UnitKind;

// -----------------------------------------------------------------------------
// Quantity

/// A parsed duration literal: an amount and the unit it was written in.
///
/// `unit` is `None` for a bare number, which counts in whatever unit the
/// target uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    pub amount: f64,
    pub unit: Option<UnitKind>,
}

impl Quantity {
    /// Returns the amount expressed in `target`, or in `target` directly when
    /// no unit was written.
    #[inline]
    pub fn amount_in(self, target: UnitKind) -> f64 {
        match self.unit {
            Some(unit) => convert_amount(self.amount, unit, target),
            None => self.amount,
        }
    }
}

/// Parses a duration literal such as `"30s"`, `"1.5 h"` or `"250"`.
///
/// The text is trimmed, then read as `[+-]digits[.[digits]]`, optional
/// whitespace and an optional unit suffix (see [`UnitKind::from_suffix`]).
///
/// ```
/// use fp_reflect::time::{parse_quantity, Quantity, UnitKind};
///
/// assert_eq!(
///     parse_quantity(" 30s "),
///     Ok(Quantity { amount: 30.0, unit: Some(UnitKind::Seconds) }),
/// );
/// assert_eq!(parse_quantity("2.5").unwrap().unit, None);
/// assert_eq!(parse_quantity("5.").unwrap().amount, 5.0);
/// assert!(parse_quantity("30x").is_err());
/// assert!(parse_quantity("s30").is_err());
/// ```
pub fn parse_quantity(text: &str) -> Result<Quantity, ConvertError> {
    let (number, unit) = split_quantity(text)?;
    let amount = number
        .parse::<f64>()
        .map_err(|_| invalid_duration(text, "no numeric prefix"))?;

    Ok(Quantity { amount, unit })
}

/// Splits a duration literal into its number text and unit, without
/// converting the number.
///
/// The number text is `[+-]digits[.[digits]]`. Callers that need more
/// precision than an `f64` read the digits themselves.
///
/// ```
/// use fp_reflect::time::{split_quantity, UnitKind};
///
/// assert_eq!(split_quantity(" 1.000000001 s"), Ok(("1.000000001", Some(UnitKind::Seconds))));
/// assert_eq!(split_quantity("-7"), Ok(("-7", None)));
/// ```
pub fn split_quantity(text: &str) -> Result<(&str, Option<UnitKind>), ConvertError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(invalid_duration(text, "empty input"));
    }

    let bytes = trimmed.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let mut end = sign;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == sign {
        return Err(invalid_duration(text, "no numeric prefix"));
    }
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }

    let (number, suffix) = trimmed.split_at(end);
    let suffix = suffix.trim_start();
    let unit = if suffix.is_empty() {
        None
    } else {
        Some(UnitKind::from_suffix(suffix).ok_or_else(|| invalid_duration(text, "unknown unit suffix"))?)
    };

    Ok((number, unit))
}

#[inline]
fn invalid_duration(text: &str, reason: &'static str) -> ConvertError {
    ConvertError::InvalidDuration {
        input: text.to_string(),
        reason,
    }
}

/// Converts `amount` from one unit to another.
///
/// The ratio between two units is always a whole number, so the conversion
/// multiplies or divides by an exact integer.
///
/// ```
/// use fp_reflect::time::{convert_amount, UnitKind};
///
/// assert_eq!(convert_amount(2.0, UnitKind::Hours, UnitKind::Minutes), 120.0);
/// assert_eq!(convert_amount(90.0, UnitKind::Seconds, UnitKind::Minutes), 1.5);
/// ```
pub fn convert_amount(amount: f64, from: UnitKind, to: UnitKind) -> f64 {
    let (from, to) = (from.millis(), to.millis());
    if from >= to {
        amount * (from / to) as f64
    } else {
        amount / (to / from) as f64
    }
}

/// Reads a JSON value as an amount of `unit`.
///
/// Strings go through [`parse_quantity`]; numbers count in `unit` directly.
pub fn decode_amount(value: &Value, unit: UnitKind) -> Result<f64, ConvertError> {
    match value {
        Value::String(text) => parse_quantity(text).map(|quantity| quantity.amount_in(unit)),
        Value::Number(number) => Ok(Numeric::of_number(number).as_f64()),
        other => Err(ConvertError::TypeMismatch {
            expected: "a duration string or a number",
            found: ValueKind::of(other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reason(text: &str) -> &'static str {
        match parse_quantity(text) {
            Err(ConvertError::InvalidDuration { reason, .. }) => reason,
            other => panic!("expected a duration error for {text:?}, got {other:?}"),
        }
    }

    #[test]
    fn suffixes_and_spacing() {
        let seconds = Some(UnitKind::Seconds);
        assert_eq!(parse_quantity("45s").unwrap().unit, seconds);
        assert_eq!(parse_quantity("45 seconds").unwrap().unit, seconds);
        assert_eq!(parse_quantity("1.5h").unwrap().amount, 1.5);
        assert_eq!(parse_quantity("-3m").unwrap().amount, -3.0);
        assert_eq!(parse_quantity("10 days").unwrap().unit, Some(UnitKind::Days));
    }

    #[test]
    fn rejects() {
        assert_eq!(reason(""), "empty input");
        assert_eq!(reason("   "), "empty input");
        assert_eq!(reason("invalid_duration"), "no numeric prefix");
        assert_eq!(reason("s30"), "no numeric prefix");
        assert_eq!(reason("30x"), "unknown unit suffix");
        assert_eq!(reason("30 S"), "unknown unit suffix");
        assert_eq!(reason("5x.s"), "unknown unit suffix");
        assert_eq!(reason("+"), "no numeric prefix");
    }

    #[test]
    fn trailing_point() {
        assert_eq!(parse_quantity("5.").unwrap(), Quantity { amount: 5.0, unit: None });
        assert_eq!(
            parse_quantity("5.s").unwrap(),
            Quantity { amount: 5.0, unit: Some(UnitKind::Seconds) }
        );
        assert_eq!(decode_amount(&json!("2. m"), UnitKind::Seconds), Ok(120.0));
    }

    #[test]
    fn amounts_in_target_unit() {
        assert_eq!(decode_amount(&json!("2m"), UnitKind::Seconds), Ok(120.0));
        assert_eq!(decode_amount(&json!("120s"), UnitKind::Minutes), Ok(2.0));
        assert_eq!(decode_amount(&json!("1500ms"), UnitKind::Seconds), Ok(1.5));
        assert_eq!(decode_amount(&json!(60), UnitKind::Minutes), Ok(60.0));
        assert_eq!(decode_amount(&json!("7"), UnitKind::Hours), Ok(7.0));
        assert!(decode_amount(&json!(true), UnitKind::Seconds).is_err());
    }
}

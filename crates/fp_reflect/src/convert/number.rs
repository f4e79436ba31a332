//! Numeric prefix scanning.
//!
//! Strings are read the way C's `strtoll`/`strtod` read them: leading
//! whitespace is skipped, then the longest numeric prefix is taken and
//! anything after it is ignored. `"42abc"` is `42`, `"abc"` is no number.

use alloc::string::ToString;

use serde_json::Value;

use crate::convert::{ConvertError, ValueKind};

// -----------------------------------------------------------------------------
// Numeric

/// A number taken from a JSON value, before narrowing to the target type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl Numeric {
    /// Reads a JSON number without loss.
    pub fn of_number(number: &serde_json::Number) -> Self {
        if let Some(v) = number.as_i64() {
            Self::Int(v)
        } else if let Some(v) = number.as_u64() {
            Self::UInt(v)
        } else {
            Self::Float(number.as_f64().unwrap_or(f64::NAN))
        }
    }

    /// Reads `value` for an integral target: numbers as they are, strings by
    /// their integer prefix.
    pub fn integer(value: &Value, target: &'static str) -> Result<Self, ConvertError> {
        match value {
            Value::Number(number) => Ok(Self::of_number(number)),
            Value::String(text) => parse_integer_prefix(text, target),
            other => Err(ConvertError::TypeMismatch {
                expected: "a number or a numeric string",
                found: ValueKind::of(other),
            }),
        }
    }

    /// Reads `value` for a floating point target: numbers as they are,
    /// strings by their decimal prefix.
    pub fn float(value: &Value) -> Result<Self, ConvertError> {
        match value {
            Value::Number(number) => Ok(Self::of_number(number)),
            Value::String(text) => parse_float_prefix(text).map(Self::Float),
            other => Err(ConvertError::TypeMismatch {
                expected: "a number or a numeric string",
                found: ValueKind::of(other),
            }),
        }
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::UInt(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    /// Truncates to an `i64`, saturating for out of range floats.
    #[inline]
    pub fn as_i64(self) -> i64 {
        match self {
            Self::Int(v) => v,
            Self::UInt(v) => v as i64,
            Self::Float(v) => v as i64,
        }
    }
}

// -----------------------------------------------------------------------------
// Prefix scanning

fn skip_digits(bytes: &[u8], mut at: usize) -> usize {
    while at < bytes.len() && bytes[at].is_ascii_digit() {
        at += 1;
    }
    at
}

/// Returns the integer prefix of `text`, sign included, after leading
/// whitespace.
pub fn integer_prefix(text: &str) -> Option<&str> {
    let text = text.trim_start();
    let bytes = text.as_bytes();

    let start = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let end = skip_digits(bytes, start);

    (end > start).then(|| &text[..end])
}

/// Returns the floating point prefix of `text` after leading whitespace.
///
/// Accepts `[+-]digits[.digits][(e|E)[+-]digits]` with at least one digit in
/// the mantissa, and the case-insensitive words `inf`, `infinity` and `nan`.
pub fn float_prefix(text: &str) -> Option<&str> {
    let text = text.trim_start();
    let bytes = text.as_bytes();

    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let rest = &text[sign..];

    for word in ["infinity", "inf", "nan"] {
        if let Some(head) = rest.get(..word.len())
            && head.eq_ignore_ascii_case(word)
        {
            return Some(&text[..sign + word.len()]);
        }
    }

    let int_end = skip_digits(bytes, sign);
    let mut end = int_end;
    let mut digits = int_end - sign;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = skip_digits(bytes, end + 1);
        digits += frac_end - (end + 1);
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exp_sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_start = end + 1 + exp_sign;
        let exp_end = skip_digits(bytes, exp_start);
        // A dangling exponent marker is not part of the number.
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    Some(&text[..end])
}

/// Parses the integer prefix of `text`.
///
/// Values above `i64::MAX` are kept as [`Numeric::UInt`] when unsigned.
pub fn parse_integer_prefix(text: &str, target: &'static str) -> Result<Numeric, ConvertError> {
    let prefix = integer_prefix(text).ok_or_else(|| ConvertError::InvalidNumber {
        input: text.to_string(),
    })?;

    if let Ok(v) = prefix.parse::<i64>() {
        return Ok(Numeric::Int(v));
    }
    if !prefix.starts_with('-')
        && let Ok(v) = prefix.parse::<u64>()
    {
        return Ok(Numeric::UInt(v));
    }

    Err(ConvertError::OutOfRange {
        input: text.to_string(),
        target,
    })
}

/// Parses the floating point prefix of `text`.
pub fn parse_float_prefix(text: &str) -> Result<f64, ConvertError> {
    float_prefix(text)
        .and_then(|prefix| prefix.parse::<f64>().ok())
        .ok_or_else(|| ConvertError::InvalidNumber {
            input: text.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integer_prefix_takes_leading_digits() {
        assert_eq!(integer_prefix("  42abc"), Some("42"));
        assert_eq!(integer_prefix("-7"), Some("-7"));
        assert_eq!(integer_prefix("+3.9"), Some("+3"));
        assert_eq!(integer_prefix("abc"), None);
        assert_eq!(integer_prefix("-"), None);
        assert_eq!(integer_prefix(""), None);
    }

    #[test]
    fn float_prefix_forms() {
        assert_eq!(float_prefix(" 3.14xyz"), Some("3.14"));
        assert_eq!(float_prefix(".5"), Some(".5"));
        assert_eq!(float_prefix("5."), Some("5."));
        assert_eq!(float_prefix("1e3m"), Some("1e3"));
        assert_eq!(float_prefix("1e"), Some("1"));
        assert_eq!(float_prefix("2E-2"), Some("2E-2"));
        assert_eq!(float_prefix("-Infinity"), Some("-Infinity"));
        assert_eq!(float_prefix("NaN!"), Some("NaN"));
        assert_eq!(float_prefix("."), None);
        assert_eq!(float_prefix("e5"), None);
    }

    #[test]
    fn large_unsigned_strings() {
        assert_eq!(
            parse_integer_prefix("18446744073709551615", "u64"),
            Ok(Numeric::UInt(u64::MAX))
        );
        assert!(matches!(
            parse_integer_prefix("-99999999999999999999", "i64"),
            Err(ConvertError::OutOfRange { .. })
        ));
    }

    #[test]
    fn numbers_from_values() {
        assert_eq!(Numeric::integer(&json!(12), "i32"), Ok(Numeric::Int(12)));
        assert_eq!(Numeric::integer(&json!("12px"), "i32"), Ok(Numeric::Int(12)));
        assert_eq!(Numeric::float(&json!("1.5e1")), Ok(Numeric::Float(15.0)));
        assert!(matches!(
            Numeric::integer(&json!(true), "i32"),
            Err(ConvertError::TypeMismatch { found: ValueKind::Bool, .. })
        ));
        assert_eq!(Numeric::Float(-3.9).as_i64(), -3);
    }
}

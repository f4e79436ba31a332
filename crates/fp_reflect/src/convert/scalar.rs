use alloc::string::{String, ToString};

use serde_json::Value;

use crate::convert::{ConvertError, Numeric, ValueKind};

// -----------------------------------------------------------------------------
// FromNumeric

/// Narrowing from a [`Numeric`] with `as` semantics.
///
/// Floats truncate toward zero and saturate; integers wrap.
pub trait FromNumeric: Copy {
    fn from_numeric(numeric: Numeric) -> Self;
}

macro_rules! impl_from_numeric {
    ($($ty:ty),* $(,)?) => {$(
        impl FromNumeric for $ty {
            #[inline]
            fn from_numeric(numeric: Numeric) -> Self {
                match numeric {
                    Numeric::Int(v) => v as $ty,
                    Numeric::UInt(v) => v as $ty,
                    Numeric::Float(v) => v as $ty,
                }
            }
        }
    )*};
}

impl_from_numeric!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

// -----------------------------------------------------------------------------
// Decoders

/// Decodes an integral target: JSON numbers narrow, strings parse their
/// integer prefix.
///
/// ```
/// use fp_reflect::convert::decode_integer;
/// use serde_json::json;
///
/// assert_eq!(decode_integer::<u8>(&json!(300), "u8"), Ok(44));
/// assert_eq!(decode_integer::<i32>(&json!(" 42abc"), "i32"), Ok(42));
/// assert_eq!(decode_integer::<i32>(&json!(9.99), "i32"), Ok(9));
/// assert!(decode_integer::<i32>(&json!("abc"), "i32").is_err());
/// ```
#[inline]
pub fn decode_integer<T: FromNumeric>(value: &Value, target: &'static str) -> Result<T, ConvertError> {
    Numeric::integer(value, target).map(T::from_numeric)
}

/// Decodes a floating point target: JSON numbers convert, strings parse their
/// decimal prefix.
#[inline]
pub fn decode_float<T: FromNumeric>(value: &Value) -> Result<T, ConvertError> {
    Numeric::float(value).map(T::from_numeric)
}

/// Decodes a `bool`.
///
/// Strings accept `true`, `1`, `yes` and `false`, `0`, `no` in any case;
/// numbers are `true` unless their integer part is zero.
///
/// ```
/// use fp_reflect::convert::decode_bool;
/// use serde_json::json;
///
/// assert_eq!(decode_bool(&json!("YES")), Ok(true));
/// assert_eq!(decode_bool(&json!(0)), Ok(false));
/// assert!(decode_bool(&json!("maybe")).is_err());
/// ```
pub fn decode_bool(value: &Value) -> Result<bool, ConvertError> {
    match value {
        Value::Bool(v) => Ok(*v),
        Value::Number(number) => Ok(Numeric::of_number(number).as_i64() != 0),
        Value::String(text) => {
            const TRUE: [&str; 3] = ["true", "1", "yes"];
            const FALSE: [&str; 3] = ["false", "0", "no"];

            if TRUE.iter().any(|word| text.eq_ignore_ascii_case(word)) {
                Ok(true)
            } else if FALSE.iter().any(|word| text.eq_ignore_ascii_case(word)) {
                Ok(false)
            } else {
                Err(ConvertError::InvalidBool {
                    input: text.clone(),
                })
            }
        }
        other => Err(ConvertError::TypeMismatch {
            expected: "a boolean",
            found: ValueKind::of(other),
        }),
    }
}

/// Decodes a `String`. Never fails: non-string values become their compact
/// JSON text.
#[inline]
pub fn decode_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

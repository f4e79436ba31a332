//! Coercion between [`Value`] and native types.
//!
//! ## Menu
//!
//! - [`ConvertError`]: why a decode failed, with field and element context.
//! - [`ValueKind`]: the variant of a [`Value`], for error messages.
//! - [`Numeric`] and the prefix scanners: how numbers are read from strings.
//! - [`decode_bool`], [`decode_integer`], [`decode_float`], [`decode_string`]:
//!   the scalar rules.
//! - [`decode_enum`], [`encode_enum`]: labels and ordinals.
//! - [`expect_object`], [`decode_field`], [`decode_field_or_default`]: record
//!   decoding, used by the derive.
//!
//! Duration parsing lives in [`crate::time`].

// -----------------------------------------------------------------------------
// Modules

mod enums;
mod error;
mod number;
mod scalar;
mod value_kind;

// -----------------------------------------------------------------------------
// Exports

pub use enums::{decode_enum, encode_enum};
pub use error::ConvertError;
pub use number::{Numeric, float_prefix, integer_prefix, parse_float_prefix, parse_integer_prefix};
pub use scalar::{FromNumeric, decode_bool, decode_float, decode_integer, decode_string};
pub use value_kind::ValueKind;

use alloc::string::String;

use serde_json::{Map, Value};

use crate::FromValue;

// -----------------------------------------------------------------------------
// Record helpers

/// Returns the object inside `value`, or a type mismatch.
#[inline]
pub fn expect_object(value: &Value) -> Result<&Map<String, Value>, ConvertError> {
    value.as_object().ok_or_else(|| ConvertError::TypeMismatch {
        expected: "an object",
        found: ValueKind::of(value),
    })
}

/// Decodes the required field `name` of `object`.
pub fn decode_field<T: FromValue>(
    object: &Map<String, Value>,
    name: &'static str,
) -> Result<T, ConvertError> {
    let value = object
        .get(name)
        .ok_or(ConvertError::MissingField { field: name })?;
    T::from_value(value).map_err(|err| err.in_field(name))
}

/// Decodes the field `name` of `object`, or `T::default()` when absent.
pub fn decode_field_or_default<T: FromValue + Default>(
    object: &Map<String, Value>,
    name: &'static str,
) -> Result<T, ConvertError> {
    match object.get(name) {
        Some(value) => T::from_value(value).map_err(|err| err.in_field(name)),
        None => Ok(T::default()),
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use serde_json::json;

    #[test]
    fn fields_by_name() {
        let value = json!({ "count": "3", "label": 7 });
        let object = expect_object(&value).unwrap();

        assert_eq!(decode_field::<u32>(object, "count"), Ok(3));
        assert_eq!(
            decode_field::<u32>(object, "missing"),
            Err(ConvertError::MissingField { field: "missing" })
        );
        assert_eq!(decode_field_or_default::<u32>(object, "missing"), Ok(0));

        let err = decode_field::<Vec<u32>>(object, "label").unwrap_err();
        assert!(matches!(err, ConvertError::Field { field: "label", .. }));
    }

    #[test]
    fn objects_only() {
        let err = expect_object(&json!([1])).unwrap_err();
        assert_eq!(
            err,
            ConvertError::TypeMismatch {
                expected: "an object",
                found: ValueKind::Array,
            }
        );
    }
}

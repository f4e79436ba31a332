use serde_json::Value;

use crate::convert::ConvertError;
use crate::{FromValue, Reflect};

/// Encodes a reflected value as JSON.
///
/// Records become objects with fields in declaration order, lists arrays,
/// enums their registered label (or ordinal), durations `"30s"`-style strings.
///
/// ```
/// use fp_reflect::{derive::Reflect, to_json};
/// use serde_json::json;
///
/// #[derive(Reflect)]
/// struct Item { name: String, value: i32 }
///
/// let item = Item { name: "A".into(), value: 10 };
/// assert_eq!(to_json(&item).to_string(), r#"{"name":"A","value":10}"#);
/// ```
#[inline]
pub fn to_json<T: Reflect>(value: &T) -> Value {
    value.to_value()
}

/// Decodes a new `T` from JSON.
///
/// Every field of a record must be present, except `#[reflect(default)]`
/// fields; extra keys are ignored.
///
/// ```
/// use fp_reflect::{derive::Reflect, from_json};
/// use serde_json::json;
///
/// #[derive(Reflect, Debug, PartialEq)]
/// struct Item { name: String, value: i32 }
///
/// let item: Item = from_json(&json!({ "name": "A", "value": "10", "extra": null })).unwrap();
/// assert_eq!(item, Item { name: "A".into(), value: 10 });
/// ```
#[inline]
pub fn from_json<T: FromValue>(value: &Value) -> Result<T, ConvertError> {
    T::from_value(value)
}

/// Overwrites `target` from JSON. On error `target` is left untouched.
///
/// ```
/// use fp_reflect::from_json_into;
/// use serde_json::json;
///
/// let mut values = vec![1_u8, 2];
/// assert!(from_json_into(&mut values, &json!([3, "x"])).is_err());
/// assert_eq!(values, [1, 2]);
///
/// from_json_into(&mut values, &json!([3, "4", 5.9])).unwrap();
/// assert_eq!(values, [3, 4, 5]);
/// ```
#[inline]
pub fn from_json_into<T: Reflect + ?Sized>(target: &mut T, value: &Value) -> Result<(), ConvertError> {
    target.try_apply(value)
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use serde_json::json;

    use super::*;

    #[test]
    fn round_trip_lists() {
        let names: Vec<String> = vec!["a".into(), "b".into()];
        let back: Vec<String> = from_json(&to_json(&names)).unwrap();
        assert_eq!(back, names);
    }

    #[test]
    fn element_errors_keep_position() {
        let err = from_json::<Vec<Vec<i32>>>(&json!([[1], [2, "x"]])).unwrap_err();
        assert!(matches!(err, ConvertError::Element { index: 1, .. }));
        assert!(matches!(err.innermost(), ConvertError::InvalidNumber { .. }));
    }
}

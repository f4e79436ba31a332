use alloc::string::ToString;

use serde_json::Value;

use crate::convert::{ConvertError, Numeric, ValueKind};
use crate::info::TypePath;
use crate::ops::Enum;
use crate::registry::labels_of;

/// Decodes a unit-only enum.
///
/// A string is matched case-insensitively against the registered labels, then
/// read as an integer ordinal. A number is an ordinal, truncated if
/// fractional. The ordinal must name a variant.
pub fn decode_enum<E: Enum + TypePath>(value: &Value) -> Result<E, ConvertError> {
    let unknown = |input: &dyn ToString| ConvertError::UnknownVariant {
        type_path: E::type_path(),
        input: input.to_string(),
    };

    let ordinal = match value {
        Value::String(text) => {
            let labeled = labels_of::<E>().and_then(|labels| labels.ordinal_of(text));
            match labeled {
                Some(ordinal) => ordinal,
                None => text.trim().parse::<i64>().map_err(|_| unknown(text))?,
            }
        }
        Value::Number(number) => Numeric::of_number(number).as_i64(),
        other => {
            return Err(ConvertError::TypeMismatch {
                expected: "a label or an ordinal",
                found: ValueKind::of(other),
            });
        }
    };

    E::from_ordinal(ordinal).ok_or_else(|| unknown(&ordinal))
}

/// Encodes a unit-only enum as its registered label, or its ordinal when it
/// has none.
pub fn encode_enum<E: Enum>(value: &E) -> Value {
    let ordinal = value.ordinal();
    match labels_of::<E>().and_then(|labels| labels.label_of(ordinal)) {
        Some(label) => Value::from(label),
        None => Value::from(ordinal),
    }
}

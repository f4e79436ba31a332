use alloc::boxed::Box;
use alloc::string::String;

use thiserror::Error;

use crate::convert::ValueKind;

/// A failure to decode a JSON value into a native type.
///
/// Record and sequence decoding wrap the failure of the offending field or
/// element, so the source chain reads from the outside in:
///
/// ```
/// use fp_reflect::{ConvertError, FromValue};
/// use serde_json::json;
///
/// let err = <Vec<u8>>::from_value(&json!([1, "x"])).unwrap_err();
/// assert!(matches!(err, ConvertError::Element { index: 1, .. }));
/// assert_eq!(err.innermost(), &ConvertError::InvalidNumber { input: "x".into() });
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConvertError {
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: ValueKind,
    },
    #[error("`{input}` has no numeric prefix")]
    InvalidNumber { input: String },
    #[error("`{input}` is out of range for `{target}`")]
    OutOfRange { input: String, target: &'static str },
    #[error("`{input}` is not a boolean, expected true/false, 1/0 or yes/no")]
    InvalidBool { input: String },
    #[error("`{input}` is neither a label nor an ordinal of `{type_path}`")]
    UnknownVariant {
        type_path: &'static str,
        input: String,
    },
    #[error("`{input}` is not a duration: {reason}")]
    InvalidDuration { input: String, reason: &'static str },
    #[error("missing field `{field}`")]
    MissingField { field: &'static str },
    #[error("invalid field `{field}`")]
    Field {
        field: &'static str,
        #[source]
        source: Box<ConvertError>,
    },
    #[error("invalid element at index {index}")]
    Element {
        index: usize,
        #[source]
        source: Box<ConvertError>,
    },
}

impl ConvertError {
    /// Wraps `self` as the failure of field `field`.
    #[inline]
    pub fn in_field(self, field: &'static str) -> Self {
        Self::Field {
            field,
            source: Box::new(self),
        }
    }

    /// Wraps `self` as the failure of element `index`.
    #[inline]
    pub fn in_element(self, index: usize) -> Self {
        Self::Element {
            index,
            source: Box::new(self),
        }
    }

    /// Follows [`Field`](Self::Field) and [`Element`](Self::Element) wrappers
    /// down to the failure that caused them.
    pub fn innermost(&self) -> &Self {
        let mut current = self;
        while let Self::Field { source, .. } | Self::Element { source, .. } = current {
            current = &**source;
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn display_nests_context() {
        let err = ConvertError::MissingField { field: "zip_code" }.in_field("address");
        assert_eq!(err.to_string(), "invalid field `address`");
        assert_eq!(err.innermost().to_string(), "missing field `zip_code`");
    }

    #[test]
    fn type_mismatch_names_kinds() {
        let err = ConvertError::TypeMismatch {
            expected: "an array",
            found: ValueKind::Object,
        };
        assert_eq!(err.to_string(), "expected an array, found object");
    }
}

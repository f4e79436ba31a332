use serde_json::Value;

use crate::Reflect;
use crate::convert::ConvertError;

/// Constructs a value from JSON, applying the coercion rules of its type.
///
/// This is the decoding half of the engine; [`Reflect::try_apply`] is usually
/// `*self = Self::from_value(value)?`, which is what makes writes atomic.
///
/// Implemented by `#[derive(Reflect)]`. A record decodes only from an object
/// that holds every field, except fields marked `#[reflect(default)]`.
///
/// # Examples
///
/// ```
/// use fp_reflect::{FromValue, derive::Reflect};
/// use serde_json::json;
///
/// #[derive(Reflect, Debug, PartialEq)]
/// struct Item {
///     name: String,
///     value: i32,
///     #[reflect(default)]
///     tags: Vec<String>,
/// }
///
/// let item = Item::from_value(&json!({ "name": "A", "value": "10" })).unwrap();
/// assert_eq!(item, Item { name: "A".into(), value: 10, tags: vec![] });
///
/// assert!(Item::from_value(&json!({ "name": "A" })).is_err());
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `FromValue` so cannot be decoded from JSON",
    note = "consider annotating `{Self}` with `#[derive(Reflect)]`"
)]
pub trait FromValue: Reflect + Sized {
    /// Decodes `value` into a new `Self`.
    fn from_value(value: &Value) -> Result<Self, ConvertError>;
}

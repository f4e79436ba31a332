use serde_json::Value;

use crate::Reflect;
use crate::access::{PathAccessError, parse_path_enhanced, resolve, simple_steps, write_leaf};

// -----------------------------------------------------------------------------
// Result forms

/// Reads the value at a simple (`.` separated) path.
pub fn try_get_field<T: Reflect>(target: &T, path: &str) -> Result<Value, PathAccessError> {
    resolve(target, &simple_steps(path)).map(|leaf| leaf.to_value())
}

/// Writes the value at a simple (`.` separated) path.
///
/// On error `target` is left unchanged.
pub fn try_set_field<T: Reflect>(target: &mut T, path: &str, value: &Value) -> Result<(), PathAccessError> {
    write_leaf(target, &simple_steps(path), value)
}

/// Reads the value at an enhanced path, see [`parse_path_enhanced`].
pub fn try_get_field_enhanced<T: Reflect>(target: &T, path: &str) -> Result<Value, PathAccessError> {
    resolve(target, &parse_path_enhanced(path)).map(|leaf| leaf.to_value())
}

/// Writes the value at an enhanced path, see [`parse_path_enhanced`].
///
/// On error `target` is left unchanged.
pub fn try_set_field_enhanced<T: Reflect>(
    target: &mut T,
    path: &str,
    value: &Value,
) -> Result<(), PathAccessError> {
    write_leaf(target, &parse_path_enhanced(path), value)
}

// -----------------------------------------------------------------------------
// Boundary forms

#[cold]
fn log_failure(op: &str, type_path: &str, path: &str, err: &PathAccessError) {
    log::debug!("{op}(`{path}`) on `{type_path}` failed: {err}");
}

/// Reads the value at a simple path, or `None` if the path does not resolve.
///
/// # Examples
///
/// ```
/// use fp_reflect::{derive::Reflect, get_field};
/// use serde_json::json;
///
/// #[derive(Reflect)]
/// struct Address { street: String, city: String, zip_code: i32 }
///
/// #[derive(Reflect)]
/// struct Person { name: String, address: Address }
///
/// let person = Person {
///     name: "John".into(),
///     address: Address { street: "123 Main St".into(), city: "Springfield".into(), zip_code: 12345 },
/// };
///
/// assert_eq!(get_field(&person, "address.city"), Some(json!("Springfield")));
/// assert_eq!(get_field(&person, "address.country"), None);
/// assert_eq!(get_field(&person, ""), None);
/// ```
pub fn get_field<T: Reflect>(target: &T, path: &str) -> Option<Value> {
    try_get_field(target, path)
        .inspect_err(|err| log_failure("get_field", target.reflect_type_path(), path, err))
        .ok()
}

/// Writes the value at a simple path. Returns `false`, leaving `target`
/// unchanged, if the path does not resolve or the value does not convert.
///
/// # Examples
///
/// ```
/// use fp_reflect::{derive::Reflect, set_field};
/// use serde_json::json;
///
/// #[derive(Reflect)]
/// struct Address { city: String, zip_code: i32 }
///
/// let mut address = Address { city: "Springfield".into(), zip_code: 12345 };
///
/// assert!(set_field(&mut address, "zip_code", json!("90210")));
/// assert_eq!(address.zip_code, 90210);
///
/// assert!(!set_field(&mut address, "zip_code", json!("unknown")));
/// assert_eq!(address.zip_code, 90210);
/// ```
pub fn set_field<T: Reflect>(target: &mut T, path: &str, value: Value) -> bool {
    try_set_field(target, path, &value)
        .inspect_err(|err| log_failure("set_field", target.reflect_type_path(), path, err))
        .is_ok()
}

/// Reads the value at an enhanced path, or `None` if the path does not
/// resolve.
///
/// ```
/// use fp_reflect::get_field_enhanced;
/// use serde_json::json;
///
/// let matrix = vec![vec![1, 2], vec![3, 4]];
/// assert_eq!(get_field_enhanced(&matrix, "[1][0]"), Some(json!(3)));
/// assert_eq!(get_field_enhanced(&matrix, "[2][0]"), None);
/// ```
pub fn get_field_enhanced<T: Reflect>(target: &T, path: &str) -> Option<Value> {
    try_get_field_enhanced(target, path)
        .inspect_err(|err| log_failure("get_field_enhanced", target.reflect_type_path(), path, err))
        .ok()
}

/// Writes the value at an enhanced path. Returns `false`, leaving `target`
/// unchanged, on failure.
pub fn set_field_enhanced<T: Reflect>(target: &mut T, path: &str, value: Value) -> bool {
    try_set_field_enhanced(target, path, &value)
        .inspect_err(|err| log_failure("set_field_enhanced", target.reflect_type_path(), path, err))
        .is_ok()
}

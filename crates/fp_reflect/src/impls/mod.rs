//! Reflection for foreign types, and the utilities used to implement it.
//!
//! - [`concat`]: string concatenation for generic type paths.
//! - [`NonGenericTypeInfoCell`]: implements [`Typed`] for non-generic types.
//! - [`GenericTypePathCell`]: implements [`TypePath`] for generic types.
//! - [`GenericTypeInfoCell`]: implements [`Typed`] for generic types.
//!
//! ## Implemented Menu
//!
//! - `bool`
//! - `i8`-`i64`, `isize`, `u8`-`u64`, `usize`, `f32`, `f64`
//! - `String`
//! - `serde_json::Value`
//! - `Vec<T>`
//! - `core::time::Duration`
//! - [`DurationOf<U, R>`](crate::time::DurationOf)
//!
//! [`TypePath`]: crate::info::TypePath
//! [`Typed`]: crate::info::Typed

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod duration;
mod scalar;
mod vec;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};

/// Concatenates `parts` into one allocation.
///
/// ```
/// use fp_reflect::impls;
///
/// let s = impls::concat(&["alloc::vec::Vec", "<", "u8", ">"]);
/// assert_eq!(s, "alloc::vec::Vec<u8>");
/// assert_eq!(s.capacity(), 19);
/// ```
#[inline(never)]
pub fn concat(parts: &[&str]) -> alloc::string::String {
    let len = parts.iter().map(|part| part.len()).sum();
    let mut out = alloc::string::String::with_capacity(len);
    for part in parts {
        out.push_str(part);
    }
    out
}

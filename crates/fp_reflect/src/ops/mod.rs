//! Kind-specific views of reflected values.
//!
//! ## Menu
//!
//! - [`Struct`]: a record; fields by name or declaration index.
//! - [`List`]: a sequence; elements by index.
//! - [`Enum`]: a unit-only enum; discriminant and variant name.
//! - [`ReflectRef`] / [`ReflectMut`]: the view of a `dyn Reflect`, obtained from
//!   [`Reflect::reflect_ref`] and [`Reflect::reflect_mut`].
//!
//! Durations and scalars have no dedicated view and come back as `Opaque`.
//!
//! [`Reflect::reflect_ref`]: crate::Reflect::reflect_ref
//! [`Reflect::reflect_mut`]: crate::Reflect::reflect_mut

// -----------------------------------------------------------------------------
// Modules

mod enum_ops;
mod kind;
mod list_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use enum_ops::Enum;
pub use kind::{ReflectMut, ReflectRef};
pub use list_ops::List;
pub use struct_ops::{FieldIter, Struct, struct_to_value};

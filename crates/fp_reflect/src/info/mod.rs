//! Compile-time type information: the field catalog behind every path.
//!
//! ## Menu
//!
//! - [`TypePath`]: a type's full path and short name, without leading `::`.
//! - [`DynamicTypePath`]: object-safe access to `TypePath`.
//! - [`Type`]: a `TypeId` plus the `TypePath` functions of one type.
//!
//! - [`TypeInfo`]: the shape of a type, one of:
//!     - [`StructInfo`]: a record; ordered [`NamedField`]s and where their names came from.
//!     - [`ListInfo`]: a sequence (`Vec<T>`) and its item type.
//!     - [`EnumInfo`]: a unit-only enum; variant names and ordinals.
//!     - [`DurationInfo`]: a duration quantity; its unit and whether the count is integral.
//!     - [`OpaqueInfo`]: a leaf value; its [`ScalarKind`].
//!
//! - [`ReflectKind`]: the kind of a `TypeInfo`, without payload.
//! - [`NameSource`]: whether record field names are native, custom, or placeholders.
//!
//! - [`Typed`]: a trait for obtaining `&'static TypeInfo`.
//! - [`DynamicTyped`]: object-safe access to `Typed`.

// -----------------------------------------------------------------------------
// Modules

mod duration_info;
mod enum_info;
mod field_info;
mod list_info;
mod opaque_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Exports

pub use duration_info::DurationInfo;
pub use enum_info::{EnumInfo, VariantInfo};
pub use field_info::NamedField;
pub use list_info::ListInfo;
pub use opaque_info::{OpaqueInfo, ScalarKind};
pub use struct_info::{NameSource, StructInfo};
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath};
pub use typed::{DynamicTyped, Typed};

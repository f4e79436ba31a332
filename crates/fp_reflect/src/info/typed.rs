use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// Static access to a type's [`TypeInfo`].
///
/// Implementations build the info once and keep it in a static cell, see
/// [`NonGenericTypeInfoCell`] and [`GenericTypeInfoCell`].
///
/// # Examples
///
/// ```
/// use fp_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Point { x: i32, y: i32 }
///
/// let info = Point::type_info().as_struct().unwrap();
/// assert_eq!(info.field_names().collect::<Vec<_>>(), ["x", "y"]);
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: TypePath {
    /// Returns the compile-time info of the type.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Dynamic dispatch for [`Typed`].
///
/// Blanket implemented for every `Typed` type.
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}

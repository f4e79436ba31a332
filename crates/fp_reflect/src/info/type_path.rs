use core::any::{Any, TypeId};
use core::fmt;

// -----------------------------------------------------------------------------
// TypePath

/// Stable, human readable names for a type.
///
/// Unlike [`core::any::type_name`], the returned strings are part of the
/// type's contract: they show up in error messages and in
/// [`reflection_info`](crate::reflection_info).
///
/// - [`type_path`](TypePath::type_path): full path, e.g. `my_app::config::Config`.
/// - [`type_name`](TypePath::type_name): short name, e.g. `Config` or `Vec<u8>`.
///
/// Implemented by `#[derive(Reflect)]`.
///
/// # Examples
///
/// ```
/// use fp_reflect::info::TypePath;
///
/// assert_eq!(<Vec<u32> as TypePath>::type_name(), "Vec<u32>");
/// assert_eq!(<String as TypePath>::type_path(), "alloc::string::String");
/// ```
pub trait TypePath: 'static {
    /// Returns the full path of the type.
    fn type_path() -> &'static str;

    /// Returns the type name without its module path.
    fn type_name() -> &'static str;
}

/// Dynamic dispatch for [`TypePath`].
///
/// Blanket implemented for every `TypePath` type.
pub trait DynamicTypePath {
    /// See [`TypePath::type_path`].
    fn reflect_type_path(&self) -> &'static str;

    /// See [`TypePath::type_name`].
    fn reflect_type_name(&self) -> &'static str;
}

impl<T: TypePath> DynamicTypePath for T {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        Self::type_path()
    }

    #[inline]
    fn reflect_type_name(&self) -> &'static str {
        Self::type_name()
    }
}

// -----------------------------------------------------------------------------
// Type

/// A [`TypeId`] together with the [`TypePath`] functions of the same type.
#[derive(Clone, Copy)]
pub struct Type {
    id: TypeId,
    type_path: fn() -> &'static str,
    type_name: fn() -> &'static str,
}

impl Type {
    /// Creates the `Type` of `T`.
    #[inline]
    pub fn of<T: TypePath>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            type_path: T::type_path,
            type_name: T::type_name,
        }
    }

    #[inline]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    #[inline]
    pub fn path(&self) -> &'static str {
        (self.type_path)()
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        (self.type_name)()
    }

    /// Returns `true` if this is the `Type` of `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

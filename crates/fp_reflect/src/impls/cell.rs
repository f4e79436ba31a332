//! Static storage for type information.
//!
//! [`Typed::type_info`] and [`TypePath::type_path`] hand out `'static`
//! references, so the value is built on first call and kept in a `static`
//! inside the function.
//!
//! - Non-generic types: [`NonGenericTypeInfoCell`], a thin [`OnceLock`].
//!   Type paths of such types are string literals and need no cell.
//! - Generic types: a `static` in a generic function is shared by every
//!   instantiation, so [`GenericTypeInfoCell`] and [`GenericTypePathCell`]
//!   key their entries by [`TypeId`] behind an [`RwLock`].
//!
//! [`Typed::type_info`]: crate::info::Typed::type_info
//! [`TypePath::type_path`]: crate::info::TypePath::type_path

use alloc::boxed::Box;
use alloc::string::String;
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use fp_utils::TypeIdMap;

use crate::info::TypeInfo;

mod sealed {
    use alloc::string::String;

    use crate::info::TypeInfo;

    pub trait CellValue: Send + Sync + 'static {}

    impl CellValue for String {}
    impl CellValue for TypeInfo {}
}

use sealed::CellValue;

// -----------------------------------------------------------------------------
// NonGenericTypeCell

/// A once-initialized cell for a non-generic type.
pub struct NonGenericTypeCell<T: CellValue>(OnceLock<T>);

/// Holds the [`TypeInfo`] of a non-generic type.
///
/// ```
/// use fp_reflect::impls::NonGenericTypeInfoCell;
/// use fp_reflect::info::{OpaqueInfo, ScalarKind, TypeInfo};
///
/// fn info() -> &'static TypeInfo {
///     static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///     CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<u16>(ScalarKind::Integer)))
/// }
///
/// assert!(core::ptr::eq(info(), info()));
/// assert_eq!(info().type_path(), "u16");
/// ```
pub type NonGenericTypeInfoCell = NonGenericTypeCell<TypeInfo>;

impl<T: CellValue> NonGenericTypeCell<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored value, building it with `f` on first call.
    #[inline]
    pub fn get_or_init(&self, f: impl FnOnce() -> T) -> &T {
        self.0.get_or_init(f)
    }
}

impl<T: CellValue> Default for NonGenericTypeCell<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// GenericTypeCell

/// A per-instantiation cell for a generic type.
///
/// Values are leaked on insertion and live for the rest of the program.
pub struct GenericTypeCell<T: CellValue>(RwLock<TypeIdMap<&'static T>>);

/// Holds the [`TypeInfo`] of each instantiation of a generic type.
///
/// ```
/// use fp_reflect::impls::GenericTypeInfoCell;
/// use fp_reflect::info::{ListInfo, TypeInfo, Typed};
///
/// fn info_of<T: Typed>() -> &'static TypeInfo {
///     static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
///     CELL.get_or_insert::<Vec<T>>(|| TypeInfo::List(ListInfo::new::<Vec<T>, T>()))
/// }
///
/// assert!(info_of::<u8>().type_is::<Vec<u8>>());
/// assert!(info_of::<String>().type_is::<Vec<String>>());
/// ```
pub type GenericTypeInfoCell = GenericTypeCell<TypeInfo>;

/// Holds the type path (or name) of each instantiation of a generic type.
///
/// ```
/// use fp_reflect::impls::{GenericTypePathCell, concat};
/// use fp_reflect::info::TypePath;
///
/// fn path_of<T: TypePath>() -> &'static str {
///     static CELL: GenericTypePathCell = GenericTypePathCell::new();
///     CELL.get_or_insert::<Option<T>>(|| concat(&["Option<", T::type_path(), ">"]))
/// }
///
/// assert_eq!(path_of::<i32>(), "Option<i32>");
/// assert_eq!(path_of::<bool>(), "Option<bool>");
/// ```
pub type GenericTypePathCell = GenericTypeCell<String>;

impl<T: CellValue> GenericTypeCell<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the value stored for `G`, building it with `f` on first call.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> T) -> &T {
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    // Non-generic over `G` so each cell compiles the slow path once.
    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> T) -> &T {
        let cached = self
            .0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied();

        match cached {
            Some(value) => value,
            // `f` runs without the lock held: it may read other cells, this
            // one included.
            None => {
                let value = f();
                let mut map = self.0.write().unwrap_or_else(PoisonError::into_inner);
                *map.get_or_insert(type_id, || &*Box::leak(Box::new(value)))
            }
        }
    }
}

impl<T: CellValue> Default for GenericTypeCell<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

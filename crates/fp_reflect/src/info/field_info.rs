use core::any::{Any, TypeId};

use crate::info::{TypeInfo, Typed};

// -----------------------------------------------------------------------------
// NamedField

/// One entry of a record's field catalog.
#[derive(Clone, Debug)]
pub struct NamedField {
    name: &'static str,
    ty_id: TypeId,
    // Built on first access; a function pointer also keeps self-referential
    // records (`struct Node { children: Vec<Node> }`) finite.
    type_info: fn() -> &'static TypeInfo,
    has_default: bool,
}

impl NamedField {
    /// Creates a field named `name` of type `T`.
    #[inline]
    pub fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            ty_id: TypeId::of::<T>(),
            type_info: T::type_info,
            has_default: false,
        }
    }

    /// Marks whether the field falls back to `Default` when absent from an
    /// incoming object.
    #[inline]
    pub const fn with_default(mut self, has_default: bool) -> Self {
        self.has_default = has_default;
        self
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    #[inline]
    pub const fn has_default(&self) -> bool {
        self.has_default
    }
}

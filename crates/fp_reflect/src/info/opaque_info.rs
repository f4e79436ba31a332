use crate::info::{Type, TypePath};

/// The scalar class of an opaque leaf type.
///
/// Drives schema rendering and the coercion rule that applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    Integer,
    Float,
    String,
    /// A leaf with no scalar mapping.
    Other,
}

/// Information of a leaf type that cannot be navigated into.
#[derive(Clone, Debug)]
pub struct OpaqueInfo {
    ty: Type,
    scalar: ScalarKind,
}

impl OpaqueInfo {
    #[inline]
    pub fn new<T: TypePath>(scalar: ScalarKind) -> Self {
        Self {
            ty: Type::of::<T>(),
            scalar,
        }
    }

    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    #[inline]
    pub const fn scalar(&self) -> ScalarKind {
        self.scalar
    }
}

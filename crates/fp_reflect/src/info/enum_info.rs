use crate::info::{Type, TypePath};

// -----------------------------------------------------------------------------
// VariantInfo

/// A unit variant: its identifier and its discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariantInfo {
    name: &'static str,
    ordinal: i64,
}

impl VariantInfo {
    #[inline]
    pub const fn new(name: &'static str, ordinal: i64) -> Self {
        Self { name, ordinal }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn ordinal(&self) -> i64 {
        self.ordinal
    }
}

// -----------------------------------------------------------------------------
// EnumInfo

/// Information of a unit-only enum.
///
/// Labels are not part of the type info; they live in the process-wide
/// [label table](crate::registry).
///
/// # Examples
///
/// ```
/// use fp_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect, Clone, Copy)]
/// enum Priority { Low = 1, Medium = 5, High = 10 }
///
/// let info = Priority::type_info().as_enum().unwrap();
/// assert_eq!(info.variant_of(5).map(|v| v.name()), Some("Medium"));
/// assert!(info.variant_of(2).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct EnumInfo {
    ty: Type,
    variants: &'static [VariantInfo],
}

impl EnumInfo {
    #[inline]
    pub fn new<T: TypePath>(variants: &'static [VariantInfo]) -> Self {
        Self {
            ty: Type::of::<T>(),
            variants,
        }
    }

    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    #[inline]
    pub const fn variants(&self) -> &'static [VariantInfo] {
        self.variants
    }

    #[inline]
    pub const fn variant_len(&self) -> usize {
        self.variants.len()
    }

    /// Returns the variant with discriminant `ordinal`.
    pub fn variant_of(&self, ordinal: i64) -> Option<&'static VariantInfo> {
        self.variants.iter().find(|v| v.ordinal == ordinal)
    }

    /// Returns the variant whose identifier is `name` (case-sensitive).
    pub fn variant_named(&self, name: &str) -> Option<&'static VariantInfo> {
        self.variants.iter().find(|v| v.name == name)
    }
}

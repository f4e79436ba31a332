use alloc::boxed::Box;
use core::fmt;

use fp_utils::hash::HashMap;

use crate::info::{NamedField, Type, TypePath};

// -----------------------------------------------------------------------------
// NameSource

/// Where the field names of a [`StructInfo`] come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameSource {
    /// Identifiers of a struct with named fields.
    Native,
    /// A `#[reflect(field_names(..))]` list whose length matches the field count.
    Custom,
    /// `field_0`, `field_1`, ... for tuple structs, or when a custom list does
    /// not match the field count.
    Placeholder,
}

impl NameSource {
    /// Lowercase name, as reported by [`reflection_info`](crate::reflection_info).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Custom => "custom",
            Self::Placeholder => "placeholder",
        }
    }
}

impl fmt::Display for NameSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// -----------------------------------------------------------------------------
// StructInfo

/// The field catalog of a record type.
///
/// Fields keep declaration order; name lookup is case-sensitive.
///
/// # Examples
///
/// ```
/// use fp_reflect::{derive::Reflect, info::{Typed, NameSource}};
///
/// #[derive(Reflect)]
/// struct Rgb(u8, u8, u8);
///
/// let info = Rgb::type_info().as_struct().unwrap();
/// assert_eq!(info.name_source(), NameSource::Placeholder);
/// assert_eq!(info.index_of("field_2"), Some(2));
/// assert!(info.field("Field_2").is_none());
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[NamedField]>,
    indices: HashMap<&'static str, usize>,
    name_source: NameSource,
}

impl StructInfo {
    /// Creates the catalog of `T` from its fields in declaration order.
    pub fn new<T: TypePath>(fields: &[NamedField], name_source: NameSource) -> Self {
        let indices = fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.name(), index))
            .collect();

        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
            indices,
            name_source,
        }
    }

    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the field named `name`, if any.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.get(self.index_of(name)?)
    }

    /// Returns the field at `index` in declaration order.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Returns the declaration index of the field named `name`.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        self.fields.iter()
    }

    #[inline]
    pub fn field_names(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.fields.iter().map(NamedField::name)
    }

    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub const fn name_source(&self) -> NameSource {
        self.name_source
    }
}

use serde_json::{Map, Value};

use crate::Reflect;

// -----------------------------------------------------------------------------
// Struct

/// A record with an ordered, fixed set of named fields.
///
/// Implemented by `#[derive(Reflect)]` for structs with named fields, tuple
/// structs and unit structs. Names follow the record's
/// [catalog](crate::info::StructInfo), so tuple fields answer to `field_0`,
/// `field_1`, ...
///
/// # Examples
///
/// ```
/// use fp_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Item { name: String, value: i32 }
///
/// let mut item = Item { name: "Item A".into(), value: 10 };
///
/// assert_eq!(item.field_len(), 2);
/// assert_eq!(item.name_at(1), Some("value"));
///
/// *item.field_mut("value").unwrap().downcast_mut::<i32>().unwrap() = 20;
/// assert_eq!(item.value, 20);
/// ```
pub trait Struct: Reflect {
    /// Returns the field named `name`.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns the field named `name` mutably.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    /// Returns the field at declaration index `index`.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the field at declaration index `index` mutably.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the name of the field at `index`.
    fn name_at(&self, index: usize) -> Option<&'static str>;

    fn field_len(&self) -> usize;
}

impl dyn Struct {
    /// Iterates `(name, value)` pairs in declaration order.
    #[inline]
    pub fn iter_fields(&self) -> FieldIter<'_> {
        FieldIter::new(self)
    }
}

// -----------------------------------------------------------------------------
// FieldIter

/// Iterator over the fields of a [`Struct`], see [`iter_fields`](dyn Struct::iter_fields).
pub struct FieldIter<'a> {
    target: &'a dyn Struct,
    index: usize,
}

impl<'a> FieldIter<'a> {
    #[inline]
    pub fn new(target: &'a dyn Struct) -> Self {
        Self { target, index: 0 }
    }
}

impl<'a> Iterator for FieldIter<'a> {
    type Item = (&'static str, &'a dyn Reflect);

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.target.name_at(self.index)?;
        let value = self.target.field_at(self.index)?;
        self.index += 1;
        Some((name, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.target.field_len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FieldIter<'_> {}

// -----------------------------------------------------------------------------
// Encoding

/// Encodes a record as an object, fields in declaration order.
///
/// Used by the derive to implement [`Reflect::to_value`].
pub fn struct_to_value(target: &dyn Struct) -> Value {
    let mut object = Map::with_capacity(target.field_len());
    for (name, value) in target.iter_fields() {
        object.insert(name.into(), value.to_value());
    }
    Value::Object(object)
}

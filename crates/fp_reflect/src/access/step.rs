use alloc::borrow::Cow;
use core::fmt;

use crate::Reflect;
use crate::access::{AccessError, AccessErrorKind};
use crate::info::ReflectKind;
use crate::ops::{ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// PathStep

/// One step of a path: a field of a record or an element of a sequence.
///
/// # Examples
///
/// ```
/// use fp_reflect::{derive::Reflect, PathStep};
///
/// #[derive(Reflect)]
/// struct Item { name: String, value: i32 }
///
/// let items = vec![Item { name: "A".into(), value: 10 }];
///
/// let first = PathStep::Index(0).access(&items, 0).unwrap();
/// let value = PathStep::Field("value".into()).access(first, 1).unwrap();
/// assert_eq!(value.downcast_ref::<i32>(), Some(&10));
///
/// assert!(PathStep::Index(1).access(&items, 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PathStep<'a> {
    /// A field of a record, by name.
    Field(Cow<'a, str>),
    /// An element of a sequence, by position.
    Index(usize),
}

impl fmt::Display for PathStep<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.write_str(name),
            Self::Index(index) => write!(f, "[{index}]"),
        }
    }
}

macro_rules! invalid_kind {
    ($expected:ident, $actual:expr) => {
        AccessErrorKind::IncompatibleKinds {
            expected: ReflectKind::$expected,
            actual: $actual,
        }
    };
}

impl PathStep<'_> {
    /// Converts this into an owned step.
    #[inline]
    pub fn into_owned(self) -> PathStep<'static> {
        match self {
            Self::Field(name) => PathStep::Field(Cow::Owned(name.into_owned())),
            Self::Index(index) => PathStep::Index(index),
        }
    }

    /// Returns the field name, or `None` for an index step.
    #[inline]
    pub fn as_field(&self) -> Option<&str> {
        match self {
            Self::Field(name) => Some(&**name),
            Self::Index(_) => None,
        }
    }

    /// Takes this step from `base`.
    ///
    /// `depth` is the position of the step in its path, reported on error.
    pub fn access<'r>(&self, base: &'r dyn Reflect, depth: usize) -> Result<&'r dyn Reflect, AccessError> {
        let res = match (self, base.reflect_ref()) {
            (Self::Field(name), ReflectRef::Struct(record)) => {
                record.field(name).ok_or(AccessErrorKind::MissingField {
                    type_path: base.reflect_type_path(),
                })
            }
            (Self::Field(_), actual) => Err(invalid_kind!(Struct, actual.kind())),
            (&Self::Index(index), ReflectRef::List(list)) => list
                .get(index)
                .ok_or(AccessErrorKind::IndexOutOfRange { len: list.len() }),
            (Self::Index(_), actual) => Err(invalid_kind!(List, actual.kind())),
        };

        res.map_err(|kind| AccessError::new(kind, self.clone().into_owned(), depth))
    }

    /// Takes this step from `base` mutably.
    pub fn access_mut<'r>(
        &self,
        base: &'r mut dyn Reflect,
        depth: usize,
    ) -> Result<&'r mut dyn Reflect, AccessError> {
        let type_path = base.reflect_type_path();

        let res = match (self, base.reflect_mut()) {
            (Self::Field(name), ReflectMut::Struct(record)) => record
                .field_mut(name)
                .ok_or(AccessErrorKind::MissingField { type_path }),
            (Self::Field(_), actual) => Err(invalid_kind!(Struct, actual.kind())),
            (&Self::Index(index), ReflectMut::List(list)) => {
                let len = list.len();
                list.get_mut(index)
                    .ok_or(AccessErrorKind::IndexOutOfRange { len })
            }
            (Self::Index(_), actual) => Err(invalid_kind!(List, actual.kind())),
        };

        res.map_err(|kind| AccessError::new(kind, self.clone().into_owned(), depth))
    }
}

impl From<usize> for PathStep<'_> {
    #[inline]
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl<'a> From<&'a str> for PathStep<'a> {
    #[inline]
    fn from(name: &'a str) -> Self {
        Self::Field(Cow::Borrowed(name))
    }
}

use alloc::boxed::Box;
use core::fmt;

use serde_json::Value;

use crate::Reflect;
use crate::access::{PathAccessError, PathStep, parse_path_enhanced, simple_steps};
use crate::info::TypePath;

// -----------------------------------------------------------------------------
// Navigation

/// Walks `steps` from `base`. An empty path is an error.
pub(crate) fn resolve<'r>(
    base: &'r dyn Reflect,
    steps: &[PathStep<'_>],
) -> Result<&'r dyn Reflect, PathAccessError> {
    if steps.is_empty() {
        return Err(PathAccessError::EmptyPath);
    }

    let mut it = base;
    for (depth, step) in steps.iter().enumerate() {
        it = step.access(it, depth)?;

        #[cfg(all(feature = "debug", debug_assertions))]
        log::trace!("step {depth} `{step}` reached `{}`", it.reflect_type_path());
    }
    Ok(it)
}

/// Walks `steps` from `base` mutably. An empty path is an error.
pub(crate) fn resolve_mut<'r>(
    base: &'r mut dyn Reflect,
    steps: &[PathStep<'_>],
) -> Result<&'r mut dyn Reflect, PathAccessError> {
    if steps.is_empty() {
        return Err(PathAccessError::EmptyPath);
    }

    let mut it = base;
    for (depth, step) in steps.iter().enumerate() {
        it = step.access_mut(it, depth)?;

        #[cfg(all(feature = "debug", debug_assertions))]
        log::trace!("step {depth} `{step}` reached `{}`", it.reflect_type_path());
    }
    Ok(it)
}

/// Decodes `value` into the leaf at the end of `steps`.
///
/// Only the leaf is touched, and only if decoding succeeds.
pub(crate) fn write_leaf(
    base: &mut dyn Reflect,
    steps: &[PathStep<'_>],
    value: &Value,
) -> Result<(), PathAccessError> {
    resolve_mut(base, steps)?.try_apply(value)?;
    Ok(())
}

// -----------------------------------------------------------------------------
// PathAccessor

/// A parsed, reusable path.
///
/// Parse once, then read or write any number of values of the same shape.
///
/// # Examples
///
/// ```
/// use fp_reflect::{derive::Reflect, access::PathAccessor};
/// use serde_json::json;
///
/// #[derive(Reflect)]
/// struct Item { name: String, value: i32 }
///
/// #[derive(Reflect)]
/// struct ItemList { items: Vec<Item>, description: String }
///
/// let mut list = ItemList {
///     items: vec![
///         Item { name: "Item A".into(), value: 10 },
///         Item { name: "Item B".into(), value: 20 },
///     ],
///     description: "Test list".into(),
/// };
///
/// let accessor = PathAccessor::parse_enhanced("items[1].value");
/// assert_eq!(accessor.get_value(&list).unwrap(), json!(20));
///
/// accessor.set_value(&mut list, &json!("42")).unwrap();
/// assert_eq!(list.items[1].value, 42);
/// assert_eq!(*accessor.access_as::<i32>(&list).unwrap(), 42);
///
/// assert!(PathAccessor::parse_enhanced("items[5].value").get_value(&list).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathAccessor(Box<[PathStep<'static>]>);

impl PathAccessor {
    /// Parses a simple path, `.` separated field names.
    pub fn parse(path: &str) -> Self {
        Self::from_steps(simple_steps(path))
    }

    /// Parses an enhanced path, field names and `[n]` indices.
    ///
    /// See [`parse_path_enhanced`].
    pub fn parse_enhanced(path: &str) -> Self {
        Self::from_steps(parse_path_enhanced(path))
    }

    /// Builds an accessor from explicit steps.
    pub fn from_steps<'a>(steps: impl IntoIterator<Item = PathStep<'a>>) -> Self {
        Self(steps.into_iter().map(PathStep::into_owned).collect())
    }

    #[inline]
    pub fn steps(&self) -> &[PathStep<'static>] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// An empty accessor resolves nothing; every access fails.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a reference to the value at the end of the path.
    #[inline]
    pub fn access<'r>(&self, base: &'r dyn Reflect) -> Result<&'r dyn Reflect, PathAccessError> {
        resolve(base, &self.0)
    }

    /// Returns a mutable reference to the value at the end of the path.
    #[inline]
    pub fn access_mut<'r>(
        &self,
        base: &'r mut dyn Reflect,
    ) -> Result<&'r mut dyn Reflect, PathAccessError> {
        resolve_mut(base, &self.0)
    }

    /// Returns a typed reference to the value at the end of the path.
    pub fn access_as<'r, T: Reflect + TypePath>(
        &self,
        base: &'r dyn Reflect,
    ) -> Result<&'r T, PathAccessError> {
        self.access(base)?
            .downcast_ref::<T>()
            .ok_or(PathAccessError::InvalidDowncast {
                expected: T::type_path(),
            })
    }

    /// Encodes the value at the end of the path.
    #[inline]
    pub fn get_value(&self, base: &dyn Reflect) -> Result<Value, PathAccessError> {
        self.access(base).map(|leaf| leaf.to_value())
    }

    /// Decodes `value` into the value at the end of the path.
    ///
    /// On error `base` is left unchanged.
    #[inline]
    pub fn set_value(&self, base: &mut dyn Reflect, value: &Value) -> Result<(), PathAccessError> {
        write_leaf(base, &self.0, value)
    }
}

impl fmt::Display for PathAccessor {
    /// Renders the path in the enhanced dialect.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, step) in self.0.iter().enumerate() {
            if index > 0 && matches!(step, PathStep::Field(_)) {
                f.write_str(".")?;
            }
            fmt::Display::fmt(step, f)?;
        }
        Ok(())
    }
}

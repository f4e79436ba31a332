use crate::Reflect;
use crate::access::{PathAccessError, parse_path_enhanced, resolve, resolve_mut};
use crate::info::TypePath;

/// One-off path access on any reflected value.
///
/// The path is parsed in the enhanced dialect on every call. To run the same
/// path repeatedly, parse it once into a [`PathAccessor`].
///
/// # Examples
///
/// ```
/// use fp_reflect::{derive::Reflect, access::ReflectPathAccess};
///
/// #[derive(Reflect)]
/// struct Tags { names: Vec<String>, primary: u32 }
///
/// let mut tags = Tags { names: vec!["a".into(), "b".into()], primary: 1 };
///
/// assert_eq!(tags.access_as::<String>("names[1]").unwrap(), "b");
/// *tags.access_mut_as::<u32>("primary").unwrap() = 0;
/// assert_eq!(tags.primary, 0);
///
/// assert!(tags.access_as::<u64>("primary").is_err());
/// ```
///
/// [`PathAccessor`]: crate::access::PathAccessor
pub trait ReflectPathAccess {
    /// Returns a reference to the value at `path`.
    fn access(&self, path: &str) -> Result<&dyn Reflect, PathAccessError>;

    /// Returns a mutable reference to the value at `path`.
    fn access_mut(&mut self, path: &str) -> Result<&mut dyn Reflect, PathAccessError>;

    /// Returns a typed reference to the value at `path`.
    fn access_as<T: Reflect + TypePath>(&self, path: &str) -> Result<&T, PathAccessError>;

    /// Returns a mutable typed reference to the value at `path`.
    fn access_mut_as<T: Reflect + TypePath>(&mut self, path: &str) -> Result<&mut T, PathAccessError>;
}

impl ReflectPathAccess for dyn Reflect {
    #[inline(never)]
    fn access(&self, path: &str) -> Result<&dyn Reflect, PathAccessError> {
        resolve(self, &parse_path_enhanced(path))
    }

    #[inline(never)]
    fn access_mut(&mut self, path: &str) -> Result<&mut dyn Reflect, PathAccessError> {
        resolve_mut(self, &parse_path_enhanced(path))
    }

    fn access_as<T: Reflect + TypePath>(&self, path: &str) -> Result<&T, PathAccessError> {
        // `access` stays monomorphic; only the downcast depends on `T`.
        ReflectPathAccess::access(self, path)?
            .downcast_ref::<T>()
            .ok_or(PathAccessError::InvalidDowncast {
                expected: T::type_path(),
            })
    }

    fn access_mut_as<T: Reflect + TypePath>(&mut self, path: &str) -> Result<&mut T, PathAccessError> {
        ReflectPathAccess::access_mut(self, path)?
            .downcast_mut::<T>()
            .ok_or(PathAccessError::InvalidDowncast {
                expected: T::type_path(),
            })
    }
}

impl<P: Sized + Reflect> ReflectPathAccess for P {
    #[inline(always)]
    fn access(&self, path: &str) -> Result<&dyn Reflect, PathAccessError> {
        <dyn Reflect as ReflectPathAccess>::access(self, path)
    }

    #[inline(always)]
    fn access_mut(&mut self, path: &str) -> Result<&mut dyn Reflect, PathAccessError> {
        <dyn Reflect as ReflectPathAccess>::access_mut(self, path)
    }

    #[inline(always)]
    fn access_as<T: Reflect + TypePath>(&self, path: &str) -> Result<&T, PathAccessError> {
        <dyn Reflect as ReflectPathAccess>::access_as::<T>(self, path)
    }

    #[inline(always)]
    fn access_mut_as<T: Reflect + TypePath>(&mut self, path: &str) -> Result<&mut T, PathAccessError> {
        <dyn Reflect as ReflectPathAccess>::access_mut_as::<T>(self, path)
    }
}

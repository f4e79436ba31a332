use core::any::{Any, TypeId};
use core::fmt;

use serde_json::Value;

use crate::convert::ConvertError;
use crate::info::{DynamicTypePath, DynamicTyped, ReflectKind};
use crate::ops::{ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait of [`fp_reflect`]: a value that can be navigated,
/// encoded to a [`Value`], and overwritten from one.
///
/// # Recommendations
///
/// Use [the derive macro](crate::derive::Reflect) rather than implementing this
/// by hand. It also implements [`Struct`] or [`Enum`], [`Typed`], [`TypePath`]
/// and [`FromValue`].
///
/// # Encoding and decoding
///
/// - [`to_value`](Reflect::to_value) renders the value as JSON. Records become
///   objects in declaration order; enums their registered label; durations a
///   `"30s"`-style string.
/// - [`try_apply`](Reflect::try_apply) overwrites the value from JSON,
///   coercing where the type allows (`"42"` into an integer, `"yes"` into a
///   `bool`). On error the value is left untouched.
///
/// ```
/// use fp_reflect::Reflect;
/// use serde_json::json;
///
/// let mut port: u16 = 80;
/// port.try_apply(&json!("8080")).unwrap();
/// assert_eq!(port, 8080);
///
/// assert!(port.try_apply(&json!("http")).is_err());
/// assert_eq!(port.to_value(), json!(8080));
/// ```
///
/// # Type identification
///
/// [`Any::type_id`] on a `Box<dyn Reflect>` names the box. Use
/// [`Reflect::ty_id`] or the downcast helpers on `dyn Reflect` instead.
///
/// [`fp_reflect`]: crate
/// [`Struct`]: crate::ops::Struct
/// [`Enum`]: crate::ops::Enum
/// [`Typed`]: crate::info::Typed
/// [`TypePath`]: crate::info::TypePath
/// [`FromValue`]: crate::FromValue
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    /// Casts this type to a reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a mutable reflected value.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Returns the [`TypeId`] of the underlying type.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn reflect_kind(&self) -> ReflectKind;

    fn reflect_ref(&self) -> ReflectRef<'_>;

    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Encodes the value as JSON.
    fn to_value(&self) -> Value;

    /// Overwrites the value from JSON.
    ///
    /// Either the whole value is replaced or, on error, nothing changes.
    fn try_apply(&mut self, value: &Value) -> Result<(), ConvertError>;
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is a `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts to `&T`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref::<T>()
    }

    /// Downcasts to `&mut T`.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        let any: &mut dyn Any = self;
        any.downcast_mut::<T>()
    }
}

impl fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.reflect_type_name(), self.to_value())
    }
}

use alloc::string::String;

use serde_json::Value;

use crate::convert::{ConvertError, decode_bool, decode_float, decode_integer, decode_string};
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, ReflectKind, ScalarKind, TypeInfo, TypePath, Typed};
use crate::ops::{ReflectMut, ReflectRef};
use crate::{FromValue, Reflect};

macro_rules! impl_reflect_scalar {
    (
        $ty:ty, $path:expr, $name:expr, $scalar:ident,
        decode: |$value:ident| $decode:expr,
        encode: |$this:ident| $encode:expr $(,)?
    ) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<$ty>(ScalarKind::$scalar)))
            }
        }

        impl Reflect for $ty {
            #[inline]
            fn reflect_kind(&self) -> ReflectKind {
                ReflectKind::Opaque
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Opaque(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::Opaque(self)
            }

            fn to_value(&self) -> Value {
                let $this = self;
                $encode
            }

            fn try_apply(&mut self, value: &Value) -> Result<(), ConvertError> {
                *self = <$ty as FromValue>::from_value(value)?;
                Ok(())
            }
        }

        impl FromValue for $ty {
            fn from_value($value: &Value) -> Result<Self, ConvertError> {
                $decode
            }
        }
    };
}

macro_rules! impl_reflect_integer {
    ($($ty:ident),*) => {$(
        impl_reflect_scalar!(
            $ty, stringify!($ty), stringify!($ty), Integer,
            decode: |value| decode_integer::<$ty>(value, stringify!($ty)),
            encode: |this| Value::from(*this),
        );
    )*};
}

macro_rules! impl_reflect_float {
    ($($ty:ident),*) => {$(
        impl_reflect_scalar!(
            $ty, stringify!($ty), stringify!($ty), Float,
            decode: |value| decode_float::<$ty>(value),
            // Non-finite floats have no JSON form and encode as `null`.
            encode: |this| Value::from(*this),
        );
    )*};
}

impl_reflect_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_reflect_float!(f32, f64);

impl_reflect_scalar!(
    bool, "bool", "bool", Bool,
    decode: |value| decode_bool(value),
    encode: |this| Value::Bool(*this),
);

impl_reflect_scalar!(
    String, "alloc::string::String", "String", String,
    decode: |value| Ok(decode_string(value)),
    encode: |this| Value::String(this.clone()),
);

// Free-form JSON: kept as given, with no scalar mapping.
impl_reflect_scalar!(
    Value, "serde_json::Value", "Value", Other,
    decode: |value| Ok(value.clone()),
    encode: |this| this.clone(),
);

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};

    use serde_json::{Value, json};

    use crate::info::{ScalarKind, Typed};
    use crate::{FromValue, Reflect};

    #[test]
    fn integers_accept_numeric_strings() {
        let mut value = 0i32;
        value.try_apply(&json!("42")).unwrap();
        assert_eq!(value, 42);

        assert!(value.try_apply(&json!("forty-two")).is_err());
        assert_eq!(value, 42);

        assert_eq!(usize::from_value(&json!(7.9)), Ok(7));
    }

    #[test]
    fn scalars_encode_naturally() {
        assert_eq!(true.to_value(), json!(true));
        assert_eq!(3u8.to_value(), json!(3));
        assert_eq!(1.5f32.to_value(), json!(1.5));
        assert_eq!(f64::NAN.to_value(), Value::Null);
        assert_eq!("text".to_string().to_value(), json!("text"));
    }

    #[test]
    fn strings_take_anything() {
        let mut text = String::new();
        text.try_apply(&json!(12.5)).unwrap();
        assert_eq!(text, "12.5");
        text.try_apply(&json!(false)).unwrap();
        assert_eq!(text, "false");
    }

    #[test]
    fn scalar_info() {
        let info = i16::type_info().as_opaque().unwrap();
        assert_eq!(info.scalar(), ScalarKind::Integer);
        assert_eq!(bool::type_info().as_opaque().unwrap().scalar(), ScalarKind::Bool);
        assert_eq!(String::type_info().type_name(), "String");
        assert_eq!(f32::type_info().as_opaque().unwrap().scalar(), ScalarKind::Float);
    }

    #[test]
    fn free_form_values() {
        let mut extra = Value::Null;
        extra.try_apply(&json!({ "any": [1, "two"] })).unwrap();
        assert_eq!(extra, json!({ "any": [1, "two"] }));
        assert_eq!(extra.to_value(), extra);
        assert_eq!(Value::type_info().as_opaque().unwrap().scalar(), ScalarKind::Other);
    }
}

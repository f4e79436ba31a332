use alloc::vec::Vec;

use serde_json::Value;

use crate::convert::{ConvertError, ValueKind};
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{ListInfo, ReflectKind, TypeInfo, TypePath, Typed};
use crate::ops::{List, ReflectMut, ReflectRef};
use crate::{FromValue, Reflect};

impl<T: TypePath> TypePath for Vec<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["alloc::vec::Vec<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Vec<", T::type_name(), ">"]))
    }
}

impl<T: Typed> Typed for Vec<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
    }
}

impl<T: FromValue + Typed> Reflect for Vec<T> {
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::List
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::List(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::List(self)
    }

    fn to_value(&self) -> Value {
        Value::Array(self.iter().map(Reflect::to_value).collect())
    }

    fn try_apply(&mut self, value: &Value) -> Result<(), ConvertError> {
        *self = Self::from_value(value)?;
        Ok(())
    }
}

impl<T: FromValue + Typed> List for Vec<T> {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.as_slice().get(index).map(T::as_reflect)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        self.as_mut_slice().get_mut(index).map(T::as_reflect_mut)
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T: FromValue + Typed> FromValue for Vec<T> {
    /// Decodes an array element by element. The first failing element fails
    /// the whole sequence.
    fn from_value(value: &Value) -> Result<Self, ConvertError> {
        let Value::Array(items) = value else {
            return Err(ConvertError::TypeMismatch {
                expected: "an array",
                found: ValueKind::of(value),
            });
        };

        items
            .iter()
            .enumerate()
            .map(|(index, item)| T::from_value(item).map_err(|err| err.in_element(index)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use serde_json::json;

    use crate::info::{TypePath, Typed};
    use crate::ops::{ReflectMut, ReflectRef};
    use crate::{ConvertError, FromValue, Reflect};

    #[test]
    fn type_paths() {
        assert_eq!(<Vec<Vec<u8>>>::type_path(), "alloc::vec::Vec<alloc::vec::Vec<u8>>");
        assert_eq!(<Vec<String>>::type_name(), "Vec<String>");

        let info = <Vec<i64>>::type_info().as_list().unwrap();
        assert!(info.item_ty().is::<i64>());
    }

    #[test]
    fn decode_is_all_or_nothing() {
        let mut numbers: Vec<u32> = vec![1, 2, 3];

        numbers.try_apply(&json!(["4", 5])).unwrap();
        assert_eq!(numbers, [4, 5]);

        let err = numbers.try_apply(&json!([6, "x", 8])).unwrap_err();
        assert!(matches!(err, ConvertError::Element { index: 1, .. }));
        assert_eq!(numbers, [4, 5]);

        assert!(<Vec<u32>>::from_value(&json!({"0": 1})).is_err());
    }

    #[test]
    fn list_view() {
        let mut words = vec![String::from("a"), String::from("b")];
        assert_eq!(words.to_value(), json!(["a", "b"]));

        let ReflectRef::List(list) = words.reflect_ref() else {
            panic!("expected a list");
        };
        assert_eq!(list.len(), 2);
        assert!(list.get(2).is_none());

        let ReflectMut::List(list) = words.reflect_mut() else {
            panic!("expected a list");
        };
        list.get_mut(0).unwrap().try_apply(&json!("z")).unwrap();
        assert_eq!(words, ["z", "b"]);
    }
}

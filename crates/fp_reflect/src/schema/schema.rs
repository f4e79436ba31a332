use alloc::vec::Vec;
use core::any::TypeId;

use serde_json::{Map, Value, json};

use crate::info::{ScalarKind, TypeInfo, Typed};
use crate::registry::labels_by_type_id;

/// Describes the shape of `T` as a JSON-Schema-like value.
///
/// | type                        | schema                                        |
/// |-----------------------------|-----------------------------------------------|
/// | `bool`                      | `{"type": "boolean"}`                         |
/// | integers                    | `{"type": "integer"}`                         |
/// | floats                      | `{"type": "number"}`                          |
/// | `String`                    | `{"type": "string"}`                          |
/// | `Vec<T>`                    | `{"type": "array", "items": ..}`              |
/// | records                     | `{"type": "object", "properties": {..}}`      |
/// | enums with labels           | `{"type": "string", "enum": [..]}`            |
/// | enums without labels        | `{"type": "integer"}`                         |
/// | durations                   | `{"type": "string", "format": "duration"}`    |
///
/// Anything else is `{"type": "object", "description": "Unknown type"}`. A
/// record reached again inside itself is `{"type": "object"}`.
///
/// ```
/// use fp_reflect::{derive::Reflect, get_schema};
/// use serde_json::json;
///
/// #[derive(Reflect)]
/// struct PersonInfo { name: String, age: i32, is_active: bool, salary: f64, tags: Vec<String> }
///
/// assert_eq!(get_schema::<PersonInfo>(), json!({
///     "type": "object",
///     "properties": {
///         "name": { "type": "string" },
///         "age": { "type": "integer" },
///         "is_active": { "type": "boolean" },
///         "salary": { "type": "number" },
///         "tags": { "type": "array", "items": { "type": "string" } },
///     },
/// }));
/// ```
pub fn get_schema<T: Typed>() -> Value {
    let mut visiting = Vec::new();
    schema_of(T::type_info(), &mut visiting)
}

fn schema_of(info: &'static TypeInfo, visiting: &mut Vec<TypeId>) -> Value {
    match info {
        TypeInfo::Opaque(opaque) => match opaque.scalar() {
            ScalarKind::Bool => json!({ "type": "boolean" }),
            ScalarKind::Integer => json!({ "type": "integer" }),
            ScalarKind::Float => json!({ "type": "number" }),
            ScalarKind::String => json!({ "type": "string" }),
            ScalarKind::Other => json!({ "type": "object", "description": "Unknown type" }),
        },
        TypeInfo::List(list) => json!({
            "type": "array",
            "items": schema_of(list.item_info(), visiting),
        }),
        TypeInfo::Enum(_) => match labels_by_type_id(info.type_id()) {
            Some(labels) => json!({ "type": "string", "enum": labels.labels().collect::<Vec<_>>() }),
            None => json!({ "type": "integer" }),
        },
        TypeInfo::Duration(_) => json!({ "type": "string", "format": "duration" }),
        TypeInfo::Struct(record) => {
            let id = info.type_id();
            if visiting.contains(&id) {
                return json!({ "type": "object" });
            }

            visiting.push(id);
            let properties: Map<_, _> = record
                .iter()
                .map(|field| (field.name().into(), schema_of(field.type_info(), visiting)))
                .collect();
            visiting.pop();

            json!({ "type": "object", "properties": properties })
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use serde_json::json;

    use super::get_schema;
    use crate::time::Seconds;

    #[test]
    fn leaves() {
        assert_eq!(get_schema::<u64>(), json!({ "type": "integer" }));
        assert_eq!(get_schema::<f32>(), json!({ "type": "number" }));
        assert_eq!(
            get_schema::<serde_json::Value>(),
            json!({ "type": "object", "description": "Unknown type" })
        );
        assert_eq!(
            get_schema::<Seconds>(),
            json!({ "type": "string", "format": "duration" })
        );
        assert_eq!(
            get_schema::<Vec<Vec<bool>>>(),
            json!({ "type": "array", "items": { "type": "array", "items": { "type": "boolean" } } })
        );
    }
}

use alloc::vec::Vec;

use serde_json::{Value, json};

use crate::Reflect;
use crate::info::{NameSource, Typed};
use crate::ops::Struct;

/// Reports how `T` is seen by the reflection engine.
///
/// ```json
/// {
///   "struct_name": "Point3D",
///   "field_info": {
///     "field_count": 3,
///     "fields": [{ "index": 0, "name": "x", "type": "f64" }, ..]
///   },
///   "json_field_names": ["x", "y", "z"],
///   "name_source": "native",
///   "has_custom_field_names": false
/// }
/// ```
///
/// Types other than records report no fields.
///
/// ```
/// use fp_reflect::{derive::Reflect, reflection_info};
///
/// #[derive(Reflect)]
/// #[reflect(field_names("x", "y", "z"))]
/// struct Point3D(f64, f64, f64);
///
/// let info = reflection_info::<Point3D>();
/// assert_eq!(info["field_info"]["field_count"], 3);
/// assert_eq!(info["field_info"]["fields"][1]["name"], "y");
/// assert_eq!(info["name_source"], "custom");
/// assert_eq!(info["has_custom_field_names"], true);
/// ```
pub fn reflection_info<T: Typed>() -> Value {
    let info = T::type_info();

    let (fields, names, source) = match info.as_struct() {
        Ok(record) => {
            let fields: Vec<Value> = record
                .iter()
                .enumerate()
                .map(|(index, field)| {
                    json!({
                        "index": index,
                        "name": field.name(),
                        "type": field.type_info().type_path(),
                    })
                })
                .collect();
            (fields, record.field_names().collect(), record.name_source())
        }
        Err(_) => (Vec::new(), Vec::new(), NameSource::Placeholder),
    };

    json!({
        "struct_name": info.type_name(),
        "field_info": {
            "field_count": fields.len(),
            "fields": fields,
        },
        "json_field_names": names,
        "name_source": source.as_str(),
        "has_custom_field_names": source == NameSource::Custom,
    })
}

/// Calls `f` with the name and value of each field of `target`, in
/// declaration order.
///
/// ```
/// use fp_reflect::{derive::Reflect, for_each_field_with_name};
///
/// #[derive(Reflect)]
/// struct Item { name: String, value: i32 }
///
/// let item = Item { name: "A".into(), value: 1 };
/// let mut seen = Vec::new();
/// for_each_field_with_name(&item, |name, value| seen.push((name.to_owned(), value.to_value())));
///
/// assert_eq!(seen[0].0, "name");
/// assert_eq!(seen[1].1, 1);
/// ```
pub fn for_each_field_with_name<T: Struct>(target: &T, mut f: impl FnMut(&str, &dyn Reflect)) {
    for index in 0..target.field_len() {
        if let (Some(name), Some(value)) = (target.name_at(index), target.field_at(index)) {
            f(name, value);
        }
    }
}

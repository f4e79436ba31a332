use alloc::string::String;
use alloc::vec::Vec;

use crate::access::{PathStep, parse_path_enhanced, simple_steps};
use crate::info::{TypeInfo, Typed};

/// Lists every field path of `T`, depth first in declaration order.
///
/// Nested records contribute their own path followed by `parent.child`
/// paths. Sequences are not entered, so no path holds an index.
///
/// ```
/// use fp_reflect::{derive::Reflect, get_all_paths};
///
/// #[derive(Reflect)]
/// struct Address { street: String, city: String, zip_code: i32 }
///
/// #[derive(Reflect)]
/// struct Person { name: String, age: i32, address: Address, active: bool }
///
/// assert_eq!(get_all_paths::<Person>(), [
///     "name", "age", "address",
///     "address.street", "address.city", "address.zip_code",
///     "active",
/// ]);
/// ```
pub fn get_all_paths<T: Typed>() -> Vec<String> {
    let mut paths = Vec::new();
    collect_paths(T::type_info(), "", &mut paths);
    paths
}

fn collect_paths(info: &'static TypeInfo, prefix: &str, paths: &mut Vec<String>) {
    let Ok(record) = info.as_struct() else {
        return;
    };

    for field in record.iter() {
        let mut path = String::with_capacity(prefix.len() + field.name().len() + 1);
        if !prefix.is_empty() {
            path.push_str(prefix);
            path.push('.');
        }
        path.push_str(field.name());

        paths.push(path.clone());
        collect_paths(field.type_info(), &path, paths);
    }
}

/// Returns `true` if the simple path resolves against the shape of `T`.
///
/// Only type information is consulted. The empty path is never valid.
///
/// ```
/// use fp_reflect::{derive::Reflect, is_valid_path};
///
/// #[derive(Reflect)]
/// struct Address { city: String }
///
/// #[derive(Reflect)]
/// struct Person { name: String, address: Address }
///
/// assert!(is_valid_path::<Person>("address.city"));
/// assert!(!is_valid_path::<Person>("address.country"));
/// assert!(!is_valid_path::<Person>("name.first"));
/// assert!(!is_valid_path::<Person>(""));
/// ```
pub fn is_valid_path<T: Typed>(path: &str) -> bool {
    resolves(T::type_info(), &simple_steps(path))
}

/// Returns `true` if the enhanced path resolves against the shape of `T`.
///
/// Index steps are valid on any sequence; bounds are a property of values
/// and are not checked.
///
/// ```
/// use fp_reflect::{derive::Reflect, is_valid_path_enhanced};
///
/// #[derive(Reflect)]
/// struct Item { name: String }
///
/// #[derive(Reflect)]
/// struct ItemList { items: Vec<Item> }
///
/// assert!(is_valid_path_enhanced::<ItemList>("items[100].name"));
/// assert!(!is_valid_path_enhanced::<ItemList>("items.name"));
/// assert!(!is_valid_path_enhanced::<ItemList>("items[0].value"));
/// ```
pub fn is_valid_path_enhanced<T: Typed>(path: &str) -> bool {
    resolves(T::type_info(), &parse_path_enhanced(path))
}

fn resolves(root: &'static TypeInfo, steps: &[PathStep<'_>]) -> bool {
    if steps.is_empty() {
        return false;
    }

    let mut info = root;
    for step in steps {
        let next = match (step, info) {
            (PathStep::Field(name), TypeInfo::Struct(record)) => record.field(name).map(|f| f.type_info()),
            (PathStep::Index(_), TypeInfo::List(list)) => Some(list.item_info()),
            _ => None,
        };
        match next {
            Some(next) => info = next,
            None => return false,
        }
    }
    true
}

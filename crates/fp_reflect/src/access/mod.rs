//! Path-based access to reflected values.
//!
//! # Syntax
//!
//! Two dialects are provided:
//!
//! - simple: field names separated by `.`, e.g. `address.city`. Empty
//!   segments are skipped. See [`parse_path`].
//! - enhanced: field names and `[n]` indices, e.g. `lists[1].items[0].name`.
//!   Malformed indices are dropped. See [`parse_path_enhanced`].
//!
//! A field step applies to a record, an index step to a sequence. Anything
//! else fails, as does an unknown field, an index out of range, or an empty
//! path.
//!
//! # APIs
//!
//! - [`get_field`], [`set_field`] and their `_enhanced` forms: report failure
//!   as `None` / `false` and log it at `debug` level.
//! - [`try_get_field`], [`try_set_field`] and their `_enhanced` forms: the
//!   same, returning a [`PathAccessError`].
//! - [`PathAccessor`]: a parsed path, reusable across values.
//! - [`ReflectPathAccess`]: one-off typed references into a value.
//!
//! Writes decode the new value into the leaf only. If decoding fails, or the
//! path does not resolve, nothing changes.
//!
//! # Examples
//!
//! ```
//! use fp_reflect::{derive::Reflect, get_field_enhanced, set_field_enhanced};
//! use serde_json::json;
//!
//! #[derive(Reflect)]
//! struct Item { name: String, value: i32 }
//!
//! #[derive(Reflect)]
//! struct ItemList { items: Vec<Item>, description: String }
//!
//! let mut list = ItemList {
//!     items: vec![Item { name: "Item A".into(), value: 10 }],
//!     description: "Test list".into(),
//! };
//!
//! assert_eq!(get_field_enhanced(&list, "items[0].name"), Some(json!("Item A")));
//! assert!(set_field_enhanced(&mut list, "items[0].value", json!(15)));
//! assert_eq!(list.items[0].value, 15);
//!
//! assert_eq!(get_field_enhanced(&list, "items[5]"), None);
//! assert!(!set_field_enhanced(&mut list, "items[5].value", json!(1)));
//! ```

// -----------------------------------------------------------------------------
// Modules

mod error;
mod field;
mod parser;
mod path_access;
mod path_accessor;
mod step;

// -----------------------------------------------------------------------------
// Exports

pub use error::{AccessError, AccessErrorKind, PathAccessError};
pub use field::{get_field, get_field_enhanced, set_field, set_field_enhanced};
pub use field::{try_get_field, try_get_field_enhanced, try_set_field, try_set_field_enhanced};
pub use parser::{parse_path, parse_path_enhanced};
pub use path_access::ReflectPathAccess;
pub use path_accessor::PathAccessor;
pub use step::PathStep;

pub(crate) use parser::simple_steps;
pub(crate) use path_accessor::{resolve, resolve_mut, write_leaf};

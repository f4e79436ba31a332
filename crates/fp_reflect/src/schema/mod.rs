//! Introspection over type information.
//!
//! ## Menu
//!
//! - [`get_all_paths`]: every simple path of a record type.
//! - [`is_valid_path`] / [`is_valid_path_enhanced`]: resolve a path against a
//!   type, without a value.
//! - [`get_schema`]: a JSON-Schema-like description.
//! - [`reflection_info`]: field catalog report.
//! - [`for_each_field_with_name`]: visit the fields of a value.

// -----------------------------------------------------------------------------
// Modules

mod paths;
mod report;
mod schema;

// -----------------------------------------------------------------------------
// Exports

pub use paths::{get_all_paths, is_valid_path, is_valid_path_enhanced};
pub use report::{for_each_field_with_name, reflection_info};
pub use schema::get_schema;

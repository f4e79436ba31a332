#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// Derive output names this crate as `fp_reflect`, which only resolves inside
// the crate itself through this alias.
extern crate self as fp_reflect;

// -----------------------------------------------------------------------------
// std & alloc

extern crate alloc;
extern crate std;

// -----------------------------------------------------------------------------
// Modules

mod json;
mod reflection;

pub mod access;
pub mod convert;
pub mod impls;
pub mod info;
pub mod ops;
pub mod registry;
pub mod schema;
pub mod time;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use fp_reflect_derive as derive;
pub use serde_json::Value;

pub use access::{PathStep, parse_path, parse_path_enhanced};
pub use access::{PathAccessError, PathAccessor, ReflectPathAccess};
pub use access::{get_field, get_field_enhanced, set_field, set_field_enhanced};
pub use access::{try_get_field, try_get_field_enhanced, try_set_field, try_set_field_enhanced};
pub use convert::ConvertError;
pub use json::{from_json, from_json_into, to_json};
pub use reflection::{FromValue, Reflect};
pub use registry::{register_declared_labels, register_enum};
pub use schema::{for_each_field_with_name, reflection_info};
pub use schema::{get_all_paths, get_schema, is_valid_path, is_valid_path_enhanced};

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use fp_reflect as reflect;
pub use fp_utils as utils;

pub use fp_reflect::derive::Reflect;
pub use fp_reflect::{FromValue, Reflect};

pub use fp_reflect::{PathStep, Value, parse_path, parse_path_enhanced};
pub use fp_reflect::{get_field, get_field_enhanced, set_field, set_field_enhanced};
pub use fp_reflect::{PathAccessError, PathAccessor};
pub use fp_reflect::{try_get_field, try_get_field_enhanced, try_set_field, try_set_field_enhanced};
pub use fp_reflect::{get_all_paths, get_schema, is_valid_path, is_valid_path_enhanced};
pub use fp_reflect::{ConvertError, from_json, from_json_into, to_json};
pub use fp_reflect::{for_each_field_with_name, reflection_info};
pub use fp_reflect::{register_declared_labels, register_enum};

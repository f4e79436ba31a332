//! `#[derive(Reflect)]` for `fp_reflect`.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements the following traits:
///
/// - `TypePath`
/// - `Typed`
/// - `Reflect`
/// - `FromValue`
/// - `Struct` (for `struct T { ... }`, `struct T(...);` and `struct T;`)
/// - `Enum` (for enums whose variants are all unit variants)
///
/// Unions, enums with data and types with lifetime or const parameters are
/// rejected. Type parameters are supported on structs; each instantiation
/// gets its own type info.
///
/// ## Field Names
///
/// Named fields use their identifiers, tuple fields `field_0`, `field_1`, ...
/// A type level list replaces both, provided it names every field:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(field_names("x", "y", "z"))]
/// struct Point3D(f64, f64, f64);
/// ```
///
/// A list of the wrong length is ignored and every field falls back to
/// `field_N`.
///
/// ## Optional Fields
///
/// By default, decoding a struct requires every field to be present. Fields
/// marked `default` take `Default::default()` when absent:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Config {
///     name: String,
///     #[reflect(default)]
///     tags: Vec<String>,
/// }
/// ```
///
/// This attribute can only be applied to fields.
///
/// ## Enum Labels
///
/// Variants may declare the label they encode to and decode from:
///
/// ```rust, ignore
/// #[derive(Reflect, Clone, Copy)]
/// enum Status {
///     #[reflect(label = "active")]
///     Active,
///     #[reflect(label = "inactive")]
///     Inactive,
/// }
/// ```
///
/// Declared labels take effect once registered. With the `auto_register`
/// feature that happens the first time the label table is read; otherwise
/// call `register_declared_labels::<Status>()`.
///
/// This attribute can only be applied to enum variants.
///
/// ## Custom Type Path
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(type_path = "my_app::config::Config")]
/// struct Config { /* ... */ }
/// ```
///
/// The path should not include generics, they are appended automatically.
///
/// This attribute can only be applied at the type level.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(ast)
}

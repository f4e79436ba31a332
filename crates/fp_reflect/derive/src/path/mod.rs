//! Paths into `fp_reflect` used by the generated code.
//!
//! Kept in one place so a reorganization of `fp_reflect` only touches this
//! module. The only special case is the crate path itself, see [`fp_reflect`].

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the path generated code uses to reach `fp_reflect`.
///
/// 1. Crates depending on `fp_reflect` get `::fp_reflect`.
/// 2. Crates depending on the `fieldpath` facade get `::fieldpath::reflect`.
/// 3. Anything else gets `::fp_reflect`, which `fp_reflect` itself resolves
///    through `extern crate self as fp_reflect`.
///
/// Reading the manifest is comparatively slow, so the path is resolved once
/// per invocation and passed around.
pub(crate) fn fp_reflect() -> syn::Path {
    fp_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("fp_reflect"))
}

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod convert;
mod info;
mod ops;

pub(crate) mod fp;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use cell::*;
pub(crate) use convert::*;
pub(crate) use info::*;
pub(crate) use ops::*;

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(fp_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fp_reflect_path::__macro_exports::auto_register
    }
}

#[inline(always)]
pub(crate) fn reflect_(fp_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fp_reflect_path::Reflect
    }
}

#[inline(always)]
pub(crate) fn from_value_(fp_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fp_reflect_path::FromValue
    }
}

#[inline(always)]
pub(crate) fn value_(fp_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fp_reflect_path::Value
    }
}

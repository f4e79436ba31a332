use proc_macro2::TokenStream;
use quote::quote;

#[inline]
pub(crate) fn reflect_ref_(fp_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fp_reflect_path::ops::ReflectRef
    }
}

#[inline]
pub(crate) fn reflect_mut_(fp_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fp_reflect_path::ops::ReflectMut
    }
}

#[inline]
pub(crate) fn struct_(fp_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fp_reflect_path::ops::Struct
    }
}

#[inline]
pub(crate) fn struct_to_value_(fp_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fp_reflect_path::ops::struct_to_value
    }
}

#[inline]
pub(crate) fn enum_(fp_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fp_reflect_path::ops::Enum
    }
}

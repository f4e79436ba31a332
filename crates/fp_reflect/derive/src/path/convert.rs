use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn convert_error_(fp_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fp_reflect_path::convert::ConvertError
    }
}

#[inline(always)]
pub(crate) fn expect_object_(fp_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fp_reflect_path::convert::expect_object
    }
}

#[inline(always)]
pub(crate) fn decode_field_(fp_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fp_reflect_path::convert::decode_field
    }
}

#[inline(always)]
pub(crate) fn decode_field_or_default_(fp_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fp_reflect_path::convert::decode_field_or_default
    }
}

#[inline(always)]
pub(crate) fn decode_enum_(fp_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fp_reflect_path::convert::decode_enum
    }
}

#[inline(always)]
pub(crate) fn encode_enum_(fp_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fp_reflect_path::convert::encode_enum
    }
}

use proc_macro2::TokenStream;
use quote::quote;

#[inline]
pub(crate) fn type_path_(fp_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fp_reflect_path::info::TypePath
    }
}

#[inline(always)]
pub(crate) fn typed_(fp_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fp_reflect_path::info::Typed
    }
}

#[inline(always)]
pub(crate) fn type_info_(fp_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fp_reflect_path::info::TypeInfo
    }
}

#[inline(always)]
pub(crate) fn reflect_kind_(fp_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fp_reflect_path::info::ReflectKind
    }
}

#[inline(always)]
pub(crate) fn named_field_(fp_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fp_reflect_path::info::NamedField
    }
}

#[inline(always)]
pub(crate) fn name_source_(fp_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fp_reflect_path::info::NameSource
    }
}

#[inline(always)]
pub(crate) fn struct_info_(fp_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fp_reflect_path::info::StructInfo
    }
}

#[inline(always)]
pub(crate) fn enum_info_(fp_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fp_reflect_path::info::EnumInfo
    }
}

#[inline(always)]
pub(crate) fn variant_info_(fp_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fp_reflect_path::info::VariantInfo
    }
}

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generate implementation code for `TypePath`.
pub(crate) fn impl_trait_type_path(meta: &ReflectMeta) -> TokenStream {
    let fp_reflect_path = meta.fp_reflect_path();
    let type_path_ = crate::path::type_path_(fp_reflect_path);

    let real_ident = meta.real_ident();

    let type_path = meta.type_path_tokens();
    let type_name = meta.type_name_tokens();
    let inline_flag = if meta.impl_with_generic() {
        crate::utils::empty()
    } else {
        quote! { #[inline] }
    };

    let (impl_generics, ty_generics, where_clause) = meta.split_generics(false);

    quote! {
        impl #impl_generics #type_path_ for #real_ident #ty_generics #where_clause {
            #inline_flag
            fn type_path() -> &'static str {
                #type_path
            }

            #inline_flag
            fn type_name() -> &'static str {
                #type_name
            }
        }
    }
}

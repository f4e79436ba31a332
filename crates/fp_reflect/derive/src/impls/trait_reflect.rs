use proc_macro2::{Ident, TokenStream};
use quote::quote;

use crate::derive_data::ReflectMeta;
use crate::path::fp::ResultFP;

/// Generate implementation code for `Reflect` and `FromValue`.
///
/// - `reflect_kind`: `Struct` or `Enum`, naming both the `ReflectKind` and
///   the `ReflectRef`/`ReflectMut` variant.
/// - `to_value_tokens`: the body of `Reflect::to_value`.
/// - `from_value_tokens`: the body of `FromValue::from_value`, with the input
///   bound to `value`.
///
/// `try_apply` always decodes a complete new value before assigning it.
pub(crate) fn impl_trait_reflect(
    meta: &ReflectMeta,
    reflect_kind: Ident,
    to_value_tokens: TokenStream,
    from_value_tokens: TokenStream,
) -> TokenStream {
    let fp_reflect_path = meta.fp_reflect_path();

    let reflect_ = crate::path::reflect_(fp_reflect_path);
    let from_value_ = crate::path::from_value_(fp_reflect_path);
    let value_ = crate::path::value_(fp_reflect_path);
    let convert_error_ = crate::path::convert_error_(fp_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(fp_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(fp_reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(fp_reflect_path);

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);

    quote! {
        impl #impl_generics #reflect_ for #real_ident #ty_generics #where_clause {
            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::#reflect_kind
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::#reflect_kind(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::#reflect_kind(self)
            }

            fn to_value(&self) -> #value_ {
                #to_value_tokens
            }

            fn try_apply(&mut self, value: &#value_) -> #ResultFP<(), #convert_error_> {
                *self = <Self as #from_value_>::from_value(value)?;
                #ResultFP::Ok(())
            }
        }

        impl #impl_generics #from_value_ for #real_ident #ty_generics #where_clause {
            fn from_value(value: &#value_) -> #ResultFP<Self, #convert_error_> {
                #from_value_tokens
            }
        }
    }
}

use proc_macro2::{Ident, Span, TokenStream};
use quote::{ToTokens, quote};

use super::{impl_trait_reflect, impl_trait_type_path, impl_trait_typed};

use crate::derive_data::ReflectStruct;
use crate::path::fp::{OptionFP, ResultFP};

/// Implement full reflect for struct type.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    // trait: TypePath
    let type_path_trait_tokens = impl_trait_type_path(meta);

    // trait: Typed
    let typed_trait_tokens = impl_trait_typed(meta, info.to_info_tokens());

    // trait: Struct
    let struct_trait_tokens = impl_trait_struct(info);

    // trait: Reflect + FromValue
    let struct_to_value_ = crate::path::struct_to_value_(meta.fp_reflect_path());
    let reflect_trait_tokens = impl_trait_reflect(
        meta,
        Ident::new("Struct", Span::call_site()),
        quote! { #struct_to_value_(self) },
        get_struct_from_value_tokens(info),
    );

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #struct_trait_tokens

        #reflect_trait_tokens
    }
}

/// Generate `Struct` trait implementation tokens.
fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let fp_reflect_path = meta.fp_reflect_path();
    let struct_ = crate::path::struct_(fp_reflect_path);
    let reflect_ = crate::path::reflect_(fp_reflect_path);
    let option_ = OptionFP.to_token_stream();

    let field_len = info.fields().len();
    let field_names: Vec<&String> = info.fields().iter().map(|field| &field.name).collect();
    let field_members: Vec<&syn::Member> =
        info.fields().iter().map(|field| &field.member).collect();
    let field_indices: Vec<usize> = (0..field_len).collect();

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);

    quote! {
        impl #impl_generics #struct_ for #real_ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> #option_<&dyn #reflect_> {
                match name {
                    #(#field_names => #option_::Some(#reflect_::as_reflect(&self.#field_members)),)*
                    _ => #option_::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> #option_<&mut dyn #reflect_> {
                match name {
                    #(#field_names => #option_::Some(#reflect_::as_reflect_mut(&mut self.#field_members)),)*
                    _ => #option_::None,
                }
            }

            fn field_at(&self, index: usize) -> #option_<&dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Some(#reflect_::as_reflect(&self.#field_members)),)*
                    _ => #option_::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> #option_<&mut dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Some(#reflect_::as_reflect_mut(&mut self.#field_members)),)*
                    _ => #option_::None,
                }
            }

            fn name_at(&self, index: usize) -> #option_<&'static str> {
                match index {
                    #(#field_indices => #option_::Some(#field_names),)*
                    _ => #option_::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_len
            }
        }
    }
}

/// Generate the body of `FromValue::from_value` for structs.
///
/// Every field is decoded before `Self` is built, so a failure leaves nothing
/// half-initialized:
///
/// ```ignore
/// let object = expect_object(value)?;
/// Ok(Self { name: decode_field(object, "name")?, 0: decode_field_or_default(object, "field_0")?, .. })
/// ```
fn get_struct_from_value_tokens(info: &ReflectStruct) -> TokenStream {
    let fp_reflect_path = info.meta().fp_reflect_path();
    let expect_object_ = crate::path::expect_object_(fp_reflect_path);
    let decode_field_ = crate::path::decode_field_(fp_reflect_path);
    let decode_field_or_default_ = crate::path::decode_field_or_default_(fp_reflect_path);

    let fields = info.fields().iter().map(|field| {
        let member = &field.member;
        let name = &field.name;
        let decode = if field.attrs.default.is_some() {
            &decode_field_or_default_
        } else {
            &decode_field_
        };
        quote! {
            #member: #decode(object, #name)?
        }
    });

    if info.fields().is_empty() {
        return quote! {
            #expect_object_(value)?;
            #ResultFP::Ok(Self {})
        };
    }

    quote! {
        let object = #expect_object_(value)?;
        #ResultFP::Ok(Self { #(#fields,)* })
    }
}

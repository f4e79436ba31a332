use proc_macro2::{Ident, Span, TokenStream};
use quote::{ToTokens, quote};

use super::{get_auto_register_impl, impl_trait_reflect, impl_trait_type_path, impl_trait_typed};

use crate::derive_data::ReflectEnum;
use crate::path::fp::OptionFP;

/// Implement full reflect for unit-only enums.
pub(crate) fn impl_enum(info: &ReflectEnum) -> TokenStream {
    let meta = info.meta();
    let fp_reflect_path = meta.fp_reflect_path();

    // trait: TypePath
    let type_path_trait_tokens = impl_trait_type_path(meta);

    // trait: Typed
    let typed_trait_tokens = impl_trait_typed(meta, info.to_info_tokens());

    // trait: Enum
    let enum_trait_tokens = impl_trait_enum(info);

    // trait: Reflect + FromValue
    let encode_enum_ = crate::path::encode_enum_(fp_reflect_path);
    let decode_enum_ = crate::path::decode_enum_(fp_reflect_path);
    let reflect_trait_tokens = impl_trait_reflect(
        meta,
        Ident::new("Enum", Span::call_site()),
        quote! { #encode_enum_(self) },
        quote! { #decode_enum_::<Self>(value) },
    );

    // feature: auto_register
    let auto_register_tokens = get_auto_register_impl(info);

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #enum_trait_tokens

        #reflect_trait_tokens

        #auto_register_tokens
    }
}

/// Generate `Enum` trait implementation tokens.
///
/// Ordinals are discriminants, read with `Foo::A as i64`.
fn impl_trait_enum(info: &ReflectEnum) -> TokenStream {
    let meta = info.meta();
    let enum_ = crate::path::enum_(meta.fp_reflect_path());
    let real_ident = meta.real_ident();
    let option_ = OptionFP.to_token_stream();

    let idents: Vec<&Ident> = info.variants().iter().map(|v| &v.data.ident).collect();
    let names: Vec<String> = idents.iter().map(ToString::to_string).collect();

    let declared = info.variants().iter().filter_map(|variant| {
        let ident = &variant.data.ident;
        let label = variant.attrs.label.as_ref()?;
        Some(quote! { (#real_ident::#ident as i64, #label) })
    });

    let declared_labels = if info.has_labels() {
        quote! {
            fn declared_labels() -> &'static [(i64, &'static str)] {
                const LABELS: &[(i64, &str)] = &[ #(#declared),* ];
                LABELS
            }
        }
    } else {
        crate::utils::empty()
    };

    quote! {
        impl #enum_ for #real_ident {
            #[inline]
            fn ordinal(&self) -> i64 {
                match *self {
                    #(Self::#idents => #real_ident::#idents as i64,)*
                }
            }

            fn variant_name(&self) -> &'static str {
                match *self {
                    #(Self::#idents => #names,)*
                }
            }

            fn from_ordinal(ordinal: i64) -> #option_<Self> {
                #(
                    if ordinal == #real_ident::#idents as i64 {
                        return #option_::Some(Self::#idents);
                    }
                )*
                #option_::None
            }

            #declared_labels
        }
    }
}

use quote::quote;
use syn::Variant;

use super::{ReflectMeta, VariantAttributes};

// -----------------------------------------------------------------------------
// Define

pub(crate) struct ReflectEnum<'a> {
    meta: ReflectMeta<'a>,
    variants: Vec<EnumVariant<'a>>,
}

/// A unit variant.
pub(crate) struct EnumVariant<'a> {
    /// The raw variant.
    pub data: &'a Variant,
    pub attrs: VariantAttributes,
}

// -----------------------------------------------------------------------------
// Implementation

impl<'a> ReflectEnum<'a> {
    #[inline]
    pub fn new(meta: ReflectMeta<'a>, variants: Vec<EnumVariant<'a>>) -> Self {
        Self { meta, variants }
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    #[inline]
    pub fn variants(&self) -> &[EnumVariant<'a>] {
        &self.variants
    }

    /// Whether any variant carries `#[reflect(label = "..")]`.
    pub fn has_labels(&self) -> bool {
        self.variants.iter().any(|v| v.attrs.label.is_some())
    }

    /// Generates the `TypeInfo` expression:
    ///
    /// ```ignore
    /// {
    ///     const VARIANTS: &[VariantInfo] = &[VariantInfo::new("A", Foo::A as i64), ..];
    ///     TypeInfo::Enum(EnumInfo::new::<Self>(VARIANTS))
    /// }
    /// ```
    pub fn to_info_tokens(&self) -> proc_macro2::TokenStream {
        let fp_reflect_path = self.meta.fp_reflect_path();
        let type_info_ = crate::path::type_info_(fp_reflect_path);
        let enum_info_ = crate::path::enum_info_(fp_reflect_path);
        let variant_info_ = crate::path::variant_info_(fp_reflect_path);
        let real_ident = self.meta.real_ident();

        let variants = self.variants.iter().map(|variant| {
            let ident = &variant.data.ident;
            let name = ident.to_string();
            quote! {
                #variant_info_::new(#name, #real_ident::#ident as i64)
            }
        });

        quote! {
            {
                const VARIANTS: &[#variant_info_] = &[ #(#variants),* ];
                #type_info_::Enum(#enum_info_::new::<Self>(VARIANTS))
            }
        }
    }
}

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Field, Fields, Index, Member};

use super::{FieldAttributes, ReflectMeta};

// -----------------------------------------------------------------------------
// Define

/// Where the reflected field names of a struct come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NameSource {
    Native,
    Custom,
    Placeholder,
}

pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
    name_source: NameSource,
}

/// A field of a reflected struct.
pub(crate) struct StructField<'a> {
    /// The raw field.
    pub data: &'a Field,
    /// `self.#member`, an identifier or a tuple index.
    pub member: Member,
    /// The reflected name.
    pub name: String,
    pub attrs: FieldAttributes,
}

// -----------------------------------------------------------------------------
// Implementation

impl<'a> ReflectStruct<'a> {
    /// Resolves field names: a `field_names(..)` list of the right length,
    /// otherwise the identifiers of named fields, otherwise `field_N`.
    ///
    /// A list of the wrong length switches every field to `field_N`.
    pub fn new(mut meta: ReflectMeta<'a>, fields: &'a Fields) -> syn::Result<Self> {
        let listed = meta.attrs().field_names.as_ref();
        let custom = listed
            .filter(|names| names.len() == fields.len())
            .map(|names| names.iter().map(syn::LitStr::value).collect::<Vec<_>>());
        let mismatched = listed.is_some() && custom.is_none();

        let name_source = match (&custom, fields) {
            (Some(_), _) => NameSource::Custom,
            (None, Fields::Named(_)) | (None, Fields::Unit) if !mismatched => NameSource::Native,
            _ => NameSource::Placeholder,
        };

        let fields = fields
            .iter()
            .enumerate()
            .map(|(index, data)| {
                let member = match &data.ident {
                    Some(ident) => Member::Named(ident.clone()),
                    None => Member::Unnamed(Index {
                        index: index as u32,
                        span: Span::call_site(),
                    }),
                };

                let name = match (&custom, &data.ident) {
                    (Some(names), _) => names[index].clone(),
                    (None, Some(ident)) if !mismatched => ident.to_string(),
                    _ => format!("field_{index}"),
                };

                Ok(StructField {
                    data,
                    member,
                    name,
                    attrs: FieldAttributes::parse_attrs(&data.attrs)?,
                })
            })
            .collect::<syn::Result<Vec<_>>>()?;

        meta.set_field_types(
            fields
                .iter()
                .map(|field| (&field.data.ty, field.attrs.default.is_some())),
        );

        Ok(Self {
            meta,
            fields,
            name_source,
        })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    #[inline]
    pub fn fields(&self) -> &[StructField<'a>] {
        &self.fields
    }

    /// Generates the `TypeInfo` expression:
    ///
    /// ```ignore
    /// TypeInfo::Struct(StructInfo::new::<Self>(
    ///     &[NamedField::new::<T>("name").with_default(false), ..],
    ///     NameSource::Native,
    /// ))
    /// ```
    pub fn to_info_tokens(&self) -> TokenStream {
        let fp_reflect_path = self.meta.fp_reflect_path();
        let type_info_ = crate::path::type_info_(fp_reflect_path);
        let struct_info_ = crate::path::struct_info_(fp_reflect_path);
        let named_field_ = crate::path::named_field_(fp_reflect_path);
        let name_source_ = crate::path::name_source_(fp_reflect_path);

        let fields = self.fields.iter().map(|field| {
            let ty = &field.data.ty;
            let name = &field.name;
            let has_default = field.attrs.default.is_some();
            quote! {
                #named_field_::new::<#ty>(#name).with_default(#has_default)
            }
        });

        let source = match self.name_source {
            NameSource::Native => quote!(Native),
            NameSource::Custom => quote!(Custom),
            NameSource::Placeholder => quote!(Placeholder),
        };

        quote! {
            #type_info_::Struct(
                #struct_info_::new::<Self>(
                    &[ #(#fields),* ],
                    #name_source_::#source,
                )
            )
        }
    }
}

use syn::{Data, DeriveInput, Fields, spanned::Spanned};

use super::{EnumVariant, ReflectEnum, ReflectMeta, ReflectStruct, TypeAttributes};
use super::VariantAttributes;

/// The parsed derive input.
pub(crate) enum ReflectDerive<'a> {
    /// Named, tuple and unit structs.
    Struct(ReflectStruct<'a>),
    /// Enums whose variants are all unit variants.
    Enum(ReflectEnum<'a>),
}

impl<'a> ReflectDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;

        match &input.data {
            Data::Struct(data) => {
                let meta = ReflectMeta::new(attrs, &input.ident, &input.generics)?;
                ReflectStruct::new(meta, &data.fields).map(Self::Struct)
            }
            Data::Enum(data) => {
                if let Some(names) = &attrs.field_names
                    && let Some(first) = names.first()
                {
                    return Err(syn::Error::new(
                        first.span(),
                        "`field_names` only applies to structs",
                    ));
                }
                if input.generics.params.iter().next().is_some() {
                    return Err(syn::Error::new(
                        input.generics.span(),
                        "`#[derive(Reflect)]` does not support generic enums",
                    ));
                }

                let meta = ReflectMeta::new(attrs, &input.ident, &input.generics)?;

                let variants = data
                    .variants
                    .iter()
                    .map(|variant| {
                        if !matches!(variant.fields, Fields::Unit) {
                            return Err(syn::Error::new(
                                variant.fields.span(),
                                "`#[derive(Reflect)]` only supports enums with unit variants",
                            ));
                        }
                        Ok(EnumVariant {
                            data: variant,
                            attrs: VariantAttributes::parse_attrs(&variant.attrs)?,
                        })
                    })
                    .collect::<syn::Result<Vec<_>>>()?;

                check_labels(&variants)?;

                Ok(Self::Enum(ReflectEnum::new(meta, variants)))
            }
            Data::Union(data) => Err(syn::Error::new(
                data.union_token.span(),
                "`#[derive(Reflect)]` does not support unions",
            )),
        }
    }
}

// Labels are matched ignoring ASCII case, so they must differ beyond case.
fn check_labels(variants: &[EnumVariant<'_>]) -> syn::Result<()> {
    let labels: Vec<&syn::LitStr> = variants.iter().filter_map(|v| v.attrs.label.as_ref()).collect();

    for (index, label) in labels.iter().enumerate() {
        let value = label.value();
        if labels[..index]
            .iter()
            .any(|prev| prev.value().eq_ignore_ascii_case(&value))
        {
            return Err(syn::Error::new(
                label.span(),
                format!("duplicate label `{value}`"),
            ));
        }
    }

    Ok(())
}

//! `#[reflect(..)]` attributes at the type, field and variant level.

use proc_macro2::Span;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Attribute, LitStr, Token};

use crate::REFLECT_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// Type

/// Type level attributes.
///
/// - `#[reflect(type_path = "my_crate::foo::Bar")]`
/// - `#[reflect(field_names("a", "b", ..))]`
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    pub type_path: Option<LitStr>,
    pub field_names: Option<Vec<LitStr>>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in reflect_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("type_path") {
                    if this.type_path.is_some() {
                        return Err(meta.error("duplicate `type_path` attribute"));
                    }
                    let lit: LitStr = meta.value()?.parse()?;
                    if lit.value().is_empty() {
                        return Err(syn::Error::new(lit.span(), "`type_path` cannot be empty"));
                    }
                    this.type_path = Some(lit);
                    Ok(())
                } else if meta.path.is_ident("field_names") {
                    if this.field_names.is_some() {
                        return Err(meta.error("duplicate `field_names` attribute"));
                    }
                    let content;
                    syn::parenthesized!(content in meta.input);
                    let names = Punctuated::<LitStr, Token![,]>::parse_terminated(&content)?;
                    this.field_names = Some(check_names(names)?);
                    Ok(())
                } else {
                    Err(meta.error("unsupported attribute, expected `type_path` or `field_names`"))
                }
            })?;
        }

        Ok(this)
    }
}

fn check_names(names: Punctuated<LitStr, Token![,]>) -> syn::Result<Vec<LitStr>> {
    let names: Vec<LitStr> = names.into_iter().collect();

    for (index, name) in names.iter().enumerate() {
        let value = name.value();
        if value.is_empty() {
            return Err(syn::Error::new(name.span(), "field names cannot be empty"));
        }
        if names[..index].iter().any(|prev| prev.value() == value) {
            return Err(syn::Error::new(
                name.span(),
                format!("duplicate field name `{value}`"),
            ));
        }
    }

    Ok(names)
}

// -----------------------------------------------------------------------------
// Field

/// Field level attributes.
///
/// - `#[reflect(default)]`: an absent key decodes to `Default::default()`.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    pub default: Option<Span>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in reflect_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("default") {
                    this.default = Some(meta.path.span());
                    Ok(())
                } else {
                    Err(meta.error("unsupported field attribute, expected `default`"))
                }
            })?;
        }

        Ok(this)
    }
}

// -----------------------------------------------------------------------------
// Variant

/// Enum variant attributes.
///
/// - `#[reflect(label = "active")]`
#[derive(Default, Debug)]
pub(crate) struct VariantAttributes {
    pub label: Option<LitStr>,
}

impl VariantAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in reflect_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("label") {
                    if this.label.is_some() {
                        return Err(meta.error("duplicate `label` attribute"));
                    }
                    let lit: LitStr = meta.value()?.parse()?;
                    if lit.value().is_empty() {
                        return Err(syn::Error::new(lit.span(), "labels cannot be empty"));
                    }
                    this.label = Some(lit);
                    Ok(())
                } else {
                    Err(meta.error("unsupported variant attribute, expected `label`"))
                }
            })?;
        }

        Ok(this)
    }
}

fn reflect_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident(REFLECT_ATTRIBUTE_NAME))
}

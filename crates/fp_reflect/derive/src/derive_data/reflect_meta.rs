use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{GenericParam, Generics, Ident, ImplGenerics, Path, Type, TypeGenerics};

use super::TypeAttributes;
use crate::path::fp::{AnyFP, DefaultFP, SendFP, SyncFP};

/// Type level data shared by every generated impl.
pub(crate) struct ReflectMeta<'a> {
    fp_reflect_path: Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
    /// Field types that mention a type parameter, with their `default` flag.
    generic_fields: Vec<(Type, bool)>,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("fp_reflect_path", &self.fp_reflect_path.to_token_stream())
            .field("ident", &self.ident)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    /// Rejects lifetime and const parameters: reflected values are `'static`
    /// and type paths are built from type parameters only.
    pub fn new(attrs: TypeAttributes, ident: &'a Ident, generics: &'a Generics) -> syn::Result<Self> {
        for param in &generics.params {
            match param {
                GenericParam::Type(_) => {}
                GenericParam::Lifetime(lifetime) => {
                    return Err(syn::Error::new_spanned(
                        lifetime,
                        "`#[derive(Reflect)]` does not support lifetime parameters",
                    ));
                }
                GenericParam::Const(param) => {
                    return Err(syn::Error::new_spanned(
                        param,
                        "`#[derive(Reflect)]` does not support const parameters",
                    ));
                }
            }
        }

        Ok(Self {
            fp_reflect_path: crate::path::fp_reflect(),
            attrs,
            ident,
            generics,
            generic_fields: Vec::new(),
        })
    }

    /// Records the field types that need `where` bounds.
    pub(super) fn set_field_types<'f>(&mut self, fields: impl Iterator<Item = (&'f Type, bool)>) {
        let params: Vec<&Ident> = self.generics.type_params().map(|p| &p.ident).collect();
        if params.is_empty() {
            return;
        }

        self.generic_fields = fields
            .filter(|(ty, _)| mentions_any(&params, ty.to_token_stream()))
            .map(|(ty, default)| (ty.clone(), default))
            .collect();
    }

    #[inline]
    pub fn fp_reflect_path(&self) -> &Path {
        &self.fp_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn real_ident(&self) -> &'a Ident {
        self.ident
    }

    /// Whether `TypePath` and `Typed` need per-instantiation cells.
    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        self.generics.type_params().next().is_some()
    }

    /// A `&'static str` expression naming the type without its generics,
    /// e.g. `concat!(module_path!(), "::", "Foo")`.
    fn base_type_path(&self) -> TokenStream {
        match &self.attrs.type_path {
            Some(lit) => lit.to_token_stream(),
            None => {
                let ident = self.ident.to_string();
                quote! {
                    ::core::concat!(::core::module_path!(), "::", #ident)
                }
            }
        }
    }

    /// The body of `TypePath::type_path`.
    pub fn type_path_tokens(&self) -> TokenStream {
        self.with_generic_args(self.base_type_path(), quote!(type_path))
    }

    /// The body of `TypePath::type_name`.
    pub fn type_name_tokens(&self) -> TokenStream {
        let ident = self.ident.to_string();
        self.with_generic_args(quote!(#ident), quote!(type_name))
    }

    /// For generic types, appends `<A, B>` to `base` through a path cell,
    /// naming each argument with `TypePath::#method`.
    fn with_generic_args(&self, base: TokenStream, method: TokenStream) -> TokenStream {
        if !self.impl_with_generic() {
            return base;
        }

        let fp_reflect_path = &self.fp_reflect_path;
        let type_path_ = crate::path::type_path_(fp_reflect_path);
        let path_cell_ = crate::path::generic_type_path_cell_(fp_reflect_path);
        let concat_ = crate::path::concat_(fp_reflect_path);

        let mut parts = vec![base, quote!("<")];
        for (index, param) in self.generics.type_params().enumerate() {
            if index > 0 {
                parts.push(quote!(", "));
            }
            let ident = &param.ident;
            parts.push(quote!(<#ident as #type_path_>::#method()));
        }
        parts.push(quote!(">"));

        quote! {
            static CELL: #path_cell_ = #path_cell_::new();
            CELL.get_or_insert::<Self>(|| {
                #concat_(&[ #(#parts),* ])
            })
        }
    }

    /// Returns `impl_generics`, `ty_generics` and a complete `where` clause.
    ///
    /// ```ignore
    /// let real_ident = meta.real_ident();
    /// let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);
    ///
    /// quote! {
    ///     impl #impl_generics TraitName for #real_ident #ty_generics #where_clause {
    ///         /* ... */
    ///     }
    /// }
    /// ```
    ///
    /// Every type parameter is bound by `TypePath`. With `add_field_bounds`,
    /// every field type that mentions a type parameter is bound by
    /// `FromValue + Typed`, plus `Default` for `#[reflect(default)]` fields.
    /// `TypePath` alone does not need the field bounds.
    pub fn split_generics(
        &self,
        add_field_bounds: bool,
    ) -> (ImplGenerics<'a>, TypeGenerics<'a>, TokenStream) {
        let fp_reflect_path = &self.fp_reflect_path;
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        let mut predicates = quote! { where };

        if self.impl_with_generic() {
            predicates.extend(quote! { Self: #AnyFP + #SendFP + #SyncFP, });
        }

        if let Some(where_clause) = where_clause {
            let existing = where_clause.predicates.iter();
            predicates.extend(quote! { #(#existing,)* });
        }

        let type_path_ = crate::path::type_path_(fp_reflect_path);
        for param in self.generics.type_params() {
            let ident = &param.ident;
            predicates.extend(quote! { #ident: #type_path_, });
        }

        if add_field_bounds {
            let from_value_ = crate::path::from_value_(fp_reflect_path);
            let typed_ = crate::path::typed_(fp_reflect_path);
            for (ty, default) in &self.generic_fields {
                let default = default.then(|| quote!( + #DefaultFP ));
                predicates.extend(quote! { #ty: #from_value_ + #typed_ #default, });
            }
        }

        (impl_generics, ty_generics, predicates)
    }
}

// Do any of `idents` appear in `tokens`?
fn mentions_any(idents: &[&Ident], tokens: TokenStream) -> bool {
    tokens.into_iter().any(|tree| match tree {
        proc_macro2::TokenTree::Ident(ident) => idents.iter().any(|param| **param == ident),
        proc_macro2::TokenTree::Group(group) => mentions_any(idents, group.stream()),
        _ => false,
    })
}

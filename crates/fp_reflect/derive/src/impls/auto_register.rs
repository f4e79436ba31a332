use crate::derive_data::ReflectEnum;

/// Generate the `inventory` submission registering an enum's declared labels.
///
/// Enums without `#[reflect(label = "..")]` submit nothing.
#[cfg(feature = "auto_register")]
pub(crate) fn get_auto_register_impl(info: &ReflectEnum) -> proc_macro2::TokenStream {
    if !info.has_labels() {
        return crate::utils::empty();
    }

    let meta = info.meta();
    let auto_register_ = crate::path::auto_register_(meta.fp_reflect_path());
    let real_ident = meta.real_ident();

    quote::quote! {
        #auto_register_::inventory::submit!{
            #auto_register_::__AutoRegisterFunc(
                #auto_register_::__register_labels::<#real_ident>
            )
        }
    }
}

/// Generate the `inventory` submission registering an enum's declared labels.
#[cfg(not(feature = "auto_register"))]
pub(crate) fn get_auto_register_impl(_: &ReflectEnum) -> proc_macro2::TokenStream {
    crate::utils::empty()
}

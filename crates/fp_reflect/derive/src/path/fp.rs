//! Fully qualified paths to `core` items, so generated code does not depend
//! on what the caller has in scope.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! define_fp {
    ($($name:ident => $path:path;)*) => {$(
        pub(crate) struct $name;

        impl ToTokens for $name {
            #[inline]
            fn to_tokens(&self, tokens: &mut TokenStream) {
                quote!($path).to_tokens(tokens);
            }
        }
    )*};
}

define_fp! {
    AnyFP => ::core::any::Any;
    SendFP => ::core::marker::Send;
    SyncFP => ::core::marker::Sync;
    DefaultFP => ::core::default::Default;
    OptionFP => ::core::option::Option;
    ResultFP => ::core::result::Result;
}

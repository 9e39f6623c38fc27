// -----------------------------------------------------------------------------
// Modules

mod trait_object;
mod trait_reflect;

// -----------------------------------------------------------------------------
// Internal API

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectObject;

/// Implement `Reflect`, `Object` and, when marked, `Serializable`.
pub(crate) fn impl_object(object: &ReflectObject) -> TokenStream {
    let reflect_trait_tokens = trait_reflect::impl_trait_reflect(object);
    let object_trait_tokens = trait_object::impl_trait_object(object);
    let serializable_trait_tokens = trait_object::impl_trait_serializable(object);

    quote! {
        #reflect_trait_tokens

        #object_trait_tokens

        #serializable_trait_tokens
    }
}

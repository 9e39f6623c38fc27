use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectObject;

/// Generate implementation code for `Reflect` trait.
pub(crate) fn impl_trait_reflect(object: &ReflectObject) -> TokenStream {
    let quill_json_path = object.quill_json_path();
    let reflect_ = crate::path::reflect_(quill_json_path);
    let reflect_ref_ = crate::path::reflect_ref_(quill_json_path);

    let ident = object.ident();
    let generics = object.bounded_generics();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #reflect_ for #ident #ty_generics #where_clause {
            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::Object(self)
            }
        }
    }
}

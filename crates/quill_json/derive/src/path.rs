//! This independent module is used to provide the required path.
//! So as to minimize changes when the `quill_json` structure is modified.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `quill_json` crate.
///
/// 1. For crates that depend on `quill_json`, `::quill_json` is returned.
/// 2. For crates that depend on `quill`, `::quill::json` is returned.
/// 3. For other situations, `::quill_json` is returned, but this may be incorrect.
///
/// Reading the manifest is relatively expensive, so the path is computed once
/// per derive and passed around.
pub(crate) fn quill_json() -> syn::Path {
    quill_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("quill_json"))
}

// -----------------------------------------------------------------------------
// Internal API

#[inline(always)]
pub(crate) fn reflect_(quill_json_path: &syn::Path) -> TokenStream {
    quote! {
        #quill_json_path::Reflect
    }
}

#[inline(always)]
pub(crate) fn reflect_ref_(quill_json_path: &syn::Path) -> TokenStream {
    quote! {
        #quill_json_path::ReflectRef
    }
}

#[inline(always)]
pub(crate) fn object_(quill_json_path: &syn::Path) -> TokenStream {
    quote! {
        #quill_json_path::ops::Object
    }
}

#[inline(always)]
pub(crate) fn serializable_(quill_json_path: &syn::Path) -> TokenStream {
    quote! {
        #quill_json_path::ops::Serializable
    }
}

#[inline(always)]
pub(crate) fn object_info_(quill_json_path: &syn::Path) -> TokenStream {
    quote! {
        #quill_json_path::info::ObjectInfo
    }
}

#[inline(always)]
pub(crate) fn field_info_(quill_json_path: &syn::Path) -> TokenStream {
    quote! {
        #quill_json_path::info::FieldInfo
    }
}

#[inline(always)]
pub(crate) fn root_name_(quill_json_path: &syn::Path) -> TokenStream {
    quote! {
        #quill_json_path::info::RootName
    }
}

#[inline(always)]
pub(crate) fn validator_binding_(quill_json_path: &syn::Path) -> TokenStream {
    quote! {
        #quill_json_path::rules::ValidatorBinding
    }
}

#[inline(always)]
pub(crate) fn converter_binding_(quill_json_path: &syn::Path) -> TokenStream {
    quote! {
        #quill_json_path::rules::ConverterBinding
    }
}

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;

use crate::derive_data::{ObjectField, ReflectObject};

/// Generate implementation code for `Object` trait.
///
/// Similar to following:
///
/// ```ignore
/// impl Object for Foo {
///     fn object_info(&self) -> ObjectInfo {
///         ObjectInfo::new_serializable::<Self>(&[
///             FieldInfo::new("a", 0),
///             FieldInfo::new("b", 1).with_transient(),
///             FieldInfo::new("c", 2).with_validator(ValidatorBinding::new::<V, Self>()),
///         ])
///         .with_root(RootName::new("Foo"))
///     }
///
///     fn field_at(&self, index: usize) -> Option<&dyn Reflect> {
///         match index {
///             0 => Some(&self.a),
///             2 => Some(&self.c),
///             _ => None,
///         }
///     }
/// }
/// ```
pub(crate) fn impl_trait_object(object: &ReflectObject) -> TokenStream {
    let quill_json_path = object.quill_json_path();
    let reflect_ = crate::path::reflect_(quill_json_path);
    let object_ = crate::path::object_(quill_json_path);
    let object_info_ = crate::path::object_info_(quill_json_path);
    let root_name_ = crate::path::root_name_(quill_json_path);

    let ident = object.ident();
    let generics = object.bounded_generics();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let field_infos = object
        .fields()
        .iter()
        .map(|field| field_info_tokens(object, field));

    let with_root = object
        .attrs()
        .root
        .as_ref()
        .map(|label| quote!(.with_root(#root_name_::new(#label))));

    let constructor = if object.attrs().serializable.is_some() {
        quote!(new_serializable)
    } else {
        quote!(new)
    };

    let field_arms = object.active_fields().map(|field| {
        let index = field.index;
        let field_ident = field.ident;
        quote! {
            #index => ::core::option::Option::Some(&self.#field_ident as &dyn #reflect_),
        }
    });

    quote! {
        impl #impl_generics #object_ for #ident #ty_generics #where_clause {
            fn object_info(&self) -> #object_info_ {
                #object_info_::#constructor::<Self>(&[
                    #(#field_infos,)*
                ])
                #with_root
            }

            fn field_at(&self, index: usize) -> ::core::option::Option<&dyn #reflect_> {
                match index {
                    #(#field_arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    }
}

/// Generate implementation code for `Serializable` trait, if the type opts in.
pub(crate) fn impl_trait_serializable(object: &ReflectObject) -> TokenStream {
    if object.attrs().serializable.is_none() {
        return crate::utils::empty();
    }

    let serializable_ = crate::path::serializable_(object.quill_json_path());

    let ident = object.ident();
    let generics = object.bounded_generics();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #serializable_ for #ident #ty_generics #where_clause {}
    }
}

fn field_info_tokens(object: &ReflectObject, field: &ObjectField) -> TokenStream {
    let quill_json_path = object.quill_json_path();
    let field_info_ = crate::path::field_info_(quill_json_path);

    let name = field.ident.unraw().to_string();
    let index = field.index;

    let transient = field.attrs.transient.map(|_| quote!(.with_transient()));

    let validator = field.attrs.validator.as_ref().map(|ty| {
        let validator_binding_ = crate::path::validator_binding_(quill_json_path);
        quote!(.with_validator(#validator_binding_::new::<#ty, Self>()))
    });

    let converter = field.attrs.converter.as_ref().map(|ty| {
        let converter_binding_ = crate::path::converter_binding_(quill_json_path);
        quote!(.with_converter(#converter_binding_::new::<#ty, Self>()))
    });

    quote! {
        #field_info_::new(#name, #index) #transient #validator #converter
    }
}

//! See following macros:
//!
//! - [`Reflect`](derive_reflect)
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Object Reflection Derivation
///
/// `#[derive(Reflect)]` implements the following traits for a struct with
/// named fields (or a unit struct):
///
/// - `Reflect`, reporting the `Object` kind.
/// - `Object`, describing the declared fields in declaration order.
/// - `Serializable`, only when the type opts in (see below).
///
/// Tuple structs, enums and unions are rejected. Type parameters receive a
/// `Reflect` bound; lifetime parameters are not supported, since reflected
/// types must be `'static`.
///
/// ## Serializable Marker
///
/// The engine refuses objects whose type does not carry the marker:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(Serializable)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
/// ```
///
/// This attribute can only be applied at the type level.
///
/// ## Root Label
///
/// `root = "..."` prefixes the document with a quoted label. A bare `root`,
/// or an empty label, emits no prefix.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(Serializable, root = "Person")]
/// struct Person { /* ... */ }
/// // "Person" {"name" : ...}
/// ```
///
/// This attribute can only be applied at the type level.
///
/// ## Transient Fields
///
/// A `transient` field is listed in the type metadata but never read nor
/// emitted. Its type does not need to implement `Reflect`.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(Serializable)]
/// struct Session {
///     user: String,
///     #[reflect(transient)]
///     token: Secret,
/// }
/// ```
///
/// ## Validators and Converters
///
/// `validator = Type` binds a `Validator<Self>`, `converter = Type` binds a
/// `Converter<Self>`. Both receive the whole object, not the field value. At
/// most one of each can be bound to a field.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(Serializable)]
/// struct User {
///     #[reflect(validator = NotBlank, converter = FullName)]
///     first: String,
///     last: String,
/// }
/// ```
///
/// These attributes can only be applied to fields.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::ReflectObject::from_ast(&ast) {
        Ok(object) => impls::impl_object(&object).into(),
        Err(err) => err.into_compile_error().into(),
    }
}

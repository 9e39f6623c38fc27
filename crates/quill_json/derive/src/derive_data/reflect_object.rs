use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, GenericParam, Generics, Ident, Path, parse_quote};

use super::{FieldAttributes, TypeAttributes};

/// A parsed struct, ready for code generation.
pub(crate) struct ReflectObject<'a> {
    quill_json_path: Path,
    ident: &'a Ident,
    generics: &'a Generics,
    attrs: TypeAttributes,
    fields: Vec<ObjectField<'a>>,
}

/// A declared field of a [`ReflectObject`].
pub(crate) struct ObjectField<'a> {
    pub ident: &'a Ident,
    /// Declaration index, transient fields included.
    pub index: usize,
    pub attrs: FieldAttributes,
}

impl<'a> ReflectObject<'a> {
    pub fn from_ast(ast: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&ast.attrs)?;

        if let Some(lifetime) = ast.generics.lifetimes().next() {
            return Err(syn::Error::new(
                lifetime.span(),
                "reflected types must be `'static`, lifetime parameters are not supported",
            ));
        }

        let fields = match &ast.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named
                    .named
                    .iter()
                    .enumerate()
                    .map(|(index, field)| {
                        Ok(ObjectField {
                            // Named fields always carry an identifier.
                            ident: field
                                .ident
                                .as_ref()
                                .ok_or_else(|| syn::Error::new(field.span(), "unnamed field"))?,
                            index,
                            attrs: FieldAttributes::parse_attrs(&field.attrs)?,
                        })
                    })
                    .collect::<syn::Result<Vec<_>>>()?,
                Fields::Unit => Vec::new(),
                Fields::Unnamed(unnamed) => {
                    return Err(syn::Error::new(
                        unnamed.span(),
                        "`Reflect` requires named fields, tuple structs are not supported",
                    ));
                }
            },
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span,
                    "`Reflect` can only be derived for structs",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "`Reflect` can only be derived for structs",
                ));
            }
        };

        Ok(Self {
            quill_json_path: crate::path::quill_json(),
            ident: &ast.ident,
            generics: &ast.generics,
            attrs,
            fields,
        })
    }

    #[inline]
    pub fn quill_json_path(&self) -> &Path {
        &self.quill_json_path
    }

    #[inline]
    pub fn ident(&self) -> &Ident {
        self.ident
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn fields(&self) -> &[ObjectField<'a>] {
        &self.fields
    }

    /// Fields that can be read through `Object::field_at`.
    pub fn active_fields(&self) -> impl Iterator<Item = &ObjectField<'a>> {
        self.fields.iter().filter(|field| field.attrs.transient.is_none())
    }

    /// The generics of the type, every type parameter bound by `Reflect`.
    pub fn bounded_generics(&self) -> Generics {
        let reflect_ = crate::path::reflect_(&self.quill_json_path);
        let mut generics = self.generics.clone();

        let params: Vec<Ident> = generics
            .params
            .iter()
            .filter_map(|param| match param {
                GenericParam::Type(ty) => Some(ty.ident.clone()),
                _ => None,
            })
            .collect();

        let where_clause = generics.make_where_clause();
        for param in params {
            where_clause.predicates.push(parse_quote!(#param: #reflect_));
        }

        generics
    }
}

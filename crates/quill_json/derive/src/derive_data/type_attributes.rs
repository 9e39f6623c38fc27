use proc_macro2::Span;
use syn::{Attribute, LitStr, Token, meta::ParseNestedMeta, spanned::Spanned};

use crate::REFLECT_ATTRIBUTE_NAME;

/// The type level `#[reflect(...)]` attributes.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    /// `#[reflect(Serializable)]`
    pub serializable: Option<Span>,
    /// `#[reflect(root)]` or `#[reflect(root = "...")]`, the label is empty for the former.
    pub root: Option<LitStr>,
}

impl TypeAttributes {
    /// Parse all `#[reflect(...)]` attributes of a type.
    ///
    /// Other attributes are ignored.
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
            }
        }

        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("Serializable") {
            if self.serializable.is_some() {
                return Err(meta.error("duplicate `Serializable` attribute"));
            }
            self.serializable = Some(meta.path.span());
            return Ok(());
        }

        if meta.path.is_ident("root") {
            if self.root.is_some() {
                return Err(meta.error("duplicate `root` attribute"));
            }
            let label = if meta.input.peek(Token![=]) {
                meta.value()?.parse::<LitStr>()?
            } else {
                LitStr::new("", meta.input.span())
            };
            self.root = Some(label);
            return Ok(());
        }

        if meta.path.is_ident("transient")
            || meta.path.is_ident("validator")
            || meta.path.is_ident("converter")
        {
            return Err(meta.error("this attribute can only be applied to fields"));
        }

        Err(meta.error("unsupported attribute, expected `Serializable` or `root`"))
    }
}

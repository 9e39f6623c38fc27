use proc_macro2::Span;
use syn::{Attribute, Type, meta::ParseNestedMeta, spanned::Spanned};

use crate::REFLECT_ATTRIBUTE_NAME;

/// The field level `#[reflect(...)]` attributes.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// `#[reflect(transient)]`
    pub transient: Option<Span>,
    /// `#[reflect(validator = Type)]`
    pub validator: Option<Type>,
    /// `#[reflect(converter = Type)]`
    pub converter: Option<Type>,
}

impl FieldAttributes {
    /// Parse all `#[reflect(...)]` attributes of a field.
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
            }
        }

        if let Some(span) = this.transient
            && (this.validator.is_some() || this.converter.is_some())
        {
            return Err(syn::Error::new(
                span,
                "a transient field is never emitted, it cannot bind rules",
            ));
        }

        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("transient") {
            if self.transient.is_some() {
                return Err(meta.error("duplicate `transient` attribute"));
            }
            self.transient = Some(meta.path.span());
            return Ok(());
        }

        if meta.path.is_ident("validator") {
            if self.validator.is_some() {
                return Err(meta.error("a field can bind at most one validator"));
            }
            self.validator = Some(meta.value()?.parse()?);
            return Ok(());
        }

        if meta.path.is_ident("converter") {
            if self.converter.is_some() {
                return Err(meta.error("a field can bind at most one converter"));
            }
            self.converter = Some(meta.value()?.parse()?);
            return Ok(());
        }

        if meta.path.is_ident("Serializable") || meta.path.is_ident("root") {
            return Err(meta.error("this attribute can only be applied at the type level"));
        }

        Err(meta.error("unsupported attribute, expected `transient`, `validator` or `converter`"))
    }
}

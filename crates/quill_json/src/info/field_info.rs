use core::fmt;

use crate::rules::{ConverterBinding, ValidatorBinding};

/// Information for a declared (named) field.
///
/// # Examples
///
/// ```
/// use quill_json::{derive::Reflect, ops::Object};
///
/// #[derive(Reflect)]
/// struct Foo {
///     value: f32,
///     #[reflect(transient)]
///     cache: Option<f32>,
/// }
///
/// let foo = Foo { value: 1.0, cache: None };
/// let info = foo.object_info();
///
/// let field = info.field("value").unwrap();
/// assert_eq!(field.index(), 0);
/// assert!(!field.is_transient());
///
/// assert!(info.field("cache").unwrap().is_transient());
/// ```
#[derive(Clone, Copy)]
pub struct FieldInfo {
    name: &'static str,
    index: usize,
    transient: bool,
    validator: Option<ValidatorBinding>,
    converter: Option<ConverterBinding>,
}

impl FieldInfo {
    /// Creates a new [`FieldInfo`] for the field `name`, read through
    /// [`Object::field_at`] with `index`.
    ///
    /// [`Object::field_at`]: crate::ops::Object::field_at
    #[inline]
    pub const fn new(name: &'static str, index: usize) -> Self {
        Self {
            name,
            index,
            transient: false,
            validator: None,
            converter: None,
        }
    }

    /// Marks the field as transient: it is never read nor emitted.
    #[inline]
    pub const fn with_transient(mut self) -> Self {
        self.transient = true;
        self
    }

    /// Binds a validator to the field, replacing any previous one.
    #[inline]
    pub const fn with_validator(mut self, validator: ValidatorBinding) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Binds a converter to the field, replacing any previous one.
    #[inline]
    pub const fn with_converter(mut self, converter: ConverterBinding) -> Self {
        self.converter = Some(converter);
        self
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the accessor index.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub const fn is_transient(&self) -> bool {
        self.transient
    }

    #[inline]
    pub const fn validator(&self) -> Option<&ValidatorBinding> {
        self.validator.as_ref()
    }

    #[inline]
    pub const fn converter(&self) -> Option<&ConverterBinding> {
        self.converter.as_ref()
    }
}

impl fmt::Debug for FieldInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldInfo")
            .field("name", &self.name)
            .field("index", &self.index)
            .field("transient", &self.transient)
            .field("validator", &self.validator.as_ref().map(ValidatorBinding::rule))
            .field("converter", &self.converter.as_ref().map(ConverterBinding::rule))
            .finish()
    }
}

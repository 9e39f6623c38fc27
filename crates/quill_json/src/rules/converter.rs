use alloc::string::String;
use core::fmt;

use super::{RuleError, downcast};
use crate::Reflect;

// -----------------------------------------------------------------------------
// Converter

/// Produces the textual value of a field from a whole object of type `T`.
///
/// The returned string is emitted verbatim between quotes; the field's own
/// value is never rendered.
///
/// # Examples
///
/// ```
/// use quill_json::derive::Reflect;
/// use quill_json::rules::{Converter, RuleError};
///
/// struct FullName;
///
/// impl Converter<User> for FullName {
///     fn create() -> Result<Self, RuleError> {
///         Ok(FullName)
///     }
///
///     fn convert(&self, user: &User) -> Result<String, RuleError> {
///         Ok(format!("{} {}", user.first, user.last))
///     }
/// }
///
/// #[derive(Reflect)]
/// #[reflect(Serializable)]
/// struct User {
///     #[reflect(converter = FullName)]
///     first: String,
///     #[reflect(transient)]
///     last: String,
/// }
///
/// let user = User { first: "Ada".into(), last: "Lovelace".into() };
/// assert_eq!(quill_json::to_string(&user).unwrap(), r#"{"first" : "Ada Lovelace"}"#);
/// ```
pub trait Converter<T: ?Sized>: Sized + 'static {
    /// Creates the instance used for one field visit.
    fn create() -> Result<Self, RuleError>;

    /// Returns the text emitted for the field.
    fn convert(&self, object: &T) -> Result<String, RuleError>;
}

// -----------------------------------------------------------------------------
// ConverterBinding

/// A type-erased [`Converter`] attached to a field.
#[derive(Clone, Copy)]
pub struct ConverterBinding {
    rule: &'static str,
    run: fn(&dyn Reflect) -> Result<String, RuleError>,
}

impl ConverterBinding {
    /// Binds converter `C` for objects of type `T`.
    #[inline]
    pub fn new<C: Converter<T>, T: Reflect>() -> Self {
        Self {
            rule: core::any::type_name::<C>(),
            run: run_converter::<C, T>,
        }
    }

    /// Returns the type path of the bound converter.
    #[inline]
    pub fn rule(&self) -> &'static str {
        self.rule
    }

    /// Creates the converter and invokes it on `object`.
    #[inline]
    pub fn convert(&self, object: &dyn Reflect) -> Result<String, RuleError> {
        (self.run)(object)
    }
}

impl fmt::Debug for ConverterBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConverterBinding").field(&self.rule).finish()
    }
}

fn run_converter<C: Converter<T>, T: Reflect>(object: &dyn Reflect) -> Result<String, RuleError> {
    let object = downcast::<T>(object)?;
    C::create()?.convert(object)
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;

    use super::{Converter, ConverterBinding};
    use crate::rules::RuleError;

    struct Hex;

    impl Converter<u32> for Hex {
        fn create() -> Result<Self, RuleError> {
            Ok(Hex)
        }

        fn convert(&self, value: &u32) -> Result<String, RuleError> {
            Ok(format!("{value:#x}"))
        }
    }

    struct Unbuildable;

    impl Converter<u32> for Unbuildable {
        fn create() -> Result<Self, RuleError> {
            Err(RuleError::custom("missing table"))
        }

        fn convert(&self, _: &u32) -> Result<String, RuleError> {
            Ok(String::new())
        }
    }

    #[test]
    fn binding_converts() {
        let binding = ConverterBinding::new::<Hex, u32>();
        assert_eq!(binding.convert(&255_u32).as_deref(), Ok("0xff"));
        assert!(binding.convert(&"255").is_err());
    }

    #[test]
    fn creation_failure() {
        let binding = ConverterBinding::new::<Unbuildable, u32>();
        assert_eq!(binding.convert(&1_u32), Err(RuleError::custom("missing table")));
    }
}

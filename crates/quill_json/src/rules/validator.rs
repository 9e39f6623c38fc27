use core::fmt;

use super::{RuleError, downcast};
use crate::Reflect;

// -----------------------------------------------------------------------------
// Validator

/// A predicate over a whole object of type `T`.
///
/// # Examples
///
/// ```
/// use quill_json::derive::Reflect;
/// use quill_json::rules::{RuleError, Validator};
///
/// struct NotBlank;
///
/// impl Validator<User> for NotBlank {
///     fn create() -> Result<Self, RuleError> {
///         Ok(NotBlank)
///     }
///
///     fn validate(&self, user: &User) -> bool {
///         !user.name.trim().is_empty()
///     }
/// }
///
/// #[derive(Reflect)]
/// #[reflect(Serializable)]
/// struct User {
///     #[reflect(validator = NotBlank)]
///     name: String,
/// }
///
/// let ok = User { name: "ana".into() };
/// assert_eq!(quill_json::to_string(&ok).unwrap(), r#"{"name" : "ana"}"#);
///
/// let blank = User { name: "  ".into() };
/// assert!(quill_json::to_string(&blank).is_err());
/// ```
pub trait Validator<T: ?Sized>: Sized + 'static {
    /// Creates the instance used for one field visit.
    fn create() -> Result<Self, RuleError>;

    /// Returns `false` to reject the object.
    fn validate(&self, object: &T) -> bool;
}

// -----------------------------------------------------------------------------
// ValidatorBinding

/// A type-erased [`Validator`] attached to a field.
///
/// Holds a monomorphized function that downcasts the enclosing object,
/// creates the validator and runs it.
#[derive(Clone, Copy)]
pub struct ValidatorBinding {
    rule: &'static str,
    run: fn(&dyn Reflect) -> Result<bool, RuleError>,
}

impl ValidatorBinding {
    /// Binds validator `V` for objects of type `T`.
    #[inline]
    pub fn new<V: Validator<T>, T: Reflect>() -> Self {
        Self {
            rule: core::any::type_name::<V>(),
            run: run_validator::<V, T>,
        }
    }

    /// Returns the type path of the bound validator.
    #[inline]
    pub fn rule(&self) -> &'static str {
        self.rule
    }

    /// Creates the validator and evaluates it on `object`.
    #[inline]
    pub fn validate(&self, object: &dyn Reflect) -> Result<bool, RuleError> {
        (self.run)(object)
    }
}

impl fmt::Debug for ValidatorBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ValidatorBinding").field(&self.rule).finish()
    }
}

fn run_validator<V: Validator<T>, T: Reflect>(object: &dyn Reflect) -> Result<bool, RuleError> {
    let object = downcast::<T>(object)?;
    let validator = V::create()?;
    Ok(validator.validate(object))
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{Validator, ValidatorBinding};
    use crate::rules::RuleError;

    struct Even;

    impl Validator<u32> for Even {
        fn create() -> Result<Self, RuleError> {
            Ok(Even)
        }

        fn validate(&self, value: &u32) -> bool {
            value % 2 == 0
        }
    }

    #[test]
    fn binding_downcasts() {
        let binding = ValidatorBinding::new::<Even, u32>();
        assert_eq!(binding.validate(&4_u32), Ok(true));
        assert_eq!(binding.validate(&3_u32), Ok(false));
        assert!(binding.rule().ends_with("Even"));
    }

    #[test]
    fn binding_type_mismatch() {
        let binding = ValidatorBinding::new::<Even, u32>();
        assert_eq!(
            binding.validate(&4_i64),
            Err(RuleError::TypeMismatch {
                expected: "u32",
                found: "i64",
            })
        );
    }
}

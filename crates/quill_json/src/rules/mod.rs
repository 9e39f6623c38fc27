//! Provide the per-field rule contracts: validators and converters.
//!
//! Both kinds of rule receive the **whole enclosing object**, not the value of
//! the field they are attached to, so they can reason about cross-field state.
//!
//! - [`Validator`]: a predicate evaluated before the field is rendered; a
//!   `false` result aborts the serialization.
//! - [`Converter`]: replaces the field's rendering with a custom string.
//!
//! A rule is attached to a field with `#[reflect(validator = T)]` or
//! `#[reflect(converter = T)]`; the derive macro turns the attribute into a
//! [`ValidatorBinding`] or [`ConverterBinding`] stored in the field's
//! [`FieldInfo`](crate::info::FieldInfo). A fresh rule instance is created
//! through `create` every time a bound field is visited.

// -----------------------------------------------------------------------------
// Modules

mod converter;
mod rule_error;
mod validator;

// -----------------------------------------------------------------------------
// Exports

pub use converter::{Converter, ConverterBinding};
pub use rule_error::RuleError;
pub use validator::{Validator, ValidatorBinding};

// -----------------------------------------------------------------------------
// Internal API

use crate::Reflect;

/// Downcasts the object handed to a binding to the type the rule was declared for.
fn downcast<T: Reflect>(object: &dyn Reflect) -> Result<&T, RuleError> {
    object
        .downcast_ref::<T>()
        .ok_or_else(|| RuleError::TypeMismatch {
            expected: core::any::type_name::<T>(),
            found: object.reflect_type_path(),
        })
}

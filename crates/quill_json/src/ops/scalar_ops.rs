use core::fmt::Display;

use crate::Reflect;

/// A value written through its `Display` form, without quotes.
///
/// Implemented for every [`Reflect`] type that is also [`Display`]; a type
/// only has to return [`ReflectRef::Scalar`] to be rendered as one.
///
/// The engine can still recover the concrete type, so strict output quotes
/// `char` values and writes non-finite floats as `null`.
///
/// # Examples
///
/// ```
/// use quill_json::ops::Scalar;
/// use quill_json::{Reflect, ReflectRef};
///
/// let value: &dyn Reflect = &'x';
/// let ReflectRef::Scalar(scalar) = value.reflect_ref() else {
///     unreachable!();
/// };
///
/// assert_eq!(scalar.to_string(), "x");
/// assert!(scalar.as_reflect().is::<char>());
/// ```
///
/// [`ReflectRef::Scalar`]: crate::ReflectRef::Scalar
pub trait Scalar: Reflect + Display {
    /// Casts this value to `&dyn Reflect`.
    fn as_reflect(&self) -> &dyn Reflect;
}

impl<T: Reflect + Display> Scalar for T {
    #[inline]
    fn as_reflect(&self) -> &dyn Reflect {
        self
    }
}

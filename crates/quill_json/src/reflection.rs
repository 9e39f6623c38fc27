use core::any::Any;
use core::fmt;

use crate::ops::{List, Map, Object, Scalar};

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait of the serialization engine.
///
/// A `Reflect` value tells the engine *what kind* of value it is, through
/// [`Reflect::reflect_ref`]. The engine never inspects a value in any other way,
/// so this trait replaces runtime field introspection.
///
/// # Recommendations
///
/// Structs should use [the derive macro](crate::derive::Reflect), which also
/// implements [`Object`] and generates the field metadata.
///
/// The crate provides implementations for primitives, strings, `Option`,
/// smart pointers, ordered collections and maps.
///
/// # Examples
///
/// ```
/// use quill_json::{Reflect, ReflectRef};
///
/// let value: &dyn Reflect = &12_i32;
/// assert!(matches!(value.reflect_ref(), ReflectRef::Scalar(_)));
///
/// let value: &dyn Reflect = &Option::<i32>::None;
/// assert!(value.reflect_ref().is_null());
/// ```
///
/// # Manual Implementation
///
/// A type rendered through its `Display` form only has to pick a kind:
///
/// ```
/// use core::fmt;
/// use quill_json::{Reflect, ReflectRef};
///
/// struct Celsius(f32);
///
/// impl fmt::Display for Celsius {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}C", self.0)
///     }
/// }
///
/// impl Reflect for Celsius {
///     fn reflect_ref(&self) -> ReflectRef<'_> {
///         ReflectRef::Text(self)
///     }
/// }
///
/// // Only objects can be serialized on their own.
/// assert!(quill_json::to_string(&Celsius(21.5)).is_err());
/// ```
pub trait Reflect: Any {
    /// Returns the type path of the underlying value, for diagnostics.
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    /// Returns an immutable "kind view" of this value.
    fn reflect_ref(&self) -> ReflectRef<'_>;
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quill_json::Reflect;
    /// let x: &dyn Reflect = &10_i32;
    ///
    /// assert!(x.is::<i32>());
    /// assert!(!x.is::<u32>());
    /// ```
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        <dyn Any>::is::<T>(self)
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// If the underlying value is not of type `T`, returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quill_json::Reflect;
    /// let x: &dyn Reflect = &10_i32;
    ///
    /// assert_eq!(x.downcast_ref::<i32>(), Some(&10));
    /// assert_eq!(x.downcast_ref::<u8>(), None);
    /// ```
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }
}

impl fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Reflect")
            .field(&self.reflect_type_path())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable, kind-specific view of a [`Reflect`] value.
///
/// The kind decides how the value is rendered:
///
/// | kind | rendering |
/// |---|---|
/// | `Null` | field skipped; `null` inside collections |
/// | `Scalar` | `Display` form, unquoted (strict: `char` quoted, non-finite floats `null`) |
/// | `Text` | `Display` form, quoted |
/// | `List` | `[a, b]` |
/// | `Map` | `{"k" : v}` |
/// | `Object` | field introspection, `{"field" : v}` |
#[derive(Clone, Copy)]
pub enum ReflectRef<'a> {
    /// An absent value, e.g. `Option::None`.
    Null,
    /// Numbers, `bool` and `char`.
    Scalar(&'a dyn Scalar),
    /// Strings, and any other value taken through its textual form.
    Text(&'a dyn fmt::Display),
    /// An ordered collection.
    List(&'a dyn List),
    /// A key-value map.
    Map(&'a dyn Map),
    /// A structured value with declared fields.
    Object(&'a dyn Object),
}

impl ReflectRef<'_> {
    /// Returns `true` for [`ReflectRef::Null`].
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the name of the kind.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Scalar(_) => "scalar",
            Self::Text(_) => "text",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Object(_) => "object",
        }
    }
}

impl fmt::Debug for ReflectRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind_name())
    }
}

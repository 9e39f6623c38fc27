use crate::Reflect;
use crate::info::ObjectInfo;

// -----------------------------------------------------------------------------
// Object

/// A structured value with declared, named fields.
///
/// Usually implemented by [`#[derive(Reflect)]`](crate::derive::Reflect).
///
/// The metadata returned by [`Object::object_info`] lists every declared
/// field, in declaration order, and [`Object::field_at`] reads the current
/// value of the field at a given [`FieldInfo::index`].
///
/// # Manual Implementation
///
/// The two methods must agree: every non-transient field listed in the
/// metadata must be readable through `field_at`, otherwise serialization
/// fails with [`SerializeError::Access`].
///
/// ```
/// use quill_json::{Reflect, ReflectRef};
/// use quill_json::info::{FieldInfo, ObjectInfo};
/// use quill_json::ops::{Object, Serializable};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Reflect for Point {
///     fn reflect_ref(&self) -> ReflectRef<'_> {
///         ReflectRef::Object(self)
///     }
/// }
///
/// impl Object for Point {
///     fn object_info(&self) -> ObjectInfo {
///         ObjectInfo::new_serializable::<Self>(&[
///             FieldInfo::new("x", 0),
///             FieldInfo::new("y", 1),
///         ])
///     }
///
///     fn field_at(&self, index: usize) -> Option<&dyn Reflect> {
///         match index {
///             0 => Some(&self.x),
///             1 => Some(&self.y),
///             _ => None,
///         }
///     }
/// }
///
/// impl Serializable for Point {}
///
/// assert_eq!(quill_json::to_string(&Point { x: 1, y: 2 }).unwrap(), r#"{"x" : 1, "y" : 2}"#);
/// ```
///
/// [`FieldInfo::index`]: crate::info::FieldInfo::index
/// [`SerializeError::Access`]: crate::SerializeError::Access
pub trait Object: Reflect {
    /// Returns the type metadata.
    ///
    /// The metadata is built on every call and never cached by the engine.
    fn object_info(&self) -> ObjectInfo;

    /// Returns the value of the field at `index`, if it can be read.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;
}

// -----------------------------------------------------------------------------
// Serializable

/// The capability marker of serializable types.
///
/// The engine works on `dyn Reflect` and reads the marker at runtime through
/// [`ObjectInfo::is_serializable`]. That flag can only be set by
/// [`ObjectInfo::new_serializable`], which requires this trait, so a type
/// reported as serializable always implements it.
///
/// `#[reflect(Serializable)]` makes the derive macro implement this trait and
/// build its metadata with `new_serializable`.
pub trait Serializable: Object {}

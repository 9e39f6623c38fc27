use alloc::boxed::Box;

use crate::info::{FieldInfo, RootName};
use crate::ops::{Object, Serializable};

/// A container for the metadata of an [`Object`] type.
///
/// # Examples
///
/// ```rust
/// use quill_json::{derive::Reflect, ops::Object};
///
/// #[derive(Reflect)]
/// #[reflect(Serializable, root = "Person")]
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// let person = Person { name: "joao pedro".into(), age: 12 };
/// let info = person.object_info();
///
/// assert!(info.is_serializable());
/// assert_eq!(info.label(), Some("Person"));
/// assert_eq!(info.field_names().collect::<Vec<_>>(), ["name", "age"]);
/// ```
#[derive(Clone, Debug)]
pub struct ObjectInfo {
    type_path: &'static str,
    root: Option<RootName>,
    serializable: bool,
    fields: Box<[FieldInfo]>,
}

impl ObjectInfo {
    /// Create a new [`ObjectInfo`].
    ///
    /// The order of fields is the input order, which must be the
    /// declaration order of the type.
    pub fn new<T: Object>(fields: &[FieldInfo]) -> Self {
        Self {
            type_path: core::any::type_name::<T>(),
            root: None,
            serializable: false,
            fields: fields.into(),
        }
    }

    /// Create a new [`ObjectInfo`] carrying the serializable marker.
    ///
    /// Only types implementing [`Serializable`] can be described this way, so
    /// the runtime flag never disagrees with the trait.
    ///
    /// ```compile_fail
    /// use quill_json::info::ObjectInfo;
    /// use quill_json::{Reflect, ReflectRef, ops::Object};
    ///
    /// struct Unmarked;
    ///
    /// impl Reflect for Unmarked {
    ///     fn reflect_ref(&self) -> ReflectRef<'_> {
    ///         ReflectRef::Object(self)
    ///     }
    /// }
    ///
    /// impl Object for Unmarked {
    ///     fn object_info(&self) -> ObjectInfo {
    ///         ObjectInfo::new_serializable::<Self>(&[])
    ///     }
    ///
    ///     fn field_at(&self, _: usize) -> Option<&dyn Reflect> {
    ///         None
    ///     }
    /// }
    /// ```
    pub fn new_serializable<T: Serializable>(fields: &[FieldInfo]) -> Self {
        Self {
            serializable: true,
            ..Self::new::<T>(fields)
        }
    }

    /// Attaches a root label.
    #[inline]
    pub fn with_root(mut self, root: RootName) -> Self {
        self.root = Some(root);
        self
    }

    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.type_path
    }

    #[inline]
    pub fn root(&self) -> Option<&RootName> {
        self.root.as_ref()
    }

    /// Returns the root label if the type declares a non-empty one.
    #[inline]
    pub fn label(&self) -> Option<&'static str> {
        self.root.and_then(|root| root.label())
    }

    /// Returns `true` if the type carries the serializable marker.
    #[inline]
    pub fn is_serializable(&self) -> bool {
        self.serializable
    }

    /// Returns the [`FieldInfo`] for the given `name`, if present.
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Returns the [`FieldInfo`] at the given position, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&FieldInfo> {
        self.fields.get(index)
    }

    /// Returns an iterator over the fields in **declaration order**.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &FieldInfo> {
        self.fields.iter()
    }

    /// Returns the field names in declaration order.
    pub fn field_names(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.fields.iter().map(FieldInfo::name)
    }

    /// Returns the number of declared fields, transient ones included.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::derive::Reflect;
    use crate::ops::Object;

    #[derive(Reflect)]
    struct Draft {
        _body: u8,
    }

    #[derive(Reflect)]
    #[reflect(Serializable)]
    struct Published {
        _body: u8,
    }

    #[test]
    fn marker_follows_the_trait() {
        let draft = Draft { _body: 0 }.object_info();
        assert!(!draft.is_serializable());
        assert_eq!(draft.label(), None);

        let published = Published { _body: 0 }.object_info();
        assert!(published.is_serializable());
        assert_eq!(published.field_len(), 1);
    }
}

/// An optional textual label attached to a type.
///
/// When a serialized document's root object declares a non-empty label,
/// the output starts with the quoted label followed by a space:
/// `"Person" {"name" : "joao pedro"}`.
///
/// An empty label behaves as no label at all.
///
/// # Examples
///
/// ```
/// use quill_json::info::RootName;
///
/// assert_eq!(RootName::new("Person").label(), Some("Person"));
/// assert_eq!(RootName::new("").label(), None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RootName {
    name: &'static str,
}

impl RootName {
    /// Creates a label. The name may be empty.
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// Returns the declared name, possibly empty.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the name if it is non-empty.
    #[inline]
    pub const fn label(&self) -> Option<&'static str> {
        if self.name.is_empty() {
            None
        } else {
            Some(self.name)
        }
    }
}

//! Field enumeration of a single object.

use alloc::vec::Vec;

use crate::info::{FieldInfo, ObjectInfo};
use crate::ops::Object;
use crate::{Reflect, SerializeError};

/// A declared, non-transient field paired with its current value.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FieldDescriptor<'a> {
    pub info: &'a FieldInfo,
    pub value: &'a dyn Reflect,
}

impl FieldDescriptor<'_> {
    #[inline]
    pub fn name(&self) -> &'static str {
        self.info.name()
    }
}

/// Returns the candidate fields of `object`, in declaration order.
///
/// Transient fields are left out. A declared field the object cannot hand
/// out is an [`SerializeError::Access`].
pub(crate) fn enumerate<'a>(
    object: &'a dyn Object,
    info: &'a ObjectInfo,
) -> Result<Vec<FieldDescriptor<'a>>, SerializeError> {
    let mut fields = Vec::with_capacity(info.field_len());

    for field in info.iter().filter(|field| !field.is_transient()) {
        let Some(value) = object.field_at(field.index()) else {
            return Err(SerializeError::Access {
                type_path: info.type_path(),
                field: field.name(),
            });
        };
        fields.push(FieldDescriptor { info: field, value });
    }

    Ok(fields)
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::enumerate;
    use crate::derive::Reflect;
    use crate::info::{FieldInfo, ObjectInfo};
    use crate::ops::{Object, Serializable};
    use crate::{Reflect, ReflectRef, SerializeError};

    #[derive(Reflect)]
    #[reflect(Serializable)]
    struct Account {
        id: u32,
        #[reflect(transient)]
        _password: String,
        owner: Option<String>,
    }

    #[test]
    fn skips_transient_fields() {
        let account = Account {
            id: 7,
            _password: String::from("hunter2"),
            owner: None,
        };
        let info = account.object_info();
        let fields = enumerate(&account, &info).unwrap();

        let names: alloc::vec::Vec<_> = fields.iter().map(|f| f.name()).collect();
        assert_eq!(names, ["id", "owner"]);
        assert!(fields[1].value.reflect_ref().is_null());
    }

    struct Broken;

    impl Reflect for Broken {
        fn reflect_ref(&self) -> ReflectRef<'_> {
            ReflectRef::Object(self)
        }
    }

    impl Object for Broken {
        fn object_info(&self) -> ObjectInfo {
            ObjectInfo::new_serializable::<Self>(&[FieldInfo::new("missing", 0)])
        }

        fn field_at(&self, _index: usize) -> Option<&dyn Reflect> {
            None
        }
    }

    impl Serializable for Broken {}

    #[test]
    fn unreadable_field() {
        let info = Broken.object_info();
        let err = enumerate(&Broken, &info).unwrap_err();
        assert!(matches!(err, SerializeError::Access { field: "missing", .. }));
    }
}

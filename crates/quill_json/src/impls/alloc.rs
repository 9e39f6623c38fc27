use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::collections::{BTreeMap, BTreeSet, VecDeque};
use alloc::rc::Rc;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use super::{impl_reflect_list, impl_reflect_map, impl_reflect_transparent};
use crate::{Reflect, ReflectRef};

impl Reflect for String {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Text(self)
    }
}

impl Reflect for Cow<'static, str> {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Text(self)
    }
}

impl_reflect_transparent!(Box);
impl_reflect_transparent!(Rc);
impl_reflect_transparent!(Arc);

impl_reflect_list!(Vec, VecDeque, BTreeSet);

impl_reflect_map!(BTreeMap);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::{Reflect, ReflectRef};

    #[test]
    fn boxed_reflect_is_transparent() {
        let value: Box<dyn Reflect> = Box::new(String::from("x"));
        assert!(matches!(value.reflect_ref(), ReflectRef::Text(_)));
        assert_eq!(value.reflect_type_path(), "alloc::string::String");
    }

    #[test]
    fn vec_is_list() {
        let values = vec![1_u8, 2];
        let ReflectRef::List(list) = values.reflect_ref() else {
            panic!("`Vec` should be a list");
        };
        assert_eq!(list.len(), 2);
        assert!(!list.is_empty());
    }

    #[test]
    fn btree_map_iterates_sorted() {
        let map = BTreeMap::from([("b", 2_i32), ("a", 1)]);
        let ReflectRef::Map(map) = map.reflect_ref() else {
            panic!("`BTreeMap` should be a map");
        };
        let keys = map.iter().map(|(k, _)| k.to_string()).collect::<Vec<_>>();
        assert_eq!(keys, ["a", "b"]);
    }
}

use crate::{Reflect, ReflectRef};

macro_rules! impl_reflect_scalar {
    ($($ty:ty),* $(,)?) => {$(
        impl Reflect for $ty {
            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Scalar(self)
            }
        }
    )*};
}

impl_reflect_scalar!(
    bool, char, //
    u8, u16, u32, u64, u128, usize, //
    i8, i16, i32, i64, i128, isize, //
    f32, f64,
);

impl Reflect for &'static str {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Text(self)
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::List(self)
    }
}

impl<T: Reflect, const N: usize> crate::ops::List for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    fn iter(&self) -> alloc::boxed::Box<dyn Iterator<Item = &dyn Reflect> + '_> {
        alloc::boxed::Box::new(self.as_slice().iter().map(|v| v as &dyn Reflect))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::{Reflect, ReflectRef};

    #[test]
    fn scalar_and_text_kinds() {
        let values: [&dyn Reflect; 4] = [&1_u8, &-2.5_f64, &true, &'c'];
        for value in values {
            assert!(matches!(value.reflect_ref(), ReflectRef::Scalar(_)));
        }

        let text: &dyn Reflect = &"hello";
        let ReflectRef::Text(display) = text.reflect_ref() else {
            panic!("`&str` should be text");
        };
        assert_eq!(alloc::format!("{display}"), "hello");
    }

    #[test]
    fn array_is_list() {
        let array = [1, 2, 3];
        let ReflectRef::List(list) = array.reflect_ref() else {
            panic!("arrays should be lists");
        };
        assert_eq!(list.len(), 3);
        let items = list
            .iter()
            .filter_map(|v| v.downcast_ref::<i32>())
            .copied()
            .collect::<alloc::vec::Vec<_>>();
        assert_eq!(items, [1, 2, 3]);
    }
}

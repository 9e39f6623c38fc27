use core::num::{NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize};
use core::num::{NonZeroU8, NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize};

use crate::{Reflect, ReflectRef};

impl<T: Reflect> Reflect for Option<T> {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        match self {
            Some(value) => value.reflect_ref(),
            None => ReflectRef::Null,
        }
    }
}

macro_rules! impl_reflect_non_zero {
    ($($ty:ty),* $(,)?) => {$(
        impl Reflect for $ty {
            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Scalar(self)
            }
        }
    )*};
}

impl_reflect_non_zero!(
    NonZeroU8, NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize, //
    NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize,
);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::{Reflect, ReflectRef};

    #[test]
    fn option_delegates() {
        assert!(Option::<u8>::None.reflect_ref().is_null());
        assert!(matches!(Some(3_u8).reflect_ref(), ReflectRef::Scalar(_)));
        assert!(Some(Option::<u8>::None).reflect_ref().is_null());
    }
}

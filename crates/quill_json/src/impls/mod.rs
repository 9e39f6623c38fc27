//! [`Reflect`](crate::Reflect) implementations for foreign types.
//!
//! ## Implemented Menu
//!
//! - native:
//!     - `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`, `bool`, `char` (scalar)
//!     - `&'static str` (text)
//!     - `[T; N]` (list)
//! - core:
//!     - `Option<T>` (`None` is null)
//!     - `NonZero` integers (scalar)
//! - alloc:
//!     - `String`, `Cow<'static, str>` (text)
//!     - `Box<T>`, `Rc<T>`, `Arc<T>` (transparent)
//!     - `Vec<T>`, `VecDeque<T>`, `BTreeSet<T>` (list)
//!     - `BTreeMap<K, V>` (map)
//! - std: ("std" feature)
//!     - `HashMap<K, V, S>` (map)
//! - hashbrown: ("hashbrown" feature)
//!     - `hashbrown::HashMap<K, V, S>` (map)
//!
//! Map keys only need [`Display`](core::fmt::Display).

// -----------------------------------------------------------------------------
// Modules

mod alloc;
mod core;
mod native;

#[cfg(feature = "std")]
mod std;

#[cfg(feature = "hashbrown")]
mod hashbrown;

// -----------------------------------------------------------------------------
// Internal API

macro_rules! impl_reflect_list {
    ($($ty:ident),* $(,)?) => {$(
        impl<T: $crate::Reflect> $crate::Reflect for $ty<T> {
            #[inline]
            fn reflect_ref(&self) -> $crate::ReflectRef<'_> {
                $crate::ReflectRef::List(self)
            }
        }

        impl<T: $crate::Reflect> $crate::ops::List for $ty<T> {
            #[inline]
            fn len(&self) -> usize {
                ::core::iter::ExactSizeIterator::len(&::core::iter::IntoIterator::into_iter(self))
            }

            fn iter(&self) -> ::alloc::boxed::Box<dyn Iterator<Item = &dyn $crate::Reflect> + '_> {
                ::alloc::boxed::Box::new(
                    ::core::iter::IntoIterator::into_iter(self).map(|v| v as &dyn $crate::Reflect),
                )
            }
        }
    )*};
}

macro_rules! impl_reflect_map {
    ($($map:ident)::+ $(, $state:ident)?) => {
        impl<K, V $(, $state)?> $crate::Reflect for $($map)::+<K, V $(, $state)?>
        where
            K: ::core::fmt::Display + 'static,
            V: $crate::Reflect,
            $($state: 'static,)?
        {
            #[inline]
            fn reflect_ref(&self) -> $crate::ReflectRef<'_> {
                $crate::ReflectRef::Map(self)
            }
        }

        impl<K, V $(, $state)?> $crate::ops::Map for $($map)::+<K, V $(, $state)?>
        where
            K: ::core::fmt::Display + 'static,
            V: $crate::Reflect,
            $($state: 'static,)?
        {
            #[inline]
            fn len(&self) -> usize {
                ::core::iter::ExactSizeIterator::len(&::core::iter::IntoIterator::into_iter(self))
            }

            fn iter(
                &self,
            ) -> ::alloc::boxed::Box<
                dyn Iterator<Item = (&dyn ::core::fmt::Display, &dyn $crate::Reflect)> + '_,
            > {
                ::alloc::boxed::Box::new(::core::iter::IntoIterator::into_iter(self).map(|(k, v)| {
                    (k as &dyn ::core::fmt::Display, v as &dyn $crate::Reflect)
                }))
            }
        }
    };
}

macro_rules! impl_reflect_transparent {
    ($($ty:ident)::+) => {
        impl<T: $crate::Reflect + ?Sized> $crate::Reflect for $($ty)::+<T> {
            #[inline]
            fn reflect_type_path(&self) -> &'static str {
                T::reflect_type_path(self)
            }

            #[inline]
            fn reflect_ref(&self) -> $crate::ReflectRef<'_> {
                T::reflect_ref(self)
            }
        }
    };
}

pub(crate) use impl_reflect_list;
pub(crate) use impl_reflect_map;
pub(crate) use impl_reflect_transparent;

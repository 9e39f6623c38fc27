use alloc::boxed::Box;

use crate::Reflect;

/// A trait used to power ordered collections.
///
/// Elements are visited in the collection's own order; the engine renders
/// them as an array literal.
///
/// # Examples
///
/// ```
/// use quill_json::ops::List;
///
/// let vec = vec![1, 2, 3];
/// let list: &dyn List = &vec;
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.iter().next().and_then(|v| v.downcast_ref::<i32>()), Some(&1));
/// ```
pub trait List: Reflect {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the list contains no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the elements, in order.
    fn iter(&self) -> Box<dyn Iterator<Item = &dyn Reflect> + '_>;
}

use alloc::boxed::Box;
use core::fmt::Display;

use crate::Reflect;

/// A trait used to power key-value maps.
///
/// Keys are rendered through their [`Display`] form as quoted labels,
/// values through the full rendering pipeline.
///
/// Iteration order is the map's own order, so `BTreeMap` output is sorted
/// while `HashMap` output is not stable between runs.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use quill_json::ops::Map;
///
/// let map = BTreeMap::from([("a", 1), ("b", 2)]);
/// let map: &dyn Map = &map;
///
/// assert_eq!(map.len(), 2);
/// let (key, _) = map.iter().next().unwrap();
/// assert_eq!(key.to_string(), "a");
/// ```
pub trait Map: Reflect {
    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the map contains no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the entries.
    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Display, &dyn Reflect)> + '_>;
}

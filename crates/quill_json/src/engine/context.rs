use crate::SerializeError;

/// Depth tracking for one serialization call.
///
/// The context is a small `Copy` value passed down the recursion, so every
/// call owns its own counter and concurrent calls cannot observe each other.
///
/// Depth counts objects only: the root object is at depth 1, each nested
/// object (field value, collection element, map value) one level deeper.
///
/// # Examples
///
/// ```
/// use quill_json::engine::SerializationContext;
///
/// let root = SerializationContext::new(2);
/// assert_eq!(root.depth(), 0);
///
/// let first = root.enter().unwrap();
/// let second = first.enter().unwrap();
/// assert_eq!(second.depth(), 2);
/// assert_eq!(second.remaining_depth(), 0);
///
/// assert!(second.enter().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializationContext {
    depth: usize,
    max_depth: usize,
}

impl SerializationContext {
    /// Create a context for a new top-level call.
    #[inline]
    pub const fn new(max_depth: usize) -> Self {
        Self {
            depth: 0,
            max_depth,
        }
    }

    /// Returns the number of objects currently entered.
    #[inline]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns how many more objects can be entered.
    #[inline]
    pub const fn remaining_depth(&self) -> usize {
        self.max_depth.saturating_sub(self.depth)
    }

    /// Returns the context of an object one level deeper.
    ///
    /// Fails with [`SerializeError::DepthExceeded`] past the ceiling.
    #[inline]
    pub const fn enter(self) -> Result<Self, SerializeError> {
        let depth = self.depth + 1;
        if depth > self.max_depth {
            return Err(SerializeError::DepthExceeded {
                depth,
                max_depth: self.max_depth,
            });
        }
        Ok(Self {
            depth,
            max_depth: self.max_depth,
        })
    }
}

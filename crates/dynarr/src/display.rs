//! Space-separated rendering of array contents.

use std::fmt;

/// Formats a slice as its elements separated by single spaces.
///
/// ```
/// use dynarr::DynamicArray;
///
/// let arr = DynamicArray::from([0, 1, 2]);
/// assert_eq!(arr.spaced().to_string(), "0 1 2");
/// ```
pub struct Spaced<'a, T> {
    items: &'a [T],
}

impl<'a, T> Spaced<'a, T> {
    /// Wrap a slice for display.
    pub fn new(items: &'a [T]) -> Self {
        Self { items }
    }
}

impl<T: fmt::Display> fmt::Display for Spaced<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut items = self.items.iter();
        if let Some(first) = items.next() {
            write!(f, "{first}")?;
            for item in items {
                write!(f, " {item}")?;
            }
        }
        Ok(())
    }
}

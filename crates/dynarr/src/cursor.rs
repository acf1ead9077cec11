//! Positional cursors over the live prefix of an array.
//!
//! A cursor holds a borrowed view of the live elements and a signed
//! position into it. Moving a cursor never fails, even past either end;
//! reading through a cursor that is out of range yields `None`. Two
//! cursors compare equal when they refer to the same position of the same
//! array, regardless of the values stored there.

use std::fmt;
use std::ptr;

use crate::DynamicArray;

/// Read-only cursor, the analogue of a pointer into the array.
///
/// Cursors are `Copy`, so a `begin()`/`end()` pair can be taken as often
/// as needed without affecting the array.
pub struct Cursor<'a, T> {
    array: &'a DynamicArray<T>,
    pos: isize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(array: &'a DynamicArray<T>, position: usize) -> Self {
        Self {
            array,
            pos: position as isize,
        }
    }

    /// Current position relative to the first element. May be negative or
    /// past the end after unchecked movement.
    pub fn position(&self) -> isize {
        self.pos
    }

    /// Move forward one element (pre-increment).
    pub fn increment(&mut self) -> &mut Self {
        self.pos += 1;
        self
    }

    /// Move back one element (pre-decrement).
    pub fn decrement(&mut self) -> &mut Self {
        self.pos -= 1;
        self
    }

    /// Move forward one element, returning the cursor as it was before the
    /// move (post-increment).
    pub fn post_increment(&mut self) -> Self {
        let before = *self;
        self.pos += 1;
        before
    }

    /// Move back one element, returning the cursor as it was before the
    /// move (post-decrement).
    pub fn post_decrement(&mut self) -> Self {
        let before = *self;
        self.pos -= 1;
        before
    }

    /// The element under the cursor, or `None` if out of range.
    pub fn get(&self) -> Option<&'a T> {
        self.at_offset(0)
    }

    /// The element `offset` positions away from the cursor.
    pub fn at_offset(&self, offset: isize) -> Option<&'a T> {
        let index = usize::try_from(self.pos.checked_add(offset)?).ok()?;
        self.array.as_slice().get(index)
    }

    /// Number of positions from `self` forward to `other`.
    pub fn distance_to(&self, other: &Self) -> isize {
        other.pos - self.pos
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        // Element pointers are dangling, and so shared, for empty or
        // zero-sized storage; compare the arrays instead.
        ptr::eq(self.array, other.array) && self.pos == other.pos
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.pos)
            .field("len", &self.array.len())
            .finish()
    }
}

/// Cursor with mutable access to the element under it.
///
/// Offers the same movement as [`Cursor`]. Post-increment and
/// post-decrement return the previous position rather than a second cursor,
/// since only one mutable cursor can exist at a time.
pub struct CursorMut<'a, T> {
    array: &'a mut DynamicArray<T>,
    pos: isize,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(array: &'a mut DynamicArray<T>, position: usize) -> Self {
        Self {
            array,
            pos: position as isize,
        }
    }

    /// Current position relative to the first element.
    pub fn position(&self) -> isize {
        self.pos
    }

    /// Move forward one element.
    pub fn increment(&mut self) -> &mut Self {
        self.pos += 1;
        self
    }

    /// Move back one element.
    pub fn decrement(&mut self) -> &mut Self {
        self.pos -= 1;
        self
    }

    /// Move forward one element, returning the position before the move.
    pub fn post_increment(&mut self) -> isize {
        let before = self.pos;
        self.pos += 1;
        before
    }

    /// Move back one element, returning the position before the move.
    pub fn post_decrement(&mut self) -> isize {
        let before = self.pos;
        self.pos -= 1;
        before
    }

    /// The element under the cursor, or `None` if out of range.
    pub fn get(&self) -> Option<&T> {
        self.at_offset(0)
    }

    /// The element `offset` positions away from the cursor.
    pub fn at_offset(&self, offset: isize) -> Option<&T> {
        let index = self.index_at(offset)?;
        self.array.as_slice().get(index)
    }

    /// Mutable access to the element under the cursor.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.at_offset_mut(0)
    }

    /// Mutable access to the element `offset` positions away.
    pub fn at_offset_mut(&mut self, offset: isize) -> Option<&mut T> {
        let index = self.index_at(offset)?;
        self.array.as_mut_slice().get_mut(index)
    }

    /// Downgrade to a read-only cursor at the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            array: &*self.array,
            pos: self.pos,
        }
    }

    fn index_at(&self, offset: isize) -> Option<usize> {
        let index = usize::try_from(self.pos.checked_add(offset)?).ok()?;
        (index < self.array.len()).then_some(index)
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("position", &self.pos)
            .field("len", &self.array.len())
            .finish()
    }
}

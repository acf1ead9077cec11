//! Owning iterator over a consumed array.

use std::fmt;
use std::iter::FusedIterator;
use std::ptr;

use dynarr_buf::RawBuf;

/// Iterator that moves elements out of a [`DynamicArray`](crate::DynamicArray).
///
/// Elements not yielded by the time the iterator is dropped are dropped
/// with it, then the storage block is released.
pub struct IntoIter<T> {
    buf: RawBuf<T>,
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    /// `buf` must hold `len` live elements at its front.
    pub(crate) fn new(buf: RawBuf<T>, len: usize) -> Self {
        Self {
            buf,
            start: 0,
            end: len,
        }
    }

    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [start, end) are live and not yet moved out.
        unsafe { std::slice::from_raw_parts(self.buf.as_ptr().add(self.start), self.end - self.start) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: start < end, so the slot is live; advancing start hands
        // ownership to the caller.
        let item = unsafe { self.buf.as_ptr().add(self.start).read() };
        self.start += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        // SAFETY: the slot at the old end - 1 is live and now outside the
        // remaining range.
        Some(unsafe { self.buf.as_ptr().add(self.end).read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = self.end - self.start;
        // SAFETY: [start, end) are the only live slots left. The range is
        // emptied before dropping so a panicking destructor cannot repeat it.
        unsafe {
            let rest = ptr::slice_from_raw_parts_mut(self.buf.as_mut_ptr().add(self.start), remaining);
            self.start = self.end;
            ptr::drop_in_place(rest);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

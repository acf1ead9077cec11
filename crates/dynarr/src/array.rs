//! The growable array container.
//!
//! [`DynamicArray`] pairs a [`RawBuf`] with a live-element count. Slots
//! `[0, len)` always hold constructed values; slots `[len, capacity)` are
//! reserved and uninitialised. Every transition across that boundary is an
//! explicit write (append, insert) or an explicit drop (truncate, remove).

use std::fmt;
use std::mem;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::ptr;
use std::slice::{self, SliceIndex};

use dynarr_buf::RawBuf;
use dynarr_core::{ArrayConfig, ArrayError, ArrayStats, ConfigError, GrowthPolicy};
use tracing::{debug, trace};

use crate::cursor::{Cursor, CursorMut};
use crate::display::Spaced;
use crate::iter::IntoIter;

/// A contiguous, growable array of `T`.
///
/// Growth is geometric: when an operation needs one more slot than the
/// current capacity, the capacity is scaled by the array's
/// [`GrowthPolicy`] (1.5x by default, truncated), but never to less than
/// what the operation needs. Starting from the default capacity of 2,
/// successive growths give 3, 4, 6, 9, 13, ...
///
/// Any operation that changes capacity moves the live elements to a new
/// block, so outstanding references and cursors must not survive it. The
/// borrow checker enforces this.
pub struct DynamicArray<T> {
    buf: RawBuf<T>,
    len: usize,
    growth: GrowthPolicy,
    reallocations: u64,
}

#[cold]
#[track_caller]
fn capacity_overflow(err: ArrayError) -> ! {
    panic!("{err}")
}

impl<T> DynamicArray<T> {
    /// Create an empty array with the default capacity of 2 slots.
    pub fn new() -> Self {
        Self::with_capacity(ArrayConfig::DEFAULT_INITIAL_CAPACITY)
    }

    /// Create an empty array with exactly `capacity` reserved slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` slots of `T` exceed `isize::MAX` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(array) => array,
            Err(e) => capacity_overflow(e),
        }
    }

    /// Fallible form of [`with_capacity`](Self::with_capacity).
    pub fn try_with_capacity(capacity: usize) -> Result<Self, ArrayError> {
        Ok(Self {
            buf: RawBuf::with_capacity(capacity)?,
            len: 0,
            growth: ArrayConfig::DEFAULT_GROWTH,
            reallocations: 0,
        })
    }

    /// Create an empty array from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found by
    /// [`ArrayConfig::validate`].
    ///
    /// # Panics
    ///
    /// Panics if the initial capacity cannot be allocated for `T`.
    pub fn with_config(config: ArrayConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut array = Self::with_capacity(config.initial_capacity);
        array.growth = config.growth;
        Ok(array)
    }

    /// Create an array holding clones of `items`, with capacity equal to
    /// `items.len()`.
    pub fn from_slice(items: &[T]) -> Self
    where
        T: Clone,
    {
        let mut array = Self::with_capacity(items.len());
        for item in items {
            array.write_within_capacity(item.clone());
        }
        array
    }

    /// Transfer the storage and every element to a new array.
    ///
    /// `self` is left empty with zero capacity and no allocation, and stays
    /// fully usable. Its growth policy is kept.
    pub fn take(&mut self) -> Self {
        Self {
            buf: self.buf.take(),
            len: mem::replace(&mut self.len, 0),
            growth: self.growth,
            reallocations: mem::replace(&mut self.reallocations, 0),
        }
    }

    // ── Size and capacity ─────────────────────────────────────────

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of reserved slots.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// `true` iff there are no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The growth factor applied when the array runs out of room.
    pub fn growth(&self) -> GrowthPolicy {
        self.growth
    }

    /// Snapshot of size, capacity, and allocation counters.
    pub fn stats(&self) -> ArrayStats {
        ArrayStats {
            len: self.len,
            capacity: self.buf.capacity(),
            reallocations: self.reallocations,
            memory_bytes: self.buf.memory_bytes(),
        }
    }

    /// Reallocate to exactly `new_capacity` slots.
    ///
    /// Live elements are moved to the new block in order. If `new_capacity`
    /// is below `len`, the elements past it are dropped and `len` becomes
    /// `new_capacity`. Setting the current capacity is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::CapacityOverflow`] without touching the array
    /// if the new block cannot be represented.
    pub fn set_capacity(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        if new_capacity == self.capacity() {
            return Ok(());
        }
        if new_capacity < self.len {
            debug!(
                len = self.len,
                new_capacity, "dropping elements past the new capacity"
            );
            self.truncate(new_capacity);
        }
        self.relocate(new_capacity)
    }

    /// Shrink capacity to `len`.
    pub fn shrink_to_fit(&mut self) {
        self.relocate(self.len)
            .expect("a block no larger than the current one always has a valid layout");
    }

    /// Drop every element, keeping the storage block and its capacity.
    pub fn soft_clear(&mut self) {
        self.truncate(0);
    }

    /// Same as [`soft_clear`](Self::soft_clear).
    pub fn clear(&mut self) {
        self.soft_clear();
    }

    /// Drop every element and release the storage block (capacity 0).
    pub fn hard_clear(&mut self) {
        self.truncate(0);
        self.relocate(0)
            .expect("a zero-capacity block always has a valid layout");
    }

    /// Drop the elements at `[new_len, len)`. No-op if `new_len >= len`.
    /// Capacity is unchanged.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let tail_len = self.len - new_len;
        // SAFETY: [new_len, len) are live. len is lowered first so a
        // panicking destructor cannot cause a double drop.
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(self.buf.as_mut_ptr().add(new_len), tail_len);
            self.len = new_len;
            ptr::drop_in_place(tail);
        }
    }

    // ── Element access ────────────────────────────────────────────

    /// Checked shared access to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::OutOfRange`] if `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(ArrayError::OutOfRange { index, len })
    }

    /// Checked mutable access to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::OutOfRange`] if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ArrayError::OutOfRange { index, len })
    }

    /// Unchecked shared access to the element at `index`.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len`.
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        // SAFETY: caller guarantees index < len.
        unsafe { &*self.buf.as_ptr().add(index) }
    }

    /// Unchecked mutable access to the element at `index`.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len`.
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        // SAFETY: caller guarantees index < len.
        unsafe { &mut *self.buf.as_mut_ptr().add(index) }
    }

    /// First element, or `None` if empty.
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Mutable first element, or `None` if empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Last element, or `None` if empty.
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Mutable last element, or `None` if empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// The live prefix as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [0, len) are live and the pointer is aligned and non-null
        // even when nothing is allocated.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// The live prefix as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, and `&mut self` guarantees uniqueness.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }

    /// Raw pointer to the first slot. Invalidated by any reallocation.
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Mutable raw pointer to the first slot. Invalidated by any reallocation.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    // ── Insertion and removal ─────────────────────────────────────

    /// Append `value`, growing the storage if the array is full.
    ///
    /// # Panics
    ///
    /// Panics if the grown capacity overflows. See
    /// [`try_push`](Self::try_push) for the fallible form.
    pub fn push(&mut self, value: T) {
        if let Err(e) = self.reserve_for(1) {
            capacity_overflow(e);
        }
        self.write_within_capacity(value);
    }

    /// Append `value`, returning an error instead of panicking if the
    /// storage cannot grow. On error `value` is dropped and the array is
    /// unchanged.
    pub fn try_push(&mut self, value: T) -> Result<(), ArrayError> {
        self.reserve_for(1)?;
        self.write_within_capacity(value);
        Ok(())
    }

    /// Construct a new last element directly in its slot.
    ///
    /// Storage grows before `make` runs; if `make` panics the array keeps
    /// its previous length. Returns a reference to the new element.
    ///
    /// # Panics
    ///
    /// Panics if the grown capacity overflows.
    pub fn emplace_with<F>(&mut self, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if let Err(e) = self.reserve_for(1) {
            capacity_overflow(e);
        }
        self.write_within_capacity(make())
    }

    /// Insert `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// `index == len` appends.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::OutOfRange`] if `index > len`, or
    /// [`ArrayError::CapacityOverflow`] if the storage cannot grow. In both
    /// cases the array is unchanged.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        if index > self.len {
            return Err(ArrayError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.reserve_for(1)?;
        // SAFETY: capacity > len after reserve_for, so [index + 1, len + 1)
        // is in bounds. The shift moves bits; slot `index` is then
        // overwritten without dropping its stale copy.
        unsafe {
            let slot = self.buf.as_mut_ptr().add(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            slot.write(value);
        }
        self.len += 1;
        Ok(())
    }

    /// Remove and return the element at `index`, shifting `(index, len)`
    /// one slot left.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::OutOfRange`] if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Result<T, ArrayError> {
        if index >= self.len {
            return Err(ArrayError::OutOfRange {
                index,
                len: self.len,
            });
        }
        // SAFETY: index < len. The value is read out before its slot is
        // overwritten by the shift, so each element stays owned exactly once.
        unsafe {
            let slot = self.buf.as_mut_ptr().add(index);
            let value = slot.read();
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            self.len -= 1;
            Ok(value)
        }
    }

    /// Remove and return the last element, or `None` if empty.
    pub fn remove_last(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: the slot at the old len - 1 was live and is now outside
        // the live prefix, so ownership moves to the caller.
        Some(unsafe { self.buf.as_ptr().add(self.len).read() })
    }

    // ── Traversal ────────────────────────────────────────────────

    /// Cursor at the first element.
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, 0)
    }

    /// Cursor one past the last element.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.len)
    }

    /// Mutable cursor at the first element.
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, 0)
    }

    /// Mutable cursor one past the last element.
    pub fn end_mut(&mut self) -> CursorMut<'_, T> {
        let len = self.len;
        CursorMut::new(self, len)
    }

    /// Display adapter writing the elements separated by single spaces.
    pub fn spaced(&self) -> Spaced<'_, T> {
        Spaced::new(self.as_slice())
    }

    // ── Internals ────────────────────────────────────────────────

    /// Make room for `additional` more elements, growing by the policy.
    fn reserve_for(&mut self, additional: usize) -> Result<(), ArrayError> {
        let capacity = self.capacity();
        let required = self
            .len
            .checked_add(additional)
            .ok_or(ArrayError::CapacityOverflow {
                requested: usize::MAX,
            })?;
        if required <= capacity {
            return Ok(());
        }
        let new_capacity = self.growth.next_capacity(capacity, required);
        self.relocate(new_capacity)
    }

    /// Move the live prefix into a block of exactly `new_capacity` slots.
    /// The caller has already dropped anything past `new_capacity`.
    fn relocate(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        let old_capacity = self.capacity();
        if new_capacity == old_capacity {
            return Ok(());
        }
        self.buf.relocate(new_capacity, self.len)?;
        self.reallocations += 1;
        trace!(
            old_capacity,
            new_capacity,
            len = self.len,
            "relocated array storage"
        );
        Ok(())
    }

    /// Write `value` into slot `len` and extend the live prefix over it.
    fn write_within_capacity(&mut self, value: T) -> &mut T {
        debug_assert!(self.len < self.capacity());
        // SAFETY: len < capacity, and slot `len` is outside the live prefix
        // so nothing is overwritten.
        unsafe {
            let slot = self.buf.as_mut_ptr().add(self.len);
            slot.write(value);
            self.len += 1;
            &mut *slot
        }
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        // SAFETY: [0, len) are live; RawBuf releases the block afterwards.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.as_mut_ptr(),
                self.len,
            ));
        }
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy into a fresh block of the same capacity.
impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.capacity());
        copy.growth = self.growth;
        for item in self.as_slice() {
            copy.write_within_capacity(item.clone());
        }
        copy
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for DynamicArray<T> {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for DynamicArray<T> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for DynamicArray<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<[T]> for DynamicArray<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

/// Collects with capacity equal to the number of elements produced.
impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut array = Self::with_capacity(iter.size_hint().0);
        array.extend(iter);
        array.shrink_to_fit();
        array
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(items: [T; N]) -> Self {
        let mut array = Self::with_capacity(N);
        for item in items {
            array.write_within_capacity(item);
        }
        array
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(items: &[T]) -> Self {
        Self::from_slice(items)
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        let len = mem::replace(&mut self.len, 0);
        IntoIter::new(self.buf.take(), len)
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

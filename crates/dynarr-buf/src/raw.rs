//! Raw element storage with explicit capacity management.

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};

use dynarr_core::ArrayError;

/// An exclusively owned block of `capacity` uninitialised `T` slots.
///
/// Dropping a `RawBuf` releases the block but never drops the values in
/// it; the owner must drop live elements first.
pub struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

// SAFETY: RawBuf owns its block exclusively, like Box<[T]>.
unsafe impl<T: Send> Send for RawBuf<T> {}
// SAFETY: shared access to RawBuf only hands out raw pointers.
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// Create an empty buffer without allocating.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Allocate a buffer with exactly `capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::CapacityOverflow`] if `capacity` slots of `T`
    /// exceed `isize::MAX` bytes.
    pub fn with_capacity(capacity: usize) -> Result<Self, ArrayError> {
        let mut buf = Self::new();
        buf.relocate(capacity, 0)?;
        Ok(buf)
    }

    /// Number of reserved slots.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Whether the buffer currently holds a block from the allocator.
    pub fn is_allocated(&self) -> bool {
        !Self::IS_ZST && self.cap != 0
    }

    /// Pointer to the first slot. Dangling (but aligned) when nothing is
    /// allocated.
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Mutable pointer to the first slot.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Bytes reserved by the block.
    pub fn memory_bytes(&self) -> usize {
        self.cap * mem::size_of::<T>()
    }

    /// Move to a block of exactly `new_capacity` slots, carrying the first
    /// `keep` slots over bit-for-bit in their original order.
    ///
    /// Slots past `keep` are not carried. A zero `new_capacity` releases the
    /// block and leaves the buffer empty. On error the buffer is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::CapacityOverflow`] if the new layout cannot be
    /// represented.
    ///
    /// # Panics
    ///
    /// Panics if `keep` exceeds either the current or the new capacity.
    pub fn relocate(&mut self, new_capacity: usize, keep: usize) -> Result<(), ArrayError> {
        assert!(
            keep <= self.cap && keep <= new_capacity,
            "relocate keeps {keep} slots of {} into {new_capacity}",
            self.cap
        );
        if new_capacity == self.cap {
            return Ok(());
        }
        let new_layout = Layout::array::<T>(new_capacity).map_err(|_| {
            ArrayError::CapacityOverflow {
                requested: new_capacity,
            }
        })?;

        if Self::IS_ZST {
            self.cap = new_capacity;
            return Ok(());
        }
        if new_capacity == 0 {
            self.release();
            return Ok(());
        }

        // SAFETY: new_layout has non-zero size (non-ZST, new_capacity > 0).
        let raw = unsafe { alloc::alloc(new_layout) };
        let new_ptr = match NonNull::new(raw.cast::<T>()) {
            Some(p) => p,
            None => alloc::handle_alloc_error(new_layout),
        };
        if self.is_allocated() {
            // SAFETY: both blocks hold at least `keep` slots and are distinct
            // allocations, so the ranges cannot overlap.
            unsafe {
                ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), keep);
            }
            self.release();
        }
        self.ptr = new_ptr;
        self.cap = new_capacity;
        Ok(())
    }

    /// Return the block to the allocator and become empty.
    ///
    /// Values still in the block are forgotten, not dropped. Releasing an
    /// empty buffer is a no-op.
    pub fn release(&mut self) {
        if self.is_allocated() {
            // SAFETY: the block was allocated in `relocate` with exactly this
            // layout, and `cap` has not changed since.
            unsafe {
                let layout = Layout::array::<T>(self.cap).unwrap_unchecked();
                alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), layout);
            }
        }
        self.ptr = NonNull::dangling();
        self.cap = 0;
    }

    /// Transfer ownership of the block out, leaving `self` empty.
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }
}

impl<T> Default for RawBuf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T> std::fmt::Debug for RawBuf<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawBuf")
            .field("capacity", &self.cap)
            .field("allocated", &self.is_allocated())
            .finish()
    }
}

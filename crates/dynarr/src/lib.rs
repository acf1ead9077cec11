//! Growable contiguous array with explicit capacity control.
//!
//! [`DynamicArray`] owns a single block of element slots whose live prefix
//! `[0, len)` holds constructed values. Capacity and length are tracked
//! separately: capacity grows by a configurable factor (1.5x by default)
//! when an append or insert finds the block full, and can be set, shrunk,
//! or released explicitly.
//!
//! # Access contracts
//!
//! | Entry point | Out-of-range behaviour |
//! |-------------|------------------------|
//! | [`at`](DynamicArray::at) / [`at_mut`](DynamicArray::at_mut) | `Err(ArrayError::OutOfRange)` |
//! | `array[i]` | panic |
//! | [`get_unchecked`](DynamicArray::get_unchecked) | undefined behaviour (`unsafe`) |
//!
//! # Cursors
//!
//! [`Cursor`] and [`CursorMut`] are positional, non-owning traversal
//! handles obtained from [`begin`](DynamicArray::begin) /
//! [`end`](DynamicArray::end). They borrow the array, so any operation that
//! could reallocate is rejected by the borrow checker while one is alive.
//!
//! ```
//! use dynarr::DynamicArray;
//!
//! let mut arr = DynamicArray::new();
//! for i in 0..8 {
//!     arr.push(i);
//! }
//! assert_eq!(arr.len(), 8);
//! assert_eq!(arr.capacity(), 9);
//! assert_eq!(arr.at(2), Ok(&2));
//! assert!(arr.at(8).is_err());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod array;
pub mod cursor;
pub mod display;
pub mod iter;

pub use array::DynamicArray;
pub use cursor::{Cursor, CursorMut};
pub use display::Spaced;
pub use iter::IntoIter;

pub use dynarr_core::{ArrayConfig, ArrayError, ArrayStats, ConfigError, GrowthPolicy};

//! Owned raw storage for the dynarr container.
//!
//! A [`RawBuf`] owns a block of `capacity` untyped element slots. It knows
//! nothing about which slots hold live values: constructing, moving, and
//! dropping elements is the container's job. The buffer only guarantees
//! that the block is allocated with the right layout, relocated on request,
//! and released exactly once. This crate is one of two that may contain
//! `unsafe` code (along with `dynarr`).
//!
//! # Storage states
//!
//! ```text
//! RawBuf
//! ├── empty      capacity 0, dangling pointer, nothing to release
//! └── allocated  capacity n > 0, block from the global allocator
//! ```
//!
//! Zero-sized element types never allocate; their capacity is tracked
//! logically and the buffer stays in the empty state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod raw;

pub use raw::RawBuf;

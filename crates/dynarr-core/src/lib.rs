//! Core types for the dynarr workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by the storage and container crates: error types,
//! growth configuration, and the statistics snapshot.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod stats;

pub use config::{ArrayConfig, GrowthPolicy};
pub use error::{ArrayError, ConfigError};
pub use stats::ArrayStats;

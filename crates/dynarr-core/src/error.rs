//! Error types for container operations and configuration.

use std::error::Error;
use std::fmt;

/// Errors returned by checked container operations.
///
/// Every checked operation validates its arguments before touching the
/// container, so an `Err` always leaves the container unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// An index argument falls outside the span the operation accepts.
    ///
    /// For access and removal the valid span is `0..len`; for insertion
    /// it is `0..=len`.
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
    /// The requested capacity cannot be represented as an allocation.
    CapacityOverflow {
        /// Requested capacity in elements.
        requested: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity overflow: {requested} elements requested")
            }
        }
    }
}

impl Error for ArrayError {}

/// Errors detected during [`ArrayConfig::validate()`](crate::ArrayConfig::validate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The growth factor has a zero denominator.
    ZeroDenominator,
    /// The growth factor is not strictly greater than one.
    NonGrowingFactor {
        /// Configured numerator.
        numerator: usize,
        /// Configured denominator.
        denominator: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDenominator => write!(f, "growth factor denominator must be non-zero"),
            Self::NonGrowingFactor {
                numerator,
                denominator,
            } => write!(
                f,
                "growth factor {numerator}/{denominator} must be greater than 1"
            ),
        }
    }
}

impl Error for ConfigError {}

//! Container configuration parameters.

use crate::error::ConfigError;

/// Multiplicative growth factor applied when the container runs out of room.
///
/// Expressed as a rational `numerator / denominator` so that capacity
/// arithmetic stays in integers. Scaling truncates toward zero, and the
/// result is never smaller than the capacity the triggering operation needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthPolicy {
    /// Factor numerator.
    pub numerator: usize,
    /// Factor denominator. Must be non-zero.
    pub denominator: usize,
}

impl GrowthPolicy {
    /// The default 1.5x growth factor.
    pub const ONE_AND_A_HALF: Self = Self {
        numerator: 3,
        denominator: 2,
    };

    /// Create a growth policy from a rational factor.
    ///
    /// The factor is not validated here; see [`ArrayConfig::validate`].
    pub const fn new(numerator: usize, denominator: usize) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Capacity to grow to from `current` when at least `required` slots
    /// are needed.
    ///
    /// If scaling `current` overflows `usize`, growth falls back to exactly
    /// `required`.
    pub fn next_capacity(&self, current: usize, required: usize) -> usize {
        current
            .checked_mul(self.numerator)
            .map_or(required, |scaled| {
                (scaled / self.denominator.max(1)).max(required)
            })
    }

    /// Check that the factor is well-formed and strictly growing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.denominator == 0 {
            return Err(ConfigError::ZeroDenominator);
        }
        if self.numerator <= self.denominator {
            return Err(ConfigError::NonGrowingFactor {
                numerator: self.numerator,
                denominator: self.denominator,
            });
        }
        Ok(())
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::ONE_AND_A_HALF
    }
}

/// Configuration for a dynamic array container.
///
/// Controls the capacity reserved at construction and the growth factor
/// used when an append or insert finds the container full.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Number of slots reserved by the default constructor.
    ///
    /// Default: 2.
    pub initial_capacity: usize,

    /// Growth factor applied when `len == capacity` and room is needed.
    ///
    /// Default: 3/2.
    pub growth: GrowthPolicy,
}

impl ArrayConfig {
    /// Default initial capacity.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 2;

    /// Default growth factor.
    pub const DEFAULT_GROWTH: GrowthPolicy = GrowthPolicy::ONE_AND_A_HALF;

    /// Create a config with the given initial capacity and default growth.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            growth: Self::DEFAULT_GROWTH,
        }
    }

    /// Replace the growth factor.
    pub fn with_growth(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }

    /// Validate all parameters.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the growth factor has a zero denominator or does
    /// not exceed one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.growth.validate()
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}

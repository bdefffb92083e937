//! Inclusive range membership.

use serde::{Deserialize, Serialize};

/// Returns `true` when `minimum <= number <= maximum`.
///
/// Bounds are never validated: when `minimum > maximum` no value satisfies
/// both comparisons and the result is always `false`. Incomparable values
/// (for example a NaN bound) also yield `false`.
pub fn is_in_interval<T: PartialOrd>(number: T, minimum: T, maximum: T) -> bool {
    minimum <= number && number <= maximum
}

/// Closed interval `[minimum, maximum]` over a partially ordered domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval<T> {
    /// Lower bound (inclusive).
    pub minimum: T,
    /// Upper bound (inclusive).
    pub maximum: T,
}

impl<T: PartialOrd> Interval<T> {
    /// Creates an interval without checking the ordering of the bounds.
    pub fn new(minimum: T, maximum: T) -> Self {
        Self { minimum, maximum }
    }

    /// Returns whether `value` lies within the interval, bounds included.
    pub fn contains(&self, value: &T) -> bool {
        is_in_interval(value, &self.minimum, &self.maximum)
    }

    /// Returns `true` when the lower bound exceeds the upper bound.
    pub fn is_inverted(&self) -> bool {
        self.minimum > self.maximum
    }
}

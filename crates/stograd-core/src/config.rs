//! Numeric policy constants.
//!
//! The estimators perform almost no input validation; what little numeric
//! defence they do carry is centralized here as named constants so tests
//! can probe near-boundary behavior deterministically.

use serde::{Deserialize, Serialize};

/// An inclusive interval a probability parameter is clamped into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClampBounds {
    pub lo: f32,
    pub hi: f32,
}

impl ClampBounds {
    pub const fn new(lo: f32, hi: f32) -> Self {
        ClampBounds { lo, hi }
    }

    /// Clamp a scalar into the interval.
    pub fn apply(&self, x: f32) -> f32 {
        x.clamp(self.lo, self.hi)
    }
}

/// Clamp applied to the geometric success probability before sampling.
///
/// Keeps `log(1 - p)` finite in the inverse-CDF transform and guarantees
/// the saved probability never divides a backward pass by exactly 0 or 1.
pub const GEOMETRIC_CLAMP: ClampBounds = ClampBounds::new(1e-5, 1.0 - 1e-5);

/// Lower bound of the open interval uniform variates are drawn from.
pub const UNIFORM_LOW: f32 = 1e-7;

/// Upper bound of the open interval uniform variates are drawn from.
///
/// Excluding the endpoints keeps `log(1 - u)` finite and keeps inverse-CDF
/// samples on their documented support (the geometric draw stays positive).
pub const UNIFORM_HIGH: f32 = 1.0 - 1e-7;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_bounds_apply() {
        let bounds = ClampBounds::new(0.1, 0.9);
        assert_eq!(bounds.apply(0.5), 0.5);
        assert_eq!(bounds.apply(-1.0), 0.1);
        assert_eq!(bounds.apply(2.0), 0.9);
    }

    #[test]
    fn test_geometric_clamp_is_interior() {
        assert!(GEOMETRIC_CLAMP.lo > 0.0);
        assert!(GEOMETRIC_CLAMP.hi < 1.0);
        assert!(GEOMETRIC_CLAMP.lo < GEOMETRIC_CLAMP.hi);
    }

    #[test]
    fn test_uniform_interval_is_open() {
        assert!(UNIFORM_LOW > 0.0);
        assert!(UNIFORM_HIGH < 1.0);
    }
}

//! Core types for Barcelona rainfall statistics.
//!
//! Holds the vocabulary shared by every other crate in the workspace:
//! months and seasons, time modes, column labels, validated year ranges,
//! the domain error type, and the monthly dataset parser.

pub mod dataset;
pub mod error;
pub mod label;
pub mod month;
pub mod period;
pub mod season;
pub mod year_range;

pub use error::{RainfallError, Result};

/// Most decimal places an `f64` rainfall depth can carry.
pub const MAX_ROUND_PRECISION: u32 = 15;

/// Round `value` to `precision` decimal places, halves away from zero.
///
/// Precisions above [`MAX_ROUND_PRECISION`] are treated as that maximum.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision.min(MAX_ROUND_PRECISION) as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::{round_to, MAX_ROUND_PRECISION};

    #[test]
    fn round_to_decimal_places() {
        assert_eq!(round_to(81.649658, 2), 81.65);
        assert_eq!(round_to(81.649658, 1), 81.6);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
    }

    #[test]
    fn round_to_caps_large_precisions() {
        assert!((round_to(612.25, 400) - 612.25).abs() < 1e-9);
        assert_eq!(round_to(612.25, u32::MAX), round_to(612.25, MAX_ROUND_PRECISION));
        assert!(round_to(1500.3, 1000).is_finite());
    }

    #[test]
    fn round_to_zero_precision_keeps_integers() {
        assert_eq!(round_to(640.0, 0), 640.0);
    }
}

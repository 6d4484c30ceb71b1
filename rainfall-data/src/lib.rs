//! Statistics over yearly rainfall series.
//!
//! This crate turns a series of [`YearValue`] points into scalar statistics
//! and derived series. Every function is pure: callers pass the series and
//! the year range to look at, nothing is cached.

pub mod aggregate;
pub mod clustering;
pub mod normal;
pub mod regression;
pub mod smoothing;

pub use rainfall_core::dataset::YearValue;
use rainfall_core::year_range::YearRange;

/// Values of `series` whose year falls inside `range`.
pub fn values_within(series: &[YearValue], range: YearRange) -> Vec<f64> {
    series
        .iter()
        .filter(|point| range.contains(point.year))
        .map(|point| point.value)
        .collect()
}

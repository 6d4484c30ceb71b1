//! Rainfall normals and distances to them.
//!
//! A normal is the average rainfall over thirty consecutive years starting at
//! a chosen year. Distances to a zero normal are undefined and reported as
//! [`RainfallError::ZeroNormal`].

use crate::aggregate::average;
use crate::YearValue;
use rainfall_core::error::{RainfallError, Result};
use rainfall_core::year_range::YearRange;

/// Number of years averaged into a normal.
pub const NORMAL_SPAN_YEARS: i32 = 30;

/// The thirty year window starting at `start_year`.
pub fn normal_range(start_year: i32) -> Result<YearRange> {
    let end = start_year
        .checked_add(NORMAL_SPAN_YEARS - 1)
        .ok_or(RainfallError::NormalStartOverflow { year: start_year })?;
    YearRange::new(start_year, end)
}

/// Average rainfall over the thirty years starting at `start_year`.
pub fn normal(series: &[YearValue], start_year: i32) -> Result<f64> {
    Ok(average(series, normal_range(start_year)?))
}

/// Percentage by which `value` departs from `normal`.
///
/// 0 means equal to the normal, 100 twice the normal, -50 half of it.
pub fn relative_distance(value: f64, normal: f64, normal_year: i32) -> Result<f64> {
    if normal == 0.0 {
        return Err(RainfallError::ZeroNormal { normal_year });
    }
    Ok((value - normal) / normal * 100.0)
}

/// Relative distance of the average over `value_range` to the normal
/// starting at `normal_year`.
pub fn relative_distance_to_normal(
    series: &[YearValue],
    value_range: YearRange,
    normal_year: i32,
) -> Result<f64> {
    let normal = normal(series, normal_year)?;
    relative_distance(average(series, value_range), normal, normal_year)
}

/// Every value of the series expressed as a percentage of `normal`.
pub fn percentage_of_normal(
    series: &[YearValue],
    normal: f64,
    normal_year: i32,
) -> Result<Vec<YearValue>> {
    if normal == 0.0 {
        return Err(RainfallError::ZeroNormal { normal_year });
    }
    Ok(series
        .iter()
        .map(|point| YearValue {
            year: point.year,
            value: point.value / normal * 100.0,
        })
        .collect())
}

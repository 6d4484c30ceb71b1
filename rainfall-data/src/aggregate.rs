//! Range reductions: sum, mean, standard deviation, threshold counts.
//!
//! An empty range reduces to 0 rather than failing. Callers that need to
//! tell "no data" apart from "no rain" must check the range themselves.

use crate::{values_within, YearValue};
use rainfall_core::year_range::YearRange;

pub fn sum(series: &[YearValue], range: YearRange) -> f64 {
    values_within(series, range).iter().sum()
}

/// Mean value over the range, 0 when the range holds no year.
pub fn average(series: &[YearValue], range: YearRange) -> f64 {
    mean(&values_within(series, range))
}

/// Population standard deviation over the range.
///
/// With `weigh_by_average` the deviation is divided by the range's average,
/// giving a coefficient of variation. An average of 0 yields 0.
pub fn standard_deviation(series: &[YearValue], range: YearRange, weigh_by_average: bool) -> f64 {
    let values = values_within(series, range);
    if values.is_empty() {
        return 0.0;
    }
    let mean = mean(&values);
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    let std_dev = variance.sqrt();

    if !weigh_by_average {
        return std_dev;
    }
    if mean == 0.0 {
        return 0.0;
    }
    std_dev / mean
}

/// Number of years whose value is strictly greater than `threshold`.
pub fn count_above(series: &[YearValue], range: YearRange, threshold: f64) -> usize {
    values_within(series, range)
        .iter()
        .filter(|v| **v > threshold)
        .count()
}

/// Number of years whose value is strictly lower than `threshold`.
pub fn count_below(series: &[YearValue], range: YearRange, threshold: f64) -> usize {
    values_within(series, range)
        .iter()
        .filter(|v| **v < threshold)
        .count()
}

pub fn minimum(series: &[YearValue], range: YearRange) -> Option<f64> {
    values_within(series, range).into_iter().reduce(f64::min)
}

pub fn maximum(series: &[YearValue], range: YearRange) -> Option<f64> {
    values_within(series, range).into_iter().reduce(f64::max)
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::series;

    fn range(begin: i32, end: i32) -> YearRange {
        YearRange::new(begin, end).unwrap()
    }

    #[test]
    fn average_of_three_years() {
        let s = series(2000, &[100.0, 200.0, 300.0]);
        assert_eq!(average(&s, range(2000, 2002)), 200.0);
    }

    #[test]
    fn population_standard_deviation() {
        let s = series(2000, &[100.0, 200.0, 300.0]);
        let std = standard_deviation(&s, range(2000, 2002), false);
        assert!((std - 81.6497).abs() < 0.001);
    }

    #[test]
    fn standard_deviation_weighted_by_average() {
        let s = series(2000, &[100.0, 200.0, 300.0]);
        let cv = standard_deviation(&s, range(2000, 2002), true);
        assert!((cv - 81.6497 / 200.0).abs() < 0.0001);
    }

    #[test]
    fn weighted_standard_deviation_of_dry_years_is_zero() {
        let s = series(2000, &[0.0, 0.0]);
        assert_eq!(standard_deviation(&s, range(2000, 2001), true), 0.0);
    }

    #[test]
    fn empty_range_reduces_to_zero() {
        let s = series(2000, &[100.0, 200.0, 300.0]);
        let outside = range(1900, 1910);
        assert_eq!(average(&s, outside), 0.0);
        assert_eq!(standard_deviation(&s, outside, false), 0.0);
        assert_eq!(standard_deviation(&s, outside, true), 0.0);
        assert_eq!(sum(&s, outside), 0.0);
        assert_eq!(minimum(&s, outside), None);
    }

    #[test]
    fn average_stays_between_min_and_max() {
        let s = series(1990, &[512.3, 498.1, 702.9, 388.0, 640.4, 455.5, 1010.2]);
        for begin in 1990..=1996 {
            for end in begin..=1996 {
                let r = range(begin, end);
                let avg = average(&s, r);
                assert!(minimum(&s, r).unwrap() <= avg && avg <= maximum(&s, r).unwrap());
            }
        }
    }

    #[test]
    fn counts_are_strict() {
        let s = series(2000, &[100.0, 200.0, 300.0, 200.0]);
        let r = range(2000, 2003);
        assert_eq!(count_above(&s, r, 200.0), 1);
        assert_eq!(count_below(&s, r, 200.0), 1);
        assert_eq!(count_above(&s, r, 50.0), 4);
    }

    #[test]
    fn range_narrows_the_series() {
        let s = series(2000, &[100.0, 200.0, 300.0, 400.0]);
        assert_eq!(average(&s, range(2001, 2002)), 250.0);
        assert_eq!(sum(&s, range(2003, 2010)), 400.0);
    }
}

//! Ordinary least squares fit of rainfall against year.

use crate::YearValue;
use rainfall_core::error::{RainfallError, Result};
use rainfall_core::year_range::YearRange;
use serde::Serialize;

/// Straight line fitted through (year, value) points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearFit {
    /// Change in value per year.
    pub slope: f64,
    /// Value of the line at year 0.
    pub intercept: f64,
    /// Coefficient of determination of the fit on its own points.
    pub r2: f64,
    /// Value of the line at every fitted year.
    pub fitted: Vec<YearValue>,
}

impl LinearFit {
    pub fn predict(&self, year: i32) -> f64 {
        self.intercept + self.slope * year as f64
    }
}

/// Fit a line through the points of `series` inside `range`.
pub fn linear_regression(series: &[YearValue], range: YearRange) -> Result<LinearFit> {
    let points: Vec<YearValue> = series
        .iter()
        .filter(|point| range.contains(point.year))
        .copied()
        .collect();
    fit(&points)
}

/// Closed form least squares fit.
///
/// Needs at least two points spread over at least two distinct years. A
/// constant series is fitted exactly by a flat line and gets an R² of 1.
pub fn fit(points: &[YearValue]) -> Result<LinearFit> {
    let n = points.len();
    if n < 2 {
        return Err(RainfallError::InsufficientData {
            needed: 2,
            found: n,
        });
    }

    let mean_x = points.iter().map(|p| p.year as f64).sum::<f64>() / n as f64;
    let mean_y = points.iter().map(|p| p.value).sum::<f64>() / n as f64;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for p in points {
        let dx = p.year as f64 - mean_x;
        sxx += dx * dx;
        sxy += dx * (p.value - mean_y);
    }
    if sxx == 0.0 {
        return Err(RainfallError::InsufficientData {
            needed: 2,
            found: 1,
        });
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    // Evaluated around the means to keep exact series exact.
    let fitted: Vec<YearValue> = points
        .iter()
        .map(|p| YearValue {
            year: p.year,
            value: mean_y + slope * (p.year as f64 - mean_x),
        })
        .collect();

    let ss_res: f64 = points
        .iter()
        .zip(&fitted)
        .map(|(p, f)| (p.value - f.value).powi(2))
        .sum();
    let ss_tot: f64 = points.iter().map(|p| (p.value - mean_y).powi(2)).sum();
    let r2 = if ss_tot == 0.0 { 1.0 } else { 1.0 - ss_res / ss_tot };

    log::debug!(
        "[Rainfall] regression: {} points, slope {:.4}, r2 {:.4}",
        n,
        slope,
        r2
    );

    Ok(LinearFit {
        slope,
        intercept,
        r2,
        fitted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::series;

    #[test]
    fn perfect_line_is_recovered() {
        let s = series(2000, &[100.0, 110.0, 120.0, 130.0, 140.0]);
        let fit = linear_regression(&s, YearRange::new(2000, 2004).unwrap()).unwrap();
        assert_eq!(fit.slope, 10.0);
        assert_eq!(fit.r2, 1.0);
        assert_eq!(fit.fitted, s);
        assert!((fit.predict(2010) - 200.0).abs() < 1e-9);
    }

    #[test]
    fn decreasing_line_over_long_span() {
        let values: Vec<f64> = (0..40).map(|i| 900.0 - 2.5 * i as f64).collect();
        let s = series(1971, &values);
        let fit = linear_regression(&s, YearRange::new(1971, 2010).unwrap()).unwrap();
        assert!((fit.slope + 2.5).abs() < 1e-9);
        assert!((fit.r2 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn noisy_series_has_r2_below_one() {
        let s = series(2000, &[100.0, 300.0, 150.0, 250.0, 200.0]);
        let fit = linear_regression(&s, YearRange::new(2000, 2004).unwrap()).unwrap();
        assert!(fit.r2 < 1.0 && fit.r2 >= 0.0);
        assert_eq!(fit.fitted.len(), 5);
    }

    #[test]
    fn constant_series_has_flat_perfect_fit() {
        let s = series(2000, &[250.0, 250.0, 250.0]);
        let fit = linear_regression(&s, YearRange::new(2000, 2002).unwrap()).unwrap();
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.r2, 1.0);
    }

    #[test]
    fn range_restricts_the_fit() {
        let s = series(2000, &[100.0, 110.0, 120.0, 500.0, 20.0]);
        let fit = linear_regression(&s, YearRange::new(2000, 2002).unwrap()).unwrap();
        assert_eq!(fit.slope, 10.0);
        assert_eq!(fit.fitted.len(), 3);
    }

    #[test]
    fn single_point_is_insufficient() {
        let s = series(2000, &[100.0, 110.0]);
        let err = linear_regression(&s, YearRange::new(2001, 2001).unwrap()).unwrap_err();
        assert!(matches!(
            err,
            RainfallError::InsufficientData { needed: 2, found: 1 }
        ));
    }

    #[test]
    fn repeated_year_is_insufficient() {
        let points = [
            YearValue { year: 2000, value: 1.0 },
            YearValue { year: 2000, value: 3.0 },
        ];
        assert!(fit(&points).is_err());
    }
}

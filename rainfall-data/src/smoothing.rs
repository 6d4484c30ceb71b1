//! Savitzky-Golay smoothing of a yearly series.
//!
//! The filter runs with a single window covering the whole series and a
//! polynomial order of one tenth of its length. With such a window the filter
//! reduces to a least squares polynomial fit evaluated at every year, which
//! is how it is computed here.

/// Smooth `values` with a whole-series Savitzky-Golay window.
pub fn savgol_filter(values: &[f64]) -> Vec<f64> {
    polynomial_fit(values, values.len() / 10)
}

/// Least squares polynomial of degree `order` through evenly spaced values.
///
/// The fit is a projection onto an orthonormalised Legendre basis over
/// `[-1, 1]`, which stays well conditioned for high orders.
pub fn polynomial_fit(values: &[f64], order: usize) -> Vec<f64> {
    let n = values.len();
    if n <= 1 {
        return values.to_vec();
    }
    let order = order.min(n - 1);
    let xs: Vec<f64> = (0..n)
        .map(|i| 2.0 * i as f64 / (n - 1) as f64 - 1.0)
        .collect();

    let mut basis: Vec<Vec<f64>> = Vec::with_capacity(order + 1);
    for column in legendre_columns(&xs, order) {
        if let Some(q) = orthonormalize(column, &basis) {
            basis.push(q);
        }
    }

    let mut fitted = vec![0.0; n];
    for q in &basis {
        let coefficient = dot(q, values);
        for (f, qi) in fitted.iter_mut().zip(q) {
            *f += coefficient * qi;
        }
    }
    fitted
}

/// Legendre polynomials P0..=P(order) evaluated at every x.
fn legendre_columns(xs: &[f64], order: usize) -> Vec<Vec<f64>> {
    let mut columns: Vec<Vec<f64>> = Vec::with_capacity(order + 1);
    columns.push(vec![1.0; xs.len()]);
    if order >= 1 {
        columns.push(xs.to_vec());
    }
    for k in 2..=order {
        let k_f = k as f64;
        let column = xs
            .iter()
            .enumerate()
            .map(|(i, x)| {
                ((2.0 * k_f - 1.0) * x * columns[k - 1][i] - (k_f - 1.0) * columns[k - 2][i]) / k_f
            })
            .collect();
        columns.push(column);
    }
    columns
}

/// Gram-Schmidt step with a second pass; `None` when the column is dependent.
fn orthonormalize(mut column: Vec<f64>, basis: &[Vec<f64>]) -> Option<Vec<f64>> {
    let original_norm = dot(&column, &column).sqrt();
    for _ in 0..2 {
        for q in basis {
            let projection = dot(q, &column);
            for (c, qi) in column.iter_mut().zip(q) {
                *c -= projection * qi;
            }
        }
    }
    let norm = dot(&column, &column).sqrt();
    if norm <= 1e-10 * original_norm.max(1.0) {
        return None;
    }
    column.iter_mut().for_each(|c| *c /= norm);
    Some(column)
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_series_smooths_to_its_mean() {
        let values = [100.0, 300.0, 200.0, 400.0];
        let smoothed = savgol_filter(&values);
        for v in smoothed {
            assert!((v - 250.0).abs() < 1e-9);
        }
    }

    #[test]
    fn polynomial_of_matching_order_is_unchanged() {
        // 30 values: order 3, so a cubic goes through untouched
        let values: Vec<f64> = (0..30)
            .map(|i| {
                let t = i as f64;
                0.02 * t * t * t - 0.5 * t * t + 3.0 * t + 600.0
            })
            .collect();
        let smoothed = savgol_filter(&values);
        for (s, v) in smoothed.iter().zip(&values) {
            assert!((s - v).abs() < 1e-6);
        }
    }

    #[test]
    fn smoothing_reduces_spread() {
        let values: Vec<f64> = (0..40)
            .map(|i| if i % 2 == 0 { 400.0 } else { 800.0 })
            .collect();
        let smoothed = savgol_filter(&values);
        assert_eq!(smoothed.len(), values.len());
        let spread = |v: &[f64]| {
            v.iter().cloned().fold(f64::MIN, f64::max) - v.iter().cloned().fold(f64::MAX, f64::min)
        };
        assert!(spread(&smoothed) < spread(&values));
    }

    #[test]
    fn degenerate_inputs() {
        assert!(savgol_filter(&[]).is_empty());
        assert_eq!(savgol_filter(&[42.0]), vec![42.0]);
    }

    #[test]
    fn order_is_capped_by_length() {
        let values = [1.0, 4.0, 9.0];
        let fitted = polynomial_fit(&values, 10);
        for (f, v) in fitted.iter().zip(&values) {
            assert!((f - v).abs() < 1e-9);
        }
    }
}

//! One dimensional k-means over rainfall values.

use rainfall_core::error::{RainfallError, Result};

/// Upper bound on Lloyd iterations.
pub const MAX_ITERATIONS: usize = 300;

/// Outcome of a clustering: one label per input value.
///
/// Labels are ordered by centroid, label 0 being the driest cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct Clusters {
    pub labels: Vec<usize>,
    pub centroids: Vec<f64>,
}

impl Clusters {
    pub fn len(&self) -> usize {
        self.centroids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centroids.is_empty()
    }
}

/// Group `values` into at most `k` clusters.
///
/// Seeds are spread over the quantiles of the distinct values, so the result
/// is deterministic. Fewer than `k` clusters are formed when there are fewer
/// distinct values than `k`.
pub fn kmeans(values: &[f64], k: usize) -> Result<Clusters> {
    if k == 0 || values.is_empty() {
        return Err(RainfallError::InsufficientData {
            needed: 1,
            found: k.min(values.len()),
        });
    }

    let mut distinct = values.to_vec();
    distinct.sort_by(|a, b| a.total_cmp(b));
    distinct.dedup();
    let k = k.min(distinct.len());

    let mut centroids: Vec<f64> = if k == 1 {
        vec![distinct[distinct.len() / 2]]
    } else {
        (0..k)
            .map(|j| distinct[j * (distinct.len() - 1) / (k - 1)])
            .collect()
    };

    let mut labels = assign(values, &centroids);
    for iteration in 0..MAX_ITERATIONS {
        let mut sums = vec![0.0; k];
        let mut counts = vec![0usize; k];
        for (value, label) in values.iter().zip(&labels) {
            sums[*label] += value;
            counts[*label] += 1;
        }
        for c in 0..k {
            if counts[c] > 0 {
                centroids[c] = sums[c] / counts[c] as f64;
            }
        }

        let next = assign(values, &centroids);
        if next == labels {
            log::debug!("[Rainfall] kmeans: converged after {} iterations", iteration + 1);
            break;
        }
        labels = next;
    }

    // Relabel so that cluster order follows centroid order
    let mut order: Vec<usize> = (0..k).collect();
    order.sort_by(|a, b| centroids[*a].total_cmp(&centroids[*b]));
    let mut rank = vec![0usize; k];
    for (new_label, old_label) in order.iter().enumerate() {
        rank[*old_label] = new_label;
    }

    Ok(Clusters {
        labels: labels.iter().map(|label| rank[*label]).collect(),
        centroids: order.iter().map(|c| centroids[*c]).collect(),
    })
}

/// Index of the nearest centroid for every value, ties going to the lower index.
fn assign(values: &[f64], centroids: &[f64]) -> Vec<usize> {
    values
        .iter()
        .map(|value| {
            let mut best = 0;
            for (c, centroid) in centroids.iter().enumerate().skip(1) {
                if (value - centroid).abs() < (value - centroids[best]).abs() {
                    best = c;
                }
            }
            best
        })
        .collect()
}

//! One-dimensional Gaussian kernel density estimate.

use statrs::distribution::{Continuous, Normal};
use statrs::statistics::Statistics;

use crate::error::{McmcError, Result};

/// Gaussian KDE with Scott's-rule bandwidth h = n^(-1/5) · std.
#[derive(Debug, Clone)]
pub struct GaussianKde {
    data: Vec<f64>,
    bandwidth: f64,
    kernel: Normal,
}

impl GaussianKde {
    /// # Errors
    /// `EmptyDataset` for fewer than two points, `InvalidParameter` when the
    /// data has zero or non-finite spread.
    pub fn new(data: &[f64]) -> Result<Self> {
        if data.len() < 2 {
            return Err(McmcError::EmptyDataset);
        }
        let std = data.iter().std_dev();
        let bandwidth = (data.len() as f64).powf(-0.2) * std;
        if !(bandwidth.is_finite() && bandwidth > 0.0) {
            return Err(McmcError::InvalidParameter {
                name: "bandwidth",
                value: bandwidth,
                reason: "data must have finite, non-zero spread",
            });
        }
        let kernel = Normal::new(0.0, 1.0).map_err(|_| McmcError::InvalidParameter {
            name: "bandwidth",
            value: bandwidth,
            reason: "standard normal kernel unavailable",
        })?;
        Ok(Self {
            data: data.to_vec(),
            bandwidth,
            kernel,
        })
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Density at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        let h = self.bandwidth;
        let sum: f64 = self.data.iter().map(|&xi| self.kernel.pdf((x - xi) / h)).sum();
        sum / (self.data.len() as f64 * h)
    }

    pub fn evaluate_grid(&self, grid: &[f64]) -> Vec<f64> {
        grid.iter().map(|&x| self.evaluate(x)).collect()
    }
}

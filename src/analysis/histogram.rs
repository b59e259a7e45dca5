//! Equal-width histograms.

use crate::error::{McmcError, Result};

#[derive(Debug, Clone)]
pub struct Histogram {
    /// Bin edges, `bins + 1` values
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Histogram over the data's own range. A constant dataset gets a
    /// unit-wide range centered on its value.
    pub fn new(data: &[f64], bins: usize) -> Result<Self> {
        let (lo, hi) = finite_range(data).ok_or(McmcError::EmptyDataset)?;
        let (lo, hi) = if lo == hi { (lo - 0.5, hi + 0.5) } else { (lo, hi) };
        Self::with_range(data, bins, lo, hi)
    }

    /// Histogram over `[lo, hi]`; values outside the range (or NaN) are dropped.
    /// The last bin is closed on the right.
    pub fn with_range(data: &[f64], bins: usize, lo: f64, hi: f64) -> Result<Self> {
        if bins == 0 {
            return Err(McmcError::InvalidParameter {
                name: "bins",
                value: 0.0,
                reason: "must be at least 1",
            });
        }
        if !(lo.is_finite() && hi.is_finite() && hi > lo) {
            return Err(McmcError::InvalidParameter {
                name: "range",
                value: hi - lo,
                reason: "upper edge must exceed lower edge",
            });
        }

        let width = (hi - lo) / bins as f64;
        let edges = (0..=bins).map(|i| lo + i as f64 * width).collect();
        let mut counts = vec![0; bins];
        for &v in data {
            if !(lo..=hi).contains(&v) {
                continue;
            }
            let idx = (((v - lo) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }
        Ok(Self { edges, counts })
    }

    pub fn centers(&self) -> Vec<f64> {
        self.edges.windows(2).map(|e| 0.5 * (e[0] + e[1])).collect()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// (min, max) over the finite values in `data`.
pub(crate) fn finite_range(data: &[f64]) -> Option<(f64, f64)> {
    data.iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

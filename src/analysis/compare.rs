//! Side-by-side comparison tables of reference data and sampled coordinates.
//!
//! Rendering is left to external plotting tools; these tables carry one x
//! column followed by one column per named series.

use super::fes::kde_fes;
use super::histogram::{finite_range, Histogram};
use crate::error::{McmcError, Result};

/// Column-major table with a shared x column.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTable {
    pub x_label: String,
    pub x: Vec<f64>,
    pub series: Vec<(String, Vec<f64>)>,
}

impl ComparisonTable {
    pub fn new(x_label: impl Into<String>, x: Vec<f64>) -> Self {
        Self {
            x_label: x_label.into(),
            x,
            series: Vec::new(),
        }
    }

    /// Append a named series; its length must match the x column.
    pub fn push(&mut self, name: impl Into<String>, values: Vec<f64>) -> Result<()> {
        if values.len() != self.x.len() {
            return Err(McmcError::InvalidParameter {
                name: "series_length",
                value: values.len() as f64,
                reason: "series length must match the x column",
            });
        }
        self.series.push((name.into(), values));
        Ok(())
    }

    pub fn header(&self) -> Vec<&str> {
        std::iter::once(self.x_label.as_str())
            .chain(self.series.iter().map(|(name, _)| name.as_str()))
            .collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = Vec<f64>> + '_ {
        (0..self.x.len()).map(move |i| {
            std::iter::once(self.x[i])
                .chain(self.series.iter().map(|(_, v)| v[i]))
                .collect()
        })
    }
}

/// FES of the reference data and of every named distribution on `grid`.
pub fn compare_fes(
    grid: &[f64],
    reference: &[f64],
    dists: &[(&str, &[f64])],
    kt: f64,
    floor: f64,
) -> Result<ComparisonTable> {
    let mut table = ComparisonTable::new("x", grid.to_vec());
    table.push("ref", kde_fes(reference, grid, kt, floor)?)?;
    for (name, data) in dists {
        table.push(*name, kde_fes(data, grid, kt, floor)?)?;
    }
    Ok(table)
}

/// Histogram counts of the reference data and of every named distribution,
/// binned on common edges spanning all of them.
pub fn compare_hist(
    reference: &[f64],
    dists: &[(&str, &[f64])],
    bins: usize,
) -> Result<ComparisonTable> {
    let all = std::iter::once(reference).chain(dists.iter().map(|(_, d)| *d));
    let (lo, hi) = all
        .filter_map(finite_range)
        .reduce(|(a_lo, a_hi), (b_lo, b_hi)| (a_lo.min(b_lo), a_hi.max(b_hi)))
        .ok_or(McmcError::EmptyDataset)?;
    let (lo, hi) = if lo == hi { (lo - 0.5, hi + 0.5) } else { (lo, hi) };

    let ref_hist = Histogram::with_range(reference, bins, lo, hi)?;
    let mut table = ComparisonTable::new("bin_center", ref_hist.centers());
    table.push("ref", counts_as_f64(&ref_hist))?;
    for (name, data) in dists {
        let hist = Histogram::with_range(data, bins, lo, hi)?;
        table.push(*name, counts_as_f64(&hist))?;
    }
    Ok(table)
}

fn counts_as_f64(hist: &Histogram) -> Vec<f64> {
    hist.counts.iter().map(|&c| c as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::linspace;

    #[test]
    fn test_compare_hist_shares_bins() {
        let reference = [-2.0, -1.0, 0.0, 1.0, 2.0];
        let x1 = [-2.0, -1.9];
        let x2 = [1.9, 2.0];
        let table = compare_hist(&reference, &[("x1", &x1[..]), ("x2", &x2[..])], 4).unwrap();
        assert_eq!(table.header(), vec!["bin_center", "ref", "x1", "x2"]);
        assert_eq!(table.x.len(), 4);
        assert_eq!(table.series[1].1, vec![2.0, 0.0, 0.0, 0.0]);
        assert_eq!(table.series[2].1, vec![0.0, 0.0, 0.0, 2.0]);

        let rows: Vec<Vec<f64>> = table.rows().collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].len(), 4);
    }

    #[test]
    fn test_compare_fes_columns() {
        let reference: Vec<f64> = (0..50).map(|i| i as f64 * 0.1 - 2.5).collect();
        let samples: Vec<f64> = (0..50).map(|i| i as f64 * 0.02).collect();
        let grid = linspace(-3.0, 3.0, 31);
        let table = compare_fes(&grid, &reference, &[("x1", samples.as_slice())], 1.0, 0.01).unwrap();
        assert_eq!(table.series.len(), 2);
        assert!(table.series.iter().all(|(_, v)| v.len() == grid.len()));
    }

    #[test]
    fn test_push_length_mismatch() {
        let mut table = ComparisonTable::new("x", vec![0.0, 1.0]);
        assert!(table.push("y", vec![1.0]).is_err());
    }
}

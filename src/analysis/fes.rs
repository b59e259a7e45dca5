//! Free-energy surfaces from densities.
//!
//! F(x) = -kT · ln p(x), shifted so that the lowest finite value is zero.
//! Densities below a floor are treated as unsampled and map to NaN.

use super::kde::GaussianKde;
use crate::error::{ensure_positive, Result};

/// kT in kJ/mol at 300 K
pub const DEFAULT_FES_KT: f64 = 2.494339;
/// Densities below this are dropped from the surface
pub const DEFAULT_DENSITY_FLOOR: f64 = 0.01;

/// `points` evenly spaced values from `min` to `max` inclusive.
pub fn linspace(min: f64, max: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let dx = (max - min) / (points - 1) as f64;
            (0..points).map(|i| min + i as f64 * dx).collect()
        }
    }
}

/// Convert a density curve into a free-energy curve.
pub fn density_to_fes(density: &[f64], kt: f64, floor: f64) -> Vec<f64> {
    let mut fes: Vec<f64> = density
        .iter()
        .map(|&p| if p < floor || p <= 0.0 { f64::NAN } else { -kt * p.ln() })
        .collect();

    let min = fes
        .iter()
        .copied()
        .filter(|f| f.is_finite())
        .fold(f64::INFINITY, f64::min);
    if min.is_finite() {
        fes.iter_mut().for_each(|f| *f -= min);
    }
    fes
}

/// KDE of `samples` on `grid`, converted to a free-energy curve.
pub fn kde_fes(samples: &[f64], grid: &[f64], kt: f64, floor: f64) -> Result<Vec<f64>> {
    let kt = ensure_positive("fes_kt", kt)?;
    let kde = GaussianKde::new(samples)?;
    Ok(density_to_fes(&kde.evaluate_grid(grid), kt, floor))
}

/// KDE of `samples` on `grid`, min-max scaled to [0, 1].
pub fn normalized_kde(samples: &[f64], grid: &[f64]) -> Result<Vec<f64>> {
    let kde = GaussianKde::new(samples)?;
    let mut y = kde.evaluate_grid(grid);
    let lo = y.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = y.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = hi - lo;
    if span > 0.0 {
        y.iter_mut().for_each(|v| *v = (*v - lo) / span);
    }
    Ok(y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linspace() {
        let grid = linspace(-3.0, 3.0, 7);
        assert_eq!(grid.len(), 7);
        assert_relative_eq!(grid[0], -3.0);
        assert_relative_eq!(grid[3], 0.0, epsilon = 1e-12);
        assert_relative_eq!(grid[6], 3.0, epsilon = 1e-12);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
    }

    #[test]
    fn test_density_to_fes() {
        let p = [0.005, 0.1, 0.4, 0.2];
        let fes = density_to_fes(&p, 1.0, 0.01);
        assert!(fes[0].is_nan());
        assert_relative_eq!(fes[2], 0.0, epsilon = 1e-12);
        assert_relative_eq!(fes[1], (0.4f64 / 0.1).ln(), epsilon = 1e-12);
        assert_relative_eq!(fes[3], 2f64.ln(), epsilon = 1e-12);
    }

    #[test]
    fn test_all_below_floor() {
        let fes = density_to_fes(&[0.0, 0.001], DEFAULT_FES_KT, DEFAULT_DENSITY_FLOOR);
        assert!(fes.iter().all(|f| f.is_nan()));
    }

    #[test]
    fn test_bimodal_fes_has_two_minima() {
        let samples: Vec<f64> = (0..400)
            .map(|i| {
                let jitter = (i % 20) as f64 * 0.02 - 0.19;
                if i % 2 == 0 { -2.0 + jitter } else { 2.0 + jitter }
            })
            .collect();
        let grid = linspace(-3.0, 3.0, 61);
        let fes = kde_fes(&samples, &grid, 1.0, 0.01).unwrap();
        let at = |x: f64| fes[((x + 3.0) / 0.1).round() as usize];
        assert!(at(0.0).is_nan() || at(0.0) > at(-2.0));
        assert!(at(-2.0) < 0.5 && at(2.0) < 0.5);

        let norm = normalized_kde(&samples, &grid).unwrap();
        let max = norm.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = norm.iter().copied().fold(f64::INFINITY, f64::min);
        assert_relative_eq!(max, 1.0, epsilon = 1e-12);
        assert_relative_eq!(min, 0.0, epsilon = 1e-12);
    }
}

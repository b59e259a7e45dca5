//! Zero-mean quadratic prior on a single coordinate.

use super::traits::CoordinatePrior;
use crate::error::{ensure_positive, Result};

/// Prior width wide enough to cover both wells of the default problem
pub const DEFAULT_PRIOR_WIDTH: f64 = 3.0;

/// P(x) = kT · ½ · (x / width)²
#[inline]
pub fn prior_energy(x: f64, width: f64, kt: f64) -> f64 {
    kt * 0.5 * (x / width).powi(2)
}

#[derive(Debug, Clone, Copy)]
pub struct GaussianPrior {
    pub width: f64,
    pub kt: f64,
}

impl GaussianPrior {
    pub fn new(width: f64, kt: f64) -> Result<Self> {
        Ok(Self {
            width: ensure_positive("prior_width", width)?,
            kt: ensure_positive("kt", kt)?,
        })
    }
}

impl CoordinatePrior for GaussianPrior {
    fn energy(&self, x: f64) -> f64 {
        prior_energy(x, self.width, self.kt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_at_origin() {
        for &width in &[0.5, 1.0, 3.0, 100.0] {
            for &kt in &[0.1, 1.0, 2.494339] {
                assert_eq!(prior_energy(0.0, width, kt), 0.0);
            }
        }
    }

    #[test]
    fn test_increasing_in_magnitude() {
        let prior = GaussianPrior::new(DEFAULT_PRIOR_WIDTH, 1.0).unwrap();
        let xs = [0.0, 0.1, 0.5, 1.0, 3.0, 10.0];
        for pair in xs.windows(2) {
            assert!(prior.energy(pair[1]) > prior.energy(pair[0]));
            assert!(prior.energy(-pair[1]) > prior.energy(-pair[0]));
        }
        assert_relative_eq!(prior.energy(3.0), 0.5, epsilon = 1e-12);
        assert_relative_eq!(prior.energy(-2.0), prior.energy(2.0), epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_bad_width() {
        assert!(GaussianPrior::new(0.0, 1.0).is_err());
        assert!(GaussianPrior::new(3.0, 0.0).is_err());
    }
}

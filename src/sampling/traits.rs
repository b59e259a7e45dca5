//! Random draws consumed by the dual-coordinate sampler.

use rand::Rng;
use rand_distr::{Distribution, Exp1, Normal};

use crate::error::{ensure_positive, McmcError, Result};

/// Source of the four random numbers a sampler iteration needs.
///
/// Splitting this out of the sampler lets tests script exact draw
/// sequences through every acceptance branch.
pub trait DrawSource {
    /// Proposed displacements (dx1, dx2).
    fn displacements(&mut self) -> [f64; 2];

    /// Acceptance thresholds, each distributed as -ln U(0, 1).
    fn thresholds(&mut self) -> [f64; 2];
}

/// Gaussian displacements and exponential thresholds from an `Rng`.
#[derive(Debug, Clone)]
pub struct GaussianDraws<R: Rng> {
    rng: R,
    normal: Normal<f64>,
}

impl<R: Rng> GaussianDraws<R> {
    pub fn new(rng: R, proposal_std: f64) -> Result<Self> {
        let std = ensure_positive("proposal_std", proposal_std)?;
        let normal = Normal::new(0.0, std).map_err(|_| McmcError::InvalidParameter {
            name: "proposal_std",
            value: std,
            reason: "not a valid normal deviation",
        })?;
        Ok(Self { rng, normal })
    }

    pub fn proposal_std(&self) -> f64 {
        self.normal.std_dev()
    }
}

impl<R: Rng> DrawSource for GaussianDraws<R> {
    fn displacements(&mut self) -> [f64; 2] {
        [
            self.normal.sample(&mut self.rng),
            self.normal.sample(&mut self.rng),
        ]
    }

    fn thresholds(&mut self) -> [f64; 2] {
        [Exp1.sample(&mut self.rng), Exp1.sample(&mut self.rng)]
    }
}

impl<D: DrawSource + ?Sized> DrawSource for &mut D {
    fn displacements(&mut self) -> [f64; 2] {
        (**self).displacements()
    }

    fn thresholds(&mut self) -> [f64; 2] {
        (**self).thresholds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_draw_statistics() {
        let mut draws = GaussianDraws::new(StdRng::seed_from_u64(7), 0.1).unwrap();
        let n = 20_000;
        let mut sum_dx = 0.0;
        let mut sum_dx2 = 0.0;
        let mut sum_t = 0.0;
        for _ in 0..n {
            let [a, b] = draws.displacements();
            sum_dx += a + b;
            sum_dx2 += a * a + b * b;
            let [t1, t2] = draws.thresholds();
            assert!(t1 >= 0.0 && t2 >= 0.0);
            sum_t += t1 + t2;
        }
        let m = 2.0 * n as f64;
        assert_relative_eq!(sum_dx / m, 0.0, epsilon = 5e-3);
        assert_relative_eq!((sum_dx2 / m).sqrt(), 0.1, epsilon = 5e-3);
        // Exp(1) has unit mean
        assert_relative_eq!(sum_t / m, 1.0, epsilon = 0.05);
    }

    #[test]
    fn test_rejects_bad_std() {
        assert!(GaussianDraws::new(StdRng::seed_from_u64(0), 0.0).is_err());
        assert!(GaussianDraws::new(StdRng::seed_from_u64(0), f64::NAN).is_err());
        let draws = GaussianDraws::new(StdRng::seed_from_u64(0), 0.25).unwrap();
        assert_eq!(draws.proposal_std(), 0.25);
    }
}

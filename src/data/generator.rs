//! Synthetic double-well observations.
//!
//! Every image picks one of the true centers uniformly at random and adds
//! Gaussian noise around it.

use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use tracing::info;

use crate::error::{ensure_finite, ensure_positive, McmcError, Result};

/// Generate `n_images` noisy scalar observations around `centers`.
///
/// # Arguments
/// * `n_images` - Number of images to create (must be > 0)
/// * `centers` - True centers of the potential wells
/// * `sigma` - Standard deviation of the Gaussian noise
/// * `rng` - Random source
pub fn generate_images<R: Rng + ?Sized>(
    n_images: usize,
    centers: &[f64],
    sigma: f64,
    rng: &mut R,
) -> Result<Vec<f64>> {
    if n_images == 0 {
        return Err(McmcError::EmptyDataset);
    }
    if centers.is_empty() {
        return Err(McmcError::InvalidParameter {
            name: "centers",
            value: 0.0,
            reason: "at least one center is required",
        });
    }
    for &c in centers {
        ensure_finite("center", c)?;
    }
    let sigma = ensure_positive("noise_sigma", sigma)?;
    let noise = Normal::new(0.0, sigma).map_err(|_| McmcError::InvalidParameter {
        name: "noise_sigma",
        value: sigma,
        reason: "not a valid normal deviation",
    })?;

    info!(n_images, ?centers, sigma, "generating images");
    let images = (0..n_images)
        .map(|_| {
            // centers is non-empty, so choose always yields
            let center = centers.choose(rng).copied().unwrap_or_default();
            center + noise.sample(rng)
        })
        .collect();
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_moments() {
        let mut rng = StdRng::seed_from_u64(42);
        let images = generate_images(20_000, &[-2.0, 2.0], 0.5, &mut rng).unwrap();
        assert_eq!(images.len(), 20_000);

        // Equal-weight mixture of ±2: mean 0, variance 4 + σ²
        let n = images.len() as f64;
        let mean = images.iter().sum::<f64>() / n;
        let var = images.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        assert_relative_eq!(mean, 0.0, epsilon = 0.05);
        assert_relative_eq!(var, 4.25, epsilon = 0.1);

        let left = images.iter().filter(|&&v| v < 0.0).count() as f64 / n;
        assert_relative_eq!(left, 0.5, epsilon = 0.02);
    }

    #[test]
    fn test_same_seed_same_images() {
        let a = generate_images(100, &[-2.0, 2.0], 2.0, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = generate_images(100, &[-2.0, 2.0], 2.0, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_bad_input() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            generate_images(0, &[1.0], 1.0, &mut rng),
            Err(McmcError::EmptyDataset)
        ));
        assert!(generate_images(10, &[], 1.0, &mut rng).is_err());
        assert!(generate_images(10, &[1.0], 0.0, &mut rng).is_err());
        assert!(generate_images(10, &[f64::NAN], 1.0, &mut rng).is_err());
    }
}

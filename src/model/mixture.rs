//! Two-component Gaussian mixture likelihood.
//!
//! Each observation v is explained by the equal-weight mixture
//!
//!   L(v | x1, x2) = 0.5·exp(-(x1 - v)²/2σ²) + 0.5·exp(-(x2 - v)²/2σ²)
//!
//! and the energy is E = -kT · Σ_v ln L(v | x1, x2). The per-observation
//! logarithm is taken with log-sum-exp so that tiny σ or distant
//! coordinates give large finite energies instead of ln(0).

use std::f64::consts::LN_2;

use super::traits::{Configuration, EnergyModel};
use crate::error::{ensure_positive, McmcError, Result};

/// Default likelihood width σ
pub const DEFAULT_SIGMA: f64 = 1.0;
/// Default temperature kT
pub const DEFAULT_KT: f64 = 1.0;

/// ln(exp(a) + exp(b)) without overflow or underflow.
#[inline]
fn log_add_exp(a: f64, b: f64) -> f64 {
    let m = a.max(b);
    if m == f64::NEG_INFINITY {
        return f64::NEG_INFINITY;
    }
    m + (-(a - b).abs()).exp().ln_1p()
}

/// Mixture energy of `x` against `images`.
///
/// Pure function of its inputs. An empty `images` slice yields 0.0, so the
/// public entry point is the validating [`MixtureLikelihood::new`].
pub(crate) fn mixture_energy(x: &Configuration, images: &[f64], sigma: f64, kt: f64) -> f64 {
    let inv_two_var = 1.0 / (2.0 * sigma * sigma);
    let log_likelihood: f64 = images
        .iter()
        .map(|&v| {
            let a = -(x[0] - v).powi(2) * inv_two_var;
            let b = -(x[1] - v).powi(2) * inv_two_var;
            log_add_exp(a, b) - LN_2
        })
        .sum();
    -kt * log_likelihood
}

/// Mixture likelihood bound to a read-only dataset.
#[derive(Debug, Clone, Copy)]
pub struct MixtureLikelihood<'a> {
    images: &'a [f64],
    sigma: f64,
    kt: f64,
}

impl<'a> MixtureLikelihood<'a> {
    /// # Errors
    /// `EmptyDataset` for zero images, `InvalidParameter` for σ or kT that
    /// are not finite and positive.
    pub fn new(images: &'a [f64], sigma: f64, kt: f64) -> Result<Self> {
        if images.is_empty() {
            return Err(McmcError::EmptyDataset);
        }
        let sigma = ensure_positive("sigma", sigma)?;
        let kt = ensure_positive("kt", kt)?;
        Ok(Self { images, sigma, kt })
    }

    pub fn images(&self) -> &'a [f64] {
        self.images
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn kt(&self) -> f64 {
        self.kt
    }
}

impl EnergyModel for MixtureLikelihood<'_> {
    fn energy(&self, x: &Configuration) -> f64 {
        mixture_energy(x, self.images, self.sigma, self.kt)
    }
}

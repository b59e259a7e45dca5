//! Energy traits for the double-well sampler.
//!
//! `EnergyModel` scores a full two-coordinate configuration, while
//! `CoordinatePrior` scores one coordinate at a time.

use nalgebra::Vector2;

/// Current estimate of the two well centers (x1, x2).
pub type Configuration = Vector2<f64>;

/// Energy of a whole configuration (lower is more probable).
pub trait EnergyModel {
    /// Evaluate the energy at `x`. Must not mutate any shared state.
    fn energy(&self, x: &Configuration) -> f64;

    /// Numerical gradient using central difference.
    fn numerical_gradient(&self, x: &Configuration, h: f64) -> Configuration {
        let mut grad = Configuration::zeros();
        for axis in 0..2 {
            let mut x_fwd = *x;
            let mut x_bwd = *x;
            x_fwd[axis] += h;
            x_bwd[axis] -= h;
            grad[axis] = (self.energy(&x_fwd) - self.energy(&x_bwd)) / (2.0 * h);
        }
        grad
    }
}

/// Regularization energy applied to a single coordinate.
pub trait CoordinatePrior {
    fn energy(&self, x: f64) -> f64;
}

impl<T: EnergyModel + ?Sized> EnergyModel for &T {
    fn energy(&self, x: &Configuration) -> f64 {
        (**self).energy(x)
    }
}

impl<T: CoordinatePrior + ?Sized> CoordinatePrior for &T {
    fn energy(&self, x: f64) -> f64 {
        (**self).energy(x)
    }
}

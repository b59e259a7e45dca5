//! Model module - likelihood and prior energies for the double-well problem.

mod traits;
mod mixture;
mod prior;

pub use traits::{Configuration, EnergyModel, CoordinatePrior};
pub use mixture::{MixtureLikelihood, DEFAULT_KT, DEFAULT_SIGMA};
pub use prior::{prior_energy, GaussianPrior, DEFAULT_PRIOR_WIDTH};

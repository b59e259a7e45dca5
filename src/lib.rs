//! Double-well MCMC - recover two hidden well centers from noisy data
//!
//! This crate samples the two centers of a synthetic double-well dataset with
//! a dual-coordinate Metropolis sampler driven by a Gaussian-mixture energy.

pub mod error;
pub mod model;
pub mod sampling;
pub mod data;
pub mod analysis;
pub mod io;

// Re-export commonly used types at crate root
pub use error::{McmcError, Result};
pub use model::{Configuration, EnergyModel, CoordinatePrior, MixtureLikelihood, GaussianPrior, prior_energy};
pub use sampling::{DualCoordinateSampler, DrawSource, GaussianDraws, SamplerParams, RejectionPolicy, PriorSign, SampleSet, SamplingStats, StepOutcome, sample_double_well};
pub use data::generate_images;
pub use analysis::{GaussianKde, Histogram, ComparisonTable, compare_fes, compare_hist, density_to_fes, kde_fes, linspace};
pub use io::{RunConfig, read_config};

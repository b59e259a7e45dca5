//! Sampling module - the dual-coordinate Metropolis sampler.

mod traits;
mod params;
mod dual;

pub use traits::{DrawSource, GaussianDraws};
pub use params::{PriorSign, RejectionPolicy, SamplerParams, DEFAULT_PROPOSAL_STD};
pub use dual::{sample_double_well, DualCoordinateSampler, SampleSet, SamplingStats, StepOutcome};
